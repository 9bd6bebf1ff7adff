use crate::core::Politician;
use colored::Colorize;
use std::fmt;

/// Records that take part in analysis: those with a stance score.
pub fn scored(politicians: &[Politician]) -> Vec<Politician> {
    politicians
        .iter()
        .filter(|p| p.has_stance_score())
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AffiliationTally {
    pub democrats: usize,
    /// Everything that is not `DEMOCRAT`.
    pub republicans: usize,
}

impl AffiliationTally {
    pub fn total(&self) -> usize {
        self.democrats + self.republicans
    }

    /// Tally line with the counts colored for terminal output.
    pub fn colored_line(&self) -> String {
        format!(
            "{} DEMOCRATS | {} REPUBLICANS",
            self.democrats.to_string().blue().bold(),
            self.republicans.to_string().red().bold()
        )
    }
}

impl fmt::Display for AffiliationTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} DEMOCRATS | {} REPUBLICANS", self.democrats, self.republicans)
    }
}

/// Count Democrats among scored records; the remainder is reported as Republicans.
pub fn count_bias(politicians: &[Politician]) -> AffiliationTally {
    let scored = politicians.iter().filter(|p| p.has_stance_score());
    let (democrats, total) = scored.fold((0, 0), |(democrats, total), politician| {
        (democrats + usize::from(politician.is_democrat()), total + 1)
    });

    AffiliationTally {
        democrats,
        republicans: total - democrats,
    }
}
