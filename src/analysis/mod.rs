//! Affiliation tally over curated records with a known stance score.
//!
//! The tally is a two-bucket split: Democrats, and everyone else reported as
//! Republicans. Third-party or missing affiliations land in the second bucket.

pub mod tally;

pub use tally::{count_bias, scored, AffiliationTally};
