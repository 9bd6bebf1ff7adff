use super::buffer::CuratedBuffer;
use crate::core::{Politician, Result};
use crate::io;
use crate::lookup::AgeResolver;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurationReport {
    pub added: usize,
    pub skipped: usize,
    /// Display names of records whose lookup failed this run.
    pub failed: Vec<String>,
}

impl fmt::Display for CurationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} added, {} already curated, {} failed",
            self.added,
            self.skipped,
            self.failed.len()
        )
    }
}

#[derive(Debug)]
pub struct Curated {
    /// Previously curated records followed by this run's additions, in
    /// completion order.
    pub politicians: Vec<Politician>,
    pub report: CurationReport,
}

enum Outcome {
    Added,
    Skipped,
    Failed(String),
}

/// Fetches missing ages and merges newly aged records into the curated list.
pub struct Curator<R> {
    resolver: Arc<R>,
    max_concurrency: usize,
}

impl<R: AgeResolver> Curator<R> {
    pub fn new(resolver: R) -> Self {
        Self::from_shared(Arc::new(resolver))
    }

    pub fn from_shared(resolver: Arc<R>) -> Self {
        Self {
            resolver,
            max_concurrency: 0,
        }
    }

    /// Bound in-flight lookups. 0 leaves the fan-out unbounded.
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency;
        self
    }

    /// Curate every source record concurrently and wait for all of them.
    ///
    /// A failed lookup drops that record for this run only; it stays eligible
    /// next time because it never reaches the curated list.
    pub async fn curate(&self, source: Vec<Politician>, existing: Vec<Politician>) -> Curated {
        let buffer = Arc::new(CuratedBuffer::new(existing));
        let permits = (self.max_concurrency > 0)
            .then(|| Arc::new(Semaphore::new(self.max_concurrency)));

        let mut tasks = JoinSet::new();
        for politician in source {
            tasks.spawn(curate_one(
                Arc::clone(&self.resolver),
                Arc::clone(&buffer),
                permits.clone(),
                politician,
            ));
        }

        let mut report = CurationReport::default();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Outcome::Added) => report.added += 1,
                Ok(Outcome::Skipped) => report.skipped += 1,
                Ok(Outcome::Failed(name)) => report.failed.push(name),
                Err(e) => {
                    log::error!("Curation task did not complete: {}", e);
                    report.failed.push(format!("<task {}>", e));
                }
            }
        }

        let politicians = buffer.take();

        log::info!("Curation finished: {}", report);
        Curated {
            politicians,
            report,
        }
    }

    /// Curate `source_path` into `curated_path`.
    ///
    /// The curated file is read first (missing means empty) and overwritten
    /// once, after every lookup has settled.
    pub async fn curate_file(&self, source_path: &Path, curated_path: &Path) -> Result<CurationReport> {
        let source = io::read_politicians(source_path)?;
        let existing = io::read_curated_or_empty(curated_path)?;
        log::debug!(
            "Curating {} source records against {} curated",
            source.len(),
            existing.len()
        );

        let curated = self.curate(source, existing).await;
        io::write_politicians(curated_path, &curated.politicians)?;
        Ok(curated.report)
    }
}

async fn curate_one<R: AgeResolver>(
    resolver: Arc<R>,
    buffer: Arc<CuratedBuffer>,
    permits: Option<Arc<Semaphore>>,
    mut politician: Politician,
) -> Outcome {
    let name = politician.display_name();
    if buffer.contains(&politician.id) {
        log::info!("{} already curated..", name);
        return Outcome::Skipped;
    }

    let _permit = match permits {
        Some(semaphore) => semaphore.acquire_owned().await.ok(),
        None => None,
    };

    match resolver
        .resolve_age(&politician.first_name, &politician.last_name)
        .await
    {
        Ok(age) => {
            politician.age = Some(age);
            if buffer.insert_if_absent(politician) {
                log::info!("{} added to curated list.", name);
                Outcome::Added
            } else {
                log::info!("{} already curated..", name);
                Outcome::Skipped
            }
        }
        Err(e) => {
            log::warn!("Failed to get age for {}: {}", name, e);
            Outcome::Failed(name)
        }
    }
}
