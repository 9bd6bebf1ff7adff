// Test utility module for stancemap integration tests
#![allow(dead_code)]

use stancemap::{AgeResolver, LookupError, StancemapConfig};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

/// Resolver answering from a fixed name -> age table. Unknown names fail.
#[derive(Clone, Default)]
pub struct TableResolver {
    ages: Arc<HashMap<String, u32>>,
    calls: Arc<AtomicUsize>,
}

impl TableResolver {
    pub fn new(entries: &[(&str, u32)]) -> Self {
        Self {
            ages: Arc::new(
                entries
                    .iter()
                    .map(|(name, age)| (name.to_string(), *age))
                    .collect(),
            ),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AgeResolver for TableResolver {
    async fn resolve_age(&self, first_name: &str, last_name: &str) -> Result<u32, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.ages
            .get(&format!("{first_name} {last_name}"))
            .copied()
            .ok_or(LookupError::AgeNotFound)
    }
}

/// Temp workspace with a source file and config pointing into it.
pub struct Workspace {
    pub dir: TempDir,
    pub config: StancemapConfig,
}

impl Workspace {
    pub fn with_source(source_json: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let source = dir.path().join("data/politicians-swco_all.json");
        std::fs::create_dir_all(source.parent().unwrap()).unwrap();
        std::fs::write(&source, source_json).expect("Failed to write source file");

        let mut config = StancemapConfig::default();
        config.source = source;
        config.curated = dir.path().join("data/politicians-curated.json");
        config.plot.output = dir.path().join("out/stance-vs-age.html");

        Self { dir, config }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn curated_path(&self) -> PathBuf {
        self.config.curated.clone()
    }

    pub fn read_curated(&self) -> Vec<stancemap::Politician> {
        stancemap::io::read_politicians(&self.config.curated).expect("curated file should parse")
    }
}

pub const ANA_AND_BOB: &str = r#"[
  {"id":"1","firstName":"Ana","lastName":"Silva","computedStanceScore":0.8,"politicalAffiliationCategory":"DEMOCRAT"},
  {"id":"2","firstName":"Bob","lastName":"Lima","computedStanceScore":null,"politicalAffiliationCategory":"REPUBLICAN"}
]"#;

pub fn sorted_ids(politicians: &[stancemap::Politician]) -> Vec<String> {
    let mut ids: Vec<String> = politicians.iter().map(|p| p.id.clone()).collect();
    ids.sort();
    ids
}
