// Export modules for library usage
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod curation;
pub mod io;
pub mod lookup;
pub mod plot;

// Re-export commonly used types
pub use crate::core::{Affiliation, Error, Politician, Result};

pub use crate::analysis::{count_bias, scored, AffiliationTally};
pub use crate::config::StancemapConfig;
pub use crate::curation::{CuratedBuffer, CurationReport, Curator};
pub use crate::lookup::{AgeResolver, LookupError, SearchProxyResolver};
pub use crate::plot::{build_stance_plot, PlotSpec};
