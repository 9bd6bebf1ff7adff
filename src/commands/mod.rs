pub mod init;
pub mod run;

pub use run::{apply_overrides, handle_run, resolve_config, run_pipeline, RunOverrides, RunSummary};
