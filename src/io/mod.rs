pub mod writers;

pub use writers::{create_plot_writer, HtmlPlotWriter, JsonPlotWriter, PlotFormat, PlotWriter};

use crate::core::{Error, Politician, Result};
use anyhow::Context;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> anyhow::Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            fs::create_dir_all(parent).map_err(|e| {
                Error::file_system("Failed to create directory", parent, Some(e))
            })
        }
        _ => Ok(()),
    }
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}

/// Read a JSON array of politicians.
pub fn read_politicians(path: &Path) -> Result<Vec<Politician>> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::file_system("Failed to read file", path, Some(e)))?;
    serde_json::from_str(&content).map_err(|e| Error::data(path, e))
}

/// Read the curated list, treating a missing file as an empty list.
pub fn read_curated_or_empty(path: &Path) -> Result<Vec<Politician>> {
    if file_exists(path) {
        read_politicians(path)
    } else {
        log::debug!("{} not found, starting from an empty curated list", path.display());
        Ok(Vec::new())
    }
}

/// Overwrite `path` with the list as a flat JSON array.
pub fn write_politicians(path: &Path, politicians: &[Politician]) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string(politicians).map_err(|e| Error::data(path, e))?;
    fs::write(path, json).map_err(|e| Error::file_system("Failed to write file", path, Some(e)))
}
