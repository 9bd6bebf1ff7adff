use crate::io::PlotFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub fn default_source_path() -> PathBuf {
    PathBuf::from("data/politicians-swco_all.json")
}

pub fn default_curated_path() -> PathBuf {
    PathBuf::from("data/politicians-curated.json")
}

pub fn default_count_bias() -> bool {
    true
}

pub fn default_endpoint() -> String {
    "https://realtime.oxylabs.io/v1/queries".to_string()
}

pub fn default_search_source() -> String {
    "google_search".to_string()
}

pub fn default_domain() -> String {
    "com".to_string()
}

pub fn default_results_language() -> String {
    "pt".to_string()
}

pub fn default_user_env() -> String {
    "OXYLABS_USER".to_string()
}

pub fn default_pass_env() -> String {
    "OXYLABS_PASS".to_string()
}

pub fn default_plot_output() -> PathBuf {
    PathBuf::from("data/stance-vs-age.html")
}

/// Root configuration structure for stancemap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StancemapConfig {
    /// Scraped politician list (read-only)
    #[serde(default = "default_source_path")]
    pub source: PathBuf,

    /// Curated list, rewritten by each curation run
    #[serde(default = "default_curated_path")]
    pub curated: PathBuf,

    /// Fetch missing ages before plotting
    #[serde(default)]
    pub curate: bool,

    /// Print the affiliation tally
    #[serde(default = "default_count_bias")]
    pub count_bias: bool,

    /// Cap on in-flight age lookups; 0 means unbounded
    #[serde(default)]
    pub max_concurrency: usize,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub plot: PlotConfig,
}

impl Default for StancemapConfig {
    fn default() -> Self {
        Self {
            source: default_source_path(),
            curated: default_curated_path(),
            curate: false,
            count_bias: default_count_bias(),
            max_concurrency: 0,
            search: SearchConfig::default(),
            plot: PlotConfig::default(),
        }
    }
}

/// Search-proxy request settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Scraper source understood by the proxy
    #[serde(default = "default_search_source")]
    pub source: String,

    #[serde(default = "default_domain")]
    pub domain: String,

    #[serde(default = "default_results_language")]
    pub results_language: String,

    /// Environment variable holding the API user
    #[serde(default = "default_user_env")]
    pub user_env: String,

    /// Environment variable holding the API password
    #[serde(default = "default_pass_env")]
    pub pass_env: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            source: default_search_source(),
            domain: default_domain(),
            results_language: default_results_language(),
            user_env: default_user_env(),
            pass_env: default_pass_env(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotConfig {
    #[serde(default = "default_plot_output")]
    pub output: PathBuf,

    #[serde(default)]
    pub format: PlotFormat,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            output: default_plot_output(),
            format: PlotFormat::default(),
        }
    }
}
