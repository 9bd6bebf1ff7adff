mod core;
mod loader;

pub use self::core::{PlotConfig, SearchConfig, StancemapConfig};
pub use self::loader::{
    directory_ancestors, discover_config, load_config, load_config_from, parse_config,
    CONFIG_FILE_NAME,
};
