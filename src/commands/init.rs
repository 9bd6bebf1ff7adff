use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::Path;

pub const DEFAULT_CONFIG: &str = r#"# Stancemap Configuration

# Scraped politician list (read-only)
source = "data/politicians-swco_all.json"
# Curated list with ages, rewritten by each curation run
curated = "data/politicians-curated.json"

# Fetch missing ages before plotting (needs search credentials)
curate = false
# Print the DEMOCRATS | REPUBLICANS tally
count_bias = true
# Cap on in-flight age lookups, 0 = unbounded
max_concurrency = 0

[search]
endpoint = "https://realtime.oxylabs.io/v1/queries"
source = "google_search"
domain = "com"
results_language = "pt"
# Names of the environment variables holding the credentials
user_env = "OXYLABS_USER"
pass_env = "OXYLABS_PASS"

[plot]
output = "data/stance-vs-age.html"
format = "html"
"#;

pub fn init_config_in(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)
}
