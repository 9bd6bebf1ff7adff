use crate::io::PlotFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stancemap")]
#[command(
    about = "Enrich politicians with scraped ages and plot age against stance score",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Curate (optionally), tally and plot
    Run {
        /// Configuration file (defaults to the nearest stancemap.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Scraped politician list
        #[arg(long)]
        source: Option<PathBuf>,

        /// Curated politician list, rewritten when curating
        #[arg(long)]
        curated: Option<PathBuf>,

        /// Fetch missing ages through the search proxy before plotting
        #[arg(long, conflicts_with = "no_curate")]
        curate: bool,

        /// Plot the existing curated file without fetching ages
        #[arg(long = "no-curate")]
        no_curate: bool,

        /// Print the DEMOCRATS | REPUBLICANS tally
        #[arg(long = "count-bias", conflicts_with = "no_count_bias")]
        count_bias: bool,

        /// Skip the affiliation tally
        #[arg(long = "no-count-bias")]
        no_count_bias: bool,

        /// Plot output file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Plot output format
        #[arg(short, long, value_enum)]
        format: Option<PlotFormat>,

        /// Maximum in-flight age lookups (0 = unbounded)
        #[arg(long = "max-concurrency", env = "STANCEMAP_MAX_CONCURRENCY")]
        max_concurrency: Option<usize>,

        /// Disable colored output
        #[arg(long)]
        plain: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Write a default stancemap.toml in the current directory
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}
