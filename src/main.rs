use anyhow::Result;
use stancemap::cli::{self, Commands};
use stancemap::commands::{self, RunOverrides};

// Main orchestrator function
fn main() -> Result<()> {
    let cli = cli::parse_args();

    match cli.command {
        Commands::Run {
            config,
            source,
            curated,
            curate,
            no_curate,
            count_bias,
            no_count_bias,
            output,
            format,
            max_concurrency,
            plain,
            verbosity,
        } => {
            cli::init_logging(verbosity);
            cli::configure_color(plain);

            let overrides = RunOverrides {
                config,
                source,
                curated,
                curate: switch_override(curate, no_curate),
                count_bias: switch_override(count_bias, no_count_bias),
                output,
                format,
                max_concurrency,
            };
            let config = commands::resolve_config(overrides)?;
            commands::handle_run(config, plain)
        }
        Commands::Init { force } => {
            cli::init_logging(0);
            commands::init::init_config(force)
        }
    }
}

// Pure function mapping an on/off flag pair onto an optional override
fn switch_override(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
