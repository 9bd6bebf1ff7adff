use crate::analysis::{self, AffiliationTally};
use crate::config::{self, StancemapConfig};
use crate::curation::{CurationReport, Curator};
use crate::io::{self, create_plot_writer};
use crate::lookup::{AgeResolver, SearchProxyResolver};
use crate::plot::build_stance_plot;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct RunOverrides {
    pub config: Option<PathBuf>,
    pub source: Option<PathBuf>,
    pub curated: Option<PathBuf>,
    pub curate: Option<bool>,
    pub count_bias: Option<bool>,
    pub output: Option<PathBuf>,
    pub format: Option<io::PlotFormat>,
    pub max_concurrency: Option<usize>,
}

/// Pure function layering overrides onto a loaded config
pub fn apply_overrides(mut config: StancemapConfig, overrides: RunOverrides) -> StancemapConfig {
    if let Some(source) = overrides.source {
        config.source = source;
    }
    if let Some(curated) = overrides.curated {
        config.curated = curated;
    }
    if let Some(curate) = overrides.curate {
        config.curate = curate;
    }
    if let Some(count_bias) = overrides.count_bias {
        config.count_bias = count_bias;
    }
    if let Some(output) = overrides.output {
        config.plot.output = output;
    }
    if let Some(format) = overrides.format {
        config.plot.format = format;
    }
    if let Some(max_concurrency) = overrides.max_concurrency {
        config.max_concurrency = max_concurrency;
    }
    config
}

pub fn resolve_config(overrides: RunOverrides) -> Result<StancemapConfig> {
    let base = match &overrides.config {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("Loading config {}", path.display()))?,
        None => config::load_config(),
    };
    Ok(apply_overrides(base, overrides))
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub curation: Option<CurationReport>,
    pub tally: AffiliationTally,
    pub plotted: usize,
    pub plot_path: PathBuf,
}

/// Curate (when a resolver is given), tally and plot.
///
/// User-facing lines go to `out`; diagnostics go to the logger.
pub async fn run_pipeline<R: AgeResolver>(
    config: &StancemapConfig,
    resolver: Option<R>,
    out: &mut dyn Write,
    plain: bool,
) -> Result<RunSummary> {
    let curation = match resolver {
        Some(resolver) => {
            let report = Curator::new(resolver)
                .with_max_concurrency(config.max_concurrency)
                .curate_file(&config.source, &config.curated)
                .await
                .context("Curating politicians")?;
            writeln!(out, "wrote {} to disk", config.curated.display())?;
            Some(report)
        }
        None => None,
    };

    let curated = io::read_politicians(&config.curated).context("Loading curated politicians")?;
    let scored = analysis::scored(&curated);
    let tally = analysis::count_bias(&scored);

    if config.count_bias {
        let line = if plain {
            tally.to_string()
        } else {
            tally.colored_line()
        };
        writeln!(out, "{}", line)?;
    }

    let plot = build_stance_plot(&scored);
    let plot_path = config.plot.output.clone();
    io::ensure_parent_dir(&plot_path)?;
    let file = File::create(&plot_path)
        .with_context(|| format!("Creating plot file {}", plot_path.display()))?;
    create_plot_writer(config.plot.format, BufWriter::new(file)).write_plot(&plot)?;
    writeln!(
        out,
        "plotted {} politicians to {}",
        plot.point_count(),
        plot_path.display()
    )?;

    Ok(RunSummary {
        curation,
        tally,
        plotted: plot.point_count(),
        plot_path,
    })
}

/// Entry point for `stancemap run`.
pub fn handle_run(config: StancemapConfig, plain: bool) -> Result<()> {
    let resolver = if config.curate {
        Some(
            SearchProxyResolver::from_env(config.search.clone())
                .context("Setting up age lookup")?,
        )
    } else {
        None
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Starting async runtime")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = runtime.block_on(run_pipeline(&config, resolver, &mut out, plain))?;

    if let Some(report) = &summary.curation {
        if !report.failed.is_empty() {
            log::warn!(
                "{} politicians could not be curated and will be retried next run",
                report.failed.len()
            );
        }
    }
    Ok(())
}
