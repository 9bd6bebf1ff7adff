pub mod html;
pub mod json;

pub use html::HtmlPlotWriter;
pub use json::JsonPlotWriter;

use crate::plot::PlotSpec;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotFormat {
    /// Self-contained page rendered by plotly.js
    #[default]
    Html,
    /// The raw plot description
    Json,
}

pub trait PlotWriter {
    fn write_plot(&mut self, plot: &PlotSpec) -> anyhow::Result<()>;
}

pub fn create_plot_writer<'a, W: Write + 'a>(
    format: PlotFormat,
    writer: W,
) -> Box<dyn PlotWriter + 'a> {
    match format {
        PlotFormat::Html => Box::new(HtmlPlotWriter::new(writer)),
        PlotFormat::Json => Box::new(JsonPlotWriter::new(writer)),
    }
}
