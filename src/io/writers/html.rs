use super::PlotWriter;
use crate::plot::PlotSpec;
use anyhow::Result;
use html_escape::encode_text;
use serde::Serialize;
use std::io::Write;

pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

pub struct HtmlPlotWriter<W: Write> {
    writer: W,
    template: &'static str,
}

impl<W: Write> HtmlPlotWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            template: include_str!("templates/plot.html"),
        }
    }

    fn render(&self, plot: &PlotSpec) -> Result<String> {
        Ok(self
            .template
            .replace("{{TITLE}}", &encode_text(&plot.layout.title.text))
            .replace("{{PLOTLY_SRC}}", PLOTLY_CDN)
            .replace("{{PLOT_DATA}}", &script_json(&plot.data)?)
            .replace("{{PLOT_LAYOUT}}", &script_json(&plot.layout)?))
    }
}

/// JSON safe to inline in a `<script>` block.
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

impl<W: Write> PlotWriter for HtmlPlotWriter<W> {
    fn write_plot(&mut self, plot: &PlotSpec) -> Result<()> {
        let html = self.render(plot)?;
        self.writer.write_all(html.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}
