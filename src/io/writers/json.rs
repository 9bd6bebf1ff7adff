use super::PlotWriter;
use crate::plot::PlotSpec;
use std::io::Write;

pub struct JsonPlotWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonPlotWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> PlotWriter for JsonPlotWriter<W> {
    fn write_plot(&mut self, plot: &PlotSpec) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(plot)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}
