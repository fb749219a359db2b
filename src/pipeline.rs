//! Line-oriented conversion of a reader into a writer

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

use crate::case::Converter;
use crate::config::{Config, InputFormat};
use crate::models::CaseStyle;

/// Totals reported after a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PipelineReport {
    /// Lines read from the input
    pub lines: usize,
    /// Lines written to the output
    pub converted: usize,
    /// Blank lines skipped in JSON mode
    pub skipped: usize,
}

/// Converts every line of an input according to a [`Config`]
pub struct Pipeline {
    verbose: bool,
}

impl Pipeline {
    pub fn new(verbose: bool) -> Self {
        Pipeline { verbose }
    }

    /// Convert a single input line.
    ///
    /// Returns `Ok(None)` for a blank line in JSON mode, which carries no value.
    fn convert_line(
        &self,
        converter: &Converter,
        style: CaseStyle,
        format: InputFormat,
        line_no: usize,
        line: &str,
    ) -> Result<Option<String>> {
        match format {
            InputFormat::Text => Ok(Some(converter.convert(line, style))),
            InputFormat::Json => {
                if line.trim().is_empty() {
                    return Ok(None);
                }
                let value: serde_json::Value = serde_json::from_str(line)
                    .with_context(|| format!("Invalid JSON on line {}", line_no))?;
                let converted = converter
                    .convert_value(&value, style)
                    .with_context(|| format!("Cannot convert line {}", line_no))?;
                Ok(Some(converted))
            }
        }
    }

    /// Convert every line from `reader` and write one result per line to `writer`.
    ///
    /// Stops at the first line that fails; lines before it have already been written.
    pub fn run<R: BufRead, W: Write>(
        &self,
        config: &Config,
        reader: R,
        writer: W,
    ) -> Result<PipelineReport> {
        self.convert_lines(config, reader.lines(), writer)
    }

    /// Same as [`Pipeline::run`] for inputs given directly, one per entry
    pub fn run_inputs<W: Write>(
        &self,
        config: &Config,
        inputs: &[String],
        writer: W,
    ) -> Result<PipelineReport> {
        self.convert_lines(config, inputs.iter().cloned().map(Ok), writer)
    }

    fn convert_lines<I, W>(&self, config: &Config, lines: I, mut writer: W) -> Result<PipelineReport>
    where
        I: Iterator<Item = io::Result<String>>,
        W: Write,
    {
        let converter = config.converter();
        let style = config.convert.style;
        let format = config.convert.input;
        let mut report = PipelineReport::default();

        if self.verbose {
            info!("Converting to {} ({:?} input)", style, format);
        }

        for (index, line) in lines.enumerate() {
            let line_no = index + 1;
            let line = line.with_context(|| format!("Failed to read line {}", line_no))?;
            report.lines += 1;

            match self.convert_line(&converter, style, format, line_no, &line)? {
                Some(converted) => {
                    debug!(line = line_no, input = %line, output = %converted, "converted");
                    writeln!(writer, "{}", converted)
                        .with_context(|| format!("Failed to write line {}", line_no))?;
                    report.converted += 1;
                }
                None => {
                    debug!(line = line_no, "skipped blank line");
                    report.skipped += 1;
                }
            }
        }

        writer.flush().context("Failed to flush output")?;

        if self.verbose {
            info!(
                "Converted {} of {} lines ({} skipped)",
                report.converted, report.lines, report.skipped
            );
        }

        Ok(report)
    }
}
