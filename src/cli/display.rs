//! Colored report lines
//!
//! Print helpers for each kind of line the report is made of. Output goes to
//! any `io::Write` so the binary can hand in a locked stdout and tests a
//! `Vec<u8>`.

use std::io::Write;

use anyhow::{Context, Result};

use crate::style::{paint, Style};

/// Width of the header rule and of the field the header text is centered in
pub const HEADER_WIDTH: usize = 60;

const HEADER_STYLE: &[Style] = &[Style::Bold, Style::Header];
const SECTION_STYLE: &[Style] = &[Style::Bold, Style::Cyan];
const LABEL_STYLE: &[Style] = &[Style::Blue];
const VALUE_STYLE: &[Style] = &[Style::Green];
const INFO_STYLE: &[Style] = &[Style::Yellow];
const SUCCESS_STYLE: &[Style] = &[Style::Green, Style::Bold];
const BANNER_STYLE: &[Style] = &[Style::Bold, Style::Green];

/// Writes report lines, colored or plain
pub struct Reporter<W: Write> {
    out: W,
    colorize: bool,
}

impl<W: Write> Reporter<W> {
    /// Create a reporter writing to `out`.
    ///
    /// With `colorize` false every line is written without escape sequences.
    #[must_use]
    pub const fn new(out: W, colorize: bool) -> Self {
        Self { out, colorize }
    }

    fn styled(&self, text: &str, styles: &[Style]) -> String {
        if self.colorize {
            paint(text, styles)
        } else {
            text.to_string()
        }
    }

    fn line(&mut self, text: &str, styles: &[Style]) -> Result<()> {
        let styled = self.styled(text, styles);
        writeln!(self.out, "{styled}").context("Failed to write report line")
    }

    /// Print a bordered header with `text` centered, then a blank line
    pub fn print_header(&mut self, text: &str) -> Result<()> {
        let rule = "=".repeat(HEADER_WIDTH);
        let title = format!("{text:^width$}", width = HEADER_WIDTH);
        self.line(&rule, HEADER_STYLE)?;
        self.line(&title, HEADER_STYLE)?;
        self.line(&rule, HEADER_STYLE)?;
        self.blank_line()
    }

    /// Print a `>>> title` section line
    pub fn print_section(&mut self, title: &str) -> Result<()> {
        self.line(&format!(">>> {title}"), SECTION_STYLE)
    }

    /// Print a `name: value` line. The value is written verbatim.
    pub fn print_variable(&mut self, name: &str, value: &str) -> Result<()> {
        let label = self.styled(&format!("{name}:"), LABEL_STYLE);
        let value = self.styled(value, VALUE_STYLE);
        writeln!(self.out, "{label} {value}").context("Failed to write report line")
    }

    /// Print an informational line
    pub fn print_info(&mut self, text: &str) -> Result<()> {
        self.line(text, INFO_STYLE)
    }

    /// Print a `✓ text` success line
    pub fn print_success(&mut self, text: &str) -> Result<()> {
        self.line(&format!("✓ {text}"), SUCCESS_STYLE)
    }

    /// Print a bold closing banner line
    pub fn print_banner(&mut self, text: &str) -> Result<()> {
        self.line(text, BANNER_STYLE)
    }

    /// Print an empty line
    pub fn blank_line(&mut self) -> Result<()> {
        writeln!(self.out).context("Failed to write report line")
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.out.flush().context("Failed to flush report output")?;
        Ok(self.out)
    }
}
