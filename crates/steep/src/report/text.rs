// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use std::io::Write as _;

use termcolor::{Buffer, Color, ColorChoice, ColorSpec, WriteColor};

use super::{Outcome, ReportFormatter, RunReport};

/// Human-readable text formatter. The spec tree is rendered in execution
/// order with one glyph per case; failures list their messages inline.
pub struct TextFormatter {
    color: ColorChoice,
}

impl TextFormatter {
    pub fn new(color: ColorChoice) -> Self {
        Self { color }
    }

    /// Plain output, no escape codes.
    pub fn plain() -> Self {
        Self::new(ColorChoice::Never)
    }

    fn write(&self, report: &RunReport, out: &mut dyn WriteColor) -> anyhow::Result<()> {
        let mut open_path: Vec<String> = Vec::new();

        for case in &report.cases {
            // Print group headers as the path changes.
            let shared =
                case.path.iter().zip(open_path.iter()).take_while(|(a, b)| a == b).count();
            open_path.truncate(shared);
            for name in case.path.iter().skip(shared) {
                writeln!(out, "{}{}", "  ".repeat(open_path.len()), name)?;
                open_path.push(name.clone());
            }

            let indent = "  ".repeat(case.path.len());
            let (glyph, color) = match case.outcome {
                Outcome::Passed => ("✓", Color::Green),
                Outcome::Failed => ("✗", Color::Red),
                Outcome::Pending => ("*", Color::Yellow),
            };
            out.set_color(ColorSpec::new().set_fg(Some(color)))?;
            write!(out, "{indent}{glyph}")?;
            out.reset()?;
            write!(out, " {}", case.name)?;
            if let Some(note) = &case.note {
                write!(out, " ({note})")?;
            }
            writeln!(out)?;

            if case.outcome == Outcome::Failed {
                if let Some(failure) = &case.failure {
                    writeln!(out, "{indent}    {failure}")?;
                }
                for expectation in case.expectations.iter().filter(|e| !e.passed) {
                    writeln!(out, "{indent}    {}", expectation.message)?;
                }
            }
        }

        for diagnostic in &report.diagnostics {
            writeln!(out, "warning: {diagnostic}")?;
        }

        writeln!(out)?;
        writeln!(
            out,
            "{} passed, {} failed, {} pending",
            report.passed(),
            report.failed(),
            report.pending()
        )?;
        Ok(())
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &RunReport) -> anyhow::Result<String> {
        let mut buffer = match self.color {
            ColorChoice::Never => Buffer::no_color(),
            _ => Buffer::ansi(),
        };
        self.write(report, &mut buffer)?;
        Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
    }
}
