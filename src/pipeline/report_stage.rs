//! Report output stage.
//!
//! Resolves format and colour against the destination, then streams the
//! rendered payload to a file or stdout.

use crate::config::AppConfig;
use crate::payload::ReportPayload;
use crate::reports::{create_reporter_with_options, ReportFormat, ReportGenerator};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, IsTerminal, Write};
use std::path::PathBuf;

/// Where a rendered report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// `--output-file` when set, stdout otherwise
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        config
            .output
            .file
            .clone()
            .map_or(Self::Stdout, Self::File)
    }

    fn is_terminal(&self) -> bool {
        matches!(self, Self::Stdout) && std::io::stdout().is_terminal()
    }

    /// `Auto` becomes a summary on an interactive terminal and JSON
    /// everywhere else. Explicit formats pass through.
    #[must_use]
    pub fn resolve_format(&self, format: ReportFormat) -> ReportFormat {
        match format {
            ReportFormat::Auto if self.is_terminal() => ReportFormat::Summary,
            ReportFormat::Auto => ReportFormat::Json,
            other => other,
        }
    }

    /// Colour only reaches a terminal, and never when `--no-color` or
    /// `NO_COLOR` is set.
    fn wants_color(&self, no_color_flag: bool) -> bool {
        self.is_terminal() && !no_color_flag && std::env::var_os("NO_COLOR").is_none()
    }
}

fn reporter_for(config: &AppConfig, destination: &Destination) -> Box<dyn ReportGenerator> {
    let format = destination.resolve_format(config.output.format);
    let use_color = destination.wants_color(config.output.no_color);
    tracing::debug!(format = %format, color = use_color, "rendering report");
    create_reporter_with_options(format, use_color)
}

/// Render a payload and write it to the configured destination.
pub fn output_report(config: &AppConfig, payload: &ReportPayload) -> Result<()> {
    let destination = Destination::from_config(config);
    let reporter = reporter_for(config, &destination);

    match &destination {
        Destination::Stdout => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            reporter.write_report(payload, &mut out)?;
            writeln!(out)?;
            out.flush()?;
        }
        Destination::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            reporter
                .write_report(payload, &mut writer)
                .and_then(|()| writer.flush().map_err(Into::into))
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            if !config.behavior.quiet {
                tracing::info!("Report written to {}", path.display());
            }
        }
    }
    Ok(())
}

/// Render a payload to a string using the configured format.
pub fn render_report(config: &AppConfig, payload: &ReportPayload) -> Result<String> {
    let destination = Destination::from_config(config);
    Ok(reporter_for(config, &destination).generate(payload)?)
}
