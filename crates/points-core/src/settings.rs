use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use crate::formats::{InputFormat, ReportFormat};

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Tally house points from student record files
#[derive(Parser, Debug, Clone)]
#[command(
    name = "house-points",
    about = "Tally house points from student record files",
    version
)]
pub struct Settings {
    /// Record file, or a directory of record files
    #[arg(long, default_value = "punkte.csv")]
    pub input: PathBuf,

    /// Input format (detected from the file extension if not specified)
    #[arg(long, value_enum)]
    pub format: Option<InputFormat>,

    /// Report destination
    #[arg(long, default_value = "ergebnis.txt")]
    pub output: PathBuf,

    /// Report format (detected from the output extension if not specified)
    #[arg(long, value_enum)]
    pub report: Option<ReportFormat>,

    /// List the students whose name starts with this character
    #[arg(long)]
    pub initial: Option<char>,

    /// Also print the ranked totals as JSON
    #[arg(long)]
    pub json: bool,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse the process arguments and apply the `--debug` override.
    pub fn load() -> Self {
        Self::resolve(Settings::parse())
    }

    /// Same as [`load`](Self::load) but with an explicit argument list.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Settings::try_parse_from(args).map(Self::resolve)
    }

    /// The explicit `--report` value, else the output extension, else `txt`.
    pub fn resolve_report_format(&self) -> ReportFormat {
        if let Some(format) = self.report {
            return format;
        }
        ReportFormat::from_path(&self.output).unwrap_or_else(|| {
            debug!(
                "No report format for {}; defaulting to {}",
                self.output.display(),
                ReportFormat::default()
            );
            ReportFormat::default()
        })
    }

    fn resolve(mut settings: Settings) -> Settings {
        // --debug overrides log level.
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
