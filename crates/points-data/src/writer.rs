//! Report writers for the ranked listing.
//!
//! * `txt`: one `House#Total` line per house.
//! * `csv`: a `Category,Total` header followed by one `House,Total` row per house.
//!
//! Both write all four houses in ranked order, zero totals included.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use points_core::error::{PointsError, Result};
use points_core::formats::ReportFormat;
use tracing::debug;

use crate::aggregator::Ranking;

pub const TXT_SEPARATOR: char = '#';
pub const CSV_HEADER: &str = "Category,Total";

pub fn write_txt<W: Write>(out: &mut W, ranking: &Ranking) -> io::Result<()> {
    for entry in ranking.iter() {
        writeln!(out, "{}{}{}", entry.house, TXT_SEPARATOR, entry.total)?;
    }
    Ok(())
}

pub fn write_csv<W: Write>(out: &mut W, ranking: &Ranking) -> io::Result<()> {
    writeln!(out, "{}", CSV_HEADER)?;
    for entry in ranking.iter() {
        writeln!(out, "{},{}", entry.house, entry.total)?;
    }
    Ok(())
}

pub fn write_report<W: Write>(
    out: &mut W,
    ranking: &Ranking,
    format: ReportFormat,
) -> io::Result<()> {
    match format {
        ReportFormat::Txt => write_txt(out, ranking),
        ReportFormat::Csv => write_csv(out, ranking),
    }
}

/// Create (or truncate) `path` and write the report to it.
///
/// The file is flushed and closed before returning, on success or failure.
pub fn save_report(path: &Path, ranking: &Ranking, format: ReportFormat) -> Result<()> {
    let to_error = |source: io::Error| PointsError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut out = BufWriter::new(file);
    write_report(&mut out, ranking, format).map_err(to_error)?;
    out.flush().map_err(to_error)?;

    debug!("Wrote {} report to {}", format, path.display());
    Ok(())
}

/// The ranked listing as a pretty-printed JSON array.
pub fn render_json(ranking: &Ranking) -> Result<String> {
    Ok(serde_json::to_string_pretty(ranking)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
