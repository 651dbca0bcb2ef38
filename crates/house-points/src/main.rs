mod bootstrap;

use std::io::Write;

use anyhow::{Context, Result};
use points_core::settings::Settings;
use points_data::aggregator::PointsAggregator;
use points_data::{query, reader, writer};

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("House Points v{} starting", env!("CARGO_PKG_VERSION"));

    let stdout = std::io::stdout();
    run(&settings, &mut stdout.lock())
}

/// Load, list, aggregate and write the report. Console output goes to `out`.
fn run(settings: &Settings, out: &mut impl Write) -> Result<()> {
    let records = reader::load_records(&settings.input, settings.format)
        .with_context(|| format!("Failed to load records from {}", settings.input.display()))?;

    tracing::info!(
        "Processing {} records from {}",
        records.len(),
        settings.input.display()
    );

    if let Some(initial) = settings.initial {
        writeln!(out, "Students with names starting with '{}':", initial)?;
        for name in query::sorted(query::students_starting_with(&records, initial)) {
            writeln!(out, "{}", name)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "Gryffindor students:")?;
    for name in query::sorted(query::gryffindor_students(&records)) {
        writeln!(out, "{}", name)?;
    }

    let ranking = PointsAggregator::rank(&records);
    let report_format = settings.resolve_report_format();
    writer::save_report(&settings.output, &ranking, report_format)
        .with_context(|| format!("Failed to write report to {}", settings.output.display()))?;

    if settings.json {
        writeln!(out, "{}", writer::render_json(&ranking)?)?;
    }

    writeln!(out, "\nResults written to: {}", settings.output.display())?;
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
