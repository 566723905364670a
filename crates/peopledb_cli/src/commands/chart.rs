//! Chart command implementation.

use super::render::TextChart;
use peopledb_core::{ChartField, ChartKind, ChartSeries, ChartSink};
use std::io;
use std::path::Path;

/// Runs the chart command.
pub fn run(
    path: &Path,
    field: ChartField,
    kind: ChartKind,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = super::open(path)?;
    let series = ChartSeries::project(store.records(), field, kind)?;

    let stdout = io::stdout();
    let mut chart = TextChart::new(stdout.lock());
    chart.draw(&series)?;
    Ok(())
}
