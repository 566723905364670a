//! Terminal rendering for tables and charts.

use peopledb_core::{ChartKind, ChartSeries, ChartSink, Person};
use std::io::{self, Write};

/// Width of the longest bar or slice, in cells.
pub const CHART_WIDTH: usize = 40;

/// Labels longer than this are shortened under bars.
const MAX_BAR_LABEL: usize = 8;

/// Writes the record table: a header, a rule, then one row per record.
pub fn write_table<W: Write>(out: &mut W, records: &[Person]) -> io::Result<()> {
    writeln!(out, "{:<20} {:<10} {:<10}", "Name", "Age", "Weight")?;
    writeln!(out, "{}", "-".repeat(32))?;
    for person in records {
        writeln!(
            out,
            "{:<20} {:<10} {:<10.1}",
            person.name().as_str(),
            person.age(),
            person.weight()
        )?;
    }
    Ok(())
}

/// Writes the table with a leading index column, used when picking a
/// record to remove.
pub fn write_indexed_table<W: Write>(out: &mut W, records: &[Person]) -> io::Result<()> {
    writeln!(out, "{:<6} {:<20} {:<10} {:<10}", "#", "Name", "Age", "Weight")?;
    writeln!(out, "{}", "-".repeat(39))?;
    for (i, person) in records.iter().enumerate() {
        writeln!(
            out,
            "{:<6} {:<20} {:<10} {:<10.1}",
            i,
            person.name().as_str(),
            person.age(),
            person.weight()
        )?;
    }
    Ok(())
}

/// Shortens a bar label to its first five characters plus `..`.
pub fn bar_label(name: &str) -> String {
    if name.chars().count() > MAX_BAR_LABEL {
        let head: String = name.chars().take(5).collect();
        format!("{head}..")
    } else {
        name.to_string()
    }
}

/// Draws chart series as plain text.
pub struct TextChart<W> {
    out: W,
}

impl<W: Write> TextChart<W> {
    /// Creates a chart renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn draw_bars(&mut self, series: &ChartSeries) -> io::Result<()> {
        let scale = series.scale_max();
        writeln!(self.out, "{:>8} | {:.1}", "", scale)?;
        for point in &series.points {
            let cells = cells_for(point.value / scale);
            writeln!(
                self.out,
                "{:>8} | {} {:.1}",
                bar_label(&point.label),
                "#".repeat(cells),
                point.value
            )?;
        }
        writeln!(self.out, "{:>8} | 0", "")
    }

    fn draw_pie(&mut self, series: &ChartSeries) -> io::Result<()> {
        for (i, point) in series.points.iter().enumerate() {
            let share = series.share(i).unwrap_or(0.0);
            writeln!(
                self.out,
                "{:<width$} {}: {:.1} ({:.1}%)",
                "*".repeat(cells_for(share)),
                point.label,
                point.value,
                share * 100.0,
                width = CHART_WIDTH
            )?;
        }
        Ok(())
    }
}

impl<W: Write> ChartSink for TextChart<W> {
    type Error = io::Error;

    fn draw(&mut self, series: &ChartSeries) -> io::Result<()> {
        writeln!(self.out, "{}", series.title)?;
        writeln!(self.out)?;
        match series.kind {
            ChartKind::Bar => self.draw_bars(series)?,
            ChartKind::Pie => self.draw_pie(series)?,
        }
        self.out.flush()
    }
}

fn cells_for(fraction: f64) -> usize {
    let cells = (fraction.clamp(0.0, 1.0) * CHART_WIDTH as f64).round();
    // Bounded by CHART_WIDTH after the clamp.
    cells as usize
}
