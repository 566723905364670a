//! Chart projection.
//!
//! Charts are drawn outside the core. This module only turns the current
//! records into a titled series of `(label, value)` points plus the totals
//! a renderer needs for scaling; a [`ChartSink`] does the drawing.

use crate::person::Person;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while projecting a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChartError {
    /// There are no records to chart.
    #[error("database is empty, cannot draw chart")]
    EmptyStore,

    /// A pie chart needs a positive total.
    #[error("total is zero, cannot draw pie chart")]
    ZeroTotal,
}

/// The numeric field a chart plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartField {
    /// Plot ages.
    Age,
    /// Plot weights.
    Weight,
}

impl ChartField {
    /// Extracts this field from a record.
    #[must_use]
    pub fn value_of(self, person: &Person) -> f64 {
        match self {
            Self::Age => f64::from(person.age()),
            Self::Weight => person.weight(),
        }
    }

    /// Human-readable field label used in titles.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::Weight => "Weight",
        }
    }
}

impl fmt::Display for ChartField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown chart field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown chart field: {0:?} (expected age or weight)")]
pub struct ParseChartFieldError(String);

impl FromStr for ChartField {
    type Err = ParseChartFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "age" => Ok(Self::Age),
            "weight" => Ok(Self::Weight),
            _ => Err(ParseChartFieldError(s.to_string())),
        }
    }
}

/// The kind of chart to draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// One bar per record, scaled to the largest value.
    #[default]
    Bar,
    /// One slice per record, sized by its share of the total.
    Pie,
}

impl ChartKind {
    /// Human-readable chart label used in titles.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bar => "Bar",
            Self::Pie => "Pie",
        }
    }
}

/// Error returned when parsing an unknown chart kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown chart kind: {0:?} (expected bar or pie)")]
pub struct ParseChartKindError(String);

impl FromStr for ChartKind {
    type Err = ParseChartKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bar" => Ok(Self::Bar),
            "pie" => Ok(Self::Pie),
            _ => Err(ParseChartKindError(s.to_string())),
        }
    }
}

/// One labelled value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    /// The record's name.
    pub label: String,
    /// The plotted value.
    pub value: f64,
}

/// A chart-ready projection of the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    /// Chart title, e.g. `"Bar chart for Age"`.
    pub title: String,
    /// The plotted field.
    pub field: ChartField,
    /// The chart kind.
    pub kind: ChartKind,
    /// Points in store order.
    pub points: Vec<ChartPoint>,
    /// Sum of all values.
    pub total: f64,
    /// Largest value, or zero.
    pub max: f64,
}

impl ChartSeries {
    /// Projects `records` onto `field`.
    ///
    /// # Errors
    ///
    /// - [`ChartError::EmptyStore`] if there are no records
    /// - [`ChartError::ZeroTotal`] for a pie chart whose values sum to zero
    pub fn project(
        records: &[Person],
        field: ChartField,
        kind: ChartKind,
    ) -> Result<Self, ChartError> {
        if records.is_empty() {
            return Err(ChartError::EmptyStore);
        }

        let points: Vec<ChartPoint> = records
            .iter()
            .map(|p| ChartPoint {
                label: p.name().to_string(),
                value: field.value_of(p),
            })
            .collect();
        let total: f64 = points.iter().map(|p| p.value).sum();
        let max = points.iter().map(|p| p.value).fold(0.0, f64::max);

        if kind == ChartKind::Pie && total <= 0.0 {
            return Err(ChartError::ZeroTotal);
        }

        Ok(Self {
            title: format!("{} chart for {}", kind.label(), field.label()),
            field,
            kind,
            points,
            total,
            max,
        })
    }

    /// The value bars are scaled against. Never zero.
    #[must_use]
    pub fn scale_max(&self) -> f64 {
        if self.max <= 0.0 {
            1.0
        } else {
            self.max
        }
    }

    /// Fraction of the total held by point `index`, in `0.0..=1.0`.
    #[must_use]
    pub fn share(&self, index: usize) -> Option<f64> {
        let point = self.points.get(index)?;
        if self.total <= 0.0 {
            return Some(0.0);
        }
        Some(point.value / self.total)
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the series has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A destination that can draw a chart series.
pub trait ChartSink {
    /// Error raised by the sink.
    type Error;

    /// Draws the series.
    fn draw(&mut self, series: &ChartSeries) -> Result<(), Self::Error>;
}
