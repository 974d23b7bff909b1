//! Chart spec value types
//!
//! A `ChartSpec` is the renderer-agnostic description of one chart: its kind,
//! axis labels, and data series. Panels build specs; the visualization
//! registry turns them into live widgets.

/// Kind of chart to render at a mount point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Doughnut,
    Bar,
    Line,
}

/// One data series within a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub data: Vec<f64>,
    /// Area under the series is filled (line charts).
    pub filled: bool,
    /// Series is drawn with a dashed stroke (line charts).
    pub dashed: bool,
}

impl Series {
    pub fn new(label: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            data,
            filled: false,
            dashed: false,
        }
    }

    pub fn filled(mut self) -> Self {
        self.filled = true;
        self
    }

    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }
}

/// Full description of one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

impl ChartSpec {
    /// Single-series doughnut over labeled segments.
    pub fn doughnut(labels: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            kind: ChartKind::Doughnut,
            labels,
            series: vec![Series::new("", values)],
        }
    }

    pub fn bar(labels: Vec<String>, series: Vec<Series>) -> Self {
        Self {
            kind: ChartKind::Bar,
            labels,
            series,
        }
    }

    pub fn line(labels: Vec<String>, series: Vec<Series>) -> Self {
        Self {
            kind: ChartKind::Line,
            labels,
            series,
        }
    }
}
