use std::fmt;

/// Errors raised while deriving a metric from a snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricsError {
    /// The ratio behind `metric` has a zero denominator
    DivisionUndefined { metric: &'static str },
}

impl MetricsError {
    pub(crate) fn division(metric: &'static str) -> Self {
        MetricsError::DivisionUndefined { metric }
    }
}

impl fmt::Display for MetricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricsError::DivisionUndefined { metric } => {
                write!(f, "{metric} is not computable (zero denominator)")
            }
        }
    }
}

impl std::error::Error for MetricsError {}

/// Errors raised while serializing or saving an export
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// No rows were given, so no header can be derived
    EmptyInput,
    /// A record's keys differ from the header taken from the first record
    ShapeMismatch {
        row: usize,
        expected: Vec<String>,
        found: Vec<String>,
    },
    /// The host save operation failed
    ExportFailed(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::EmptyInput => write!(f, "nothing to export: no rows"),
            ExportError::ShapeMismatch {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has columns [{}], expected [{}]",
                found.join(", "),
                expected.join(", ")
            ),
            ExportError::ExportFailed(msg) => write!(f, "export failed: {msg}"),
        }
    }
}

impl std::error::Error for ExportError {}

/// Rejected input to a view-state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    UnknownView(String),
    UnknownRange(String),
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgument::UnknownView(name) => write!(f, "unknown view '{name}'"),
            InvalidArgument::UnknownRange(name) => write!(f, "unknown range '{name}'"),
        }
    }
}

impl std::error::Error for InvalidArgument {}

pub type MetricResult = std::result::Result<f64, MetricsError>;
