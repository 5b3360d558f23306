use serde::{Deserialize, Serialize};
use std::fmt;

/// Chart type selected in the dashboard.
///
/// Keys that are not one of the seven known kinds are kept as
/// `Unrecognized` so the builder can fall back to a minimal chart instead
/// of rejecting the control value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChartKind {
    Scatter,
    Bubble,
    Bar,
    Histogram,
    Line,
    Choropleth,
    Box,
    Unrecognized(String),
}

impl ChartKind {
    /// Known kinds in dropdown order.
    pub const KNOWN: [ChartKind; 7] = [
        ChartKind::Scatter,
        ChartKind::Bubble,
        ChartKind::Bar,
        ChartKind::Histogram,
        ChartKind::Line,
        ChartKind::Choropleth,
        ChartKind::Box,
    ];

    pub fn key(&self) -> &str {
        match self {
            ChartKind::Scatter => "scatter",
            ChartKind::Bubble => "bubble",
            ChartKind::Bar => "bar",
            ChartKind::Histogram => "histogram",
            ChartKind::Line => "line",
            ChartKind::Choropleth => "choropleth",
            ChartKind::Box => "box",
            ChartKind::Unrecognized(key) => key,
        }
    }

    /// Dropdown label; `None` for unrecognized keys.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            ChartKind::Scatter => Some("Scatter"),
            ChartKind::Bubble => Some("Bubble"),
            ChartKind::Bar => Some("Bar"),
            ChartKind::Histogram => Some("Histogram"),
            ChartKind::Line => Some("Line"),
            ChartKind::Choropleth => Some("Choropleth"),
            ChartKind::Box => Some("Box"),
            ChartKind::Unrecognized(_) => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, ChartKind::Unrecognized(_))
    }
}

impl From<&str> for ChartKind {
    fn from(key: &str) -> Self {
        ChartKind::KNOWN
            .into_iter()
            .find(|k| k.key() == key)
            .unwrap_or_else(|| ChartKind::Unrecognized(key.to_string()))
    }
}

impl From<String> for ChartKind {
    fn from(key: String) -> Self {
        ChartKind::from(key.as_str())
    }
}

impl From<ChartKind> for String {
    fn from(kind: ChartKind) -> Self {
        kind.key().to_string()
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
