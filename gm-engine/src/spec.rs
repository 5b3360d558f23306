//! Declarative chart specification handed to the renderer.
//!
//! [`Encoding::for_kind`] is the chart-kind decision table: it maps a
//! [`ChartKind`] and the two axis metrics to the mark, axes, size, color and
//! location channels. Everything else about a chart (filtering, title) is
//! the same across kinds and lives in [`crate::builder`].

use gm_data::{Metric, Record};
use serde::{Serialize, Serializer};

use crate::ChartKind;

/// A column a channel is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Country name
    Entity,
    Year,
    /// ISO alpha-3 code
    IsoCode,
    /// Row count per bin (histogram Y)
    Count,
    Metric(Metric),
}

impl Field {
    pub fn key(self) -> &'static str {
        match self {
            Field::Entity => "country",
            Field::Year => "year",
            Field::IsoCode => "iso_alpha",
            Field::Count => "count",
            Field::Metric(m) => m.key(),
        }
    }

    /// Discrete fields get one legend entry per value.
    pub fn is_categorical(self) -> bool {
        matches!(self, Field::Entity | Field::IsoCode)
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Linear,
    Log,
}

/// One positional axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Axis {
    pub field: Field,
    pub scale: Scale,
    /// Bin count for histogram axes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bins: Option<u32>,
}

impl Axis {
    pub fn linear(field: Field) -> Self {
        Self {
            field,
            scale: Scale::Linear,
            bins: None,
        }
    }
}

/// Geometric primitive used to draw the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Scatter,
    Bar,
    Histogram,
    Line,
    Choropleth,
    Box,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Projection {
    #[serde(rename = "natural earth")]
    NaturalEarth,
}

impl Projection {
    pub fn key(self) -> &'static str {
        match self {
            Projection::NaturalEarth => "natural earth",
        }
    }
}

/// Which rows of the selected continent a chart draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataScope {
    /// Only rows of the selected year
    YearSnapshot,
    /// Every year, for a trend over time
    FullSeries,
}

/// Channel bindings for one chart kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Encoding {
    pub mark: Mark,
    pub x: Option<Axis>,
    pub y: Option<Axis>,
    pub size: Option<Field>,
    pub color: Option<Field>,
    pub location: Option<Field>,
    pub hover_name: Option<Field>,
    /// Draw a marker at every data point (line charts)
    pub markers: bool,
    pub projection: Option<Projection>,
    pub scope: DataScope,
}

impl Encoding {
    fn new(mark: Mark) -> Self {
        Self {
            mark,
            x: None,
            y: None,
            size: None,
            color: None,
            location: None,
            hover_name: None,
            markers: false,
            projection: None,
            scope: DataScope::YearSnapshot,
        }
    }

    /// Encoding table for every chart kind.
    pub fn for_kind(kind: &ChartKind, x_metric: Metric, y_metric: Metric, histogram_bins: u32) -> Self {
        let x = Field::Metric(x_metric);
        let y = Field::Metric(y_metric);
        match kind {
            ChartKind::Scatter => Self {
                x: Some(Axis {
                    field: x,
                    scale: if x_metric == Metric::GdpPercap {
                        Scale::Log
                    } else {
                        Scale::Linear
                    },
                    bins: None,
                }),
                y: Some(Axis::linear(y)),
                size: Some(Field::Metric(Metric::Pop)),
                color: Some(Field::Entity),
                hover_name: Some(Field::Entity),
                ..Self::new(Mark::Scatter)
            },
            // Country on X and the X metric as color; kept as the dashboard
            // has always drawn it rather than a two-metric bubble chart.
            ChartKind::Bubble => Self {
                x: Some(Axis::linear(Field::Entity)),
                y: Some(Axis::linear(y)),
                size: Some(Field::Metric(Metric::Pop)),
                color: Some(x),
                hover_name: Some(Field::Entity),
                ..Self::new(Mark::Scatter)
            },
            ChartKind::Bar => Self {
                x: Some(Axis::linear(Field::Entity)),
                y: Some(Axis::linear(y)),
                color: Some(x),
                ..Self::new(Mark::Bar)
            },
            ChartKind::Histogram => Self {
                x: Some(Axis {
                    field: y,
                    scale: Scale::Linear,
                    bins: Some(histogram_bins),
                }),
                y: Some(Axis::linear(Field::Count)),
                color: Some(Field::Entity),
                ..Self::new(Mark::Histogram)
            },
            ChartKind::Line => Self {
                x: Some(Axis::linear(Field::Year)),
                y: Some(Axis::linear(y)),
                color: Some(Field::Entity),
                markers: true,
                scope: DataScope::FullSeries,
                ..Self::new(Mark::Line)
            },
            ChartKind::Choropleth => Self {
                location: Some(Field::IsoCode),
                color: Some(y),
                hover_name: Some(Field::Entity),
                projection: Some(Projection::NaturalEarth),
                ..Self::new(Mark::Choropleth)
            },
            ChartKind::Box => Self {
                x: Some(Axis::linear(Field::Entity)),
                y: Some(Axis::linear(y)),
                color: Some(Field::Entity),
                ..Self::new(Mark::Box)
            },
            ChartKind::Unrecognized(_) => Self {
                x: Some(Axis::linear(x)),
                y: Some(Axis::linear(y)),
                ..Self::new(Mark::Scatter)
            },
        }
    }

    /// True when X is drawn on a logarithmic scale.
    pub fn log_x(&self) -> bool {
        self.x.map(|a| a.scale == Scale::Log).unwrap_or(false)
    }
}

/// A complete, render-ready chart description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    /// The chart type that was requested
    pub kind: ChartKind,
    pub title: Option<String>,
    #[serde(flatten)]
    pub encoding: Encoding,
    /// Rows to draw, in dataset order
    pub data: Vec<Record>,
}

impl ChartSpec {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
