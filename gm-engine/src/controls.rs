//! Dashboard control values and the events that change them.

use gm_data::Metric;
use serde::{Deserialize, Serialize};

use crate::ChartKind;

/// The full control tuple passed into every update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlState {
    /// Selected continent
    pub group: String,
    /// Selected countries; empty means "all countries of the continent"
    pub entities: Vec<String>,
    pub year: i32,
    pub chart_kind: ChartKind,
    pub x_metric: Metric,
    pub y_metric: Metric,
}

impl ControlState {
    /// Copy of this state with one control replaced.
    pub fn with_change(&self, change: ControlChange) -> ControlState {
        let mut next = self.clone();
        match change {
            ControlChange::Group(group) => next.group = group,
            ControlChange::Entities(entities) => next.entities = entities,
            ControlChange::Year(year) => next.year = year,
            ControlChange::ChartKind(kind) => next.chart_kind = kind,
            ControlChange::XMetric(metric) => next.x_metric = metric,
            ControlChange::YMetric(metric) => next.y_metric = metric,
        }
        next
    }
}

/// Derived outputs a control change can refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Country dropdown options
    EntityOptions,
    /// Country dropdown value
    EntitySelection,
    /// Main chart figure
    Chart,
}

/// The six dashboard controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    Group,
    Entities,
    Year,
    ChartKind,
    XMetric,
    YMetric,
}

impl ControlId {
    pub const ALL: [ControlId; 6] = [
        ControlId::Group,
        ControlId::Entities,
        ControlId::Year,
        ControlId::ChartKind,
        ControlId::XMetric,
        ControlId::YMetric,
    ];

    /// DOM id of the control element.
    pub fn dom_id(self) -> &'static str {
        match self {
            ControlId::Group => "continent-dropdown",
            ControlId::Entities => "country-dropdown",
            ControlId::Year => "year-slider",
            ControlId::ChartKind => "chart-type-dropdown",
            ControlId::XMetric => "x-metric-dropdown",
            ControlId::YMetric => "y-metric-dropdown",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ControlId::Group => "Select Continent:",
            ControlId::Entities => "Select Countries:",
            ControlId::Year => "Select Year:",
            ControlId::ChartKind => "Select Chart Type:",
            ControlId::XMetric => "Select X-axis Metric:",
            ControlId::YMetric => "Select Y-axis Metric:",
        }
    }

    /// Outputs recomputed when this control changes.
    pub fn triggers(self) -> &'static [Output] {
        match self {
            ControlId::Group => &[Output::EntityOptions, Output::EntitySelection, Output::Chart],
            _ => &[Output::Chart],
        }
    }
}

/// A new value for exactly one control.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlChange {
    Group(String),
    Entities(Vec<String>),
    Year(i32),
    ChartKind(ChartKind),
    XMetric(Metric),
    YMetric(Metric),
}

impl ControlChange {
    /// The control this change belongs to.
    pub fn control(&self) -> ControlId {
        match self {
            ControlChange::Group(_) => ControlId::Group,
            ControlChange::Entities(_) => ControlId::Entities,
            ControlChange::Year(_) => ControlId::Year,
            ControlChange::ChartKind(_) => ControlId::ChartKind,
            ControlChange::XMetric(_) => ControlId::XMetric,
            ControlChange::YMetric(_) => ControlId::YMetric,
        }
    }
}
