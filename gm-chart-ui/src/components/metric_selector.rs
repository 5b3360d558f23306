//! X- and Y-axis metric dropdowns.

use crate::state::AppState;
use dioxus::prelude::*;
use gm_data::Metric;
use gm_engine::options::metric_options;
use gm_engine::{ControlChange, ControlId};

/// Which axis a [`MetricSelector`] drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricAxis {
    X,
    Y,
}

impl MetricAxis {
    fn control(self) -> ControlId {
        match self {
            MetricAxis::X => ControlId::XMetric,
            MetricAxis::Y => ControlId::YMetric,
        }
    }

    fn change(self, metric: Metric) -> ControlChange {
        match self {
            MetricAxis::X => ControlChange::XMetric(metric),
            MetricAxis::Y => ControlChange::YMetric(metric),
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct MetricSelectorProps {
    pub axis: MetricAxis,
}

/// Metric dropdown for one axis. Unknown keys surface through the error display.
#[component]
pub fn MetricSelector(props: MetricSelectorProps) -> Element {
    let mut state = use_context::<AppState>();
    let axis = props.axis;
    let selected = state
        .controls
        .read()
        .as_ref()
        .map(|c| match axis {
            MetricAxis::X => c.x_metric,
            MetricAxis::Y => c.y_metric,
        })
        .map(|m| m.key())
        .unwrap_or_default();
    let dom_id = axis.control().dom_id();
    let label = axis.control().label();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<Metric>() {
        Ok(metric) => state.dispatch(axis.change(metric)),
        Err(e) => state.error_msg.set(Some(e.to_string())),
    };

    rsx! {
        div {
            style: super::CONTROL_STYLE,
            label {
                r#for: dom_id,
                style: super::LABEL_STYLE,
                "{label}"
            }
            select {
                id: dom_id,
                onchange: on_change,
                for metric in metric_options() {
                    option {
                        value: "{metric.value}",
                        selected: metric.value == selected,
                        "{metric.label}"
                    }
                }
            }
        }
    }
}
