//! Chart type dropdown.

use crate::state::AppState;
use dioxus::prelude::*;
use gm_engine::options::chart_kind_options;
use gm_engine::{ChartKind, ControlChange, ControlId};

#[component]
pub fn ChartKindSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = state
        .controls
        .read()
        .as_ref()
        .map(|c| c.chart_kind.key().to_string())
        .unwrap_or_default();
    let dom_id = ControlId::ChartKind.dom_id();
    let label = ControlId::ChartKind.label();

    let on_change = move |evt: Event<FormData>| {
        state.dispatch(ControlChange::ChartKind(ChartKind::from(evt.value())));
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
                for kind in chart_kind_options() {
                    option {
                        value: "{kind.value}",
                        selected: kind.value == selected,
                        "{kind.label}"
                    }
                }
            }
        }
    }
}
