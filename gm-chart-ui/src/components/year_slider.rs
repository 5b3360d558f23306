//! Year slider restricted to the years present in the dataset.

use crate::state::AppState;
use dioxus::prelude::*;
use gm_engine::{ControlChange, ControlId};

/// Slider over the dataset's year marks.
///
/// The range input moves over mark indices rather than raw years, so the
/// only reachable values are years that actually occur in the data.
#[component]
pub fn YearSlider() -> Element {
    let mut state = use_context::<AppState>();
    let years = state.years.read().clone();
    let current = state.controls.read().as_ref().map(|c| c.year);
    let index = current
        .and_then(|y| years.iter().position(|&m| m == y))
        .unwrap_or(0);
    let max_index = years.len().saturating_sub(1);
    let dom_id = ControlId::Year.dom_id();
    let label = ControlId::Year.label();
    let shown = current.map(|y| y.to_string()).unwrap_or_default();

    let marks = years.clone();
    let on_input = move |evt: Event<FormData>| {
        if let Some(year) = evt
            .value()
            .parse::<usize>()
            .ok()
            .and_then(|i| marks.get(i).copied())
        {
            state.dispatch(ControlChange::Year(year));
        }
    };

    rsx! {
        div {
            style: super::CONTROL_STYLE,
            label {
                r#for: dom_id,
                style: super::LABEL_STYLE,
                "{label} {shown}"
            }
            input {
                id: dom_id,
                r#type: "range",
                min: "0",
                max: "{max_index}",
                step: "1",
                value: "{index}",
                style: "width: 100%;",
                oninput: on_input,
            }
            div {
                style: "display: flex; justify-content: space-between; font-size: 11px; color: #888;",
                for year in years.iter() {
                    span { "{year}" }
                }
            }
        }
    }
}
