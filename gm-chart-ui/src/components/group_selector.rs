//! Dropdown selector for choosing a continent.

use crate::state::AppState;
use dioxus::prelude::*;
use gm_engine::{ControlChange, ControlId};

/// Continent dropdown.
/// A change refreshes the country options and resets the country selection.
#[component]
pub fn GroupSelector() -> Element {
    let mut state = use_context::<AppState>();
    let groups = state.group_options.read().clone();
    let selected = state
        .controls
        .read()
        .as_ref()
        .map(|c| c.group.clone())
        .unwrap_or_default();
    let dom_id = ControlId::Group.dom_id();
    let label = ControlId::Group.label();

    let on_change = move |evt: Event<FormData>| {
        state.dispatch(ControlChange::Group(evt.value()));
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
                for group in groups.iter() {
                    option {
                        value: "{group.value}",
                        selected: group.value == selected,
                        "{group.label}"
                    }
                }
            }
        }
    }
}
