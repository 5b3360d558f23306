//! Multi-select for the countries of the current continent.
//!
//! Rendered as a checkbox list; an empty selection charts every country of
//! the continent.

use crate::state::AppState;
use dioxus::prelude::*;
use gm_engine::{ControlChange, ControlId};

#[component]
pub fn EntitySelector() -> Element {
    let mut state = use_context::<AppState>();
    let options = state.entity_options.read().clone();
    let selected = state
        .controls
        .read()
        .as_ref()
        .map(|c| c.entities.clone())
        .unwrap_or_default();
    let dom_id = ControlId::Entities.dom_id();
    let label = ControlId::Entities.label();
    let summary = if selected.is_empty() {
        "All countries".to_string()
    } else {
        format!("{} selected", selected.len())
    };

    let on_clear = move |_: Event<MouseData>| {
        state.dispatch(ControlChange::Entities(Vec::new()));
    };

    rsx! {
        div {
            style: super::CONTROL_STYLE,
            label {
                style: super::LABEL_STYLE,
                "{label}"
            }
            div {
                id: dom_id,
                style: "display: flex; flex-wrap: wrap; gap: 4px 12px; max-height: 160px; overflow-y: auto;",
                for opt in options.iter() {
                    EntityCheckbox {
                        key: "{opt.value}",
                        value: opt.value.clone(),
                        label: opt.label.clone(),
                        checked: selected.contains(&opt.value),
                    }
                }
            }
            div {
                style: "margin-top: 4px; font-size: 12px; color: #666;",
                "{summary} "
                button {
                    r#type: "button",
                    disabled: selected.is_empty(),
                    onclick: on_clear,
                    "Clear"
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct EntityCheckboxProps {
    value: String,
    label: String,
    checked: bool,
}

#[component]
fn EntityCheckbox(props: EntityCheckboxProps) -> Element {
    let mut state = use_context::<AppState>();
    let value = props.value.clone();

    let on_change = move |_: Event<FormData>| {
        state.toggle_entity(&value);
    };

    rsx! {
        label {
            style: "white-space: nowrap;",
            input {
                r#type: "checkbox",
                value: "{props.value}",
                checked: props.checked,
                onchange: on_change,
            }
            " {props.label}"
        }
    }
}
