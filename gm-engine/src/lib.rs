//! Reactive update engine for the Gapminder dashboard.
//!
//! Every function here is pure: it takes the current control values and the
//! read-only [`Dataset`](gm_data::Dataset) and returns freshly derived state.
//!
//! - `options`: country option list + default selection for a continent
//! - `builder`: the chart specification for the full control tuple
//! - `reactive`: named control-change handlers tying the two together
//! - `spec`: the declarative [`ChartSpec`] and its per-kind encoding table
//! - `figure`: translation of a [`ChartSpec`] into a Plotly.js figure
//! - `config`: dashboard defaults

pub mod builder;
pub mod config;
pub mod controls;
pub mod figure;
pub mod kind;
pub mod options;
pub mod reactive;
pub mod spec;

pub use builder::{build_chart, build_chart_for};
pub use config::DashboardConfig;
pub use controls::{ControlChange, ControlId, ControlState};
pub use kind::ChartKind;
pub use options::{
    toggle_selection, update_entity_options, update_entity_options_with, EntityOptions, SelectOption,
};
pub use reactive::{handle, initial_reaction, Reaction};
pub use spec::{ChartSpec, Encoding, Field, Mark};
