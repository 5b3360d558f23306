//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`
//! and report control changes through [`AppState::dispatch`].

use dioxus::prelude::*;
use gm_data::Dataset;
use gm_engine::options::group_options;
use gm_engine::{
    handle, initial_reaction, toggle_selection, ChartSpec, ControlChange, ControlState,
    DashboardConfig, Reaction, SelectOption,
};

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Prepared dataset (None until loaded)
    pub dataset: Signal<Option<Dataset>>,
    pub config: Signal<DashboardConfig>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Current control values (None until the first reaction)
    pub controls: Signal<Option<ControlState>>,
    /// Continent dropdown options
    pub group_options: Signal<Vec<SelectOption>>,
    /// Country options for the selected continent
    pub entity_options: Signal<Vec<SelectOption>>,
    /// Year slider marks
    pub years: Signal<Vec<i32>>,
    /// Chart for the current controls
    pub chart: Signal<Option<ChartSpec>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(None),
            config: Signal::new(DashboardConfig::default()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            controls: Signal::new(None),
            group_options: Signal::new(Vec::new()),
            entity_options: Signal::new(Vec::new()),
            years: Signal::new(Vec::new()),
            chart: Signal::new(None),
        }
    }

    /// Install a freshly prepared dataset and run the first reaction.
    pub fn load(&mut self, dataset: Dataset) {
        let config = self.config.read().clone();
        match initial_reaction(&dataset, &config) {
            Ok(reaction) => {
                self.group_options.set(group_options(&dataset));
                self.years.set(dataset.years());
                self.dataset.set(Some(dataset));
                self.error_msg.set(None);
                self.apply(reaction);
            }
            Err(e) => {
                log::error!("[GM] initial reaction failed: {}", e);
                self.error_msg.set(Some(e.to_string()));
            }
        }
        self.loading.set(false);
    }

    /// Run the handler for one control change and publish its outputs.
    ///
    /// On error the message is shown and every other signal is left as is.
    pub fn dispatch(&mut self, change: ControlChange) {
        let Some(dataset) = self.dataset.read().clone() else {
            return;
        };
        let Some(current) = self.controls.read().clone() else {
            return;
        };
        let config = self.config.read().clone();

        match handle(&current, change, &dataset, &config) {
            Ok(reaction) => {
                self.error_msg.set(None);
                self.apply(reaction);
            }
            Err(e) => {
                log::warn!("[GM] control change rejected: {}", e);
                self.error_msg.set(Some(e.to_string()));
            }
        }
    }

    /// Add or remove one country from the selection.
    pub fn toggle_entity(&mut self, entity: &str) {
        let Some(current) = self.controls.read().clone() else {
            return;
        };
        let options = self.entity_options.read().clone();
        let next = toggle_selection(&current.entities, &options, entity);
        self.dispatch(ControlChange::Entities(next));
    }

    fn apply(&mut self, reaction: Reaction) {
        if let Some(opts) = reaction.entity_options {
            self.entity_options.set(opts.options);
        }
        self.controls.set(Some(reaction.state));
        self.chart.set(Some(reaction.chart));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
