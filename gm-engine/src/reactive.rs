//! Control-change handlers.
//!
//! The hosting UI calls [`handle`] once per control change with the current
//! control tuple. The handler never mutates its inputs: it returns the next
//! control state together with every output the change refreshes (see
//! [`ControlId::triggers`]).

use gm_data::{DataError, Dataset};

use crate::builder::build_chart_for;
use crate::controls::Output;
use crate::options::update_entity_options_with;
use crate::{ChartSpec, ControlChange, ControlState, DashboardConfig, EntityOptions};

/// Everything derived from one control change.
#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    /// Control values after the change (including a reset country selection)
    pub state: ControlState,
    /// New country options, present only when the continent changed
    pub entity_options: Option<EntityOptions>,
    pub chart: ChartSpec,
}

/// Apply one control change and recompute the outputs it triggers.
///
/// A continent change refreshes the country options and replaces the
/// country selection with the default selection before the chart is built.
/// Fails only with [`DataError::InvalidGroup`] for a continent outside the
/// dataset.
pub fn handle(
    state: &ControlState,
    change: ControlChange,
    dataset: &Dataset,
    config: &DashboardConfig,
) -> Result<Reaction, DataError> {
    let triggers = change.control().triggers();
    log::debug!("[GM] reactive: {:?} changed", change.control());

    let mut next = state.with_change(change);
    let entity_options = if triggers.contains(&Output::EntityOptions) {
        let opts = update_entity_options_with(&next.group, dataset, config.default_selection_len)?;
        if triggers.contains(&Output::EntitySelection) {
            next.entities = opts.default_selection.clone();
        }
        Some(opts)
    } else {
        None
    };

    let chart = build_chart_for(&next, dataset, config.histogram_bins);
    Ok(Reaction {
        state: next,
        entity_options,
        chart,
    })
}

/// The first render: default controls, their country options and chart.
///
/// Uses the configured default continent when the dataset has it, the
/// first continent otherwise, and the earliest year.
pub fn initial_reaction(dataset: &Dataset, config: &DashboardConfig) -> Result<Reaction, DataError> {
    let group = if dataset.has_group(&config.default_group) {
        config.default_group.clone()
    } else {
        dataset
            .groups()
            .into_iter()
            .next()
            .ok_or(DataError::EmptyDataset)?
    };
    let (first_year, _) = dataset.year_bounds().ok_or(DataError::EmptyDataset)?;

    let seed = ControlState {
        group: String::new(),
        entities: Vec::new(),
        year: first_year,
        chart_kind: config.default_chart_kind.clone(),
        x_metric: config.default_x_metric,
        y_metric: config.default_y_metric,
    };
    log::info!("[GM] reactive: initial continent {} year {}", group, first_year);
    handle(&seed, ControlChange::Group(group), dataset, config)
}
