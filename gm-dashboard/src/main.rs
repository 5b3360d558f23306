//! Gapminder Multi-Metric Dashboard
//!
//! Six controls (continent, countries, year, chart type, X and Y metric)
//! drive one Plotly.js chart.
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/gapminder.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds it into the WASM binary.
//! 3. On mount: prepare the dataset once (growth column included) and run
//!    the initial reaction, which fills options, selection and chart.
//! 4. Each control change goes through `AppState::dispatch`; whenever the
//!    chart signal changes the figure is re-rendered via `Plotly.react`.

use dioxus::prelude::*;
use gm_chart_ui::components::{
    ChartContainer, ChartHeader, ChartKindSelector, EntitySelector, ErrorDisplay, GroupSelector,
    LoadingSpinner, MetricAxis, MetricSelector, YearSlider,
};
use gm_chart_ui::js_bridge;
use gm_chart_ui::state::AppState;
use gm_data::{prepare, ColumnMap, DataError, Dataset, RawTable};
use gm_engine::figure;

const GAPMINDER_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/gapminder.csv"));

/// DOM id for the Plotly chart container div.
const CHART_CONTAINER_ID: &str = "main-graph";
const PAGE_TITLE: &str = "🌍 Multi-Metric Dashboard";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("gm-dashboard-root"))
        .launch(App);
}

fn load_dataset(csv_data: &str, columns: &ColumnMap) -> Result<Dataset, DataError> {
    let table = RawTable::from_csv_str(csv_data)?;
    prepare(&table, columns)
}

fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Prepare the dataset once on mount ───
    use_effect(move || {
        set_document_title(PAGE_TITLE);
        let columns = state.config.peek().columns.clone();

        match load_dataset(GAPMINDER_CSV, &columns) {
            Ok(dataset) => {
                log::info!(
                    "[GM] dashboard: {} rows, {} continents",
                    dataset.len(),
                    dataset.groups().len()
                );
                state.load(dataset);
            }
            Err(e) => {
                log::error!("[GM] dashboard: failed to prepare dataset: {}", e);
                state.error_msg.set(Some(e.to_string()));
                state.loading.set(false);
            }
        }

        js_bridge::init_charts();
    });

    // ─── Effect 2: Re-render whenever the chart spec changes ───
    use_effect(move || {
        let height = state.config.read().chart_height;
        // Clone out of the signal so the read borrow ends before rendering.
        let Some(spec) = state.chart.read().clone() else {
            return;
        };
        let fig = figure::to_plotly(&spec, height);
        js_bridge::render_figure(CHART_CONTAINER_ID, &fig.to_string());
    });

    use_drop(|| js_bridge::destroy_chart(CHART_CONTAINER_ID));

    let description = state
        .controls
        .read()
        .as_ref()
        .map(|c| format!("X: {}, Y: {}", c.x_metric.label(), c.y_metric.label()))
        .unwrap_or_default();
    let height = state.config.read().chart_height;

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            ChartHeader {
                title: PAGE_TITLE.to_string(),
                description: description,
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else if state.dataset.read().is_some() {
                GroupSelector {}
                EntitySelector {}
                YearSlider {}
                ChartKindSelector {}
                MetricSelector { axis: MetricAxis::X }
                MetricSelector { axis: MetricAxis::Y }

                ChartContainer {
                    id: CHART_CONTAINER_ID.to_string(),
                    loading: state.chart.read().is_none(),
                    height: height,
                }
            }
        }
    }
}
