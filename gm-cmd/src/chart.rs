//! `options` and `chart` commands.

use gm_data::{Dataset, Metric};
use gm_engine::options::update_entity_options_with;
use gm_engine::{build_chart_for, figure, ChartKind, ControlState, DashboardConfig};
use serde_json::Value;

/// Control values given on the command line; missing ones use the config defaults.
#[derive(Debug, Clone, Default)]
pub struct ChartRequest {
    pub group: String,
    pub year: i32,
    pub entities: Vec<String>,
    pub kind: Option<String>,
    pub x: Option<String>,
    pub y: Option<String>,
}

impl ChartRequest {
    /// Resolve into a full control tuple. Unknown metric keys are errors;
    /// unknown chart kinds are kept and rendered with the fallback encoding.
    pub fn into_controls(self, config: &DashboardConfig) -> anyhow::Result<ControlState> {
        let x_metric = parse_metric(self.x.as_deref(), config.default_x_metric)?;
        let y_metric = parse_metric(self.y.as_deref(), config.default_y_metric)?;
        let chart_kind = self
            .kind
            .map(ChartKind::from)
            .unwrap_or_else(|| config.default_chart_kind.clone());
        if !chart_kind.is_recognized() {
            log::warn!("Unknown chart kind '{}', using fallback chart", chart_kind);
        }
        Ok(ControlState {
            group: self.group,
            entities: self.entities,
            year: self.year,
            chart_kind,
            x_metric,
            y_metric,
        })
    }
}

fn parse_metric(key: Option<&str>, default: Metric) -> anyhow::Result<Metric> {
    match key {
        Some(key) => Ok(key.parse()?),
        None => Ok(default),
    }
}

pub fn options_json(group: &str, dataset: &Dataset, config: &DashboardConfig) -> anyhow::Result<Value> {
    let opts = update_entity_options_with(group, dataset, config.default_selection_len)?;
    Ok(serde_json::to_value(opts)?)
}

/// The chart for `request`, as a spec or (with `plotly`) a Plotly.js figure.
pub fn chart_json(
    request: &ChartRequest,
    dataset: &Dataset,
    config: &DashboardConfig,
    plotly: bool,
) -> anyhow::Result<Value> {
    let controls = request.clone().into_controls(config)?;
    if !dataset.has_group(&controls.group) {
        log::warn!("Continent '{}' not in dataset, chart will be empty", controls.group);
    }
    let spec = build_chart_for(&controls, dataset, config.histogram_bins);
    log::info!("Built {} chart with {} rows", spec.kind, spec.data.len());
    if plotly {
        Ok(figure::to_plotly(&spec, config.chart_height))
    } else {
        Ok(serde_json::to_value(&spec)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gm_data::{prepare, ColumnMap, DataError, RawTable};

    fn dataset() -> Dataset {
        let table = RawTable::from_csv_str(include_str!("../../fixtures/gapminder.csv")).unwrap();
        prepare(&table, &ColumnMap::default()).unwrap()
    }

    fn request(group: &str, year: i32) -> ChartRequest {
        ChartRequest {
            group: group.to_string(),
            year,
            ..ChartRequest::default()
        }
    }

    #[test]
    fn options_for_europe() {
        let v = options_json("Europe", &dataset(), &DashboardConfig::default()).unwrap();
        assert_eq!(v["options"].as_array().unwrap().len(), 3);
        assert_eq!(v["default_selection"][0], "Albania");
    }

    #[test]
    fn options_for_unknown_group_fail() {
        let err = options_json("Atlantis", &dataset(), &DashboardConfig::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DataError>(),
            Some(DataError::InvalidGroup(_))
        ));
    }

    #[test]
    fn chart_uses_config_defaults() {
        let controls = request("Asia", 1962).into_controls(&DashboardConfig::default()).unwrap();
        assert_eq!(controls.chart_kind, ChartKind::Scatter);
        assert_eq!(controls.x_metric, Metric::GdpPercap);
        assert_eq!(controls.y_metric, Metric::LifeExp);
    }

    #[test]
    fn chart_spec_json() {
        let mut req = request("Asia", 1962);
        req.entities = vec!["China".into(), "Japan".into(), "India".into()];
        let v = chart_json(&req, &dataset(), &DashboardConfig::default(), false).unwrap();
        assert_eq!(v["kind"], "scatter");
        assert_eq!(v["title"], "Scatter - 1962 (Asia)");
        assert_eq!(v["data"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn chart_plotly_json() {
        let mut req = request("Europe", 1957);
        req.kind = Some("choropleth".into());
        let v = chart_json(&req, &dataset(), &DashboardConfig::default(), true).unwrap();
        assert_eq!(v["data"][0]["type"], "choropleth");
        assert_eq!(v["layout"]["height"], 700);
    }

    #[test]
    fn unknown_kind_falls_back() {
        let mut req = request("Europe", 1952);
        req.kind = Some("unknown_value".into());
        let v = chart_json(&req, &dataset(), &DashboardConfig::default(), false).unwrap();
        assert!(v["title"].is_null());
        assert_eq!(v["data"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn unknown_metric_is_an_error() {
        let mut req = request("Asia", 1952);
        req.y = Some("happiness".into());
        let err = chart_json(&req, &dataset(), &DashboardConfig::default(), false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DataError>(),
            Some(DataError::InvalidMetric(m)) if m == "happiness"
        ));
    }
}
