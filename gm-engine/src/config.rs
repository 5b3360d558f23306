//! Dashboard defaults.
//!
//! Everything has a default matching the stock dashboard, so a TOML file
//! only needs the keys it wants to override:
//!
//! ```toml
//! default_group = "Europe"
//! histogram_bins = 30
//!
//! [columns]
//! iso_code = "iso3"
//! ```

use gm_data::{ColumnMap, Metric};
use serde::{Deserialize, Serialize};

use crate::builder::DEFAULT_HISTOGRAM_BINS;
use crate::options::DEFAULT_SELECTION_LEN;
use crate::ChartKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Continent selected on first load (falls back to the first continent)
    pub default_group: String,
    pub default_chart_kind: ChartKind,
    pub default_x_metric: Metric,
    pub default_y_metric: Metric,
    /// Countries preselected after a continent change
    pub default_selection_len: usize,
    pub histogram_bins: u32,
    /// Chart height in pixels
    pub chart_height: u32,
    /// Source column names
    pub columns: ColumnMap,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_group: "Asia".to_string(),
            default_chart_kind: ChartKind::Scatter,
            default_x_metric: Metric::GdpPercap,
            default_y_metric: Metric::LifeExp,
            default_selection_len: DEFAULT_SELECTION_LEN,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            chart_height: 700,
            columns: ColumnMap::default(),
        }
    }
}

impl DashboardConfig {
    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(
            DashboardConfig::from_toml_str("").unwrap(),
            DashboardConfig::default()
        );
    }

    #[test]
    fn toml_overrides_selected_keys() {
        let cfg = DashboardConfig::from_toml_str(
            r#"
            default_group = "Europe"
            default_chart_kind = "line"
            default_y_metric = "gdp_growth"
            histogram_bins = 30

            [columns]
            iso_code = "iso3"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.default_group, "Europe");
        assert_eq!(cfg.default_chart_kind, ChartKind::Line);
        assert_eq!(cfg.default_y_metric, Metric::GdpGrowth);
        assert_eq!(cfg.histogram_bins, 30);
        assert_eq!(cfg.columns.iso_code, "iso3");
        assert_eq!(cfg.columns.entity, "country");
        assert_eq!(cfg.default_selection_len, 3);
    }

    #[test]
    fn unknown_metric_is_rejected() {
        assert!(DashboardConfig::from_toml_str("default_x_metric = \"gdp\"").is_err());
    }
}
