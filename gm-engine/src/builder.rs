//! Chart specification builder.
//!
//! Filters the dataset down to the selected continent, year and countries,
//! then looks the chart kind up in the encoding table. Never fails: an empty
//! selection is an empty chart, an unknown kind is an untitled scatter.

use gm_data::{Dataset, Metric, Record};

use crate::spec::{ChartSpec, DataScope, Encoding};
use crate::{ChartKind, ControlState};

/// Default bin count for histogram charts.
pub const DEFAULT_HISTOGRAM_BINS: u32 = 20;

/// Build the chart for one set of control values.
pub fn build_chart(
    year: i32,
    group: &str,
    entities: &[String],
    chart_kind: &ChartKind,
    x_metric: Metric,
    y_metric: Metric,
    dataset: &Dataset,
) -> ChartSpec {
    let controls = ControlState {
        group: group.to_string(),
        entities: entities.to_vec(),
        year,
        chart_kind: chart_kind.clone(),
        x_metric,
        y_metric,
    };
    build_chart_for(&controls, dataset, DEFAULT_HISTOGRAM_BINS)
}

/// Build the chart for a control tuple with an explicit histogram bin count.
pub fn build_chart_for(controls: &ControlState, dataset: &Dataset, histogram_bins: u32) -> ChartSpec {
    let encoding = Encoding::for_kind(
        &controls.chart_kind,
        controls.x_metric,
        controls.y_metric,
        histogram_bins,
    );

    let data: Vec<Record> = dataset
        .records()
        .iter()
        .filter(|r| in_selection(r, controls))
        .filter(|r| encoding.scope == DataScope::FullSeries || r.year == controls.year)
        .cloned()
        .collect();

    log::debug!(
        "[GM] builder: {} chart with {} rows for {} {}",
        controls.chart_kind,
        data.len(),
        controls.group,
        controls.year
    );

    ChartSpec {
        title: title_for(controls),
        kind: controls.chart_kind.clone(),
        encoding,
        data,
    }
}

fn in_selection(r: &Record, controls: &ControlState) -> bool {
    r.continent == controls.group
        && (controls.entities.is_empty() || controls.entities.iter().any(|e| *e == r.country))
}

fn title_for(controls: &ControlState) -> Option<String> {
    match &controls.chart_kind {
        // A line chart shows the whole trend, so the year is left out.
        ChartKind::Line => Some(format!(
            "Line Chart - {} Trend ({})",
            controls.y_metric.key(),
            controls.group
        )),
        ChartKind::Unrecognized(_) => None,
        kind => Some(format!(
            "{} - {} ({})",
            title_case(kind.key()),
            controls.year,
            controls.group
        )),
    }
}

/// Capitalize the first letter of every alphabetic run, lowercase the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gm_data::{prepare, ColumnMap, RawTable};

    fn dataset() -> Dataset {
        let csv = "\
country,continent,year,lifeExp,pop,gdpPercap,iso_alpha
China,Asia,1952,44,556263527,400.448611,CHN
China,Asia,1957,50.54896,637408000,575.9870009,CHN
India,Asia,1952,37.373,372000000,546.5657493,IND
India,Asia,1957,40.249,409000000,590.061996,IND
Japan,Asia,1952,63.03,86459025,3216.956347,JPN
Japan,Asia,1957,65.5,91563009,4317.694365,JPN
Albania,Europe,1952,55.23,1282697,1601.056136,ALB
";
        prepare(&RawTable::from_csv_str(csv).unwrap(), &ColumnMap::default()).unwrap()
    }

    fn names(spec: &ChartSpec) -> Vec<(&str, i32)> {
        spec.data.iter().map(|r| (r.country.as_str(), r.year)).collect()
    }

    #[test]
    fn filters_by_group_and_year() {
        let spec = build_chart(
            1957,
            "Asia",
            &[],
            &ChartKind::Bar,
            Metric::GdpPercap,
            Metric::LifeExp,
            &dataset(),
        );
        assert_eq!(names(&spec), vec![("China", 1957), ("India", 1957), ("Japan", 1957)]);
        assert_eq!(spec.title.as_deref(), Some("Bar - 1957 (Asia)"));
    }

    #[test]
    fn filters_by_entities_when_given() {
        let spec = build_chart(
            1952,
            "Asia",
            &["Japan".to_string(), "Albania".to_string()],
            &ChartKind::Box,
            Metric::GdpPercap,
            Metric::Pop,
            &dataset(),
        );
        // Albania is selected but outside the continent.
        assert_eq!(names(&spec), vec![("Japan", 1952)]);
    }

    #[test]
    fn line_ignores_year_filter() {
        let spec = build_chart(
            1952,
            "Asia",
            &["India".to_string()],
            &ChartKind::Line,
            Metric::GdpPercap,
            Metric::GdpGrowth,
            &dataset(),
        );
        assert_eq!(names(&spec), vec![("India", 1952), ("India", 1957)]);
        assert_eq!(
            spec.title.as_deref(),
            Some("Line Chart - gdp_growth Trend (Asia)")
        );
    }

    #[test]
    fn empty_selection_is_an_empty_chart() {
        let spec = build_chart(
            1999,
            "Asia",
            &[],
            &ChartKind::Scatter,
            Metric::GdpPercap,
            Metric::LifeExp,
            &dataset(),
        );
        assert!(spec.is_empty());
        assert_eq!(spec.title.as_deref(), Some("Scatter - 1999 (Asia)"));
    }

    #[test]
    fn unknown_kind_falls_back_without_title() {
        let spec = build_chart(
            1952,
            "Asia",
            &[],
            &ChartKind::from("unknown_value"),
            Metric::GdpPercap,
            Metric::LifeExp,
            &dataset(),
        );
        assert!(spec.title.is_none());
        assert_eq!(spec.data.len(), 3);
        assert_eq!(spec.kind.key(), "unknown_value");
    }

    #[test]
    fn histogram_bins_are_configurable() {
        let controls = ControlState {
            group: "Asia".to_string(),
            entities: Vec::new(),
            year: 1952,
            chart_kind: ChartKind::Histogram,
            x_metric: Metric::GdpPercap,
            y_metric: Metric::LifeExp,
        };
        let spec = build_chart_for(&controls, &dataset(), 5);
        assert_eq!(spec.encoding.x.unwrap().bins, Some(5));
        assert_eq!(spec.title.as_deref(), Some("Histogram - 1952 (Asia)"));
    }

    #[test]
    fn title_case_matches_word_capitalization() {
        assert_eq!(title_case("scatter"), "Scatter");
        assert_eq!(title_case("CHOROPLETH"), "Choropleth");
        assert_eq!(title_case("box plot"), "Box Plot");
        assert_eq!(title_case("x_axis"), "X_Axis");
    }
}
