//! Dropdown option lists, chief among them the country list for a continent.

use std::collections::BTreeSet;

use gm_data::{DataError, Dataset, Metric};
use serde::{Deserialize, Serialize};

use crate::ChartKind;

/// Number of countries preselected when the continent changes.
pub const DEFAULT_SELECTION_LEN: usize = 3;

/// One dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Country options for one continent plus the default selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityOptions {
    /// Every country of the continent, sorted ascending
    pub options: Vec<SelectOption>,
    /// Prefix of `options` selected by default
    pub default_selection: Vec<String>,
}

impl EntityOptions {
    pub fn values(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.value.as_str()).collect()
    }
}

/// Country options for `group`, with the first three preselected.
///
/// Fails with [`DataError::InvalidGroup`] if no row belongs to `group`.
pub fn update_entity_options(group: &str, dataset: &Dataset) -> Result<EntityOptions, DataError> {
    update_entity_options_with(group, dataset, DEFAULT_SELECTION_LEN)
}

/// Like [`update_entity_options`] with a configurable selection length.
pub fn update_entity_options_with(
    group: &str,
    dataset: &Dataset,
    selection_len: usize,
) -> Result<EntityOptions, DataError> {
    if !dataset.has_group(group) {
        return Err(DataError::InvalidGroup(group.to_string()));
    }

    // BTreeSet gives distinct names in ascending lexicographic order.
    let entities: BTreeSet<&str> = dataset
        .records()
        .iter()
        .filter(|r| r.continent == group)
        .map(|r| r.country.as_str())
        .collect();

    let options: Vec<SelectOption> = entities.iter().map(|e| SelectOption::new(*e, *e)).collect();
    let default_selection = entities
        .iter()
        .take(selection_len)
        .map(|e| e.to_string())
        .collect();

    log::debug!(
        "[GM] options: {} countries for {}",
        options.len(),
        group
    );
    Ok(EntityOptions {
        options,
        default_selection,
    })
}

/// Flip `entity` in or out of `selection`, keeping the order of `options`.
///
/// Values not present in `options` are dropped from the result.
pub fn toggle_selection(selection: &[String], options: &[SelectOption], entity: &str) -> Vec<String> {
    let was_selected = selection.iter().any(|e| e == entity);
    options
        .iter()
        .filter(|o| {
            if o.value == entity {
                !was_selected
            } else {
                selection.contains(&o.value)
            }
        })
        .map(|o| o.value.clone())
        .collect()
}

/// Continent dropdown options, sorted.
pub fn group_options(dataset: &Dataset) -> Vec<SelectOption> {
    dataset
        .groups()
        .into_iter()
        .map(|g| SelectOption::new(g.clone(), g))
        .collect()
}

/// Chart type dropdown options.
pub fn chart_kind_options() -> Vec<SelectOption> {
    ChartKind::KNOWN
        .iter()
        .map(|k| SelectOption::new(k.label().unwrap_or_default(), k.key()))
        .collect()
}

/// Axis metric dropdown options.
pub fn metric_options() -> Vec<SelectOption> {
    Metric::ALL
        .iter()
        .map(|m| SelectOption::new(m.label(), m.key()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gm_data::{prepare, ColumnMap, RawTable};

    fn dataset() -> Dataset {
        let csv = "\
country,continent,year,lifeExp,pop,gdpPercap,iso_alpha
Japan,Asia,1952,63.03,86459025,3216.956347,JPN
India,Asia,1952,37.373,372000000,546.5657493,IND
China,Asia,1952,44,556263527,400.448611,CHN
Afghanistan,Asia,1952,28.801,8425333,779.4453145,AFG
China,Asia,1957,50.54896,637408000,575.9870009,CHN
Albania,Europe,1952,55.23,1282697,1601.056136,ALB
Austria,Europe,1952,66.8,6927772,6137.076492,AUT
Australia,Oceania,1952,69.12,8691212,10039.59564,AUS
";
        let table = RawTable::from_csv_str(csv).unwrap();
        prepare(&table, &ColumnMap::default()).unwrap()
    }

    #[test]
    fn options_are_sorted_and_distinct() {
        let opts = update_entity_options("Asia", &dataset()).unwrap();
        assert_eq!(opts.values(), vec!["Afghanistan", "China", "India", "Japan"]);
        assert_eq!(opts.options[1], SelectOption::new("China", "China"));
    }

    #[test]
    fn default_selection_is_first_three() {
        let opts = update_entity_options("Asia", &dataset()).unwrap();
        assert_eq!(opts.default_selection, vec!["Afghanistan", "China", "India"]);
    }

    #[test]
    fn default_selection_is_shorter_for_small_groups() {
        let ds = dataset();
        let europe = update_entity_options("Europe", &ds).unwrap();
        assert_eq!(europe.default_selection, vec!["Albania", "Austria"]);
        let oceania = update_entity_options("Oceania", &ds).unwrap();
        assert_eq!(oceania.default_selection, vec!["Australia"]);
    }

    #[test]
    fn selection_length_is_configurable() {
        let opts = update_entity_options_with("Asia", &dataset(), 1).unwrap();
        assert_eq!(opts.default_selection, vec!["Afghanistan"]);
        let none = update_entity_options_with("Asia", &dataset(), 0).unwrap();
        assert!(none.default_selection.is_empty());
        assert_eq!(none.options.len(), 4);
    }

    #[test]
    fn unknown_group_is_rejected() {
        let err = update_entity_options("Atlantis", &dataset()).unwrap_err();
        assert!(matches!(err, DataError::InvalidGroup(g) if g == "Atlantis"));
    }

    #[test]
    fn update_is_idempotent() {
        let ds = dataset();
        assert_eq!(
            update_entity_options("Asia", &ds).unwrap(),
            update_entity_options("Asia", &ds).unwrap()
        );
    }

    #[test]
    fn toggle_adds_and_removes_in_option_order() {
        let opts = update_entity_options("Asia", &dataset()).unwrap();
        let sel = vec!["China".to_string()];
        let added = toggle_selection(&sel, &opts.options, "Afghanistan");
        assert_eq!(added, vec!["Afghanistan", "China"]);
        let removed = toggle_selection(&added, &opts.options, "China");
        assert_eq!(removed, vec!["Afghanistan"]);
        let empty = toggle_selection(&removed, &opts.options, "Afghanistan");
        assert!(empty.is_empty());
    }

    #[test]
    fn toggle_drops_stale_values() {
        let opts = update_entity_options("Europe", &dataset()).unwrap();
        let sel = vec!["Japan".to_string(), "Albania".to_string()];
        assert_eq!(
            toggle_selection(&sel, &opts.options, "Austria"),
            vec!["Albania", "Austria"]
        );
    }

    #[test]
    fn static_option_lists() {
        assert_eq!(
            group_options(&dataset())
                .iter()
                .map(|o| o.value.as_str())
                .collect::<Vec<_>>(),
            vec!["Asia", "Europe", "Oceania"]
        );
        assert_eq!(chart_kind_options().len(), 7);
        assert_eq!(chart_kind_options()[0], SelectOption::new("Scatter", "scatter"));
        assert_eq!(metric_options()[3], SelectOption::new("GDP Growth (%)", "gdp_growth"));
    }
}
