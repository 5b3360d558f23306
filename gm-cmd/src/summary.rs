//! Dataset overview.

use std::collections::BTreeSet;

use gm_data::Dataset;
use serde_json::{json, Value};

pub fn summarize(dataset: &Dataset) -> Value {
    let countries: BTreeSet<&str> = dataset.records().iter().map(|r| r.country.as_str()).collect();
    let (first_year, last_year) = match dataset.year_bounds() {
        Some((lo, hi)) => (json!(lo), json!(hi)),
        None => (Value::Null, Value::Null),
    };
    json!({
        "rows": dataset.len(),
        "countries": countries.len(),
        "continents": dataset.groups(),
        "years": dataset.years(),
        "first_year": first_year,
        "last_year": last_year,
    })
}
