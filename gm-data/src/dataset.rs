//! The immutable, sorted country-year dataset.
//!
//! [`prepare`] is run once at startup. It types every raw row, sorts the
//! rows by (country, year) and derives `gdp_growth` from the previous row
//! of the same country. Afterwards the [`Dataset`] is read-only and cheap
//! to clone (the rows sit behind an `Arc`).

use std::collections::BTreeSet;
use std::str::FromStr;
use std::sync::Arc;

use crate::table::{ColumnIndex, ColumnMap, RawTable};
use crate::{DataError, Record};

/// Records ordered by (country, year), shared read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Arc<[Record]>,
}

/// Build a [`Dataset`] from a raw table.
///
/// Rows are stable-sorted by (country, year). For each row,
/// `gdp_growth = (gdp[t] / gdp[t-1] - 1) * 100` where `t-1` is the
/// immediately preceding row of the same country; the first row of a
/// country has no growth.
///
/// # Errors
///
/// - [`DataError::Schema`] if a required column is missing
/// - [`DataError::EmptyDataset`] if the table has no rows
/// - [`DataError::InvalidValue`] if a numeric cell does not parse
/// - [`DataError::DuplicateObservation`] if a (country, year) pair repeats
pub fn prepare(table: &RawTable, columns: &ColumnMap) -> Result<Dataset, DataError> {
    let idx = columns.resolve(table)?;
    if table.rows.is_empty() {
        return Err(DataError::EmptyDataset);
    }

    let mut records = table
        .rows
        .iter()
        .enumerate()
        // line 1 is the header
        .map(|(i, row)| parse_row(row, i + 2, &idx, columns))
        .collect::<Result<Vec<_>, _>>()?;

    records.sort_by(|a, b| a.country.cmp(&b.country).then(a.year.cmp(&b.year)));

    for i in 1..records.len() {
        let (head, tail) = records.split_at_mut(i);
        let prev = &head[i - 1];
        let cur = &mut tail[0];
        if prev.country != cur.country {
            continue;
        }
        if prev.year == cur.year {
            return Err(DataError::DuplicateObservation {
                entity: cur.country.clone(),
                year: cur.year,
            });
        }
        cur.gdp_growth = growth_pct(prev.gdp_percap, cur.gdp_percap);
    }

    log::info!("[GM] dataset: prepared {} records", records.len());
    Ok(Dataset {
        records: records.into(),
    })
}

/// Percent change from `prev` to `cur`; `None` when it is not finite.
fn growth_pct(prev: f64, cur: f64) -> Option<f64> {
    let pct = (cur / prev - 1.0) * 100.0;
    pct.is_finite().then_some(pct)
}

fn parse_row(
    row: &[String],
    line: usize,
    idx: &ColumnIndex,
    columns: &ColumnMap,
) -> Result<Record, DataError> {
    let cell = |i: usize| row.get(i).map(String::as_str).unwrap_or("");

    Ok(Record {
        country: cell(idx.entity).to_string(),
        continent: cell(idx.group).to_string(),
        year: parse_cell(cell(idx.year), line, &columns.year)?,
        gdp_percap: parse_cell(cell(idx.gdp_percap), line, &columns.gdp_percap)?,
        life_exp: parse_cell(cell(idx.life_exp), line, &columns.life_exp)?,
        pop: parse_cell(cell(idx.pop), line, &columns.pop)?,
        iso_alpha: cell(idx.iso_code).to_string(),
        gdp_growth: None,
    })
}

fn parse_cell<T: FromStr>(value: &str, line: usize, column: &str) -> Result<T, DataError> {
    value.trim().parse::<T>().map_err(|_| DataError::InvalidValue {
        line,
        column: column.to_string(),
        value: value.to_string(),
    })
}

impl Dataset {
    /// All records, ordered by (country, year).
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct continents, sorted.
    pub fn groups(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.continent.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Distinct years, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.records
            .iter()
            .map(|r| r.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Smallest and largest year.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let min = self.records.iter().map(|r| r.year).min()?;
        let max = self.records.iter().map(|r| r.year).max()?;
        Some((min, max))
    }

    pub fn has_group(&self, group: &str) -> bool {
        self.records.iter().any(|r| r.continent == group)
    }

    /// One country's rows in chronological order.
    pub fn entity_series(&self, entity: &str) -> &[Record] {
        // Rows are sorted by country, so one country is a contiguous run.
        let start = self.records.partition_point(|r| r.country.as_str() < entity);
        let len = self.records[start..]
            .iter()
            .take_while(|r| r.country == entity)
            .count();
        &self.records[start..start + len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const HEADER: &str = "country,continent,year,lifeExp,pop,gdpPercap,iso_alpha,iso_num\n";

    fn table(body: &str) -> RawTable {
        RawTable::from_csv_str(&format!("{HEADER}{body}")).unwrap()
    }

    fn sample() -> Dataset {
        // Deliberately out of order.
        let body = "\
Japan,Asia,1957,65.5,91563009,4317.694365,JPN,392
Albania,Europe,1952,55.23,1282697,1601.056136,ALB,8
Japan,Asia,1952,63.03,86459025,3216.956347,JPN,392
Albania,Europe,1962,64.82,1728137,2312.888958,ALB,8
Albania,Europe,1957,59.28,1476505,1942.284244,ALB,8
";
        prepare(&table(body), &ColumnMap::default()).unwrap()
    }

    #[test]
    fn prepare_sorts_by_country_then_year() {
        let ds = sample();
        let keys: Vec<(&str, i32)> = ds
            .records()
            .iter()
            .map(|r| (r.country.as_str(), r.year))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("Albania", 1952),
                ("Albania", 1957),
                ("Albania", 1962),
                ("Japan", 1952),
                ("Japan", 1957),
            ]
        );
    }

    #[test]
    fn prepare_derives_growth_from_previous_row_of_same_country() {
        let ds = sample();
        let r = ds.records();
        assert!(r[0].gdp_growth.is_none());
        assert_relative_eq!(
            r[1].gdp_growth.unwrap(),
            (1942.284244 / 1601.056136 - 1.0) * 100.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            r[2].gdp_growth.unwrap(),
            (2312.888958 / 1942.284244 - 1.0) * 100.0,
            epsilon = 1e-9
        );
        // First Japan row must not be computed against the last Albania row.
        assert!(r[3].gdp_growth.is_none());
        assert!(r[4].gdp_growth.is_some());
    }

    #[test]
    fn prepare_fails_on_missing_columns() {
        let t = RawTable::from_csv_str("country,continent,year\nJapan,Asia,1952\n").unwrap();
        assert!(matches!(
            prepare(&t, &ColumnMap::default()),
            Err(DataError::Schema { .. })
        ));
    }

    #[test]
    fn prepare_fails_on_empty_table() {
        let t = table("");
        assert!(matches!(
            prepare(&t, &ColumnMap::default()),
            Err(DataError::EmptyDataset)
        ));
    }

    #[test]
    fn schema_is_checked_before_emptiness() {
        let t = RawTable::new(vec!["country".into()], Vec::new());
        assert!(matches!(
            prepare(&t, &ColumnMap::default()),
            Err(DataError::Schema { .. })
        ));
    }

    #[test]
    fn prepare_rejects_unparsable_numbers() {
        let t = table("Japan,Asia,19x2,63.03,86459025,3216.956347,JPN,392\n");
        match prepare(&t, &ColumnMap::default()) {
            Err(DataError::InvalidValue { line, column, value }) => {
                assert_eq!(line, 2);
                assert_eq!(column, "year");
                assert_eq!(value, "19x2");
            }
            other => panic!("expected invalid value, got {:?}", other),
        }
    }

    #[test]
    fn prepare_rejects_duplicate_observations() {
        let body = "\
Japan,Asia,1952,63.03,86459025,3216.956347,JPN,392
Japan,Asia,1952,63.03,86459025,3216.956347,JPN,392
";
        assert!(matches!(
            prepare(&table(body), &ColumnMap::default()),
            Err(DataError::DuplicateObservation { year: 1952, .. })
        ));
    }

    #[test]
    fn growth_is_absent_after_zero_gdp() {
        let body = "\
Nowhere,Asia,1952,50,1000,0,NWH,0
Nowhere,Asia,1957,50,1000,10,NWH,0
";
        let ds = prepare(&table(body), &ColumnMap::default()).unwrap();
        assert!(ds.records()[1].gdp_growth.is_none());
    }

    #[test]
    fn domain_accessors() {
        let ds = sample();
        assert_eq!(ds.groups(), vec!["Asia", "Europe"]);
        assert_eq!(ds.years(), vec![1952, 1957, 1962]);
        assert_eq!(ds.year_bounds(), Some((1952, 1962)));
        assert!(ds.has_group("Europe"));
        assert!(!ds.has_group("Oceania"));
    }

    #[test]
    fn entity_series_is_contiguous_and_chronological() {
        let ds = sample();
        let albania: Vec<i32> = ds.entity_series("Albania").iter().map(|r| r.year).collect();
        assert_eq!(albania, vec![1952, 1957, 1962]);
        assert_eq!(ds.entity_series("Japan").len(), 2);
        assert!(ds.entity_series("Chad").is_empty());
    }

    #[test]
    fn dataset_clone_shares_rows() {
        let ds = sample();
        let ds2 = ds.clone();
        assert!(std::ptr::eq(ds.records(), ds2.records()));
    }
}
