//! Raw tabular input and the column-name mapping.
//!
//! The raw table keeps every cell as a string; typing happens in
//! [`crate::prepare`]. The default [`ColumnMap`] matches the Gapminder CSV
//! export:
//!
//! ```text
//! country,continent,year,lifeExp,pop,gdpPercap,iso_alpha,iso_num
//! Afghanistan,Asia,1952,28.801,8425333,779.4453145,AFG,4
//! ```

use serde::{Deserialize, Serialize};

use crate::DataError;

/// Header plus string rows, as read from CSV.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Parse CSV text (with a header row) into a raw table.
    pub fn from_csv_str(csv_data: &str) -> Result<Self, DataError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_data.as_bytes());

        let headers = rdr.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        log::info!("[GM] table: read {} rows", rows.len());
        Ok(Self { headers, rows })
    }

    /// Position of a header, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// Physical column names for each logical field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    pub entity: String,
    pub group: String,
    pub year: String,
    pub gdp_percap: String,
    pub life_exp: String,
    pub pop: String,
    pub iso_code: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            entity: "country".to_string(),
            group: "continent".to_string(),
            year: "year".to_string(),
            gdp_percap: "gdpPercap".to_string(),
            life_exp: "lifeExp".to_string(),
            pop: "pop".to_string(),
            iso_code: "iso_alpha".to_string(),
        }
    }
}

/// Resolved column positions for every required field.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ColumnIndex {
    pub entity: usize,
    pub group: usize,
    pub year: usize,
    pub gdp_percap: usize,
    pub life_exp: usize,
    pub pop: usize,
    pub iso_code: usize,
}

impl ColumnMap {
    fn required(&self) -> [&str; 7] {
        [
            self.entity.as_str(),
            self.group.as_str(),
            self.year.as_str(),
            self.gdp_percap.as_str(),
            self.life_exp.as_str(),
            self.pop.as_str(),
            self.iso_code.as_str(),
        ]
    }

    /// Resolve every required column against the table header.
    ///
    /// Fails with [`DataError::Schema`] naming all columns that are absent.
    pub(crate) fn resolve(&self, table: &RawTable) -> Result<ColumnIndex, DataError> {
        let missing: Vec<String> = self
            .required()
            .iter()
            .filter(|name| table.column_index(name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(DataError::Schema { missing });
        }

        let idx = |name: &str| table.column_index(name).unwrap_or_default();
        Ok(ColumnIndex {
            entity: idx(&self.entity),
            group: idx(&self.group),
            year: idx(&self.year),
            gdp_percap: idx(&self.gdp_percap),
            life_exp: idx(&self.life_exp),
            pop: idx(&self.pop),
            iso_code: idx(&self.iso_code),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "country,continent,year,lifeExp,pop,gdpPercap,iso_alpha,iso_num\n";

    #[test]
    fn from_csv_str_reads_headers_and_rows() {
        let csv = format!("{HEADER}Afghanistan,Asia,1952,28.801,8425333,779.4453145,AFG,4\n");
        let table = RawTable::from_csv_str(&csv).unwrap();
        assert_eq!(table.headers.len(), 8);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][0], "Afghanistan");
        assert_eq!(table.column_index("gdpPercap"), Some(5));
    }

    #[test]
    fn from_csv_str_trims_fields() {
        let csv = format!("{HEADER} Japan , Asia ,1952,63.03,86459025,3216.956347,JPN,392\n");
        let table = RawTable::from_csv_str(&csv).unwrap();
        assert_eq!(table.rows[0][0], "Japan");
        assert_eq!(table.rows[0][1], "Asia");
    }

    #[test]
    fn from_csv_str_rejects_ragged_rows() {
        let csv = format!("{HEADER}Japan,Asia,1952\n");
        assert!(matches!(
            RawTable::from_csv_str(&csv),
            Err(DataError::Csv(_))
        ));
    }

    #[test]
    fn resolve_reports_all_missing_columns() {
        let table = RawTable::new(
            vec!["country".into(), "continent".into(), "year".into()],
            Vec::new(),
        );
        match ColumnMap::default().resolve(&table) {
            Err(DataError::Schema { missing }) => {
                assert_eq!(
                    missing,
                    vec!["gdpPercap", "lifeExp", "pop", "iso_alpha"]
                );
            }
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn resolve_honours_custom_names() {
        let columns = ColumnMap {
            entity: "entity".into(),
            group: "group".into(),
            iso_code: "isoCode".into(),
            ..ColumnMap::default()
        };
        let table = RawTable::new(
            ["entity", "group", "year", "gdpPercap", "lifeExp", "pop", "isoCode"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            Vec::new(),
        );
        let idx = columns.resolve(&table).unwrap();
        assert_eq!(idx.entity, 0);
        assert_eq!(idx.iso_code, 6);
    }
}
