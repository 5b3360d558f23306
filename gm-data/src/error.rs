/// Error types for dataset preparation and control validation
use thiserror::Error;

/// Main error type for Gapminder data operations
#[derive(Error, Debug)]
pub enum DataError {
    /// One or more required columns are absent from the raw table
    #[error("Missing required columns: {}", missing.join(", "))]
    Schema { missing: Vec<String> },

    /// The raw table has a header but no data rows
    #[error("Dataset has no rows")]
    EmptyDataset,

    /// A group (continent) outside the dataset's group domain was requested
    #[error("Unknown group: {0}")]
    InvalidGroup(String),

    /// A metric key that is not one of the four axis metrics
    #[error("Unknown metric: {0}")]
    InvalidMetric(String),

    /// A cell could not be parsed into its column type
    #[error("Invalid value {value:?} for column '{column}' on line {line}")]
    InvalidValue {
        line: usize,
        column: String,
        value: String,
    },

    /// The same (entity, year) pair appears more than once
    #[error("Duplicate observation for {entity} in {year}")]
    DuplicateObservation { entity: String, year: i32 },

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_error_lists_every_missing_column() {
        let err = DataError::Schema {
            missing: vec!["pop".to_string(), "iso_alpha".to_string()],
        };
        assert_eq!(err.to_string(), "Missing required columns: pop, iso_alpha");
    }

    #[test]
    fn invalid_value_names_line_and_column() {
        let err = DataError::InvalidValue {
            line: 4,
            column: "year".to_string(),
            value: "19x2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value \"19x2\" for column 'year' on line 4"
        );
    }
}
