//! Dataset preparation for the Gapminder dashboard.
//!
//! This crate turns a raw country-year table into the immutable [`Dataset`]
//! every dashboard interaction reads from:
//! - `table`: raw CSV table plus the column-name mapping
//! - `record`: the typed [`Record`] row and the [`Metric`] axis keys
//! - `dataset`: [`prepare`] (sort + growth derivation) and domain accessors
//! - `error`: the [`DataError`] taxonomy
//!
//! # Usage
//!
//! ```rust
//! use gm_data::{prepare, ColumnMap, RawTable};
//!
//! let csv = "country,continent,year,lifeExp,pop,gdpPercap,iso_alpha\n\
//!            Japan,Asia,1957,65.5,91563009,4317.694365,JPN\n\
//!            Japan,Asia,1952,63.03,86459025,3216.956347,JPN\n";
//! let table = RawTable::from_csv_str(csv).unwrap();
//! let dataset = prepare(&table, &ColumnMap::default()).unwrap();
//!
//! assert_eq!(dataset.len(), 2);
//! assert_eq!(dataset.records()[0].year, 1952);
//! assert!(dataset.records()[0].gdp_growth.is_none());
//! ```

pub mod dataset;
pub mod error;
pub mod record;
pub mod table;

pub use dataset::{prepare, Dataset};
pub use error::DataError;
pub use record::{Metric, Record};
pub use table::{ColumnMap, RawTable};
