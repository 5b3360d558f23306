use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DataError;

/// One (country, year) observation.
///
/// Field names serialize to the Gapminder column keys so that chart
/// data handed to the renderer lines up with the metric keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Country name (the entity)
    pub country: String,
    /// Continent (the group)
    pub continent: String,
    pub year: i32,
    #[serde(rename = "gdpPercap")]
    pub gdp_percap: f64,
    #[serde(rename = "lifeExp")]
    pub life_exp: f64,
    pub pop: f64,
    /// ISO 3166-1 alpha-3 code, used as the choropleth location
    pub iso_alpha: String,
    /// Percent change of `gdp_percap` against this country's previous row.
    /// `None` for the first observed year.
    pub gdp_growth: Option<f64>,
}

impl Record {
    /// Value of the given metric for this row. Only growth can be absent.
    pub fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::GdpPercap => Some(self.gdp_percap),
            Metric::LifeExp => Some(self.life_exp),
            Metric::Pop => Some(self.pop),
            Metric::GdpGrowth => self.gdp_growth,
        }
    }
}

/// The four numeric fields selectable for a chart axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Metric {
    #[serde(rename = "gdpPercap")]
    GdpPercap,
    #[serde(rename = "lifeExp")]
    LifeExp,
    #[serde(rename = "pop")]
    Pop,
    #[serde(rename = "gdp_growth")]
    GdpGrowth,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::GdpPercap,
        Metric::LifeExp,
        Metric::Pop,
        Metric::GdpGrowth,
    ];

    /// Column key, as used in chart encodings and titles.
    pub fn key(self) -> &'static str {
        match self {
            Metric::GdpPercap => "gdpPercap",
            Metric::LifeExp => "lifeExp",
            Metric::Pop => "pop",
            Metric::GdpGrowth => "gdp_growth",
        }
    }

    /// Human readable label for dropdown options.
    pub fn label(self) -> &'static str {
        match self {
            Metric::GdpPercap => "GDP per Capita",
            Metric::LifeExp => "Life Expectancy",
            Metric::Pop => "Population",
            Metric::GdpGrowth => "GDP Growth (%)",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Metric {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|m| m.key() == s.trim())
            .ok_or_else(|| DataError::InvalidMetric(s.to_string()))
    }
}
