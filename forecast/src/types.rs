//! Common types used across the forecasting crate

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ForecastError;

/// Calendar month, named in Portuguese as the field teams record it
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    Janeiro,
    Fevereiro,
    #[serde(rename = "março")]
    Marco,
    Abril,
    Maio,
    Junho,
    Julho,
    Agosto,
    Setembro,
    Outubro,
    Novembro,
    Dezembro,
}

impl Month {
    /// All months in calendar order
    pub const ALL: [Month; 12] = [
        Month::Janeiro,
        Month::Fevereiro,
        Month::Marco,
        Month::Abril,
        Month::Maio,
        Month::Junho,
        Month::Julho,
        Month::Agosto,
        Month::Setembro,
        Month::Outubro,
        Month::Novembro,
        Month::Dezembro,
    ];

    /// Lowercase Portuguese name
    pub fn name(&self) -> &'static str {
        match self {
            Month::Janeiro => "janeiro",
            Month::Fevereiro => "fevereiro",
            Month::Marco => "março",
            Month::Abril => "abril",
            Month::Maio => "maio",
            Month::Junho => "junho",
            Month::Julho => "julho",
            Month::Agosto => "agosto",
            Month::Setembro => "setembro",
            Month::Outubro => "outubro",
            Month::Novembro => "novembro",
            Month::Dezembro => "dezembro",
        }
    }

    /// 1-based month number
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    /// Parse a Portuguese month name, ignoring case
    pub fn parse(name: &str) -> Result<Self, ForecastError> {
        let lower = name.trim().to_lowercase();
        Month::ALL
            .into_iter()
            .find(|m| m.name() == lower)
            .ok_or_else(|| ForecastError::UnknownMonth(name.to_string()))
    }

    /// Month in which the given date falls
    pub fn from_date(date: NaiveDate) -> Self {
        Month::ALL[date.month0() as usize]
    }
}

impl FromStr for Month {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Month::parse(s)
    }
}

impl From<chrono::Month> for Month {
    fn from(month: chrono::Month) -> Self {
        Month::ALL[month.number_from_month() as usize - 1]
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Inclusive date range
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Month::parse("maio").unwrap(), Month::Maio);
        assert_eq!(Month::parse("MAIO").unwrap(), Month::Maio);
        assert_eq!(Month::parse("Março").unwrap(), Month::Marco);
        assert_eq!(Month::parse("MARÇO").unwrap(), Month::Marco);
        assert_eq!(" dezembro ".parse::<Month>().unwrap(), Month::Dezembro);
    }

    #[test]
    fn test_parse_unknown_name() {
        assert_eq!(
            Month::parse("may"),
            Err(ForecastError::UnknownMonth("may".to_string()))
        );
        assert!(Month::parse("").is_err());
    }

    #[test]
    fn test_names_round_trip() {
        for month in Month::ALL {
            assert_eq!(Month::parse(month.name()).unwrap(), month);
        }
    }

    #[test]
    fn test_from_date_and_chrono() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 6).unwrap();
        assert_eq!(Month::from_date(date), Month::Maio);
        assert_eq!(Month::from(chrono::Month::March), Month::Marco);
        assert_eq!(Month::from(chrono::Month::December).number(), 12);
    }

    #[test]
    fn test_serde_uses_portuguese_names() {
        assert_eq!(serde_json::to_string(&Month::Marco).unwrap(), "\"março\"");
        let month: Month = serde_json::from_str("\"agosto\"").unwrap();
        assert_eq!(month, Month::Agosto);
    }
}
