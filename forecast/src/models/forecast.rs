//! Forecast output models

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::DateRange;

/// Harvest forecast for one plot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    /// Estimated yield in sacks per hectare
    pub sacas_por_hectare: f64,
    /// Days from today until the ideal harvest
    pub dias_para_colheita: u32,
    pub data_ideal_colheita: NaiveDate,
}

impl Forecast {
    /// Display window of `margin_days` either side of the ideal date
    pub fn harvest_window(&self, margin_days: u32) -> DateRange {
        let margin = Days::new(u64::from(margin_days));
        DateRange {
            start: self
                .data_ideal_colheita
                .checked_sub_days(margin)
                .unwrap_or(NaiveDate::MIN),
            end: self
                .data_ideal_colheita
                .checked_add_days(margin)
                .unwrap_or(NaiveDate::MAX),
        }
    }
}

/// Forecast tagged with the plot it belongs to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlotForecast {
    pub id: Uuid,
    pub nome: String,
    pub fazenda_nome: String,
    #[serde(flatten)]
    pub forecast: Forecast,
    pub data_ultima_analise: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_harvest_window() {
        let forecast = Forecast {
            sacas_por_hectare: 17.6,
            dias_para_colheita: 45,
            data_ideal_colheita: date(2025, 7, 1),
        };
        let window = forecast.harvest_window(7);
        assert_eq!(window.start, date(2025, 6, 24));
        assert_eq!(window.end, date(2025, 7, 8));
        assert!(window.contains(date(2025, 7, 1)));

        let narrow = forecast.harvest_window(0);
        assert_eq!(narrow.start, narrow.end);
    }

    #[test]
    fn test_serializes_camel_case() {
        let forecast = Forecast {
            sacas_por_hectare: 9.5,
            dias_para_colheita: 3,
            data_ideal_colheita: date(2025, 1, 4),
        };
        let json = serde_json::to_value(&forecast).unwrap();
        assert_eq!(json["sacasPorHectare"], 9.5);
        assert_eq!(json["diasParaColheita"], 3);
        assert_eq!(json["dataIdealColheita"], "2025-01-04");
    }
}
