//! Plot snapshot models and the derivations made from them

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::StageCounts;

/// Average length of a year in days, leap years included
pub const DAYS_PER_YEAR: f64 = 365.25;

/// A ripeness analysis of photos collected in a plot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub counts: StageCounts,
    pub collected_at: NaiveDate,
}

/// What the forecaster needs to know about a plot (talhão)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlotSnapshot {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub farm_name: String,
    #[serde(default)]
    pub planting_date: Option<NaiveDate>,
    /// Most recent analysis, if any photos were ever collected
    #[serde(default)]
    pub latest_analysis: Option<Analysis>,
}

impl PlotSnapshot {
    pub fn age_years(&self, today: NaiveDate) -> u32 {
        self.planting_date
            .map(|planted| plant_age_years(planted, today))
            .unwrap_or(0)
    }
}

/// Whole years since planting; 0 for plantings in the future
pub fn plant_age_years(planting_date: NaiveDate, today: NaiveDate) -> u32 {
    if planting_date > today {
        return 0;
    }
    let days = (today - planting_date).num_days() as f64;
    (days / DAYS_PER_YEAR).floor() as u32
}

/// Whole calendar months since planting; 0 for plantings in the future
pub fn plant_age_months(planting_date: NaiveDate, today: NaiveDate) -> u32 {
    if planting_date > today {
        return 0;
    }
    let mut months = (today.year() - planting_date.year()) * 12 + today.month() as i32
        - planting_date.month() as i32;
    if today.day() < planting_date.day() {
        months -= 1;
    }
    months.max(0) as u32
}
