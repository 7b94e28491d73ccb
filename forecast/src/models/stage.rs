//! Ripeness stage models

use serde::{Deserialize, Serialize};

/// Coffee cherry ripeness stages, in maturation order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    Green,
    GreenYellow,
    /// Peak ripeness
    Cherry,
    Raisin,
    Dry,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Green,
        Stage::GreenYellow,
        Stage::Cherry,
        Stage::Raisin,
        Stage::Dry,
    ];
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Green => write!(f, "Green"),
            Stage::GreenYellow => write!(f, "Green-yellow"),
            Stage::Cherry => write!(f, "Cherry"),
            Stage::Raisin => write!(f, "Raisin"),
            Stage::Dry => write!(f, "Dry"),
        }
    }
}

/// Raw grain counts per stage from one sample
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StageCounts {
    #[serde(default)]
    pub green: u32,
    #[serde(default)]
    pub green_yellow: u32,
    #[serde(default)]
    pub cherry: u32,
    #[serde(default)]
    pub raisin: u32,
    #[serde(default)]
    pub dry: u32,
}

impl StageCounts {
    pub fn new(green: u32, green_yellow: u32, cherry: u32, raisin: u32, dry: u32) -> Self {
        Self {
            green,
            green_yellow,
            cherry,
            raisin,
            dry,
        }
    }

    pub fn get(&self, stage: Stage) -> u32 {
        match stage {
            Stage::Green => self.green,
            Stage::GreenYellow => self.green_yellow,
            Stage::Cherry => self.cherry,
            Stage::Raisin => self.raisin,
            Stage::Dry => self.dry,
        }
    }

    /// Total grains in the sample
    pub fn total(&self) -> u64 {
        Stage::ALL.iter().map(|s| u64::from(self.get(*s))).sum()
    }
}

/// Fraction of sampled grains in each stage
///
/// Values come from rounded upstream counts, so they only approximately
/// sum to 1.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StagePercentages {
    pub green: f64,
    pub green_yellow: f64,
    pub cherry: f64,
    pub raisin: f64,
    pub dry: f64,
}

impl StagePercentages {
    pub fn new(green: f64, green_yellow: f64, cherry: f64, raisin: f64, dry: f64) -> Self {
        Self {
            green,
            green_yellow,
            cherry,
            raisin,
            dry,
        }
    }

    /// Fractions of the count total; an empty sample yields all zeros
    pub fn from_counts(counts: &StageCounts) -> Self {
        let total = match counts.total() {
            0 => 1.0,
            n => n as f64,
        };
        Self {
            green: f64::from(counts.green) / total,
            green_yellow: f64::from(counts.green_yellow) / total,
            cherry: f64::from(counts.cherry) / total,
            raisin: f64::from(counts.raisin) / total,
            dry: f64::from(counts.dry) / total,
        }
    }

    pub fn get(&self, stage: Stage) -> f64 {
        match stage {
            Stage::Green => self.green,
            Stage::GreenYellow => self.green_yellow,
            Stage::Cherry => self.cherry,
            Stage::Raisin => self.raisin,
            Stage::Dry => self.dry,
        }
    }

    pub fn sum(&self) -> f64 {
        self.green + self.green_yellow + self.cherry + self.raisin + self.dry
    }

    pub fn to_array(&self) -> [f64; 5] {
        [self.green, self.green_yellow, self.cherry, self.raisin, self.dry]
    }
}

impl From<[f64; 5]> for StagePercentages {
    fn from(arr: [f64; 5]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3], arr[4])
    }
}
