//! Ventures shown in the portfolio explorer and on founders' venture pages.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::field::Identified;
use crate::normalize_key;

/// Funding stage of a venture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VentureStage {
    Idea,
    Mvp,
    PreSeed,
    Seed,
    SeriesA,
    Growth,
}

impl VentureStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idea => "idea",
            Self::Mvp => "mvp",
            Self::PreSeed => "pre_seed",
            Self::Seed => "seed",
            Self::SeriesA => "series_a",
            Self::Growth => "growth",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idea => "Idea",
            Self::Mvp => "MVP",
            Self::PreSeed => "Pre-Seed",
            Self::Seed => "Seed",
            Self::SeriesA => "Series A",
            Self::Growth => "Growth",
        }
    }

    pub const fn all() -> &'static [VentureStage] {
        &[
            Self::Idea,
            Self::Mvp,
            Self::PreSeed,
            Self::Seed,
            Self::SeriesA,
            Self::Growth,
        ]
    }
}

impl fmt::Display for VentureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VentureStage {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "idea" => Ok(Self::Idea),
            "mvp" => Ok(Self::Mvp),
            "pre_seed" => Ok(Self::PreSeed),
            "seed" => Ok(Self::Seed),
            "series_a" => Ok(Self::SeriesA),
            "growth" => Ok(Self::Growth),
            _ => Err(ModelError::unknown("venture stage", s)),
        }
    }
}

/// A company in the platform portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venture {
    pub id: String,
    pub name: String,
    pub industry: String,
    pub stage: VentureStage,
    pub founder: String,
    /// Platform ownership as a percentage (0-100).
    pub ownership_pct: f64,
    /// Capital invested by the platform in USD.
    pub invested: f64,
    /// Static sample valuation of the platform stake in USD.
    pub current_value: f64,
    pub founded: NaiveDate,
    pub tags: Vec<String>,
}

impl Venture {
    /// Current value over invested capital, `None` when nothing was invested.
    pub fn multiple(&self) -> Option<f64> {
        (self.invested > 0.0).then(|| self.current_value / self.invested)
    }
}

impl Identified for Venture {
    fn id(&self) -> &str {
        &self.id
    }
}
