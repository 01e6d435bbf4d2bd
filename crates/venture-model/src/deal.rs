//! Deals tracked through the investment pipeline.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::field::Identified;
use crate::normalize_key;

/// Lifecycle stage of a deal, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealStage {
    Sourcing,
    DueDiligence,
    TermSheet,
    Closing,
    Closed,
}

impl DealStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sourcing => "sourcing",
            Self::DueDiligence => "due_diligence",
            Self::TermSheet => "term_sheet",
            Self::Closing => "closing",
            Self::Closed => "closed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sourcing => "Sourcing",
            Self::DueDiligence => "Due Diligence",
            Self::TermSheet => "Term Sheet",
            Self::Closing => "Closing",
            Self::Closed => "Closed",
        }
    }

    /// All stages in pipeline order.
    pub const fn all() -> &'static [DealStage] {
        &[
            Self::Sourcing,
            Self::DueDiligence,
            Self::TermSheet,
            Self::Closing,
            Self::Closed,
        ]
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

impl fmt::Display for DealStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DealStage {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "sourcing" => Ok(Self::Sourcing),
            "due_diligence" => Ok(Self::DueDiligence),
            "term_sheet" => Ok(Self::TermSheet),
            "closing" => Ok(Self::Closing),
            "closed" => Ok(Self::Closed),
            _ => Err(ModelError::unknown("deal stage", s)),
        }
    }
}

/// A prospective or completed investment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    pub company: String,
    pub sector: String,
    pub stage: DealStage,
    /// Ticket size in USD.
    pub amount: f64,
    /// Pre-money valuation in USD, when known.
    pub valuation: Option<f64>,
    pub lead_investor: String,
    pub expected_close: Option<NaiveDate>,
    pub tags: Vec<String>,
}

impl Identified for Deal {
    fn id(&self) -> &str {
        &self.id
    }
}
