//! Platform members listed on the user management screen.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::field::Identified;
use crate::normalize_key;

/// Role a member picked during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Founder,
    Investor,
    Expert,
    Admin,
}

impl UserRole {
    /// Stable key used in filters and sample data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Founder => "founder",
            Self::Investor => "investor",
            Self::Expert => "expert",
            Self::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Founder => "Founder",
            Self::Investor => "Investor",
            Self::Expert => "Expert",
            Self::Admin => "Admin",
        }
    }

    pub const fn all() -> &'static [UserRole] {
        &[Self::Founder, Self::Investor, Self::Expert, Self::Admin]
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UserRole {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "founder" => Ok(Self::Founder),
            "investor" => Ok(Self::Investor),
            "expert" => Ok(Self::Expert),
            "admin" => Ok(Self::Admin),
            _ => Err(ModelError::unknown("role", s)),
        }
    }
}

/// Account status of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Pending,
    Suspended,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Suspended => "suspended",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Pending => "Pending",
            Self::Suspended => "Suspended",
        }
    }

    pub const fn all() -> &'static [UserStatus] {
        &[Self::Active, Self::Pending, Self::Suspended]
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UserStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "active" => Ok(Self::Active),
            "pending" => Ok(Self::Pending),
            "suspended" => Ok(Self::Suspended),
            _ => Err(ModelError::unknown("status", s)),
        }
    }
}

/// A platform member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    /// Company the member represents, if any.
    pub company: Option<String>,
    pub joined: NaiveDate,
}

impl Identified for User {
    fn id(&self) -> &str {
        &self.id
    }
}
