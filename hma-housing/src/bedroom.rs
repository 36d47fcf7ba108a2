use crate::endpoint::{Endpoint, Resource};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bedroom bucket assigned by the backend to every sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BedroomCategory {
    Small,
    Medium,
    Large,
}

impl BedroomCategory {
    pub const ALL: [BedroomCategory; 3] = [
        BedroomCategory::Small,
        BedroomCategory::Medium,
        BedroomCategory::Large,
    ];

    /// Wire value (`small`, `medium`, `large`).
    pub fn as_str(&self) -> &'static str {
        match self {
            BedroomCategory::Small => "small",
            BedroomCategory::Medium => "medium",
            BedroomCategory::Large => "large",
        }
    }

    /// Capitalized label for legends and buttons.
    pub fn label(&self) -> &'static str {
        match self {
            BedroomCategory::Small => "Small",
            BedroomCategory::Medium => "Medium",
            BedroomCategory::Large => "Large",
        }
    }
}

impl fmt::Display for BedroomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BedroomCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "small" => Ok(BedroomCategory::Small),
            "medium" => Ok(BedroomCategory::Medium),
            "large" => Ok(BedroomCategory::Large),
            other => anyhow::bail!("unknown bedroom category '{}'", other),
        }
    }
}

/// Response of `/housing/bedrooms`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BedroomCounts {
    pub small: u64,
    pub medium: u64,
    pub large: u64,
    pub total: u64,
}

impl BedroomCounts {
    pub fn count(&self, category: BedroomCategory) -> u64 {
        match category {
            BedroomCategory::Small => self.small,
            BedroomCategory::Medium => self.medium,
            BedroomCategory::Large => self.large,
        }
    }

    /// Share of `total` in percent; `0.0` when there are no sales.
    pub fn share(&self, category: BedroomCategory) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(category) as f64 / self.total as f64 * 100.0
    }
}

impl Resource for BedroomCounts {
    const ENDPOINT: Endpoint = Endpoint::Bedrooms;
}
