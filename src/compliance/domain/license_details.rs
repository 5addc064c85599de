use serde::{Deserialize, Serialize};
use std::fmt;

/// Obligation tier of a license; P1 is the strongest copyleft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LicensePriority {
    P1,
    P2,
    P3,
    #[serde(rename = "NA")]
    NotAssigned,
}

impl LicensePriority {
    /// Maps the catalog's numeric priority level; anything outside 1..=3 is NA
    pub fn from_level(level: Option<u8>) -> Self {
        match level {
            Some(1) => LicensePriority::P1,
            Some(2) => LicensePriority::P2,
            Some(3) => LicensePriority::P3,
            _ => LicensePriority::NotAssigned,
        }
    }
}

impl fmt::Display for LicensePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LicensePriority::P1 => write!(f, "P1"),
            LicensePriority::P2 => write!(f, "P2"),
            LicensePriority::P3 => write!(f, "P3"),
            LicensePriority::NotAssigned => write!(f, "NA"),
        }
    }
}

/// Resolved license metadata for display and rule evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LicenseDetails {
    name: String,
    url: String,
    priority: LicensePriority,
}

impl LicenseDetails {
    pub fn new(name: String, url: String, priority: LicensePriority) -> Self {
        Self {
            name,
            url,
            priority,
        }
    }

    /// Details used when no license is selected or the lookup failed
    pub fn unspecified() -> Self {
        Self::new(String::new(), String::new(), LicensePriority::NotAssigned)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn priority(&self) -> LicensePriority {
        self.priority
    }

    pub fn is_unspecified(&self) -> bool {
        self.name.trim().is_empty()
    }
}
