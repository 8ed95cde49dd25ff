//! Account editions.
//!
//! Some object kinds are only available from a given edition upward, so the
//! harness compares the current account's edition against a threshold. The
//! edition is reported by the engine as a service-level name.

use std::str::FromStr;

use phf::phf_map;
use thiserror::Error;

/// Service levels in ascending order of capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Edition {
    Standard,
    Enterprise,
    BusinessCritical,
}

static SERVICE_LEVELS: phf::Map<&'static str, Edition> = phf_map! {
    "STANDARD" => Edition::Standard,
    "ENTERPRISE" => Edition::Enterprise,
    "BUSINESS_CRITICAL" => Edition::BusinessCritical,
};

/// Error returned for a service-level name outside the known set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditionError {
    #[error("unknown service level {0:?}")]
    Unknown(String),
}

impl Edition {
    /// Whether enterprise-only features are available.
    #[must_use]
    pub fn is_enterprise(self) -> bool {
        self >= Self::Enterprise
    }

    #[must_use]
    pub fn is_business_critical(self) -> bool {
        self >= Self::BusinessCritical
    }
}

impl FromStr for Edition {
    type Err = EditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SERVICE_LEVELS
            .get(s)
            .copied()
            .ok_or_else(|| EditionError::Unknown(s.to_string()))
    }
}
