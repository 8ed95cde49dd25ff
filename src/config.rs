//! Harness configuration.
//!
//! Test objects are created under an environment prefix so several runs can
//! share one account. The prefix is read from `SNOWFLAKE_ENV_PREFIX` and
//! falls back to `PYTEST`.

use std::env;
use std::fmt;

/// Environment variable holding the raw prefix.
pub const ENV_PREFIX_VAR: &str = "SNOWFLAKE_ENV_PREFIX";

/// Prefix used when the variable is unset.
pub const DEFAULT_ENV_PREFIX: &str = "PYTEST";

const SEPARATOR: &str = "__";

/// Normalised environment prefix, uppercase and ending in `__`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EnvPrefix(String);

impl EnvPrefix {
    /// Normalise `raw`, using [`DEFAULT_ENV_PREFIX`] when it is `None`.
    #[must_use]
    pub fn new(raw: Option<&str>) -> Self {
        let base = raw.unwrap_or(DEFAULT_ENV_PREFIX).to_uppercase();
        Self(format!("{base}{SEPARATOR}"))
    }

    /// Read the prefix from [`ENV_PREFIX_VAR`].
    #[must_use]
    pub fn from_env() -> Self {
        let raw = env::var(ENV_PREFIX_VAR).ok();
        log::debug!("environment prefix from {ENV_PREFIX_VAR}: {raw:?}");
        Self::new(raw.as_deref())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prepend the prefix to an object name.
    #[must_use]
    pub fn apply(&self, name: &str) -> String {
        format!("{}{name}", self.0)
    }
}

impl Default for EnvPrefix {
    fn default() -> Self {
        Self::new(None)
    }
}

impl fmt::Display for EnvPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, "PYTEST__")]
    #[case(Some("ci"), "CI__")]
    #[case(Some("Dev_1"), "DEV_1__")]
    fn normalises_prefix(#[case] raw: Option<&str>, #[case] expected: &str) {
        assert_eq!(EnvPrefix::new(raw).as_str(), expected);
    }

    #[rstest]
    fn applies_to_object_names() {
        let prefix = EnvPrefix::new(Some("ci"));
        assert_eq!(prefix.apply("NP001_NETWORK_POLICY"), "CI__NP001_NETWORK_POLICY");
        assert_eq!(EnvPrefix::default().to_string(), "PYTEST__");
    }
}
