//! Environment overrides for property-test suites.
//!
//! `PROPTEST_CASES` sets the number of cases per property and
//! `BLOCKMODEL_PBT_FORK` runs each case in a forked subprocess. Malformed
//! values are reported through `tracing` and replaced by the suite default.

use std::env;
use std::fmt;

/// Environment variable controlling proptest case counts.
pub const PROPTEST_CASES_ENV_KEY: &str = "PROPTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const BLOCKMODEL_PBT_FORK_ENV_KEY: &str = "BLOCKMODEL_PBT_FORK";

/// Case count and fork mode resolved for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads the overrides, falling back to the given defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockmodel_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(PROPTEST_CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(BLOCKMODEL_PBT_FORK_ENV_KEY, default_fork, parse_flag),
        }
    }

    /// Number of cases to run per property.
    #[rustfmt::skip]
    #[must_use]
    pub const fn cases(&self) -> u32 { self.cases }

    /// Whether each case runs in a forked subprocess.
    #[rustfmt::skip]
    #[must_use]
    pub const fn fork(&self) -> bool { self.fork }
}

#[derive(Debug, PartialEq, Eq)]
enum OverrideError {
    NotANumber,
    ZeroCases,
    NotAFlag,
}

impl fmt::Display for OverrideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber => f.write_str("expected a positive integer"),
            Self::ZeroCases => f.write_str("case count must be at least 1"),
            Self::NotAFlag => f.write_str("expected one of true/false/1/0/yes/no/on/off"),
        }
    }
}

fn override_or<T>(
    key: &'static str,
    default: T,
    parse: fn(&str) -> Result<T, OverrideError>,
) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "ignoring malformed property-test override",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(OverrideError::ZeroCases),
        Ok(cases) => Ok(cases),
        Err(_) => Err(OverrideError::NotANumber),
    }
}

fn parse_flag(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::NotAFlag),
    }
}
