/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Checker configuration.
//!
//! Values come from [`CheckerConfig::default`], can be overridden from
//! the environment with [`CheckerConfig::from_env`], and can be
//! embedded in larger serde configurations.
//!
//! | key | environment variable | default |
//! |---|---|---|
//! | `tolerance` | `MAGMA_CHECK_TOLERANCE` | `1e-6` |
//! | `log_reports` | `MAGMA_CHECK_LOG_REPORTS` | `false` |

use std::env;

use serde::Deserialize;
use serde::Serialize;

/// Environment variable overriding [`CheckerConfig::tolerance`].
pub const TOLERANCE_ENV: &str = "MAGMA_CHECK_TOLERANCE";

/// Environment variable overriding [`CheckerConfig::log_reports`].
pub const LOG_REPORTS_ENV: &str = "MAGMA_CHECK_LOG_REPORTS";

/// Errors from parsing configuration values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The tolerance is not a finite, non-negative number.
    #[error("invalid tolerance {value:?}: expected a finite, non-negative number")]
    InvalidTolerance {
        /// The rejected value.
        value: String,
    },

    /// A boolean flag has an unrecognized value.
    #[error("invalid value {value:?} for {key}: expected true/false/1/0")]
    InvalidFlag {
        /// The configuration key.
        key: &'static str,
        /// The rejected value.
        value: String,
    },
}

/// How a [`Checker`](crate::Checker) compares and reports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Relative tolerance for laws involving an approximate
    /// operation.
    pub tolerance: f64,
    /// Log every checklist report at the end of a session.
    pub log_reports: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            log_reports: false,
        }
    }
}

impl CheckerConfig {
    /// Use `tolerance` for approximate comparisons.
    pub fn with_tolerance(self, tolerance: f64) -> Self {
        Self { tolerance, ..self }
    }

    /// Defaults, overridden from the environment. Values that fail to
    /// parse are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults, overridden by whatever `lookup` returns for each
    /// environment variable name.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        for key in [TOLERANCE_ENV, LOG_REPORTS_ENV] {
            let Some(value) = lookup(key) else {
                continue;
            };
            if let Err(e) = config.set(key, &value) {
                tracing::error!("failed to override checker config from ${}: {}", key, e);
            }
        }
        tracing::debug!(?config, "loaded checker configuration");
        config
    }

    /// Set the value named by environment variable `key`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            TOLERANCE_ENV => {
                self.tolerance = parse_tolerance(value)?;
            }
            LOG_REPORTS_ENV => {
                self.log_reports = parse_flag(LOG_REPORTS_ENV, value)?;
            }
            _ => tracing::warn!("ignoring unknown checker config key {}", key),
        }
        Ok(())
    }
}

fn parse_tolerance(value: &str) -> Result<f64, ConfigError> {
    match value.trim().parse::<f64>() {
        Ok(tolerance) if tolerance.is_finite() && tolerance >= 0.0 => Ok(tolerance),
        _ => Err(ConfigError::InvalidTolerance {
            value: value.to_string(),
        }),
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = CheckerConfig::from_lookup(lookup(&[]));
        assert_eq!(config, CheckerConfig::default());
        assert_eq!(config.tolerance, 1e-6);
        assert!(!config.log_reports);
    }

    #[test]
    fn overrides() {
        let config = CheckerConfig::from_lookup(lookup(&[
            (TOLERANCE_ENV, "0.25"),
            (LOG_REPORTS_ENV, "true"),
        ]));
        assert_eq!(config.tolerance, 0.25);
        assert!(config.log_reports);
    }

    #[test]
    fn bad_values_keep_defaults() {
        let config = CheckerConfig::from_lookup(lookup(&[
            (TOLERANCE_ENV, "-1"),
            (LOG_REPORTS_ENV, "maybe"),
        ]));
        assert_eq!(config, CheckerConfig::default());
    }

    #[test]
    fn set_reports_errors() {
        let mut config = CheckerConfig::default();
        assert_eq!(
            config.set(TOLERANCE_ENV, "NaN"),
            Err(ConfigError::InvalidTolerance {
                value: "NaN".to_string()
            })
        );
        assert!(matches!(
            config.set(LOG_REPORTS_ENV, "2"),
            Err(ConfigError::InvalidFlag { .. })
        ));
        assert_eq!(config.set("UNRELATED", "x"), Ok(()));
    }

    #[test]
    fn deserializes_with_defaults() -> anyhow::Result<()> {
        let config: CheckerConfig = serde_json::from_str(r#"{"tolerance": 0.001}"#)?;
        assert_eq!(config.tolerance, 0.001);
        assert!(!config.log_reports);
        assert_eq!(CheckerConfig::default().with_tolerance(0.5).tolerance, 0.5);
        Ok(())
    }
}
