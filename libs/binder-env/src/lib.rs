// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Access to configuration values that binders read at startup.
//!
//! Binders never read the process environment directly. They go through [`Environment`] so that
//! hosts (and tests) can supply values from an in-memory map instead.

use std::collections::HashMap;

/// A source of configuration values, keyed by variable name.
pub trait Environment: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// Read a flag. Unset flags take `default_value`; unrecognized spellings are an error.
    fn enabled(&self, key: &str, default_value: bool) -> Result<bool, EnvError> {
        let Some(value) = self.get(key) else {
            return Ok(default_value);
        };

        match value.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" | "enabled" | "enable" => Ok(true),
            "false" | "0" | "no" | "off" | "disabled" | "disable" => Ok(false),
            _ => Err(EnvError::InvalidBoolean {
                key: key.to_string(),
                value,
            }),
        }
    }

    fn get_usize(&self, key: &str, default_value: usize) -> Result<usize, EnvError> {
        let Some(value) = self.get(key) else {
            return Ok(default_value);
        };

        value.trim().parse().map_err(|_| EnvError::InvalidNumber {
            key: key.to_string(),
            value,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error(
        "Invalid value for {key}: {value}. Expected true, 1, yes, on, enabled, enable OR false, 0, no, off, disabled, disable"
    )]
    InvalidBoolean { key: String, value: String },

    #[error("Invalid value for {key}: {value}. Expected a non-negative integer")]
    InvalidNumber { key: String, value: String },
}

/// The process environment.
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed values, for tests and for hosts that assemble configuration themselves.
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment(HashMap<String, String>);

impl MapEnvironment {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Environment for MapEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for MapEnvironment {
    fn from(values: [(&str, &str); N]) -> Self {
        Self(
            values
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_accepts_common_spellings() {
        let env = MapEnvironment::from([("A", "Yes"), ("B", "off"), ("C", " 1 ")]);

        assert!(env.enabled("A", false).unwrap());
        assert!(!env.enabled("B", true).unwrap());
        assert!(env.enabled("C", false).unwrap());
        assert!(env.enabled("MISSING", true).unwrap());
    }

    #[test]
    fn enabled_rejects_unknown_values() {
        let env = MapEnvironment::from([("A", "maybe")]);

        assert!(matches!(
            env.enabled("A", false),
            Err(EnvError::InvalidBoolean { key, value }) if key == "A" && value == "maybe"
        ));
    }

    #[test]
    fn get_usize_parses_or_defaults() {
        let env = MapEnvironment::from([("DEPTH", "12"), ("BAD", "-3")]);

        assert_eq!(env.get_usize("DEPTH", 1).unwrap(), 12);
        assert_eq!(env.get_usize("MISSING", 7).unwrap(), 7);
        assert!(matches!(
            env.get_usize("BAD", 1),
            Err(EnvError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn system_environment_misses_unset_variables() {
        assert_eq!(SystemEnvironment.get("ARGBIND_UNSET_VARIABLE_FOR_TESTS"), None);
        assert!(SystemEnvironment.enabled("ARGBIND_UNSET_VARIABLE_FOR_TESTS", true).unwrap());
    }
}
