// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use binder_env::{EnvError, Environment};
use common::env_const::{ARGBIND_MAX_DEPTH, ARGBIND_REJECT_UNKNOWN_FIELDS};

pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Settings shared by every binding call of an [`ArgumentBinder`](crate::ArgumentBinder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinderConfig {
    /// Fail when an argument object carries keys its target type doesn't declare (`__typename` is
    /// always tolerated). Off by default: undeclared keys are ignored.
    pub reject_unknown_fields: bool,
    /// Deepest level of nested objects and lists accepted under a single argument.
    pub max_depth: usize,
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            reject_unknown_fields: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl BinderConfig {
    pub fn from_env(env: &dyn Environment) -> Result<Self, EnvError> {
        let defaults = Self::default();

        Ok(Self {
            reject_unknown_fields: env.enabled(
                ARGBIND_REJECT_UNKNOWN_FIELDS,
                defaults.reject_unknown_fields,
            )?,
            max_depth: env.get_usize(ARGBIND_MAX_DEPTH, defaults.max_depth)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use binder_env::MapEnvironment;

    use super::*;

    #[test]
    fn empty_environment_gives_defaults() {
        let config = BinderConfig::from_env(&MapEnvironment::new()).unwrap();

        assert_eq!(config, BinderConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let env = MapEnvironment::from([
            (ARGBIND_REJECT_UNKNOWN_FIELDS, "true"),
            (ARGBIND_MAX_DEPTH, "3"),
        ]);

        assert_eq!(
            BinderConfig::from_env(&env).unwrap(),
            BinderConfig {
                reject_unknown_fields: true,
                max_depth: 3,
            }
        );
    }

    #[test]
    fn invalid_values_are_reported() {
        let env = MapEnvironment::from([(ARGBIND_MAX_DEPTH, "deep")]);

        assert!(matches!(
            BinderConfig::from_env(&env),
            Err(EnvError::InvalidNumber { key, .. }) if key == ARGBIND_MAX_DEPTH
        ));
    }
}
