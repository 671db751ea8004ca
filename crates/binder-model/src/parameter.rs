// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::types::TargetType;

/// Where a declared parameter gets its value from.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum ParameterSource {
    /// Bound from a field argument. The argument is looked up by `name`, or by the parameter's own
    /// name when no explicit name is given.
    Argument { name: Option<String> },
    /// Supplied by something other than field arguments.
    Unbound,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ParameterDescriptor {
    pub name: String,
    pub source: ParameterSource,
    pub typ: TargetType,
}

impl ParameterDescriptor {
    pub fn argument(name: impl Into<String>, typ: TargetType) -> Self {
        Self {
            name: name.into(),
            source: ParameterSource::Argument { name: None },
            typ,
        }
    }

    pub fn named_argument(
        name: impl Into<String>,
        argument_name: impl Into<String>,
        typ: TargetType,
    ) -> Self {
        Self {
            name: name.into(),
            source: ParameterSource::Argument {
                name: Some(argument_name.into()),
            },
            typ,
        }
    }

    pub fn unbound(name: impl Into<String>, typ: TargetType) -> Self {
        Self {
            name: name.into(),
            source: ParameterSource::Unbound,
            typ,
        }
    }

    pub fn is_argument(&self) -> bool {
        matches!(self.source, ParameterSource::Argument { .. })
    }

    /// The key used to look the parameter up in the argument map, if it is an argument at all.
    pub fn argument_name(&self) -> Option<&str> {
        match &self.source {
            ParameterSource::Argument { name: Some(name) } => Some(name.as_str()),
            ParameterSource::Argument { name: None } => Some(self.name.as_str()),
            ParameterSource::Unbound => None,
        }
    }
}

/// The parameters of a declared operation (a query or mutation handler), in declaration order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OperationSignature {
    pub name: String,
    pub parameters: Vec<ParameterDescriptor>,
}

impl OperationSignature {
    pub fn new(name: impl Into<String>, parameters: Vec<ParameterDescriptor>) -> Self {
        Self {
            name: name.into(),
            parameters,
        }
    }

    pub fn parameter(&self, index: usize) -> Option<&ParameterDescriptor> {
        self.parameters.get(index)
    }

    pub fn argument_parameters(&self) -> impl Iterator<Item = &ParameterDescriptor> {
        self.parameters.iter().filter(|p| p.is_argument())
    }
}
