// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use binder_model::ParameterDescriptor;
use common::value::ArgumentMap;

use crate::{bind_argument::BindArgument, binder::ArgumentBinder, binding_error::BindingError};

/// Resolves declared operation parameters that are bound from field arguments.
#[derive(Debug, Clone)]
pub struct ArgumentResolver {
    binder: ArgumentBinder,
}

impl ArgumentResolver {
    pub fn new(binder: ArgumentBinder) -> Self {
        Self { binder }
    }

    /// Only parameters declared as arguments are resolved here. Others (context, environment,
    /// and so on) belong to other resolvers.
    pub fn supports_parameter(&self, parameter: &ParameterDescriptor) -> bool {
        parameter.is_argument()
    }

    pub fn resolve_argument<T: BindArgument>(
        &self,
        parameter: &ParameterDescriptor,
        arguments: &ArgumentMap,
    ) -> Result<Option<T>, BindingError> {
        let argument_name = parameter
            .argument_name()
            .ok_or_else(|| BindingError::UnsupportedParameter(parameter.name.clone()))?;

        let requested = T::target_type();
        if parameter.typ != requested {
            return Err(BindingError::ParameterTypeMismatch {
                parameter: parameter.name.clone(),
                declared: parameter.typ.name(),
                requested: requested.name(),
            });
        }

        self.binder.bind(argument_name, arguments)
    }
}

/// A parameter bound from the argument of the same name.
pub fn argument_parameter<T: BindArgument>(name: impl Into<String>) -> ParameterDescriptor {
    ParameterDescriptor::argument(name, T::target_type())
}

/// A parameter bound from the argument `argument_name`.
pub fn named_argument_parameter<T: BindArgument>(
    name: impl Into<String>,
    argument_name: impl Into<String>,
) -> ParameterDescriptor {
    ParameterDescriptor::named_argument(name, argument_name, T::target_type())
}

pub fn unbound_parameter<T: BindArgument>(name: impl Into<String>) -> ParameterDescriptor {
    ParameterDescriptor::unbound(name, T::target_type())
}
