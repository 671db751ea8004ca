// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt::Display;

use async_graphql_value::{ConstValue, Name, indexmap::IndexMap};
use binder_model::TargetType;
use common::value::SourceShape;
use tracing::debug;

use crate::{
    bind_argument::BindArgument,
    binding_error::BindingError,
    config::BinderConfig,
    conversion::{ConversionFailure, ConversionRegistry},
};

/// Key that clients such as Apollo add to objects they echo back as input. Never treated as an
/// unknown field.
const TYPENAME_FIELD: &str = "__typename";

/// Location of the value being bound, relative to the argument map.
#[derive(Debug, Clone, Copy)]
enum ArgumentPath<'a> {
    Argument(&'a str),
    Field(&'a ArgumentPath<'a>, &'a str),
    Element(&'a ArgumentPath<'a>, usize),
}

impl Display for ArgumentPath<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgumentPath::Argument(name) => write!(f, "{name}"),
            ArgumentPath::Field(parent, name) => write!(f, "{parent}.{name}"),
            ArgumentPath::Element(parent, index) => write!(f, "{parent}[{index}]"),
        }
    }
}

/// State threaded through one binding call.
///
/// [`BindArgument`] implementations receive a context for the value they are binding and use it
/// to bind nested values (which extends the path used in error messages) and to reach the
/// conversion registry.
#[derive(Debug)]
pub struct BindingContext<'a> {
    registry: &'a ConversionRegistry,
    config: &'a BinderConfig,
    path: ArgumentPath<'a>,
    depth: usize,
}

impl<'a> BindingContext<'a> {
    pub(crate) fn root(
        registry: &'a ConversionRegistry,
        config: &'a BinderConfig,
        argument_name: &'a str,
    ) -> Self {
        Self {
            registry,
            config,
            path: ArgumentPath::Argument(argument_name),
            depth: 0,
        }
    }

    fn child<'b>(&'b self, path: ArgumentPath<'b>) -> BindingContext<'b> {
        BindingContext {
            registry: self.registry,
            config: self.config,
            path,
            depth: self.depth + 1,
        }
    }

    pub fn path(&self) -> String {
        self.path.to_string()
    }

    /// Bind a value that may be absent. Absent and null values bind to `T`'s zero value.
    pub(crate) fn bind_entry<T: BindArgument>(
        &self,
        value: Option<&ConstValue>,
    ) -> Result<Option<T>, BindingError> {
        match value {
            None | Some(ConstValue::Null) => Ok(T::zero_value()),
            Some(value) => {
                self.check_depth()?;
                T::bind_value(value, self).map(Some)
            }
        }
    }

    fn bind_element<T: BindArgument>(&self, value: &ConstValue) -> Result<T, BindingError> {
        match value {
            ConstValue::Null => T::zero_value().ok_or_else(|| self.type_mismatch::<T>(value)),
            value => {
                self.check_depth()?;
                T::bind_value(value, self)
            }
        }
    }

    fn check_depth(&self) -> Result<(), BindingError> {
        if self.depth > self.config.max_depth {
            Err(BindingError::DepthLimitExceeded {
                path: self.path(),
                max_depth: self.config.max_depth,
            })
        } else {
            Ok(())
        }
    }

    /// Bind each element of a list argument, in order.
    pub fn list<T: BindArgument>(&self, value: &ConstValue) -> Result<Vec<T>, BindingError> {
        match value {
            ConstValue::List(elements) => elements
                .iter()
                .enumerate()
                .map(|(index, element)| {
                    self.child(ArgumentPath::Element(&self.path, index))
                        .bind_element(element)
                })
                .collect(),
            other => Err(self.mismatch(&TargetType::list(T::target_type()), other)),
        }
    }

    /// Bind a composite value by handing its fields to `build`.
    ///
    /// A type without settable fields, for which the registry has a converter from the raw shape,
    /// is converted instead.
    pub fn composite<T, F>(&self, value: &ConstValue, build: F) -> Result<T, BindingError>
    where
        T: BindArgument,
        F: FnOnce(&ObjectArguments<'_>) -> Result<T, BindingError>,
    {
        if self.registry.contains::<T>(SourceShape::of(value))
            && !T::target_type().has_settable_fields()
        {
            return self.convert(value);
        }

        match value {
            ConstValue::Object(fields) => {
                if self.config.reject_unknown_fields {
                    self.check_unknown_fields(&T::target_type(), fields)?;
                }
                build(&ObjectArguments { fields, cx: self })
            }
            other => Err(self.type_mismatch::<T>(other)),
        }
    }

    fn check_unknown_fields(
        &self,
        target: &TargetType,
        fields: &IndexMap<Name, ConstValue>,
    ) -> Result<(), BindingError> {
        let unknown: Vec<_> = fields
            .keys()
            .filter(|name| name.as_str() != TYPENAME_FIELD && target.field(name).is_none())
            .map(|name| name.to_string())
            .collect();

        if unknown.is_empty() {
            Ok(())
        } else {
            Err(BindingError::UnknownFields {
                path: self.path(),
                fields: unknown,
            })
        }
    }

    /// Produce `T` through the conversion registry.
    pub fn convert<T: BindArgument>(&self, value: &ConstValue) -> Result<T, BindingError> {
        let source_shape = SourceShape::of(value);

        match self.registry.convert::<T>(value) {
            Some(Ok(converted)) => {
                debug!(path = %self.path, %source_shape, "converted argument through the registry");
                Ok(converted)
            }
            Some(Err(ConversionFailure::Overflow)) => Err(self.overflow::<T>(value)),
            Some(Err(ConversionFailure::Invalid(message))) => {
                Err(self.conversion_failed::<T>(message))
            }
            None => Err(BindingError::UnsupportedConversion {
                path: self.path(),
                source_shape,
                target_type: T::target_type().name(),
            }),
        }
    }

    pub fn type_mismatch<T: BindArgument>(&self, value: &ConstValue) -> BindingError {
        self.mismatch(&T::target_type(), value)
    }

    fn mismatch(&self, expected: &TargetType, value: &ConstValue) -> BindingError {
        BindingError::TypeMismatch {
            path: self.path(),
            expected_type: expected.name(),
            actual_type: SourceShape::of(value).to_string(),
        }
    }

    pub fn overflow<T: BindArgument>(&self, value: &ConstValue) -> BindingError {
        BindingError::NumericOverflow {
            path: self.path(),
            value: value.to_string(),
            target_type: T::target_type().name(),
        }
    }

    pub fn conversion_failed<T: BindArgument>(&self, message: impl Display) -> BindingError {
        BindingError::ConversionFailed {
            path: self.path(),
            target_type: T::target_type().name(),
            message: message.to_string(),
        }
    }
}

/// The fields of an argument object, as seen by a composite type's binding function.
pub struct ObjectArguments<'a> {
    fields: &'a IndexMap<Name, ConstValue>,
    cx: &'a BindingContext<'a>,
}

impl ObjectArguments<'_> {
    /// Bind the field `name`, following the same rules as a top-level argument: a missing or null
    /// field binds to the zero value of `T`.
    pub fn bind<T: BindArgument>(&self, name: &str) -> Result<Option<T>, BindingError> {
        self.cx
            .child(ArgumentPath::Field(&self.cx.path, name))
            .bind_entry(self.fields.get(name))
    }
}
