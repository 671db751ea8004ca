// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_graphql_value::ConstValue;
use binder_model::{ScalarType, TargetType};

use crate::{
    binding_error::BindingError,
    context::BindingContext,
    number::{self, NumberBinding},
};

/// A type that field arguments can be bound into.
///
/// Implementations exist for the scalar types, `Vec<T>`, `Option<T>`, and `serde_json::Value`.
/// Composite input types implement it by binding each field through
/// [`BindingContext::composite`]:
///
/// ```ignore
/// impl BindArgument for BookInput {
///     fn target_type() -> TargetType {
///         TargetType::composite(
///             "BookInput",
///             [field::<String>("name"), field::<i64>("authorId")],
///         )
///     }
///
///     fn bind_value(value: &ConstValue, cx: &BindingContext<'_>) -> Result<Self, BindingError> {
///         cx.composite(value, |fields| {
///             Ok(BookInput {
///                 name: fields.bind("name")?,
///                 author_id: fields.bind("authorId")?,
///             })
///         })
///     }
/// }
/// ```
///
/// Opaque types that are only ever produced by a registered converter use
/// [`BindingContext::convert`] instead.
pub trait BindArgument: Sized + 'static {
    fn target_type() -> TargetType;

    /// Bind a value that is present and not null.
    fn bind_value(value: &ConstValue, cx: &BindingContext<'_>) -> Result<Self, BindingError>;

    /// The value bound when the argument is missing or null. `None` means "absent".
    fn zero_value() -> Option<Self> {
        None
    }
}

/// Describe a field of a composite type through the field's Rust type.
pub fn field<T: BindArgument>(name: &str) -> binder_model::FieldDescriptor {
    binder_model::FieldDescriptor::new(name, T::target_type())
}

impl BindArgument for bool {
    fn target_type() -> TargetType {
        TargetType::Scalar(ScalarType::Boolean)
    }

    fn bind_value(value: &ConstValue, cx: &BindingContext<'_>) -> Result<Self, BindingError> {
        match value {
            ConstValue::Boolean(boolean) => Ok(*boolean),
            other => cx.convert(other),
        }
    }
}

impl BindArgument for String {
    fn target_type() -> TargetType {
        TargetType::Scalar(ScalarType::String)
    }

    fn bind_value(value: &ConstValue, cx: &BindingContext<'_>) -> Result<Self, BindingError> {
        match value {
            ConstValue::String(string) => Ok(string.clone()),
            ConstValue::Enum(name) => Ok(name.to_string()),
            other => cx.convert(other),
        }
    }
}

impl BindArgument for char {
    fn target_type() -> TargetType {
        TargetType::Scalar(ScalarType::Char)
    }

    fn bind_value(value: &ConstValue, cx: &BindingContext<'_>) -> Result<Self, BindingError> {
        if let ConstValue::String(string) = value {
            let mut chars = string.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                return Ok(c);
            }
        }
        cx.convert(value)
    }
}

macro_rules! numeric_argument {
    ($($ty:ty => $scalar:ident, $to_number:expr;)*) => {
        $(
            impl BindArgument for $ty {
                fn target_type() -> TargetType {
                    TargetType::Scalar(ScalarType::$scalar)
                }

                fn bind_value(
                    value: &ConstValue,
                    cx: &BindingContext<'_>,
                ) -> Result<Self, BindingError> {
                    match value {
                        ConstValue::Number(n) => match $to_number(n) {
                            NumberBinding::Bound(bound) => Ok(bound),
                            NumberBinding::Overflow => Err(cx.overflow::<Self>(value)),
                            NumberBinding::NotNative => cx.convert(value),
                        },
                        other => cx.convert(other),
                    }
                }
            }
        )*
    };
}

numeric_argument! {
    i8 => I8, number::to_integer::<i8>;
    i16 => I16, number::to_integer::<i16>;
    i32 => I32, number::to_integer::<i32>;
    i64 => I64, number::to_integer::<i64>;
    u8 => U8, number::to_integer::<u8>;
    u16 => U16, number::to_integer::<u16>;
    u32 => U32, number::to_integer::<u32>;
    u64 => U64, number::to_integer::<u64>;
    f32 => F32, number::to_f32;
    f64 => F64, number::to_f64;
}

impl<T: BindArgument> BindArgument for Vec<T> {
    fn target_type() -> TargetType {
        TargetType::list(T::target_type())
    }

    fn bind_value(value: &ConstValue, cx: &BindingContext<'_>) -> Result<Self, BindingError> {
        cx.list(value)
    }

    fn zero_value() -> Option<Self> {
        Some(Vec::new())
    }
}

impl<T: BindArgument> BindArgument for Option<T> {
    fn target_type() -> TargetType {
        TargetType::optional(T::target_type())
    }

    fn bind_value(value: &ConstValue, cx: &BindingContext<'_>) -> Result<Self, BindingError> {
        match value {
            ConstValue::Null => Ok(None),
            value => T::bind_value(value, cx).map(Some),
        }
    }

    fn zero_value() -> Option<Self> {
        Some(None)
    }
}

/// Pass the raw value through untouched, for arguments typed as arbitrary JSON.
impl BindArgument for serde_json::Value {
    fn target_type() -> TargetType {
        TargetType::Json
    }

    fn bind_value(value: &ConstValue, cx: &BindingContext<'_>) -> Result<Self, BindingError> {
        value
            .clone()
            .into_json()
            .map_err(|error| cx.conversion_failed::<Self>(error))
    }
}
