// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Converters for scalar targets that the binder can't construct directly.
//!
//! The registry is assembled once at startup through [`ConversionRegistryBuilder`] and is
//! immutable afterwards, so it can be shared by any number of concurrent binding calls.

use std::{
    any::{Any, TypeId, type_name},
    collections::HashMap,
    fmt::{Debug, Display},
    num::{IntErrorKind, ParseIntError},
    str::FromStr,
};

use async_graphql_value::ConstValue;
use common::value::SourceShape;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionFailure {
    #[error("value out of range")]
    Overflow,

    #[error("{0}")]
    Invalid(String),
}

impl ConversionFailure {
    pub fn invalid(message: impl Display) -> Self {
        ConversionFailure::Invalid(message.to_string())
    }
}

type ConvertFn = dyn Fn(&ConstValue) -> Result<Box<dyn Any + Send + Sync>, ConversionFailure>
    + Send
    + Sync;

struct Converter {
    target_name: &'static str,
    convert: Box<ConvertFn>,
}

type ConverterKey = (SourceShape, TypeId);

pub struct ConversionRegistry {
    converters: HashMap<ConverterKey, Converter>,
}

impl ConversionRegistry {
    pub fn builder() -> ConversionRegistryBuilder {
        ConversionRegistryBuilder::default()
    }

    pub fn empty() -> Self {
        Self::builder().build()
    }

    /// A registry holding only the [default converters](ConversionRegistryBuilder::with_defaults).
    pub fn with_defaults() -> Self {
        Self::builder().with_defaults().build()
    }

    pub fn contains<T: Any>(&self, shape: SourceShape) -> bool {
        self.converters.contains_key(&(shape, TypeId::of::<T>()))
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    /// Convert `value` to `T`, or `None` if no converter handles the value's shape.
    pub(crate) fn convert<T: Any>(
        &self,
        value: &ConstValue,
    ) -> Option<Result<T, ConversionFailure>> {
        let converter = self
            .converters
            .get(&(SourceShape::of(value), TypeId::of::<T>()))?;

        Some((converter.convert)(value).and_then(|converted| {
            converted.downcast::<T>().map(|converted| *converted).map_err(|_| {
                ConversionFailure::invalid(format!(
                    "converter for '{}' produced a different type",
                    converter.target_name
                ))
            })
        }))
    }
}

impl Debug for ConversionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(
                self.converters
                    .iter()
                    .map(|((shape, _), converter)| format!("{shape} -> {}", converter.target_name)),
            )
            .finish()
    }
}

#[derive(Default)]
pub struct ConversionRegistryBuilder {
    converters: HashMap<ConverterKey, Converter>,
}

impl ConversionRegistryBuilder {
    /// Register a converter from raw values of `shape` to `T`. A later registration for the same
    /// shape and target replaces the earlier one.
    pub fn register<T, F>(mut self, shape: SourceShape, convert: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn(&ConstValue) -> Result<T, ConversionFailure> + Send + Sync + 'static,
    {
        let converter = Converter {
            target_name: type_name::<T>(),
            convert: Box::new(move |value: &ConstValue| {
                convert(value).map(|converted| Box::new(converted) as Box<dyn Any + Send + Sync>)
            }),
        };
        self.converters
            .insert((shape, TypeId::of::<T>()), converter);
        self
    }

    pub fn register_string<T, F>(self, convert: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn(&str) -> Result<T, ConversionFailure> + Send + Sync + 'static,
    {
        self.register(SourceShape::String, move |value| match value {
            ConstValue::String(string) => convert(string),
            other => Err(ConversionFailure::invalid(format!(
                "expected a string, got {}",
                SourceShape::of(other)
            ))),
        })
    }

    /// Register a string converter backed by `T`'s `FromStr` implementation.
    pub fn register_from_str<T>(self) -> Self
    where
        T: FromStr + Any + Send + Sync,
        T::Err: Display,
    {
        self.register_string(|string| string.parse::<T>().map_err(ConversionFailure::invalid))
    }

    /// Add the standard scalar conversions:
    /// - strings to every integer type, `f32`, `f64`, `bool`, and `char`
    /// - numbers and booleans to `String`
    ///
    /// Numeric strings are trimmed, and values out of range fail with an overflow rather than
    /// being clamped.
    pub fn with_defaults(self) -> Self {
        self.register_string(parse_integer::<i8>)
            .register_string(parse_integer::<i16>)
            .register_string(parse_integer::<i32>)
            .register_string(parse_integer::<i64>)
            .register_string(parse_integer::<u8>)
            .register_string(parse_integer::<u16>)
            .register_string(parse_integer::<u32>)
            .register_string(parse_integer::<u64>)
            .register_string(parse_f32)
            .register_string(parse_f64)
            .register_string(parse_boolean)
            .register_string(parse_char)
            .register(SourceShape::Integer, number_to_string)
            .register(SourceShape::Float, number_to_string)
            .register(SourceShape::Boolean, boolean_to_string)
    }

    pub fn build(self) -> ConversionRegistry {
        ConversionRegistry {
            converters: self.converters,
        }
    }
}

fn parse_integer<T>(input: &str) -> Result<T, ConversionFailure>
where
    T: FromStr<Err = ParseIntError>,
{
    input.trim().parse().map_err(|error: ParseIntError| match error.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ConversionFailure::Overflow,
        _ => ConversionFailure::invalid(error),
    })
}

fn parse_f64(input: &str) -> Result<f64, ConversionFailure> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_nan() => Err(ConversionFailure::invalid("not a number")),
        Ok(value) if value.is_infinite() => Err(ConversionFailure::Overflow),
        Ok(value) => Ok(value),
        Err(error) => Err(ConversionFailure::invalid(error)),
    }
}

fn parse_f32(input: &str) -> Result<f32, ConversionFailure> {
    match parse_f64(input)? as f32 {
        narrowed if narrowed.is_infinite() => Err(ConversionFailure::Overflow),
        narrowed => Ok(narrowed),
    }
}

fn parse_boolean(input: &str) -> Result<bool, ConversionFailure> {
    match input.trim().to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(ConversionFailure::invalid(format!(
            "invalid boolean value '{input}'"
        ))),
    }
}

fn parse_char(input: &str) -> Result<char, ConversionFailure> {
    let mut chars = input.chars();

    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConversionFailure::invalid(format!(
            "expected a single character, got '{input}'"
        ))),
    }
}

fn number_to_string(value: &ConstValue) -> Result<String, ConversionFailure> {
    match value {
        ConstValue::Number(number) => Ok(number.to_string()),
        other => Err(ConversionFailure::invalid(format!(
            "expected a number, got {}",
            SourceShape::of(other)
        ))),
    }
}

fn boolean_to_string(value: &ConstValue) -> Result<String, ConversionFailure> {
    match value {
        ConstValue::Boolean(boolean) => Ok(boolean.to_string()),
        other => Err(ConversionFailure::invalid(format!(
            "expected a boolean, got {}",
            SourceShape::of(other)
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string(value: &str) -> ConstValue {
        ConstValue::String(value.to_string())
    }

    #[derive(Debug, PartialEq)]
    struct Keyword(String);

    impl FromStr for Keyword {
        type Err = std::convert::Infallible;

        fn from_str(term: &str) -> Result<Self, Self::Err> {
            Ok(Keyword(term.to_string()))
        }
    }

    #[test]
    fn lookup_is_keyed_by_shape_and_target() {
        let registry = ConversionRegistry::builder()
            .register_from_str::<Keyword>()
            .build();

        assert!(registry.contains::<Keyword>(SourceShape::String));
        assert!(!registry.contains::<Keyword>(SourceShape::Integer));
        assert!(!registry.contains::<String>(SourceShape::String));

        assert_eq!(
            registry.convert::<Keyword>(&string("test")),
            Some(Ok(Keyword("test".to_string())))
        );
        assert_eq!(
            registry.convert::<Keyword>(&ConstValue::Number(42.into())),
            None
        );
    }

    #[test]
    fn later_registration_wins() {
        let registry = ConversionRegistry::builder()
            .register_string(|_| Ok(1i64))
            .register_string(|_| Ok(2i64))
            .build();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.convert::<i64>(&string("x")), Some(Ok(2)));
    }

    #[test]
    fn default_numeric_strings() {
        let registry = ConversionRegistry::with_defaults();

        assert_eq!(registry.convert::<i64>(&string(" 42 ")), Some(Ok(42)));
        assert_eq!(registry.convert::<u8>(&string("300")), Some(Err(ConversionFailure::Overflow)));
        assert_eq!(registry.convert::<i8>(&string("-129")), Some(Err(ConversionFailure::Overflow)));
        assert!(matches!(
            registry.convert::<i32>(&string("forty-two")),
            Some(Err(ConversionFailure::Invalid(_)))
        ));
        assert_eq!(registry.convert::<f64>(&string("2.5")), Some(Ok(2.5)));
        assert_eq!(registry.convert::<f64>(&string("1e400")), Some(Err(ConversionFailure::Overflow)));
        assert_eq!(registry.convert::<f32>(&string("3.4028235e38")), Some(Ok(f32::MAX)));
        assert_eq!(registry.convert::<f32>(&string("1e39")), Some(Err(ConversionFailure::Overflow)));
    }

    #[test]
    fn default_boolean_and_char_strings() {
        let registry = ConversionRegistry::with_defaults();

        assert_eq!(registry.convert::<bool>(&string("Yes")), Some(Ok(true)));
        assert_eq!(registry.convert::<bool>(&string("off")), Some(Ok(false)));
        assert!(matches!(
            registry.convert::<bool>(&string("maybe")),
            Some(Err(ConversionFailure::Invalid(_)))
        ));
        assert_eq!(registry.convert::<char>(&string("x")), Some(Ok('x')));
        assert!(matches!(
            registry.convert::<char>(&string("xy")),
            Some(Err(ConversionFailure::Invalid(_)))
        ));
    }

    #[test]
    fn default_scalars_to_string() {
        let registry = ConversionRegistry::with_defaults();

        assert_eq!(
            registry.convert::<String>(&ConstValue::Number(42.into())),
            Some(Ok("42".to_string()))
        );
        assert_eq!(
            registry.convert::<String>(&ConstValue::from_json(serde_json::json!(4.5)).unwrap()),
            Some(Ok("4.5".to_string()))
        );
        assert_eq!(
            registry.convert::<String>(&ConstValue::Boolean(true)),
            Some(Ok("true".to_string()))
        );
        assert_eq!(registry.convert::<String>(&ConstValue::Null), None);
    }

    #[test]
    fn empty_registry_converts_nothing() {
        let registry = ConversionRegistry::empty();

        assert!(registry.is_empty());
        assert_eq!(registry.convert::<i64>(&string("42")), None);
    }
}
