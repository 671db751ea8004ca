// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Numeric rules for binding a raw number onto a Rust numeric type.
//!
//! | raw number                         | target  | result                                    |
//! |------------------------------------|---------|-------------------------------------------|
//! | integral (`i64`/`u64` repr)        | integer | checked conversion, overflow if too large |
//! | float without fraction (`42.0`)    | integer | checked conversion, overflow if too large |
//! | float with a fraction (`4.5`)      | integer | not native, left to the registry          |
//! | any                                | `f64`   | nearest `f64`                             |
//! | any                                | `f32`   | nearest `f32`, overflow if infinite       |
//!
//! Nothing is truncated or saturated silently.

use async_graphql_value::Number;

// 2^63 and 2^64, both exact as f64
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;
const U64_UPPER_BOUND: f64 = 18_446_744_073_709_551_616.0;

#[derive(Debug, PartialEq)]
pub enum NumberBinding<T> {
    Bound(T),
    Overflow,
    /// The number can't be represented natively, but a converter might still handle it.
    NotNative,
}

pub fn to_integer<T>(number: &Number) -> NumberBinding<T>
where
    T: TryFrom<i64> + TryFrom<u64>,
{
    if let Some(value) = number.as_i64() {
        return checked(<T as TryFrom<i64>>::try_from(value));
    }
    if let Some(value) = number.as_u64() {
        return checked(<T as TryFrom<u64>>::try_from(value));
    }

    match number.as_f64() {
        Some(value) if value.is_finite() && value.fract() == 0.0 => {
            if (-I64_UPPER_BOUND..I64_UPPER_BOUND).contains(&value) {
                checked(<T as TryFrom<i64>>::try_from(value as i64))
            } else if (0.0..U64_UPPER_BOUND).contains(&value) {
                checked(<T as TryFrom<u64>>::try_from(value as u64))
            } else {
                NumberBinding::Overflow
            }
        }
        _ => NumberBinding::NotNative,
    }
}

pub fn to_f64(number: &Number) -> NumberBinding<f64> {
    number
        .as_f64()
        .map_or(NumberBinding::NotNative, NumberBinding::Bound)
}

pub fn to_f32(number: &Number) -> NumberBinding<f32> {
    match to_f64(number) {
        NumberBinding::Bound(value) => match value as f32 {
            narrowed if narrowed.is_infinite() => NumberBinding::Overflow,
            narrowed => NumberBinding::Bound(narrowed),
        },
        other => other.map_unbound(),
    }
}

fn checked<T, E>(result: Result<T, E>) -> NumberBinding<T> {
    result.map_or(NumberBinding::Overflow, NumberBinding::Bound)
}

impl<T> NumberBinding<T> {
    fn map_unbound<U>(self) -> NumberBinding<U> {
        match self {
            NumberBinding::Bound(_) | NumberBinding::NotNative => NumberBinding::NotNative,
            NumberBinding::Overflow => NumberBinding::Overflow,
        }
    }
}
