// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt::Display;

use async_graphql_value::ConstValue;
use serde::{Deserialize, Serialize};

/// The structural kind of a raw argument value.
///
/// Converters are registered per shape, so a converter for `String` never sees a number.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceShape {
    Null,
    Boolean,
    /// A number representable as `i64` or `u64`.
    Integer,
    /// Any other number.
    Float,
    String,
    Enum,
    Binary,
    List,
    Object,
}

impl SourceShape {
    pub fn of(value: &ConstValue) -> Self {
        match value {
            ConstValue::Null => SourceShape::Null,
            ConstValue::Boolean(_) => SourceShape::Boolean,
            ConstValue::Number(number) if number.is_f64() => SourceShape::Float,
            ConstValue::Number(_) => SourceShape::Integer,
            ConstValue::String(_) => SourceShape::String,
            ConstValue::Enum(_) => SourceShape::Enum,
            ConstValue::Binary(_) => SourceShape::Binary,
            ConstValue::List(_) => SourceShape::List,
            ConstValue::Object(_) => SourceShape::Object,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SourceShape::Null => "null",
            SourceShape::Boolean => "Boolean",
            SourceShape::Integer => "Int",
            SourceShape::Float => "Float",
            SourceShape::String => "String",
            SourceShape::Enum => "Enum",
            SourceShape::Binary => "Binary",
            SourceShape::List => "List",
            SourceShape::Object => "Object",
        }
    }
}

impl Display for SourceShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
