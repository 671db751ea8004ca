// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_graphql_value::{ConstValue, Name, indexmap::IndexMap};
use thiserror::Error;

mod shape;

pub use shape::SourceShape;

/// The decoded arguments of a single field, keyed by argument name.
///
/// This is the same representation the GraphQL layer produces after variables are substituted, so
/// values arrive here already typed as null, booleans, numbers, strings, enums, lists, or objects.
pub type ArgumentMap = IndexMap<Name, ConstValue>;

#[derive(Error, Debug)]
pub enum ArgumentMapError {
    #[error("Arguments must be an object, got '{0}'")]
    NotAnObject(SourceShape),

    #[error("Arguments could not be decoded: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Adapt a decoded JSON payload (such as `{"id": 42}`) into an argument map.
pub fn argument_map_from_json(value: serde_json::Value) -> Result<ArgumentMap, ArgumentMapError> {
    match ConstValue::from_json(value)? {
        ConstValue::Object(arguments) => Ok(arguments),
        other => Err(ArgumentMapError::NotAnObject(SourceShape::of(&other))),
    }
}
