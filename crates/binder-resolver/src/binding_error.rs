// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use common::value::{ArgumentMapError, SourceShape};
use thiserror::Error;

/// Errors while binding an argument. Each is terminal for the binding call that raised it.
///
/// `path` locates the offending value, starting at the argument name, for example
/// `books[1].authorId`.
#[derive(Error, Debug)]
pub enum BindingError {
    #[error(
        "Argument '{path}' is not of a valid type. Expected '{expected_type}', got '{actual_type}'"
    )]
    TypeMismatch {
        path: String,
        expected_type: String,
        actual_type: String,
    },

    #[error("Argument '{path}' cannot be converted from '{source_shape}' to '{target_type}'")]
    UnsupportedConversion {
        path: String,
        source_shape: SourceShape,
        target_type: String,
    },

    #[error("Argument '{path}' value {value} is out of range for '{target_type}'")]
    NumericOverflow {
        path: String,
        value: String,
        target_type: String,
    },

    #[error("Argument '{path}' could not be converted to '{target_type}': {message}")]
    ConversionFailed {
        path: String,
        target_type: String,
        message: String,
    },

    #[error("Argument(s) '{fields:?}' invalid for '{path}'")]
    UnknownFields { path: String, fields: Vec<String> },

    #[error("Argument '{path}' is nested deeper than {max_depth} levels")]
    DepthLimitExceeded { path: String, max_depth: usize },

    #[error("Parameter '{0}' is not bound from arguments")]
    UnsupportedParameter(String),

    #[error("Parameter '{parameter}' is declared as '{declared}', but was resolved as '{requested}'")]
    ParameterTypeMismatch {
        parameter: String,
        declared: String,
        requested: String,
    },

    #[error(transparent)]
    InvalidArgumentMap(#[from] ArgumentMapError),
}

impl BindingError {
    /// Location of the value that failed to bind, if the error concerns a specific value.
    pub fn path(&self) -> Option<&str> {
        match self {
            BindingError::TypeMismatch { path, .. }
            | BindingError::UnsupportedConversion { path, .. }
            | BindingError::NumericOverflow { path, .. }
            | BindingError::ConversionFailed { path, .. }
            | BindingError::UnknownFields { path, .. }
            | BindingError::DepthLimitExceeded { path, .. } => Some(path.as_str()),
            BindingError::UnsupportedParameter(_)
            | BindingError::ParameterTypeMismatch { .. }
            | BindingError::InvalidArgumentMap(_) => None,
        }
    }
}
