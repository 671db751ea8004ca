// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Descriptors of the types that arguments are bound into.
//!
//! Descriptors are derived once (typically from a Rust type through `BindArgument::target_type`)
//! and may be cached or serialized alongside the rest of a system's model.

pub mod parameter;
pub mod scalar_type;
pub mod types;

pub use parameter::{OperationSignature, ParameterDescriptor, ParameterSource};
pub use scalar_type::ScalarType;
pub use types::{CompositeType, FieldDescriptor, TargetType};
