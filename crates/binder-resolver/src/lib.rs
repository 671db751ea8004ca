// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Bind GraphQL field arguments onto typed Rust values.
//!
//! An [`ArgumentBinder`] takes an argument name, a target type (any [`BindArgument`]
//! implementation), and the decoded [`ArgumentMap`](common::value::ArgumentMap) of the current
//! field, and produces a value of the target type:
//! - scalars are taken directly when the raw value already has the right shape (see
//!   [`number`] for the numeric rules), and go through the [`ConversionRegistry`] otherwise
//! - composite types bind each of their fields recursively from a nested argument object
//! - lists bind each element in order
//!
//! A missing (or null) argument binds to the target's zero value: `None` for scalars and
//! composites, an empty `Vec` for lists.

pub mod argument_resolver;
pub mod bind_argument;
pub mod binder;
pub mod binding_error;
pub mod config;
pub mod context;
pub mod conversion;
pub mod number;

pub use argument_resolver::{
    ArgumentResolver, argument_parameter, named_argument_parameter, unbound_parameter,
};
pub use bind_argument::{BindArgument, field};
pub use binder::ArgumentBinder;
pub use binding_error::BindingError;
pub use config::BinderConfig;
pub use context::{BindingContext, ObjectArguments};
pub use conversion::{ConversionFailure, ConversionRegistry, ConversionRegistryBuilder};
