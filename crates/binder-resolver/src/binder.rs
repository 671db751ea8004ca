// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use common::value::ArgumentMap;
use tracing::{debug, instrument};

use crate::{
    bind_argument::BindArgument, binding_error::BindingError, config::BinderConfig,
    context::BindingContext, conversion::ConversionRegistry,
};

/// Binds field arguments onto [`BindArgument`] types.
///
/// The binder holds no per-call state: the registry and configuration are fixed at construction,
/// so a single binder can serve concurrent calls from any number of threads.
#[derive(Debug, Clone)]
pub struct ArgumentBinder {
    registry: Arc<ConversionRegistry>,
    config: BinderConfig,
}

impl ArgumentBinder {
    pub fn new(registry: Arc<ConversionRegistry>) -> Self {
        Self::with_config(registry, BinderConfig::default())
    }

    pub fn with_config(registry: Arc<ConversionRegistry>, config: BinderConfig) -> Self {
        Self { registry, config }
    }

    /// Bind the argument `argument_name` from `arguments` as a `T`.
    ///
    /// Returns `T`'s zero value when the argument is missing or null: `Ok(None)` for scalars and
    /// composites, `Ok(Some(vec![]))` for lists. On error nothing is returned, not even the part
    /// of a composite or list that did bind.
    #[instrument(
        name = "ArgumentBinder::bind",
        level = "trace",
        skip(self, arguments)
    )]
    pub fn bind<T: BindArgument>(
        &self,
        argument_name: &str,
        arguments: &ArgumentMap,
    ) -> Result<Option<T>, BindingError> {
        let cx = BindingContext::root(&self.registry, &self.config, argument_name);

        cx.bind_entry(arguments.get(argument_name))
            .inspect_err(|error| debug!(%error, "argument binding failed"))
    }
}
