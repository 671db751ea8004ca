// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! # Tracing configuration setup.
//!
//! Argument binding is instrumented with Rust's `tracing` framework.
//!
//! Calling the `init` function will initialize a global tracing subscriber based on the value of
//! the `ARGBIND_LOG` environment variable, which follows the same conventions as `RUST_LOG`. This
//! provides console logging. Hosts that already install their own subscriber should skip `init`;
//! the events emitted while binding will flow into whatever subscriber is active.

use binder_env::Environment;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, filter::LevelFilter, prelude::*, util::TryInitError};

use crate::env_const::ARGBIND_LOG;

/// Initialize the tracing subscriber.
///
/// Creates a compact `tracing_subscriber::fmt` layer filtered by `ARGBIND_LOG` (`warn` when unset).
pub fn init(env: &dyn Environment) -> Result<(), LoggingError> {
    let fmt_layer = tracing_subscriber::fmt::layer().compact();

    tracing_subscriber::registry()
        .with(env_filter(env))
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

fn env_filter(env: &dyn Environment) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(env.get(ARGBIND_LOG).unwrap_or_default())
}

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Tracing subscriber could not be installed: {0}")]
    AlreadyInitialized(#[from] TryInitError),
}
