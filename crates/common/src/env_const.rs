// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

pub const ARGBIND_LOG: &str = "ARGBIND_LOG";

pub const ARGBIND_REJECT_UNKNOWN_FIELDS: &str = "ARGBIND_REJECT_UNKNOWN_FIELDS";
pub const ARGBIND_MAX_DEPTH: &str = "ARGBIND_MAX_DEPTH";
