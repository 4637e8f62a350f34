// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants.

/// Event type tagging the request half of a sync pair.
pub const SYNC_REQ: &str = "sync_req";

/// Event type tagging the execution half of a sync pair.
pub const EXEC_SYNC: &str = "exec_sync";

/// Upper bound on interleavings emitted by the grouping expansion.
pub const DEFAULT_MAX_INTERLEAVINGS: usize = 100_000;
