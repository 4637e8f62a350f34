// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// A token group is shorter than the record arity.
    #[error("Malformed record: expected {expected} tokens, found {found}")]
    MalformedRecord { expected: usize, found: usize },
    /// A token that must be an integer is not one.
    #[error("Invalid integer token {token:?} for field `{field}`")]
    InvalidInteger { field: &'static str, token: String },
}

pub type KernelResult<T> = core::result::Result<T, KernelError>;
