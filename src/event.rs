// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Protocol events as read from the harness files.
//!
//! Every pass works on exactly one event variant. Each variant is a plain
//! value type: equality, ordering and hashing are derived from its fields, so
//! the indexer, bucketizer and exclusion engine can be written once and stay
//! generic over [`Record`].
//!
//! # Invariants
//! - Events are immutable once parsed
//! - Two events are equal iff every field of the variant matches exactly
//! - `Display` writes the same tokens `from_tokens` consumes, in field order

use crate::error::{KernelError, KernelResult};
use core::fmt;
use core::hash::Hash;
use serde::{Deserialize, Serialize};

/// A line-codec event: a fixed number of whitespace tokens per event.
pub trait Record: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display {
    /// Number of tokens one event consumes.
    const ARITY: usize;

    /// Parses exactly `ARITY` tokens.
    fn from_tokens(tokens: &[&str]) -> KernelResult<Self>;
}

fn check_arity(tokens: &[&str], expected: usize) -> KernelResult<()> {
    if tokens.len() != expected {
        return Err(KernelError::MalformedRecord {
            expected,
            found: tokens.len(),
        });
    }
    Ok(())
}

fn parse_int(field: &'static str, token: &str) -> KernelResult<i64> {
    token.parse().map_err(|_| KernelError::InvalidInteger {
        field,
        token: token.to_string(),
    })
}

/// A directed event between two replicas: `<sourceId> <targetId> <type>`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChannelEvent {
    pub source: i64,
    pub target: i64,
    pub kind: String,
}

impl ChannelEvent {
    pub fn new(source: i64, target: i64, kind: impl Into<String>) -> Self {
        Self {
            source,
            target,
            kind: kind.into(),
        }
    }

    /// Both events travel over the same `(source, target)` channel.
    pub fn same_channel(&self, other: &Self) -> bool {
        self.source == other.source && self.target == other.target
    }
}

impl Record for ChannelEvent {
    const ARITY: usize = 3;

    fn from_tokens(tokens: &[&str]) -> KernelResult<Self> {
        check_arity(tokens, Self::ARITY)?;
        Ok(Self {
            source: parse_int("sourceId", tokens[0])?,
            target: parse_int("targetId", tokens[1])?,
            kind: tokens[2].to_string(),
        })
    }
}

impl fmt::Display for ChannelEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.source, self.target, self.kind)
    }
}

/// An event owned by a single replica (or identified by a single id):
/// `<id> <type>`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LabeledEvent {
    pub source: i64,
    pub kind: String,
}

impl LabeledEvent {
    pub fn new(source: i64, kind: impl Into<String>) -> Self {
        Self {
            source,
            kind: kind.into(),
        }
    }
}

impl Record for LabeledEvent {
    const ARITY: usize = 2;

    fn from_tokens(tokens: &[&str]) -> KernelResult<Self> {
        check_arity(tokens, Self::ARITY)?;
        Ok(Self {
            source: parse_int("id", tokens[0])?,
            kind: tokens[1].to_string(),
        })
    }
}

impl fmt::Display for LabeledEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.source, self.kind)
    }
}

/// An operation compared purely by its id: `<id>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct OpId(pub i64);

impl Record for OpId {
    const ARITY: usize = 1;

    fn from_tokens(tokens: &[&str]) -> KernelResult<Self> {
        check_arity(tokens, Self::ARITY)?;
        Ok(OpId(parse_int("id", tokens[0])?))
    }
}

impl fmt::Display for OpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
