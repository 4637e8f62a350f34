// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! prune-kernel: partition-and-exclude pruning of protocol interleavings.
//!
//! Every pass follows the same pipeline: index marker events in each
//! interleaving, bucket interleavings by the resulting signature, evaluate a
//! pass predicate per bucket, and subtract what it flags from the universe.

pub mod config;
pub mod error;
pub mod event;
pub mod interleaving;
pub mod marker;
pub mod signature;
pub mod bucket;
pub mod exclude;
pub mod passes;

pub use error::{KernelError, KernelResult};
pub use event::{ChannelEvent, LabeledEvent, OpId, Record};
pub use interleaving::{Interleaving, Universe};
pub use marker::MarkerSet;
pub use passes::{PassOutcome, PassStats, PrunePass};

#[cfg(test)]
pub mod tests;
