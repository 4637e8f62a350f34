//! Per-pass file locations.
//!
//! Every pass defaults to fixed file names inside one working directory;
//! each path can be overridden on the command line.

use prune_kernel::config::DEFAULT_MAX_INTERLEAVINGS;
use prune_persistence::layout;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct GroupConfig {
    pub events: PathBuf,
    pub groups: PathBuf,
    pub output: PathBuf,
    pub max_interleavings: usize,
}

impl GroupConfig {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            events: dir.join(layout::GROUP_EVENTS),
            groups: dir.join(layout::GROUP_PAIRS),
            output: dir.join(layout::GROUP_OUTPUT),
            max_interleavings: DEFAULT_MAX_INTERLEAVINGS,
        }
    }
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self::in_dir(Path::new(""))
    }
}

#[derive(Debug, Clone)]
pub struct IndependenceConfig {
    pub interleavings: PathBuf,
    pub independent_events: PathBuf,
    pub output: PathBuf,
}

impl IndependenceConfig {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            interleavings: dir.join(layout::INDEPENDENCE_INTERLEAVINGS),
            independent_events: dir.join(layout::INDEPENDENT_EVENTS),
            output: dir.join(layout::INDEPENDENCE_OUTPUT),
        }
    }
}

impl Default for IndependenceConfig {
    fn default() -> Self {
        Self::in_dir(Path::new(""))
    }
}

#[derive(Debug, Clone)]
pub struct CausalConfig {
    pub interleavings: PathBuf,
    pub predecessors: PathBuf,
    pub successors: PathBuf,
    pub output: PathBuf,
}

impl CausalConfig {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            interleavings: dir.join(layout::CAUSAL_INTERLEAVINGS),
            predecessors: dir.join(layout::PREDECESSOR_EVENTS),
            successors: dir.join(layout::SUCCESSOR_EVENTS),
            output: dir.join(layout::CAUSAL_OUTPUT),
        }
    }
}

impl Default for CausalConfig {
    fn default() -> Self {
        Self::in_dir(Path::new(""))
    }
}

#[derive(Debug, Clone)]
pub struct ReplicaConfig {
    pub events: PathBuf,
    pub output: PathBuf,
    /// Read from stdin when unset.
    pub replica: Option<i64>,
}

impl ReplicaConfig {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            events: dir.join(layout::REPLICA_EVENTS),
            output: dir.join(layout::REPLICA_OUTPUT),
            replica: None,
        }
    }
}

impl Default for ReplicaConfig {
    fn default() -> Self {
        Self::in_dir(Path::new(""))
    }
}
