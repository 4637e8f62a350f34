//! Default file names of the harness working directory.

pub const GROUP_EVENTS: &str = "events.dl";
pub const GROUP_PAIRS: &str = "groups.dl";
pub const GROUP_OUTPUT: &str = "GI.dl";

pub const INDEPENDENCE_INTERLEAVINGS: &str = "interleavings.dl";
pub const INDEPENDENT_EVENTS: &str = "independent_events.dl";
pub const INDEPENDENCE_OUTPUT: &str = "independent_interleavings.dl";

pub const CAUSAL_INTERLEAVINGS: &str = "interleavings.txt";
pub const PREDECESSOR_EVENTS: &str = "predecessor_events.txt";
pub const SUCCESSOR_EVENTS: &str = "successor_events.txt";
pub const CAUSAL_OUTPUT: &str = "failed_ops.dl";

pub const REPLICA_EVENTS: &str = "events.dl";
pub const REPLICA_OUTPUT: &str = "RI.dl";
