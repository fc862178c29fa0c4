//! Engine-wide constants

/// Per-axis distance under which two coordinates are the same node
pub const NODE_TOLERANCE: f32 = 1e-4;

/// Name of the default (primary) cost channel
pub const DEFAULT_CHANNEL: &str = "";

/// Distance reported for unreachable pairs in dense matrices
pub const UNREACHABLE: f32 = f32::INFINITY;

/// Predecessor reported when i == j or j is unreachable from i
pub const NO_PREDECESSOR: i64 = -1;

/// Worker thread name prefix
pub const WORKER_THREAD_PREFIX: &str = "spatialgraph-worker";

#[inline]
pub fn is_default_channel(name: &str) -> bool {
    name == DEFAULT_CHANNEL
}
