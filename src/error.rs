//! Error types for the store and worker pool boundaries.
//!
//! The taxonomy is deliberately small: the core has no I/O, so the only
//! failures are caller contract violations, rejected synchronously before any
//! work is enqueued. A `get` or `delete` on a missing key is a defined
//! successful outcome and never appears here.

/// Invalid construction-time configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The store needs at least one shard to own the key space.
    #[error("shard count must be positive")]
    ZeroShards,

    /// The pool needs at least one worker to drain the queue.
    #[error("worker count must be positive")]
    ZeroWorkers,
}

/// A request rejected at `submit`, before it reached the queue.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SubmitError {
    /// Malformed request: an empty key never reaches a worker.
    #[error("request key must not be empty")]
    EmptyKey,

    /// The pool has shut down; late submissions are rejected explicitly
    /// rather than silently dropped or blocked on forever.
    #[error("worker pool has shut down")]
    PoolShutDown,
}
