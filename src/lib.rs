//! Concurrent, in-process sharded key-value store.
//!
//! A fixed set of independently locked shards holds the data, and a
//! fixed-size pool of worker tasks drains operation requests from a shared
//! FIFO queue. The interesting part is the concurrency core: deterministic
//! key-to-shard routing, reader-writer exclusion per shard, and a
//! producer/consumer queue whose shutdown drains in-flight work instead of
//! dropping it or hanging. There is no network transport, persistence, or
//! replication; this is a single-process, volatile store.
//!
//! Each module focuses on a concrete responsibility:
//!
//! - [`request`] defines the operation descriptor submitted by producers.
//! - [`store`] implements the shards and the deterministic key routing.
//! - [`queue`] provides the FIFO work queue with drain-then-close shutdown.
//! - [`pool`] runs the workers and exposes the submit/shutdown boundary.
//! - [`error`] carries the rejection errors for malformed or late submissions.
//! - [`cli`] parses the demo binary's command-line interface.
//!
//! Integration and unit tests use this crate directly to exercise the queue
//! contract and the drain-on-shutdown guarantee.

pub mod cli;
pub mod error;
pub mod pool;
pub mod queue;
pub mod request;
pub mod store;

pub use error::{ConfigError, SubmitError};
pub use pool::WorkerPool;
pub use request::Request;
pub use store::Store;
