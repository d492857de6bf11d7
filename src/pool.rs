//! Fixed-size worker pool draining the shared work queue.
//!
//! Each worker is a tokio task running one loop: dequeue a request, apply it
//! to the store, emit a `tracing` event, repeat until the queue reports
//! drained-and-stopped. Workers never hold a shard lock across the dequeue or
//! the log write, so a worker suspends only while waiting inside `pop`.
//!
//! # Why channels-and-join instead of shared flags?
//!
//! The queue's drain-then-close contract already encodes the whole shutdown
//! protocol: closing it wakes every idle worker, busy workers finish their
//! current request, and each loop exits on its own once the backlog is gone.
//! `shutdown` then only has to join the task handles to know the system is
//! quiescent — no worker-side state beyond the loop itself.

use std::sync::{Arc, Mutex as StdMutex};

use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::error::{ConfigError, SubmitError};
use crate::queue::WorkQueue;
use crate::request::Request;
use crate::store::Store;

/// A fixed set of workers applying queued requests to a shared [`Store`].
///
/// The store is constructed by the caller and handed in as an `Arc`, never an
/// implicit singleton, so one test process can run any number of independent
/// pools. Worker count is fixed at spawn; the pool neither grows nor shrinks.
pub struct WorkerPool {
    queue: Arc<WorkQueue<Request>>,
    store: Arc<Store>,
    // Drained by the first shutdown; later calls find it empty and return.
    workers: StdMutex<Vec<JoinHandle<()>>>,
}

impl WorkerPool {
    /// Spawns `worker_count` workers draining requests into `store`.
    ///
    /// # Errors
    /// Rejects a zero worker count; an empty pool would never drain the queue.
    pub fn spawn(worker_count: usize, store: Arc<Store>) -> Result<Self, ConfigError> {
        if worker_count == 0 {
            return Err(ConfigError::ZeroWorkers);
        }

        let queue = Arc::new(WorkQueue::new());
        let workers = (0..worker_count)
            .map(|id| {
                let queue = Arc::clone(&queue);
                let store = Arc::clone(&store);
                tokio::spawn(worker_loop(id, queue, store))
            })
            .collect();

        Ok(Self {
            queue,
            store,
            workers: StdMutex::new(workers),
        })
    }

    /// Enqueues `request` for asynchronous processing and returns immediately,
    /// without waiting for it to be applied.
    ///
    /// # Errors
    /// - [`SubmitError::EmptyKey`] for a request with an empty key; malformed
    ///   input is rejected here so it never reaches a worker.
    /// - [`SubmitError::PoolShutDown`] once [`shutdown`](Self::shutdown) has
    ///   been called.
    pub fn submit(&self, request: Request) -> Result<(), SubmitError> {
        if request.key().is_empty() {
            return Err(SubmitError::EmptyKey);
        }
        self.queue
            .push(request)
            .map_err(|_| SubmitError::PoolShutDown)
    }

    /// Stops accepting new requests, drains everything already submitted, and
    /// returns once every worker has terminated.
    ///
    /// After this returns the system is quiescent: every request submitted
    /// before the call has been applied to the store. Calling it again is a
    /// no-op and never deadlocks.
    pub async fn shutdown(&self) {
        self.queue.shutdown();

        let workers: Vec<_> = self.workers.lock().unwrap().drain(..).collect();
        for worker in workers {
            if let Err(err) = worker.await {
                warn!(error = ?err, "worker exited abnormally");
            }
        }
    }

    /// The store this pool applies requests to.
    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }
}

/// One worker: Running → Processing → Running → … → Terminated.
async fn worker_loop(id: usize, queue: Arc<WorkQueue<Request>>, store: Arc<Store>) {
    while let Some(request) = queue.pop().await {
        apply(id, &store, request);
    }
    info!(worker = id, "worker terminated");
}

fn apply(worker: usize, store: &Store, request: Request) {
    let op = request.op_name();
    match request {
        Request::Get { key } => match store.get(&key) {
            Some(value) => info!(worker, op, key, value, "applied"),
            None => info!(worker, op, key, value = "<absent>", "applied"),
        },
        Request::Set { key, value } => {
            store.set(key.clone(), value);
            info!(worker, op, key, "applied");
        }
        Request::Delete { key } => {
            store.delete(&key);
            info!(worker, op, key, "applied");
        }
    }
}
