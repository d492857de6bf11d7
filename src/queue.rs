//! FIFO work queue with a drain-then-close shutdown.
//!
//! The queue is the coordination point between the submitting side and the
//! worker pool: an unbounded FIFO whose dequeue blocks until an item arrives
//! or shutdown is signaled, and whose shutdown promises that everything
//! enqueued beforehand is still delivered before the end-of-stream marker.
//!
//! # Why a channel instead of a mutex + condvar?
//!
//! Tokio's `mpsc` channel already implements the hard part of the contract:
//! a closed channel hands out its remaining buffered items in order, then
//! reports end-of-stream to every receiver. Shutdown is "drop the sender",
//! which is non-blocking and naturally idempotent, and a sender-less `send`
//! is exactly the post-shutdown rejection the API needs. The receiver half
//! sits behind an async `Mutex` so any number of workers can share it; the
//! single receiver keeps delivery strictly FIFO while leaving which idle
//! worker gets a given item unspecified.

use std::sync::Mutex as StdMutex;

use tokio::sync::{mpsc, Mutex};

/// A push onto a queue that has already shut down. Returns the rejected item
/// to the caller, mirroring `mpsc::error::SendError`.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("work queue has shut down")]
pub struct QueueClosed<T>(pub T);

/// Unbounded multi-consumer FIFO with cooperative shutdown.
pub struct WorkQueue<T> {
    // `None` once shutdown has been called. Std mutex: held only to clone or
    // take the sender, never across an await.
    tx: StdMutex<Option<mpsc::UnboundedSender<T>>>,
    rx: Mutex<mpsc::UnboundedReceiver<T>>,
}

impl<T> WorkQueue<T> {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx: StdMutex::new(Some(tx)),
            rx: Mutex::new(rx),
        }
    }

    /// Appends `item` to the tail, waking one blocked dequeuer if any.
    ///
    /// # Errors
    /// After [`shutdown`](Self::shutdown) the item is handed back unprocessed.
    pub fn push(&self, item: T) -> Result<(), QueueClosed<T>> {
        let guard = self.tx.lock().unwrap();
        match guard.as_ref() {
            Some(tx) => tx.send(item).map_err(|err| QueueClosed(err.0)),
            None => Err(QueueClosed(item)),
        }
    }

    /// Removes and returns the head item, blocking the calling task while the
    /// queue is empty but not yet stopped.
    ///
    /// Returns `None` once the queue is both stopped and drained; every
    /// subsequent call returns `None` immediately.
    pub async fn pop(&self) -> Option<T> {
        self.rx.lock().await.recv().await
    }

    /// Signals shutdown: no further pushes are accepted, every blocked
    /// dequeuer is woken, and items already enqueued are still delivered
    /// before `pop` starts returning `None`. Never blocks on consumers;
    /// calling it again has no additional effect.
    pub fn shutdown(&self) {
        self.tx.lock().unwrap().take();
    }

    /// Whether shutdown has been signaled (the queue may still hold items).
    pub fn is_shut_down(&self) -> bool {
        self.tx.lock().unwrap().is_none()
    }
}

impl<T> Default for WorkQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
