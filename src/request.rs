//! Operation descriptors submitted to the worker pool.

/// A single key-value operation awaiting execution.
///
/// Requests are immutable once built: they are moved into the work queue,
/// then into exactly one worker for the duration of processing. `Set` carries
/// its value in the variant itself, so a write without a value cannot be
/// expressed; the only remaining malformed shape is an empty key, which the
/// pool rejects at submit time before the request ever reaches the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Read the current value of `key`, if any.
    Get { key: String },
    /// Insert or overwrite the value for `key`.
    Set { key: String, value: String },
    /// Remove `key`; a no-op when the key is absent.
    Delete { key: String },
}

impl Request {
    pub fn get(key: impl Into<String>) -> Self {
        Self::Get { key: key.into() }
    }

    pub fn set(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Set {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn delete(key: impl Into<String>) -> Self {
        Self::Delete { key: key.into() }
    }

    /// The key this request targets.
    pub fn key(&self) -> &str {
        match self {
            Self::Get { key } | Self::Set { key, .. } | Self::Delete { key } => key,
        }
    }

    /// Short operation name used in worker log events.
    pub fn op_name(&self) -> &'static str {
        match self {
            Self::Get { .. } => "GET",
            Self::Set { .. } => "SET",
            Self::Delete { .. } => "DEL",
        }
    }
}
