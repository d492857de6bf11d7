//! Sharded in-memory key-value storage.
//!
//! The [`Store`] splits the key space across a fixed set of [`Shard`]s, each
//! guarded by its own reader-writer lock. Routing a key to its shard is a pure
//! function of the key and the shard count, so independent keys proceed with
//! zero mutual interference while keys that collide on the same shard
//! serialize through that shard's lock.
//!
//! # Why RwLock instead of Mutex?
//!
//! `get` dominates a read-heavy workload and only needs the shared mode, so
//! concurrent readers of one shard never block each other. Writes (`set`,
//! `delete`) take the exclusive mode. Locks are held only for the single map
//! operation, never across an await or a log write.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::RwLock;

use crate::error::ConfigError;

/// One independently locked partition of the key space.
///
/// Operations on a single shard are linearizable with respect to each other:
/// the lock admits either one writer or any number of concurrent readers.
/// There is no ordering relationship between operations on different shards.
#[derive(Default)]
pub struct Shard {
    data: RwLock<HashMap<String, String>>,
}

impl Shard {
    /// Returns the current value for `key`, or `None` if absent.
    ///
    /// Absence is a defined, successful outcome, never an error.
    pub fn get(&self, key: &str) -> Option<String> {
        self.data.read().unwrap().get(key).cloned()
    }

    /// Inserts or overwrites the value for `key`.
    pub fn set(&self, key: String, value: String) {
        self.data.write().unwrap().insert(key, value);
    }

    /// Removes `key` if present; a no-op when absent.
    pub fn delete(&self, key: &str) {
        self.data.write().unwrap().remove(key);
    }

    /// Number of live entries, used by tests and the demo summary.
    pub fn len(&self) -> usize {
        self.data.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A fixed-length sequence of shards with deterministic key routing.
///
/// The shard count is set at construction and never changes; there is no
/// rehashing or resharding. Changing the count means starting over with a new
/// empty store. The concrete hash algorithm is not part of the contract, only
/// its determinism for the life of the store.
pub struct Store {
    shards: Vec<Shard>,
}

impl Store {
    /// Creates a store partitioned into `shard_count` shards.
    ///
    /// # Errors
    /// Rejects a zero shard count; every key must have an owning shard.
    pub fn new(shard_count: usize) -> Result<Self, ConfigError> {
        if shard_count == 0 {
            return Err(ConfigError::ZeroShards);
        }
        let shards = (0..shard_count).map(|_| Shard::default()).collect();
        Ok(Self { shards })
    }

    /// Returns the current value for `key`, or `None` if absent.
    pub fn get(&self, key: &str) -> Option<String> {
        self.shard(key).get(key)
    }

    /// Inserts or overwrites the value for `key`.
    pub fn set(&self, key: String, value: String) {
        self.shard(&key).set(key, value);
    }

    /// Removes `key` if present; a no-op when absent.
    pub fn delete(&self, key: &str) {
        self.shard(key).delete(key);
    }

    /// Number of shards the key space is partitioned into.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Total number of live entries across all shards.
    pub fn len(&self) -> usize {
        self.shards.iter().map(Shard::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(Shard::is_empty)
    }

    fn shard(&self, key: &str) -> &Shard {
        &self.shards[self.shard_index(key)]
    }

    fn shard_index(&self, key: &str) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        (hasher.finish() % self.shards.len() as u64) as usize
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn zero_shards_is_rejected() {
        assert!(matches!(Store::new(0), Err(ConfigError::ZeroShards)));
    }

    #[test]
    fn routing_is_deterministic_for_the_life_of_a_store() {
        let store = Store::new(7).unwrap();
        for key in ["a", "b", "", "some-longer-key", "другой"] {
            let first = store.shard_index(key);
            for _ in 0..100 {
                assert_eq!(store.shard_index(key), first);
            }
            assert!(first < store.shard_count());
        }
    }

    #[test]
    fn set_get_delete_round_trip() {
        let store = Store::new(4).unwrap();
        assert_eq!(store.get("a"), None);

        store.set("a".into(), "1".into());
        assert_eq!(store.get("a"), Some("1".into()));

        store.set("a".into(), "2".into());
        assert_eq!(store.get("a"), Some("2".into()), "set overwrites");

        store.delete("a");
        assert_eq!(store.get("a"), None);
        store.delete("a"); // absent delete is a no-op, not an error
    }

    #[test]
    fn empty_value_is_distinct_from_absent() {
        let store = Store::new(4).unwrap();
        store.set("k".into(), String::new());
        assert_eq!(store.get("k"), Some(String::new()));
        assert_ne!(store.get("k"), None);
    }

    #[test]
    fn single_shard_store_still_serves_every_key() {
        let store = Store::new(1).unwrap();
        store.set("x".into(), "1".into());
        store.set("y".into(), "2".into());
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn concurrent_writers_to_the_same_key_lose_no_update() {
        let store = Arc::new(Store::new(4).unwrap());
        let mut handles = Vec::new();
        for worker in 0..8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                for i in 0..100 {
                    store.set("contended".into(), format!("{worker}-{i}"));
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        // Exactly one writer's final value survives, never a torn or lost one.
        let value = store.get("contended").expect("key must exist");
        assert!(value.ends_with("-99"), "unexpected final value: {value}");
    }
}
