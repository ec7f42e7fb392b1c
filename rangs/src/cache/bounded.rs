//! Fixed-capacity cache with first-in first-out eviction.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// Fixed-capacity key/value cache.
///
/// When a new key is inserted at capacity, the earliest-inserted key that is
/// still present is evicted. Reads never change the eviction order, so this
/// is a FIFO cache, not an LRU one.
///
/// A capacity of zero disables the cache: `put` stores nothing.
///
/// Not synchronized; mutation requires `&mut self`.
#[derive(Debug, Clone)]
pub struct BoundedCache<K, V> {
    entries: HashMap<K, V>,
    /// Keys in insertion order, oldest at the front
    order: VecDeque<K>,
    max_size: usize,
    evictions: u64,
}

impl<K, V> BoundedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Create an empty cache holding at most `max_size` entries.
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            max_size,
            evictions: 0,
        }
    }

    /// Insert a value, returning the value previously stored under `key`.
    ///
    /// Replacing an existing key keeps its original position in the
    /// eviction queue.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if self.max_size == 0 {
            return None;
        }

        if let Some(slot) = self.entries.get_mut(&key) {
            return Some(std::mem::replace(slot, value));
        }

        if self.order.len() >= self.max_size {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
                self.evictions += 1;
            }
        }

        self.order.push_back(key.clone());
        self.entries.insert(key, value)
    }

    /// Look up a value. Does not affect eviction order.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Check whether `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove every entry. The eviction counter is kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Number of entries currently held.
    pub fn size(&self) -> usize {
        self.order.len()
    }

    /// Maximum number of entries.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// True if the cache holds nothing.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of entries evicted to make room since construction.
    pub fn evictions(&self) -> u64 {
        self.evictions
    }
}
