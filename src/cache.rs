//! Bounded LRU cache for morphological-tagging results.
//!
//! Repeated submissions of common words are expected, so distinct inputs are
//! cached up to a fixed capacity with least-recently-used eviction. The cache
//! is an explicit collaborator with an injectable capacity rather than an
//! implicit memoizing wrapper.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

pub const DEFAULT_CAPACITY: usize = 500;

#[derive(Debug)]
pub struct LruCache<K, V> {
    capacity: usize,
    map: HashMap<K, V>,
    order: VecDeque<K>,
}

impl<K: Hash + Eq + Clone, V: Clone> LruCache<K, V> {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            map: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns a clone of the cached value and marks the key most recently
    /// used.
    pub fn get(&mut self, key: &K) -> Option<V> {
        let value = self.map.get(key)?.clone();
        self.touch(key);
        Some(value)
    }

    /// Inserts a value, evicting the least recently used entry when full.
    pub fn put(&mut self, key: K, value: V) {
        if self.map.insert(key.clone(), value).is_some() {
            self.touch(&key);
            return;
        }
        self.order.push_back(key);
        while self.map.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.map.remove(&oldest);
            }
        }
    }

    fn touch(&mut self, key: &K) {
        if let Some(idx) = self.order.iter().position(|k| k == key) {
            if let Some(k) = self.order.remove(idx) {
                self.order.push_back(k);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_and_get() {
        let mut cache = LruCache::new(4);
        cache.put("a", 1);
        cache.put("b", 2);
        assert_eq!(cache.get(&"a"), Some(1));
        assert_eq!(cache.get(&"c"), None);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_evicts_least_recently_used() {
        let mut cache = LruCache::new(2);
        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("c", 3);
        assert_eq!(cache.get(&"a"), None);
        assert_eq!(cache.get(&"b"), Some(2));
        assert_eq!(cache.get(&"c"), Some(3));
    }

    #[test]
    fn test_get_refreshes_recency() {
        let mut cache = LruCache::new(2);
        cache.put("a", 1);
        cache.put("b", 2);
        cache.get(&"a");
        cache.put("c", 3);
        assert_eq!(cache.get(&"a"), Some(1));
        assert_eq!(cache.get(&"b"), None);
    }

    #[test]
    fn test_overwrite_keeps_single_entry() {
        let mut cache = LruCache::new(2);
        cache.put("a", 1);
        cache.put("a", 9);
        assert_eq!(cache.get(&"a"), Some(9));
        assert_eq!(cache.len(), 1);
    }
}
