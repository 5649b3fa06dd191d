//! Memoization of query results.
//!
//! Results are keyed by the exact literal query string, not a normalized
//! form: `"status:active"` and `" status:active"` are distinct entries.
//! Nothing here watches the task store; entries go stale the moment a task
//! changes and stay stale until the owner clears the cache or an entry is
//! evicted. Callers mutating tasks are expected to invalidate explicitly.

use std::collections::HashMap;
use std::collections::VecDeque;

use crate::model::Task;

/// Default capacity for [`LruQueryCache`].
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Cache of filter results, keyed by the literal query string.
///
/// Abstracted as a trait so the owner decides the policy; the engine ships
/// [`LruQueryCache`] as the bounded default.
pub trait QueryCache {
    /// Returns the cached result for a query, if present.
    fn get(&mut self, query: &str) -> Option<Vec<Task>>;

    /// Stores the result for a query.
    fn put(&mut self, query: &str, results: Vec<Task>);

    /// Discards every cached entry.
    fn clear(&mut self);
}

/// Bounded least-recently-used cache of query results.
///
/// A `get` hit refreshes the entry; inserting beyond capacity evicts the
/// least recently used entry.
#[derive(Debug, Clone)]
pub struct LruQueryCache {
    capacity: usize,
    entries: HashMap<String, Vec<Task>>,
    /// Keys ordered least to most recently used.
    order: VecDeque<String>,
}

impl Default for LruQueryCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl LruQueryCache {
    /// Creates a cache holding at most `capacity` entries (minimum 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Marks a key as most recently used.
    fn touch(&mut self, query: &str) {
        if let Some(idx) = self.order.iter().position(|k| k == query) {
            self.order.remove(idx);
        }
        self.order.push_back(query.to_string());
    }
}

impl QueryCache for LruQueryCache {
    fn get(&mut self, query: &str) -> Option<Vec<Task>> {
        if !self.entries.contains_key(query) {
            return None;
        }
        self.touch(query);
        self.entries.get(query).cloned()
    }

    fn put(&mut self, query: &str, results: Vec<Task>) {
        self.entries.insert(query.to_string(), results);
        self.touch(query);

        while self.entries.len() > self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}
