//! Saved-query CRUD, history, and cached query application.

use chrono::Utc;
use uuid::Uuid;

use tasklens_query::model::Task;
use tasklens_query::query::{
    apply_advanced_filter, LruQueryCache, QueryCache, QueryResult, SuggestionEngine,
};

use crate::store::{FilterDataStore, StoreResult};
use crate::{FilterData, SavedQuery, RECENT_QUERY_LIMIT};

/// Manages saved queries, recent history, and cached filter results.
///
/// Owns the live [`FilterData`] and persists it through a
/// [`FilterDataStore`] after every mutation. Query results go through an
/// injected [`QueryCache`]; results are cached against the literal query
/// string and are only discarded by [`clear_query_cache`], by
/// [`invalidate_results`], or by cache eviction. Code that mutates tasks
/// is expected to call [`invalidate_results`] afterwards, otherwise cached
/// results stay stale.
///
/// [`clear_query_cache`]: FilterManager::clear_query_cache
/// [`invalidate_results`]: FilterManager::invalidate_results
///
/// # Example
///
/// ```no_run
/// use tasklens_query::model::Task;
/// use tasklens_store::{FilterDataStore, FilterManager};
///
/// let store = FilterDataStore::new()?;
/// let mut manager = FilterManager::new(store)?;
///
/// let tasks: Vec<Task> = vec![];
/// let matches = manager.apply_filter_query("status:active", &tasks)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct FilterManager<C: QueryCache = LruQueryCache> {
    data: FilterData,
    store: FilterDataStore,
    cache: C,
}

impl FilterManager<LruQueryCache> {
    /// Creates a manager backed by the given store, loading any existing
    /// data and using the default bounded LRU cache.
    pub fn new(store: FilterDataStore) -> StoreResult<Self> {
        let data = store.load_or_default()?;
        Ok(Self {
            data,
            store,
            cache: LruQueryCache::default(),
        })
    }
}

impl<C: QueryCache> FilterManager<C> {
    /// Creates a manager with a caller-supplied cache implementation.
    pub fn with_cache(store: FilterDataStore, cache: C) -> StoreResult<Self> {
        let data = store.load_or_default()?;
        Ok(Self { data, store, cache })
    }

    /// Returns the live filter data.
    pub fn data(&self) -> &FilterData {
        &self.data
    }

    fn persist(&self) -> StoreResult<()> {
        self.store.save(&self.data)
    }

    // ==================== Saved Queries ====================

    /// Returns all saved queries, in save order.
    pub fn saved_queries(&self) -> &[SavedQuery] {
        &self.data.saved_queries
    }

    /// Looks up a saved query by id.
    pub fn get_saved_query(&self, id: &str) -> Option<&SavedQuery> {
        self.data.saved_queries.iter().find(|q| q.id == id)
    }

    /// Saves a named query and returns its new id.
    pub fn save_query(&mut self, query: &str, label: &str) -> StoreResult<String> {
        let saved = SavedQuery {
            id: Uuid::new_v4().to_string(),
            query: query.to_string(),
            label: label.to_string(),
            is_favorite: false,
            usage_count: 0,
            last_used_at: None,
            created_at: Utc::now(),
        };
        let id = saved.id.clone();
        self.data.saved_queries.push(saved);
        self.persist()?;
        Ok(id)
    }

    /// Deletes a saved query. Returns false if the id was unknown.
    pub fn delete_saved_query(&mut self, id: &str) -> StoreResult<bool> {
        let before = self.data.saved_queries.len();
        self.data.saved_queries.retain(|q| q.id != id);
        if self.data.saved_queries.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Records one use of a saved query: bumps its usage count and stamps
    /// the time. Returns false if the id was unknown.
    pub fn record_usage(&mut self, id: &str) -> StoreResult<bool> {
        let Some(saved) = self.data.saved_queries.iter_mut().find(|q| q.id == id) else {
            return Ok(false);
        };
        saved.usage_count += 1;
        saved.last_used_at = Some(Utc::now());
        self.persist()?;
        Ok(true)
    }

    /// Toggles the favorite flag of a saved query. Returns false if the id
    /// was unknown.
    pub fn toggle_favorite(&mut self, id: &str) -> StoreResult<bool> {
        let Some(saved) = self.data.saved_queries.iter_mut().find(|q| q.id == id) else {
            return Ok(false);
        };
        saved.is_favorite = !saved.is_favorite;
        self.persist()?;
        Ok(true)
    }

    // ==================== Recent History ====================

    /// Returns the recent queries, most recent first.
    pub fn recent_queries(&self) -> &[String] {
        &self.data.recent_queries
    }

    /// Pushes a query onto the recent history.
    ///
    /// Duplicates move to the front instead of repeating; the history is
    /// capped at [`RECENT_QUERY_LIMIT`] entries. Blank queries are ignored.
    pub fn add_recent_query(&mut self, query: &str) -> StoreResult<()> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(());
        }

        self.data.recent_queries.retain(|q| q != query);
        self.data.recent_queries.insert(0, query.to_string());
        self.data.recent_queries.truncate(RECENT_QUERY_LIMIT);
        self.persist()
    }

    /// Clears the recent-query history.
    pub fn clear_history(&mut self) -> StoreResult<()> {
        self.data.recent_queries.clear();
        self.persist()
    }

    // ==================== Query Application ====================

    /// Filters tasks with a query, memoizing results by the literal query
    /// string.
    ///
    /// A cache hit returns the stored list without re-parsing or
    /// re-evaluating; a miss computes via the query engine and stores the
    /// result.
    ///
    /// # Errors
    ///
    /// A malformed query propagates its [`QueryError`] unchanged so the UI
    /// can show it inline; nothing is cached for failed queries.
    ///
    /// [`QueryError`]: tasklens_query::query::QueryError
    pub fn apply_filter_query(&mut self, query: &str, tasks: &[Task]) -> QueryResult<Vec<Task>> {
        if let Some(hit) = self.cache.get(query) {
            return Ok(hit);
        }

        let results = apply_advanced_filter(query, tasks)?;
        self.cache.put(query, results.clone());
        Ok(results)
    }

    /// Empties the query result cache.
    pub fn clear_query_cache(&mut self) {
        self.cache.clear();
    }

    /// Invalidation hook for task mutations.
    ///
    /// Call after creating, updating, completing, or deleting tasks so
    /// cached results are recomputed on the next application.
    pub fn invalidate_results(&mut self) {
        self.cache.clear();
    }

    // ==================== Suggestions ====================

    /// Returns ranked completions for a partial query.
    ///
    /// Merges the built-in templates with this user's saved queries and
    /// recent history, built-ins first.
    pub fn get_suggestions(&self, partial: &str) -> Vec<String> {
        let mut engine = SuggestionEngine::new();
        for saved in &self.data.saved_queries {
            engine.register(saved.query.clone());
        }
        for recent in &self.data.recent_queries {
            engine.register(recent.clone());
        }
        engine.suggestions(partial)
    }
}
