//! Saved filters and query history for tasklens.
//!
//! This crate is a consumer of the query engine, not part of it: it
//! persists user-named queries and recent search history, and wraps query
//! application with a result cache. The UI talks to [`FilterManager`]; the
//! engine itself lives in `tasklens-query`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

mod manager;
mod store;

pub use manager::FilterManager;
pub use store::{FilterDataStore, StoreError, StoreResult};

/// Maximum entries kept in the recent-query history.
pub const RECENT_QUERY_LIMIT: usize = 50;

/// A user-named, persisted query string with usage tracking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedQuery {
    /// Unique id, assigned on save.
    pub id: String,

    /// The query string as the user wrote it.
    pub query: String,

    /// User-chosen display name.
    pub label: String,

    /// Whether the user pinned this query as a favorite.
    #[serde(default)]
    pub is_favorite: bool,

    /// How many times the query has been applied since it was saved.
    #[serde(default)]
    pub usage_count: u32,

    /// When the query was last applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used_at: Option<DateTime<Utc>>,

    /// When the query was saved.
    pub created_at: DateTime<Utc>,
}

/// The persisted filter data: saved queries plus recent search history.
///
/// Mirrors what goes on disk; [`FilterManager`] owns the live copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterData {
    /// Saved queries, in save order.
    #[serde(default)]
    pub saved_queries: Vec<SavedQuery>,

    /// Recent query history, most recent first, capped at
    /// [`RECENT_QUERY_LIMIT`].
    #[serde(default)]
    pub recent_queries: Vec<String>,
}

impl FilterData {
    /// Creates empty filter data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if nothing has been saved or searched yet.
    pub fn is_empty(&self) -> bool {
        self.saved_queries.is_empty() && self.recent_queries.is_empty()
    }
}
