//! Autocomplete suggestions for the query language.
//!
//! Independent of the parse/evaluate pipeline: the UI calls this on every
//! keystroke to drive the search bar dropdown, whether or not the partial
//! input parses.

use strsim::levenshtein;

use super::field::{FieldKind, FIELD_NAMES};

/// Maximum edit distance for a "did you mean" field suggestion.
const MAX_FIELD_DISTANCE: usize = 3;

/// Built-in query templates, in registration order.
const FILTER_SUGGESTIONS: &[&str] = &[
    "priority:p1",
    "priority:p2",
    "status:active",
    "status:completed",
    "due:today",
    "due:overdue",
    "due:upcoming",
    "created:today",
    "search:keyword",
    "label:urgent",
    "project:engineering",
    "priority:p1 AND status:active",
    "(priority:p1 OR priority:p2) AND status:active",
    "NOT status:completed",
];

/// Returns the built-in query templates.
pub fn filter_suggestions() -> &'static [&'static str] {
    FILTER_SUGGESTIONS
}

/// Returns the recognized field names (canonical forms, no aliases).
pub fn field_name_suggestions() -> &'static [&'static str] {
    FIELD_NAMES
}

/// Returns the completable values for a field name (aliases accepted).
///
/// Free-form fields (`label`, `project`, `search`) and unknown fields have
/// no fixed value set and yield an empty slice.
pub fn value_suggestions(field: &str) -> &'static [&'static str] {
    match FieldKind::resolve(&field.to_lowercase()) {
        Some(FieldKind::Status) => &["active", "completed", "done"],
        Some(FieldKind::Priority) => &["p1", "p2", "p3", "p4"],
        Some(FieldKind::Due) => &["today", "tomorrow", "overdue", "upcoming", "thisweek"],
        Some(FieldKind::Created) => &["today"],
        Some(FieldKind::Label) | Some(FieldKind::Project) | Some(FieldKind::Search) | None => &[],
    }
}

/// Suggests the closest field name for a near-miss (e.g. `priorty`).
///
/// Returns `None` for exact matches and for anything further than a small
/// edit distance away.
pub fn similar_field(name: &str) -> Option<&'static str> {
    let name_lower = name.to_lowercase();

    let (best, distance) = FIELD_NAMES
        .iter()
        .map(|candidate| (*candidate, levenshtein(&name_lower, candidate)))
        .min_by_key(|(_, d)| *d)?;

    if distance > 0 && distance <= MAX_FIELD_DISTANCE {
        Some(best)
    } else {
        None
    }
}

/// Ranked completion source merging built-in templates with saved queries.
///
/// Entries keep their registration order: built-ins first, then whatever
/// the caller registers (saved queries, recent history). Ranking puts
/// exact-prefix matches ahead of pure substring matches; ties keep
/// registration order.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    entries: Vec<String>,
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SuggestionEngine {
    /// Creates an engine seeded with the built-in templates.
    pub fn new() -> Self {
        Self {
            entries: FILTER_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Registers an additional completion candidate (deduplicated).
    pub fn register(&mut self, query: impl Into<String>) {
        let query = query.into();
        if !self.entries.contains(&query) {
            self.entries.push(query);
        }
    }

    /// Returns ranked completions for a partial input.
    ///
    /// An empty partial returns the full built-in template list.
    pub fn suggestions(&self, partial: &str) -> Vec<String> {
        let partial = partial.trim();
        if partial.is_empty() {
            return FILTER_SUGGESTIONS.iter().map(|s| s.to_string()).collect();
        }

        let needle = partial.to_lowercase();
        let mut prefix_matches = Vec::new();
        let mut substring_matches = Vec::new();

        for entry in &self.entries {
            let entry_lower = entry.to_lowercase();
            if entry_lower.starts_with(&needle) {
                prefix_matches.push(entry.clone());
            } else if entry_lower.contains(&needle) {
                substring_matches.push(entry.clone());
            }
        }

        prefix_matches.extend(substring_matches);
        prefix_matches
    }
}
