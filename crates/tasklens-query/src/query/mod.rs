//! Filter query engine: a small boolean query language over task records.
//!
//! Queries look like `priority:p1 AND status:active`,
//! `(priority:p2 OR priority:p3) AND status:active`,
//! `NOT status:completed`, or `due:overdue`.
//!
//! # Supported syntax
//!
//! ## Field matches
//! - `status:active`, `status:completed` - completion state
//! - `priority:p1` .. `priority:p4` - priority level
//! - `due:today`, `due:tomorrow`, `due:overdue`, `due:upcoming`,
//!   `due:thisweek` - due date
//! - `created:today` - creation date
//! - `label:<name>` - label membership
//! - `project:<id>` - exact project id
//! - `search:<text>` - substring over content and description
//!
//! Values may be quoted to contain spaces: `label:"deep work"`.
//! Unknown field names parse fine and simply never match.
//!
//! ## Boolean operators
//! - `AND`, `OR`, `NOT` (case-insensitive), `()` for grouping
//! - Precedence: `NOT` binds tighter than `AND`, which binds tighter
//!   than `OR`
//!
//! # Example
//!
//! ```
//! use tasklens_query::model::{Priority, Task};
//! use tasklens_query::query::apply_advanced_filter;
//!
//! let mut urgent = Task::new("1", "Fix the build");
//! urgent.priority = Some(Priority::P1);
//! let mut done = Task::new("2", "Ship release");
//! done.completed = true;
//!
//! let tasks = vec![urgent, done];
//! let matches = apply_advanced_filter("priority:p1 AND status:active", &tasks).unwrap();
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].id, "1");
//! ```

mod ast;
mod cache;
mod error;
mod evaluator;
mod field;
mod lexer;
mod parser;
mod suggest;

pub use ast::Expr;
pub use cache::{LruQueryCache, QueryCache, DEFAULT_CACHE_CAPACITY};
pub use error::{QueryError, QueryResult};
pub use evaluator::{apply_advanced_filter, evaluate, parse_and_evaluate_filter};
pub use field::{FieldKind, FIELD_NAMES};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::QueryParser;
pub use suggest::{
    field_name_suggestions, filter_suggestions, similar_field, value_suggestions,
    SuggestionEngine,
};
