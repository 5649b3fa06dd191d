//! Filter query engine for tasklens.
//!
//! This crate implements the advanced-filter query language of a personal
//! task manager: tokenizer, recursive descent parser, evaluator with
//! per-field resolvers, an autocomplete suggestion engine, and a bounded
//! LRU result cache. The engine is entirely synchronous and never mutates
//! the task records it evaluates.
//!
//! # Example
//!
//! ```
//! use tasklens_query::model::Task;
//! use tasklens_query::query::parse_and_evaluate_filter;
//!
//! let task = Task::new("1", "Water the plants");
//! assert!(parse_and_evaluate_filter("status:active", &task).unwrap());
//! assert!(!parse_and_evaluate_filter("status:completed", &task).unwrap());
//! ```

pub mod model;
pub mod query;

pub use model::{Priority, Task};
pub use query::{QueryError, QueryResult};
