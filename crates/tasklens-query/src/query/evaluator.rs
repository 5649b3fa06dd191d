//! Evaluation of parsed queries against task records.

use crate::model::Task;

use super::ast::Expr;
use super::error::QueryResult;
use super::field;
use super::parser::QueryParser;

/// Evaluates an expression tree against a single task.
///
/// Pure recursive walk: `field:value` leaves delegate to the field
/// resolvers, `NOT` negates its child, `AND`/`OR` combine with
/// short-circuit semantics (left side first). Never fails on a well-formed
/// tree; all failure is confined to parse time.
pub fn evaluate(expr: &Expr, task: &Task) -> bool {
    match expr {
        Expr::Field { field, value } => field::resolve_match(task, field, value),
        Expr::And(left, right) => evaluate(left, task) && evaluate(right, task),
        Expr::Or(left, right) => evaluate(left, task) || evaluate(right, task),
        Expr::Not(inner) => !evaluate(inner, task),
    }
}

/// Parses a query and evaluates it against a single task.
///
/// A blank query matches every task.
///
/// # Errors
///
/// Propagates the tokenizer's or parser's error unchanged for malformed
/// input.
pub fn parse_and_evaluate_filter(query: &str, task: &Task) -> QueryResult<bool> {
    if query.trim().is_empty() {
        return Ok(true);
    }

    let expr = QueryParser::parse(query)?;
    Ok(evaluate(&expr, task))
}

/// Filters a task list with a query, preserving input order.
///
/// Parses the query once, then evaluates it against each task. The input is
/// never mutated; matches are cloned into the result. An empty task slice
/// short-circuits to an empty result without parsing, so even an invalid
/// query is tolerated in the degenerate case. A blank query matches every
/// task.
///
/// # Errors
///
/// For a non-empty task slice, a malformed query propagates its error to
/// the caller so the UI can tell "no matches" from "bad query".
pub fn apply_advanced_filter(query: &str, tasks: &[Task]) -> QueryResult<Vec<Task>> {
    if tasks.is_empty() {
        return Ok(Vec::new());
    }
    if query.trim().is_empty() {
        return Ok(tasks.to_vec());
    }

    let expr = QueryParser::parse(query)?;
    Ok(tasks
        .iter()
        .filter(|task| evaluate(&expr, task))
        .cloned()
        .collect())
}
