//! Abstract Syntax Tree (AST) for filter queries.

/// A parsed filter query expression.
///
/// Built once per parse and immutable afterwards. Each tree is owned
/// exclusively by the query that produced it; subtrees are never shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A single `field:value` clause.
    Field {
        /// Field name, lower-cased by the parser.
        field: String,
        /// Literal value, quotes stripped.
        value: String,
    },

    /// Logical AND of two expressions.
    And(Box<Expr>, Box<Expr>),

    /// Logical OR of two expressions.
    Or(Box<Expr>, Box<Expr>),

    /// Logical NOT of an expression.
    Not(Box<Expr>),
}

impl Expr {
    /// Creates a `field:value` clause.
    pub fn field(field: impl Into<String>, value: impl Into<String>) -> Self {
        Expr::Field {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates an AND expression from two subexpressions.
    pub fn and(left: Expr, right: Expr) -> Self {
        Expr::And(Box::new(left), Box::new(right))
    }

    /// Creates an OR expression from two subexpressions.
    pub fn or(left: Expr, right: Expr) -> Self {
        Expr::Or(Box::new(left), Box::new(right))
    }

    /// Creates a NOT expression wrapping another expression.
    pub fn negate(inner: Expr) -> Self {
        Expr::Not(Box::new(inner))
    }
}
