//! Recursive descent parser for filter queries.

use super::ast::Expr;
use super::error::{QueryError, QueryResult};
use super::lexer::{Lexer, Token, TokenKind};

/// Parser for filter query strings.
///
/// # Grammar
///
/// ```text
/// expr        ::= or_expr
/// or_expr     ::= and_expr ("OR" and_expr)*
/// and_expr    ::= not_expr ("AND" not_expr)*
/// not_expr    ::= "NOT"? term
/// term        ::= field_match | "(" expr ")"
/// field_match ::= IDENT ":" VALUE
/// ```
///
/// # Operator precedence (highest to lowest)
///
/// 1. `(...)` - grouping
/// 2. `NOT` - unary
/// 3. `AND` - binary, left-associative
/// 4. `OR` - binary, left-associative
///
/// `AND`/`OR` must appear explicitly between terms; two adjacent terms
/// without an operator are rejected. Field names are not validated here:
/// unknown fields parse fine and resolve to non-matching clauses at
/// evaluation time.
///
/// # Example
///
/// ```
/// use tasklens_query::query::{Expr, QueryParser};
///
/// let expr = QueryParser::parse("status:active").unwrap();
/// assert_eq!(expr, Expr::field("status", "active"));
///
/// let expr = QueryParser::parse("priority:p1 AND status:active").unwrap();
/// assert!(matches!(expr, Expr::And(_, _)));
/// ```
pub struct QueryParser {
    tokens: Vec<Token>,
    position: usize,
}

impl QueryParser {
    /// Parses a filter query string into an expression tree.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Syntax`] if tokenizing fails, and
    /// [`QueryError::Parse`] for unbalanced parentheses, a dangling
    /// operator, a field match missing its value, or leftover input.
    pub fn parse(input: &str) -> QueryResult<Expr> {
        let tokens = Lexer::new(input).tokenize()?;
        let mut parser = Self {
            tokens,
            position: 0,
        };

        let expr = parser.parse_expr()?;

        // Anything left over means two terms were juxtaposed without an
        // operator, or a stray closing parenthesis.
        let current = parser.current();
        if current.kind != TokenKind::Eof {
            return Err(QueryError::parse(
                format!("unexpected token '{}'", current.text),
                current.position,
            ));
        }

        Ok(expr)
    }

    /// Returns the current token. The stream always ends with `Eof`, so
    /// this never runs past the end.
    fn current(&self) -> &Token {
        &self.tokens[self.position.min(self.tokens.len() - 1)]
    }

    /// Consumes the current token and returns it.
    fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if token.kind != TokenKind::Eof {
            self.position += 1;
        }
        token
    }

    /// Returns true if the current token has the given kind.
    fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    /// `or_expr ::= and_expr ("OR" and_expr)*`
    fn parse_expr(&mut self) -> QueryResult<Expr> {
        let mut left = self.parse_and_expr()?;

        while self.check(TokenKind::Or) {
            self.advance();
            let right = self.parse_and_expr()?;
            left = Expr::or(left, right);
        }

        Ok(left)
    }

    /// `and_expr ::= not_expr ("AND" not_expr)*`
    fn parse_and_expr(&mut self) -> QueryResult<Expr> {
        let mut left = self.parse_not_expr()?;

        while self.check(TokenKind::And) {
            self.advance();
            let right = self.parse_not_expr()?;
            left = Expr::and(left, right);
        }

        Ok(left)
    }

    /// `not_expr ::= "NOT"? term`
    fn parse_not_expr(&mut self) -> QueryResult<Expr> {
        if self.check(TokenKind::Not) {
            self.advance();
            let inner = self.parse_not_expr()?;
            return Ok(Expr::negate(inner));
        }

        self.parse_term()
    }

    /// `term ::= field_match | "(" expr ")"`
    fn parse_term(&mut self) -> QueryResult<Expr> {
        let token = self.advance();

        match token.kind {
            TokenKind::LParen => {
                let inner = self.parse_expr()?;
                if !self.check(TokenKind::RParen) {
                    let current = self.current();
                    return Err(QueryError::parse("expected ')'", current.position));
                }
                self.advance();
                Ok(inner)
            }

            TokenKind::Ident => self.parse_field_match(token),

            TokenKind::Eof => Err(QueryError::parse("unexpected end of query", token.position)),

            _ => Err(QueryError::parse(
                format!("unexpected token '{}'", token.text),
                token.position,
            )),
        }
    }

    /// `field_match ::= IDENT ":" VALUE`
    ///
    /// The field name is lower-cased; the value is kept as written.
    fn parse_field_match(&mut self, ident: Token) -> QueryResult<Expr> {
        if !self.check(TokenKind::Colon) {
            let current = self.current();
            return Err(QueryError::parse(
                format!("expected ':' after field name '{}'", ident.text),
                current.position,
            ));
        }
        self.advance();

        if !self.check(TokenKind::Value) {
            let current = self.current();
            return Err(QueryError::parse(
                format!("expected value after '{}:'", ident.text),
                current.position,
            ));
        }
        let value = self.advance();

        Ok(Expr::field(ident.text.to_lowercase(), value.text))
    }
}
