//! Lexer (tokenizer) for filter queries.

use std::iter::Peekable;
use std::str::Chars;

use super::error::{QueryError, QueryResult};

/// The kind of a lexed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A bare word, normally a field name.
    Ident,
    /// The `:` separating a field name from its value.
    Colon,
    /// The literal value following a `:` (quotes stripped).
    Value,
    /// The `AND` keyword (case-insensitive).
    And,
    /// The `OR` keyword (case-insensitive).
    Or,
    /// The `NOT` keyword (case-insensitive).
    Not,
    /// Opening parenthesis `(`.
    LParen,
    /// Closing parenthesis `)`.
    RParen,
    /// End of input. Always the last token in a stream.
    Eof,
}

/// A token with its original text and position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token kind.
    pub kind: TokenKind,
    /// The token text as written (empty for `Eof`, quotes stripped for values).
    pub text: String,
    /// Byte offset where the token starts (0-indexed).
    pub position: usize,
}

impl Token {
    fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }
}

/// Lexer for filter query strings.
///
/// Whitespace is a separator only. `AND`, `OR`, `NOT` are recognized
/// case-insensitively; everything else is an identifier, a `:`, a value, or
/// a parenthesis. The text after a `:` is read as a raw value up to the next
/// whitespace or parenthesis, or to the closing quote if quoted; quoted
/// values may contain spaces.
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    /// Current byte position in the input string.
    position: usize,
    /// Total input length, used for the `Eof` token position.
    input_len: usize,
    /// Set after a `Colon` so the next word is read as a raw value.
    expect_value: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            position: 0,
            input_len: input.len(),
            expect_value: false,
        }
    }

    /// Tokenizes the whole input.
    ///
    /// The returned stream always ends with an [`TokenKind::Eof`] token.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Syntax`] for an unterminated quoted value or a
    /// character the query language has no use for.
    pub fn tokenize(mut self) -> QueryResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        tokens.push(Token::new(TokenKind::Eof, "", self.input_len));
        Ok(tokens)
    }

    fn peek(&mut self) -> Option<&char> {
        self.chars.peek()
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.chars.next();
        if let Some(ch) = c {
            self.position += ch.len_utf8();
        }
        c
    }

    fn skip_whitespace(&mut self) {
        while let Some(&c) = self.peek() {
            if c.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    /// Reads a bare word (field name or keyword).
    fn read_word(&mut self) -> String {
        let mut word = String::new();
        while let Some(&c) = self.peek() {
            if c.is_alphanumeric() || c == '_' || c == '-' {
                word.push(c);
                self.next_char();
            } else {
                break;
            }
        }
        word
    }

    /// Reads a raw value up to the next whitespace or parenthesis.
    fn read_value(&mut self) -> String {
        let mut value = String::new();
        while let Some(&c) = self.peek() {
            if c.is_whitespace() || c == '(' || c == ')' {
                break;
            }
            value.push(c);
            self.next_char();
        }
        value
    }

    /// Reads a quoted value. `start` is the offset of the opening quote.
    fn read_quoted(&mut self, quote: char, start: usize) -> QueryResult<String> {
        // Consume the opening quote
        self.next_char();

        let mut value = String::new();
        loop {
            match self.next_char() {
                Some(c) if c == quote => return Ok(value),
                Some('\\') => {
                    if let Some(escaped) = self.next_char() {
                        value.push(escaped);
                    }
                }
                Some(c) => value.push(c),
                None => return Err(QueryError::syntax("unterminated quoted value", start)),
            }
        }
    }

    /// Returns the next token, or `None` at end of input.
    fn next_token(&mut self) -> QueryResult<Option<Token>> {
        self.skip_whitespace();

        let Some(&c) = self.peek() else {
            return Ok(None);
        };
        let start = self.position;

        if self.expect_value {
            self.expect_value = false;
            // A parenthesis ends the value context without producing a value;
            // the parser reports the missing value.
            if c != '(' && c != ')' {
                let text = if c == '"' || c == '\'' {
                    self.read_quoted(c, start)?
                } else {
                    self.read_value()
                };
                return Ok(Some(Token::new(TokenKind::Value, text, start)));
            }
        }

        match c {
            '(' => {
                self.next_char();
                Ok(Some(Token::new(TokenKind::LParen, "(", start)))
            }
            ')' => {
                self.next_char();
                Ok(Some(Token::new(TokenKind::RParen, ")", start)))
            }
            ':' => {
                self.next_char();
                self.expect_value = true;
                Ok(Some(Token::new(TokenKind::Colon, ":", start)))
            }
            _ if c.is_alphanumeric() || c == '_' || c == '-' => {
                let word = self.read_word();
                let kind = match word.to_lowercase().as_str() {
                    "and" => TokenKind::And,
                    "or" => TokenKind::Or,
                    "not" => TokenKind::Not,
                    _ => TokenKind::Ident,
                };
                Ok(Some(Token::new(kind, word, start)))
            }
            _ => Err(QueryError::syntax(
                format!("unexpected character '{}'", c),
                start,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Lexer::new(input)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_tokenize_field_match() {
        let tokens = Lexer::new("priority:p1").tokenize().unwrap();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].kind, TokenKind::Ident);
        assert_eq!(tokens[0].text, "priority");
        assert_eq!(tokens[1].kind, TokenKind::Colon);
        assert_eq!(tokens[2].kind, TokenKind::Value);
        assert_eq!(tokens[2].text, "p1");
        assert_eq!(tokens[3].kind, TokenKind::Eof);
    }

    #[test]
    fn test_tokenize_ends_with_eof() {
        let tokens = Lexer::new("").tokenize().unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert_eq!(tokens[0].position, 0);
    }

    #[test]
    fn test_tokenize_keywords_case_insensitive() {
        for input in ["and", "AND", "And", "aNd"] {
            assert_eq!(kinds(input), vec![TokenKind::And, TokenKind::Eof]);
        }
        assert_eq!(kinds("or"), vec![TokenKind::Or, TokenKind::Eof]);
        assert_eq!(kinds("NOT"), vec![TokenKind::Not, TokenKind::Eof]);
    }

    #[test]
    fn test_tokenize_boolean_expression() {
        assert_eq!(
            kinds("priority:p1 AND status:active"),
            vec![
                TokenKind::Ident,
                TokenKind::Colon,
                TokenKind::Value,
                TokenKind::And,
                TokenKind::Ident,
                TokenKind::Colon,
                TokenKind::Value,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_tokenize_parentheses() {
        assert_eq!(
            kinds("(priority:p1 OR priority:p2)"),
            vec![
                TokenKind::LParen,
                TokenKind::Ident,
                TokenKind::Colon,
                TokenKind::Value,
                TokenKind::Or,
                TokenKind::Ident,
                TokenKind::Colon,
                TokenKind::Value,
                TokenKind::RParen,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_tokenize_value_stops_at_paren() {
        let tokens = Lexer::new("(label:urgent)").tokenize().unwrap();
        assert_eq!(tokens[3].kind, TokenKind::Value);
        assert_eq!(tokens[3].text, "urgent");
        assert_eq!(tokens[4].kind, TokenKind::RParen);
    }

    #[test]
    fn test_tokenize_whitespace_after_colon() {
        let tokens = Lexer::new("priority:  p1").tokenize().unwrap();
        assert_eq!(tokens[2].kind, TokenKind::Value);
        assert_eq!(tokens[2].text, "p1");
    }

    #[test]
    fn test_tokenize_quoted_value_with_spaces() {
        let tokens = Lexer::new("project:\"My Project\"").tokenize().unwrap();
        assert_eq!(tokens[2].kind, TokenKind::Value);
        assert_eq!(tokens[2].text, "My Project");
    }

    #[test]
    fn test_tokenize_single_quoted_value() {
        let tokens = Lexer::new("label:'deep work'").tokenize().unwrap();
        assert_eq!(tokens[2].text, "deep work");
    }

    #[test]
    fn test_tokenize_quoted_value_with_escape() {
        let tokens = Lexer::new(r#"search:"say \"hi\"""#).tokenize().unwrap();
        assert_eq!(tokens[2].text, "say \"hi\"");
    }

    #[test]
    fn test_tokenize_unterminated_quote() {
        let err = Lexer::new("project:\"My Project").tokenize().unwrap_err();
        assert_eq!(err, QueryError::syntax("unterminated quoted value", 8));
    }

    #[test]
    fn test_tokenize_unexpected_character() {
        let err = Lexer::new("priority:p1 & status:active")
            .tokenize()
            .unwrap_err();
        assert!(matches!(err, QueryError::Syntax { position: 12, .. }));
    }

    #[test]
    fn test_tokenize_positions() {
        let tokens = Lexer::new("status:active OR due:today").tokenize().unwrap();
        assert_eq!(tokens[0].position, 0); // status
        assert_eq!(tokens[1].position, 6); // :
        assert_eq!(tokens[2].position, 7); // active
        assert_eq!(tokens[3].position, 14); // OR
        assert_eq!(tokens[4].position, 17); // due
        assert_eq!(tokens.last().unwrap().position, 26); // eof
    }

    #[test]
    fn test_tokenize_missing_value_before_eof() {
        // A trailing colon yields no value token; the parser reports it.
        let tokens = Lexer::new("priority:").tokenize().unwrap();
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![TokenKind::Ident, TokenKind::Colon, TokenKind::Eof]
        );
    }

    #[test]
    fn test_tokenize_keyword_not_treated_as_value() {
        // After a colon the next word is always a raw value, even "and".
        let tokens = Lexer::new("label:and").tokenize().unwrap();
        assert_eq!(tokens[2].kind, TokenKind::Value);
        assert_eq!(tokens[2].text, "and");
    }
}
