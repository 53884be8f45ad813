//! Lexical analysis for list command scripts using logos.

use crate::ast::Span;
use logos::Logos;

#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Command keyword (push_back, remove, ...)
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Word,

    /// Decimal integer with optional sign
    #[regex(r"-?[0-9]+")]
    Integer,

    /// Command separator (;)
    #[token(";")]
    Semicolon,

    /// Newline, also separates commands
    #[token("\n")]
    Newline,

    /// Comment running to end of line (ignored)
    #[regex(r"#[^\n]*", logos::skip)]
    Comment,

    /// Whitespace (ignored)
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Whitespace,

    /// End of input
    Eof,

    /// Lexer error
    Error,
}

impl Token {
    #[must_use]
    pub const fn is_separator(self) -> bool {
        matches!(self, Self::Semicolon | Self::Newline | Self::Eof)
    }
}

/// Token with location information
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
    pub text: String,
}

/// Lexer that produces tokens with spans
pub struct Lexer<'input> {
    lexer: logos::Lexer<'input, Token>,
    input: &'input str,
}

impl<'input> Lexer<'input> {
    #[must_use]
    pub fn new(input: &'input str) -> Self {
        Self {
            lexer: Token::lexer(input),
            input,
        }
    }

    /// Get the next token with span information
    pub fn next_token(&mut self) -> SpannedToken {
        let token = match self.lexer.next() {
            Some(Ok(token)) => token,
            Some(Err(())) => Token::Error,
            None => {
                return SpannedToken {
                    token: Token::Eof,
                    span: Span::new(self.input.len(), self.input.len()),
                    text: String::new(),
                };
            }
        };

        let span = self.lexer.span();
        SpannedToken {
            token,
            span: Span::new(span.start, span.end),
            text: self.input[span].to_string(),
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Vec<SpannedToken> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.token == Token::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}
