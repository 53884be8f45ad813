//! Parser for list command scripts
//!
//! A script is a sequence of statements separated by newlines or `;`. Each
//! statement is a command keyword followed by its integer arguments.

use std::str::FromStr;

use crate::ast::{Command, Script, ScriptError, SourceMap, Span, Spanned};
use crate::lexer::{Lexer, SpannedToken, Token};

pub struct Parser {
    source_map: SourceMap,
    filename: String,
    tokens: Vec<SpannedToken>,
}

impl Parser {
    /// Create a new parser for the given input
    ///
    /// # Errors
    ///
    /// Returns `ScriptError` if there are lexical errors in the input
    pub fn new(input: &str) -> Result<Self, ScriptError> {
        Self::new_with_filename(input, "<input>")
    }

    /// Create a new parser for the given input with a filename
    ///
    /// # Errors
    ///
    /// Returns `ScriptError` if there are lexical errors in the input
    pub fn new_with_filename(input: &str, filename: &str) -> Result<Self, ScriptError> {
        let source_map = SourceMap::new(input);
        let tokens = Lexer::new(input).tokenize();

        if let Some(bad) = tokens.iter().find(|token| token.token == Token::Error) {
            return Err(ScriptError::syntax(
                format!("Unexpected character: {}", bad.text),
                bad.span,
                &source_map,
                filename,
            ));
        }

        Ok(Self {
            source_map,
            filename: filename.to_string(),
            tokens,
        })
    }

    /// Parse the input into a script
    ///
    /// # Errors
    ///
    /// Returns `ScriptError` on the first malformed statement
    pub fn parse(self) -> Result<Script, ScriptError> {
        let commands = self
            .tokens
            .split(|token| token.token.is_separator())
            .filter(|statement| !statement.is_empty())
            .map(|statement| self.parse_statement(statement))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(filename = %self.filename, commands = commands.len(), "script parsed");

        Ok(Script {
            commands,
            source_map: self.source_map,
            filename: self.filename,
        })
    }

    fn parse_statement(&self, statement: &[SpannedToken]) -> Result<Spanned<Command>, ScriptError> {
        let (keyword, args) = match statement {
            [first, rest @ ..] if first.token == Token::Word => (first, rest),
            [first, ..] => {
                return Err(self.syntax(
                    format!("expected a command, found `{}`", first.text),
                    first.span,
                ));
            }
            [] => unreachable!("empty statements are filtered out"),
        };

        let end = args.last().unwrap_or(keyword).span.end;
        let span = Span::new(keyword.span.start, end);

        let command = match keyword.text.as_str() {
            "push_front" => {
                let [value] = self.arguments::<1>(keyword, args)?;
                Command::PushFront {
                    value: self.integer(value)?,
                }
            }
            "push_back" => {
                let [value] = self.arguments::<1>(keyword, args)?;
                Command::PushBack {
                    value: self.integer(value)?,
                }
            }
            "insert" => {
                let [value, index] = self.arguments::<2>(keyword, args)?;
                Command::Insert {
                    value: self.integer(value)?,
                    index: self.integer(index)?,
                }
            }
            "remove" => {
                let [index] = self.arguments::<1>(keyword, args)?;
                Command::Remove {
                    index: self.integer(index)?,
                }
            }
            "get" => {
                let [index] = self.arguments::<1>(keyword, args)?;
                Command::Get {
                    index: self.integer(index)?,
                }
            }
            "remove_front" => {
                let [] = self.arguments::<0>(keyword, args)?;
                Command::RemoveFront
            }
            "remove_back" => {
                let [] = self.arguments::<0>(keyword, args)?;
                Command::RemoveBack
            }
            "len" => {
                let [] = self.arguments::<0>(keyword, args)?;
                Command::Len
            }
            "print" => {
                let [] = self.arguments::<0>(keyword, args)?;
                Command::Print
            }
            "clear" => {
                let [] = self.arguments::<0>(keyword, args)?;
                Command::Clear
            }
            other => {
                return Err(ScriptError::unknown_command(
                    other.to_string(),
                    keyword.span,
                    &self.source_map,
                    &self.filename,
                ));
            }
        };

        Ok(Spanned::new(command, span))
    }

    /// Check that `keyword` received exactly `N` arguments
    fn arguments<'a, const N: usize>(
        &self,
        keyword: &SpannedToken,
        args: &'a [SpannedToken],
    ) -> Result<[&'a SpannedToken; N], ScriptError> {
        let found = args.len();
        let args: Vec<&SpannedToken> = args.iter().collect();
        args.try_into().map_err(|_| {
            let plural = if N == 1 { "" } else { "s" };
            self.syntax(
                format!("{} expects {N} argument{plural}, found {found}", keyword.text),
                keyword.span,
            )
        })
    }

    fn integer<T: FromStr>(&self, token: &SpannedToken) -> Result<T, ScriptError> {
        if token.token != Token::Integer {
            return Err(self.syntax(
                format!("expected an integer, found `{}`", token.text),
                token.span,
            ));
        }
        token.text.parse().map_err(|_| {
            self.syntax(
                format!("integer out of range: {}", token.text),
                token.span,
            )
        })
    }

    fn syntax(&self, message: String, span: Span) -> ScriptError {
        ScriptError::syntax(message, span, &self.source_map, &self.filename)
    }
}
