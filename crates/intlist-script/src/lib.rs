//! Command scripts for driving an `IntList`
//!
//! A script is lexed with logos, parsed into [`Command`]s and run by a
//! [`Session`] that owns the list.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod session;

pub use ast::{Command, RuntimeFailure, Script, ScriptError, SourceMap, Span, Spanned};
pub use parser::Parser;
pub use session::{ErrorMode, Output, Session};

/// Parse `input` as a script named `filename`
///
/// # Errors
///
/// Returns `ScriptError` on lexical or syntax errors
pub fn parse_script(input: &str, filename: &str) -> Result<Script, ScriptError> {
    Parser::new_with_filename(input, filename)?.parse()
}
