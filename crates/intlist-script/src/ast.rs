//! Syntax tree for list command scripts
//!
//! Every command keeps its location so runtime failures can point at the line
//! that caused them.

use intlist_core::ListError;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Line and column position in source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Convert byte offsets to line/column positions
#[derive(Debug, Clone)]
pub struct SourceMap {
    line_starts: Vec<usize>,
}

impl SourceMap {
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(pos + 1);
            }
        }
        Self { line_starts }
    }

    #[must_use]
    pub fn position(&self, byte_offset: usize) -> Position {
        match self.line_starts.binary_search(&byte_offset) {
            Ok(line) => Position::new(line + 1, 1),
            Err(line) => {
                let line_start = self.line_starts[line - 1];
                Position::new(line, byte_offset - line_start + 1)
            }
        }
    }
}

/// Node with location information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    #[must_use]
    pub const fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// A single list command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// push_front VALUE
    PushFront { value: i32 },
    /// push_back VALUE
    PushBack { value: i32 },
    /// insert VALUE INDEX
    Insert { value: i32, index: i64 },
    /// remove_front
    RemoveFront,
    /// remove_back
    RemoveBack,
    /// remove INDEX
    Remove { index: i64 },
    /// get INDEX
    Get { index: i64 },
    /// len
    Len,
    /// print
    Print,
    /// clear
    Clear,
}

impl Command {
    /// The keyword that introduces this command
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PushFront { .. } => "push_front",
            Self::PushBack { .. } => "push_back",
            Self::Insert { .. } => "insert",
            Self::RemoveFront => "remove_front",
            Self::RemoveBack => "remove_back",
            Self::Remove { .. } => "remove",
            Self::Get { .. } => "get",
            Self::Len => "len",
            Self::Print => "print",
            Self::Clear => "clear",
        }
    }
}

/// A parsed script, ready to run
#[derive(Debug, Clone)]
pub struct Script {
    pub commands: Vec<Spanned<Command>>,
    pub source_map: SourceMap,
    pub filename: String,
}

impl Script {
    #[must_use]
    pub fn error_at(&self, kind: RuntimeFailure, span: Span) -> ScriptError {
        ScriptError::runtime(kind, span, &self.source_map, &self.filename)
    }
}

/// What went wrong while a command ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeFailure {
    List(ListError),
    NegativeIndex(i64),
}

impl RuntimeFailure {
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::List(ListError::Empty) => "ERR_EMPTY",
            Self::List(ListError::OutOfRange { .. }) | Self::NegativeIndex(_) => "ERR_OUT_OF_RANGE",
            Self::List(ListError::Alloc) => "ERR_ALLOC",
        }
    }

    fn message(&self) -> String {
        match self {
            Self::List(err) => err.to_string(),
            Self::NegativeIndex(index) => format!("index {index} is negative"),
        }
    }
}

impl From<ListError> for RuntimeFailure {
    fn from(err: ListError) -> Self {
        Self::List(err)
    }
}

/// Error types with location information
#[derive(thiserror::Error, Debug)]
pub enum ScriptError {
    #[error("intlist:{filename}:{line}:{column}: ERR_SYNTAX: {message}")]
    Syntax {
        message: String,
        span: Span,
        filename: String,
        line: usize,
        column: usize,
    },

    #[error("intlist:{filename}:{line}:{column}: ERR_UNKNOWN_COMMAND: {command} is not a list command")]
    UnknownCommand {
        command: String,
        span: Span,
        filename: String,
        line: usize,
        column: usize,
    },

    #[error("intlist:{filename}:{line}:{column}: {code}: {message}")]
    Runtime {
        code: &'static str,
        message: String,
        failure: RuntimeFailure,
        span: Span,
        filename: String,
        line: usize,
        column: usize,
    },
}

impl ScriptError {
    #[must_use]
    pub fn syntax(message: String, span: Span, source_map: &SourceMap, filename: &str) -> Self {
        let pos = source_map.position(span.start);
        Self::Syntax {
            message,
            span,
            filename: filename.to_string(),
            line: pos.line,
            column: pos.column,
        }
    }

    #[must_use]
    pub fn unknown_command(
        command: String,
        span: Span,
        source_map: &SourceMap,
        filename: &str,
    ) -> Self {
        let pos = source_map.position(span.start);
        Self::UnknownCommand {
            command,
            span,
            filename: filename.to_string(),
            line: pos.line,
            column: pos.column,
        }
    }

    #[must_use]
    pub fn runtime(
        failure: RuntimeFailure,
        span: Span,
        source_map: &SourceMap,
        filename: &str,
    ) -> Self {
        let pos = source_map.position(span.start);
        Self::Runtime {
            code: failure.code(),
            message: failure.message(),
            failure,
            span,
            filename: filename.to_string(),
            line: pos.line,
            column: pos.column,
        }
    }

    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Syntax { span, .. }
            | Self::UnknownCommand { span, .. }
            | Self::Runtime { span, .. } => *span,
        }
    }
}
