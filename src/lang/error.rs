//! Error types for the compiler pipeline.

use std::fmt;

/// An error that occurred while lexing, parsing or emitting.
#[derive(Debug, Clone, PartialEq)]
pub struct CompileError {
    pub message: String,
    pub kind: ErrorKind,
    /// Character offset into the source, where known.
    pub offset: usize,
    pub line: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    UnsupportedConstruct,
}

impl CompileError {
    pub fn lexical(message: impl Into<String>, offset: usize, line: usize, col: usize) -> Self {
        Self {
            message: message.into(),
            kind: ErrorKind::Lexical,
            offset,
            line,
            col,
        }
    }

    pub fn syntax(message: impl Into<String>, offset: usize, line: usize, col: usize) -> Self {
        Self {
            message: message.into(),
            kind: ErrorKind::Syntax,
            offset,
            line,
            col,
        }
    }

    /// Emission errors carry no source position; the AST does not keep one.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ErrorKind::UnsupportedConstruct,
            offset: 0,
            line: 0,
            col: 0,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Lexical => "LexicalError",
            ErrorKind::Syntax => "SyntaxError",
            ErrorKind::UnsupportedConstruct => "UnsupportedConstructError",
        };
        f.write_str(name)
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == ErrorKind::UnsupportedConstruct {
            write!(f, "{}: {}", self.kind, self.message)
        } else {
            write!(
                f,
                "[{}:{}] {}: {}",
                self.line, self.col, self.kind, self.message
            )
        }
    }
}

impl std::error::Error for CompileError {}
