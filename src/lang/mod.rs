//! Script compiler — source text → tokens → AST → C++ text.

pub mod ast;
pub mod emit;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod token;

pub use ast::*;
pub use emit::{CppEmitter, EmitOptions};
pub use error::{CompileError, ErrorKind};

use parser::Parser;

/// The compiler facade.
///
/// `parse` and `emit` are the two pipeline entry points; `transpile` runs
/// both.
pub struct Compiler;

impl Compiler {
    /// Parse source text into a Program AST.
    pub fn parse(source: &str) -> Result<Program, CompileError> {
        Parser::new(source).parse()
    }

    /// Render a Program AST as C++ with default formatting.
    pub fn emit(program: &Program) -> Result<String, CompileError> {
        CppEmitter::default().emit(program)
    }

    /// Parse and render in one step.
    pub fn transpile(source: &str, options: &EmitOptions) -> Result<String, CompileError> {
        let program = Self::parse(source)?;
        CppEmitter::new(options.clone()).emit(&program)
    }
}
