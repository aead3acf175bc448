//! C++ emitter — renders a [`Program`] AST as C++ source text.
//!
//! Each emission run owns an [`Includes`] accumulator. Type names pull in
//! the headers they need as they are rendered, and the deduplicated
//! `#include` block is prepended to the body once rendering is done.

use super::ast::*;
use super::error::CompileError;

/// Formatting options for the emitter.
#[derive(Debug, Clone, PartialEq)]
pub struct EmitOptions {
    /// Indent for statements inside a function body.
    pub indent: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
        }
    }
}

/// Headers required by the code emitted so far, in first-use order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Includes {
    headers: Vec<&'static str>,
}

impl Includes {
    /// Record a required header. Repeats are ignored.
    pub fn require(&mut self, header: &'static str) {
        if !self.headers.contains(&header) {
            self.headers.push(header);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn headers(&self) -> &[&'static str] {
        &self.headers
    }

    /// The `#include` block followed by a blank line, or nothing.
    pub fn render(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        let mut out = String::new();
        for header in self.headers() {
            out.push_str(&format!("#include <{header}>\n"));
        }
        out.push('\n');
        out
    }
}

/// Map a source type keyword to its C++ type, recording any header it needs.
pub fn cpp_type(source_type: &str, includes: &mut Includes) -> &'static str {
    match source_type {
        "string" => {
            includes.require("string");
            "std::string"
        }
        _ => "int",
    }
}

/// Where a statement is being emitted.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Scope<'a> {
    Program,
    Function(&'a str),
}

pub struct CppEmitter {
    options: EmitOptions,
}

impl CppEmitter {
    pub fn new(options: EmitOptions) -> Self {
        Self { options }
    }

    /// Render a whole program. Top-level statements are separated by a
    /// blank line; non-empty output ends with a newline.
    pub fn emit(&self, program: &Program) -> Result<String, CompileError> {
        let mut includes = Includes::default();
        let mut rendered = Vec::with_capacity(program.body.len());
        for statement in &program.body {
            rendered.push(self.emit_statement(statement, Scope::Program, &mut includes)?);
        }

        let mut out = includes.render();
        out.push_str(&rendered.join("\n\n"));
        if !rendered.is_empty() {
            out.push('\n');
        }
        Ok(out)
    }

    fn emit_statement(
        &self,
        statement: &Statement,
        scope: Scope<'_>,
        includes: &mut Includes,
    ) -> Result<String, CompileError> {
        match (statement, scope) {
            (Statement::VariableDeclaration(decl), _) => {
                let ty = cpp_type(&decl.value_type, includes);
                let value = emit_expression(&decl.value);
                Ok(format!("{ty} {} = {value};", decl.identifier))
            }
            (Statement::FunctionDeclaration(func), Scope::Program) => {
                self.emit_function(func, includes)
            }
            (Statement::FunctionDeclaration(func), Scope::Function(outer)) => {
                Err(CompileError::unsupported(format!(
                    "{} '{}' nested inside function '{outer}'",
                    statement.kind_name(),
                    func.identifier
                )))
            }
            (Statement::ReturnStatement(ret), Scope::Function(_)) => Ok(match &ret.argument {
                Some(argument) => format!("return {};", emit_expression(argument)),
                None => "return;".to_string(),
            }),
            (Statement::ReturnStatement(_), Scope::Program) => Err(CompileError::unsupported(
                format!("{} outside of a function body", statement.kind_name()),
            )),
        }
    }

    fn emit_function(
        &self,
        func: &FunctionDeclaration,
        includes: &mut Includes,
    ) -> Result<String, CompileError> {
        let return_type = cpp_type(&func.return_type, includes);
        let params = func
            .parameters
            .iter()
            .map(|p| format!("{} {}", cpp_type(&p.param_type, includes), p.name))
            .collect::<Vec<_>>()
            .join(", ");

        let mut out = format!("{return_type} {}({params}) {{\n", func.identifier);
        for statement in &func.body {
            let line =
                self.emit_statement(statement, Scope::Function(&func.identifier), includes)?;
            out.push_str(&self.options.indent);
            out.push_str(&line);
            out.push('\n');
        }
        out.push('}');
        Ok(out)
    }
}

impl Default for CppEmitter {
    fn default() -> Self {
        Self::new(EmitOptions::default())
    }
}

fn emit_expression(expr: &Expression) -> String {
    match expr {
        Expression::BinaryExpression {
            operator,
            left,
            right,
        } => {
            let prec = operator.precedence();
            let left = emit_operand(left, prec, false);
            let right = emit_operand(right, prec, true);
            format!("{left} {} {right}", operator.symbol())
        }
        Expression::Identifier { name } => name.clone(),
        Expression::NumericLiteral { value } => format!("{value}"),
        Expression::StringLiteral { value } => format!("\"{}\"", escape_cpp_string(value)),
    }
}

/// Parenthesise an operand whose grouping would otherwise be lost.
fn emit_operand(operand: &Expression, parent_prec: u8, is_right: bool) -> String {
    let text = emit_expression(operand);
    let prec = operand.precedence();
    if prec < parent_prec || (is_right && prec == parent_prec) {
        format!("({text})")
    } else {
        text
    }
}

fn escape_cpp_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}
