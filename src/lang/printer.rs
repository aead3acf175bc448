//! Canonical source printer — renders an AST back into script source.
//!
//! The output is one statement per line with four-space block indent and
//! only the parentheses the tree shape needs. Parsing the printed text
//! yields a tree equal to the one printed, as long as no string literal
//! contains both quote characters (the language has no escapes).

use std::fmt;

use super::ast::*;

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.body {
            write_statement(f, statement, 0)?;
        }
        Ok(())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::BinaryExpression {
                operator,
                left,
                right,
            } => {
                let prec = operator.precedence();
                write_operand(f, left, prec, false)?;
                write!(f, " {} ", operator.symbol())?;
                write_operand(f, right, prec, true)
            }
            Expression::Identifier { name } => f.write_str(name),
            Expression::NumericLiteral { value } => write!(f, "{value}"),
            Expression::StringLiteral { value } => {
                let quote = if value.contains('"') { '\'' } else { '"' };
                write!(f, "{quote}{value}{quote}")
            }
        }
    }
}

fn write_operand(
    f: &mut fmt::Formatter<'_>,
    operand: &Expression,
    parent_prec: u8,
    is_right: bool,
) -> fmt::Result {
    let prec = operand.precedence();
    if prec < parent_prec || (is_right && prec == parent_prec) {
        write!(f, "({operand})")
    } else {
        write!(f, "{operand}")
    }
}

fn write_statement(f: &mut fmt::Formatter<'_>, statement: &Statement, depth: usize) -> fmt::Result {
    let pad = "    ".repeat(depth);
    match statement {
        Statement::VariableDeclaration(decl) => writeln!(
            f,
            "{pad}let {}: {} = {};",
            decl.identifier, decl.value_type, decl.value
        ),
        Statement::FunctionDeclaration(func) => {
            let params = func
                .parameters
                .iter()
                .map(|p| format!("{}: {}", p.name, p.param_type))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(
                f,
                "{pad}function {}({params}): {} {{",
                func.identifier, func.return_type
            )?;
            for inner in &func.body {
                write_statement(f, inner, depth + 1)?;
            }
            writeln!(f, "{pad}}}")
        }
        Statement::ReturnStatement(ret) => match &ret.argument {
            Some(argument) => writeln!(f, "{pad}return {argument};"),
            None => writeln!(f, "{pad}return;"),
        },
    }
}
