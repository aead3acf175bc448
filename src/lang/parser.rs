//! Parser for the script language.
//!
//! Recursive descent over a single lookahead token pulled from the
//! [`Lexer`] on demand. Arithmetic uses precedence climbing: `Expression`
//! handles `+`/`-` and calls `Term` for `*`/`/` operands, each level
//! folding left so both are left-associative.
//!
//! ```text
//! Program             := Statement* EOF
//! Statement           := VariableDeclaration | FunctionDeclaration | ReturnStatement
//! VariableDeclaration := VarKeyword IDENTIFIER ':' TypeKeyword '=' Expression ';'
//! FunctionDeclaration := 'function' IDENTIFIER '(' Parameters? ')' ':' TypeKeyword '{' Statement* '}'
//! Parameters          := Parameter (',' Parameter)*
//! Parameter           := IDENTIFIER ':' TypeKeyword
//! ReturnStatement     := 'return' Expression? ';'
//! Expression          := Term (('+' | '-') Term)*
//! Term                := Factor (('*' | '/') Factor)*
//! Factor              := '(' Expression ')' | Literal
//! Literal             := NUMBER | STRING | IDENTIFIER
//! ```

use super::ast::*;
use super::error::CompileError;
use super::lexer::Lexer;
use super::token::{Token, TokenKind};

pub struct Parser {
    lexer: Lexer,
    lookahead: Option<Token>,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        Self {
            lexer: Lexer::new(source),
            lookahead: None,
        }
    }

    /// Parse the whole source into a [`Program`]. Fails on the first error.
    pub fn parse(&mut self) -> Result<Program, CompileError> {
        self.lookahead = self.lexer.next_token()?;
        self.program()
    }

    fn program(&mut self) -> Result<Program, CompileError> {
        let mut body = Vec::new();
        while self.lookahead.is_some() {
            body.push(self.statement()?);
        }
        Ok(Program { body })
    }

    fn statement(&mut self) -> Result<Statement, CompileError> {
        let kind = self.lookahead.as_ref().map(|t| t.kind);
        match kind {
            Some(TokenKind::VarKeyword) => self
                .variable_declaration()
                .map(Statement::VariableDeclaration),
            Some(TokenKind::FunctionKeyword) => self
                .function_declaration()
                .map(Statement::FunctionDeclaration),
            Some(TokenKind::ReturnKeyword) => {
                self.return_statement().map(Statement::ReturnStatement)
            }
            _ => Err(self.unexpected("statement form not recognized", "a statement")),
        }
    }

    fn variable_declaration(&mut self) -> Result<VariableDeclaration, CompileError> {
        self.eat(TokenKind::VarKeyword)?;
        let identifier = self.eat(TokenKind::Identifier)?.text;
        self.eat(TokenKind::Colon)?;
        let value_type = self.eat(TokenKind::TypeKeyword)?.text;
        self.eat(TokenKind::Assign)?;
        let value = self.expression()?;
        self.eat(TokenKind::Semicolon)?;
        Ok(VariableDeclaration {
            identifier,
            value_type,
            value,
        })
    }

    fn function_declaration(&mut self) -> Result<FunctionDeclaration, CompileError> {
        self.eat(TokenKind::FunctionKeyword)?;
        let identifier = self.eat(TokenKind::Identifier)?.text;
        let parameters = self.parameters()?;
        self.eat(TokenKind::Colon)?;
        let return_type = self.eat(TokenKind::TypeKeyword)?.text;
        let body = self.block(&identifier)?;
        Ok(FunctionDeclaration {
            identifier,
            parameters,
            return_type,
            body,
        })
    }

    fn parameters(&mut self) -> Result<Vec<Parameter>, CompileError> {
        self.eat(TokenKind::LParen)?;
        let mut parameters = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                let name = self.eat(TokenKind::Identifier)?.text;
                self.eat(TokenKind::Colon)?;
                let param_type = self.eat(TokenKind::TypeKeyword)?.text;
                parameters.push(Parameter { name, param_type });
                if !self.check(TokenKind::Comma) {
                    break;
                }
                self.eat(TokenKind::Comma)?;
            }
        }
        self.eat(TokenKind::RParen)?;
        Ok(parameters)
    }

    /// Parse `{ Statement* }` for the function named `owner`.
    fn block(&mut self, owner: &str) -> Result<Vec<Statement>, CompileError> {
        self.eat(TokenKind::LBrace)?;
        let mut body = Vec::new();
        while !self.check(TokenKind::RBrace) {
            if self.lookahead.is_none() {
                return Err(self.unexpected(
                    &format!("unterminated body of function '{owner}'"),
                    "'}'",
                ));
            }
            body.push(self.statement()?);
        }
        self.eat(TokenKind::RBrace)?;
        Ok(body)
    }

    fn return_statement(&mut self) -> Result<ReturnStatement, CompileError> {
        self.eat(TokenKind::ReturnKeyword)?;
        let argument = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.eat(TokenKind::Semicolon)?;
        Ok(ReturnStatement { argument })
    }

    fn expression(&mut self) -> Result<Expression, CompileError> {
        let mut left = self.term()?;
        while let Some(operator) =
            self.check_operator(&[BinaryOperator::Add, BinaryOperator::Sub])
        {
            self.eat(TokenKind::Operator)?;
            let right = self.term()?;
            left = Expression::binary(operator, left, right);
        }
        Ok(left)
    }

    fn term(&mut self) -> Result<Expression, CompileError> {
        let mut left = self.factor()?;
        while let Some(operator) =
            self.check_operator(&[BinaryOperator::Mul, BinaryOperator::Div])
        {
            self.eat(TokenKind::Operator)?;
            let right = self.factor()?;
            left = Expression::binary(operator, left, right);
        }
        Ok(left)
    }

    fn factor(&mut self) -> Result<Expression, CompileError> {
        if self.check(TokenKind::LParen) {
            self.eat(TokenKind::LParen)?;
            let inner = self.expression()?;
            self.eat(TokenKind::RParen)?;
            return Ok(inner);
        }
        self.literal()
    }

    fn literal(&mut self) -> Result<Expression, CompileError> {
        let kind = self.lookahead.as_ref().map(|t| t.kind);
        match kind {
            Some(TokenKind::Number) => {
                let token = self.eat(TokenKind::Number)?;
                // Digit runs past f64 range parse to infinity.
                match token.text.parse::<f64>() {
                    Ok(value) if value.is_finite() => Ok(Expression::number(value)),
                    _ => Err(CompileError::syntax(
                        format!("numeric literal out of range: {}", token.text),
                        token.offset,
                        token.line,
                        token.col,
                    )),
                }
            }
            Some(TokenKind::String) => {
                let token = self.eat(TokenKind::String)?;
                // Quotes are single ASCII characters.
                let value = &token.text[1..token.text.len() - 1];
                Ok(Expression::string(value))
            }
            Some(TokenKind::Identifier) => {
                let token = self.eat(TokenKind::Identifier)?;
                Ok(Expression::identifier(token.text))
            }
            _ => Err(self.unexpected("invalid expression", "a literal or identifier")),
        }
    }

    // --- Utility methods ---

    fn check(&self, kind: TokenKind) -> bool {
        self.lookahead.as_ref().is_some_and(|t| t.kind == kind)
    }

    /// If the lookahead is one of `operators`, return it without consuming.
    fn check_operator(&self, operators: &[BinaryOperator]) -> Option<BinaryOperator> {
        let token = self.lookahead.as_ref()?;
        if token.kind != TokenKind::Operator {
            return None;
        }
        BinaryOperator::from_symbol(&token.text).filter(|op| operators.contains(op))
    }

    /// Consume the lookahead if it has the expected kind and pull the next
    /// token from the lexer.
    fn eat(&mut self, kind: TokenKind) -> Result<Token, CompileError> {
        match self.lookahead.take() {
            Some(token) if token.kind == kind => {
                self.lookahead = self.lexer.next_token()?;
                Ok(token)
            }
            other => {
                self.lookahead = other;
                Err(self.unexpected("unexpected token", &kind.to_string()))
            }
        }
    }

    fn unexpected(&self, context: &str, expected: &str) -> CompileError {
        match &self.lookahead {
            Some(t) => CompileError::syntax(
                format!("{context}: expected {expected}, got {}", t.describe()),
                t.offset,
                t.line,
                t.col,
            ),
            None => {
                let (offset, line, col) = self.lexer.position();
                CompileError::syntax(
                    format!("{context}: expected {expected}, got end of input"),
                    offset,
                    line,
                    col,
                )
            }
        }
    }
}
