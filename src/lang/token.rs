//! Token types for the lexer.

use std::fmt;

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Verbatim source text. Strings keep their quotes.
    pub text: String,
    /// Character offset of the first character.
    pub offset: usize,
    pub line: usize,
    pub col: usize,
}

/// The kind of token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Literals
    Number,
    String,
    Identifier,

    // Keywords
    VarKeyword,      // let, const
    FunctionKeyword, // function
    ReturnKeyword,   // return
    TypeKeyword,     // string, number

    // Operators
    Assign,   // =
    Operator, // + - * / < >

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Colon,
    Comma,
}

impl Token {
    /// Human-readable form for error messages, e.g. `identifier 'x'` or `';'`.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Number
            | TokenKind::String
            | TokenKind::Identifier
            | TokenKind::VarKeyword
            | TokenKind::TypeKeyword
            | TokenKind::Operator => format!("{} '{}'", self.kind, self.text),
            _ => self.kind.to_string(),
        }
    }
}

impl TokenKind {
    /// Classify a scanned word as a keyword, if it is one.
    pub fn keyword(word: &str) -> Option<Self> {
        match word {
            "let" | "const" => Some(TokenKind::VarKeyword),
            "function" => Some(TokenKind::FunctionKeyword),
            "return" => Some(TokenKind::ReturnKeyword),
            "string" | "number" => Some(TokenKind::TypeKeyword),
            _ => None,
        }
    }

    pub fn punctuation(ch: char) -> Option<Self> {
        match ch {
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            '{' => Some(TokenKind::LBrace),
            '}' => Some(TokenKind::RBrace),
            '[' => Some(TokenKind::LBracket),
            ']' => Some(TokenKind::RBracket),
            ';' => Some(TokenKind::Semicolon),
            ':' => Some(TokenKind::Colon),
            ',' => Some(TokenKind::Comma),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Identifier => "identifier",
            TokenKind::VarKeyword => "variable declaration keyword",
            TokenKind::FunctionKeyword => "'function'",
            TokenKind::ReturnKeyword => "'return'",
            TokenKind::TypeKeyword => "type keyword",
            TokenKind::Assign => "'='",
            TokenKind::Operator => "operator",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::Semicolon => "';'",
            TokenKind::Colon => "':'",
            TokenKind::Comma => "','",
        };
        f.write_str(name)
    }
}
