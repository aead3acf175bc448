//! Lexer for the script language.
//!
//! Converts source text into [`Token`]s, one at a time through
//! [`Lexer::next_token`] or all at once through [`Lexer::tokenize`].
//! Whitespace and comments are skipped and never produce a token.

use super::error::CompileError;
use super::token::{Token, TokenKind};

pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// Reset the lexer onto a new source, cursor at the start.
    pub fn init(&mut self, source: &str) {
        self.chars = source.chars().collect();
        self.pos = 0;
        self.line = 1;
        self.col = 1;
    }

    /// Drain the lexer into a vector of tokens.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, CompileError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Produce the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>, CompileError> {
        self.skip_trivia();

        if self.is_at_end() {
            return Ok(None);
        }

        let start = self.pos;
        let line = self.line;
        let col = self.col;
        let ch = self.peek();

        let kind = match ch {
            '0'..='9' => {
                self.advance_while(|c| c.is_ascii_digit());
                TokenKind::Number
            }
            '"' | '\'' => self.lex_string(ch)?,
            'a'..='z' | 'A'..='Z' | '_' => {
                self.advance_while(|c| c.is_ascii_alphanumeric() || c == '_');
                let word: String = self.chars[start..self.pos].iter().collect();
                TokenKind::keyword(&word).unwrap_or(TokenKind::Identifier)
            }
            '=' => {
                self.advance();
                TokenKind::Assign
            }
            '+' | '-' | '*' | '/' | '<' | '>' => {
                self.advance();
                TokenKind::Operator
            }
            _ => match TokenKind::punctuation(ch) {
                Some(kind) => {
                    self.advance();
                    kind
                }
                None => {
                    return Err(CompileError::lexical(
                        format!("unexpected character '{ch}' at offset {start}"),
                        start,
                        line,
                        col,
                    ));
                }
            },
        };

        Ok(Some(Token {
            kind,
            text: self.chars[start..self.pos].iter().collect(),
            offset: start,
            line,
            col,
        }))
    }

    /// Current cursor as `(offset, line, col)`.
    pub fn position(&self) -> (usize, usize, usize) {
        (self.pos, self.line, self.col)
    }

    fn peek(&self) -> char {
        self.chars[self.pos]
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.pos];
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        ch
    }

    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.is_at_end() && pred(self.peek()) {
            self.advance();
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Skip whitespace, line comments and block comments until the next
    /// significant character. A `/*` without a closing `*/` is not a
    /// comment and lexes as operators.
    fn skip_trivia(&mut self) {
        loop {
            if self.is_at_end() {
                return;
            }
            let ch = self.peek();
            if ch.is_whitespace() {
                self.advance_while(char::is_whitespace);
            } else if ch == '/' && self.peek_next() == Some('/') {
                self.advance_while(|c| c != '\n');
            } else if ch == '/' && self.peek_next() == Some('*') && self.block_comment_closes() {
                self.skip_block_comment();
            } else {
                return;
            }
        }
    }

    fn block_comment_closes(&self) -> bool {
        self.chars[self.pos + 2..]
            .windows(2)
            .any(|w| w == ['*', '/'])
    }

    fn skip_block_comment(&mut self) {
        self.advance(); // '/'
        self.advance(); // '*'
        while !self.is_at_end() {
            if self.peek() == '*' && self.peek_next() == Some('/') {
                self.advance();
                self.advance();
                return;
            }
            self.advance();
        }
    }

    fn lex_string(&mut self, quote: char) -> Result<TokenKind, CompileError> {
        let offset = self.pos;
        let line = self.line;
        let col = self.col;
        self.advance(); // opening quote
        self.advance_while(|c| c != quote);
        if self.is_at_end() {
            return Err(CompileError::lexical(
                format!("unterminated string literal starting with {quote} at offset {offset}"),
                offset,
                line,
                col,
            ));
        }
        self.advance(); // closing quote
        Ok(TokenKind::String)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::error::ErrorKind;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Lexer::new(src)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn lex_variable_declaration() {
        let tokens = Lexer::new("let x: number = 42;").tokenize().unwrap();
        let expected = [
            (TokenKind::VarKeyword, "let"),
            (TokenKind::Identifier, "x"),
            (TokenKind::Colon, ":"),
            (TokenKind::TypeKeyword, "number"),
            (TokenKind::Assign, "="),
            (TokenKind::Number, "42"),
            (TokenKind::Semicolon, ";"),
        ];
        assert_eq!(tokens.len(), expected.len());
        for (token, (kind, text)) in tokens.iter().zip(expected) {
            assert_eq!(token.kind, kind);
            assert_eq!(token.text, text);
        }
    }

    #[test]
    fn lex_strings_keep_quotes() {
        let tokens = Lexer::new(r#"'Alice' "Bob""#).tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].text, "'Alice'");
        assert_eq!(tokens[1].kind, TokenKind::String);
        assert_eq!(tokens[1].text, "\"Bob\"");
    }

    #[test]
    fn lex_string_may_contain_other_quote() {
        let tokens = Lexer::new(r#""it's""#).tokenize().unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, r#""it's""#);
    }

    #[test]
    fn lex_keywords() {
        assert_eq!(
            kinds("let const function return string number"),
            vec![
                TokenKind::VarKeyword,
                TokenKind::VarKeyword,
                TokenKind::FunctionKeyword,
                TokenKind::ReturnKeyword,
                TokenKind::TypeKeyword,
                TokenKind::TypeKeyword,
            ]
        );
    }

    #[test]
    fn lex_keyword_prefix_is_identifier() {
        let tokens = Lexer::new("letter returned numbers").tokenize().unwrap();
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Identifier));
        assert_eq!(tokens[0].text, "letter");
    }

    #[test]
    fn lex_operators_and_punctuation() {
        assert_eq!(
            kinds("+ - * / < > = ( ) { } [ ] ; : ,"),
            vec![
                TokenKind::Operator,
                TokenKind::Operator,
                TokenKind::Operator,
                TokenKind::Operator,
                TokenKind::Operator,
                TokenKind::Operator,
                TokenKind::Assign,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::Semicolon,
                TokenKind::Colon,
                TokenKind::Comma,
            ]
        );
    }

    #[test]
    fn lex_digits_then_letters_split() {
        let tokens = Lexer::new("123abc").tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].text, "123");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].text, "abc");
    }

    #[test]
    fn lex_comments_are_skipped() {
        let src = "// leading\nlet /* inline */ x /* multi\nline */ : number = 1; // trailing";
        assert_eq!(
            kinds(src),
            vec![
                TokenKind::VarKeyword,
                TokenKind::Identifier,
                TokenKind::Colon,
                TokenKind::TypeKeyword,
                TokenKind::Assign,
                TokenKind::Number,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn lex_division_is_not_a_comment() {
        assert_eq!(
            kinds("a / b"),
            vec![
                TokenKind::Identifier,
                TokenKind::Operator,
                TokenKind::Identifier
            ]
        );
    }

    #[test]
    fn lex_line_and_column_tracking() {
        let tokens = Lexer::new("let x\n  = 5").tokenize().unwrap();
        assert_eq!((tokens[0].line, tokens[0].col), (1, 1));
        assert_eq!((tokens[1].line, tokens[1].col), (1, 5));
        assert_eq!((tokens[2].line, tokens[2].col), (2, 3));
        assert_eq!(tokens[2].offset, 8);
    }

    #[test]
    fn lex_next_token_pulls_one_at_a_time() {
        let mut lexer = Lexer::new("return 1;");
        assert_eq!(
            lexer.next_token().unwrap().map(|t| t.kind),
            Some(TokenKind::ReturnKeyword)
        );
        assert_eq!(
            lexer.next_token().unwrap().map(|t| t.kind),
            Some(TokenKind::Number)
        );
        assert_eq!(
            lexer.next_token().unwrap().map(|t| t.kind),
            Some(TokenKind::Semicolon)
        );
        assert!(lexer.next_token().unwrap().is_none());
        assert!(lexer.next_token().unwrap().is_none());
    }

    #[test]
    fn lex_init_resets_cursor() {
        let mut lexer = Lexer::new("a b c");
        lexer.tokenize().unwrap();
        lexer.init("d");
        let tokens = lexer.tokenize().unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "d");
        assert_eq!(tokens[0].offset, 0);
    }

    #[test]
    fn lex_significant_text_reconstructs_input() {
        let src = "function  add(a: number,b: number): number {\n  return a + b * 2;\n}";
        let joined: String = Lexer::new(src)
            .tokenize()
            .unwrap()
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        let significant: String = src.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(joined, significant);
    }

    #[test]
    fn lex_empty_input() {
        assert!(Lexer::new("").tokenize().unwrap().is_empty());
        assert!(Lexer::new("  \n\t // only a comment").tokenize().unwrap().is_empty());
    }

    #[test]
    fn lex_error_on_unexpected_char() {
        let err = Lexer::new("@").tokenize().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Lexical);
        assert_eq!(err.offset, 0);
        assert!(err.message.contains('@'));
    }

    #[test]
    fn lex_error_reports_offset() {
        let err = Lexer::new("let x = 1 # 2").tokenize().unwrap_err();
        assert_eq!(err.offset, 10);
        assert_eq!(err.col, 11);
        assert!(err.message.contains("'#'"));
    }

    #[test]
    fn lex_unterminated_string_error() {
        let err = Lexer::new("let s = \"abc").tokenize().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Lexical);
        assert_eq!(err.offset, 8);
    }

    #[test]
    fn lex_unclosed_block_comment_is_operators() {
        let tokens = Lexer::new("a /* b").tokenize().unwrap();
        let lexed: Vec<(TokenKind, &str)> =
            tokens.iter().map(|t| (t.kind, t.text.as_str())).collect();
        assert_eq!(
            lexed,
            vec![
                (TokenKind::Identifier, "a"),
                (TokenKind::Operator, "/"),
                (TokenKind::Operator, "*"),
                (TokenKind::Identifier, "b"),
            ]
        );
    }

    #[test]
    fn lex_block_comment_closed_later_is_skipped() {
        assert_eq!(
            kinds("a /* b */ c"),
            vec![TokenKind::Identifier, TokenKind::Identifier]
        );
    }
}
