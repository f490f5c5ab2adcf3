//! Tokenizer for type expressions.
//!
//! Tokens are produced lazily so that errors surface in input order, the same
//! way the parser consumes them. The tokenizer also tracks `<`/`>` nesting:
//! an unmatched `>` and an unclosed `<` at end of input are reported here.

use crate::error::SyntaxError;
use logos::Logos;
use std::fmt;
use std::ops::Range;

/// Raw token from logos (before bracket tracking).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"\s+")]
enum RawToken {
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token(",")]
    Comma,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("?")]
    Question,
    #[token("extends")]
    Extends,
    #[token("super")]
    Super,
    // Plain or dotted name, read greedily
    #[regex(r"[\p{L}\p{N}_$.]+")]
    Ident,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Ident,
    Lt,
    Gt,
    Comma,
    LBracket,
    RBracket,
    Question,
    Extends,
    Super,
    Eof,
}

impl TokenKind {
    /// Tokens that can stand for a class name. `extends` and `super` only act
    /// as keywords right after `?`.
    pub fn is_name(self) -> bool {
        matches!(self, TokenKind::Ident | TokenKind::Extends | TokenKind::Super)
    }
}

impl From<RawToken> for TokenKind {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::Lt => TokenKind::Lt,
            RawToken::Gt => TokenKind::Gt,
            RawToken::Comma => TokenKind::Comma,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::Question => TokenKind::Question,
            RawToken::Extends => TokenKind::Extends,
            RawToken::Super => TokenKind::Super,
            RawToken::Ident => TokenKind::Ident,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Ident => "IDENT",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::Comma => "COMMA",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Question => "QUESTION",
            TokenKind::Extends => "EXTENDS",
            TokenKind::Super => "SUPER",
            TokenKind::Eof => "EOF",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte range in the input
    pub span: Range<usize>,
}

pub struct Tokenizer<'a> {
    input: &'a str,
    lexer: logos::Lexer<'a, RawToken>,
    depth: usize,
    current: Token,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            lexer: RawToken::lexer(input),
            depth: 0,
            current: Token {
                kind: TokenKind::Eof,
                span: 0..0,
            },
        }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    pub fn current(&self) -> &Token {
        &self.current
    }

    pub fn kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Source text of the current token.
    pub fn text(&self) -> &'a str {
        &self.input[self.current.span.clone()]
    }

    /// Move to the next token and return its kind.
    pub fn advance(&mut self) -> Result<TokenKind, SyntaxError> {
        let raw = match self.lexer.next() {
            None => {
                if self.depth != 0 {
                    return Err(SyntaxError::IncorrectFormat {
                        input: self.input.to_string(),
                    });
                }
                let end = self.input.len();
                self.current = Token {
                    kind: TokenKind::Eof,
                    span: end..end,
                };
                return Ok(TokenKind::Eof);
            }
            Some(Err(())) => {
                let span = self.lexer.span();
                return Err(SyntaxError::UnexpectedCharacter {
                    found: self.input[span.clone()].chars().next().unwrap_or_default(),
                    offset: span.start,
                    input: self.input.to_string(),
                });
            }
            Some(Ok(raw)) => raw,
        };

        match raw {
            RawToken::Lt => self.depth += 1,
            RawToken::Gt => {
                if self.depth == 0 {
                    return Err(SyntaxError::TooManyClosingBrackets {
                        input: self.input.to_string(),
                    });
                }
                self.depth -= 1;
            }
            _ => {}
        }

        self.current = Token {
            kind: raw.into(),
            span: self.lexer.span(),
        };
        Ok(self.current.kind)
    }
}

/// Tokenize the whole input, ending with an `EOF` token.
pub fn tokenize(input: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut tokenizer = Tokenizer::new(input);
    let mut tokens = Vec::new();
    loop {
        let kind = tokenizer.advance()?;
        tokens.push(tokenizer.current().clone());
        if kind == TokenKind::Eof {
            return Ok(tokens);
        }
    }
}
