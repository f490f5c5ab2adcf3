//! Recursive-descent parser for type expressions.
//!
//! ```text
//! type_arg  := '?' wildcard | type
//! type      := NAME ('<' type_arg (',' type_arg)* '>')? ('[' ']')*
//! wildcard  := (('extends' | 'super') type)?
//! ```
//!
//! A wildcard is accepted at the top level as well as in argument position.
//!
//! Parsing runs in two passes. The grammar pass builds a tree of unresolved
//! names from the token stream alone; only once the whole input is accepted
//! are the names resolved against the registry, left to right. A malformed
//! expression therefore always reports a syntax error, whatever the registry
//! contains.

use crate::error::{SyntaxError, TypeError, TypeResult};
use crate::lexer::{TokenKind, Tokenizer};
use crate::registry::NameRegistry;
use typex_api::{ParameterizedType, TypeExpr, WildcardType};

/// Maximum nesting of argument lists plus array dimensions.
pub const MAX_NESTING: usize = 128;

/// Grammar-level result, names not yet resolved.
#[derive(Debug)]
enum Node<'a> {
    Class(&'a str),
    Array(Box<Node<'a>>),
    Generic(&'a str, Vec<Node<'a>>),
    Unbounded,
    Extends(Box<Node<'a>>),
    Super(Box<Node<'a>>),
}

pub struct TypeParser<'a> {
    tokens: Tokenizer<'a>,
    registry: &'a NameRegistry,
    depth: usize,
}

/// Parse `input` against `registry`.
pub fn parse(input: &str, registry: &NameRegistry) -> TypeResult<TypeExpr> {
    TypeParser::new(input, registry).parse()
}

impl<'a> TypeParser<'a> {
    pub fn new(input: &'a str, registry: &'a NameRegistry) -> Self {
        Self {
            tokens: Tokenizer::new(input),
            registry,
            depth: 0,
        }
    }

    pub fn parse(mut self) -> TypeResult<TypeExpr> {
        self.tokens.advance()?;
        let node = self.parse_type_arg()?;
        self.expect_end()?;
        self.resolve(node)
    }

    fn expect_end(&mut self) -> TypeResult<()> {
        match self.tokens.kind() {
            TokenKind::Eof => return Ok(()),
            TokenKind::Question => {
                return Err(self.syntax(|input| SyntaxError::UnexpectedToken {
                    token: TokenKind::Question,
                    input,
                }));
            }
            _ => {}
        }
        // Bracket errors further along take precedence
        while self.tokens.advance()? != TokenKind::Eof {}
        Err(self.syntax(|input| SyntaxError::IncorrectFormat { input }))
    }

    fn parse_type_arg(&mut self) -> TypeResult<Node<'a>> {
        match self.tokens.kind() {
            TokenKind::Question => {
                self.tokens.advance()?;
                self.parse_wildcard()
            }
            kind if kind.is_name() => self.parse_type(),
            _ => Err(self.syntax(|input| SyntaxError::ExpectingTypeName { input })),
        }
    }

    fn parse_type(&mut self) -> TypeResult<Node<'a>> {
        let name = self.tokens.text();
        let mut node = match self.tokens.advance()? {
            TokenKind::Eof | TokenKind::Comma | TokenKind::Gt | TokenKind::LBracket => {
                Node::Class(name)
            }
            TokenKind::Lt => {
                self.tokens.advance()?;
                self.enter()?;
                let args = self.parse_args()?;
                self.depth -= 1;
                Node::Generic(name, args)
            }
            token => {
                return Err(self.syntax(|input| SyntaxError::UnexpectedToken { token, input }));
            }
        };

        let mut dimensions = 0;
        while self.tokens.kind() == TokenKind::LBracket {
            if self.tokens.advance()? != TokenKind::RBracket {
                return Err(self.syntax(|input| SyntaxError::UnclosedArraySuffix { input }));
            }
            dimensions += 1;
            if self.depth + dimensions > MAX_NESTING {
                return Err(self.too_deep());
            }
            self.tokens.advance()?;
            node = Node::Array(Box::new(node));
        }

        if self.tokens.kind() == TokenKind::Question {
            return Err(self.syntax(|input| SyntaxError::UnexpectedToken {
                token: TokenKind::Question,
                input,
            }));
        }
        Ok(node)
    }

    fn parse_args(&mut self) -> TypeResult<Vec<Node<'a>>> {
        let mut args = Vec::new();
        loop {
            args.push(self.parse_type_arg()?);
            match self.tokens.kind() {
                TokenKind::Comma => {
                    self.tokens.advance()?;
                }
                TokenKind::Gt => {
                    self.tokens.advance()?;
                    return Ok(args);
                }
                token => {
                    return Err(self.syntax(|input| SyntaxError::UnexpectedToken { token, input }));
                }
            }
        }
    }

    /// Called with the token after `?` as current.
    fn parse_wildcard(&mut self) -> TypeResult<Node<'a>> {
        let keyword = self.tokens.kind();
        if !keyword.is_name() {
            return Ok(Node::Unbounded);
        }
        if keyword == TokenKind::Ident {
            let found = self.tokens.text().to_string();
            return Err(self.syntax(|input| SyntaxError::ExpectedWildcardKeyword { found, input }));
        }
        if !self.tokens.advance()?.is_name() {
            return Err(self.syntax(|input| SyntaxError::WrongWildcardFormat { input }));
        }

        self.enter()?;
        let bound = Box::new(self.parse_type()?);
        self.depth -= 1;
        Ok(if keyword == TokenKind::Extends {
            Node::Extends(bound)
        } else {
            Node::Super(bound)
        })
    }

    fn enter(&mut self) -> TypeResult<()> {
        self.depth += 1;
        if self.depth > MAX_NESTING {
            return Err(self.too_deep());
        }
        Ok(())
    }

    /// Second pass: raw types before their arguments, left to right.
    fn resolve(&self, node: Node<'a>) -> TypeResult<TypeExpr> {
        Ok(match node {
            Node::Class(name) => TypeExpr::Class(self.registry.resolve(name)?),
            Node::Array(component) => TypeExpr::array_of(self.resolve(*component)?),
            Node::Generic(raw, args) => {
                let raw = self.registry.resolve(raw)?;
                let args = args
                    .into_iter()
                    .map(|arg| self.resolve(arg))
                    .collect::<TypeResult<Vec<_>>>()?;
                // parse_args never returns an empty list
                let parameterized = ParameterizedType::new(raw, args)
                    .map_err(|_| self.syntax(|input| SyntaxError::ExpectingTypeName { input }))?;
                TypeExpr::Parameterized(parameterized)
            }
            Node::Unbounded => TypeExpr::Wildcard(WildcardType::unbounded()),
            Node::Extends(bound) => TypeExpr::Wildcard(WildcardType::extends(self.resolve(*bound)?)),
            Node::Super(bound) => TypeExpr::Wildcard(WildcardType::super_of(self.resolve(*bound)?)),
        })
    }

    fn too_deep(&self) -> TypeError {
        self.syntax(|input| SyntaxError::TooDeep {
            limit: MAX_NESTING,
            input,
        })
    }

    fn syntax(&self, make: impl FnOnce(String) -> SyntaxError) -> TypeError {
        TypeError::Syntax(make(self.tokens.input().to_string()))
    }
}
