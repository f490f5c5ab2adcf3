use crate::lexer::TokenKind;
use thiserror::Error;

/// Grammar violation. Every variant echoes the complete input so that a
/// broken expression can be located inside a large fixture file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("Unexpected character '{found}' in '{input}'")]
    UnexpectedCharacter {
        found: char,
        offset: usize,
        input: String,
    },
    #[error("Expecting type name in '{input}'")]
    ExpectingTypeName { input: String },
    #[error("Too much '>' in '{input}'")]
    TooManyClosingBrackets { input: String },
    #[error("Unexpected token {token} in '{input}'")]
    UnexpectedToken { token: TokenKind, input: String },
    #[error("Expected 'extends' or 'super' after '?' in '{input}', got '{found}'")]
    ExpectedWildcardKeyword { found: String, input: String },
    #[error("Wrong wildcard format in '{input}'")]
    WrongWildcardFormat { input: String },
    #[error("Expected ']' after '[' in '{input}'")]
    UnclosedArraySuffix { input: String },
    #[error("Incorrect format in '{input}'")]
    IncorrectFormat { input: String },
    #[error("Nesting deeper than {limit} levels in '{input}'")]
    TooDeep { limit: usize, input: String },
}

impl SyntaxError {
    /// The full text that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            SyntaxError::UnexpectedCharacter { input, .. }
            | SyntaxError::ExpectingTypeName { input }
            | SyntaxError::TooManyClosingBrackets { input }
            | SyntaxError::UnexpectedToken { input, .. }
            | SyntaxError::ExpectedWildcardKeyword { input, .. }
            | SyntaxError::WrongWildcardFormat { input }
            | SyntaxError::UnclosedArraySuffix { input }
            | SyntaxError::IncorrectFormat { input }
            | SyntaxError::TooDeep { input, .. } => input,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The text was grammatical but named a class the registry does not know.
    /// The message is exactly the attempted name.
    #[error("{0}")]
    ClassNotFound(String),
}

impl TypeError {
    pub fn is_syntax(&self) -> bool {
        matches!(self, TypeError::Syntax(_))
    }

    pub fn is_class_not_found(&self) -> bool {
        matches!(self, TypeError::ClassNotFound(_))
    }
}

pub type TypeResult<T> = std::result::Result<T, TypeError>;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Alias '{alias}' already registered for '{existing}'")]
    DuplicateAlias { alias: String, existing: String },
    #[error("Invalid class name '{0}'")]
    InvalidClassName(String),
    #[error("Invalid alias '{0}'")]
    InvalidAlias(String),
    #[error("Unknown class '{0}'")]
    UnknownClass(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("Malformed method descriptor '{descriptor}': {reason}")]
    Malformed { descriptor: String, reason: String },
    #[error("Malformed field descriptor '{descriptor}': {reason}")]
    MalformedField { descriptor: String, reason: String },
}
