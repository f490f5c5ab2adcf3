#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("Parameterized type '{raw}' needs at least one type argument")]
    EmptyArguments { raw: String },
    #[error("Wildcard cannot have both upper bound '{upper}' and lower bound '{lower}'")]
    ConflictingBounds { upper: String, lower: String },
    #[error("Owner types are not supported: '{0}'")]
    OwnerTypeUnsupported(String),
    #[error("Raw type must be a class, got '{0}'")]
    RawTypeNotClass(String),
    #[error("Invalid class name '{0}'")]
    InvalidClassName(String),
}

pub type ModelResult<T> = std::result::Result<T, ModelError>;
