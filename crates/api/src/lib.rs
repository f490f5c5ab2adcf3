pub mod error;
pub mod models;
pub mod reflect;

// Re-export commonly used types
pub use error::{ModelError, ModelResult};
pub use models::*;
pub use reflect::{
    ReflectArray, ReflectClass, ReflectParameterized, ReflectType, ReflectWildcard, TypeShape,
    structurally_equal,
};
