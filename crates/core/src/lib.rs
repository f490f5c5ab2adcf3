pub mod codec;
pub mod descriptor;
pub mod error;
pub mod generator;
pub mod lexer;
pub mod logging;
pub mod parser;
pub mod registry;
pub mod serde_text;

pub use codec::{CodecConfig, TypeCodec};
pub use descriptor::{DescriptorConverter, MethodSignature};
pub use error::{DescriptorError, RegistryError, SyntaxError, TypeError, TypeResult};
pub use generator::{TypeGenerator, generate, generate_reflect};
pub use parser::{MAX_NESTING, TypeParser, parse};
pub use registry::{ClassEntry, NameRegistry, NameRegistryBuilder, RegistryConfig};
pub use serde_text::{Canonical, TypeExprSeed};
