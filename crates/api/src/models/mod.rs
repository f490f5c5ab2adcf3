pub mod class;
pub mod type_expr;

pub use class::*;
pub use type_expr::*;
