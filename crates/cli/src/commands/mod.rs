pub mod check;
pub mod descriptor;
pub mod generate;
pub mod parse;
pub mod schema;
