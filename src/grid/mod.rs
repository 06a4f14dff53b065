pub mod definition;
pub mod model;
pub mod parser;

pub use definition::*;
pub use model::*;
pub use parser::*;
