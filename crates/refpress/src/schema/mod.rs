mod parser;
mod types;
mod validator;

pub use parser::{parse_module, parse_module_str};
pub use types::*;
pub use validator::validate_module;
