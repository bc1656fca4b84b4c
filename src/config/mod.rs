mod r#impl;
pub mod args;
mod structs;
pub mod validators;

pub use args::Args;
pub use r#impl::{get_config, init_config};
pub use structs::*;
