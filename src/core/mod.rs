pub mod config;
pub mod prompt;
pub mod utils;
pub mod validate;
