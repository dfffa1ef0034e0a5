//! Application service layer - config, input reading, length validation

pub mod config;
pub mod input;

pub use config::Config;
pub use input::{parse_length, read_token, LengthPolicy};
