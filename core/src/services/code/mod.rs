//! Random verification code generation.

mod generator;
mod source;

pub use generator::{generate, generate_code, generate_with};
pub use source::LocalCodeSource;
