pub mod config;
pub mod error;
pub mod eval;
pub mod syntax;

pub use config::{EvalConfig, OverflowMode};
pub use error::{Error, Result};
pub use eval::{evaluate, evaluate_with};
