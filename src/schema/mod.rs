//! Schema module - Configuration, input and result types for the exploit search.

mod config;
mod evolution;
mod pattern;
mod seed;
pub mod wire;

pub use config::*;
pub use evolution::*;
pub use pattern::*;
pub use seed::*;
