// src/config/mod.rs

pub mod mathkit_config;

// Re-export main types for convenience
pub use mathkit_config::{MathkitConfig, SearchConfig};
