// src/lib.rs

pub mod config;
pub mod error;
pub mod integer_search;
pub mod root_finder;

pub use error::{IntegerSearchError, RootFindError};
