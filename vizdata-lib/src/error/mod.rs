//! Error types

mod extract;

pub use extract::*;
