//! Tabular models for extracted payload data

mod cell;
mod liveboard;
mod table;
mod transpose;

pub use cell::*;
pub use liveboard::*;
pub use table::*;
pub use transpose::*;
