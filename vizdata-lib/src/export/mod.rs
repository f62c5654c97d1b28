//! Renderers for presenting extracted tables

mod csv;
mod html;

pub use csv::*;
pub use html::*;
