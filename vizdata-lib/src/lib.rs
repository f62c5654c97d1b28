//! Embedded analytics payload normalization library
//!
//! Turns the event and REST payload shapes produced by an embedded analytics
//! surface into one column-oriented tabular model, ready to render as an HTML
//! table or a CSV download.

pub mod catalog;
pub mod error;
pub mod export;
pub mod extraction;
pub mod model;

mod payload;

pub use extraction::Extraction;
pub use extraction::ExtractionStatus;
