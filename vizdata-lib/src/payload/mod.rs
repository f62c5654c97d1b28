//! Payload-shape adapters for the tabular models
//!
//! Each submodule owns one payload shape and attaches its constructor to the
//! model type it produces. The adapters share the path-tracked [`node`]
//! cursor, so every failure reports the payload position it stopped at.

mod action;
mod answer;
pub(crate) mod node;
mod point;
mod report;
mod search;
