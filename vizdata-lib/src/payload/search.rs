//! Adapter for search result payloads

use serde_json::Value;
use tracing::error;

use crate::error::ExtractError;
use crate::model::TabularData;

use super::node::Node;
use super::node::cell_rows;
use super::node::string_items;

impl TabularData {
    /// Builds a table from the first result set of a search payload.
    ///
    /// The result set carries its column names and row-major data directly.
    /// Unlike the action adapters this one rejects malformed payloads
    /// outright: a search caller asked for exactly this data, so there is no
    /// partial table worth handing back. A well-formed payload with no rows
    /// is still a valid, empty table.
    pub fn from_search_response(payload: &Value) -> Result<TabularData, ExtractError> {
        let mut table = TabularData::with_original(payload.clone());
        match extract_search(payload, &mut table) {
            Ok(()) => Ok(table),
            Err(error) => {
                error!(%error, payload = %payload, "search response extraction failed");
                Err(error)
            }
        }
    }
}

fn extract_search(payload: &Value, table: &mut TabularData) -> Result<(), ExtractError> {
    let first = Node::root(payload).field("contents")?.index(0)?;
    table.set_column_names(string_items(&first.field("column_names")?)?);
    table.populate_by_row(cell_rows(&first.field("data_rows")?)?);
    Ok(())
}
