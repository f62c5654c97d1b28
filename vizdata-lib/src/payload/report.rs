//! Adapter for full liveboard report payloads

use serde_json::Value;
use tracing::error;

use crate::Extraction;
use crate::error::ExtractError;
use crate::model::LiveboardData;
use crate::model::TabularData;

use super::node::Node;
use super::node::cell_rows;
use super::node::string_items;

impl LiveboardData {
    /// Builds one table per visualization from a liveboard report payload.
    ///
    /// The payload lists its visualizations under `contents`, each carrying a
    /// visualization id, its column names and row-major data. Visualizations
    /// are added as they are read, so when one of them is malformed the
    /// collection still holds every table extracted before it.
    pub fn from_response(payload: &Value) -> Extraction<LiveboardData> {
        let mut board = LiveboardData::new();
        match extract_report(payload, &mut board) {
            Ok(()) => Extraction::complete(board),
            Err(error) => {
                error!(%error, payload = %payload, "liveboard report extraction stopped");
                Extraction::partial(board, error)
            }
        }
    }
}

fn extract_report(payload: &Value, board: &mut LiveboardData) -> Result<(), ExtractError> {
    for viz in Node::root(payload).field("contents")?.elements()? {
        let viz_id = viz.field("visualization_id")?.string()?.to_string();
        let mut table = TabularData::with_original(viz.value().clone());
        table.set_column_names(string_items(&viz.field("column_names")?)?);
        table.populate_by_row(cell_rows(&viz.field("data_rows")?)?);
        board.insert(viz_id, table);
    }
    Ok(())
}
