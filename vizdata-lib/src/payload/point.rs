//! Adapters for clicked-point payloads

use serde_json::Value;
use tracing::error;

use crate::Extraction;
use crate::error::ExtractError;
use crate::model::CellValue;
use crate::model::TabularData;

use super::node::Node;

/// Sections of a clicked point, in the order their columns appear in the
/// extracted table.
const POINT_SECTIONS: [&str; 4] = [
    "selectedAttributes",
    "deselectedAttributes",
    "selectedMeasures",
    "deselectedMeasures",
];

impl TabularData {
    /// Builds a single-row table from the point clicked in an answer.
    ///
    /// The clicked point carries selected and deselected attributes and
    /// measures; every entry across the four sections becomes one column
    /// holding that entry's value. Context-menu payloads nest the point one
    /// level deeper than plain clicks and both nestings are accepted.
    pub fn from_clicked_point(payload: &Value) -> Extraction<TabularData> {
        let mut table = TabularData::with_original(payload.clone());
        match extract_clicked_point(payload, &mut table) {
            Ok(()) => Extraction::complete(table),
            Err(error) => {
                error!(%error, payload = %payload, "clicked point payload extraction stopped");
                Extraction::partial(table, error)
            }
        }
    }

    /// Builds a single-row table from the point clicked in a liveboard
    /// visualization.
    ///
    /// Liveboard click payloads carry the same point shape as answer clicks;
    /// see [`TabularData::from_clicked_point`].
    pub fn from_liveboard_clicked_point(payload: &Value) -> Extraction<TabularData> {
        let mut table = TabularData::with_original(payload.clone());
        match extract_clicked_point(payload, &mut table) {
            Ok(()) => Extraction::complete(table),
            Err(error) => {
                error!(%error, payload = %payload, "liveboard clicked point payload extraction stopped");
                Extraction::partial(table, error)
            }
        }
    }
}

fn extract_clicked_point(payload: &Value, table: &mut TabularData) -> Result<(), ExtractError> {
    let data = Node::root(payload).field("data")?;
    let point_root = match data.field("contextMenuPoints") {
        Ok(node) if !node.value().is_null() => node,
        _ => data,
    };
    let point = point_root.field("clickedPoint")?;

    let mut names = Vec::new();
    let mut columns = Vec::new();
    for section in POINT_SECTIONS {
        for entry in point.field(section)?.elements()? {
            names.push(entry.field("column")?.field("name")?.string()?.to_string());
            columns.push(vec![CellValue::from(entry.field("value")?.value())]);
        }
    }

    table.set_column_names(names);
    table.populate_by_column(columns);
    Ok(())
}
