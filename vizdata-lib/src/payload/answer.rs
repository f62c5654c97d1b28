//! Adapter for batched answer payloads

use serde_json::Value;
use tracing::error;

use crate::Extraction;
use crate::error::ExtractError;
use crate::model::CellValue;
use crate::model::TabularData;

use super::node::Node;
use super::node::OneOrMany;
use super::node::json_type;

impl TabularData {
    /// Builds a table from a batched answer payload.
    ///
    /// The payload lists visualizations under `getAnswer.answer`; the first
    /// one carrying a `data` key wins and the rest are ignored. Column names
    /// come from that visualization's metadata in metadata order, and values
    /// line up with the names by position. Unlike the action payloads, each
    /// column's values arrive as one JSON-encoded string and are decoded
    /// before storage.
    ///
    /// A payload in which no visualization carries data yields an empty,
    /// complete table.
    pub fn from_answer_batch(payload: &Value) -> Extraction<TabularData> {
        let mut table = TabularData::with_original(payload.clone());
        match extract_answer_batch(payload, &mut table) {
            Ok(()) => Extraction::complete(table),
            Err(error) => {
                error!(%error, payload = %payload, "batched answer extraction stopped");
                Extraction::partial(table, error)
            }
        }
    }
}

fn extract_answer_batch(payload: &Value, table: &mut TabularData) -> Result<(), ExtractError> {
    let visualizations = Node::root(payload)
        .field("getAnswer")?
        .field("answer")?
        .field("visualizations")?;

    let Some(viz) = visualizations
        .elements()?
        .find(|viz| viz.value().get("data").is_some())
    else {
        return Ok(());
    };

    let mut names = Vec::new();
    for column in viz.field("columns")?.elements()? {
        names.push(column.field("column")?.field("name")?.string()?.to_string());
    }
    table.set_column_names(names);

    let data_node = viz.field("data")?;
    let data_path = data_node.path().to_string();
    let data = OneOrMany::classify(data_node)
        .into_first()
        .ok_or_else(|| ExtractError::missing(data_path, "[0]"))?;

    let mut columns = Vec::new();
    for entry in data.field("columnDataLite")?.elements()? {
        columns.push(decode_column(&entry.field("dataValue")?)?);
    }
    table.populate_by_column(columns);
    Ok(())
}

/// Decodes one column's JSON-encoded value string into cells.
fn decode_column(encoded: &Node<'_>) -> Result<Vec<CellValue>, ExtractError> {
    let decoded: Value = serde_json::from_str(encoded.string()?)
        .map_err(|err| ExtractError::bad_data_value(encoded.path(), err.to_string()))?;
    match decoded {
        Value::Array(values) => Ok(values.into_iter().map(CellValue::from).collect()),
        other => Err(ExtractError::unexpected(
            encoded.path(),
            "array",
            json_type(&other),
        )),
    }
}
