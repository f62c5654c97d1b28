//! Adapters for answer and visualization action payloads

use std::collections::HashMap;

use serde_json::Value;
use tracing::error;
use tracing::warn;

use crate::Extraction;
use crate::error::ExtractError;
use crate::model::TabularData;

use super::node::Node;
use super::node::OneOrMany;
use super::node::cell_items;

/// How to treat a value entry whose column id has no metadata entry.
enum UnmatchedId {
    Skip,
    UseIdAsName,
}

impl TabularData {
    /// Builds a table from the payload of an answer custom action.
    ///
    /// The payload carries column metadata and column values as two parallel
    /// lists under `data.embedAnswerData`; values reference their metadata by
    /// column id, so the lists are aligned by id rather than by position. The
    /// data node arrives either as a single entry or as a singleton list and
    /// both encodings are accepted. Value entries with an id that matches no
    /// metadata are skipped with a warning.
    ///
    /// Column order in the table follows the order of the value entries.
    pub fn from_answer_action(payload: &Value) -> Extraction<TabularData> {
        let mut table = TabularData::with_original(payload.clone());
        match extract_action(payload, &mut table, UnmatchedId::Skip) {
            Ok(()) => Extraction::complete(table),
            Err(error) => {
                error!(%error, payload = %payload, "answer action payload extraction stopped");
                Extraction::partial(table, error)
            }
        }
    }

    /// Builds a table from the payload of a visualization custom action.
    ///
    /// Same shape and alignment as [`TabularData::from_answer_action`], except
    /// that a value entry with no matching metadata keeps its column under the
    /// raw id instead of being skipped.
    pub fn from_viz_action(payload: &Value) -> Extraction<TabularData> {
        let mut table = TabularData::with_original(payload.clone());
        match extract_action(payload, &mut table, UnmatchedId::UseIdAsName) {
            Ok(()) => Extraction::complete(table),
            Err(error) => {
                error!(%error, payload = %payload, "visualization action payload extraction stopped");
                Extraction::partial(table, error)
            }
        }
    }
}

fn extract_action(
    payload: &Value,
    table: &mut TabularData,
    unmatched: UnmatchedId,
) -> Result<(), ExtractError> {
    let answer = Node::root(payload).field("data")?.field("embedAnswerData")?;

    let mut names_by_id = HashMap::new();
    for column in answer.field("columns")?.elements()? {
        let column = column.field("column")?;
        names_by_id.insert(column.field("id")?.string()?, column.field("name")?.string()?);
    }

    let data_node = answer.field("data")?;
    let data_path = data_node.path().to_string();
    let data = OneOrMany::classify(data_node)
        .into_first()
        .ok_or_else(|| ExtractError::missing(data_path, "[0]"))?;

    let mut names = Vec::new();
    let mut columns = Vec::new();
    for entry in data.field("columnDataLite")?.elements()? {
        let id = entry.field("columnId")?.string()?;
        let name = match names_by_id.get(id) {
            Some(name) => (*name).to_string(),
            None => match unmatched {
                UnmatchedId::Skip => {
                    warn!(column_id = id, "no column metadata for value entry, skipping");
                    continue;
                }
                UnmatchedId::UseIdAsName => {
                    warn!(column_id = id, "no column metadata for value entry, keeping the id");
                    id.to_string()
                }
            },
        };
        names.push(name);
        columns.push(cell_items(&entry.field("dataValue")?)?);
    }

    table.set_column_names(names);
    table.populate_by_column(columns);
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::model::CellValue;

    use super::*;

    fn action_payload(data: Value) -> Value {
        json!({
            "data": {
                "embedAnswerData": {
                    "columns": [
                        {"column": {"id": "col-region", "name": "Region"}},
                        {"column": {"id": "col-total", "name": "Total"}},
                    ],
                    "data": data,
                }
            }
        })
    }

    fn value_entries() -> Value {
        json!({
            "columnDataLite": [
                {"columnId": "col-region", "dataValue": ["West", "East"]},
                {"columnId": "col-total", "dataValue": [472, 315]},
            ]
        })
    }

    #[test]
    fn test_align_values_by_id() {
        let payload = action_payload(json!([value_entries()]));
        let extraction = TabularData::from_answer_action(&payload);

        assert!(extraction.is_complete());
        let table = extraction.into_inner();
        assert_eq!(table.column_names(), &["Region", "Total"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(1, "Total"), Some(&CellValue::from(315_i64)));
    }

    #[test]
    fn test_data_as_object_or_list() {
        let as_list = TabularData::from_answer_action(&action_payload(json!([value_entries()])));
        let as_object = TabularData::from_answer_action(&action_payload(value_entries()));

        assert!(as_list.is_complete());
        assert!(as_object.is_complete());
        assert_eq!(as_list.data().rows(), as_object.data().rows());
        assert_eq!(as_list.data().column_names(), as_object.data().column_names());
    }

    #[test]
    fn test_column_order_from_entries() {
        let payload = action_payload(json!({
            "columnDataLite": [
                {"columnId": "col-total", "dataValue": [472, 315]},
                {"columnId": "col-region", "dataValue": ["West", "East"]},
            ]
        }));
        let table = TabularData::from_answer_action(&payload).into_inner();

        assert_eq!(table.column_names(), &["Total", "Region"]);
        assert_eq!(table.cell(0, "Total"), Some(&CellValue::from(472_i64)));
        assert_eq!(table.cell(1, "Total"), Some(&CellValue::from(315_i64)));
        assert_eq!(table.cell(0, "Region"), Some(&CellValue::from("West")));
        assert_eq!(
            table.rows()[1],
            vec![CellValue::from(315_i64), CellValue::from("East")]
        );
    }

    #[test]
    fn test_answer_action_skips_unknown_ids() {
        let payload = action_payload(json!({
            "columnDataLite": [
                {"columnId": "col-region", "dataValue": ["West"]},
                {"columnId": "col-ghost", "dataValue": [1]},
            ]
        }));
        let extraction = TabularData::from_answer_action(&payload);

        assert!(extraction.is_complete());
        assert_eq!(extraction.data().column_names(), &["Region"]);
    }

    #[test]
    fn test_viz_action_keeps_unknown_ids() {
        let payload = action_payload(json!({
            "columnDataLite": [
                {"columnId": "col-region", "dataValue": ["West"]},
                {"columnId": "col-ghost", "dataValue": [1]},
            ]
        }));
        let extraction = TabularData::from_viz_action(&payload);

        assert!(extraction.is_complete());
        assert_eq!(extraction.data().column_names(), &["Region", "col-ghost"]);
        assert_eq!(extraction.data().cell(0, "col-ghost"), Some(&CellValue::from(1_i64)));
    }

    #[test]
    fn test_missing_answer_data_partial() {
        let payload = json!({"data": {"otherKey": 1}});
        let extraction = TabularData::from_answer_action(&payload);

        assert!(extraction.is_partial());
        assert_eq!(extraction.error().map(ExtractError::path), Some("$.data"));
        assert!(extraction.data().is_empty());
        assert_eq!(extraction.data().original(), Some(&payload));
    }

    #[test]
    fn test_empty_data_list_partial() {
        let payload = action_payload(json!([]));
        let extraction = TabularData::from_answer_action(&payload);

        assert!(extraction.is_partial());
        assert_eq!(
            extraction.error().map(ExtractError::path),
            Some("$.data.embedAnswerData.data")
        );
    }

    #[test]
    fn test_non_list_data_value() {
        let payload = action_payload(json!({
            "columnDataLite": [
                {"columnId": "col-region", "dataValue": "West"},
            ]
        }));
        let extraction = TabularData::from_viz_action(&payload);

        assert!(extraction.is_partial());
        let error = extraction.error().unwrap();
        assert!(error.path().ends_with("columnDataLite[0].dataValue"));
        assert!(matches!(error, ExtractError::Unexpected { expected: "array", .. }));
    }
}
