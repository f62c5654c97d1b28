//! Integration tests for the embed event adapters.
//!
//! The fixtures model the payloads an embedding surface delivers to custom
//! action and click handlers: an envelope of event bookkeeping around the
//! answer data itself. Extraction only cares about the data subtree and must
//! tolerate the rest.
//!
//! Run with `RUST_LOG=vizdata_lib=warn` to see the extraction diagnostics.

use serde_json::Value;
use serde_json::json;
use vizdata_lib::error::ExtractError;
use vizdata_lib::export::{CSV_DATA_URI_PREFIX, to_csv, to_html};
use vizdata_lib::model::{CellValue, TabularData};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// A custom-action payload the way the surface sends it: event bookkeeping
/// around `data.embedAnswerData`, with the data entry wrapped in a
/// singleton list.
fn answer_action_payload() -> Value {
    json!({
        "type": "customAction",
        "id": "show-data",
        "timestamp": 1_700_000_000_000_u64,
        "data": {
            "session": {"sessionId": "4f6a…", "genNo": 3},
            "embedAnswerData": {
                "name": "Sales by region",
                "id": "answer-1",
                "columns": [
                    {"column": {"id": "col-region", "name": "Region", "type": "ATTRIBUTE"}},
                    {"column": {"id": "col-category", "name": "Category", "type": "ATTRIBUTE"}},
                    {"column": {"id": "col-total", "name": "Total", "type": "MEASURE"}},
                ],
                "data": [{
                    "columnDataLite": [
                        {"columnId": "col-region", "dataValue": ["West", "East", "South"]},
                        {"columnId": "col-category", "dataValue": ["Bags", "Mugs", "Pens"]},
                        {"columnId": "col-total", "dataValue": [472, 315, 128]},
                    ]
                }],
            }
        }
    })
}

fn clicked_point_payload(nested_in_context_menu: bool) -> Value {
    let point = json!({
        "clickedPoint": {
            "selectedAttributes": [
                {"column": {"name": "Region", "dataType": "VARCHAR"}, "value": "West"},
            ],
            "deselectedAttributes": [],
            "selectedMeasures": [
                {"column": {"name": "Total", "dataType": "INT64"}, "value": 472},
            ],
            "deselectedMeasures": [],
        }
    });
    if nested_in_context_menu {
        json!({"type": "contextMenu", "data": {"contextMenuPoints": point}})
    } else {
        json!({"type": "vizPointClick", "data": point})
    }
}

// =============================================================================
// Answer custom actions
// =============================================================================

mod answer_actions {
    use super::*;

    #[test]
    fn test_full_action_round_trip() {
        init_tracing();

        let extraction = TabularData::from_answer_action(&answer_action_payload());
        assert!(extraction.is_complete(), "fixture payload should extract in full");

        let table = extraction.into_inner();
        assert_eq!(table.column_names(), &["Region", "Category", "Total"]);
        assert_eq!(table.row_count(), 3);

        let csv = to_csv(&table);
        assert!(csv.starts_with(CSV_DATA_URI_PREFIX), "CSV should be a download link target");
        assert!(csv.contains("\"Region\",\"Category\",\"Total\"\n"));
        assert!(csv.contains("\"East\",\"Mugs\",\"315\"\n"));

        let html = to_html(&table);
        assert!(html.starts_with("<table class=\"tabular-data\">"));
        assert!(html.contains("<th class=\"tabular-data-th\">Total</th>"));
        assert!(html.contains("<td class=\"tabular-data\">128</td>"));
    }

    #[test]
    fn test_subset_row_order() {
        let table = TabularData::from_answer_action(&answer_action_payload()).into_inner();

        let rows = table.rows_for(&["Total", "Region"]);
        assert_eq!(rows[0], vec![CellValue::from(472_i64), CellValue::from("West")]);
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_truncated_payload_diagnostics() {
        init_tracing();

        // The envelope survived but the answer data was cut off.
        let payload = json!({"type": "customAction", "data": {"session": {}}});
        let extraction = TabularData::from_answer_action(&payload);

        assert!(extraction.is_partial());
        let error = extraction.error().expect("partial extraction carries its error");
        assert_eq!(error.path(), "$.data");
        assert!(matches!(error, ExtractError::Missing { field, .. } if field == "embedAnswerData"));

        let table = extraction.into_inner();
        assert!(table.is_empty());
        assert_eq!(
            table.original(),
            Some(&payload),
            "the offending payload should be retained for inspection"
        );
    }
}

// =============================================================================
// Visualization custom actions
// =============================================================================

mod viz_actions {
    use super::*;

    #[test]
    fn test_same_shape_as_answer_actions() {
        let extraction = TabularData::from_viz_action(&answer_action_payload());

        assert!(extraction.is_complete());
        assert_eq!(extraction.data().column_names(), &["Region", "Category", "Total"]);
    }

    #[test]
    fn test_unmatched_entries_keep_id() {
        init_tracing();

        let mut payload = answer_action_payload();
        payload["data"]["embedAnswerData"]["data"][0]["columnDataLite"]
            .as_array_mut()
            .expect("fixture data entries")
            .push(json!({"columnId": "col-orphan", "dataValue": [1, 2, 3]}));

        let table = TabularData::from_viz_action(&payload).into_inner();
        assert_eq!(
            table.column_names(),
            &["Region", "Category", "Total", "col-orphan"]
        );
        assert_eq!(table.cell(2, "col-orphan"), Some(&CellValue::from(3_i64)));
    }
}

// =============================================================================
// Clicked points
// =============================================================================

mod clicked_points {
    use super::*;

    #[test]
    fn test_plain_click_single_row() {
        let extraction = TabularData::from_clicked_point(&clicked_point_payload(false));

        assert!(extraction.is_complete());
        let table = extraction.into_inner();
        assert_eq!(table.column_names(), &["Region", "Total"]);
        assert_eq!(
            table.rows(),
            vec![vec![CellValue::from("West"), CellValue::from(472_i64)]]
        );
    }

    #[test]
    fn test_context_menu_click() {
        let table =
            TabularData::from_liveboard_clicked_point(&clicked_point_payload(true)).into_inner();

        assert_eq!(table.column_names(), &["Region", "Total"]);
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_clicked_point_csv_body() {
        let table = TabularData::from_clicked_point(&clicked_point_payload(false)).into_inner();

        let csv = to_csv(&table);
        let body = csv.strip_prefix(CSV_DATA_URI_PREFIX).expect("prefixed CSV");
        assert_eq!(body, "\"Region\",\"Total\"\n\"West\",\"472\"\n");
    }
}
