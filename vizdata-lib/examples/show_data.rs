//! Renders a custom-action payload as an HTML table.
//!
//! Run with: cargo run --example show_data
//!
//! This is the core of a "Show data" action handler: the embedding surface
//! hands the action callback a payload, the adapter turns it into a table,
//! and the markup goes into a modal on the host page.

use serde_json::json;
use vizdata_lib::export::to_html;
use vizdata_lib::model::TabularData;

fn main() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let payload = json!({
        "type": "customAction",
        "id": "show-data",
        "data": {
            "embedAnswerData": {
                "columns": [
                    {"column": {"id": "col-region", "name": "Region"}},
                    {"column": {"id": "col-total", "name": "Total"}},
                ],
                "data": [{
                    "columnDataLite": [
                        {"columnId": "col-region", "dataValue": ["West", "East", "South"]},
                        {"columnId": "col-total", "dataValue": [472, 315, 128]},
                    ]
                }],
            }
        }
    });

    let extraction = TabularData::from_answer_action(&payload);
    if let Some(error) = extraction.error() {
        eprintln!("extraction stopped at {}: {error}", error.path());
    }

    let table = extraction.into_inner();
    println!(
        "Extracted {} rows x {} columns",
        table.row_count(),
        table.column_count()
    );
    println!("{}", to_html(&table));
}
