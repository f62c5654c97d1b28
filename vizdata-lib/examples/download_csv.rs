//! Turns a batched answer response into a CSV download link.
//!
//! Run with: cargo run --example download_csv
//!
//! The rendered string is ready to use as the `href` of a download link; the
//! prefix can be stripped to get a bare CSV document instead.

use serde_json::json;
use vizdata_lib::export::CSV_DATA_URI_PREFIX;
use vizdata_lib::export::to_csv;
use vizdata_lib::model::TabularData;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let payload = json!({
        "getAnswer": {
            "answer": {
                "visualizations": [{
                    "columns": [
                        {"column": {"name": "Region"}},
                        {"column": {"name": "Total"}},
                    ],
                    "data": [{
                        "columnDataLite": [
                            {"dataValue": "[\"West\",\"East\",\"South\"]"},
                            {"dataValue": "[472,315,128]"},
                        ]
                    }],
                }]
            }
        }
    });

    // Reject partial results outright; a download should never be truncated.
    let table = TabularData::from_answer_batch(&payload).into_result()?;

    let link = to_csv(&table);
    println!("link target:\n{link}");

    if let Some(document) = link.strip_prefix(CSV_DATA_URI_PREFIX) {
        println!("bare document:\n{document}");
    }

    Ok(())
}
