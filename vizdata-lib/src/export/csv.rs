//! CSV rendering for extracted tables

use crate::model::TabularData;

/// Prefix that makes the rendered CSV usable directly as the target of a
/// download link.
pub const CSV_DATA_URI_PREFIX: &str = "data:text/csv;charset=utf-8,";

/// Renders the table as quoted CSV behind a `data:` URI prefix.
///
/// Every field, header or value, is double-quoted with embedded quotes
/// doubled, so commas and quotes in the data survive. Rows render in
/// declared column order, one `\n`-terminated line each; null cells render
/// as empty quoted fields. Strip [`CSV_DATA_URI_PREFIX`] to get a bare CSV
/// document.
pub fn to_csv(table: &TabularData) -> String {
    let mut csv = String::from(CSV_DATA_URI_PREFIX);
    let header: Vec<String> = table.column_names().iter().map(|name| quote(name)).collect();
    csv.push_str(&header.join(","));
    csv.push('\n');
    for row in table.rows() {
        let fields: Vec<String> = row.iter().map(|cell| quote(&cell.to_string())).collect();
        csv.push_str(&fields.join(","));
        csv.push('\n');
    }
    csv
}

/// Double-quotes one field, doubling any embedded quotes.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
