//! HTML rendering for extracted tables

use crate::model::TabularData;

/// Renders the table as an HTML `<table>` fragment for host pages to embed.
///
/// The table and its value cells carry the `tabular-data` class and header
/// cells carry `tabular-data-th`, so host stylesheets can target them. Cell
/// text is inserted as-is, without HTML escaping; the fragment is meant for
/// data values, not for untrusted markup.
pub fn to_html(table: &TabularData) -> String {
    let mut html = String::from("<table class=\"tabular-data\">");
    html.push_str("<tr>");
    for name in table.column_names() {
        html.push_str(&format!("<th class=\"tabular-data-th\">{name}</th>"));
    }
    html.push_str("</tr>");
    for row in table.rows() {
        html.push_str("<tr>");
        for cell in &row {
            html.push_str(&format!("<td class=\"tabular-data\">{cell}</td>"));
        }
        html.push_str("</tr>");
    }
    html.push_str("</table>");
    html
}
