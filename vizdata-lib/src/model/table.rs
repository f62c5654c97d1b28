//! Column-oriented container for normalized payload data

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use super::CellValue;
use super::transpose;

/// Column-oriented table extracted from an embed payload.
///
/// Data is stored per column, keyed by column name, together with the ordered
/// list of column names and the row count. The payload the table was built
/// from is retained verbatim so callers can inspect it when a table looks
/// wrong.
///
/// Population is deliberately forgiving: rows or columns that do not line up
/// with the declared column names are logged and padded or truncated rather
/// than rejected, so one malformed region of a payload does not take down the
/// whole table.
///
/// # Example
///
/// ```
/// use vizdata_lib::model::CellValue;
/// use vizdata_lib::model::TabularData;
///
/// let mut table = TabularData::new();
/// table.set_column_names(["Region", "Sales"]);
/// table.populate_by_column(vec![
///     vec![CellValue::from("West"), CellValue::from("East")],
///     vec![CellValue::from(472_i64), CellValue::from(315_i64)],
/// ]);
///
/// assert_eq!(table.row_count(), 2);
/// assert_eq!(table.rows()[0], vec![CellValue::from("West"), CellValue::from(472_i64)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TabularData {
    column_names: Vec<String>,
    data: HashMap<String, Vec<CellValue>>,
    row_count: usize,
    #[serde(skip)]
    original: Option<Value>,
}

impl TabularData {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table that retains the payload it was built from.
    pub fn with_original(original: Value) -> Self {
        Self {
            original: Some(original),
            ..Self::default()
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The ordered column names.
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.column_names.len()
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Returns `true` if the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// The payload this table was extracted from, if one was retained.
    pub fn original(&self) -> Option<&Value> {
        self.original.as_ref()
    }

    /// The values of one column, top to bottom.
    pub fn column(&self, name: &str) -> Option<&[CellValue]> {
        self.data.get(name).map(Vec::as_slice)
    }

    /// The value at `row` in the column called `name`.
    pub fn cell(&self, row: usize, name: &str) -> Option<&CellValue> {
        self.data.get(name)?.get(row)
    }

    // =========================================================================
    // Population
    // =========================================================================

    /// Declares the column names, replacing any previous set.
    ///
    /// Call this before populating; population slots values into columns by
    /// position against this list.
    pub fn set_column_names<I>(&mut self, names: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.column_names = names.into_iter().map(Into::into).collect();
    }

    /// Populates the table from row-major data.
    ///
    /// Each row is split across the declared columns by position. Rows wider
    /// than the column list are truncated and narrower rows are padded with
    /// [`CellValue::Null`], with a warning either way.
    pub fn populate_by_row(&mut self, rows: Vec<Vec<CellValue>>) {
        self.row_count = rows.len();
        if let Some(width) = rows.iter().map(Vec::len).find(|len| *len != self.column_names.len()) {
            warn!(
                columns = self.column_names.len(),
                row_width = width,
                "row width does not match the declared columns"
            );
        }
        for (index, name) in self.column_names.iter().enumerate() {
            let column = rows
                .iter()
                .map(|row| row.get(index).cloned().unwrap_or_default())
                .collect();
            self.data.insert(name.clone(), column);
        }
    }

    /// Populates the table from column-major data, one value list per
    /// declared column.
    ///
    /// The row count is taken from the first supplied column. Surplus columns
    /// are dropped and missing ones are left empty, with a warning either way.
    pub fn populate_by_column(&mut self, columns: Vec<Vec<CellValue>>) {
        self.row_count = columns.first().map_or(0, Vec::len);
        if columns.len() != self.column_names.len() {
            warn!(
                columns = self.column_names.len(),
                supplied = columns.len(),
                "column count does not match the declared columns"
            );
        }
        let mut supplied = columns.into_iter();
        for name in &self.column_names {
            self.data.insert(name.clone(), supplied.next().unwrap_or_default());
        }
    }

    // =========================================================================
    // Row extraction
    // =========================================================================

    /// All rows in declared column order.
    pub fn rows(&self) -> Vec<Vec<CellValue>> {
        let names: Vec<&str> = self.column_names.iter().map(String::as_str).collect();
        self.rows_for(&names)
    }

    /// Rows restricted to the requested columns, in the requested order.
    ///
    /// Names with no backing column contribute [`CellValue::Null`] in their
    /// position; the other columns still carry their data.
    pub fn rows_for(&self, names: &[&str]) -> Vec<Vec<CellValue>> {
        let filler = if names.iter().any(|name| !self.data.contains_key(*name)) {
            vec![CellValue::Null; self.row_count]
        } else {
            Vec::new()
        };
        let columns: Vec<&[CellValue]> = names
            .iter()
            .map(|name| self.data.get(*name).map_or(filler.as_slice(), Vec::as_slice))
            .collect();
        transpose(&columns)
    }
}
