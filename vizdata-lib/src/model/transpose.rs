//! Column/row transposition for tabular data

/// Transposes a list of columns into a list of rows.
///
/// The row count is taken from the first column. Columns shorter than the
/// first are padded with `T::default()` so the output stays rectangular, and
/// entries beyond the first column's length are dropped. Given no columns at
/// all, returns no rows.
///
/// Applying the function twice returns the original data.
///
/// # Example
///
/// ```
/// use vizdata_lib::model::transpose;
///
/// let columns = [&[1, 2, 3][..], &[4, 5, 6][..]];
/// let rows = transpose(&columns);
/// assert_eq!(rows, vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
/// ```
pub fn transpose<T: Clone + Default>(columns: &[&[T]]) -> Vec<Vec<T>> {
    let Some(first) = columns.first() else {
        return Vec::new();
    };
    (0..first.len())
        .map(|row| {
            columns
                .iter()
                .map(|column| column.get(row).cloned().unwrap_or_default())
                .collect()
        })
        .collect()
}
