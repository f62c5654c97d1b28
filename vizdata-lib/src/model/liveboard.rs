//! Collection of per-visualization tables from one liveboard payload

use std::collections::HashMap;

use serde::Serialize;

use super::TabularData;

/// Tables for every visualization in a liveboard payload, keyed by
/// visualization id.
///
/// A liveboard response bundles several result sets in one payload; each
/// becomes an independent [`TabularData`] here, looked up by the id the
/// payload assigned to its visualization.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LiveboardData {
    tables: HashMap<String, TabularData>,
}

impl LiveboardData {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the table for a visualization.
    pub fn insert(&mut self, viz_id: impl Into<String>, table: TabularData) {
        self.tables.insert(viz_id.into(), table);
    }

    /// The table for one visualization, if the payload carried it.
    pub fn get(&self, viz_id: &str) -> Option<&TabularData> {
        self.tables.get(viz_id)
    }

    /// Ids of the visualizations present, in no particular order.
    pub fn viz_ids(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// All tables together with their visualization ids.
    pub fn tables(&self) -> impl Iterator<Item = (&str, &TabularData)> {
        self.tables.iter().map(|(id, table)| (id.as_str(), table))
    }

    /// Number of visualizations present.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns `true` if no visualization was extracted.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Consumes the collection, yielding the underlying map.
    pub fn into_tables(self) -> HashMap<String, TabularData> {
        self.tables
    }
}
