//! Path-tracked cursor over payload trees

use serde_json::Value;

use crate::error::ExtractError;
use crate::model::CellValue;

/// JSON type name used in diagnostics.
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A position inside a payload tree.
///
/// Every step records the path walked so far, so a failed step can report
/// exactly where in the payload extraction stopped.
#[derive(Debug)]
pub(crate) struct Node<'a> {
    value: &'a Value,
    path: String,
}

impl<'a> Node<'a> {
    /// Starts at the payload root, path `$`.
    pub(crate) fn root(value: &'a Value) -> Self {
        Self {
            value,
            path: String::from("$"),
        }
    }

    pub(crate) fn value(&self) -> &'a Value {
        self.value
    }

    pub(crate) fn path(&self) -> &str {
        &self.path
    }

    /// Steps into a field of an object node.
    pub(crate) fn field(&self, name: &str) -> Result<Node<'a>, ExtractError> {
        let object = self
            .value
            .as_object()
            .ok_or_else(|| ExtractError::unexpected(&self.path, "object", json_type(self.value)))?;
        let value = object
            .get(name)
            .ok_or_else(|| ExtractError::missing(&self.path, name))?;
        Ok(Node {
            value,
            path: format!("{}.{}", self.path, name),
        })
    }

    /// Steps into an element of an array node.
    pub(crate) fn index(&self, index: usize) -> Result<Node<'a>, ExtractError> {
        let value = self
            .array()?
            .get(index)
            .ok_or_else(|| ExtractError::missing(&self.path, format!("[{index}]")))?;
        Ok(Node {
            value,
            path: format!("{}[{}]", self.path, index),
        })
    }

    /// The elements of an array node.
    pub(crate) fn array(&self) -> Result<&'a [Value], ExtractError> {
        self.value
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| ExtractError::unexpected(&self.path, "array", json_type(self.value)))
    }

    /// The text of a string node.
    pub(crate) fn string(&self) -> Result<&'a str, ExtractError> {
        self.value
            .as_str()
            .ok_or_else(|| ExtractError::unexpected(&self.path, "string", json_type(self.value)))
    }

    /// Child nodes of an array node, each with its indexed path.
    pub(crate) fn elements(
        &self,
    ) -> Result<impl Iterator<Item = Node<'a>> + '_, ExtractError> {
        let items = self.array()?;
        let path = self.path.as_str();
        Ok(items.iter().enumerate().map(move |(index, value)| Node {
            value,
            path: format!("{path}[{index}]"),
        }))
    }
}

/// A payload node carrying either a single entry or a list of entries.
///
/// Both encodings occur in the wild for the same field, so callers classify
/// the node once by its runtime type and handle one shape afterwards.
pub(crate) enum OneOrMany<'a> {
    One(Node<'a>),
    Many(Vec<Node<'a>>),
}

impl<'a> OneOrMany<'a> {
    pub(crate) fn classify(node: Node<'a>) -> Self {
        match node.value {
            Value::Array(items) => {
                let nodes = items
                    .iter()
                    .enumerate()
                    .map(|(index, value)| Node {
                        value,
                        path: format!("{}[{}]", node.path, index),
                    })
                    .collect();
                OneOrMany::Many(nodes)
            }
            _ => OneOrMany::One(node),
        }
    }

    /// The single entry, or the first of the list.
    pub(crate) fn into_first(self) -> Option<Node<'a>> {
        match self {
            OneOrMany::One(node) => Some(node),
            OneOrMany::Many(nodes) => nodes.into_iter().next(),
        }
    }
}

/// Reads an array node whose elements are all strings.
pub(crate) fn string_items(node: &Node<'_>) -> Result<Vec<String>, ExtractError> {
    let mut items = Vec::new();
    for element in node.elements()? {
        items.push(element.string()?.to_string());
    }
    Ok(items)
}

/// Reads an array node of scalars as one column or row of cells.
pub(crate) fn cell_items(node: &Node<'_>) -> Result<Vec<CellValue>, ExtractError> {
    Ok(node.array()?.iter().map(CellValue::from).collect())
}

/// Reads an array-of-arrays node as row-major cells.
pub(crate) fn cell_rows(node: &Node<'_>) -> Result<Vec<Vec<CellValue>>, ExtractError> {
    let mut rows = Vec::new();
    for element in node.elements()? {
        rows.push(cell_items(&element)?);
    }
    Ok(rows)
}
