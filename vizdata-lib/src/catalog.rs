//! Object listings from metadata payloads

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::error::ExtractError;
use crate::payload::node::Node;

/// One entry of an object listing: a liveboard, answer or other saved object
/// a user can pick from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectHeader {
    /// Stable id of the object.
    pub id: String,
    /// Display name, empty when the listing omits one.
    #[serde(default)]
    pub name: String,
    /// Free-form description, when the author wrote one.
    #[serde(default)]
    pub description: Option<String>,
}

/// Reads the object headers out of a metadata listing payload.
///
/// Listings arrive either as a bare list of headers or wrapped in an object
/// under a `headers` key; both encodings are accepted. Entries that cannot be
/// read as a header are skipped with a warning, so one malformed entry does
/// not hide the rest of the listing.
pub fn object_headers(payload: &Value) -> Result<Vec<ObjectHeader>, ExtractError> {
    let root = Node::root(payload);
    let list = match root.field("headers") {
        Ok(node) if node.value().is_array() => node,
        _ => root,
    };

    let mut headers = Vec::new();
    for element in list.elements()? {
        match serde_json::from_value(element.value().clone()) {
            Ok(header) => headers.push(header),
            Err(err) => {
                warn!(error = %err, header = %element.value(), "skipping unreadable object header");
            }
        }
    }
    Ok(headers)
}

/// Sorts headers by display name, ascending, for presentation in pickers.
pub fn sort_headers_by_name(headers: &mut [ObjectHeader]) {
    headers.sort_by(|a, b| a.name.cmp(&b.name));
}
