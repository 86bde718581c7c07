//! Decoding document trees from mdast-shaped JSON.
//!
//! Hosts that run a JavaScript Markdown parser hand their syntax tree over as
//! JSON. Every node is an object with a string `type`; the four kinds that
//! matter to the index are read field by field, anything else becomes a
//! [`Node::Generic`].
//!
//! Partial nodes degrade to defaults. Only a value that is not a node at all
//! (not an object, or no `type` tag) is rejected.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::node::Node;
use crate::error::{Error, Result};

impl Node {
    /// Parse a document tree from mdast JSON text.
    pub fn from_json(json: &str) -> Result<Node> {
        let value: Value = serde_json::from_str(json)?;
        Node::from_value(&value)
    }

    /// Convert an already-parsed JSON value into a document tree.
    pub fn from_value(value: &Value) -> Result<Node> {
        convert(value, &mut String::new())
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Node::from_value(&value).map_err(serde::de::Error::custom)
    }
}

/// Convert one node. `path` tracks the location for error messages.
fn convert(value: &Value, path: &mut String) -> Result<Node> {
    let Some(object) = value.as_object() else {
        return Err(Error::InvalidTree(format!(
            "node at `{}` is not an object",
            display_path(path)
        )));
    };
    let Some(kind) = object.get("type").and_then(Value::as_str) else {
        return Err(Error::InvalidTree(format!(
            "node at `{}` has no `type` tag",
            display_path(path)
        )));
    };

    let node = match kind {
        "heading" => Node::Heading {
            depth: depth(object),
            children: children(object, path)?,
        },
        "link" => Node::Link {
            url: string(object, "url"),
            title: optional_string(object, "title"),
            children: children(object, path)?,
        },
        "linkReference" => Node::Reference {
            identifier: string(object, "identifier"),
            label: string(object, "label"),
            children: children(object, path)?,
        },
        "definition" => Node::Definition {
            identifier: string(object, "identifier"),
            url: string(object, "url"),
            title: optional_string(object, "title"),
        },
        _ => Node::Generic {
            kind: kind.to_string(),
            value: optional_string(object, "value"),
            children: children(object, path)?,
        },
    };
    Ok(node)
}

fn children(object: &Map<String, Value>, path: &mut String) -> Result<Vec<Node>> {
    let Some(items) = object.get("children").and_then(Value::as_array) else {
        return Ok(Vec::new());
    };

    let mut nodes = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let len = path.len();
        path.push_str(&format!("/children/{i}"));
        let node = convert(item, path);
        path.truncate(len);
        nodes.push(node?);
    }
    Ok(nodes)
}

fn depth(object: &Map<String, Value>) -> u8 {
    object
        .get("depth")
        .and_then(Value::as_u64)
        .map(|d| d.clamp(1, u8::MAX as u64) as u8)
        .unwrap_or(1)
}

fn string(object: &Map<String, Value>, key: &str) -> String {
    optional_string(object, key).unwrap_or_default()
}

fn optional_string(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(String::from)
}

fn display_path(path: &str) -> &str {
    if path.is_empty() { "/" } else { path }
}
