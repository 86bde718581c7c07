//! WASM bindings for JavaScript document pipelines.
//!
//! A JS host parses Markdown into an mdast tree, serializes it with
//! `JSON.stringify`, and hands it over together with the source filename.

use wasm_bindgen::prelude::*;

use crate::compile::{CompileConfig, OutputFormat, compile_with};
use crate::extract::transform;
use crate::model::Node;
use crate::slugify::slugify;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Extract the link index of an mdast tree.
///
/// Returns the transformed document as JSON (before root reconciliation).
#[wasm_bindgen]
pub fn extract_metadata(tree_json: &str, filename: &str) -> Result<String, JsValue> {
    let tree = Node::from_json(tree_json).map_err(to_js)?;
    let doc = transform(&tree, filename);
    serde_json::to_string(&doc).map_err(to_js)
}

/// Compile an mdast tree into the flat line index.
///
/// Returns `{"text": "...", "warnings": ["WARNING: ..."]}` as JSON.
#[wasm_bindgen]
pub fn compile_metadata(tree_json: &str, filename: &str, json: bool) -> Result<String, JsValue> {
    let tree = Node::from_json(tree_json).map_err(to_js)?;
    let doc = transform(&tree, filename);

    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Lines
    };
    let config = CompileConfig::new().with_format(format);
    let compiled = compile_with(&doc, &config, &slugify).map_err(to_js)?;

    let output = serde_json::json!({
        "text": compiled.text,
        "warnings": compiled.warning_lines().collect::<Vec<_>>(),
    });
    Ok(output.to_string())
}
