//! WebAssembly bindings.
//!
//! JavaScript-friendly wrappers around the operations. Results cross the
//! boundary as JSON so the trace keeps its structure.

use wasm_bindgen::prelude::*;
use crate::input::Operation;

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Run `op` ("add", "sub" or "mul") on two binary strings.
///
/// Returns `{"result": "...", "trace": [...]}` as JSON.
#[wasm_bindgen]
pub fn calculate(op: &str, a: &str, b: &str) -> Result<String, JsError> {
    let op: Operation = op.parse().map_err(|e| JsError::new(&format!("{}", e)))?;
    let out = op.evaluate(a, b).map_err(|e| JsError::new(&format!("{}", e)))?;
    serde_json::to_string(&out).map_err(|e| JsError::new(&format!("{}", e)))
}

/// Numbered, human-readable steps for `op` on two binary strings.
#[wasm_bindgen]
pub fn steps(op: &str, a: &str, b: &str) -> Result<Vec<String>, JsError> {
    let op: Operation = op.parse().map_err(|e| JsError::new(&format!("{}", e)))?;
    let out = op.evaluate(a, b).map_err(|e| JsError::new(&format!("{}", e)))?;
    Ok(out.steps().collect())
}
