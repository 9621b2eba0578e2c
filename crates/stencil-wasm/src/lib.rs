//! Stencil code generator as a WASM module for browser environments.
//!
//! The AST and options cross the boundary as JSON strings, so the template
//! parser and transforms can live anywhere.
//!
//! # Usage (JavaScript)
//!
//! ```js
//! import init, { generate } from 'stencil-wasm';
//!
//! await init();
//!
//! const result = JSON.parse(generate(JSON.stringify(ast), '{"mode":"module"}'));
//! // { success: true, code: "import { ... } from 'vue'...", map: { version: 3, ... }, error: null }
//! ```

use serde::Serialize;
use stencil_codegen::{CodegenOutput, GenerateOptions, SourceMap};
use stencil_types::ast::RootNode;
use wasm_bindgen::prelude::*;

/// JSON payload returned by [`generate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateResult {
    pub success: bool,
    pub code: Option<String>,
    pub map: Option<SourceMap>,
    pub error: Option<String>,
}

impl GenerateResult {
    fn ok(output: CodegenOutput) -> Self {
        Self {
            success: true,
            code: Some(output.code),
            map: output.map,
            error: None,
        }
    }

    fn err(message: String) -> Self {
        Self {
            success: false,
            code: None,
            map: None,
            error: Some(message),
        }
    }
}

/// Generate a render function from a JSON AST.
///
/// `options_json` may be empty, in which case the defaults apply. Returns a
/// JSON string containing a [`GenerateResult`]:
/// ```json
/// { "success": true, "code": "...", "map": { "version": 3, ... }, "error": null }
/// ```
///
/// On failure, `success` is `false`, `code` and `map` are `null` and `error`
/// says whether the input was malformed or generation was rejected.
#[wasm_bindgen]
pub fn generate(ast_json: &str, options_json: &str) -> String {
    let result = generate_to_result(ast_json, options_json);
    serde_json::to_string(&result).unwrap_or_else(|e| {
        format!(
            r#"{{"success":false,"code":null,"map":null,"error":"Serialization error: {}"}}"#,
            e
        )
    })
}

/// Return the generator version string.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn generate_to_result(ast_json: &str, options_json: &str) -> GenerateResult {
    let ast: RootNode = match serde_json::from_str(ast_json) {
        Ok(ast) => ast,
        Err(e) => return GenerateResult::err(format!("Invalid AST: {e}")),
    };
    let options: GenerateOptions = if options_json.trim().is_empty() {
        GenerateOptions::default()
    } else {
        match serde_json::from_str(options_json) {
            Ok(options) => options,
            Err(e) => return GenerateResult::err(format!("Invalid options: {e}")),
        }
    };
    match stencil_codegen::generate(&ast, &options) {
        Ok(output) => GenerateResult::ok(output),
        Err(e) => GenerateResult::err(e.to_string()),
    }
}
