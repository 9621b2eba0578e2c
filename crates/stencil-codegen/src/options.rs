//! Generation options.

use serde::{Deserialize, Serialize};

use crate::types::{DEFAULT_FILENAME, DEFAULT_RUNTIME_GLOBAL_NAME, DEFAULT_RUNTIME_MODULE_NAME};

/// Shape of the generated code's top level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodegenMode {
    /// `const { ... } = Vue` + `return function render() { ... }`, meant to
    /// be wrapped in `new Function(code)()`.
    #[default]
    Function,
    /// `import { ... } from 'vue'` + `export default function render() { ... }`.
    Module,
}

/// Options for [`generate`](crate::generate).
///
/// Every field has a default, so any subset may be supplied as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerateOptions {
    pub mode: CodegenMode,
    /// Wrap the body in `with (this) { ... }` so template identifiers
    /// resolve against the component instance.
    pub use_with: bool,
    /// Recorded as the map's only source.
    pub filename: String,
    /// Build a source map alongside the code.
    pub source_map: bool,
    pub runtime_global_name: String,
    pub runtime_module_name: String,
    /// Log contract violations and keep going instead of failing.
    pub lenient: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            mode: CodegenMode::Function,
            use_with: true,
            filename: DEFAULT_FILENAME.to_string(),
            source_map: true,
            runtime_global_name: DEFAULT_RUNTIME_GLOBAL_NAME.to_string(),
            runtime_module_name: DEFAULT_RUNTIME_MODULE_NAME.to_string(),
            lenient: false,
        }
    }
}

impl GenerateOptions {
    /// Module-mode options, everything else default.
    pub fn module() -> Self {
        Self {
            mode: CodegenMode::Module,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = GenerateOptions::default();
        assert_eq!(opts.mode, CodegenMode::Function);
        assert!(opts.use_with);
        assert!(opts.source_map);
        assert!(!opts.lenient);
        assert_eq!(opts.filename, "template.vue.html");
    }

    #[test]
    fn partial_json_fills_defaults() {
        let opts: GenerateOptions =
            serde_json::from_str(r#"{"mode": "module", "useWith": false}"#).unwrap();
        assert_eq!(opts.mode, CodegenMode::Module);
        assert!(!opts.use_with);
        assert_eq!(opts.runtime_module_name, "vue");
        assert_eq!(opts.filename, "template.vue.html");
    }
}
