//! Fixed names and layout constants of the generated code.
//!
//! ```text
//! const { <helpers> } = <RUNTIME_GLOBAL_NAME>
//!
//! return function RENDER_FN_NAME() {
//!   with (this) {
//!     return <children>
//!   }
//! }
//! ```

// ── Runtime ──────────────────────────────────────────────────────────────────

/// Global object the helpers are destructured from in function mode.
pub const DEFAULT_RUNTIME_GLOBAL_NAME: &str = "Vue";
/// Module the helpers are imported from in module mode.
pub const DEFAULT_RUNTIME_MODULE_NAME: &str = "vue";

/// List-iteration helper: `renderList(source, (value, key, index) => ...)`.
pub const RENDER_LIST: &str = "renderList";

// ── Generated function ───────────────────────────────────────────────────────

/// Name of the generated function.
pub const RENDER_FN_NAME: &str = "render";

/// One level of indentation.
pub const INDENT: &str = "  ";

// ── Iteration placeholders ───────────────────────────────────────────────────
// Fill skipped alias slots so later aliases keep their argument position.

/// Stands in for a missing value alias.
pub const SKIPPED_VALUE_PARAM: &str = "_";
/// Stands in for a missing key alias.
pub const SKIPPED_KEY_PARAM: &str = "__";

// ── Source map ───────────────────────────────────────────────────────────────

/// Source-map file name used when none is configured.
pub const DEFAULT_FILENAME: &str = "template.vue.html";
/// Source-map format revision.
pub const SOURCE_MAP_VERSION: u32 = 3;
