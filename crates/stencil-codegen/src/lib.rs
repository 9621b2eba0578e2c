//! Stencil code generator: turns a transformed template AST into the
//! JavaScript source of a `render` function.
//!
//! # Architecture
//!
//! [`generate`] takes a [`stencil_types::ast::RootNode`] whose elements
//! already carry their call-expression descriptors and produces:
//!
//! ```text
//! const { createVNode, renderList } = Vue
//!
//! return function render() {
//!   with (this) {
//!     return createVNode("ul", null, renderList(items, (item) => ...))
//!   }
//! }
//! ```
//!
//! or, in [`CodegenMode::Module`], an `import` plus `export default`.
//!
//! One [`CodegenContext`] is created per call. It owns the output buffer,
//! the generated line/column/offset and the optional source-map
//! accumulator; renderers write through it and never touch shared state.
//!
//! ## Layout rules
//! - Children: one child unwraps, zero or several become an array,
//!   several go one per line.
//! - Call arguments: one per line past two.
//! - Object properties: one per line past one.
//! - Conditionals: nested ternaries ending in the `else` branch or `null`.

pub mod construct;
pub mod context;
pub mod control_flow;
pub mod error;
pub mod expr;
pub mod generate;
pub mod list;
pub mod node;
pub mod options;
pub mod source_map;
pub mod types;

pub use context::{CodegenContext, CodegenOutput};
pub use error::{CodegenError, CodegenResult};
pub use generate::generate;
pub use options::{CodegenMode, GenerateOptions};
pub use source_map::{Mapping, SourceMap};
