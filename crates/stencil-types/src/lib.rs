//! Shared types for the stencil template compiler.
//!
//! This crate defines the transformed-template AST and the source
//! positions every node carries.

mod span;
pub mod ast;

pub use span::{Position, SourceLocation};
