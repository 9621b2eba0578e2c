//! Codegen error types.

use stencil_types::Position;
use thiserror::Error;

/// Structural preconditions the transform stages failed to establish.
///
/// Every variant is a pipeline contract violation: codegen is a pure
/// function of its input, so the fix always belongs upstream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// An element reached codegen without its call-expression descriptor.
    #[error("element <{tag}> at {loc} has no codegen node (element transform did not run)")]
    MissingCodegenNode { tag: String, loc: Position },

    /// An `else` branch appeared before the end of a conditional chain.
    #[error("branch without condition at {loc} is not the last branch of its chain")]
    MisplacedElseBranch { loc: Position },

    /// A conditional node with no branches.
    #[error("conditional at {loc} has no branches")]
    EmptyConditional { loc: Position },
}

impl CodegenError {
    /// Template position the violation was detected at.
    pub fn loc(&self) -> Position {
        match self {
            CodegenError::MissingCodegenNode { loc, .. }
            | CodegenError::MisplacedElseBranch { loc }
            | CodegenError::EmptyConditional { loc } => *loc,
        }
    }
}

/// Codegen result type alias.
pub type CodegenResult<T> = Result<T, CodegenError>;
