//! Emission context for a single codegen pass.
//!
//! All writes go through [`CodegenContext::push`], which appends to the
//! buffer, records a source mapping when asked to, and advances the
//! generated position. Renderers only decide *what* to push.

use stencil_types::ast::RootNode;
use stencil_types::{Position, SourceLocation};

use crate::error::{CodegenError, CodegenResult};
use crate::options::GenerateOptions;
use crate::source_map::{Mapping, SourceMap, SourceMapGenerator};
use crate::types::INDENT;

/// Output of one codegen pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenOutput {
    pub code: String,
    pub map: Option<SourceMap>,
}

/// Mutable state threaded through the renderers.
///
/// Created per [`generate`](crate::generate) call and consumed by
/// [`finish`](Self::finish); never reused.
pub struct CodegenContext<'a> {
    options: &'a GenerateOptions,
    code: String,
    pos: Position,
    indent_level: usize,
    map: Option<SourceMapGenerator>,
}

impl<'a> CodegenContext<'a> {
    pub fn new(root: &RootNode, options: &'a GenerateOptions) -> Self {
        let map = options
            .source_map
            .then(|| SourceMapGenerator::new(options.filename.clone(), root.loc.source.clone()));
        Self {
            options,
            code: String::new(),
            pos: Position::START,
            indent_level: 0,
            map,
        }
    }

    pub fn options(&self) -> &GenerateOptions {
        self.options
    }

    /// Current generated position (where the next pushed byte lands).
    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Mappings recorded so far, if a source map is being built.
    pub fn mappings(&self) -> Option<&[Mapping]> {
        self.map.as_ref().map(SourceMapGenerator::mappings)
    }

    /// Append `code`.
    ///
    /// With a source map active and `loc` given, maps the generated position
    /// *before* the append to `loc.start`.
    pub fn push(&mut self, code: &str, loc: Option<&SourceLocation>) {
        if let (Some(map), Some(loc)) = (self.map.as_mut(), loc) {
            map.add_mapping(Mapping {
                generated_line: self.pos.line,
                generated_column: self.pos.column.saturating_sub(1),
                original_line: loc.start.line,
                original_column: loc.start.column.saturating_sub(1),
            });
        }
        self.code.push_str(code);
        self.pos.advance(code);
    }

    /// Increase depth and start a new line at it.
    pub fn indent(&mut self) {
        self.indent_level += 1;
        self.newline_at(self.indent_level);
    }

    /// Decrease depth and, unless `skip_newline`, start a new line at it.
    pub fn deindent(&mut self, skip_newline: bool) {
        debug_assert!(self.indent_level > 0, "deindent below zero");
        self.indent_level = self.indent_level.saturating_sub(1);
        if !skip_newline {
            self.newline_at(self.indent_level);
        }
    }

    /// Start a new line at the current depth.
    pub fn newline(&mut self) {
        self.newline_at(self.indent_level);
    }

    fn newline_at(&mut self, level: usize) {
        let text = format!("\n{}", INDENT.repeat(level));
        self.push(&text, None);
    }

    /// Report a contract violation.
    ///
    /// Lenient passes log it and return `Ok(())` so the caller can carry
    /// on best effort; otherwise the error aborts the pass.
    pub fn violation(&self, err: CodegenError) -> CodegenResult<()> {
        if self.options.lenient {
            tracing::warn!(loc = %err.loc(), "continuing past contract violation: {err}");
            Ok(())
        } else {
            Err(err)
        }
    }

    pub fn finish(self) -> CodegenOutput {
        CodegenOutput {
            code: self.code,
            map: self.map.map(SourceMapGenerator::finish),
        }
    }
}
