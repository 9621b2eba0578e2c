//! Render-function assembler.
//!
//! Orchestrates a codegen pass:
//! 1. Prologue: helper destructure (function mode) or import (module mode)
//! 2. Function header
//! 3. Pre-render statements
//! 4. Optional `with (this)` scope
//! 5. `return` + the root children
//! 6. Close every block that was opened

use stencil_types::ast::RootNode;

use crate::context::{CodegenContext, CodegenOutput};
use crate::error::CodegenResult;
use crate::list::gen_children;
use crate::options::{CodegenMode, GenerateOptions};
use crate::types::RENDER_FN_NAME;

// ══════════════════════════════════════════════════════════════════════════════
// Public API
// ══════════════════════════════════════════════════════════════════════════════

/// Generate the render function for a transformed template.
///
/// Returns the code and, when [`GenerateOptions::source_map`] is set, a
/// source map back to the template. Fails only on pipeline contract
/// violations (see [`CodegenError`](crate::CodegenError)), unless
/// [`GenerateOptions::lenient`] is set.
#[tracing::instrument(level = "debug", skip_all, fields(mode = ?options.mode, children = ast.children.len()))]
pub fn generate(ast: &RootNode, options: &GenerateOptions) -> CodegenResult<CodegenOutput> {
    let mut ctx = CodegenContext::new(ast, options);

    gen_prologue(ast, &mut ctx);
    gen_function_header(&mut ctx);

    ctx.indent();
    for statement in &ast.statements {
        ctx.push(statement, None);
        ctx.newline();
    }

    if options.use_with {
        ctx.push("with (this) {", None);
        ctx.indent();
    }
    ctx.push("return ", None);
    gen_children(&ast.children, &mut ctx)?;
    if options.use_with {
        ctx.deindent(false);
        ctx.push("}", None);
    }

    ctx.deindent(false);
    ctx.push("}", None);

    let mappings = ctx.mappings().map(<[_]>::len);
    let output = ctx.finish();
    tracing::debug!(bytes = output.code.len(), mappings, "render function generated");
    Ok(output)
}

fn gen_prologue(ast: &RootNode, ctx: &mut CodegenContext<'_>) {
    if ast.imports.is_empty() {
        return;
    }
    let helpers = ast
        .imports
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let prologue = match ctx.options().mode {
        CodegenMode::Function => {
            format!("const {{ {helpers} }} = {}\n\n", ctx.options().runtime_global_name)
        }
        CodegenMode::Module => {
            format!("import {{ {helpers} }} from '{}'\n\n", ctx.options().runtime_module_name)
        }
    };
    ctx.push(&prologue, None);
}

fn gen_function_header(ctx: &mut CodegenContext<'_>) {
    let header = match ctx.options().mode {
        CodegenMode::Function => format!("return function {RENDER_FN_NAME}() {{"),
        CodegenMode::Module => format!("export default function {RENDER_FN_NAME}() {{"),
    };
    ctx.push(&header, None);
}
