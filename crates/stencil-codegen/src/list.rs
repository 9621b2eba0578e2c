//! Children and list rendering.
//!
//! Layout is decided by entry count alone:
//!
//! ```text
//! []            0 entries
//! [a]           1 entry (children of length 1 unwrap to just `a`)
//! [             2+ entries
//!   a,
//!   b
//! ]
//! ```

use stencil_types::ast::{ListEntry, Node};

use crate::context::CodegenContext;
use crate::error::CodegenResult;
use crate::node::gen_node;

/// Anything that can appear as an entry of a generated list.
pub trait ListItem {
    fn gen(&self, ctx: &mut CodegenContext<'_>) -> CodegenResult<()>;
}

impl ListItem for Node {
    fn gen(&self, ctx: &mut CodegenContext<'_>) -> CodegenResult<()> {
        gen_node(self, ctx)
    }
}

impl ListItem for ListEntry {
    fn gen(&self, ctx: &mut CodegenContext<'_>) -> CodegenResult<()> {
        match self {
            ListEntry::Code(code) => {
                ctx.push(code, None);
                Ok(())
            }
            // nested sequences never unwrap
            ListEntry::Nodes(nodes) => gen_node_list_as_array(nodes, ctx),
            ListEntry::Node(node) => gen_node(node, ctx),
        }
    }
}

/// Render a children sequence: one child unwrapped, anything else as an
/// array literal.
pub fn gen_children(children: &[Node], ctx: &mut CodegenContext<'_>) -> CodegenResult<()> {
    match children {
        [only] => gen_node(only, ctx),
        _ => gen_node_list_as_array(children, ctx),
    }
}

/// Render `[ ... ]`, one entry per line when there is more than one.
pub fn gen_node_list_as_array<T: ListItem>(
    items: &[T],
    ctx: &mut CodegenContext<'_>,
) -> CodegenResult<()> {
    let multilines = items.len() > 1;
    ctx.push("[", None);
    if multilines {
        ctx.indent();
    }
    gen_node_list(items, ctx, multilines)?;
    if multilines {
        ctx.deindent(false);
    }
    ctx.push("]", None);
    Ok(())
}

/// Render entries separated by `,` + newline (multiline) or `, `.
pub fn gen_node_list<T: ListItem>(
    items: &[T],
    ctx: &mut CodegenContext<'_>,
    multilines: bool,
) -> CodegenResult<()> {
    for (i, item) in items.iter().enumerate() {
        item.gen(ctx)?;
        if i + 1 < items.len() {
            if multilines {
                ctx.push(",", None);
                ctx.newline();
            } else {
                ctx.push(", ", None);
            }
        }
    }
    Ok(())
}
