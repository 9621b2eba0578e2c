//! Text, comment and expression rendering.

use stencil_types::ast::{
    CommentNode, CompoundChild, CompoundExpressionNode, ExpressionNode, SimpleExpressionNode,
    TextNode,
};

use crate::context::CodegenContext;

/// `"content"`
pub fn gen_text(node: &TextNode, ctx: &mut CodegenContext<'_>) {
    ctx.push(&json_quote(&node.content), Some(&node.loc));
}

/// `<!--content-->`
pub fn gen_comment(node: &CommentNode, ctx: &mut CodegenContext<'_>) {
    ctx.push(&format!("<!--{}-->", node.content), Some(&node.loc));
}

/// Render an expression as a value.
pub fn gen_expression(node: &ExpressionNode, ctx: &mut CodegenContext<'_>) {
    match node {
        ExpressionNode::Simple(simple) => gen_simple_expression(simple, ctx),
        ExpressionNode::Compound(compound) => gen_compound_expression(compound, ctx),
    }
}

/// Static content is quoted, dynamic content is code and goes out verbatim.
fn gen_simple_expression(node: &SimpleExpressionNode, ctx: &mut CodegenContext<'_>) {
    if node.is_static {
        ctx.push(&json_quote(&node.content), Some(&node.loc));
    } else {
        ctx.push(&node.content, Some(&node.loc));
    }
}

/// Concatenate the children in order with nothing in between.
pub fn gen_compound_expression(node: &CompoundExpressionNode, ctx: &mut CodegenContext<'_>) {
    for child in &node.children {
        match child {
            CompoundChild::Code(code) => ctx.push(code, None),
            CompoundChild::Expression(expr) => gen_expression(expr, ctx),
        }
    }
}

/// Render an expression in object-key position.
///
/// Static keys stay bare when they are plain identifiers and are quoted
/// otherwise; dynamic and compound keys become computed `[...]` keys.
pub fn gen_expression_as_property_key(node: &ExpressionNode, ctx: &mut CodegenContext<'_>) {
    match node {
        ExpressionNode::Compound(compound) => {
            ctx.push("[", None);
            gen_compound_expression(compound, ctx);
            ctx.push("]", None);
        }
        ExpressionNode::Simple(simple) if simple.is_static => {
            if is_bare_key(&simple.content) {
                ctx.push(&simple.content, Some(&simple.loc));
            } else {
                ctx.push(&json_quote(&simple.content), Some(&simple.loc));
            }
        }
        ExpressionNode::Simple(simple) => {
            ctx.push(&format!("[{}]", simple.content), Some(&simple.loc));
        }
    }
}

/// `^[A-Za-z_]\w*$`
fn is_bare_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Quote `s` as a JSON (and therefore JavaScript) string literal.
pub(crate) fn json_quote(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}
