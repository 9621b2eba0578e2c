//! Node dispatch.

use stencil_types::ast::{ElementNode, Node};

use crate::construct::{gen_array_expression, gen_call_expression, gen_object_expression};
use crate::context::CodegenContext;
use crate::control_flow::{gen_for, gen_if};
use crate::error::{CodegenError, CodegenResult};
use crate::expr::{gen_comment, gen_expression, gen_text};

/// Emit a single node.
pub fn gen_node(node: &Node, ctx: &mut CodegenContext<'_>) -> CodegenResult<()> {
    match node {
        Node::Element(element) => gen_element(element, ctx),
        Node::Text(text) => {
            gen_text(text, ctx);
            Ok(())
        }
        Node::Comment(comment) => {
            gen_comment(comment, ctx);
            Ok(())
        }
        Node::Expression(expr) => {
            gen_expression(expr, ctx);
            Ok(())
        }
        Node::If(if_node) => gen_if(if_node, ctx),
        Node::For(for_node) => gen_for(for_node, ctx),
        Node::CallExpression(call) => gen_call_expression(call, ctx),
        Node::ObjectExpression(object) => {
            gen_object_expression(object, ctx);
            Ok(())
        }
        Node::ArrayExpression(array) => gen_array_expression(array, ctx),
    }
}

/// Elements render as the call the element transform attached to them.
fn gen_element(node: &ElementNode, ctx: &mut CodegenContext<'_>) -> CodegenResult<()> {
    match &node.codegen_node {
        Some(call) => gen_call_expression(call, ctx),
        None => ctx.violation(CodegenError::MissingCodegenNode {
            tag: node.tag.clone(),
            loc: node.loc.start,
        }),
    }
}
