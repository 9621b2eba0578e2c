//! Call, object and array expression rendering.

use stencil_types::ast::{ArrayExpression, CallExpression, ObjectExpression};

use crate::context::CodegenContext;
use crate::error::CodegenResult;
use crate::expr::{gen_expression, gen_expression_as_property_key};
use crate::list::{gen_node_list, gen_node_list_as_array};

/// `callee(a, b)`, or one argument per line past two arguments.
pub fn gen_call_expression(
    node: &CallExpression,
    ctx: &mut CodegenContext<'_>,
) -> CodegenResult<()> {
    let multilines = node.arguments.len() > 2;
    tracing::trace!(callee = %node.callee, args = node.arguments.len(), multilines, "call expression");
    ctx.push(&format!("{}(", node.callee), Some(&node.loc));
    if multilines {
        ctx.indent();
    }
    gen_node_list(&node.arguments, ctx, multilines)?;
    if multilines {
        ctx.deindent(false);
    }
    ctx.push(")", None);
    Ok(())
}

/// `{ key: value }`, or one property per line past one property.
pub fn gen_object_expression(node: &ObjectExpression, ctx: &mut CodegenContext<'_>) {
    let multilines = node.properties.len() > 1;
    ctx.push(if multilines { "{" } else { "{ " }, Some(&node.loc));
    if multilines {
        ctx.indent();
    }
    for (i, prop) in node.properties.iter().enumerate() {
        gen_expression_as_property_key(&prop.key, ctx);
        ctx.push(": ", None);
        gen_expression(&prop.value, ctx);
        if i + 1 < node.properties.len() {
            ctx.push(",", None);
            ctx.newline();
        }
    }
    if multilines {
        ctx.deindent(false);
    }
    ctx.push(if multilines { "}" } else { " }" }, None);
}

/// `[a, b]`, bracketed whatever the element count.
pub fn gen_array_expression(
    node: &ArrayExpression,
    ctx: &mut CodegenContext<'_>,
) -> CodegenResult<()> {
    gen_node_list_as_array(&node.elements, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::GenerateOptions;
    use stencil_types::ast::{ExpressionNode, ListEntry, Node, Property, RootNode, TextNode};
    use stencil_types::SourceLocation;

    fn render(f: impl FnOnce(&mut CodegenContext<'_>) -> CodegenResult<()>) -> String {
        let opts = GenerateOptions::default();
        let root = RootNode::new(vec![], SourceLocation::STUB);
        let mut ctx = CodegenContext::new(&root, &opts);
        f(&mut ctx).unwrap();
        ctx.finish().code
    }

    fn prop(key: &str, value: &str) -> Property {
        Property::new(
            ExpressionNode::static_(key, SourceLocation::STUB),
            ExpressionNode::dynamic(value, SourceLocation::STUB),
        )
    }

    fn object(props: Vec<Property>) -> ObjectExpression {
        ObjectExpression {
            properties: props,
            loc: SourceLocation::STUB,
        }
    }

    fn call(args: Vec<ListEntry>) -> CallExpression {
        CallExpression::new("h", args, SourceLocation::STUB)
    }

    #[test]
    fn call_with_two_args_stays_inline() {
        let node = call(vec!["\"div\"".into(), "null".into()]);
        assert_eq!(render(|ctx| gen_call_expression(&node, ctx)), "h(\"div\", null)");
    }

    #[test]
    fn call_with_three_args_breaks_lines() {
        let node = call(vec![
            "\"div\"".into(),
            "null".into(),
            ListEntry::Nodes(vec![Node::Text(TextNode::new("a", SourceLocation::STUB))]),
        ]);
        assert_eq!(
            render(|ctx| gen_call_expression(&node, ctx)),
            "h(\n  \"div\",\n  null,\n  [\"a\"]\n)"
        );
    }

    #[test]
    fn call_without_args() {
        assert_eq!(render(|ctx| gen_call_expression(&call(vec![]), ctx)), "h()");
    }

    #[test]
    fn single_property_object_is_inline() {
        let node = object(vec![prop("id", "foo")]);
        assert_eq!(
            render(|ctx| {
                gen_object_expression(&node, ctx);
                Ok(())
            }),
            "{ id: foo }"
        );
    }

    #[test]
    fn multi_property_object_breaks_lines() {
        let node = object(vec![prop("data-x", "a"), prop("id", "b")]);
        assert_eq!(
            render(|ctx| {
                gen_object_expression(&node, ctx);
                Ok(())
            }),
            "{\n  \"data-x\": a,\n  id: b\n}"
        );
    }

    #[test]
    fn empty_object() {
        let node = object(vec![]);
        assert_eq!(
            render(|ctx| {
                gen_object_expression(&node, ctx);
                Ok(())
            }),
            "{  }"
        );
    }

    #[test]
    fn array_is_always_bracketed() {
        let one = ArrayExpression {
            elements: vec!["a".into()],
            loc: SourceLocation::STUB,
        };
        let two = ArrayExpression {
            elements: vec!["a".into(), "b".into()],
            loc: SourceLocation::STUB,
        };
        assert_eq!(render(|ctx| gen_array_expression(&one, ctx)), "[a]");
        assert_eq!(render(|ctx| gen_array_expression(&two, ctx)), "[\n  a,\n  b\n]");
    }
}
