//! Conditional and iteration rendering.
//!
//! Both always produce a single expression, so they can sit anywhere a
//! value can: a `return`, a list entry, a call argument.

use stencil_types::ast::{ExpressionNode, ForNode, IfBranchNode, IfNode};

use crate::context::CodegenContext;
use crate::error::{CodegenError, CodegenResult};
use crate::expr::gen_expression;
use crate::list::gen_children;
use crate::types::{RENDER_LIST, SKIPPED_KEY_PARAM, SKIPPED_VALUE_PARAM};

// ══════════════════════════════════════════════════════════════════════════════
// Conditionals
// ══════════════════════════════════════════════════════════════════════════════

/// Render a branch chain as nested ternaries:
///
/// ```text
/// (a)
///   ? <then>
/// : (b)
///   ? <then>
/// : <else or null>
/// ```
pub fn gen_if(node: &IfNode, ctx: &mut CodegenContext<'_>) -> CodegenResult<()> {
    tracing::trace!(branches = node.branches.len(), at = %node.loc, "conditional chain");
    match node.branches.split_first() {
        Some((first, rest)) => gen_if_branch(first, rest, ctx),
        None => {
            ctx.violation(CodegenError::EmptyConditional {
                loc: node.loc.start,
            })?;
            ctx.push("null", Some(&node.loc));
            Ok(())
        }
    }
}

fn gen_if_branch(
    branch: &IfBranchNode,
    rest: &[IfBranchNode],
    ctx: &mut CodegenContext<'_>,
) -> CodegenResult<()> {
    let Some(condition) = &branch.condition else {
        // else: only valid as the final branch
        if !rest.is_empty() {
            ctx.violation(CodegenError::MisplacedElseBranch {
                loc: branch.loc.start,
            })?;
        }
        return gen_children(&branch.children, ctx);
    };

    ctx.push("(", None);
    gen_expression(condition, ctx);
    ctx.push(")", None);
    ctx.indent();
    ctx.push("? ", None);
    gen_children(&branch.children, ctx)?;
    ctx.deindent(false);
    ctx.push(": ", None);
    match rest.split_first() {
        Some((next, rest)) => gen_if_branch(next, rest, ctx),
        None => {
            ctx.push("null", None);
            Ok(())
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Iteration
// ══════════════════════════════════════════════════════════════════════════════

/// `renderList(source, (value, key, index) => children)`
pub fn gen_for(node: &ForNode, ctx: &mut CodegenContext<'_>) -> CodegenResult<()> {
    ctx.push(&format!("{RENDER_LIST}("), Some(&node.loc));
    gen_expression(&node.source, ctx);
    ctx.push(", (", None);
    gen_for_params(node, ctx);
    ctx.push(") => ", None);
    gen_children(&node.children, ctx)?;
    ctx.push(")", None);
    Ok(())
}

/// Aliases in value → key → index order. A skipped slot before a present
/// alias gets a placeholder; nothing is emitted after the last alias.
fn gen_for_params(node: &ForNode, ctx: &mut CodegenContext<'_>) {
    let slots: [(Option<&ExpressionNode>, &str); 3] = [
        (node.value_alias.as_ref(), SKIPPED_VALUE_PARAM),
        (node.key_alias.as_ref(), SKIPPED_KEY_PARAM),
        (node.object_index_alias.as_ref(), ""),
    ];
    let Some(last) = slots.iter().rposition(|(alias, _)| alias.is_some()) else {
        return;
    };
    for (i, (alias, placeholder)) in slots[..=last].iter().enumerate() {
        if i > 0 {
            ctx.push(", ", None);
        }
        match alias {
            Some(alias) => gen_expression(alias, ctx),
            None => ctx.push(placeholder, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::GenerateOptions;
    use stencil_types::ast::{Node, RootNode, TextNode};
    use stencil_types::SourceLocation;

    fn text(s: &str) -> Node {
        Node::Text(TextNode::new(s, SourceLocation::STUB))
    }

    fn dynamic(s: &str) -> ExpressionNode {
        ExpressionNode::dynamic(s, SourceLocation::STUB)
    }

    fn branch(cond: Option<&str>, child: &str) -> IfBranchNode {
        IfBranchNode::new(cond.map(dynamic), vec![text(child)], SourceLocation::STUB)
    }

    fn render_with(
        opts: GenerateOptions,
        f: impl FnOnce(&mut CodegenContext<'_>) -> CodegenResult<()>,
    ) -> CodegenResult<String> {
        let root = RootNode::new(vec![], SourceLocation::STUB);
        let mut ctx = CodegenContext::new(&root, &opts);
        f(&mut ctx)?;
        Ok(ctx.finish().code)
    }

    fn render(f: impl FnOnce(&mut CodegenContext<'_>) -> CodegenResult<()>) -> String {
        render_with(GenerateOptions::default(), f).unwrap()
    }

    fn squash(s: &str) -> String {
        s.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn for_node(value: Option<&str>, key: Option<&str>, index: Option<&str>) -> ForNode {
        let mut node = ForNode::new(dynamic("list"), vec![text("x")], SourceLocation::STUB);
        node.value_alias = value.map(dynamic);
        node.key_alias = key.map(dynamic);
        node.object_index_alias = index.map(dynamic);
        node
    }

    #[test]
    fn if_else_if_else_chain() {
        let node = IfNode {
            branches: vec![
                branch(Some("ok"), "a"),
                branch(Some("maybe"), "b"),
                branch(None, "c"),
            ],
            loc: SourceLocation::STUB,
        };
        let out = render(|ctx| gen_if(&node, ctx));
        assert_eq!(out, "(ok)\n  ? \"a\"\n: (maybe)\n  ? \"b\"\n: \"c\"");
        assert_eq!(squash(&out), r#"(ok) ? "a" : (maybe) ? "b" : "c""#);
    }

    #[test]
    fn lone_if_falls_back_to_null() {
        let node = IfNode {
            branches: vec![branch(Some("ok"), "a")],
            loc: SourceLocation::STUB,
        };
        assert_eq!(squash(&render(|ctx| gen_if(&node, ctx))), r#"(ok) ? "a" : null"#);
    }

    #[test]
    fn branch_children_use_children_layout() {
        let node = IfNode {
            branches: vec![IfBranchNode::new(
                Some(dynamic("ok")),
                vec![text("a"), text("b")],
                SourceLocation::STUB,
            )],
            loc: SourceLocation::STUB,
        };
        assert_eq!(
            render(|ctx| gen_if(&node, ctx)),
            "(ok)\n  ? [\n    \"a\",\n    \"b\"\n  ]\n: null"
        );
    }

    #[test]
    fn misplaced_else_is_a_violation() {
        let node = IfNode {
            branches: vec![branch(None, "a"), branch(Some("ok"), "b")],
            loc: SourceLocation::STUB,
        };
        let err = render_with(GenerateOptions::default(), |ctx| gen_if(&node, ctx)).unwrap_err();
        assert!(matches!(err, CodegenError::MisplacedElseBranch { .. }));
    }

    #[test]
    fn misplaced_else_in_lenient_mode_ends_the_chain() {
        let node = IfNode {
            branches: vec![branch(Some("x"), "a"), branch(None, "b"), branch(Some("y"), "c")],
            loc: SourceLocation::STUB,
        };
        let opts = GenerateOptions {
            lenient: true,
            ..GenerateOptions::default()
        };
        let out = render_with(opts, |ctx| gen_if(&node, ctx)).unwrap();
        assert_eq!(squash(&out), r#"(x) ? "a" : "b""#);
    }

    #[test]
    fn empty_conditional() {
        let node = IfNode {
            branches: vec![],
            loc: SourceLocation::STUB,
        };
        let err = render_with(GenerateOptions::default(), |ctx| gen_if(&node, ctx)).unwrap_err();
        assert!(matches!(err, CodegenError::EmptyConditional { .. }));

        let opts = GenerateOptions {
            lenient: true,
            ..GenerateOptions::default()
        };
        assert_eq!(render_with(opts, |ctx| gen_if(&node, ctx)).unwrap(), "null");
    }

    #[test]
    fn for_alias_placeholders() {
        let cases = [
            (for_node(Some("item"), None, None), "(item)"),
            (for_node(None, Some("key"), None), "(_, key)"),
            (for_node(None, None, Some("index")), "(_, __, index)"),
            (for_node(Some("item"), None, Some("index")), "(item, __, index)"),
            (for_node(Some("v"), Some("k"), Some("i")), "(v, k, i)"),
            (for_node(Some("v"), Some("k"), None), "(v, k)"),
            (for_node(None, None, None), "()"),
        ];
        for (node, params) in cases {
            assert_eq!(
                render(|ctx| gen_for(&node, ctx)),
                format!("renderList(list, {params} => \"x\")")
            );
        }
    }

    #[test]
    fn for_body_with_several_children_is_an_array() {
        let mut node = for_node(Some("item"), None, None);
        node.children.push(text("y"));
        assert_eq!(
            render(|ctx| gen_for(&node, ctx)),
            "renderList(list, (item) => [\n  \"x\",\n  \"y\"\n])"
        );
    }
}
