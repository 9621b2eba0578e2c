//! AST node types consumed by the code generator.
//!
//! The tree handed to codegen has already been through every transform:
//! elements carry their call-expression descriptor, conditionals are
//! canonical branch lists, and loops have their aliases split out.
//!
//! Every node carries a [`SourceLocation`] for source-map correlation.
//! Node lists preserve template order.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::SourceLocation;

// ══════════════════════════════════════════════════════════════════════════════
// Root
// ══════════════════════════════════════════════════════════════════════════════

/// The root of a transformed template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootNode {
    /// Runtime helpers referenced by the generated code, in prologue order.
    #[serde(default)]
    pub imports: IndexSet<String>,
    /// Statements emitted at the top of the render function body.
    #[serde(default)]
    pub statements: Vec<String>,
    pub children: Vec<Node>,
    /// `loc.source` holds the full template text.
    #[serde(default)]
    pub loc: SourceLocation,
}

impl RootNode {
    pub fn new(children: Vec<Node>, loc: SourceLocation) -> Self {
        Self {
            imports: IndexSet::new(),
            statements: Vec::new(),
            children,
            loc,
        }
    }

    /// Record a helper import. Returns `false` if it was already recorded.
    pub fn add_import(&mut self, helper: impl Into<String>) -> bool {
        self.imports.insert(helper.into())
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Nodes
// ══════════════════════════════════════════════════════════════════════════════

/// A node of the transformed tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    Element(ElementNode),
    Text(TextNode),
    Comment(CommentNode),
    Expression(ExpressionNode),
    If(IfNode),
    For(ForNode),
    CallExpression(CallExpression),
    ObjectExpression(ObjectExpression),
    ArrayExpression(ArrayExpression),
}

impl Node {
    pub fn loc(&self) -> &SourceLocation {
        match self {
            Node::Element(n) => &n.loc,
            Node::Text(n) => &n.loc,
            Node::Comment(n) => &n.loc,
            Node::Expression(n) => n.loc(),
            Node::If(n) => &n.loc,
            Node::For(n) => &n.loc,
            Node::CallExpression(n) => &n.loc,
            Node::ObjectExpression(n) => &n.loc,
            Node::ArrayExpression(n) => &n.loc,
        }
    }

    /// Short name of the node kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Element(_) => "element",
            Node::Text(_) => "text",
            Node::Comment(_) => "comment",
            Node::Expression(_) => "expression",
            Node::If(_) => "if",
            Node::For(_) => "for",
            Node::CallExpression(_) => "call expression",
            Node::ObjectExpression(_) => "object expression",
            Node::ArrayExpression(_) => "array expression",
        }
    }
}

/// `<tag ...>children</tag>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementNode {
    pub tag: String,
    #[serde(default)]
    pub children: Vec<Node>,
    /// Attached by the element transform. Codegen renders only this.
    #[serde(default)]
    pub codegen_node: Option<CallExpression>,
    #[serde(default)]
    pub loc: SourceLocation,
}

/// Plain template text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    pub content: String,
    #[serde(default)]
    pub loc: SourceLocation,
}

impl TextNode {
    pub fn new(content: impl Into<String>, loc: SourceLocation) -> Self {
        Self {
            content: content.into(),
            loc,
        }
    }
}

/// `<!-- content -->`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentNode {
    pub content: String,
    #[serde(default)]
    pub loc: SourceLocation,
}

impl CommentNode {
    pub fn new(content: impl Into<String>, loc: SourceLocation) -> Self {
        Self {
            content: content.into(),
            loc,
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Expressions
// ══════════════════════════════════════════════════════════════════════════════

/// An expression: a single leaf, or literal fragments mixed with
/// sub-expressions.
///
/// Untagged in JSON: a leaf has `content`, a compound has `children`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpressionNode {
    Simple(SimpleExpressionNode),
    Compound(CompoundExpressionNode),
}

impl ExpressionNode {
    /// A dynamic expression emitted verbatim.
    pub fn dynamic(content: impl Into<String>, loc: SourceLocation) -> Self {
        ExpressionNode::Simple(SimpleExpressionNode::new(content, false, loc))
    }

    /// A static value emitted as a quoted string literal.
    pub fn static_(content: impl Into<String>, loc: SourceLocation) -> Self {
        ExpressionNode::Simple(SimpleExpressionNode::new(content, true, loc))
    }

    pub fn loc(&self) -> &SourceLocation {
        match self {
            ExpressionNode::Simple(n) => &n.loc,
            ExpressionNode::Compound(n) => &n.loc,
        }
    }
}

/// A leaf expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleExpressionNode {
    pub content: String,
    /// Static content is a literal value, not code.
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub loc: SourceLocation,
}

impl SimpleExpressionNode {
    pub fn new(content: impl Into<String>, is_static: bool, loc: SourceLocation) -> Self {
        Self {
            content: content.into(),
            is_static,
            loc,
        }
    }
}

/// Raw code fragments and nested expressions, concatenated in order.
///
/// Interpolation lowers `a {{ b }} c` to something like
/// `"a " + toDisplayString(b) + " c"` through this form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundExpressionNode {
    pub children: Vec<CompoundChild>,
    #[serde(default)]
    pub loc: SourceLocation,
}

impl CompoundExpressionNode {
    pub fn new(children: Vec<CompoundChild>, loc: SourceLocation) -> Self {
        Self { children, loc }
    }
}

/// One entry of a compound expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompoundChild {
    Code(String),
    Expression(ExpressionNode),
}

impl From<&str> for CompoundChild {
    fn from(code: &str) -> Self {
        CompoundChild::Code(code.to_string())
    }
}

impl From<ExpressionNode> for CompoundChild {
    fn from(expr: ExpressionNode) -> Self {
        CompoundChild::Expression(expr)
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Control Flow
// ══════════════════════════════════════════════════════════════════════════════

/// `v-if` / `v-else-if` / `v-else` chain.
///
/// Branches are non-empty and only the last one may lack a condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfNode {
    pub branches: Vec<IfBranchNode>,
    #[serde(default)]
    pub loc: SourceLocation,
}

/// One arm of an [`IfNode`]. `condition: None` is the `else` arm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfBranchNode {
    #[serde(default)]
    pub condition: Option<ExpressionNode>,
    #[serde(default)]
    pub children: Vec<Node>,
    #[serde(default)]
    pub loc: SourceLocation,
}

impl IfBranchNode {
    pub fn new(condition: Option<ExpressionNode>, children: Vec<Node>, loc: SourceLocation) -> Self {
        Self {
            condition,
            children,
            loc,
        }
    }
}

/// `v-for="(value, key, index) in source"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForNode {
    pub source: ExpressionNode,
    #[serde(default)]
    pub value_alias: Option<ExpressionNode>,
    #[serde(default)]
    pub key_alias: Option<ExpressionNode>,
    #[serde(default)]
    pub object_index_alias: Option<ExpressionNode>,
    #[serde(default)]
    pub children: Vec<Node>,
    #[serde(default)]
    pub loc: SourceLocation,
}

impl ForNode {
    pub fn new(source: ExpressionNode, children: Vec<Node>, loc: SourceLocation) -> Self {
        Self {
            source,
            value_alias: None,
            key_alias: None,
            object_index_alias: None,
            children,
            loc,
        }
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// JavaScript Constructs
// ══════════════════════════════════════════════════════════════════════════════

/// `callee(arg, ...)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpression {
    pub callee: String,
    #[serde(default)]
    pub arguments: Vec<ListEntry>,
    #[serde(default)]
    pub loc: SourceLocation,
}

impl CallExpression {
    pub fn new(callee: impl Into<String>, arguments: Vec<ListEntry>, loc: SourceLocation) -> Self {
        Self {
            callee: callee.into(),
            arguments,
            loc,
        }
    }
}

/// `{ key: value, ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectExpression {
    pub properties: Vec<Property>,
    #[serde(default)]
    pub loc: SourceLocation,
}

/// A single `key: value` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub key: ExpressionNode,
    pub value: ExpressionNode,
    #[serde(default)]
    pub loc: SourceLocation,
}

impl Property {
    pub fn new(key: ExpressionNode, value: ExpressionNode) -> Self {
        let loc = key.loc().clone();
        Self { key, value, loc }
    }
}

/// `[element, ...]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayExpression {
    pub elements: Vec<ListEntry>,
    #[serde(default)]
    pub loc: SourceLocation,
}

/// An entry of a call argument list or array literal.
///
/// In JSON a string is raw code, an array is a nested children sequence and
/// an object is a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListEntry {
    Code(String),
    Nodes(Vec<Node>),
    Node(Node),
}

impl From<&str> for ListEntry {
    fn from(code: &str) -> Self {
        ListEntry::Code(code.to_string())
    }
}

impl From<String> for ListEntry {
    fn from(code: String) -> Self {
        ListEntry::Code(code)
    }
}

impl From<Node> for ListEntry {
    fn from(node: Node) -> Self {
        ListEntry::Node(node)
    }
}

impl From<Vec<Node>> for ListEntry {
    fn from(nodes: Vec<Node>) -> Self {
        ListEntry::Nodes(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_add_import_keeps_first_insertion_order() {
        let mut root = RootNode::new(vec![], SourceLocation::STUB);
        assert!(root.add_import("renderList"));
        assert!(root.add_import("toDisplayString"));
        assert!(!root.add_import("renderList"));
        let imports: Vec<&str> = root.imports.iter().map(String::as_str).collect();
        assert_eq!(imports, vec!["renderList", "toDisplayString"]);
    }

    #[test]
    fn test_node_loc_reaches_expression_payload() {
        let loc = SourceLocation::spanning(Position::new(3, 1, 4), "msg");
        let node = Node::Expression(ExpressionNode::dynamic("msg", loc.clone()));
        assert_eq!(node.loc(), &loc);
        assert_eq!(node.kind_name(), "expression");
    }

    #[test]
    fn test_node_json_is_tagged_by_type() {
        let node = Node::Text(TextNode::new("hi", SourceLocation::STUB));
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "Text");
        assert_eq!(json["content"], "hi");
    }

    #[test]
    fn test_list_entry_json_shapes() {
        let entries: Vec<ListEntry> = serde_json::from_str(
            r#"["\"div\"", [], {"type": "Text", "content": "x"}]"#,
        )
        .unwrap();
        assert_eq!(entries[0], ListEntry::Code("\"div\"".into()));
        assert_eq!(entries[1], ListEntry::Nodes(vec![]));
        assert!(matches!(&entries[2], ListEntry::Node(Node::Text(t)) if t.content == "x"));
    }

    #[test]
    fn test_compound_child_json_shapes() {
        let expr: ExpressionNode = serde_json::from_str(
            r#"{"children": [
                "\"a \" + ",
                {"content": "b"}
            ]}"#,
        )
        .unwrap();
        let ExpressionNode::Compound(compound) = expr else {
            panic!("expected compound expression");
        };
        assert_eq!(compound.children[0], CompoundChild::from("\"a \" + "));
        assert!(matches!(
            &compound.children[1],
            CompoundChild::Expression(ExpressionNode::Simple(s)) if s.content == "b" && !s.is_static
        ));
    }
}
