//! Declaration syntax: the nodes the classifier and rewriter operate on.
//!
//! These are lightweight handles over the host front end's real syntax tree.
//! The front end assigns every node a stable [`NodeId`] and keeps the source
//! text of expressions and type references; all semantic meaning (constant
//! values, resolved types, conversions, data flow) stays behind the
//! [`SemanticModel`](crate::semantics::SemanticModel) trait.
//!
//! Nodes are immutable in spirit: nothing in this crate mutates a declaration
//! owned by a caller. Rewriting clones, edits the clone, and returns it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::token::Token;

/// Stable identity of a node within its tree, assigned by the front end.
///
/// A rewritten node keeps the id of the node it replaces, so callers can
/// splice it back with [`SourceUnit::replace`](super::tree::SourceUnit::replace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Source position of a declaration, 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// An expression handle: the initializer text plus its node id.
///
/// The classifier never evaluates expressions itself; it hands them to the
/// semantic collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expr {
    pub id: NodeId,
    pub text: String,
}

impl Expr {
    pub fn new(id: NodeId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// The written form of a declaration's type position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeRefKind {
    /// An explicit type name as written in source.
    Named(String),
    /// An inference placeholder (e.g. `var`); the front end deduces the
    /// concrete type from the initializer.
    Inferred { keyword: String },
}

/// A type reference as written, with its surrounding trivia.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    pub id: NodeId,
    pub kind: TypeRefKind,
    pub leading: String,
    pub trailing: String,
}

impl TypeRef {
    /// An explicit type name with no leading trivia and one trailing space.
    pub fn named(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            kind: TypeRefKind::Named(name.into()),
            leading: String::new(),
            trailing: " ".to_string(),
        }
    }

    /// An inference placeholder with no leading trivia and one trailing space.
    pub fn inferred(id: NodeId, keyword: impl Into<String>) -> Self {
        Self {
            id,
            kind: TypeRefKind::Inferred {
                keyword: keyword.into(),
            },
            leading: String::new(),
            trailing: " ".to_string(),
        }
    }

    /// Whether this is an inference placeholder rather than a written name.
    pub fn is_inferred(&self) -> bool {
        matches!(self.kind, TypeRefKind::Inferred { .. })
    }

    /// The text as written in source: the name, or the placeholder keyword.
    pub fn text(&self) -> &str {
        match &self.kind {
            TypeRefKind::Named(name) => name,
            TypeRefKind::Inferred { keyword } => keyword,
        }
    }

    /// Render the type reference as source text, trivia included.
    pub fn render(&self) -> String {
        format!("{}{}{}", self.leading, self.text(), self.trailing)
    }
}

/// A single named binding within a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub id: NodeId,
    pub name: String,
    /// `None` for an uninitialized binding; never eligible for const.
    pub initializer: Option<Expr>,
}

impl Binding {
    pub fn new(id: NodeId, name: impl Into<String>, initializer: Option<Expr>) -> Self {
        Self {
            id,
            name: name.into(),
            initializer,
        }
    }

    fn render(&self) -> String {
        match &self.initializer {
            Some(init) => format!("{} = {}", self.name, init.text),
            None => self.name.clone(),
        }
    }
}

/// Marks left on a rewritten declaration for downstream passes owned by the
/// host (a simplifier and a formatter, both external collaborators).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Annotation {
    /// The substituted type name may be shortened (qualifier elision).
    SimplifyType,
    /// The node should be re-run through the host's formatter.
    Reformat,
}

/// One statement introducing one or more named bindings.
///
/// A declaration is const-eligible only if every binding in it satisfies
/// every eligibility rule; partial eligibility is not supported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub id: NodeId,
    pub location: Location,
    /// Modifier tokens in written order (e.g. `const`).
    pub modifiers: Vec<Token>,
    pub ty: TypeRef,
    pub bindings: Vec<Binding>,
    /// Marks for downstream host passes; empty until a rewrite adds them.
    pub annotations: Vec<Annotation>,
}

impl Declaration {
    pub fn new(id: NodeId, location: Location, ty: TypeRef, bindings: Vec<Binding>) -> Self {
        Self {
            id,
            location,
            modifiers: Vec::new(),
            ty,
            bindings,
            annotations: Vec::new(),
        }
    }

    /// Whether the declaration already carries the constant marker.
    pub fn is_const(&self) -> bool {
        self.modifiers.iter().any(|m| m.text == CONST_KEYWORD)
    }

    /// Leading trivia of the declaration's first token.
    pub fn leading_trivia(&self) -> &str {
        match self.modifiers.first() {
            Some(tok) => &tok.leading,
            None => &self.ty.leading,
        }
    }

    /// Clear the first token's leading trivia, returning what was there.
    pub(crate) fn take_leading_trivia(&mut self) -> String {
        match self.modifiers.first_mut() {
            Some(tok) => std::mem::take(&mut tok.leading),
            None => std::mem::take(&mut self.ty.leading),
        }
    }

    /// Render the declaration as source text, trivia included.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for m in &self.modifiers {
            out.push_str(&m.render());
        }
        out.push_str(&self.ty.render());
        let bindings: Vec<String> = self.bindings.iter().map(Binding::render).collect();
        out.push_str(&bindings.join(", "));
        out.push(';');
        out
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// The constant-marker keyword inserted by the rewriter.
pub const CONST_KEYWORD: &str = "const";

#[cfg(test)]
mod tests {
    use super::*;

    fn simple_decl() -> Declaration {
        Declaration::new(
            NodeId(1),
            Location::new(3, 5),
            TypeRef::named(NodeId(2), "int"),
            vec![Binding::new(
                NodeId(3),
                "i",
                Some(Expr::new(NodeId(4), "0")),
            )],
        )
    }

    #[test]
    fn test_render_plain_declaration() {
        assert_eq!(simple_decl().render(), "int i = 0;");
    }

    #[test]
    fn test_render_multiple_bindings() {
        let mut decl = simple_decl();
        decl.bindings
            .push(Binding::new(NodeId(5), "j", Some(Expr::new(NodeId(6), "1"))));
        assert_eq!(decl.render(), "int i = 0, j = 1;");
    }

    #[test]
    fn test_render_uninitialized_binding() {
        let mut decl = simple_decl();
        decl.bindings[0].initializer = None;
        assert_eq!(decl.render(), "int i;");
    }

    #[test]
    fn test_is_const_detects_marker() {
        let mut decl = simple_decl();
        assert!(!decl.is_const());
        decl.modifiers.insert(0, Token::new(CONST_KEYWORD));
        assert!(decl.is_const());
        assert_eq!(decl.render(), "const int i = 0;");
    }

    #[test]
    fn test_leading_trivia_lives_on_first_token() {
        let mut decl = simple_decl();
        decl.ty.leading = "    ".to_string();
        assert_eq!(decl.leading_trivia(), "    ");

        decl.modifiers.push(Token::with_leading("static", "  "));
        assert_eq!(decl.leading_trivia(), "  ");
    }

    #[test]
    fn test_take_leading_trivia_clears_and_returns() {
        let mut decl = simple_decl();
        decl.ty.leading = "    ".to_string();
        let taken = decl.take_leading_trivia();
        assert_eq!(taken, "    ");
        assert_eq!(decl.ty.leading, "");
    }
}
