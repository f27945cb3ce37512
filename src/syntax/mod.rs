//! Syntax handles over the host front end's tree.
//!
//! - [`token`]: tokens with leading/trailing trivia
//! - [`decl`]: declarations, bindings, type references, annotations
//! - [`tree`]: persistent source units with structural replacement

pub mod decl;
pub mod token;
pub mod tree;

pub use decl::{
    Annotation, Binding, Declaration, Expr, Location, NodeId, TypeRef, TypeRefKind, CONST_KEYWORD,
};
pub use token::Token;
pub use tree::SourceUnit;
