//! Persistent source unit: structural replacement without mutation.
//!
//! The host front end owns the real syntax tree. A [`SourceUnit`] is the
//! slice of it this crate sees: the declaration statements, in source order.
//! Replacement never mutates in place; it builds a new unit with the target
//! node swapped out, leaving the original intact for whoever still holds it.

use serde::{Deserialize, Serialize};

use super::decl::{Declaration, NodeId};
use crate::error::{ConstifyError, ConstifyResult};

/// An immutable sequence of declarations, replaced structurally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceUnit {
    declarations: Vec<Declaration>,
}

impl SourceUnit {
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Self { declarations }
    }

    /// Declarations in source order.
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Find a declaration by node id.
    pub fn find(&self, id: NodeId) -> Option<&Declaration> {
        self.declarations.iter().find(|d| d.id == id)
    }

    /// Produce a new unit with the declaration `id` replaced.
    ///
    /// The receiver is untouched; the returned unit shares nothing mutable
    /// with it. Fails with [`ConstifyError::NodeNotFound`] when `id` does not
    /// name a declaration in this unit.
    pub fn replace(&self, id: NodeId, replacement: Declaration) -> ConstifyResult<SourceUnit> {
        if self.find(id).is_none() {
            return Err(ConstifyError::node_not_found(id));
        }
        let declarations = self
            .declarations
            .iter()
            .map(|d| {
                if d.id == id {
                    replacement.clone()
                } else {
                    d.clone()
                }
            })
            .collect();
        Ok(SourceUnit { declarations })
    }

    /// Render the whole unit as source text, one declaration per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for decl in &self.declarations {
            out.push_str(&decl.render());
            out.push('\n');
        }
        out
    }
}
