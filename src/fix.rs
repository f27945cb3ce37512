//! Applying rewrites back into a source unit.
//!
//! The rewriter produces a detached node; these helpers splice it into the
//! persistent tree, either for one accepted finding or in batch for every
//! eligible declaration. The input unit is never mutated.

use tracing::debug;

use crate::classify::is_eligible;
use crate::error::{ConstifyError, ConstifyResult};
use crate::rewrite::make_constant;
use crate::semantics::SemanticModel;
use crate::syntax::{NodeId, SourceUnit};

/// Rewrite the declaration `id` to const and return the new unit.
///
/// This is the accept action for a single finding. Fails with
/// [`ConstifyError::NodeNotFound`] when `id` names no declaration, and
/// propagates the rewriter's contract error for an already-const target.
pub fn apply_fix<S: SemanticModel>(
    unit: &SourceUnit,
    id: NodeId,
    semantics: &S,
) -> ConstifyResult<SourceUnit> {
    let decl = unit.find(id).ok_or_else(|| ConstifyError::node_not_found(id))?;
    let rewritten = make_constant(decl, semantics)?;
    unit.replace(id, rewritten)
}

/// Rewrite every eligible declaration in `unit`.
///
/// Classification runs per declaration against the original unit; each
/// rewrite is then applied in source order. Returns the new unit and the
/// number of declarations rewritten.
pub fn fix_all<S: SemanticModel>(
    unit: &SourceUnit,
    semantics: &S,
) -> ConstifyResult<(SourceUnit, usize)> {
    let eligible: Vec<NodeId> = unit
        .declarations()
        .iter()
        .filter(|decl| is_eligible(decl, semantics))
        .map(|decl| decl.id)
        .collect();

    let mut fixed = unit.clone();
    for id in &eligible {
        fixed = apply_fix(&fixed, *id, semantics)?;
    }

    debug!(rewritten = eligible.len(), "batch fix complete");
    Ok((fixed, eligible.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantics::{ConstantValue, ResolvedType};
    use crate::syntax::{Binding, Declaration, Expr, Location, TypeRef};
    use crate::testing::StubSemantics;

    fn int_decl(id: u32, name: &str, init: Option<&str>) -> Declaration {
        Declaration::new(
            NodeId(id),
            Location::new(id, 1),
            TypeRef::named(NodeId(id + 100), "int"),
            vec![Binding::new(
                NodeId(id + 200),
                name,
                init.map(|text| Expr::new(NodeId(id + 300), text)),
            )],
        )
    }

    fn semantics() -> StubSemantics {
        StubSemantics::new()
            .with_type("int", ResolvedType::value("int"))
            .with_constant("0", ConstantValue::Int(0))
    }

    #[test]
    fn test_apply_fix_replaces_only_the_target() {
        let unit = SourceUnit::new(vec![int_decl(1, "a", Some("0")), int_decl(2, "b", Some("0"))]);
        let fixed = apply_fix(&unit, NodeId(1), &semantics()).unwrap();
        assert_eq!(fixed.render(), "const int a = 0;\nint b = 0;\n");
        // original untouched
        assert_eq!(unit.render(), "int a = 0;\nint b = 0;\n");
    }

    #[test]
    fn test_apply_fix_unknown_id_fails() {
        let unit = SourceUnit::new(vec![int_decl(1, "a", Some("0"))]);
        let err = apply_fix(&unit, NodeId(42), &semantics()).unwrap_err();
        assert!(matches!(err, ConstifyError::NodeNotFound { .. }));
    }

    #[test]
    fn test_fix_all_skips_ineligible_declarations() {
        let unit = SourceUnit::new(vec![
            int_decl(1, "a", Some("0")),
            int_decl(2, "b", None),
            int_decl(3, "c", Some("0")),
        ]);
        let (fixed, count) = fix_all(&unit, &semantics()).unwrap();
        assert_eq!(count, 2);
        assert_eq!(
            fixed.render(),
            "const int a = 0;\nint b = 0;\nconst int c = 0;\n"
        );
    }

    #[test]
    fn test_fix_all_on_clean_unit_is_a_no_op() {
        let unit = SourceUnit::new(vec![int_decl(1, "a", None)]);
        let (fixed, count) = fix_all(&unit, &semantics()).unwrap();
        assert_eq!(count, 0);
        assert_eq!(fixed, unit);
    }
}
