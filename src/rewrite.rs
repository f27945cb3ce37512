//! The constant rewriter: turn an eligible declaration into a const one.
//!
//! Rewriting never touches the input node; it builds and returns a new
//! declaration, annotated for the host's simplifier and formatter passes.
//! Splicing the result back into a tree is the caller's job (see `fix`).

use tracing::debug;

use crate::error::{ConstifyError, ConstifyResult};
use crate::semantics::SemanticModel;
use crate::syntax::{Annotation, Declaration, Token, TypeRef, TypeRefKind, CONST_KEYWORD};

/// Produce the constant form of `decl`.
///
/// Precondition: the declaration was judged eligible by
/// [`is_eligible`](crate::classify::is_eligible). Eligibility is not
/// re-validated, with one exception: an already-const input is a caller
/// contract error and fails with [`ConstifyError::InvalidArgument`].
///
/// The const token takes over the declaration's leading trivia, so the
/// rewritten statement keeps its visual position. An inferred type
/// placeholder is substituted with the resolved type's display name, unless
/// the placeholder is an alias to a named type or the resolved type is
/// itself literally named like the placeholder keyword; in both corner cases
/// the placeholder stays as written.
///
/// The returned node keeps the input's [`NodeId`](crate::syntax::NodeId) so
/// the caller can replace the original structurally.
pub fn make_constant<S: SemanticModel>(
    decl: &Declaration,
    semantics: &S,
) -> ConstifyResult<Declaration> {
    if decl.is_const() {
        return Err(ConstifyError::invalid_argument(
            "declaration is already const",
        ));
    }

    let mut rewritten = decl.clone();

    // move the declaration's leading trivia onto the new first token
    let leading = rewritten.take_leading_trivia();
    rewritten
        .modifiers
        .insert(0, Token::with_leading(CONST_KEYWORD, leading));

    if rewritten.ty.is_inferred() {
        substitute_inferred_type(&mut rewritten, semantics);
    }

    rewritten.annotations.push(Annotation::Reformat);
    debug!(decl = %decl.id, "rewrote declaration to const");
    Ok(rewritten)
}

/// Replace an inference placeholder with the concrete type's written form.
///
/// Leaves the placeholder untouched when:
/// - it is an alias to an unrelated named type,
/// - the host cannot resolve it,
/// - the resolved type's own name equals the placeholder keyword (a type
///   legitimately named like the inference keyword would otherwise produce
///   an ambiguous self-referential name).
fn substitute_inferred_type<S: SemanticModel>(decl: &mut Declaration, semantics: &S) {
    let TypeRefKind::Inferred { keyword } = &decl.ty.kind else {
        return;
    };

    if semantics.resolve_alias(&decl.ty).is_some() {
        debug!(decl = %decl.id, "placeholder is an alias, not substituted");
        return;
    }

    let Some(resolved) = semantics.resolve_type(&decl.ty) else {
        return;
    };

    if resolved.name == *keyword {
        debug!(decl = %decl.id, "resolved type shares the placeholder name, not substituted");
        return;
    }

    decl.ty = TypeRef {
        id: decl.ty.id,
        kind: TypeRefKind::Named(resolved.display),
        leading: std::mem::take(&mut decl.ty.leading),
        trailing: std::mem::take(&mut decl.ty.trailing),
    };
    decl.annotations.push(Annotation::SimplifyType);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantics::{ConstantValue, ResolvedType};
    use crate::syntax::{Binding, Expr, Location, NodeId};
    use crate::testing::StubSemantics;

    fn int_decl() -> Declaration {
        Declaration::new(
            NodeId(1),
            Location::new(1, 1),
            TypeRef::named(NodeId(2), "int"),
            vec![Binding::new(
                NodeId(3),
                "i",
                Some(Expr::new(NodeId(4), "0")),
            )],
        )
    }

    fn var_decl() -> Declaration {
        Declaration::new(
            NodeId(1),
            Location::new(1, 1),
            TypeRef::inferred(NodeId(2), "var"),
            vec![Binding::new(
                NodeId(3),
                "s",
                Some(Expr::new(NodeId(4), "\"abc\"")),
            )],
        )
    }

    #[test]
    fn test_inserts_const_marker() {
        let rewritten = make_constant(&int_decl(), &StubSemantics::new()).unwrap();
        assert_eq!(rewritten.render(), "const int i = 0;");
        assert!(rewritten.is_const());
        assert!(rewritten.annotations.contains(&Annotation::Reformat));
    }

    #[test]
    fn test_preserves_leading_trivia() {
        let mut decl = int_decl();
        decl.ty.leading = "    // counter\n    ".to_string();
        let rewritten = make_constant(&decl, &StubSemantics::new()).unwrap();
        assert_eq!(rewritten.render(), "    // counter\n    const int i = 0;");
    }

    #[test]
    fn test_already_const_is_rejected() {
        let rewritten = make_constant(&int_decl(), &StubSemantics::new()).unwrap();
        let err = make_constant(&rewritten, &StubSemantics::new()).unwrap_err();
        assert!(matches!(err, ConstifyError::InvalidArgument { .. }));
    }

    #[test]
    fn test_original_is_untouched() {
        let decl = int_decl();
        let _ = make_constant(&decl, &StubSemantics::new()).unwrap();
        assert_eq!(decl.render(), "int i = 0;");
        assert!(decl.annotations.is_empty());
    }

    #[test]
    fn test_inferred_type_is_substituted() {
        let semantics = StubSemantics::new()
            .with_type("var", ResolvedType::text())
            .with_constant("\"abc\"", ConstantValue::Text("abc".to_string()));
        let rewritten = make_constant(&var_decl(), &semantics).unwrap();
        assert_eq!(rewritten.render(), "const string s = \"abc\";");
        assert!(rewritten.annotations.contains(&Annotation::SimplifyType));
        assert_eq!(rewritten.ty.id, NodeId(2));
    }

    #[test]
    fn test_alias_placeholder_is_left_untouched() {
        let semantics = StubSemantics::new()
            .with_type("var", ResolvedType::text())
            .with_alias("var", ResolvedType::text());
        let rewritten = make_constant(&var_decl(), &semantics).unwrap();
        assert_eq!(rewritten.render(), "const var s = \"abc\";");
        assert!(!rewritten.annotations.contains(&Annotation::SimplifyType));
    }

    #[test]
    fn test_type_named_like_placeholder_is_left_untouched() {
        let semantics =
            StubSemantics::new().with_type("var", ResolvedType::reference("var"));
        let rewritten = make_constant(&var_decl(), &semantics).unwrap();
        assert_eq!(rewritten.render(), "const var s = \"abc\";");
        assert!(!rewritten.annotations.contains(&Annotation::SimplifyType));
    }

    #[test]
    fn test_unresolvable_placeholder_is_left_untouched() {
        let rewritten = make_constant(&var_decl(), &StubSemantics::new()).unwrap();
        assert_eq!(rewritten.render(), "const var s = \"abc\";");
    }

    #[test]
    fn test_substituted_type_keeps_surrounding_trivia() {
        let mut decl = var_decl();
        decl.ty.trailing = "  ".to_string();
        let semantics = StubSemantics::new().with_type("var", ResolvedType::text());
        let rewritten = make_constant(&decl, &semantics).unwrap();
        assert_eq!(rewritten.render(), "const string  s = \"abc\";");
    }
}
