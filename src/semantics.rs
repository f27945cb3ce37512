//! The semantic collaborator interface.
//!
//! Everything that requires real language knowledge lives behind
//! [`SemanticModel`]: constant folding, type resolution, conversion
//! classification, alias lookup, and data-flow analysis. The host front end
//! implements it; this crate only asks questions and acts on the answers.
//!
//! All queries are read-only. Implementations must be safe for concurrent
//! read access when the parallel driver is used (`Sync`).

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::syntax::{Declaration, Expr, TypeRef};

/// A compile-time constant value, as produced by the host's constant folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConstantValue {
    /// The null/absence value.
    Null,
    Bool(bool),
    Int(i128),
    Float(f64),
    /// A textual value; subject to the exact-string-type rule.
    Text(String),
}

impl ConstantValue {
    pub fn is_text(&self) -> bool {
        matches!(self, ConstantValue::Text(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ConstantValue::Null)
    }
}

/// Outcome of asking the host to constant-fold an expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConstantValueResult {
    /// The expression folds to a compile-time constant.
    Constant(ConstantValue),
    /// The expression is known not to be a compile-time constant.
    NotConstant,
    /// The host could not answer. Treated exactly like [`Self::NotConstant`]:
    /// eligibility fails closed, never assumes.
    Unknown,
}

impl ConstantValueResult {
    /// The constant value, if the expression folded to one.
    ///
    /// `NotConstant` and `Unknown` both yield `None`.
    pub fn constant(self) -> Option<ConstantValue> {
        match self {
            ConstantValueResult::Constant(v) => Some(v),
            ConstantValueResult::NotConstant | ConstantValueResult::Unknown => None,
        }
    }
}

/// Storage classification of a resolved type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeKind {
    /// A plain value type (e.g. a machine integer).
    Value,
    /// A nullable wrapper around a value type. Not reference-like: a null
    /// constant cannot be stored in it as a const.
    NullableValue,
    /// A reference type other than the built-in string type.
    Reference,
    /// The built-in string type. A reference type, and the only type allowed
    /// to hold a textual constant.
    BuiltinText,
}

/// A type as resolved by the host, after inference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedType {
    /// Simple name, used for the placeholder-named-type guard.
    pub name: String,
    /// Displayable (possibly qualified) name, used for substitution.
    pub display: String,
    pub kind: TypeKind,
}

impl ResolvedType {
    pub fn new(name: impl Into<String>, display: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            display: display.into(),
            kind,
        }
    }

    /// A value type whose display name equals its simple name.
    pub fn value(name: impl Into<String>) -> Self {
        let name = name.into();
        let display = name.clone();
        Self::new(name, display, TypeKind::Value)
    }

    /// A nullable wrapper around a value type.
    pub fn nullable_value(name: impl Into<String>) -> Self {
        let name = name.into();
        let display = name.clone();
        Self::new(name, display, TypeKind::NullableValue)
    }

    /// A reference type whose display name equals its simple name.
    pub fn reference(name: impl Into<String>) -> Self {
        let name = name.into();
        let display = name.clone();
        Self::new(name, display, TypeKind::Reference)
    }

    /// The built-in string type.
    pub fn text() -> Self {
        Self::new("string", "string", TypeKind::BuiltinText)
    }

    /// Whether values of this type live behind a reference.
    ///
    /// Nullable value wrappers are not reference-like.
    pub fn is_reference(&self) -> bool {
        matches!(self.kind, TypeKind::Reference | TypeKind::BuiltinText)
    }

    /// Whether this is exactly the built-in string type.
    pub fn is_builtin_text(&self) -> bool {
        self.kind == TypeKind::BuiltinText
    }
}

/// How a constant's natural type reaches the declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Conversion {
    /// No conversion exists.
    None,
    /// Identity or a built-in implicit conversion (e.g. numeric widening).
    /// The only classification that permits const eligibility.
    ImplicitBuiltin,
    /// Requires a user-defined conversion operator. Disqualifies eligibility
    /// even when it would succeed at runtime: constant folding must complete
    /// without executing user code.
    UserDefined,
}

impl Conversion {
    /// Whether this conversion is acceptable for a constant declaration.
    pub fn permits_constant(&self) -> bool {
        matches!(self, Conversion::ImplicitBuiltin)
    }
}

/// The host front end's semantic services, queried read-only.
///
/// Any query the host cannot answer is reported through the type itself
/// (`Unknown`, `None`) and the classifier fails closed.
pub trait SemanticModel {
    /// Constant-fold an expression.
    fn evaluate_constant(&self, expr: &Expr) -> ConstantValueResult;

    /// Resolve a type reference to its concrete type after inference.
    /// `None` means the type is unknown or erroneous.
    fn resolve_type(&self, ty: &TypeRef) -> Option<ResolvedType>;

    /// Classify the conversion from an expression's natural type to `target`.
    fn classify_conversion(&self, expr: &Expr, target: &ResolvedType) -> Conversion;

    /// Whether a type reference is an alias to another named type.
    /// `Some` means the written token is an alias and must not be substituted.
    fn resolve_alias(&self, ty: &TypeRef) -> Option<ResolvedType>;

    /// Data-flow analysis over the declaration's usage region: the names of
    /// all symbols written to outside that region.
    fn written_outside(&self, decl: &Declaration) -> HashSet<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_folds_to_none() {
        assert_eq!(ConstantValueResult::Unknown.constant(), None);
        assert_eq!(ConstantValueResult::NotConstant.constant(), None);
        assert_eq!(
            ConstantValueResult::Constant(ConstantValue::Int(3)).constant(),
            Some(ConstantValue::Int(3))
        );
    }

    #[test]
    fn test_nullable_value_is_not_reference_like() {
        assert!(!ResolvedType::nullable_value("int?").is_reference());
        assert!(ResolvedType::reference("object").is_reference());
        assert!(ResolvedType::text().is_reference());
    }

    #[test]
    fn test_only_implicit_builtin_permits_constants() {
        assert!(Conversion::ImplicitBuiltin.permits_constant());
        assert!(!Conversion::UserDefined.permits_constant());
        assert!(!Conversion::None.permits_constant());
    }
}
