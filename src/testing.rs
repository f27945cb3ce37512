//! A programmable semantic model for tests and host prototyping.
//!
//! [`StubSemantics`] answers queries from tables keyed by node text: register
//! the constant values, resolved types, conversions, aliases, and outside
//! writes a scenario needs, and everything unregistered fails closed exactly
//! the way a real front end reports "unknown".

use std::collections::{HashMap, HashSet};

use crate::semantics::{
    ConstantValue, ConstantValueResult, Conversion, ResolvedType, SemanticModel,
};
use crate::syntax::{Declaration, Expr, TypeRef};

/// Table-driven [`SemanticModel`] implementation.
///
/// # Example
///
/// ```rust,ignore
/// let semantics = StubSemantics::new()
///     .with_type("int", ResolvedType::value("int"))
///     .with_constant("0", ConstantValue::Int(0));
/// assert!(is_eligible(&decl, &semantics));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StubSemantics {
    /// Constant values by initializer text.
    constants: HashMap<String, ConstantValue>,
    /// Resolved types by type-reference text (a name or a placeholder keyword).
    types: HashMap<String, ResolvedType>,
    /// Conversion overrides by (initializer text, target type name).
    conversions: HashMap<(String, String), Conversion>,
    /// Alias targets by type-reference text.
    aliases: HashMap<String, ResolvedType>,
    /// Symbol names written outside their declaration's usage region.
    written_outside: HashSet<String>,
}

impl StubSemantics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constant-folding result for an initializer.
    pub fn with_constant(mut self, expr_text: impl Into<String>, value: ConstantValue) -> Self {
        self.constants.insert(expr_text.into(), value);
        self
    }

    /// Register a resolved type for a written type name or placeholder keyword.
    pub fn with_type(mut self, ty_text: impl Into<String>, resolved: ResolvedType) -> Self {
        self.types.insert(ty_text.into(), resolved);
        self
    }

    /// Override the conversion classification for a specific initializer and
    /// target type. Unregistered pairs default to
    /// [`Conversion::ImplicitBuiltin`].
    pub fn with_conversion(
        mut self,
        expr_text: impl Into<String>,
        target_name: impl Into<String>,
        conversion: Conversion,
    ) -> Self {
        self.conversions
            .insert((expr_text.into(), target_name.into()), conversion);
        self
    }

    /// Declare a written type reference to be an alias to `target`.
    pub fn with_alias(mut self, ty_text: impl Into<String>, target: ResolvedType) -> Self {
        self.aliases.insert(ty_text.into(), target);
        self
    }

    /// Record a symbol as written outside its declaration's usage region.
    pub fn with_outside_write(mut self, name: impl Into<String>) -> Self {
        self.written_outside.insert(name.into());
        self
    }
}

impl SemanticModel for StubSemantics {
    fn evaluate_constant(&self, expr: &Expr) -> ConstantValueResult {
        match self.constants.get(&expr.text) {
            Some(value) => ConstantValueResult::Constant(value.clone()),
            None => ConstantValueResult::NotConstant,
        }
    }

    fn resolve_type(&self, ty: &TypeRef) -> Option<ResolvedType> {
        self.types.get(ty.text()).cloned()
    }

    fn classify_conversion(&self, expr: &Expr, target: &ResolvedType) -> Conversion {
        self.conversions
            .get(&(expr.text.clone(), target.name.clone()))
            .copied()
            .unwrap_or(Conversion::ImplicitBuiltin)
    }

    fn resolve_alias(&self, ty: &TypeRef) -> Option<ResolvedType> {
        self.aliases.get(ty.text()).cloned()
    }

    fn written_outside(&self, decl: &Declaration) -> HashSet<String> {
        decl.bindings
            .iter()
            .filter(|b| self.written_outside.contains(&b.name))
            .map(|b| b.name.clone())
            .collect()
    }
}
