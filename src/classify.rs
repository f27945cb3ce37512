//! Const-eligibility classification.
//!
//! A pure predicate over a declaration and the host's semantic model. Rules
//! run in order and short-circuit on the first failure; a declaration is
//! eligible only when every binding passes every rule. Any query the host
//! cannot answer makes the declaration ineligible (fail closed).

use tracing::debug;

use crate::semantics::SemanticModel;
use crate::syntax::Declaration;

/// Decide whether `decl` can safely be converted to a constant declaration.
///
/// Checks, in order:
/// 1. the declaration does not already carry the constant marker;
/// 2. every binding has an initializer;
/// 3. every initializer constant-folds to a statically known value;
/// 4. the declared type resolves to a known type;
/// 5. the constant converts to the declared type by identity or a built-in
///    implicit conversion (user-defined conversions disqualify);
/// 6. a textual constant requires exactly the built-in string type, and a
///    null constant requires a reference type;
/// 7. no binding is written to outside the declaration's usage region.
///
/// No side effects; safe to call concurrently over independent declarations.
pub fn is_eligible<S: SemanticModel>(decl: &Declaration, semantics: &S) -> bool {
    if decl.is_const() {
        return false;
    }

    for binding in &decl.bindings {
        let Some(initializer) = &binding.initializer else {
            debug!(decl = %decl.id, binding = %binding.name, "ineligible: no initializer");
            return false;
        };

        let Some(value) = semantics.evaluate_constant(initializer).constant() else {
            debug!(decl = %decl.id, binding = %binding.name, "ineligible: initializer is not a compile-time constant");
            return false;
        };

        let Some(declared) = semantics.resolve_type(&decl.ty) else {
            debug!(decl = %decl.id, "ineligible: declared type did not resolve");
            return false;
        };

        // the constant must reach the declared type without running user code
        if !semantics
            .classify_conversion(initializer, &declared)
            .permits_constant()
        {
            debug!(decl = %decl.id, binding = %binding.name, "ineligible: conversion missing or user-defined");
            return false;
        }

        // a textual constant may only live in the built-in string type, not
        // in an arbitrary reference type a string literal converts to
        if value.is_text() && !declared.is_builtin_text() {
            return false;
        }

        // a null constant needs a reference type; nullable value wrappers
        // do not qualify
        if value.is_null() && !declared.is_reference() {
            return false;
        }
    }

    // writes through captures or refs outside the declaring scope
    // disqualify the whole declaration
    let written_outside = semantics.written_outside(decl);
    for binding in &decl.bindings {
        if written_outside.contains(&binding.name) {
            debug!(decl = %decl.id, binding = %binding.name, "ineligible: written outside usage region");
            return false;
        }
    }

    true
}
