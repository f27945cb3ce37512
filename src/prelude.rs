//! Prelude module for convenient imports.
//!
//! Import commonly used types with a single line:
//!
//! ```rust,ignore
//! use constify::prelude::*;
//! ```

// Core analysis types
pub use crate::error::{ConstifyError, ConstifyResult};
pub use crate::syntax::{
    Annotation, Binding, Declaration, Expr, Location, NodeId, SourceUnit, Token, TypeRef,
    TypeRefKind, CONST_KEYWORD,
};

// Semantic collaborator interface
pub use crate::semantics::{
    ConstantValue, ConstantValueResult, Conversion, ResolvedType, SemanticModel, TypeKind,
};

// Classification
pub use crate::classify::is_eligible;

// Rewriting and fix application
#[cfg(feature = "fix")]
pub use crate::fix::{apply_fix, fix_all};
#[cfg(feature = "fix")]
pub use crate::rewrite::make_constant;

// Driver and findings
pub use crate::analyzer::{
    analyze_unit, AnalysisResult, ConstAnalysis, Finding, FindingSink, Severity, MAKE_CONST_RULE,
};
#[cfg(feature = "parallel")]
pub use crate::analyzer::analyze_unit_parallel;

// Configuration and reporting
pub use crate::config::{load_config, ConstifyConfig};
pub use crate::report::{print, ReportFormat};

// Test tooling
pub use crate::testing::StubSemantics;
