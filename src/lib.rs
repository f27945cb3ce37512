//! constify: const-eligibility analysis and rewriting for compiler hosts
//!
//! This library decides whether variable declarations can safely become
//! constant declarations, and rewrites the eligible ones. Parsing, type
//! binding, constant folding, and data-flow analysis are supplied by the
//! host front end through the [`SemanticModel`](semantics::SemanticModel)
//! trait; this crate asks questions and acts on the answers.
//!
//! # Features
//!
//! - **Eligibility classification**: seven ordered rules over every binding
//!   of a declaration, failing closed on any unanswerable semantic query
//! - **Safe rewriting**: trivia-preserving const insertion, inferred-type
//!   placeholder substitution with alias and name-collision guards
//! - **Persistent trees**: rewrites produce new nodes and units, originals
//!   are never mutated
//! - **Batch fixing**: rewrite every eligible declaration in one pass
//! - **Parallel classification**: declarations are independent, so the
//!   driver can classify them concurrently
//!
//! # Quick Start
//!
//! Use the [`prelude`] module for convenient imports:
//!
//! ```rust,ignore
//! use constify::prelude::*;
//!
//! let result = ConstAnalysis::new()
//!     .auto_fix(true)
//!     .run(&unit, &semantics)?;
//!
//! for finding in &result.findings {
//!     println!("{}: {}", finding.location, finding.message);
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`syntax`]: declaration nodes, trivia-carrying tokens, persistent units
//! - [`semantics`]: the host collaborator trait and its value types
//! - [`classify`]: the eligibility classifier
//! - [`rewrite`]: the const rewriter
//! - [`fix`]: splicing rewrites back into units, batch fixing
//! - [`analyzer`]: the driver, findings, and the builder API
//! - [`report`]: plain and JSON finding output
//! - [`config`]: constify.toml loading
//! - [`error`]: typed error handling
//! - [`testing`]: a programmable semantic model for tests
//!
//! # Cargo Features
//!
//! - `fix` (default): Enable the rewriter and fix application
//! - `parallel` (default): Enable parallel classification
//! - `full`: Enable all optional features

// Core modules (always available)
pub mod analyzer;
pub mod classify;
pub mod config;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod report;
pub mod semantics;
pub mod syntax;
pub mod testing;

// Feature-gated modules
#[cfg(feature = "fix")]
pub mod fix;

#[cfg(feature = "fix")]
pub mod rewrite;

// ============================================================================
// Explicit Re-exports (avoiding glob imports for clear API surface)
// ============================================================================

// Error types
pub use error::{ConstifyError, ConstifyResult};

// Syntax model
pub use syntax::{
    Annotation, Binding, Declaration, Expr, Location, NodeId, SourceUnit, Token, TypeRef,
    TypeRefKind, CONST_KEYWORD,
};

// Semantic collaborator interface
pub use semantics::{
    ConstantValue, ConstantValueResult, Conversion, ResolvedType, SemanticModel, TypeKind,
};

// Classification
pub use classify::is_eligible;

// Driver and builder API
pub use analyzer::{
    analyze_unit, AnalysisResult, ConstAnalysis, Finding, FindingSink, Severity, MAKE_CONST_RULE,
};

// Configuration
pub use config::{load_config, AnalysisConfig, ConstifyConfig, FixConfig, OutputConfig};

// Logging
pub use logging::init_structured_logging;

// Reporting
pub use report::{print, print_json, print_plain, ReportFormat};

// Test tooling
pub use testing::StubSemantics;

// Feature-gated re-exports
#[cfg(feature = "parallel")]
pub use analyzer::analyze_unit_parallel;

#[cfg(feature = "fix")]
pub use fix::{apply_fix, fix_all};

#[cfg(feature = "fix")]
pub use rewrite::make_constant;
