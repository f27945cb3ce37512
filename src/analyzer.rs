//! The analysis driver: walk a unit, classify, report findings.
//!
//! The host feeds declaration nodes in; every eligible one produces a
//! [`Finding`] delivered to a [`FindingSink`]. Findings live for one pass and
//! are discarded after consumption (report or fix).
//!
//! [`ConstAnalysis`] is the fluent front door:
//!
//! ```rust,ignore
//! use constify::prelude::*;
//!
//! let result = ConstAnalysis::new()
//!     .with_severity(Severity::Warning)
//!     .parallel(true)
//!     .auto_fix(true)
//!     .run(&unit, &semantics)?;
//!
//! for finding in &result.findings {
//!     println!("{} at {}", finding.message, finding.location);
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::classify::is_eligible;
use crate::error::ConstifyResult;
use crate::semantics::SemanticModel;
use crate::syntax::{Declaration, Location, NodeId, SourceUnit};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Rule identifier attached to every finding this analysis produces.
pub const MAKE_CONST_RULE: &str = "make-const";

/// How a reporting host should surface a finding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    #[default]
    Warning,
    Error,
}

/// One eligibility verdict attached to a declaration's source location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub rule: String,
    pub declaration: NodeId,
    pub location: Location,
    pub eligible: bool,
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    fn for_declaration(decl: &Declaration, eligible: bool, severity: Severity) -> Self {
        let message = if eligible {
            "can be made const".to_string()
        } else {
            "cannot be made const".to_string()
        };
        Self {
            rule: MAKE_CONST_RULE.to_string(),
            declaration: decl.id,
            location: decl.location,
            eligible,
            severity,
            message,
        }
    }
}

/// Consumer of findings; the host decides what reporting means.
pub trait FindingSink {
    fn report(&mut self, finding: Finding);
}

/// The simplest sink: collect findings into a vector.
impl FindingSink for Vec<Finding> {
    fn report(&mut self, finding: Finding) {
        self.push(finding);
    }
}

/// Classify every declaration in `unit` and report a finding for each
/// eligible one. Returns the number of eligible declarations.
pub fn analyze_unit<S: SemanticModel>(
    unit: &SourceUnit,
    semantics: &S,
    sink: &mut dyn FindingSink,
) -> usize {
    let mut eligible_count = 0;
    for decl in unit.declarations() {
        if is_eligible(decl, semantics) {
            eligible_count += 1;
            sink.report(Finding::for_declaration(decl, true, Severity::Warning));
        }
    }
    eligible_count
}

/// Parallel counterpart of [`analyze_unit`]: classify every declaration
/// concurrently, then report findings to the sink sequentially in source
/// order. Verdicts are identical to the sequential driver's.
#[cfg(feature = "parallel")]
pub fn analyze_unit_parallel<S: SemanticModel + Sync>(
    unit: &SourceUnit,
    semantics: &S,
    sink: &mut dyn FindingSink,
) -> usize {
    let verdicts = verdicts(unit, semantics, true);
    let mut eligible_count = 0;
    for (decl, eligible) in unit.declarations().iter().zip(verdicts) {
        if eligible {
            eligible_count += 1;
            sink.report(Finding::for_declaration(decl, true, Severity::Warning));
        }
    }
    eligible_count
}

/// Per-declaration verdicts in source order.
///
/// The classifier is a pure predicate over immutable inputs, so the parallel
/// path is a straight data-parallel map; sequential and parallel runs agree.
fn verdicts<S: SemanticModel + Sync>(unit: &SourceUnit, semantics: &S, parallel: bool) -> Vec<bool> {
    #[cfg(feature = "parallel")]
    if parallel {
        return unit
            .declarations()
            .par_iter()
            .map(|decl| is_eligible(decl, semantics))
            .collect();
    }
    let _ = parallel;
    unit.declarations()
        .iter()
        .map(|decl| is_eligible(decl, semantics))
        .collect()
}

/// Builder for configuring one analysis pass.
#[derive(Debug, Clone)]
pub struct ConstAnalysis {
    severity: Severity,
    report_ineligible: bool,
    parallel: bool,
    #[cfg(feature = "fix")]
    auto_fix: bool,
}

impl Default for ConstAnalysis {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstAnalysis {
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
            report_ineligible: false,
            parallel: false,
            #[cfg(feature = "fix")]
            auto_fix: false,
        }
    }

    /// Build an analysis from a loaded `constify.toml`.
    pub fn from_config(config: &crate::config::ConstifyConfig) -> Self {
        let mut analysis = Self::new();
        if let Some(cfg) = &config.analysis {
            if let Some(severity) = cfg.severity {
                analysis.severity = severity;
            }
            if let Some(report_ineligible) = cfg.report_ineligible {
                analysis.report_ineligible = report_ineligible;
            }
            if let Some(parallel) = cfg.parallel {
                analysis.parallel = parallel;
            }
        }
        #[cfg(feature = "fix")]
        if let Some(fix) = &config.fix {
            if let Some(enabled) = fix.enabled {
                analysis.auto_fix = enabled;
            }
        }
        analysis
    }

    /// Severity attached to findings.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Also report ineligible declarations (verdict `false`).
    pub fn report_ineligible(mut self, enabled: bool) -> Self {
        self.report_ineligible = enabled;
        self
    }

    /// Classify declarations in parallel. No effect unless the `parallel`
    /// feature is enabled.
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Rewrite every eligible declaration, returning the fixed unit in
    /// [`AnalysisResult::fixed`].
    #[cfg(feature = "fix")]
    pub fn auto_fix(mut self, enabled: bool) -> Self {
        self.auto_fix = enabled;
        self
    }

    /// Run the analysis over one unit.
    pub fn run<S: SemanticModel + Sync>(
        &self,
        unit: &SourceUnit,
        semantics: &S,
    ) -> ConstifyResult<AnalysisResult> {
        let verdicts = verdicts(unit, semantics, self.parallel);

        let mut findings = Vec::new();
        let mut eligible_count = 0;
        for (decl, eligible) in unit.declarations().iter().zip(&verdicts) {
            if *eligible {
                eligible_count += 1;
            }
            if *eligible || self.report_ineligible {
                findings.push(Finding::for_declaration(decl, *eligible, self.severity));
            }
        }

        info!(
            declarations = unit.len(),
            eligible = eligible_count,
            "analysis pass complete"
        );

        #[cfg(feature = "fix")]
        let fixed = if self.auto_fix && eligible_count > 0 {
            let (fixed_unit, _) = crate::fix::fix_all(unit, semantics)?;
            Some(fixed_unit)
        } else {
            None
        };

        Ok(AnalysisResult {
            findings,
            eligible_count,
            #[cfg(feature = "fix")]
            fixed,
        })
    }
}

/// Outcome of one analysis pass.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    /// Findings in source order.
    pub findings: Vec<Finding>,
    /// Number of eligible declarations.
    pub eligible_count: usize,
    /// The rewritten unit, when auto-fix was requested and anything was
    /// eligible.
    #[cfg(feature = "fix")]
    pub fixed: Option<SourceUnit>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantics::{ConstantValue, ResolvedType};
    use crate::syntax::{Binding, Expr, TypeRef};
    use crate::testing::StubSemantics;

    fn unit() -> SourceUnit {
        let eligible = Declaration::new(
            NodeId(1),
            Location::new(1, 1),
            TypeRef::named(NodeId(2), "int"),
            vec![Binding::new(
                NodeId(3),
                "i",
                Some(Expr::new(NodeId(4), "0")),
            )],
        );
        let ineligible = Declaration::new(
            NodeId(5),
            Location::new(2, 1),
            TypeRef::named(NodeId(6), "int"),
            vec![Binding::new(NodeId(7), "j", None)],
        );
        SourceUnit::new(vec![eligible, ineligible])
    }

    fn semantics() -> StubSemantics {
        StubSemantics::new()
            .with_type("int", ResolvedType::value("int"))
            .with_constant("0", ConstantValue::Int(0))
    }

    #[test]
    fn test_analyze_unit_reports_eligible_only() {
        let mut sink: Vec<Finding> = Vec::new();
        let count = analyze_unit(&unit(), &semantics(), &mut sink);
        assert_eq!(count, 1);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].declaration, NodeId(1));
        assert!(sink[0].eligible);
        assert_eq!(sink[0].rule, MAKE_CONST_RULE);
    }

    #[test]
    fn test_report_ineligible_includes_negative_verdicts() {
        let result = ConstAnalysis::new()
            .report_ineligible(true)
            .run(&unit(), &semantics())
            .unwrap();
        assert_eq!(result.findings.len(), 2);
        assert!(result.findings[0].eligible);
        assert!(!result.findings[1].eligible);
    }

    #[test]
    fn test_severity_is_carried_into_findings() {
        let result = ConstAnalysis::new()
            .with_severity(Severity::Error)
            .run(&unit(), &semantics())
            .unwrap();
        assert_eq!(result.findings[0].severity, Severity::Error);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_and_sequential_agree() {
        let sequential = ConstAnalysis::new().run(&unit(), &semantics()).unwrap();
        let parallel = ConstAnalysis::new()
            .parallel(true)
            .run(&unit(), &semantics())
            .unwrap();
        assert_eq!(sequential.findings, parallel.findings);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_driver_agrees_with_sequential_driver() {
        let mut sequential: Vec<Finding> = Vec::new();
        let mut parallel: Vec<Finding> = Vec::new();
        let sequential_count = analyze_unit(&unit(), &semantics(), &mut sequential);
        let parallel_count = analyze_unit_parallel(&unit(), &semantics(), &mut parallel);
        assert_eq!(sequential_count, parallel_count);
        assert_eq!(sequential, parallel);
    }

    #[cfg(feature = "fix")]
    #[test]
    fn test_auto_fix_rewrites_eligible_declarations() {
        let result = ConstAnalysis::new()
            .auto_fix(true)
            .run(&unit(), &semantics())
            .unwrap();
        let fixed = result.fixed.expect("auto-fix should produce a unit");
        assert!(fixed.find(NodeId(1)).unwrap().is_const());
        assert!(!fixed.find(NodeId(5)).unwrap().is_const());
    }
}
