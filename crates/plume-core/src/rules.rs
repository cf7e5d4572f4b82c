//! Rule resolution engine.
//!
//! Matches file paths against configured glob rules and accumulates
//! quality gates. When multiple rules match, all contribute their gates.
//! Conflicts (same gate in multiple rules) are resolved by specificity:
//! the pattern with more literal (non-wildcard) path segments wins. Ties go
//! to the earlier rule.

use globset::{Glob, GlobMatcher};

use crate::config::{QualityChecks, Rule};

/// Compiled rule set for efficient matching.
pub struct RuleSet {
    compiled: Vec<CompiledRule>,
}

/// A single rule with pre-compiled glob matchers.
struct CompiledRule {
    matchers: Vec<(GlobMatcher, usize)>, // (matcher, specificity)
    checks: QualityChecks,
}

/// Count literal (non-wildcard) path segments in a glob pattern.
///
/// `manuscrit/partie-1/*.md` → 2 (`manuscrit`, `partie-1`)
/// `manuscrit/**/*.md` → 1 (`manuscrit`)
/// `**/*.md` → 0
fn specificity(pattern: &str) -> usize {
    pattern
        .split('/')
        .filter(|seg| !seg.contains('*') && !seg.contains('?') && !seg.contains('['))
        .count()
}

/// One gate being resolved: the winning value and the specificity it won with.
#[derive(Default)]
struct Slot<T> {
    value: Option<T>,
    spec: Option<usize>,
}

impl<T: Copy> Slot<T> {
    fn offer(&mut self, candidate: Option<T>, spec: usize) {
        if let Some(value) = candidate
            && self.spec.is_none_or(|prev| spec > prev)
        {
            self.value = Some(value);
            self.spec = Some(spec);
        }
    }
}

impl RuleSet {
    /// Compile a list of rules into a `RuleSet`.
    ///
    /// Invalid glob patterns are skipped with a tracing warning.
    pub fn compile(rules: &[Rule]) -> Self {
        let compiled = rules
            .iter()
            .filter_map(|rule| {
                let matchers: Vec<(GlobMatcher, usize)> = rule
                    .paths
                    .iter()
                    .filter_map(|pattern| match Glob::new(pattern) {
                        Ok(glob) => Some((glob.compile_matcher(), specificity(pattern))),
                        Err(e) => {
                            tracing::warn!(pattern, error = %e, "skipping invalid glob pattern");
                            None
                        }
                    })
                    .collect();
                if matchers.is_empty() {
                    None
                } else {
                    Some(CompiledRule {
                        matchers,
                        checks: rule.checks,
                    })
                }
            })
            .collect();
        Self { compiled }
    }

    /// Number of usable rules.
    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    /// Returns `true` if no usable rule was compiled.
    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }

    /// Resolve which gates apply to a file path.
    ///
    /// All matching rules contribute. When two rules set the same gate, the
    /// one matched by the higher-specificity pattern wins. Ties go to the
    /// earlier rule (lower index).
    pub fn resolve(&self, file_path: &str) -> QualityChecks {
        let mut grade_min = Slot::default();
        let mut readability_min = Slot::default();
        let mut complexity_max = Slot::default();
        let mut max_repetitions = Slot::default();

        for rule in &self.compiled {
            let Some(spec) = rule
                .matchers
                .iter()
                .filter(|(m, _)| m.is_match(file_path))
                .map(|(_, s)| *s)
                .max()
            else {
                continue;
            };

            grade_min.offer(rule.checks.grade_min, spec);
            readability_min.offer(rule.checks.readability_min, spec);
            complexity_max.offer(rule.checks.complexity_max, spec);
            max_repetitions.offer(rule.checks.max_repetitions, spec);
        }

        QualityChecks {
            grade_min: grade_min.value,
            readability_min: readability_min.value,
            complexity_max: complexity_max.value,
            max_repetitions: max_repetitions.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_rules(specs: &[(&[&str], QualityChecks)]) -> Vec<Rule> {
        specs
            .iter()
            .map(|(paths, checks)| Rule {
                paths: paths.iter().map(|s| (*s).to_string()).collect(),
                checks: *checks,
            })
            .collect()
    }

    fn grade(min: u32) -> QualityChecks {
        QualityChecks {
            grade_min: Some(min),
            ..Default::default()
        }
    }

    #[test]
    fn specificity_counts_literal_segments() {
        assert_eq!(specificity("**/*.md"), 0);
        assert_eq!(specificity("manuscrit/**/*.md"), 1);
        assert_eq!(specificity("manuscrit/partie-1/*.md"), 2);
        assert_eq!(specificity("manuscrit/partie-1/scenes/*.md"), 3);
        assert_eq!(specificity("prologue.md"), 1);
    }

    #[test]
    fn no_rules_returns_empty() {
        let set = RuleSet::compile(&[]);
        assert!(set.is_empty());
        assert_eq!(set.resolve("anything.md"), QualityChecks::default());
    }

    #[test]
    fn no_match_returns_empty() {
        let set = RuleSet::compile(&make_rules(&[(&["manuscrit/**/*.md"], grade(60))]));
        assert_eq!(set.resolve("notes/idees.txt"), QualityChecks::default());
    }

    #[test]
    fn single_match_returns_checks() {
        let set = RuleSet::compile(&make_rules(&[(&["manuscrit/**/*.md"], grade(60))]));
        assert_eq!(set.resolve("manuscrit/ch1.md").grade_min, Some(60));
    }

    #[test]
    fn accumulates_different_gates_from_multiple_rules() {
        let set = RuleSet::compile(&make_rules(&[
            (&["manuscrit/**/*.md"], grade(60)),
            (
                &["manuscrit/partie-1/*.md"],
                QualityChecks {
                    max_repetitions: Some(2),
                    ..Default::default()
                },
            ),
        ]));
        let resolved = set.resolve("manuscrit/partie-1/ch1.md");
        assert_eq!(resolved.grade_min, Some(60));
        assert_eq!(resolved.max_repetitions, Some(2));
        assert!(resolved.readability_min.is_none());
    }

    #[test]
    fn specific_rule_overrides_general_for_same_gate() {
        let set = RuleSet::compile(&make_rules(&[
            (&["manuscrit/partie-1/*.md"], grade(75)),
            (&["manuscrit/**/*.md"], grade(60)),
        ]));
        assert_eq!(set.resolve("manuscrit/partie-1/ch1.md").grade_min, Some(75));
        assert_eq!(set.resolve("manuscrit/partie-2/ch9.md").grade_min, Some(60));
    }

    #[test]
    fn equal_specificity_earlier_rule_wins() {
        let set = RuleSet::compile(&make_rules(&[
            (&["manuscrit/*.md"], grade(50)),
            (&["manuscrit/*.md"], grade(80)),
        ]));
        assert_eq!(set.resolve("manuscrit/ch1.md").grade_min, Some(50));
    }

    #[test]
    fn multiple_paths_in_single_rule() {
        let set = RuleSet::compile(&make_rules(&[(
            &["prologue.md", "manuscrit/**/*.md"],
            grade(60),
        )]));
        assert!(set.resolve("prologue.md").grade_min.is_some());
        assert!(set.resolve("manuscrit/ch1.md").grade_min.is_some());
        assert!(set.resolve("notes/plan.md").grade_min.is_none());
    }

    #[test]
    fn invalid_glob_skipped_gracefully() {
        let set = RuleSet::compile(&make_rules(&[(&["[invalid", "manuscrit/*.md"], grade(60))]));
        assert_eq!(set.len(), 1);
        assert!(set.resolve("manuscrit/ch1.md").grade_min.is_some());
    }

    #[test]
    fn rule_with_only_invalid_globs_dropped() {
        let set = RuleSet::compile(&make_rules(&[(&["[invalid"], grade(60))]));
        assert!(set.is_empty());
    }
}
