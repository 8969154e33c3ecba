//! Change-list aggregation and impact classification.

use crate::diff::{Change, ChangeOp};
use std::fmt;

/// Coarse severity label derived from change counts.
///
/// `Critical` is part of the vocabulary for downstream consumers but the
/// classifier never produces it; the thresholds stop at `High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ImpactLevel::Low => "Low",
            ImpactLevel::Medium => "Medium",
            ImpactLevel::High => "High",
            ImpactLevel::Critical => "Critical",
        };
        f.write_str(label)
    }
}

/// Per-operation counts plus the derived impact label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
    pub impact: ImpactLevel,
}

impl DiffSummary {
    pub fn total(&self) -> usize {
        self.added + self.removed + self.modified
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Tallies a change list and classifies its impact.
pub fn summarize(changes: &[Change]) -> DiffSummary {
    let mut added = 0;
    let mut removed = 0;
    let mut modified = 0;

    for change in changes {
        match change.op {
            ChangeOp::Add => added += 1,
            ChangeOp::Remove => removed += 1,
            ChangeOp::Replace => modified += 1,
        }
    }

    DiffSummary {
        added,
        removed,
        modified,
        impact: classify(added, removed, modified),
    }
}

/// Pure threshold classifier. The High check runs before Medium so a large
/// total escalates past the `total > 10` band once it crosses 20.
fn classify(added: usize, removed: usize, modified: usize) -> ImpactLevel {
    let total = added + removed + modified;

    if total == 0 {
        ImpactLevel::Low
    } else if removed > 5 || total > 20 {
        ImpactLevel::High
    } else if removed > 0 || total > 10 {
        ImpactLevel::Medium
    } else {
        ImpactLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    fn changes_of(added: usize, removed: usize, modified: usize) -> Vec<Change> {
        let mut changes = Vec::new();
        for i in 0..added {
            changes.push(Change {
                path: format!("a{i}"),
                op: ChangeOp::Add,
                old_value: None,
                new_value: Some(Value::Null),
                context: None,
            });
        }
        for i in 0..removed {
            changes.push(Change {
                path: format!("r{i}"),
                op: ChangeOp::Remove,
                old_value: Some(Value::Null),
                new_value: None,
                context: None,
            });
        }
        for i in 0..modified {
            changes.push(Change {
                path: format!("m{i}"),
                op: ChangeOp::Replace,
                old_value: Some(Value::Bool(false)),
                new_value: Some(Value::Bool(true)),
                context: None,
            });
        }
        changes
    }

    #[test]
    fn counts_match_change_list_length() {
        let changes = changes_of(2, 3, 4);
        let summary = summarize(&changes);
        assert_eq!(summary.added, 2);
        assert_eq!(summary.removed, 3);
        assert_eq!(summary.modified, 4);
        assert_eq!(summary.total(), changes.len());
    }

    #[test]
    fn empty_list_is_low() {
        let summary = summarize(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary.impact, ImpactLevel::Low);
    }

    #[test]
    fn few_additions_stay_low() {
        assert_eq!(summarize(&changes_of(3, 0, 2)).impact, ImpactLevel::Low);
    }

    #[test]
    fn any_removal_is_at_least_medium() {
        assert_eq!(summarize(&changes_of(0, 1, 0)).impact, ImpactLevel::Medium);
    }

    #[test]
    fn large_total_without_removals_is_medium_then_high() {
        assert_eq!(summarize(&changes_of(11, 0, 0)).impact, ImpactLevel::Medium);
        assert_eq!(summarize(&changes_of(21, 0, 0)).impact, ImpactLevel::High);
    }

    #[test]
    fn many_removals_are_high() {
        assert_eq!(summarize(&changes_of(0, 6, 0)).impact, ImpactLevel::High);
    }

    #[test]
    fn high_wins_over_overlapping_medium_band() {
        // total 21 also satisfies the Medium total > 10 check; High is
        // evaluated first and must win.
        assert_eq!(summarize(&changes_of(10, 0, 11)).impact, ImpactLevel::High);
    }

    #[test]
    fn impact_is_monotonic_in_removals() {
        let mut previous = ImpactLevel::Low;
        for removed in 0..30 {
            let impact = summarize(&changes_of(2, removed, 1)).impact;
            assert!(impact >= previous);
            previous = impact;
        }
    }

    #[test]
    fn impact_levels_are_ordered() {
        assert!(ImpactLevel::Low < ImpactLevel::Medium);
        assert!(ImpactLevel::Medium < ImpactLevel::High);
        assert!(ImpactLevel::High < ImpactLevel::Critical);
    }
}
