//! Run totals for the cull report.

use crate::cull::{CullPlan, Decision};

/// Totals over a cull plan.
///
/// "Unique" counts one file per title: the winner of each group. Extra discs
/// kept alongside a winner count toward the totals but not the unique size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CullSummary {
    pub unique_titles: usize,
    pub unique_bytes: u64,
    pub total_files: usize,
    pub total_bytes: u64,
    pub kept_siblings: usize,
    pub removable_files: usize,
    pub removable_bytes: u64,
}

impl CullSummary {
    pub fn from_plan(plan: &CullPlan) -> Self {
        let mut summary = Self::default();
        for group in plan.groups() {
            summary.unique_titles += 1;
            for candidate in &group.candidates {
                let size = candidate.entry.size_bytes();
                summary.total_files += 1;
                summary.total_bytes += size;
                match candidate.decision {
                    Decision::Keep => summary.unique_bytes += size,
                    Decision::KeepSibling => summary.kept_siblings += 1,
                    Decision::Remove => {
                        summary.removable_files += 1;
                        summary.removable_bytes += size;
                    }
                }
            }
        }
        summary
    }
}
