use super::MAX_HIERARCHY_DEPTH;
use crate::compliance::domain::{ProjectNode, ReviewStatus, ReviewStatusTable};
use crate::shared::error::ReportError;
use crate::shared::Result;

/// ReviewStatusRollup service propagating the worst review status up the tree
///
/// Runs strictly after the per-project initial statuses have been
/// computed. The walk is post-order: each child is fully resolved before
/// its status is folded into the parent.
pub struct ReviewStatusRollup;

impl ReviewStatusRollup {
    /// Rolls `initial` up across the hierarchy below `root`
    ///
    /// The table is moved through the recursion and handed back; callers
    /// must use the returned table. Input nodes are never modified.
    /// Projects missing from `initial` start as Approved.
    ///
    /// # Errors
    /// Returns `HierarchyTooDeep` when the tree is deeper than
    /// [`MAX_HIERARCHY_DEPTH`]
    pub fn rollup(root: &ProjectNode, initial: ReviewStatusTable) -> Result<ReviewStatusTable> {
        let (table, root_status) = Self::rollup_node(root, initial, 0)?;
        tracing::debug!(project_id = %root.id, status = %root_status, "Review status rollup complete");
        Ok(table)
    }

    fn rollup_node(
        node: &ProjectNode,
        mut table: ReviewStatusTable,
        depth: usize,
    ) -> Result<(ReviewStatusTable, ReviewStatus)> {
        if depth > MAX_HIERARCHY_DEPTH {
            return Err(ReportError::HierarchyTooDeep {
                project_id: node.id.value(),
                max_depth: MAX_HIERARCHY_DEPTH,
            }
            .into());
        }

        for child in &node.child_projects {
            let (updated, child_status) = Self::rollup_node(child, table, depth + 1)?;
            table = updated;
            // Reads the parent's current value, which earlier children may have raised
            table.escalate(node.id, child_status);
        }

        let status = table.escalate(node.id, ReviewStatus::Approved);
        Ok((table, status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::domain::ProjectId;

    fn table(entries: &[(u64, ReviewStatus)]) -> ReviewStatusTable {
        entries
            .iter()
            .map(|(id, status)| (ProjectId::new(*id), *status))
            .collect()
    }

    fn status(table: &ReviewStatusTable, id: u64) -> ReviewStatus {
        table.get(ProjectId::new(id)).unwrap()
    }

    #[test]
    fn test_rejected_parent_not_downgraded_by_milder_children() {
        let tree = ProjectNode::new(1, "A")
            .with_child(ProjectNode::new(2, "B"))
            .with_child(ProjectNode::new(3, "C"));
        let initial = table(&[
            (1, ReviewStatus::Rejected),
            (2, ReviewStatus::Approved),
            (3, ReviewStatus::Draft),
        ]);

        let rolled = ReviewStatusRollup::rollup(&tree, initial).unwrap();

        assert_eq!(status(&rolled, 2), ReviewStatus::Approved);
        assert_eq!(status(&rolled, 3), ReviewStatus::Draft);
        assert_eq!(status(&rolled, 1), ReviewStatus::Rejected);
    }

    #[test]
    fn test_deep_rejection_reaches_root() {
        let tree = ProjectNode::new(1, "root").with_child(
            ProjectNode::new(2, "mid")
                .with_child(ProjectNode::new(3, "leaf-ok"))
                .with_child(ProjectNode::new(4, "leaf-bad")),
        );
        let initial = table(&[
            (1, ReviewStatus::Approved),
            (2, ReviewStatus::Approved),
            (3, ReviewStatus::Approved),
            (4, ReviewStatus::Rejected),
        ]);

        let rolled = ReviewStatusRollup::rollup(&tree, initial).unwrap();

        assert_eq!(status(&rolled, 2), ReviewStatus::Rejected);
        assert_eq!(status(&rolled, 1), ReviewStatus::Rejected);
        assert_eq!(status(&rolled, 3), ReviewStatus::Approved);
    }

    #[test]
    fn test_later_milder_child_does_not_overwrite_earlier_escalation() {
        let tree = ProjectNode::new(1, "root")
            .with_child(ProjectNode::new(2, "draft"))
            .with_child(ProjectNode::new(3, "approved"));
        let initial = table(&[
            (1, ReviewStatus::Approved),
            (2, ReviewStatus::Draft),
            (3, ReviewStatus::Approved),
        ]);

        let rolled = ReviewStatusRollup::rollup(&tree, initial).unwrap();
        assert_eq!(status(&rolled, 1), ReviewStatus::Draft);
    }

    #[test]
    fn test_root_never_better_than_any_descendant() {
        let tree = ProjectNode::new(1, "root")
            .with_child(ProjectNode::new(2, "a").with_child(ProjectNode::new(5, "a1")))
            .with_child(ProjectNode::new(3, "b"))
            .with_child(ProjectNode::new(4, "c").with_child(ProjectNode::new(6, "c1")));
        let statuses = [
            ReviewStatus::Approved,
            ReviewStatus::Draft,
            ReviewStatus::Rejected,
        ];

        // Every assignment of statuses to the six projects
        for combo in 0..3usize.pow(6) {
            let mut entries = Vec::new();
            let mut rest = combo;
            for id in 1..=6u64 {
                entries.push((id, statuses[rest % 3]));
                rest /= 3;
            }
            let worst = entries.iter().map(|(_, s)| *s).max().unwrap();

            let rolled = ReviewStatusRollup::rollup(&tree, table(&entries)).unwrap();
            assert_eq!(status(&rolled, 1), worst);
            for (id, initial_status) in &entries {
                assert!(status(&rolled, *id) >= *initial_status);
            }
        }
    }

    #[test]
    fn test_missing_entries_default_to_approved() {
        let tree = ProjectNode::new(1, "root").with_child(ProjectNode::new(2, "child"));
        let rolled = ReviewStatusRollup::rollup(&tree, ReviewStatusTable::new()).unwrap();

        assert_eq!(status(&rolled, 1), ReviewStatus::Approved);
        assert_eq!(status(&rolled, 2), ReviewStatus::Approved);
    }

    #[test]
    fn test_input_tree_is_not_modified() {
        let tree = ProjectNode::new(1, "root").with_child(ProjectNode::new(2, "child"));
        let before = tree.clone();
        let _ = ReviewStatusRollup::rollup(&tree, table(&[(2, ReviewStatus::Rejected)])).unwrap();
        assert_eq!(tree, before);
    }

    #[test]
    fn test_rollup_rejects_excessive_depth() {
        let mut node = ProjectNode::new(1000, "leaf");
        for id in (0..=MAX_HIERARCHY_DEPTH as u64 + 1).rev() {
            node = ProjectNode::new(id, "level").with_child(node);
        }

        let err = ReviewStatusRollup::rollup(&node, ReviewStatusTable::new()).unwrap_err();
        assert!(err.to_string().contains("maximum depth"));
    }
}
