use super::MAX_HIERARCHY_DEPTH;
use crate::compliance::domain::{ProjectDescriptor, ProjectId, ProjectNode, ROOT_PARENT};
use crate::shared::error::ReportError;
use crate::shared::Result;
use std::collections::HashSet;

/// HierarchyFlattener service turning the nested project tree into an ordered list
///
/// The root comes first, followed by a depth-first walk in which the
/// children of every node are visited alphabetically by name. The same
/// tree always yields the same sequence.
pub struct HierarchyFlattener;

/// Accumulator threaded through the recursive walk
struct FlattenState<'a> {
    base_url: &'a str,
    descriptors: Vec<ProjectDescriptor>,
    issued_ids: HashSet<String>,
}

impl FlattenState<'_> {
    fn push(&mut self, node: &ProjectNode, parent_unique_id: &str, candidate_id: String) -> String {
        let unique_id = self.claim_unique_id(candidate_id);
        self.descriptors.push(ProjectDescriptor {
            project_id: node.id,
            unique_id: unique_id.clone(),
            parent_unique_id: parent_unique_id.to_string(),
            project_name: node.name.clone(),
            project_link: HierarchyFlattener::project_link(self.base_url, node.id),
        });
        unique_id
    }

    /// Duplicate sibling ids would produce the same path; suffix the repeat
    fn claim_unique_id(&mut self, candidate: String) -> String {
        if self.issued_ids.insert(candidate.clone()) {
            return candidate;
        }
        let mut occurrence = 2;
        loop {
            let suffixed = format!("{}~{}", candidate, occurrence);
            if self.issued_ids.insert(suffixed.clone()) {
                return suffixed;
            }
            occurrence += 1;
        }
    }
}

impl HierarchyFlattener {
    /// Flattens the hierarchy below (and including) `root`
    ///
    /// # Arguments
    /// * `root` - Root of the project tree
    /// * `base_url` - Server URL used to build project links
    /// * `include_child_projects` - When false only the root is emitted
    ///
    /// # Errors
    /// Returns `HierarchyTooDeep` when the tree is deeper than
    /// [`MAX_HIERARCHY_DEPTH`]
    pub fn flatten(
        root: &ProjectNode,
        base_url: &str,
        include_child_projects: bool,
    ) -> Result<Vec<ProjectDescriptor>> {
        let mut state = FlattenState {
            base_url,
            descriptors: Vec::new(),
            issued_ids: HashSet::new(),
        };

        let root_unique_id = state.push(root, ROOT_PARENT, root.id.to_string());

        if include_child_projects {
            Self::visit_children(root, &root_unique_id, 1, &mut state)?;
        } else {
            tracing::debug!("Child project traversal disabled");
        }

        Ok(state.descriptors)
    }

    /// Link to the project's inventory page on the server
    pub fn project_link(base_url: &str, project_id: ProjectId) -> String {
        format!(
            "{}/codeinsight/FNCI#myprojectdetails/?id={}&tab=projectInventory",
            base_url.trim_end_matches('/'),
            project_id
        )
    }

    fn visit_children(
        node: &ProjectNode,
        parent_unique_id: &str,
        depth: usize,
        state: &mut FlattenState<'_>,
    ) -> Result<()> {
        if node.child_projects.is_empty() {
            return Ok(());
        }
        if depth > MAX_HIERARCHY_DEPTH {
            return Err(ReportError::HierarchyTooDeep {
                project_id: node.id.value(),
                max_depth: MAX_HIERARCHY_DEPTH,
            }
            .into());
        }

        for child in node.children_by_name() {
            let unique_id = state.push(
                child,
                parent_unique_id,
                format!("{}-{}", parent_unique_id, child.id),
            );
            Self::visit_children(child, &unique_id, depth + 1, state)?;
        }
        Ok(())
    }
}
