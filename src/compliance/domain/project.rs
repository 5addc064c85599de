use super::ProjectId;
use serde::{Deserialize, Serialize};

/// Parent marker carried by the root descriptor of a flattened hierarchy
pub const ROOT_PARENT: &str = "#";

/// One node of the project hierarchy as supplied by the inventory service.
///
/// The tree is immutable input: the flattener and the review-status rollup
/// only read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectNode {
    pub id: ProjectId,
    pub name: String,
    #[serde(rename = "childProject", default)]
    pub child_projects: Vec<ProjectNode>,
}

impl ProjectNode {
    pub fn new(id: u64, name: &str) -> Self {
        Self {
            id: ProjectId::new(id),
            name: name.to_string(),
            child_projects: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: ProjectNode) -> Self {
        self.child_projects.push(child);
        self
    }

    /// Copy of this node with the children dropped
    pub fn without_children(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            child_projects: Vec::new(),
        }
    }

    /// Child projects ordered by name, ties keep their upstream order
    pub fn children_by_name(&self) -> Vec<&ProjectNode> {
        let mut children: Vec<&ProjectNode> = self.child_projects.iter().collect();
        children.sort_by(|a, b| a.name.cmp(&b.name));
        children
    }

    /// Finds the subtree rooted at `id` (breadth-first, first match wins)
    pub fn find(&self, id: ProjectId) -> Option<&ProjectNode> {
        let mut queue = std::collections::VecDeque::from([self]);
        while let Some(node) = queue.pop_front() {
            if node.id == id {
                return Some(node);
            }
            queue.extend(node.child_projects.iter());
        }
        None
    }
}

/// Flattened, display-ready view of one hierarchy position.
///
/// `project_id` is the plain id used for data lookups; `unique_id` is
/// path-qualified so a project reused under several parents still gets
/// one distinct node per position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDescriptor {
    #[serde(rename = "projectID")]
    pub project_id: ProjectId,
    #[serde(rename = "uniqueID")]
    pub unique_id: String,
    #[serde(rename = "parent")]
    pub parent_unique_id: String,
    #[serde(rename = "projectName")]
    pub project_name: String,
    #[serde(rename = "projectLink")]
    pub project_link: String,
}

impl ProjectDescriptor {
    pub fn is_root(&self) -> bool {
        self.parent_unique_id == ROOT_PARENT
    }
}
