use compliance_report::prelude::*;
use std::collections::{HashMap, HashSet};

/// Mock ProjectRepository for testing
pub struct MockProjectRepository {
    pub hierarchy: ProjectNode,
    pub information: HashMap<ProjectId, ProjectInformation>,
    pub inventory: HashMap<ProjectId, Vec<InventoryItem>>,
    pub failing_projects: HashSet<ProjectId>,
}

impl MockProjectRepository {
    pub fn new(hierarchy: ProjectNode) -> Self {
        Self {
            hierarchy,
            information: HashMap::new(),
            inventory: HashMap::new(),
            failing_projects: HashSet::new(),
        }
    }

    pub fn with_project(mut self, id: u64, information: ProjectInformation, items: Vec<InventoryItem>) -> Self {
        self.information.insert(ProjectId::new(id), information);
        self.inventory.insert(ProjectId::new(id), items);
        self
    }

    /// Every lookup for this project fails
    pub fn with_failing_project(mut self, id: u64) -> Self {
        self.failing_projects.insert(ProjectId::new(id));
        self
    }

    fn check(&self, project_id: ProjectId) -> Result<()> {
        if self.failing_projects.contains(&project_id) {
            anyhow::bail!("Mock inventory service failure for project {}", project_id);
        }
        Ok(())
    }
}

impl ProjectRepository for MockProjectRepository {
    fn fetch_hierarchy(&self, root: ProjectId) -> Result<ProjectNode> {
        self.hierarchy
            .find(root)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Mock project {} not found", root))
    }

    fn fetch_project_information(&self, project_id: ProjectId) -> Result<ProjectInformation> {
        self.check(project_id)?;
        Ok(self
            .information
            .get(&project_id)
            .cloned()
            .unwrap_or_default())
    }

    fn fetch_inventory(&self, project_id: ProjectId) -> Result<Vec<InventoryItem>> {
        self.check(project_id)?;
        Ok(self.inventory.get(&project_id).cloned().unwrap_or_default())
    }
}
