use crate::compliance::domain::{InventoryItem, ProjectId, ProjectInformation, ProjectNode};
use crate::shared::Result;

/// ProjectRepository port for the per-project data held by the inventory service
pub trait ProjectRepository {
    /// Fetches the project tree rooted at `root`
    ///
    /// # Errors
    /// Returns an error if the project is unknown or the data cannot be read.
    /// The use case treats this as fatal.
    fn fetch_hierarchy(&self, root: ProjectId) -> Result<ProjectNode>;

    /// Fetches the project's roll-up license and vulnerability counts
    ///
    /// # Errors
    /// Returns an error if the counts are unavailable for this project
    fn fetch_project_information(&self, project_id: ProjectId) -> Result<ProjectInformation>;

    /// Fetches every inventory item recorded in the project
    ///
    /// # Errors
    /// Returns an error if the inventory is unavailable for this project
    fn fetch_inventory(&self, project_id: ProjectId) -> Result<Vec<InventoryItem>>;
}

impl<T: ProjectRepository + ?Sized> ProjectRepository for &T {
    fn fetch_hierarchy(&self, root: ProjectId) -> Result<ProjectNode> {
        (**self).fetch_hierarchy(root)
    }

    fn fetch_project_information(&self, project_id: ProjectId) -> Result<ProjectInformation> {
        (**self).fetch_project_information(project_id)
    }

    fn fetch_inventory(&self, project_id: ProjectId) -> Result<Vec<InventoryItem>> {
        (**self).fetch_inventory(project_id)
    }
}
