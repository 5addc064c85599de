use crate::compliance::domain::{
    ComponentId, InventoryItem, LicenseId, ProjectId, ProjectInformation, ProjectNode,
};
use crate::ports::outbound::{
    LicenseRecord, LicenseRepository, ProjectRepository, VersionCatalogRepository,
};
use crate::shared::error::ReportError;
use crate::shared::security::read_checked;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// On-disk export of everything the inventory service would supply
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    hierarchy: ProjectNode,
    #[serde(default)]
    project_information: HashMap<ProjectId, ProjectInformation>,
    #[serde(default)]
    inventory: HashMap<ProjectId, Vec<InventoryItem>>,
    #[serde(default)]
    licenses: HashMap<LicenseId, LicenseRecord>,
    #[serde(default)]
    component_versions: HashMap<ComponentId, Vec<String>>,
}

/// SnapshotRepository adapter serving collaborator data from a JSON snapshot
///
/// Implements the project, license and version catalog ports. A project
/// or component missing from the snapshot behaves like a failed lookup,
/// so the use case's per-project isolation applies unchanged.
pub struct SnapshotRepository {
    path: PathBuf,
    snapshot: Snapshot,
}

impl SnapshotRepository {
    /// Loads and parses a snapshot file
    ///
    /// # Errors
    /// Returns `SnapshotNotFound` if the file does not exist, a security
    /// error for symlinks or oversized files, and `SnapshotParseError` for
    /// malformed content
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ReportError::SnapshotNotFound {
                path: path.to_path_buf(),
                suggestion: "Export the project data to a JSON snapshot and pass it with --snapshot"
                    .to_string(),
            }
            .into());
        }

        let content = read_checked(path, "snapshot")?;
        Self::from_json(&content, path)
    }

    /// Parses snapshot content; `path` is only used in error messages
    pub fn from_json(content: &str, path: &Path) -> Result<Self> {
        let snapshot: Snapshot =
            serde_json::from_str(content).map_err(|e| ReportError::SnapshotParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        tracing::debug!(
            path = %path.display(),
            projects = snapshot.inventory.len(),
            licenses = snapshot.licenses.len(),
            components = snapshot.component_versions.len(),
            "Loaded snapshot"
        );

        Ok(Self {
            path: path.to_path_buf(),
            snapshot,
        })
    }

    /// Id of the top-level project in the snapshot
    pub fn root_project_id(&self) -> ProjectId {
        self.snapshot.hierarchy.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProjectRepository for SnapshotRepository {
    fn fetch_hierarchy(&self, root: ProjectId) -> Result<ProjectNode> {
        self.snapshot
            .hierarchy
            .find(root)
            .cloned()
            .ok_or_else(|| {
                ReportError::ProjectNotFound {
                    project_id: root.value(),
                }
                .into()
            })
    }

    fn fetch_project_information(&self, project_id: ProjectId) -> Result<ProjectInformation> {
        self.snapshot
            .project_information
            .get(&project_id)
            .cloned()
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "No project information recorded for project {}",
                    project_id
                )
            })
    }

    fn fetch_inventory(&self, project_id: ProjectId) -> Result<Vec<InventoryItem>> {
        self.snapshot
            .inventory
            .get(&project_id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("No inventory recorded for project {}", project_id))
    }
}

impl LicenseRepository for SnapshotRepository {
    fn fetch_license(&self, license_id: LicenseId) -> Result<LicenseRecord> {
        self.snapshot
            .licenses
            .get(&license_id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("License {} is not in the license catalog", license_id))
    }
}

impl VersionCatalogRepository for SnapshotRepository {
    fn fetch_versions(&self, component_id: ComponentId) -> Result<Vec<String>> {
        self.snapshot
            .component_versions
            .get(&component_id)
            .cloned()
            .ok_or_else(|| {
                anyhow::anyhow!("No version catalog recorded for component {}", component_id)
            })
    }
}
