use compliance_report::prelude::*;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock VersionCatalogRepository for testing that records requested components
#[derive(Default)]
pub struct MockVersionCatalogRepository {
    pub catalogs: HashMap<ComponentId, Vec<String>>,
    pub requested: Mutex<Vec<ComponentId>>,
}

impl MockVersionCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_versions(mut self, component_id: u64, versions: &[&str]) -> Self {
        self.catalogs.insert(
            ComponentId::new(component_id),
            versions.iter().map(|v| v.to_string()).collect(),
        );
        self
    }

    pub fn requested(&self) -> Vec<ComponentId> {
        self.requested.lock().unwrap().clone()
    }
}

impl VersionCatalogRepository for MockVersionCatalogRepository {
    fn fetch_versions(&self, component_id: ComponentId) -> Result<Vec<String>> {
        self.requested.lock().unwrap().push(component_id);
        self.catalogs
            .get(&component_id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Mock catalog for component {} unavailable", component_id))
    }
}
