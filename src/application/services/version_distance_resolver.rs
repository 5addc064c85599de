use crate::compliance::domain::{ComponentId, VersionDistance};
use crate::compliance::policies::{VersionAssessment, VersionAssessor};
use crate::compliance::services::VersionDistanceCalculator;
use crate::ports::outbound::VersionCatalogRepository;
use dashmap::DashMap;
use std::collections::HashSet;

/// VersionDistanceResolver answers version questions for the rule engine
///
/// Catalogs are fetched lazily, once per component per run. Exempt
/// components and components whose catalog could not be fetched are
/// reported as not analyzed.
pub struct VersionDistanceResolver<'a, R: VersionCatalogRepository> {
    repository: &'a R,
    exempt_components: HashSet<ComponentId>,
    catalogs: DashMap<ComponentId, Option<Vec<String>>>,
    distances: DashMap<(ComponentId, String), VersionDistance>,
}

impl<'a, R: VersionCatalogRepository> VersionDistanceResolver<'a, R> {
    pub fn new(repository: &'a R, exempt_components: &[ComponentId]) -> Self {
        Self {
            repository,
            exempt_components: exempt_components.iter().copied().collect(),
            catalogs: DashMap::new(),
            distances: DashMap::new(),
        }
    }

    /// Resolves the distance of `version` from the component's latest release
    ///
    /// Returns `None` when the component is exempt or its catalog is unavailable.
    pub fn resolve(&self, component_id: ComponentId, version: &str) -> Option<VersionDistance> {
        if self.exempt_components.contains(&component_id) {
            return None;
        }

        let key = (component_id, version.to_string());
        if let Some(distance) = self.distances.get(&key) {
            return Some(distance.clone());
        }

        let distance = {
            let catalog = self.catalog(component_id)?;
            VersionDistanceCalculator::calculate(&catalog, version)
        };
        tracing::debug!(
            component_id = %component_id,
            version,
            latest = distance.latest_version(),
            versions_back = distance.versions_back(),
            "Resolved version distance"
        );
        self.distances.insert(key, distance.clone());
        Some(distance)
    }

    /// Number of catalogs fetched (or attempted) so far
    pub fn catalogs_fetched(&self) -> usize {
        self.catalogs.len()
    }

    fn catalog(&self, component_id: ComponentId) -> Option<Vec<String>> {
        if let Some(cached) = self.catalogs.get(&component_id) {
            return cached.clone();
        }

        let fetched = match self.repository.fetch_versions(component_id) {
            Ok(versions) => Some(versions),
            Err(e) => {
                tracing::warn!(
                    component_id = %component_id,
                    "Version catalog unavailable: {:#}",
                    e
                );
                None
            }
        };
        self.catalogs.insert(component_id, fetched.clone());
        fetched
    }
}

impl<R: VersionCatalogRepository> VersionAssessor for VersionDistanceResolver<'_, R> {
    fn assess(&self, component_id: ComponentId, version: &str) -> VersionAssessment {
        match self.resolve(component_id, version) {
            Some(distance) => VersionAssessment::Resolved(distance),
            None => VersionAssessment::NotAnalyzed,
        }
    }
}
