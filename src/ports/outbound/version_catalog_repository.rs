use crate::compliance::domain::ComponentId;
use crate::shared::Result;

/// VersionCatalogRepository port listing the known releases of a component
pub trait VersionCatalogRepository {
    /// Fetches every version name recorded for the component, in any order
    ///
    /// # Errors
    /// Returns an error if the catalog cannot be retrieved
    fn fetch_versions(&self, component_id: ComponentId) -> Result<Vec<String>>;
}

impl<T: VersionCatalogRepository + ?Sized> VersionCatalogRepository for &T {
    fn fetch_versions(&self, component_id: ComponentId) -> Result<Vec<String>> {
        (**self).fetch_versions(component_id)
    }
}
