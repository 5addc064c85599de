use crate::compliance::domain::VersionDistance;
use crate::compliance::policies::NaturalVersionOrder;

/// VersionDistanceCalculator service measuring how far a version trails the latest release
pub struct VersionDistanceCalculator;

impl VersionDistanceCalculator {
    /// Computes the distance of `current_version` from the newest catalog entry
    ///
    /// # Arguments
    /// * `catalog` - Every known version name of the component, in any order
    /// * `current_version` - The version in use
    ///
    /// # Returns
    /// The latest version and the number of releases between it and
    /// `current_version`. An empty catalog makes the current version the
    /// latest; a version absent from the catalog yields
    /// [`VersionDistance::NOT_IN_CATALOG`].
    pub fn calculate(catalog: &[String], current_version: &str) -> VersionDistance {
        let ordered = NaturalVersionOrder::order_catalog(catalog);

        let Some(latest) = ordered.last() else {
            return VersionDistance::new(current_version.to_string(), 0);
        };

        let versions_back = ordered
            .iter()
            .position(|v| v == current_version)
            .map(|index| (ordered.len() - index - 1) as i64)
            .unwrap_or(VersionDistance::NOT_IN_CATALOG);

        VersionDistance::new(latest.clone(), versions_back)
    }
}
