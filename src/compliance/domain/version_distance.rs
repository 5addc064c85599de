use serde::Serialize;

/// Position of a component version relative to the newest known release
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionDistance {
    latest_version: String,
    versions_back: i64,
}

impl VersionDistance {
    /// Sentinel distance for a version missing from the catalog
    pub const NOT_IN_CATALOG: i64 = -1;

    pub fn new(latest_version: String, versions_back: i64) -> Self {
        Self {
            latest_version,
            versions_back,
        }
    }

    pub fn latest_version(&self) -> &str {
        &self.latest_version
    }

    pub fn versions_back(&self) -> i64 {
        self.versions_back
    }

    /// True when the version could not be matched against the catalog
    pub fn is_unmatched(&self) -> bool {
        self.versions_back == Self::NOT_IN_CATALOG
    }
}
