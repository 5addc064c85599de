/// Run-scoped services that wrap outbound ports
///
/// Both are created fresh for every report so nothing leaks between runs.
mod license_detail_cache;
mod version_distance_resolver;

pub use license_detail_cache::LicenseDetailCache;
pub use version_distance_resolver::VersionDistanceResolver;
