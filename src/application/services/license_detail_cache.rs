use crate::compliance::domain::{LicenseDetails, LicenseId};
use crate::ports::outbound::LicenseRepository;
use dashmap::DashMap;

/// LicenseDetailCache memoizes license lookups for one report run
///
/// Every distinct license id reaches the repository at most once, however
/// many inventory items reference it. A failed lookup is remembered as
/// unspecified details so it is not retried within the run.
pub struct LicenseDetailCache<'a, R: LicenseRepository> {
    repository: &'a R,
    cache: DashMap<LicenseId, LicenseDetails>,
}

impl<'a, R: LicenseRepository> LicenseDetailCache<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self {
            repository,
            cache: DashMap::new(),
        }
    }

    /// Resolves the details of a selected license
    ///
    /// Items without a selected license get unspecified details and
    /// never trigger a lookup.
    pub fn get(&self, license_id: Option<LicenseId>) -> LicenseDetails {
        let Some(license_id) = license_id else {
            return LicenseDetails::unspecified();
        };

        if let Some(cached) = self.cache.get(&license_id) {
            return cached.clone();
        }

        let details = match self.repository.fetch_license(license_id) {
            Ok(record) => record.into_details(),
            Err(e) => {
                tracing::warn!(license_id = %license_id, "License lookup failed: {:#}", e);
                LicenseDetails::unspecified()
            }
        };

        self.cache.insert(license_id, details.clone());
        details
    }

    /// Number of distinct licenses resolved so far
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
