use crate::compliance::domain::{LicenseDetails, LicenseId, LicensePriority};
use crate::shared::Result;
use serde::Deserialize;

/// License entry as the license catalog returns it
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LicenseRecord {
    pub url: String,
    pub spdx_identifier: String,
    pub short_name: String,
    pub priority: Option<u8>,
}

impl LicenseRecord {
    /// Converts into display details; the SPDX identifier wins over the short name
    pub fn into_details(self) -> LicenseDetails {
        let name = if self.spdx_identifier.is_empty() {
            self.short_name
        } else {
            self.spdx_identifier
        };
        LicenseDetails::new(name, self.url, LicensePriority::from_level(self.priority))
    }
}

/// LicenseRepository port for looking up license metadata by id
pub trait LicenseRepository {
    /// Fetches one license record
    ///
    /// # Errors
    /// Returns an error if the license is unknown or the lookup fails
    fn fetch_license(&self, license_id: LicenseId) -> Result<LicenseRecord>;
}

impl<T: LicenseRepository + ?Sized> LicenseRepository for &T {
    fn fetch_license(&self, license_id: LicenseId) -> Result<LicenseRecord> {
        (**self).fetch_license(license_id)
    }
}
