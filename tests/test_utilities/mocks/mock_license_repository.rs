use compliance_report::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock LicenseRepository for testing that counts lookups
#[derive(Default)]
pub struct MockLicenseRepository {
    pub licenses: HashMap<LicenseId, LicenseRecord>,
    pub call_count: AtomicUsize,
}

impl MockLicenseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_license(mut self, id: u64, spdx_identifier: &str, priority: u8) -> Self {
        self.licenses.insert(
            LicenseId::new(id),
            LicenseRecord {
                url: format!("https://spdx.org/licenses/{}.html", spdx_identifier),
                spdx_identifier: spdx_identifier.to_string(),
                short_name: String::new(),
                priority: Some(priority),
            },
        );
        self
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl LicenseRepository for MockLicenseRepository {
    fn fetch_license(&self, license_id: LicenseId) -> Result<LicenseRecord> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.licenses
            .get(&license_id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Mock license {} not found", license_id))
    }
}
