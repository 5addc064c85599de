use crate::compliance::domain::{InventoryItem, ReviewStatus};

/// Review-status counts of one project's inventory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewStatusTally {
    pub approved: u64,
    pub rejected: u64,
    pub draft: u64,
    /// Items whose status could not be recognized; excluded from the three counts above
    pub unrecognized: u64,
}

impl ReviewStatusTally {
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a InventoryItem>) -> Self {
        let mut tally = Self::default();
        for item in items {
            tally.record(item);
        }
        tally
    }

    pub fn record(&mut self, item: &InventoryItem) {
        match item.parsed_review_status() {
            Some(ReviewStatus::Approved) => self.approved += 1,
            Some(ReviewStatus::Rejected) => self.rejected += 1,
            Some(ReviewStatus::Draft) => self.draft += 1,
            None => {
                tracing::error!(
                    inventory_id = %item.id,
                    "Unknown inventory review status: {}",
                    item.review_status
                );
                self.unrecognized += 1;
            }
        }
    }

    /// The project's own status before any rollup: Rejected if any item is
    /// rejected, else Draft if any is draft, else Approved
    pub fn initial_status(&self) -> ReviewStatus {
        if self.rejected > 0 {
            ReviewStatus::Rejected
        } else if self.draft > 0 {
            ReviewStatus::Draft
        } else {
            ReviewStatus::Approved
        }
    }
}
