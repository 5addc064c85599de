use super::{ProjectId, ReviewStatus};
use indexmap::IndexMap;
use serde::Serialize;

/// Review status per project id, built fresh for every report.
///
/// The initial pass fills it from inventory tallies; the rollup pass
/// consumes it and returns an escalated copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReviewStatusTable {
    statuses: IndexMap<ProjectId, ReviewStatus>,
}

impl ReviewStatusTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, project_id: ProjectId) -> Option<ReviewStatus> {
        self.statuses.get(&project_id).copied()
    }

    pub fn set(&mut self, project_id: ProjectId, status: ReviewStatus) {
        self.statuses.insert(project_id, status);
    }

    /// Raises the stored status to `status` if that is worse; never lowers it.
    /// Returns the status now stored.
    pub fn escalate(&mut self, project_id: ProjectId, status: ReviewStatus) -> ReviewStatus {
        let entry = self
            .statuses
            .entry(project_id)
            .or_insert(ReviewStatus::Approved);
        *entry = (*entry).max(status);
        *entry
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProjectId, ReviewStatus)> + '_ {
        self.statuses.iter().map(|(id, status)| (*id, *status))
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}

impl FromIterator<(ProjectId, ReviewStatus)> for ReviewStatusTable {
    fn from_iter<I: IntoIterator<Item = (ProjectId, ReviewStatus)>>(iter: I) -> Self {
        Self {
            statuses: iter.into_iter().collect(),
        }
    }
}
