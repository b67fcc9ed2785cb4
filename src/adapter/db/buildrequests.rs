use chrono::Utc;

use super::Database;
use crate::domain::{BuildRequest, BuildRequestId, BuildsetId, Results};

impl Database {
    pub fn get_buildrequest(&self, brid: BuildRequestId) -> Option<BuildRequest> {
        self.buildrequests.get(brid.get())
    }

    /// List build requests, optionally restricted to one buildset.
    pub fn list_buildrequests(&self, bsid: Option<BuildsetId>) -> Vec<BuildRequest> {
        self.buildrequests
            .filter(|br| bsid.map_or(true, |bsid| br.bsid == bsid))
    }

    /// Complete a build request that is still pending.
    ///
    /// Returns the updated row, or `None` if the request does not exist or
    /// was already complete.
    pub fn complete_buildrequest(
        &self,
        brid: BuildRequestId,
        results: Results,
    ) -> Option<BuildRequest> {
        let mut completed = None;
        self.buildrequests.update(brid.get(), |br| {
            if !br.complete {
                br.complete = true;
                br.results = Some(results);
                br.complete_at = Some(Utc::now());
                completed = Some(br.clone());
            }
        });
        completed
    }
}
