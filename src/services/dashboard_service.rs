use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::models::{dashboard::DashboardStats, interview::Interview};
use crate::services::api_service::MockApi;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub stats: DashboardStats,
    pub interviews: Vec<Interview>,
}

#[derive(Clone)]
pub struct DashboardService {
    api: MockApi,
}

impl DashboardService {
    pub fn new(api: MockApi) -> Self {
        Self { api }
    }

    /// Fetches the stats cards and the interview list concurrently.
    pub async fn load(&self, token: &CancellationToken) -> Result<DashboardOverview> {
        let (stats, interviews) = tokio::try_join!(
            self.api.get_dashboard_stats(token),
            self.api.get_upcoming_interviews(token),
        )?;
        tracing::debug!(interviews = interviews.len(), "dashboard loaded");
        Ok(DashboardOverview { stats, interviews })
    }
}
