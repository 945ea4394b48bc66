use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_jobs: u32,
    pub active_jobs: u32,
    pub total_candidates: u32,
    pub new_candidates: u32,
    pub interviews_scheduled: u32,
    pub offers_extended: u32,
    /// Days.
    pub avg_time_to_hire: u32,
    /// Percent.
    pub hiring_rate: u32,
    /// Days.
    pub time_to_fill: u32,
    pub candidates_in_pipeline: u32,
    pub open_requisitions: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelStage {
    pub stage: String,
    pub count: u32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyApplications {
    pub month: String,
    pub applications: u32,
    pub hires: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceOfHire {
    pub source: String,
    pub hires: u32,
    pub percentage: u32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruitmentFunnel {
    pub new: u32,
    pub in_review: u32,
    pub interviewed: u32,
    pub hired: u32,
}
