use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::database::fixtures::FixtureStore;
use crate::dto::auth_dto::LOGIN_MIN_PASSWORD_LEN;
use crate::error::Result;
use crate::models::{
    activity::Activity,
    candidate::Candidate,
    dashboard::{DashboardStats, FunnelStage, MonthlyApplications, RecruitmentFunnel, SourceOfHire},
    employee::Employee,
    interview::Interview,
    job::Job,
    user::User,
};
use crate::utils::delay::cancellable_sleep;

#[derive(Debug, Clone)]
pub struct ApiTimings {
    pub fetch: Duration,
    pub lookup: Duration,
    pub login: Duration,
}

impl ApiTimings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            fetch: config.fetch_delay(),
            lookup: config.lookup_delay(),
            login: config.login_delay(),
        }
    }
}

impl Default for ApiTimings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Stand-in for the dashboard backend: fixture data behind an artificial delay.
///
/// Every call takes a [`CancellationToken`]; cancelling it while the delay is
/// pending resolves the call with [`Error::Cancelled`](crate::error::Error::Cancelled)
/// and no data.
#[derive(Clone)]
pub struct MockApi {
    store: Arc<FixtureStore>,
    timings: ApiTimings,
}

impl MockApi {
    pub fn new(store: FixtureStore, timings: ApiTimings) -> Self {
        Self {
            store: Arc::new(store),
            timings,
        }
    }

    pub fn store(&self) -> &FixtureStore {
        &self.store
    }

    async fn fetch<T>(
        &self,
        what: &'static str,
        delay: Duration,
        token: &CancellationToken,
        select: impl FnOnce(&FixtureStore) -> T,
    ) -> Result<T> {
        cancellable_sleep(delay, token).await?;
        tracing::debug!(resource = what, "mock api resolved");
        Ok(select(&self.store))
    }

    /// Resolves to the demo user iff the email is non-blank and the password
    /// has at least six characters. No credential check is made.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        token: &CancellationToken,
    ) -> Result<Option<User>> {
        let accepted =
            !email.trim().is_empty() && password.chars().count() as u64 >= LOGIN_MIN_PASSWORD_LEN;
        self.fetch("login", self.timings.login, token, |store| {
            accepted.then(|| store.current_user.clone())
        })
        .await
    }

    pub async fn get_dashboard_stats(&self, token: &CancellationToken) -> Result<DashboardStats> {
        self.fetch("dashboard_stats", self.timings.fetch, token, |s| {
            s.dashboard_stats.clone()
        })
        .await
    }

    pub async fn get_jobs(&self, token: &CancellationToken) -> Result<Vec<Job>> {
        self.fetch("jobs", self.timings.fetch, token, |s| s.jobs.clone())
            .await
    }

    pub async fn get_job_by_id(&self, id: &str, token: &CancellationToken) -> Result<Option<Job>> {
        self.fetch("job", self.timings.lookup, token, |s| {
            s.jobs.iter().find(|j| j.id == id).cloned()
        })
        .await
    }

    pub async fn get_candidates(&self, token: &CancellationToken) -> Result<Vec<Candidate>> {
        self.fetch("candidates", self.timings.fetch, token, |s| {
            s.candidates.clone()
        })
        .await
    }

    pub async fn get_candidate_by_id(
        &self,
        id: &str,
        token: &CancellationToken,
    ) -> Result<Option<Candidate>> {
        self.fetch("candidate", self.timings.lookup, token, |s| {
            s.candidates.iter().find(|c| c.id == id).cloned()
        })
        .await
    }

    pub async fn get_upcoming_interviews(&self, token: &CancellationToken) -> Result<Vec<Interview>> {
        self.fetch("interviews", self.timings.fetch, token, |s| {
            s.upcoming_interviews.clone()
        })
        .await
    }

    pub async fn get_recent_activity(&self, token: &CancellationToken) -> Result<Vec<Activity>> {
        self.fetch("activity", self.timings.fetch, token, |s| {
            s.recent_activity.clone()
        })
        .await
    }

    pub async fn get_employees(&self, token: &CancellationToken) -> Result<Vec<Employee>> {
        self.fetch("employees", self.timings.fetch, token, |s| s.employees.clone())
            .await
    }

    pub async fn get_hiring_funnel(&self, token: &CancellationToken) -> Result<Vec<FunnelStage>> {
        self.fetch("hiring_funnel", self.timings.fetch, token, |s| {
            s.hiring_funnel.clone()
        })
        .await
    }

    pub async fn get_source_of_hire(&self, token: &CancellationToken) -> Result<Vec<SourceOfHire>> {
        self.fetch("source_of_hire", self.timings.fetch, token, |s| {
            s.source_of_hire.clone()
        })
        .await
    }

    pub async fn get_recruitment_funnel(
        &self,
        token: &CancellationToken,
    ) -> Result<RecruitmentFunnel> {
        self.fetch("recruitment_funnel", self.timings.fetch, token, |s| {
            s.recruitment_funnel.clone()
        })
        .await
    }

    pub async fn get_applications_by_month(
        &self,
        token: &CancellationToken,
    ) -> Result<Vec<MonthlyApplications>> {
        self.fetch("applications_by_month", self.timings.fetch, token, |s| {
            s.applications_by_month.clone()
        })
        .await
    }
}
