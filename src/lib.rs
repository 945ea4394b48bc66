pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::config::Config;
use crate::database::fixtures::FixtureStore;
use crate::error::{Error, Result};
use crate::services::{
    ai_service::{DescriptionGenerator, TemplateDescriptionGenerator},
    api_service::{ApiTimings, MockApi},
    auth_service::AuthService,
    dashboard_service::DashboardService,
    editor_service::{EditorSettings, JobEditorWizard},
    filter_service::JobFilterView,
    job_service::JobCollection,
    session_service::SessionService,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub api: MockApi,
    pub jobs: JobCollection,
    pub filter: JobFilterView,
    pub session: SessionService,
    pub auth_service: AuthService,
    pub dashboard_service: DashboardService,
    pub generator: Arc<dyn DescriptionGenerator>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_store(config, FixtureStore::seed())
    }

    /// Builds the state around `store`; the job list starts as a copy of its jobs.
    pub fn with_store(config: Config, store: FixtureStore) -> Self {
        let jobs = JobCollection::new(store.jobs.clone());
        let api = MockApi::new(store, ApiTimings::from_config(&config));
        let auth_service = AuthService::new(api.clone(), config.signup_delay());
        let dashboard_service = DashboardService::new(api.clone());

        Self {
            api,
            jobs,
            filter: JobFilterView::default(),
            session: SessionService::default(),
            auth_service,
            dashboard_service,
            generator: Arc::new(TemplateDescriptionGenerator),
            config,
        }
    }

    pub fn editor_settings(&self) -> EditorSettings {
        EditorSettings::from_config(&self.config)
    }

    pub fn new_job_editor(&self) -> JobEditorWizard {
        JobEditorWizard::create(self.editor_settings())
    }

    pub fn edit_job(&self, id: &str) -> Result<JobEditorWizard> {
        let job = self
            .jobs
            .get(id)
            .ok_or_else(|| Error::NotFound(format!("job {}", id)))?;
        Ok(JobEditorWizard::edit(job, self.editor_settings()))
    }
}
