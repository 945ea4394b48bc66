use nordmatch::{
    config::{get_config, init_config},
    dto::{auth_dto::LoginPayload, job_dto::JobFilterQuery},
    models::job::{Department, JobStatus},
    services::{auth_service::LoginOutcome, filter_service::JobFilterView},
    AppState,
};
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_config()?;
    let config = get_config();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let shutdown = CancellationToken::new();
    {
        let token = shutdown.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Shutdown signal received");
                token.cancel();
            }
        });
    }

    let mut state = AppState::new(config.clone());
    info!(route = state.session.landing_route().path(), "Starting nordmatch demo");

    let payload = LoginPayload {
        email: "sarah@techcorp.com".to_string(),
        password: "demo-password".to_string(),
    };
    match state
        .auth_service
        .login(payload, &mut state.session, &shutdown)
        .await?
    {
        LoginOutcome::SignedIn(user) => info!(user = %user.full_name(), "Signed in"),
        LoginOutcome::Rejected(message) => anyhow::bail!(message),
    }

    let overview = state.dashboard_service.load(&shutdown).await?;
    info!(
        active_jobs = overview.stats.active_jobs,
        interviews = overview.interviews.len(),
        "Dashboard loaded"
    );

    let mut wizard = state.new_job_editor();
    {
        let basic = wizard.basic_mut();
        basic.title = "Platform Engineer".to_string();
        basic.department = Some(Department::Engineering);
        basic.location = "Stockholm, Sweden".to_string();
        basic.salary_min = "65000".to_string();
        basic.salary_max = "85000".to_string();
    }
    wizard.advance();
    wizard
        .generate_description(state.generator.as_ref(), &shutdown)
        .await?;
    wizard.advance();

    let Some(job) = wizard.commit(&shutdown).await? else {
        anyhow::bail!("job draft is incomplete: {:?}", wizard.missing_fields());
    };
    let job_id = job.id.clone();
    state.jobs.upsert(job);
    state.jobs.transition_status(&job_id, JobStatus::Active);

    let stats = state.jobs.aggregate();
    info!(
        total = stats.total,
        active = stats.active,
        applicants = stats.applicants,
        new_applicants = stats.new_applicants,
        "Job board totals"
    );

    let criteria = JobFilterQuery {
        search: Some("engineer".to_string()),
        department: Some(Department::Engineering.label().to_string()),
        status: Some("active".to_string()),
    }
    .into_criteria()?;
    state.filter = JobFilterView::new(criteria);
    for job in state.filter.apply(state.jobs.as_slice()) {
        info!(id = %job.id, title = %job.title, "Matching job");
    }

    Ok(())
}
