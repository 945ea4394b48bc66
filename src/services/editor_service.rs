use std::time::Duration;
use tokio_util::sync::CancellationToken;
use validator::{Validate, ValidationError};

use crate::config::Config;
use crate::error::Result;
use crate::models::job::{Department, Job, JobStatus, JobType, Salary};
use crate::services::ai_service::DescriptionGenerator;
use crate::utils::{delay::cancellable_sleep, time, token, validation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    BasicInfo,
    Description,
    BenefitsAndReview,
}

impl WizardStep {
    pub const COUNT: u8 = 3;

    /// 1-based position for "Step n of 3".
    pub fn number(self) -> u8 {
        match self {
            WizardStep::BasicInfo => 1,
            WizardStep::Description => 2,
            WizardStep::BenefitsAndReview => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Basic Information",
            WizardStep::Description => "Job Description",
            WizardStep::BenefitsAndReview => "Benefits & Review",
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            WizardStep::BasicInfo => Some(WizardStep::Description),
            WizardStep::Description => Some(WizardStep::BenefitsAndReview),
            WizardStep::BenefitsAndReview => None,
        }
    }

    fn previous(self) -> Option<Self> {
        match self {
            WizardStep::BasicInfo => None,
            WizardStep::Description => Some(WizardStep::BasicInfo),
            WizardStep::BenefitsAndReview => Some(WizardStep::Description),
        }
    }
}

/// Step 1 fields. Everything validated here is the step gate.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct BasicInfoDraft {
    #[validate(custom(function = "non_blank"))]
    pub title: String,
    #[validate(required)]
    pub department: Option<Department>,
    #[validate(custom(function = "non_blank"))]
    pub location: String,
    pub employment_type: JobType,
    #[validate(custom(function = "non_blank"))]
    pub salary_min: String,
    #[validate(custom(function = "non_blank"))]
    pub salary_max: String,
    pub currency: String,
}

/// Step 2 fields, all optional.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DescriptionDraft {
    pub description: String,
    /// Raw text, one requirement per line.
    pub requirements: String,
}

/// Step 3 fields, all optional.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BenefitsDraft {
    /// Raw text, one benefit per line.
    pub benefits: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SalaryIssue {
    #[error("Minimum salary must be a whole, non-negative number")]
    InvalidMinimum,
    #[error("Maximum salary must be a whole, non-negative number")]
    InvalidMaximum,
    #[error("Minimum salary cannot exceed maximum salary")]
    MinimumAboveMaximum,
}

impl BasicInfoDraft {
    fn blank(currency: &str) -> Self {
        Self {
            title: String::new(),
            department: None,
            location: String::new(),
            employment_type: JobType::default(),
            salary_min: String::new(),
            salary_max: String::new(),
            currency: currency.to_string(),
        }
    }

    pub fn gate_passes(&self) -> bool {
        validation::validate(self).is_ok()
    }

    pub fn salary(&self) -> std::result::Result<Salary, SalaryIssue> {
        let min = parse_salary(&self.salary_min).ok_or(SalaryIssue::InvalidMinimum)?;
        let max = parse_salary(&self.salary_max).ok_or(SalaryIssue::InvalidMaximum)?;
        Salary::new(min, max, self.currency.clone()).ok_or(SalaryIssue::MinimumAboveMaximum)
    }
}

fn non_blank(value: &str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn parse_salary(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

/// Splits line-delimited text into trimmed, non-blank entries.
pub fn split_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone)]
pub struct EditorSettings {
    pub generate_delay: Duration,
    pub save_delay: Duration,
    pub default_currency: String,
    pub deadline_days: i64,
}

impl EditorSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            generate_delay: Duration::from_millis(config.generate_delay_ms),
            save_delay: Duration::from_millis(config.save_delay_ms),
            default_currency: config.default_currency.clone(),
            deadline_days: config.deadline_days,
        }
    }
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[derive(Debug, Clone)]
enum EditorMode {
    Create,
    Edit(Box<Job>),
}

/// Three-step create/edit form.
///
/// Gating is preventive: a blocked `advance` or an unavailable `commit` does
/// nothing instead of failing, mirroring disabled buttons.
#[derive(Debug, Clone)]
pub struct JobEditorWizard {
    step: WizardStep,
    mode: EditorMode,
    settings: EditorSettings,
    basic: BasicInfoDraft,
    details: DescriptionDraft,
    extras: BenefitsDraft,
}

impl JobEditorWizard {
    pub fn create(settings: EditorSettings) -> Self {
        Self {
            step: WizardStep::BasicInfo,
            mode: EditorMode::Create,
            basic: BasicInfoDraft::blank(&settings.default_currency),
            details: DescriptionDraft::default(),
            extras: BenefitsDraft::default(),
            settings,
        }
    }

    pub fn edit(job: &Job, settings: EditorSettings) -> Self {
        Self {
            step: WizardStep::BasicInfo,
            basic: BasicInfoDraft {
                title: job.title.clone(),
                department: Some(job.department),
                location: job.location.clone(),
                employment_type: job.employment_type,
                salary_min: job.salary.min().to_string(),
                salary_max: job.salary.max().to_string(),
                currency: job.salary.currency().to_string(),
            },
            details: DescriptionDraft {
                description: job.description.clone(),
                requirements: job.requirements.join("\n"),
            },
            extras: BenefitsDraft {
                benefits: job.benefits.join("\n"),
            },
            mode: EditorMode::Edit(Box::new(job.clone())),
            settings,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditorMode::Edit(_))
    }

    pub fn heading(&self) -> &'static str {
        if self.is_editing() {
            "Edit Job"
        } else {
            "Create New Job"
        }
    }

    pub fn basic(&self) -> &BasicInfoDraft {
        &self.basic
    }

    pub fn basic_mut(&mut self) -> &mut BasicInfoDraft {
        &mut self.basic
    }

    pub fn details(&self) -> &DescriptionDraft {
        &self.details
    }

    pub fn details_mut(&mut self) -> &mut DescriptionDraft {
        &mut self.details
    }

    pub fn benefits(&self) -> &BenefitsDraft {
        &self.extras
    }

    pub fn benefits_mut(&mut self) -> &mut BenefitsDraft {
        &mut self.extras
    }

    /// Step-gate fields that are still empty, for inline messages.
    pub fn missing_fields(&self) -> Vec<String> {
        match validation::validate(&self.basic) {
            Ok(()) => Vec::new(),
            Err(errors) => validation::failed_fields(&errors),
        }
    }

    /// Step gate as an error, for callers that report rather than disable.
    pub fn ensure_step_gate(&self) -> Result<()> {
        validation::validate(&self.basic)?;
        Ok(())
    }

    pub fn salary_issue(&self) -> Option<SalaryIssue> {
        self.basic.salary().err()
    }

    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::BasicInfo => self.basic.gate_passes(),
            WizardStep::Description => true,
            WizardStep::BenefitsAndReview => false,
        }
    }

    /// Moves one step forward; returns whether the step changed.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Moves one step back keeping every field. From the first step the
    /// wizard closes and the draft is discarded.
    pub fn retreat(mut self) -> Option<Self> {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                Some(self)
            }
            None => {
                tracing::debug!(editing = self.is_editing(), "job editor closed");
                None
            }
        }
    }

    /// Fills the description step from `generator` after the configured delay.
    /// Only active on the description step; returns whether it ran.
    pub async fn generate_description(
        &mut self,
        generator: &dyn DescriptionGenerator,
        token: &CancellationToken,
    ) -> Result<bool> {
        if self.step != WizardStep::Description {
            return Ok(false);
        }

        let title = self.basic.title.clone();
        let department = self
            .basic
            .department
            .map(Department::label)
            .unwrap_or_default();

        cancellable_sleep(self.settings.generate_delay, token).await?;

        let content = generator.generate(&title, department);
        self.details.description = content.description;
        self.details.requirements = content.requirements;
        self.extras.benefits = content.benefits;
        tracing::info!(title = %title, "job description generated");
        Ok(true)
    }

    pub fn can_commit(&self) -> bool {
        self.step == WizardStep::BenefitsAndReview
            && self.basic.gate_passes()
            && self.basic.salary().is_ok()
    }

    /// Normalizes the draft into a job record, or `None` while commit is unavailable.
    pub fn build_job(&self) -> Option<Job> {
        if !self.can_commit() {
            return None;
        }
        let department = self.basic.department?;
        let salary = self.basic.salary().ok()?;
        let stamp = time::now();

        let job = match &self.mode {
            EditorMode::Create => Job {
                id: token::generate_job_id(),
                title: self.basic.title.trim().to_string(),
                department,
                location: self.basic.location.trim().to_string(),
                employment_type: self.basic.employment_type,
                salary,
                description: self.details.description.clone(),
                requirements: split_lines(&self.details.requirements),
                benefits: split_lines(&self.extras.benefits),
                status: JobStatus::Draft,
                applicants: 0,
                new_applicants: 0,
                ai_score: token::initial_ai_score(),
                posted_at: None,
                deadline: time::days_from_today(self.settings.deadline_days),
                created_at: stamp,
                updated_at: stamp,
            },
            EditorMode::Edit(original) => Job {
                title: self.basic.title.trim().to_string(),
                department,
                location: self.basic.location.trim().to_string(),
                employment_type: self.basic.employment_type,
                salary,
                description: self.details.description.clone(),
                requirements: split_lines(&self.details.requirements),
                benefits: split_lines(&self.extras.benefits),
                ai_score: match original.ai_score {
                    0 => token::initial_ai_score(),
                    score => score,
                },
                updated_at: stamp,
                ..(**original).clone()
            },
        };
        Some(job)
    }

    /// Builds the job and waits out the simulated save. `Ok(None)` means
    /// commit is not available yet; the caller keeps the wizard open.
    pub async fn commit(&self, token: &CancellationToken) -> Result<Option<Job>> {
        let Some(job) = self.build_job() else {
            return Ok(None);
        };

        cancellable_sleep(self.settings.save_delay, token).await?;
        tracing::info!(job_id = %job.id, editing = self.is_editing(), "job editor committed");
        Ok(Some(job))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::fixtures::FixtureStore;
    use crate::services::ai_service::{GeneratedContent, MockDescriptionGenerator};

    fn filled() -> JobEditorWizard {
        let mut wizard = JobEditorWizard::create(EditorSettings::default());
        let basic = wizard.basic_mut();
        basic.title = "Data Engineer".into();
        basic.department = Some(Department::Engineering);
        basic.location = "Oslo".into();
        basic.salary_min = "50000".into();
        basic.salary_max = "70000".into();
        wizard
    }

    fn at_review(mut wizard: JobEditorWizard) -> JobEditorWizard {
        assert!(wizard.advance());
        assert!(wizard.advance());
        assert_eq!(wizard.step(), WizardStep::BenefitsAndReview);
        wizard
    }

    #[test]
    fn create_starts_blank_on_first_step() {
        let wizard = JobEditorWizard::create(EditorSettings::default());
        assert_eq!(wizard.step().number(), 1);
        assert_eq!(wizard.basic().currency, "EUR");
        assert_eq!(wizard.basic().employment_type, JobType::FullTime);
        assert_eq!(wizard.heading(), "Create New Job");
        assert_eq!(
            wizard.missing_fields(),
            ["department", "location", "salary_max", "salary_min", "title"]
        );
    }

    #[test]
    fn gate_blocks_on_each_missing_field() {
        let clear: [fn(&mut BasicInfoDraft); 5] = [
            |b| b.title.clear(),
            |b| b.department = None,
            |b| b.location.clear(),
            |b| b.salary_min.clear(),
            |b| b.salary_max.clear(),
        ];
        for clear_field in clear {
            let mut wizard = filled();
            wizard.details_mut().description = "filled later steps do not help".into();
            wizard.benefits_mut().benefits = "Gym".into();
            clear_field(wizard.basic_mut());
            assert!(!wizard.can_advance());
            assert!(!wizard.advance());
            assert_eq!(wizard.step(), WizardStep::BasicInfo);
        }
        assert!(filled().can_advance());
    }

    #[test]
    fn step_gate_reports_validation_errors() {
        let mut wizard = filled();
        assert!(wizard.ensure_step_gate().is_ok());

        wizard.basic_mut().location.clear();
        let err = wizard.ensure_step_gate().unwrap_err();
        assert!(matches!(err, crate::error::Error::Validation(_)));
    }

    #[test]
    fn whitespace_only_fields_do_not_pass_the_gate() {
        let mut wizard = filled();
        wizard.basic_mut().title = "   ".into();
        wizard.basic_mut().location = "\t".into();
        assert!(!wizard.can_advance());
        assert_eq!(wizard.missing_fields(), ["location", "title"]);

        let mut wizard = filled();
        wizard.basic_mut().title = "  Data Engineer ".into();
        let job = at_review(wizard).build_job().unwrap();
        assert_eq!(job.title, "Data Engineer");
    }

    #[test]
    fn editing_an_unscored_job_assigns_a_score() {
        let original = FixtureStore::seed()
            .jobs
            .into_iter()
            .find(|job| job.id == "job-006")
            .unwrap();
        assert_eq!(original.ai_score, 0);

        let wizard = JobEditorWizard::edit(&original, EditorSettings::default());
        let job = at_review(wizard).build_job().unwrap();
        assert_eq!(job.id, "job-006");
        assert!((70..=99).contains(&job.ai_score));
        assert_eq!(job.status, JobStatus::Draft);
    }

    #[test]
    fn description_step_is_not_gated() {
        let mut wizard = filled();
        assert!(wizard.advance());
        assert!(wizard.details().description.is_empty());
        assert!(wizard.advance());
        assert!(!wizard.can_advance());
        assert!(!wizard.advance());
    }

    #[test]
    fn retreat_keeps_fields_and_closes_from_first_step() {
        let mut wizard = at_review(filled());
        wizard.benefits_mut().benefits = "Gym".into();

        let wizard = wizard.retreat().unwrap();
        assert_eq!(wizard.step(), WizardStep::Description);
        let wizard = wizard.retreat().unwrap();
        assert_eq!(wizard.step(), WizardStep::BasicInfo);
        assert_eq!(wizard.basic().title, "Data Engineer");
        assert_eq!(wizard.benefits().benefits, "Gym");

        assert!(wizard.retreat().is_none());
    }

    #[test]
    fn commit_needs_last_step_and_valid_salary() {
        let wizard = filled();
        assert!(!wizard.can_commit());
        assert!(wizard.build_job().is_none());

        let mut wizard = at_review(filled());
        assert!(wizard.can_commit());

        wizard.basic_mut().salary_max = "lots".into();
        assert_eq!(wizard.salary_issue(), Some(SalaryIssue::InvalidMaximum));
        assert!(!wizard.can_commit());

        wizard.basic_mut().salary_max = "40000".into();
        assert_eq!(wizard.salary_issue(), Some(SalaryIssue::MinimumAboveMaximum));
        assert!(wizard.build_job().is_none());

        wizard.basic_mut().salary_max = "70000".into();
        wizard.basic_mut().title.clear();
        assert!(!wizard.can_commit());
    }

    #[test]
    fn build_job_normalizes_a_new_draft() {
        let mut wizard = filled();
        wizard.advance();
        wizard.details_mut().requirements = "A\n\nB\n".into();
        wizard.advance();
        wizard.benefits_mut().benefits = "  Gym  \r\n \nPension".into();

        let job = wizard.build_job().unwrap();
        assert!(job.id.starts_with("job-"));
        assert_eq!(job.requirements, ["A", "B"]);
        assert_eq!(job.benefits, ["Gym", "Pension"]);
        assert_eq!(job.salary, Salary::new(50_000, 70_000, "EUR").unwrap());
        assert_eq!(job.status, JobStatus::Draft);
        assert_eq!(job.applicants, 0);
        assert!((70..=99).contains(&job.ai_score));
        assert!(job.posted_at.is_none());
        assert_eq!(job.created_at, job.updated_at);
        assert_eq!(job.deadline, time::days_from_today(30));
    }

    #[test]
    fn editing_preserves_identity_and_counters() {
        let original = FixtureStore::seed().jobs[0].clone();
        let mut wizard = JobEditorWizard::edit(&original, EditorSettings::default());
        assert!(wizard.is_editing());
        assert_eq!(wizard.basic().salary_min, "65000");
        assert_eq!(
            wizard.details().requirements,
            "5+ years React experience\nTypeScript proficiency\nTeam leadership"
        );

        wizard.basic_mut().title = "Staff Frontend Developer".into();
        let job = at_review(wizard).build_job().unwrap();

        assert_eq!(job.id, original.id);
        assert_eq!(job.title, "Staff Frontend Developer");
        assert_eq!(job.created_at, original.created_at);
        assert_eq!(job.status, original.status);
        assert_eq!(job.applicants, original.applicants);
        assert_eq!(job.new_applicants, original.new_applicants);
        assert_eq!(job.ai_score, original.ai_score);
        assert_eq!(job.posted_at, original.posted_at);
        assert_eq!(job.deadline, original.deadline);
        assert_eq!(job.requirements, original.requirements);
        assert!(job.updated_at > original.updated_at);
    }

    #[tokio::test(start_paused = true)]
    async fn generation_fills_description_step() {
        let mut generator = MockDescriptionGenerator::new();
        generator
            .expect_generate()
            .withf(|title: &str, department: &str| {
                title == "Data Engineer" && department == "Engineering"
            })
            .times(1)
            .return_const(GeneratedContent {
                description: "Build pipelines.".into(),
                requirements: "Rust\n\nSQL".into(),
                benefits: "Sauna".into(),
            });

        let mut wizard = filled();
        let token = CancellationToken::new();
        assert!(!wizard.generate_description(&generator, &token).await.unwrap());

        wizard.advance();
        let start = tokio::time::Instant::now();
        assert!(wizard.generate_description(&generator, &token).await.unwrap());
        assert!(start.elapsed() >= Duration::from_millis(1500));
        assert_eq!(wizard.details().description, "Build pipelines.");
        assert_eq!(wizard.benefits().benefits, "Sauna");
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_generation_leaves_draft_untouched() {
        let mut generator = MockDescriptionGenerator::new();
        generator.expect_generate().times(0);

        let mut wizard = filled();
        wizard.advance();
        wizard.details_mut().description = "Hand written".into();

        let token = CancellationToken::new();
        token.cancel();
        let err = wizard
            .generate_description(&generator, &token)
            .await
            .unwrap_err();
        assert!(err.is_cancelled());
        assert_eq!(wizard.details().description, "Hand written");
    }

    #[tokio::test(start_paused = true)]
    async fn commit_waits_for_save_delay() {
        let wizard = at_review(filled());
        let token = CancellationToken::new();

        let start = tokio::time::Instant::now();
        let job = wizard.commit(&token).await.unwrap().unwrap();
        assert!(start.elapsed() >= Duration::from_millis(500));
        assert_eq!(job.title, "Data Engineer");
    }

    #[tokio::test(start_paused = true)]
    async fn unavailable_commit_is_a_no_op() {
        let wizard = filled();
        let token = CancellationToken::new();
        assert!(wizard.commit(&token).await.unwrap().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_commit_produces_nothing() {
        let wizard = at_review(filled());
        let token = CancellationToken::new();
        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            canceller.cancel();
        });

        let err = wizard.commit(&token).await.unwrap_err();
        assert!(err.is_cancelled());
    }
}
