use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Draft,
    Active,
    Paused,
    Closed,
}

/// Menu actions offered for a job, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusAction {
    SetActive,
    Pause,
    Close,
}

impl StatusAction {
    pub fn target(self) -> JobStatus {
        match self {
            StatusAction::SetActive => JobStatus::Active,
            StatusAction::Pause => JobStatus::Paused,
            StatusAction::Close => JobStatus::Closed,
        }
    }
}

impl JobStatus {
    pub const ALL: [JobStatus; 4] = [
        JobStatus::Active,
        JobStatus::Paused,
        JobStatus::Draft,
        JobStatus::Closed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Draft => "draft",
            JobStatus::Active => "active",
            JobStatus::Paused => "paused",
            JobStatus::Closed => "closed",
        }
    }

    pub fn available_actions(self) -> Vec<StatusAction> {
        let mut actions = Vec::with_capacity(2);
        if self != JobStatus::Active {
            actions.push(StatusAction::SetActive);
        }
        if self == JobStatus::Active {
            actions.push(StatusAction::Pause);
        }
        if self != JobStatus::Closed {
            actions.push(StatusAction::Close);
        }
        actions
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = String;

    /// Case-insensitive, so select labels such as "Active" parse too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(JobStatus::Draft),
            "active" => Ok(JobStatus::Active),
            "paused" => Ok(JobStatus::Paused),
            "closed" => Ok(JobStatus::Closed),
            other => Err(format!("unknown job status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    #[default]
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl JobType {
    pub const ALL: [JobType; 4] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Internship,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Contract => "contract",
            JobType::Internship => "internship",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    Design,
    Marketing,
    #[serde(rename = "Human Resources")]
    HumanResources,
    Analytics,
    Sales,
    Finance,
    Operations,
}

impl Department {
    pub const ALL: [Department; 8] = [
        Department::Engineering,
        Department::Design,
        Department::Marketing,
        Department::HumanResources,
        Department::Analytics,
        Department::Sales,
        Department::Finance,
        Department::Operations,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::Design => "Design",
            Department::Marketing => "Marketing",
            Department::HumanResources => "Human Resources",
            Department::Analytics => "Analytics",
            Department::Sales => "Sales",
            Department::Finance => "Finance",
            Department::Operations => "Operations",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Department {
    type Err = String;

    /// Exact, case-sensitive label match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|d| d.label() == s)
            .ok_or_else(|| format!("unknown department: {}", s))
    }
}

/// Salary range with `min <= max`, checked on construction and on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SalaryFields")]
pub struct Salary {
    min: u32,
    max: u32,
    currency: String,
}

#[derive(Deserialize)]
struct SalaryFields {
    min: u32,
    max: u32,
    currency: String,
}

impl TryFrom<SalaryFields> for Salary {
    type Error = String;

    fn try_from(fields: SalaryFields) -> Result<Self, Self::Error> {
        Salary::new(fields.min, fields.max, fields.currency).ok_or_else(|| {
            format!(
                "salary minimum {} exceeds maximum {}",
                fields.min, fields.max
            )
        })
    }
}

impl Salary {
    /// Returns `None` when `min > max`.
    pub fn new(min: u32, max: u32, currency: impl Into<String>) -> Option<Self> {
        (min <= max).then(|| Self {
            min,
            max,
            currency: currency.into(),
        })
    }

    /// Range covering both bounds, whichever order they come in.
    pub fn spanning(a: u32, b: u32, currency: impl Into<String>) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
            currency: currency.into(),
        }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub department: Department,
    pub location: String,
    #[serde(rename = "type")]
    pub employment_type: JobType,
    pub salary: Salary,
    pub description: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub status: JobStatus,
    pub applicants: u32,
    pub new_applicants: u32,
    pub ai_score: u8,
    pub posted_at: Option<DateTime<Utc>>,
    pub deadline: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Caps `new_applicants` at `applicants` and drops blank list entries,
    /// trimming the rest. Applied before a job enters the board.
    pub fn normalized(mut self) -> Self {
        if self.new_applicants > self.applicants {
            tracing::warn!(
                job_id = %self.id,
                applicants = self.applicants,
                new_applicants = self.new_applicants,
                "new applicants capped at total"
            );
            self.new_applicants = self.applicants;
        }
        self.requirements = tidy_entries(self.requirements);
        self.benefits = tidy_entries(self.benefits);
        self
    }
}

fn tidy_entries(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .collect()
}
