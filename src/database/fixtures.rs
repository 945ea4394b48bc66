use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{
    activity::{Activity, ActivityType},
    candidate::{Candidate, CandidateStatus},
    dashboard::{DashboardStats, FunnelStage, MonthlyApplications, RecruitmentFunnel, SourceOfHire},
    employee::{Employee, EmployeeStatus},
    interview::{Interview, InterviewCandidate, InterviewStatus, InterviewType, Interviewer},
    job::{Department, Job, JobStatus, JobType, Salary},
    user::{Company, User, UserRole},
};

/// Read-only in-memory dataset served by the mock api.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    pub current_user: User,
    pub jobs: Vec<Job>,
    pub candidates: Vec<Candidate>,
    pub employees: Vec<Employee>,
    pub dashboard_stats: DashboardStats,
    pub recruitment_funnel: RecruitmentFunnel,
    pub source_of_hire: Vec<SourceOfHire>,
    pub upcoming_interviews: Vec<Interview>,
    pub recent_activity: Vec<Activity>,
    pub hiring_funnel: Vec<FunnelStage>,
    pub applications_by_month: Vec<MonthlyApplications>,
}

impl Default for FixtureStore {
    fn default() -> Self {
        Self::seed()
    }
}

impl FixtureStore {
    pub fn seed() -> Self {
        Self {
            current_user: current_user(),
            jobs: jobs(),
            candidates: candidates(),
            employees: employees(),
            dashboard_stats: dashboard_stats(),
            recruitment_funnel: RecruitmentFunnel {
                new: 120,
                in_review: 85,
                interviewed: 45,
                hired: 12,
            },
            source_of_hire: vec![
                source("LinkedIn", 45, 35, "#2D5F8D"),
                source("Job Boards", 32, 25, "#366EA6"),
                source("Referrals", 28, 22, "#E6A23C"),
                source("Career Site", 15, 12, "#6E9EC2"),
                source("Other", 8, 6, "#B7CCE2"),
            ],
            upcoming_interviews: interviews(),
            recent_activity: activity(),
            hiring_funnel: vec![
                stage("Applied", 156, "#2D5F8D"),
                stage("Screening", 89, "#366EA6"),
                stage("Interview", 34, "#6E9EC2"),
                stage("Offer", 12, "#E6A23C"),
                stage("Hired", 8, "#2E7D32"),
            ],
            applications_by_month: vec![
                month("Jan", 45, 3),
                month("Feb", 52, 4),
                month("Mar", 61, 5),
                month("Apr", 48, 2),
                month("May", 55, 4),
                month("Jun", 67, 6),
            ],
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    date(y, m, d)
        .and_hms_opt(h, min, 0)
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn current_user() -> User {
    User {
        id: "user-001".into(),
        email: "sarah@techcorp.com".into(),
        first_name: "Sarah".into(),
        last_name: "Johnson".into(),
        role: UserRole::Recruiter,
        company: Company {
            id: "company-001".into(),
            name: "TechCorp".into(),
            logo: Some("/logo.png".into()),
            industry: "Technology".into(),
            size: "50-200".into(),
            location: "Stockholm, Sweden".into(),
        },
        created_at: at(2024, 1, 1, 0, 0),
    }
}

struct JobSeed<'a> {
    id: &'a str,
    title: &'a str,
    department: Department,
    location: &'a str,
    employment_type: JobType,
    salary: (u32, u32),
    description: &'a str,
    requirements: [&'a str; 3],
    benefits: [&'a str; 3],
    status: JobStatus,
    applicants: (u32, u32),
    ai_score: u8,
    posted: Option<DateTime<Utc>>,
    deadline: NaiveDate,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
}

impl JobSeed<'_> {
    fn build(self) -> Job {
        Job {
            id: self.id.into(),
            title: self.title.into(),
            department: self.department,
            location: self.location.into(),
            employment_type: self.employment_type,
            salary: Salary::spanning(self.salary.0, self.salary.1, "EUR"),
            description: self.description.into(),
            requirements: strings(&self.requirements),
            benefits: strings(&self.benefits),
            status: self.status,
            applicants: self.applicants.0,
            new_applicants: self.applicants.1,
            ai_score: self.ai_score,
            posted_at: self.posted,
            deadline: self.deadline,
            created_at: self.created,
            updated_at: self.updated,
        }
    }
}

fn jobs() -> Vec<Job> {
    vec![
        JobSeed {
            id: "job-001",
            title: "Senior Frontend Developer",
            department: Department::Engineering,
            location: "Stockholm, Sweden",
            employment_type: JobType::FullTime,
            salary: (65_000, 85_000),
            description: "We are looking for a Senior Frontend Developer to join our growing team.",
            requirements: ["5+ years React experience", "TypeScript proficiency", "Team leadership"],
            benefits: ["Remote work options", "Health insurance", "Stock options"],
            status: JobStatus::Active,
            applicants: (47, 12),
            ai_score: 89,
            posted: Some(at(2024, 1, 15, 0, 0)),
            deadline: date(2024, 2, 15),
            created: at(2024, 1, 15, 0, 0),
            updated: at(2024, 1, 20, 0, 0),
        }
        .build(),
        JobSeed {
            id: "job-002",
            title: "Product Designer",
            department: Department::Design,
            location: "Remote",
            employment_type: JobType::FullTime,
            salary: (55_000, 70_000),
            description: "Join our design team to create beautiful user experiences.",
            requirements: ["3+ years UX/UI", "Figma expertise", "Design systems"],
            benefits: ["Flexible hours", "Learning budget", "Home office setup"],
            status: JobStatus::Active,
            applicants: (32, 5),
            ai_score: 76,
            posted: Some(at(2024, 1, 18, 0, 0)),
            deadline: date(2024, 2, 20),
            created: at(2024, 1, 18, 0, 0),
            updated: at(2024, 1, 22, 0, 0),
        }
        .build(),
        JobSeed {
            id: "job-003",
            title: "DevOps Engineer",
            department: Department::Engineering,
            location: "Malmö, Sweden",
            employment_type: JobType::FullTime,
            salary: (70_000, 90_000),
            description: "We need a DevOps engineer to improve our infrastructure.",
            requirements: ["AWS/GCP experience", "Kubernetes", "CI/CD pipelines"],
            benefits: ["Competitive salary", "Conference budget", "Gym membership"],
            status: JobStatus::Active,
            applicants: (23, 8),
            ai_score: 82,
            posted: Some(at(2024, 1, 10, 0, 0)),
            deadline: date(2024, 2, 10),
            created: at(2024, 1, 10, 0, 0),
            updated: at(2024, 1, 15, 0, 0),
        }
        .build(),
        JobSeed {
            id: "job-004",
            title: "Marketing Manager",
            department: Department::Marketing,
            location: "Stockholm, Sweden",
            employment_type: JobType::FullTime,
            salary: (50_000, 65_000),
            description: "Lead our marketing initiatives and brand strategy.",
            requirements: ["5+ years marketing", "B2B experience", "Analytics skills"],
            benefits: ["Performance bonus", "Team events", "Parental leave"],
            status: JobStatus::Paused,
            applicants: (56, 0),
            ai_score: 71,
            posted: Some(at(2024, 1, 5, 0, 0)),
            deadline: date(2024, 2, 5),
            created: at(2024, 1, 5, 0, 0),
            updated: at(2024, 1, 25, 0, 0),
        }
        .build(),
        JobSeed {
            id: "job-005",
            title: "Junior Backend Developer",
            department: Department::Engineering,
            location: "Gothenburg, Sweden",
            employment_type: JobType::FullTime,
            salary: (40_000, 50_000),
            description: "Great opportunity for junior developers to grow.",
            requirements: ["Node.js basics", "SQL knowledge", "Eager to learn"],
            benefits: ["Mentorship program", "Training budget", "Career growth"],
            status: JobStatus::Active,
            applicants: (89, 15),
            ai_score: 94,
            posted: Some(at(2024, 1, 20, 0, 0)),
            deadline: date(2024, 2, 25),
            created: at(2024, 1, 20, 0, 0),
            updated: at(2024, 1, 20, 0, 0),
        }
        .build(),
        JobSeed {
            id: "job-006",
            title: "HR Coordinator",
            department: Department::HumanResources,
            location: "Stockholm, Sweden",
            employment_type: JobType::PartTime,
            salary: (35_000, 45_000),
            description: "Support our HR team with daily operations.",
            requirements: ["HR experience", "Communication skills", "HRIS knowledge"],
            benefits: ["Flexible schedule", "Work-life balance", "Growth opportunities"],
            status: JobStatus::Draft,
            applicants: (0, 0),
            ai_score: 0,
            posted: None,
            deadline: date(2024, 3, 1),
            created: at(2024, 1, 25, 0, 0),
            updated: at(2024, 1, 25, 0, 0),
        }
        .build(),
        JobSeed {
            id: "job-007",
            title: "Data Analyst",
            department: Department::Analytics,
            location: "Remote",
            employment_type: JobType::Contract,
            salary: (60_000, 75_000),
            description: "Analyze data to drive business decisions.",
            requirements: ["SQL expertise", "Python/R", "Data visualization"],
            benefits: ["Remote first", "Project bonuses", "Flexible contract"],
            status: JobStatus::Closed,
            applicants: (41, 0),
            ai_score: 88,
            posted: Some(at(2023, 12, 1, 0, 0)),
            deadline: date(2024, 1, 15),
            created: at(2023, 12, 1, 0, 0),
            updated: at(2024, 1, 16, 0, 0),
        }
        .build(),
    ]
}

fn candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            id: "cand-001".into(),
            first_name: "Alex".into(),
            last_name: "Chen".into(),
            email: "alex.chen@email.com".into(),
            phone: "+46 70 123 4567".into(),
            location: "Stockholm, Sweden".into(),
            current_role: "Frontend Developer".into(),
            experience: 6,
            skills: strings(&["React", "TypeScript", "Next.js", "Tailwind CSS"]),
            resume_url: Some("/resumes/alex-chen.pdf".into()),
            linkedin_url: Some("https://linkedin.com/in/alexchen".into()),
            portfolio_url: None,
            status: CandidateStatus::Interview,
            applied_job_id: "job-001".into(),
            applied_job_title: "Senior Frontend Developer".into(),
            ai_match_score: 94,
            applied_at: at(2024, 1, 18, 0, 0),
            notes: strings(&["Strong portfolio", "Good culture fit"]),
        },
        Candidate {
            id: "cand-002".into(),
            first_name: "Maria".into(),
            last_name: "Santos".into(),
            email: "maria.santos@email.com".into(),
            phone: "+46 73 987 6543".into(),
            location: "Remote".into(),
            current_role: "UI/UX Designer".into(),
            experience: 4,
            skills: strings(&["Figma", "User Research", "Prototyping", "Design Systems"]),
            resume_url: Some("/resumes/maria-santos.pdf".into()),
            linkedin_url: None,
            portfolio_url: Some("https://mariasantos.design".into()),
            status: CandidateStatus::Screening,
            applied_job_id: "job-002".into(),
            applied_job_title: "Product Designer".into(),
            ai_match_score: 87,
            applied_at: at(2024, 1, 20, 0, 0),
            notes: strings(&["Beautiful portfolio"]),
        },
        Candidate {
            id: "cand-003".into(),
            first_name: "Erik".into(),
            last_name: "Lindqvist".into(),
            email: "erik.l@email.com".into(),
            phone: "+46 72 555 1234".into(),
            location: "Malmö, Sweden".into(),
            current_role: "DevOps Engineer".into(),
            experience: 5,
            skills: strings(&["AWS", "Kubernetes", "Terraform", "Docker", "CI/CD"]),
            resume_url: Some("/resumes/erik-l.pdf".into()),
            linkedin_url: Some("https://linkedin.com/in/eriklindqvist".into()),
            portfolio_url: None,
            status: CandidateStatus::Offer,
            applied_job_id: "job-003".into(),
            applied_job_title: "DevOps Engineer".into(),
            ai_match_score: 91,
            applied_at: at(2024, 1, 12, 0, 0),
            notes: strings(&["Excellent technical skills", "Salary negotiation pending"]),
        },
        Candidate {
            id: "cand-004".into(),
            first_name: "Sophie".into(),
            last_name: "Andersson".into(),
            email: "sophie.a@email.com".into(),
            phone: "+46 70 111 2222".into(),
            location: "Stockholm, Sweden".into(),
            current_role: "Junior Developer".into(),
            experience: 1,
            skills: strings(&["JavaScript", "React", "Node.js", "Git"]),
            resume_url: Some("/resumes/sophie-a.pdf".into()),
            linkedin_url: None,
            portfolio_url: None,
            status: CandidateStatus::New,
            applied_job_id: "job-005".into(),
            applied_job_title: "Junior Backend Developer".into(),
            ai_match_score: 78,
            applied_at: at(2024, 1, 22, 0, 0),
            notes: Vec::new(),
        },
    ]
}

fn employee(
    id: &str,
    name: (&str, &str),
    email: &str,
    department: &str,
    role: &str,
    start_date: NaiveDate,
    manager: Option<&str>,
) -> Employee {
    Employee {
        id: id.into(),
        first_name: name.0.into(),
        last_name: name.1.into(),
        email: email.into(),
        department: department.into(),
        role: role.into(),
        start_date,
        manager: manager.map(Into::into),
        status: EmployeeStatus::Active,
    }
}

fn employees() -> Vec<Employee> {
    vec![
        employee(
            "emp-001",
            ("Johan", "Berg"),
            "johan.berg@techcorp.com",
            "Engineering",
            "Engineering Manager",
            date(2022, 3, 15),
            None,
        ),
        employee(
            "emp-002",
            ("Emma", "Nilsson"),
            "emma.nilsson@techcorp.com",
            "Design",
            "Lead Designer",
            date(2021, 8, 1),
            Some("emp-001"),
        ),
        employee(
            "emp-003",
            ("Lars", "Svensson"),
            "lars.svensson@techcorp.com",
            "Engineering",
            "Senior Developer",
            date(2023, 1, 10),
            Some("emp-001"),
        ),
    ]
}

fn dashboard_stats() -> DashboardStats {
    DashboardStats {
        total_jobs: 7,
        active_jobs: 4,
        total_candidates: 156,
        new_candidates: 28,
        interviews_scheduled: 12,
        offers_extended: 3,
        avg_time_to_hire: 21,
        hiring_rate: 68,
        time_to_fill: 18,
        candidates_in_pipeline: 142,
        open_requisitions: 7,
    }
}

fn interviewer(id: &str, first: &str, last: &str) -> Interviewer {
    Interviewer {
        id: id.into(),
        first_name: first.into(),
        last_name: last.into(),
    }
}

fn interview(
    id: &str,
    candidate: (&str, &str, &str),
    job: (&str, &str),
    scheduled_at: DateTime<Utc>,
    duration: u32,
    interview_type: InterviewType,
    interviewers: Vec<Interviewer>,
) -> Interview {
    let (candidate_id, first, last) = candidate;
    Interview {
        id: id.into(),
        candidate_id: candidate_id.into(),
        candidate_name: format!("{} {}", first, last),
        candidate: InterviewCandidate {
            id: candidate_id.into(),
            first_name: first.into(),
            last_name: last.into(),
        },
        job_id: job.0.into(),
        job_title: job.1.into(),
        scheduled_at,
        duration,
        interview_type,
        interviewers,
        status: InterviewStatus::Scheduled,
        notes: None,
    }
}

fn interviews() -> Vec<Interview> {
    vec![
        interview(
            "int-001",
            ("cand-001", "Alex", "Chen"),
            ("job-001", "Senior Frontend Developer"),
            at(2024, 1, 25, 10, 0),
            60,
            InterviewType::Video,
            vec![
                interviewer("emp-001", "Johan", "Berg"),
                interviewer("emp-002", "Emma", "Nilsson"),
            ],
        ),
        interview(
            "int-002",
            ("cand-002", "Maria", "Santos"),
            ("job-002", "Product Designer"),
            at(2024, 1, 26, 14, 0),
            45,
            InterviewType::Video,
            vec![interviewer("emp-002", "Emma", "Nilsson")],
        ),
        interview(
            "int-003",
            ("cand-003", "Erik", "Lindqvist"),
            ("job-003", "DevOps Engineer"),
            at(2024, 1, 27, 11, 0),
            60,
            InterviewType::TechnicalScreen,
            vec![
                interviewer("emp-001", "Johan", "Berg"),
                interviewer("emp-003", "Lars", "Svensson"),
            ],
        ),
    ]
}

fn activity() -> Vec<Activity> {
    let entry = |id: &str,
                 activity_type: ActivityType,
                 title: &str,
                 description: &str,
                 timestamp: DateTime<Utc>,
                 related_id: &str| Activity {
        id: id.into(),
        activity_type,
        title: title.into(),
        description: description.into(),
        timestamp,
        user_id: "user-001".into(),
        related_id: Some(related_id.into()),
    };

    vec![
        entry(
            "act-001",
            ActivityType::Application,
            "New Application",
            "Alex Chen applied for Senior Frontend Developer",
            at(2024, 1, 18, 9, 30),
            "cand-001",
        ),
        entry(
            "act-002",
            ActivityType::Interview,
            "Interview Scheduled",
            "Interview with Alex Chen scheduled for Jan 25",
            at(2024, 1, 19, 14, 0),
            "int-001",
        ),
        entry(
            "act-003",
            ActivityType::Offer,
            "Offer Extended",
            "Offer sent to Erik Lindqvist for DevOps Engineer",
            at(2024, 1, 20, 11, 0),
            "cand-003",
        ),
    ]
}

fn stage(name: &str, count: u32, color: &str) -> FunnelStage {
    FunnelStage {
        stage: name.into(),
        count,
        color: color.into(),
    }
}

fn source(name: &str, hires: u32, percentage: u32, color: &str) -> SourceOfHire {
    SourceOfHire {
        source: name.into(),
        hires,
        percentage,
        color: color.into(),
    }
}

fn month(name: &str, applications: u32, hires: u32) -> MonthlyApplications {
    MonthlyApplications {
        month: name.into(),
        applications,
        hires,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_matches_demo_dataset() {
        let store = FixtureStore::seed();
        assert_eq!(store.jobs.len(), 7);
        assert_eq!(store.candidates.len(), 4);
        assert_eq!(store.employees.len(), 3);
        assert_eq!(store.upcoming_interviews.len(), 3);
        assert_eq!(store.recent_activity.len(), 3);
        assert_eq!(store.current_user.email, "sarah@techcorp.com");
    }

    #[test]
    fn seeded_jobs_hold_model_invariants() {
        for job in FixtureStore::seed().jobs {
            assert!(job.salary.min() <= job.salary.max(), "{}", job.id);
            assert!(job.new_applicants <= job.applicants, "{}", job.id);
            assert!(job.ai_score <= 100, "{}", job.id);
            assert_eq!(
                job.posted_at.is_none(),
                job.status == JobStatus::Draft,
                "{}",
                job.id
            );
        }
    }

    #[test]
    fn timestamps_are_parsed_not_defaulted() {
        let store = FixtureStore::seed();
        assert_eq!(
            store.recent_activity[0].timestamp.to_rfc3339(),
            "2024-01-18T09:30:00+00:00"
        );
        assert_eq!(store.jobs[5].deadline, date(2024, 3, 1));
    }
}
