use crate::models::job::{Department, Job, JobStatus};
use crate::services::job_service::JobCollection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepartmentFilter {
    #[default]
    All,
    Only(Department),
}

impl DepartmentFilter {
    fn matches(self, department: Department) -> bool {
        match self {
            DepartmentFilter::All => true,
            DepartmentFilter::Only(wanted) => wanted == department,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(JobStatus),
}

impl StatusFilter {
    fn matches(self, status: JobStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub search: String,
    pub department: DepartmentFilter,
    pub status: StatusFilter,
}

impl FilterCriteria {
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty()
            && self.department == DepartmentFilter::All
            && self.status == StatusFilter::All
    }
}

/// Derives the visible subset of the job list. Nothing is cached: every call
/// recomputes from the jobs it is given, in their original order.
#[derive(Debug, Clone, Default)]
pub struct JobFilterView {
    criteria: FilterCriteria,
    needle: String,
}

impl JobFilterView {
    pub fn new(criteria: FilterCriteria) -> Self {
        let needle = criteria.search.to_lowercase();
        Self { criteria, needle }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        *self = Self::new(criteria);
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
        self.needle = self.criteria.search.to_lowercase();
    }

    pub fn set_department(&mut self, department: DepartmentFilter) {
        self.criteria.department = department;
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.criteria.status = status;
    }

    pub fn is_filtered(&self) -> bool {
        !self.criteria.is_unfiltered()
    }

    pub fn matches(&self, job: &Job) -> bool {
        self.matches_search(job)
            && self.criteria.department.matches(job.department)
            && self.criteria.status.matches(job.status)
    }

    fn matches_search(&self, job: &Job) -> bool {
        self.needle.is_empty()
            || job.title.to_lowercase().contains(&self.needle)
            || job.department.label().to_lowercase().contains(&self.needle)
    }

    pub fn apply<'a>(&self, jobs: &'a [Job]) -> Vec<&'a Job> {
        jobs.iter().filter(|job| self.matches(job)).collect()
    }

    pub fn filter(&self, collection: &JobCollection) -> Vec<Job> {
        collection
            .iter()
            .filter(|job| self.matches(job))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::fixtures::FixtureStore;

    fn ids(jobs: &[&Job]) -> Vec<String> {
        jobs.iter().map(|j| j.id.clone()).collect()
    }

    #[test]
    fn unfiltered_view_returns_everything_in_order() {
        let jobs = FixtureStore::seed().jobs;
        let view = JobFilterView::default();
        let out = view.apply(&jobs);
        assert_eq!(out.len(), jobs.len());
        assert!(out.iter().zip(jobs.iter()).all(|(a, b)| a.id == b.id));
        assert!(!view.is_filtered());
    }

    #[test]
    fn department_filter_is_exact() {
        let jobs = FixtureStore::seed().jobs;
        let view = JobFilterView::new(FilterCriteria {
            department: DepartmentFilter::Only(Department::Engineering),
            ..Default::default()
        });
        assert_eq!(ids(&view.apply(&jobs)), ["job-001", "job-003", "job-005"]);
    }

    #[test]
    fn search_is_case_insensitive_on_title() {
        let jobs = FixtureStore::seed().jobs;
        let mut view = JobFilterView::default();
        view.set_search("SENIOR");
        assert_eq!(ids(&view.apply(&jobs)), ["job-001"]);
    }

    #[test]
    fn search_also_matches_department_label() {
        let jobs = FixtureStore::seed().jobs;
        let mut view = JobFilterView::default();
        view.set_search("human");
        assert_eq!(ids(&view.apply(&jobs)), ["job-006"]);
    }

    #[test]
    fn predicates_are_anded() {
        let jobs = FixtureStore::seed().jobs;
        let mut view = JobFilterView::default();
        view.set_search("developer");
        view.set_department(DepartmentFilter::Only(Department::Engineering));
        view.set_status(StatusFilter::Only(JobStatus::Active));
        assert_eq!(ids(&view.apply(&jobs)), ["job-001", "job-005"]);

        view.set_status(StatusFilter::Only(JobStatus::Closed));
        assert!(view.apply(&jobs).is_empty());
        assert!(view.is_filtered());
    }

    #[test]
    fn filter_over_collection_clones_matches() {
        let collection = JobCollection::new(FixtureStore::seed().jobs);
        let view = JobFilterView::new(FilterCriteria {
            status: StatusFilter::Only(JobStatus::Draft),
            ..Default::default()
        });
        let out = view.filter(&collection);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "HR Coordinator");
    }
}
