use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::models::job::{Job, JobStatus};
use crate::utils::time::now;

/// Authoritative in-memory job list.
///
/// Mutations never touch the current vector: each one builds a new list and
/// swaps the shared pointer, so a [`snapshot`](JobCollection::snapshot) taken
/// earlier keeps seeing the list it was taken from.
#[derive(Debug, Clone, Default)]
pub struct JobCollection {
    jobs: Arc<Vec<Job>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStats {
    pub total: usize,
    pub active: usize,
    pub applicants: u64,
    pub new_applicants: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

/// A delete the user has been asked to confirm. Dropping it cancels the delete.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a pending delete does nothing until confirmed"]
pub struct PendingDelete {
    id: String,
    title: String,
}

impl PendingDelete {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn confirm(self, collection: &mut JobCollection) -> bool {
        collection.delete(&self.id)
    }
}

impl JobCollection {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self {
            jobs: Arc::new(jobs.into_iter().map(Job::normalized).collect()),
        }
    }

    pub fn snapshot(&self) -> Arc<Vec<Job>> {
        Arc::clone(&self.jobs)
    }

    pub fn as_slice(&self) -> &[Job] {
        &self.jobs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Job> {
        self.jobs.iter()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    fn replace(&mut self, jobs: Vec<Job>) {
        self.jobs = Arc::new(jobs);
    }

    /// Replaces the job with the same id, or prepends it when the id is new.
    /// The stored job is [normalized](Job::normalized) first.
    pub fn upsert(&mut self, job: Job) -> UpsertOutcome {
        let job = job.normalized();
        let existing = self.jobs.iter().position(|j| j.id == job.id);
        let mut next = Vec::with_capacity(self.jobs.len() + 1);

        let outcome = match existing {
            Some(index) => {
                next.extend(self.jobs.iter().cloned());
                tracing::info!(job_id = %job.id, title = %job.title, "job updated");
                next[index] = job;
                UpsertOutcome::Updated
            }
            None => {
                tracing::info!(job_id = %job.id, title = %job.title, "job created");
                next.push(job);
                next.extend(self.jobs.iter().cloned());
                UpsertOutcome::Created
            }
        };

        self.replace(next);
        outcome
    }

    /// Removes the job; absent ids are a silent no-op returning `false`.
    pub fn delete(&mut self, id: &str) -> bool {
        if self.get(id).is_none() {
            tracing::debug!(job_id = %id, "delete ignored, job not found");
            return false;
        }

        let next = self.jobs.iter().filter(|j| j.id != id).cloned().collect();
        self.replace(next);
        tracing::info!(job_id = %id, "job deleted");
        true
    }

    pub fn request_delete(&self, id: &str) -> Option<PendingDelete> {
        self.get(id).map(|job| PendingDelete {
            id: job.id.clone(),
            title: job.title.clone(),
        })
    }

    /// Sets the status and refreshes `updated_at`. `posted_at` is stamped only
    /// the first time the job becomes active. Absent ids are a silent no-op.
    pub fn transition_status(&mut self, id: &str, status: JobStatus) -> bool {
        let Some(index) = self.jobs.iter().position(|j| j.id == id) else {
            tracing::debug!(job_id = %id, %status, "status change ignored, job not found");
            return false;
        };

        let stamp = now();
        let mut next: Vec<Job> = self.jobs.as_ref().clone();
        let job = &mut next[index];
        let previous = job.status;
        job.status = status;
        job.updated_at = stamp;
        if status == JobStatus::Active && job.posted_at.is_none() {
            job.posted_at = Some(stamp);
        }
        tracing::info!(job_id = %id, from = %previous, to = %status, "job status changed");

        self.replace(next);
        true
    }

    pub fn aggregate(&self) -> JobStats {
        self.jobs.iter().fold(
            JobStats {
                total: self.jobs.len(),
                ..JobStats::default()
            },
            |mut stats, job| {
                if job.status == JobStatus::Active {
                    stats.active += 1;
                }
                stats.applicants += u64::from(job.applicants);
                stats.new_applicants += u64::from(job.new_applicants);
                stats
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::fixtures::FixtureStore;

    fn seeded() -> JobCollection {
        JobCollection::new(FixtureStore::seed().jobs)
    }

    #[test]
    fn aggregate_over_seed_data() {
        let stats = seeded().aggregate();
        assert_eq!(
            stats,
            JobStats {
                total: 7,
                active: 4,
                applicants: 47 + 32 + 23 + 56 + 89 + 0 + 41,
                new_applicants: 12 + 5 + 8 + 15,
            }
        );
    }

    #[test]
    fn aggregate_of_empty_collection_is_zero() {
        assert_eq!(JobCollection::default().aggregate(), JobStats::default());
    }

    #[test]
    fn upsert_new_job_prepends() {
        let mut jobs = seeded();
        let mut job = jobs.get("job-003").unwrap().clone();
        job.id = "job-new".into();

        assert_eq!(jobs.upsert(job), UpsertOutcome::Created);
        assert_eq!(jobs.len(), 8);
        assert_eq!(jobs.as_slice()[0].id, "job-new");
        assert_eq!(jobs.as_slice()[1].id, "job-001");
    }

    #[test]
    fn upsert_existing_job_replaces_in_place() {
        let mut jobs = seeded();
        let mut job = jobs.get("job-004").unwrap().clone();
        job.title = "Head of Marketing".into();

        assert_eq!(jobs.upsert(job.clone()), UpsertOutcome::Updated);
        assert_eq!(jobs.upsert(job), UpsertOutcome::Updated);
        assert_eq!(jobs.len(), 7);
        assert_eq!(jobs.as_slice()[3].title, "Head of Marketing");
    }

    #[test]
    fn upsert_stores_jobs_within_model_invariants() {
        let mut jobs = seeded();
        let mut job = jobs.get("job-001").unwrap().clone();
        job.new_applicants = job.applicants + 5;
        job.requirements = vec!["   ".into(), "TypeScript ".into()];

        assert_eq!(jobs.upsert(job), UpsertOutcome::Updated);
        let stored = jobs.get("job-001").unwrap();
        assert_eq!(stored.new_applicants, stored.applicants);
        assert_eq!(stored.requirements, ["TypeScript"]);
        assert!(stored.salary.min() <= stored.salary.max());
        assert!(jobs.iter().all(|j| j.new_applicants <= j.applicants));
    }

    #[test]
    fn snapshots_are_not_affected_by_later_mutations() {
        let mut jobs = seeded();
        let before = jobs.snapshot();
        assert!(jobs.delete("job-001"));
        assert_eq!(before.len(), 7);
        assert_eq!(jobs.len(), 6);
    }

    #[test]
    fn delete_missing_id_is_a_no_op() {
        let mut jobs = seeded();
        let before = jobs.snapshot();
        assert!(!jobs.delete("job-404"));
        assert!(Arc::ptr_eq(&before, &jobs.snapshot()));
    }

    #[test]
    fn pending_delete_requires_confirmation() {
        let mut jobs = seeded();
        let pending = jobs.request_delete("job-002").unwrap();
        assert_eq!(pending.title(), "Product Designer");
        drop(pending);
        assert!(jobs.get("job-002").is_some());

        let pending = jobs.request_delete("job-002").unwrap();
        assert!(pending.confirm(&mut jobs));
        assert!(jobs.get("job-002").is_none());
        assert!(jobs.request_delete("job-002").is_none());
    }

    #[test]
    fn first_activation_stamps_posted_at_once() {
        let mut jobs = seeded();
        assert!(jobs.get("job-006").unwrap().posted_at.is_none());

        assert!(jobs.transition_status("job-006", JobStatus::Active));
        let posted = jobs.get("job-006").unwrap().posted_at;
        assert!(posted.is_some());

        assert!(jobs.transition_status("job-006", JobStatus::Paused));
        assert!(jobs.transition_status("job-006", JobStatus::Active));
        assert_eq!(jobs.get("job-006").unwrap().posted_at, posted);
    }

    #[test]
    fn transition_refreshes_updated_at() {
        let mut jobs = seeded();
        let before = jobs.get("job-001").unwrap().updated_at;
        jobs.transition_status("job-001", JobStatus::Paused);
        let job = jobs.get("job-001").unwrap();
        assert_eq!(job.status, JobStatus::Paused);
        assert!(job.updated_at > before);
    }

    #[test]
    fn transition_of_missing_id_changes_nothing() {
        let mut jobs = seeded();
        let before = jobs.snapshot();
        assert!(!jobs.transition_status("job-404", JobStatus::Closed));
        assert!(Arc::ptr_eq(&before, &jobs.snapshot()));
    }
}
