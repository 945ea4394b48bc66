use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::job::{Department, JobStatus};
use crate::services::filter_service::{DepartmentFilter, FilterCriteria, StatusFilter};

pub const ALL_DEPARTMENTS_LABEL: &str = "All Departments";
pub const ALL_STATUS_LABEL: &str = "All Status";

/// Raw filter selections as the jobs board sends them.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JobFilterQuery {
    pub search: Option<String>,
    pub department: Option<String>,
    pub status: Option<String>,
}

impl JobFilterQuery {
    pub fn into_criteria(self) -> Result<FilterCriteria> {
        let department = match self.department.as_deref() {
            None | Some(ALL_DEPARTMENTS_LABEL) => DepartmentFilter::All,
            Some(label) => DepartmentFilter::Only(
                label.parse::<Department>().map_err(Error::BadRequest)?,
            ),
        };

        let status = match self.status.as_deref().map(str::trim) {
            None => StatusFilter::All,
            Some(label)
                if label.eq_ignore_ascii_case(ALL_STATUS_LABEL)
                    || label.eq_ignore_ascii_case("all") =>
            {
                StatusFilter::All
            }
            Some(label) => StatusFilter::Only(label.parse::<JobStatus>().map_err(Error::BadRequest)?),
        };

        Ok(FilterCriteria {
            search: self.search.unwrap_or_default(),
            department,
            status,
        })
    }
}

/// Display labels for the status select, sentinel first.
pub fn status_filter_labels() -> Vec<String> {
    std::iter::once(ALL_STATUS_LABEL.to_string())
        .chain(JobStatus::ALL.iter().map(|status| {
            let raw = status.as_str();
            let mut chars = raw.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }))
        .collect()
}
