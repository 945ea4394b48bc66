use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub description: String,
    /// One entry per line.
    pub requirements: String,
    /// One entry per line.
    pub benefits: String,
}

/// Source of job-ad copy for the editor. Implementations only produce text;
/// the editor owns the wait and its cancellation.
#[cfg_attr(test, mockall::automock)]
pub trait DescriptionGenerator: Send + Sync {
    fn generate(&self, title: &str, department: &str) -> GeneratedContent;
}

/// Canned copy interpolated with the job's title and department.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateDescriptionGenerator;

const TEMPLATE_REQUIREMENTS: &[&str] = &[
    "5+ years of relevant experience",
    "Strong communication and collaboration skills",
    "Problem-solving mindset with attention to detail",
    "Experience with modern tools and methodologies",
    "Bachelor's degree in related field or equivalent",
];

const TEMPLATE_BENEFITS: &[&str] = &[
    "Competitive salary and equity package",
    "Flexible remote work options",
    "Health, dental, and vision insurance",
    "Professional development budget",
    "25 days paid vacation + holidays",
];

impl DescriptionGenerator for TemplateDescriptionGenerator {
    fn generate(&self, title: &str, department: &str) -> GeneratedContent {
        let title = non_blank_or(title, "professional");
        let department = non_blank_or(department, "team");

        GeneratedContent {
            description: format!(
                "We are seeking a talented {} to join our {}. The ideal candidate will bring expertise, creativity, and a passion for excellence.\n\nIn this role, you'll collaborate with cross-functional teams to deliver high-impact solutions that drive our business forward.",
                title, department
            ),
            requirements: TEMPLATE_REQUIREMENTS.join("\n"),
            benefits: TEMPLATE_BENEFITS.join("\n"),
        }
    }
}

fn non_blank_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}
