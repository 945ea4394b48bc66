use rand::{distributions::Alphanumeric, thread_rng, Rng};

pub fn generate_suffix(length: usize) -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect()
}

/// Fresh opaque job identifier: `job-<unix millis>-<9 lowercase alphanumerics>`.
pub fn generate_job_id() -> String {
    format!(
        "job-{}-{}",
        super::time::now().timestamp_millis(),
        generate_suffix(9)
    )
}

/// AI match score for a freshly created job, in `70..=99`.
pub fn initial_ai_score() -> u8 {
    thread_rng().gen_range(70..=99)
}
