pub mod ai_service;
pub mod api_service;
pub mod auth_service;
pub mod dashboard_service;
pub mod editor_service;
pub mod filter_service;
pub mod job_service;
pub mod session_service;
