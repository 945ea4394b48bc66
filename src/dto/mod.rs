pub mod auth_dto;
pub mod job_dto;
