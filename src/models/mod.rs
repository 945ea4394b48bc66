pub mod activity;
pub mod candidate;
pub mod dashboard;
pub mod employee;
pub mod interview;
pub mod job;
pub mod user;
