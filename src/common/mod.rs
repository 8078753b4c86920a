pub mod config;
pub mod entity;
pub mod error;
pub mod job;
pub mod search_criteria;
pub mod topic;
