use std::sync::Arc;

use anyhow::Result;

use crate::common::config::ConsoleConfig;
use crate::service::{job_service::JobService, topic_service::TopicService};

/// The configured services every page draws from.
#[derive(Clone)]
pub struct ConsoleContext {
    pub config: Arc<ConsoleConfig>,
    pub topics: Arc<TopicService>,
    pub jobs: Arc<JobService>,
}

impl ConsoleContext {
    pub fn load(console_config: ConsoleConfig) -> Result<Self> {
        let topics = Arc::new(TopicService::from_config(&console_config)?);
        let jobs = Arc::new(JobService::from_config(&console_config)?);
        log::info!(
            "Console using {:?} backend (topics: {}, jobs: {})",
            console_config.crud_backend,
            topics.endpoint(),
            jobs.endpoint()
        );
        Ok(Self {
            config: Arc::new(console_config),
            topics,
            jobs,
        })
    }
}
