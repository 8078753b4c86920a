use anyhow::Result;

use crate::common::config::ConsoleConfig;
use crate::common::job::Job;
use crate::server::loader::load_crud_service;
use crate::service::EntityService;

pub type JobService = EntityService<Job>;

impl JobService {
    pub fn from_config(console_config: &ConsoleConfig) -> Result<Self> {
        let crud = load_crud_service(console_config, &console_config.jobs_api, Job::samples())?;
        Ok(EntityService::new(
            crud,
            &console_config.jobs_api,
            console_config.filter_mode,
            console_config.page_size,
        ))
    }
}
