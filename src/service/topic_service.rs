use anyhow::Result;

use crate::common::config::ConsoleConfig;
use crate::common::topic::Topic;
use crate::server::loader::load_crud_service;
use crate::service::EntityService;

pub type TopicService = EntityService<Topic>;

impl TopicService {
    pub fn from_config(console_config: &ConsoleConfig) -> Result<Self> {
        let crud = load_crud_service(console_config, &console_config.topics_api, Topic::samples())?;
        Ok(EntityService::new(
            crud,
            &console_config.topics_api,
            console_config.filter_mode,
            console_config.page_size,
        ))
    }
}
