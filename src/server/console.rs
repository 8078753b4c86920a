use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::common::entity::Entity;
use crate::page::home::{render_error_list_page, render_home_page, render_not_found_page};
use crate::page::list::{ListPage, job_list_page, topic_list_page};
use crate::page::route::{Route, RouteParams};
use crate::page::topic_detail::TopicDetailPage;
use crate::server::context::ConsoleContext;

/// Tracks the active route and the pages that outlive a single render.
pub struct Console {
    ctx: ConsoleContext,
    route: Route,
    params: watch::Sender<RouteParams>,
    detail: Option<TopicDetailPage>,
    /// Detail lookups completed before the current navigation.
    lookups_before: usize,
}

impl Console {
    pub fn new(ctx: ConsoleContext) -> Self {
        let (params, _) = watch::channel(RouteParams::new());
        Self {
            ctx,
            route: Route::Home,
            params,
            detail: None,
            lookups_before: 0,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn detail_page(&self) -> Option<&TopicDetailPage> {
        self.detail.as_ref()
    }

    pub fn navigate(&mut self, path: &str) -> &Route {
        let route = Route::parse(path);
        log::debug!("Navigating to {}", route);
        self.lookups_before = self.detail.as_ref().map_or(0, TopicDetailPage::lookups);
        self.params.send_replace(route.params());

        match route {
            Route::TopicDetail { .. } => {
                if self.detail.is_none() {
                    let mut page = TopicDetailPage::new();
                    page.init(Arc::clone(&self.ctx.topics), self.params.subscribe());
                    self.detail = Some(page);
                }
            }
            _ => {
                if let Some(mut page) = self.detail.take() {
                    page.destroy();
                }
            }
        }
        self.route = route;
        &self.route
    }

    /// Renders the active route. List pages apply `filter` as their search value.
    pub async fn render(&self, filter: Option<&str>) -> String {
        let wait = self.ctx.config.page_wait();
        match &self.route {
            Route::Home => render_home_page(),
            Route::TopicList => render_list(topic_list_page(&self.ctx.topics), filter, wait).await,
            Route::JobList => render_list(job_list_page(&self.ctx.jobs), filter, wait).await,
            Route::ErrorList => render_error_list_page(),
            Route::TopicDetail { id } => match &self.detail {
                Some(page) => {
                    if page.wait_for_lookup(id, self.lookups_before, wait).await.is_none() {
                        log::warn!("Topic {} not resolved within {:?}", id, wait);
                    }
                    page.render()
                }
                None => format!("TOPIC DETAIL {}\n", id),
            },
            Route::NotFound { path } => render_not_found_page(path),
        }
    }

    pub async fn open(&mut self, path: &str, filter: Option<&str>) -> String {
        self.navigate(path);
        self.render(filter).await
    }
}

async fn render_list<T: Entity>(mut page: ListPage<T>, filter: Option<&str>, wait: Duration) -> String {
    if let Some(filter) = filter {
        page.on_search(filter);
    }
    page.init();
    if page.next_rows(wait).await.is_none() {
        log::warn!("No rows received within {:?}", wait);
    }
    let out = page.render();
    page.destroy();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::config::{BackendType, ConsoleConfig};

    fn console() -> Console {
        let config = ConsoleConfig {
            crud_backend: BackendType::Memory,
            seed_sample_data: true,
            ..ConsoleConfig::default()
        };
        Console::new(ConsoleContext::load(config).unwrap())
    }

    #[tokio::test]
    async fn detail_page_lives_only_on_detail_routes() {
        let mut console = console();
        let page = console.open("/topic/logisland_raw", None).await;
        assert!(page.starts_with("TOPIC DETAIL logisland_raw"));
        assert!(console.detail_page().is_some());

        let page = console.open("/topic/detail/logisland_errors", None).await;
        assert!(page.contains("records rejected by a processor"));
        assert_eq!(console.detail_page().unwrap().state().lookups, 2);

        console.open("/job", None).await;
        assert!(console.detail_page().is_none());
        assert_eq!(console.route(), &Route::JobList);
    }

    #[tokio::test]
    async fn reopening_detail_route_shows_fresh_lookup() {
        let mut console = console();
        console.open("/topic/logisland_raw", None).await;

        let mut topic = console.ctx.topics.get("logisland_raw").await.unwrap();
        topic.documentation = "reingested lines".to_string();
        console.ctx.topics.update(&topic).await.unwrap();

        let page = console.open("/topic/logisland_raw", None).await;
        assert!(page.contains("reingested lines"));
        assert_eq!(console.detail_page().unwrap().lookups(), 2);
    }

    #[tokio::test]
    async fn renders_every_route() {
        let mut console = console();
        assert!(console.open("/", None).await.contains("TOPICS"));
        assert!(console.open("/topic", None).await.contains("logisland_events"));
        let jobs = console.open("/job", Some("doc2")).await;
        assert!(jobs.contains("name2") && !jobs.contains("name1"));
        assert!(console.open("/error", None).await.starts_with("Errors"));
        assert_eq!(console.open("/nope", None).await, "Page not found: /nope\n");
    }
}
