use std::time::Duration;

use tokio::sync::watch;

use crate::common::entity::Entity;
use crate::common::job::Job;
use crate::common::topic::Topic;
use crate::datasource::DataSource;
use crate::page::render_table;
use crate::page::route::Route;
use crate::service::{job_service::JobService, topic_service::TopicService};

pub const LIST_COLUMNS: [&str; 2] = ["name", "documentation"];

/// A table of entities fed by a [`DataSource`].
pub struct ListPage<T: Entity> {
    title: &'static str,
    source: DataSource<T>,
    rows: Option<watch::Receiver<Vec<T>>>,
    cells: fn(&T) -> Vec<String>,
}

impl<T: Entity> ListPage<T> {
    pub fn new(title: &'static str, source: DataSource<T>, cells: fn(&T) -> Vec<String>) -> Self {
        Self {
            title,
            source,
            rows: None,
            cells,
        }
    }

    pub fn init(&mut self) {
        self.rows = Some(self.source.connect());
    }

    pub fn on_search(&self, value: &str) {
        log::debug!("{} search: '{}'", self.title, value);
        self.source.set_search_filter(value);
    }

    pub fn search_filter(&self) -> String {
        self.source.search_filter()
    }

    /// Waits for the next published rows; `None` when nothing arrived in time
    /// or the page is not initialized.
    pub async fn next_rows(&mut self, wait: Duration) -> Option<Vec<T>> {
        let rows = self.rows.as_mut()?;
        match tokio::time::timeout(wait, rows.changed()).await {
            Ok(Ok(())) => Some(rows.borrow_and_update().clone()),
            _ => None,
        }
    }

    pub fn rows(&self) -> Vec<T> {
        self.rows
            .as_ref()
            .map(|rows| rows.borrow().clone())
            .unwrap_or_default()
    }

    pub fn render(&self) -> String {
        let rows: Vec<Vec<String>> = self.rows().iter().map(self.cells).collect();
        let mut out = format!("{}\n", self.title);
        if !rows.is_empty() {
            out.push('\n');
            out.push_str(&render_table(&self.columns(), &rows));
        }
        out
    }

    fn columns(&self) -> Vec<&'static str> {
        let mut columns = LIST_COLUMNS.to_vec();
        if self.rows().first().is_some_and(|row| (self.cells)(row).len() > LIST_COLUMNS.len()) {
            columns.push("link");
        }
        columns
    }

    pub fn destroy(&mut self) {
        self.source.disconnect();
        self.rows = None;
    }
}

fn topic_cells(topic: &Topic) -> Vec<String> {
    vec![
        topic.name.clone(),
        topic.documentation.clone(),
        Route::topic_detail(&topic.id()),
    ]
}

fn job_cells(job: &Job) -> Vec<String> {
    vec![job.name.clone(), job.documentation.clone()]
}

pub fn topic_list_page(service: &TopicService) -> ListPage<Topic> {
    ListPage::new("Topics", service.data_source(), topic_cells)
}

pub fn job_list_page(service: &JobService) -> ListPage<Job> {
    ListPage::new("Jobs", service.data_source(), job_cells)
}
