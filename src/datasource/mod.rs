//! Live row feeds for list pages.
//!
//! A [`DataSource`] wraps a CRUD backend and publishes the current rows on a
//! `watch` channel. Every change of the search filter re-derives the rows,
//! either locally or by asking the backend again (see [`FilterMode`]).

use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::common::config::FilterMode;
use crate::common::entity::{Entity, matches_filter};
use crate::common::search_criteria::SearchCriteria;
use crate::storage::crud_service_impl::CrudServiceImpl;
use crate::traits::crud_service::CrudService;

pub struct DataSource<T: Entity> {
    service: Arc<CrudServiceImpl<T>>,
    mode: FilterMode,
    page_size: u32,
    filter: watch::Sender<String>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Entity> DataSource<T> {
    pub fn new(service: Arc<CrudServiceImpl<T>>, mode: FilterMode, page_size: u32) -> Self {
        let (filter, _) = watch::channel(String::new());
        Self {
            service,
            mode,
            page_size,
            filter,
            task: Mutex::new(None),
        }
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn search_filter(&self) -> String {
        self.filter.borrow().clone()
    }

    pub fn set_search_filter(&self, filter: impl Into<String>) {
        self.filter.send_replace(filter.into());
    }

    pub fn is_connected(&self) -> bool {
        self.task
            .lock()
            .map(|task| task.as_ref().is_some_and(|t| !t.is_finished()))
            .unwrap_or(false)
    }

    /// Starts publishing rows. The receiver sees an empty list until the first
    /// fetch completes, then one update per filter change.
    ///
    /// Connecting again replaces the previous feed.
    pub fn connect(&self) -> watch::Receiver<Vec<T>> {
        let (rows_tx, rows_rx) = watch::channel(Vec::new());
        let filter_rx = self.filter.subscribe();
        let service = Arc::clone(&self.service);

        let task = match self.mode {
            FilterMode::Client => tokio::spawn(filter_locally(service, filter_rx, rows_tx)),
            FilterMode::Server => tokio::spawn(filter_on_server(
                service,
                filter_rx,
                rows_tx,
                self.page_size,
            )),
        };

        if let Ok(mut slot) = self.task.lock() {
            if let Some(previous) = slot.replace(task) {
                previous.abort();
            }
        }
        rows_rx
    }

    /// Stops the feed; connected receivers observe the channel closing.
    pub fn disconnect(&self) {
        if let Ok(mut slot) = self.task.lock() {
            if let Some(task) = slot.take() {
                task.abort();
                log::debug!("Data source disconnected");
            }
        }
    }
}

impl<T: Entity> Drop for DataSource<T> {
    fn drop(&mut self) {
        self.disconnect();
    }
}

async fn filter_locally<T: Entity>(
    service: Arc<CrudServiceImpl<T>>,
    mut filter_rx: watch::Receiver<String>,
    rows_tx: watch::Sender<Vec<T>>,
) {
    let mut fetched: Option<Vec<T>> = None;
    loop {
        if fetched.is_none() {
            match service.search(None).await {
                Ok(items) => fetched = Some(items),
                Err(e) => log::error!("Failed to fetch rows: {:#}", e),
            }
        }
        if let Some(items) = &fetched {
            let filter = filter_rx.borrow_and_update().clone();
            let rows = items
                .iter()
                .filter(|item| matches_filter(*item, &filter))
                .cloned()
                .collect();
            rows_tx.send_replace(rows);
        }
        if filter_rx.changed().await.is_err() || rows_tx.is_closed() {
            break;
        }
    }
}

async fn filter_on_server<T: Entity>(
    service: Arc<CrudServiceImpl<T>>,
    mut filter_rx: watch::Receiver<String>,
    rows_tx: watch::Sender<Vec<T>>,
    page_size: u32,
) {
    loop {
        let filter = filter_rx.borrow_and_update().clone();
        let criteria = SearchCriteria::new(filter, 0, page_size);
        match service.search(Some(&criteria)).await {
            Ok(rows) => {
                rows_tx.send_replace(rows);
            }
            Err(e) => log::error!("Failed to search for '{}': {:#}", criteria.keyword, e),
        }
        if filter_rx.changed().await.is_err() || rows_tx.is_closed() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::job::Job;
    use crate::storage::memory::memory_crud_service::MemoryCrudService;
    use std::time::Duration;
    use tokio::time::timeout;

    fn sample_source(mode: FilterMode) -> DataSource<Job> {
        let service = CrudServiceImpl::Memory(MemoryCrudService::with_items(Job::samples()));
        DataSource::new(Arc::new(service), mode, 10)
    }

    async fn next(rx: &mut watch::Receiver<Vec<Job>>) -> Vec<Job> {
        timeout(Duration::from_secs(5), rx.changed())
            .await
            .expect("no rows published")
            .expect("feed closed");
        rx.borrow_and_update().clone()
    }

    #[tokio::test]
    async fn client_filter_matches_name_and_documentation() {
        let source = sample_source(FilterMode::Client);
        let mut rows = source.connect();
        assert_eq!(next(&mut rows).await.len(), 2);

        source.set_search_filter("DOC1");
        assert_eq!(source.search_filter(), "DOC1");
        assert_eq!(next(&mut rows).await, vec![Job::new("name1", "doc1")]);

        source.set_search_filter("name");
        assert_eq!(next(&mut rows).await.len(), 2);

        source.set_search_filter("nothing");
        assert!(next(&mut rows).await.is_empty());
    }

    #[tokio::test]
    async fn server_filter_sends_keyword() {
        let source = sample_source(FilterMode::Server);
        source.set_search_filter("doc2");
        let mut rows = source.connect();
        assert_eq!(next(&mut rows).await, vec![Job::new("name2", "doc2")]);
    }

    #[tokio::test]
    async fn disconnect_closes_the_feed() {
        let source = sample_source(FilterMode::Client);
        let mut rows = source.connect();
        next(&mut rows).await;
        assert!(source.is_connected());

        source.disconnect();
        assert!(!source.is_connected());
        let closed = timeout(Duration::from_secs(5), rows.changed()).await.unwrap();
        assert!(closed.is_err());
    }
}
