use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::common::topic::{SchemaEntry, Topic};
use crate::page::render_table;
use crate::page::route::RouteParams;
use crate::service::topic_service::TopicService;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailState {
    /// Id of the last completed lookup.
    pub id: Option<String>,
    pub topic: Option<Topic>,
    pub lookups: usize,
}

/// Shows one topic, following the `id` parameter of the active route.
pub struct TopicDetailPage {
    state: Arc<watch::Sender<DetailState>>,
    sub: Option<JoinHandle<()>>,
}

impl TopicDetailPage {
    pub fn new() -> Self {
        let (state, _) = watch::channel(DetailState::default());
        Self {
            state: Arc::new(state),
            sub: None,
        }
    }

    /// Subscribes to route parameters; each emission carrying an `id` triggers a lookup.
    pub fn init(&mut self, service: Arc<TopicService>, params: watch::Receiver<RouteParams>) {
        let state = Arc::clone(&self.state);
        let sub = tokio::spawn(follow_route_params(service, params, state));
        if let Some(previous) = self.sub.replace(sub) {
            previous.abort();
        }
    }

    pub fn state(&self) -> DetailState {
        self.state.borrow().clone()
    }

    pub fn lookups(&self) -> usize {
        self.state.borrow().lookups
    }

    /// Waits for a lookup of `id` that completed after the first `after`
    /// lookups, successfully or not.
    pub async fn wait_for_lookup(&self, id: &str, after: usize, wait: Duration) -> Option<DetailState> {
        let mut state_rx = self.state.subscribe();
        let resolved = state_rx.wait_for(|s| s.lookups > after && s.id.as_deref() == Some(id));
        match tokio::time::timeout(wait, resolved).await {
            Ok(Ok(state)) => Some(state.clone()),
            _ => None,
        }
    }

    pub fn render(&self) -> String {
        let state = self.state();
        let mut out = format!("TOPIC DETAIL {}\n", state.id.as_deref().unwrap_or_default());
        if let Some(topic) = &state.topic {
            out.push('\n');
            out.push_str(&render_topic(topic));
        }
        out
    }

    /// Cancels the route subscription; later parameter changes are ignored.
    pub fn destroy(&mut self) {
        if let Some(sub) = self.sub.take() {
            sub.abort();
            log::debug!("Topic detail page unsubscribed from route params");
        }
    }
}

impl Default for TopicDetailPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TopicDetailPage {
    fn drop(&mut self) {
        self.destroy();
    }
}

async fn follow_route_params(
    service: Arc<TopicService>,
    mut params: watch::Receiver<RouteParams>,
    state: Arc<watch::Sender<DetailState>>,
) {
    loop {
        let id = params.borrow_and_update().get("id").cloned();
        if let Some(id) = id {
            let topic = match service.get(&id).await {
                Ok(topic) => Some(topic),
                Err(e) => {
                    log::error!("Failed to load topic {}: {:#}", id, e);
                    None
                }
            };
            state.send_modify(|s| {
                s.id = Some(id);
                s.topic = topic;
                s.lookups += 1;
            });
        }
        if params.changed().await.is_err() {
            break;
        }
    }
}

fn render_topic(topic: &Topic) -> String {
    let mut out = String::new();
    let fields = [
        ("name", topic.name.clone()),
        ("documentation", topic.documentation.clone()),
        ("partitions", topic.partitions.to_string()),
        ("replication factor", topic.replication_factor.to_string()),
        ("serializer", topic.serializer.clone().unwrap_or_default()),
        ("business time field", topic.business_time_field.clone()),
        ("row key field", topic.rowkey_field.clone()),
        ("record type field", topic.record_type_field.clone()),
    ];
    for (label, value) in fields {
        out.push_str(&format!("{:<20}{}\n", label, value));
    }
    out.push_str("\nkey schema\n");
    out.push_str(&render_schema(&topic.key_schema));
    out.push_str("\nvalue schema\n");
    out.push_str(&render_schema(&topic.value_schema));
    out
}

fn render_schema(entries: &[SchemaEntry]) -> String {
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| {
            vec![
                e.name.clone(),
                e.field_type.clone(),
                e.encrypted.to_string(),
                e.indexed.to_string(),
                e.persistent.to_string(),
                e.optional.to_string(),
            ]
        })
        .collect();
    render_table(
        &["name", "type", "encrypted", "indexed", "persistent", "optional"],
        &rows,
    )
}
