use serde::{de::DeserializeOwned, Serialize};

/// A value object served by one of the console endpoints.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Key appended to the endpoint URL for single-item requests.
    fn id(&self) -> String;

    /// Text matched by the client-side search filter.
    fn search_text(&self) -> String;

    /// Key under which some backends wrap a list response, e.g. `{"topics": [...]}`.
    fn collection_key() -> &'static str;
}

pub fn matches_filter<T: Entity>(item: &T, filter: &str) -> bool {
    item.search_text()
        .to_lowercase()
        .contains(&filter.to_lowercase())
}
