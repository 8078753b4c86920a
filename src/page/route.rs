use std::collections::HashMap;
use std::fmt;

/// Parameters extracted from a matched path, e.g. `id` for `/topic/:id`.
pub type RouteParams = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    TopicList,
    TopicDetail { id: String },
    JobList,
    ErrorList,
    NotFound { path: String },
}

impl Route {
    /// Matches a console path against the route table. Both `/topic/:id` and
    /// `/topic/detail/:id` resolve to the topic detail page.
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["topic"] => Route::TopicList,
            ["topic", "detail", id] | ["topic", id] if *id != "detail" => Route::TopicDetail {
                id: id.to_string(),
            },
            ["job"] => Route::JobList,
            ["error"] => Route::ErrorList,
            _ => Route::NotFound {
                path: path.to_string(),
            },
        }
    }

    pub fn params(&self) -> RouteParams {
        let mut params = RouteParams::new();
        if let Route::TopicDetail { id } = self {
            params.insert("id".to_string(), id.clone());
        }
        params
    }

    pub fn topic_detail(id: &str) -> String {
        format!("/topic/{}", id)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/"),
            Route::TopicList => write!(f, "/topic"),
            Route::TopicDetail { id } => write!(f, "{}", Route::topic_detail(id)),
            Route::JobList => write!(f, "/job"),
            Route::ErrorList => write!(f, "/error"),
            Route::NotFound { path } => write!(f, "{}", path),
        }
    }
}
