use serde::{Deserialize, Serialize};

use crate::common::entity::Entity;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Job {
    pub name: String,
    pub documentation: String,
}

impl Job {
    pub fn new(name: impl Into<String>, documentation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            documentation: documentation.into(),
        }
    }

    /// Rows used to seed the in-memory backend for demos.
    pub fn samples() -> Vec<Job> {
        vec![Job::new("name1", "doc1"), Job::new("name2", "doc2")]
    }
}

impl Entity for Job {
    fn id(&self) -> String {
        self.name.clone()
    }

    fn search_text(&self) -> String {
        format!("{}{}", self.name, self.documentation)
    }

    fn collection_key() -> &'static str {
        "jobs"
    }
}
