use serde::Serialize;

/// Paging and keyword parameters of a list request.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub keyword: String,
    pub page_index: u32,
    pub page_size: u32,
}

impl SearchCriteria {
    pub fn new(keyword: impl Into<String>, page_index: u32, page_size: u32) -> Self {
        Self {
            keyword: keyword.into(),
            page_index,
            page_size,
        }
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self::new("", 0, 10)
    }
}
