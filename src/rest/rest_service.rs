use anyhow::Result;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};

use crate::common::error::RestError;
use crate::common::search_criteria::SearchCriteria;

const APPLICATION_JSON: &str = "application/json";

/// A fully read HTTP response from the console backend.
#[derive(Debug, Clone)]
pub struct RestResponse {
    pub status: u16,
    pub url: String,
    pub body: String,
}

impl RestResponse {
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|e| {
            RestError::InvalidResponse {
                url: self.url.clone(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

/// HTTP client bound to one entity endpoint.
#[derive(Debug, Clone)]
pub struct RestService {
    url: String,
    http: reqwest::Client,
}

impl RestService {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, reqwest::Client::new())
    }

    pub fn with_client(url: impl Into<String>, http: reqwest::Client) -> Self {
        let url: String = url.into();
        Self {
            url: url.trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Appends `id` as a single percent-encoded path segment.
    fn item_url(&self, id: &str) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.url)?;
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("{} cannot address items", self.url))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }

    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        headers
    }

    fn body<T: Serialize>(item: &T) -> Result<String> {
        Ok(serde_json::to_string(item)?)
    }

    pub async fn search(&self, criteria: Option<&SearchCriteria>) -> Result<RestResponse> {
        let mut request = self.http.get(&self.url).headers(Self::headers());
        if let Some(criteria) = criteria {
            request = request.query(criteria);
        }
        Self::send(request).await
    }

    pub async fn get(&self, id: &str) -> Result<RestResponse> {
        let request = self.http.get(self.item_url(id)?).headers(Self::headers());
        Self::send(request).await
    }

    /// PUT: create or replace.
    pub async fn save<T: Serialize>(&self, id: &str, item: &T) -> Result<RestResponse> {
        let request = self
            .http
            .put(self.item_url(id)?)
            .headers(Self::headers())
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .body(Self::body(item)?);
        Self::send(request).await
    }

    /// POST: update in place.
    pub async fn update<T: Serialize>(&self, id: &str, item: &T) -> Result<RestResponse> {
        let request = self
            .http
            .post(self.item_url(id)?)
            .headers(Self::headers())
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .body(Self::body(item)?);
        Self::send(request).await
    }

    pub async fn delete(&self, id: &str) -> Result<RestResponse> {
        let request = self.http.delete(self.item_url(id)?).headers(Self::headers());
        Self::send(request).await
    }

    async fn send(request: reqwest::RequestBuilder) -> Result<RestResponse> {
        let response = request.send().await?;
        let status = response.status();
        let url = response.url().to_string();
        let body = response.text().await?;
        log::debug!("{} <- {}", status, url);

        if !status.is_success() {
            return Err(RestError::Status {
                status: status.as_u16(),
                url,
                body,
            }
            .into());
        }
        Ok(RestResponse {
            status: status.as_u16(),
            url,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_urls_ignore_trailing_slash() {
        let service = RestService::new("http://host/topics/");
        assert_eq!(service.url(), "http://host/topics");
        assert_eq!(service.item_url("42").unwrap().as_str(), "http://host/topics/42");
    }

    #[test]
    fn item_ids_stay_one_segment() {
        let service = RestService::new("http://host/jobs");
        assert_eq!(
            service.item_url("team/ingest #2?v=1").unwrap().as_str(),
            "http://host/jobs/team%2Fingest%20%232%3Fv=1"
        );
        assert!(RestService::new("not a url").item_url("1").is_err());
    }

    #[test]
    fn response_decoding_reports_url() {
        let response = RestResponse {
            status: 200,
            url: "http://host/jobs".to_string(),
            body: "not json".to_string(),
        };
        let err = response.json::<Vec<String>>().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RestError>(),
            Some(RestError::InvalidResponse { url, .. }) if url == "http://host/jobs"
        ));
    }
}
