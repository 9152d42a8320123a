//! Remote HTTP backend
//!
//! Speaks the board wire protocol against a remote server: the same
//! operations as the local store, with request and response bodies in
//! the shape the store persists. Non-success responses and transport
//! failures are converted into the shared error taxonomy. There is no
//! retry and no fallback to the local store; a failed call surfaces
//! directly to the caller.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use uuid::Uuid;

use super::Backend;
use crate::error::{BoardError, BoardResult};
use crate::models::{Faq, Inquiry, NewInquiry, NewPost, Post, PostPatch};
use crate::query::{ListQuery, Page};

/// Timeout applied to every request
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP implementation of [`Backend`]
pub struct RemoteBackend {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteBackend {
    /// Build a client for the given API base URL
    /// (e.g. `http://localhost:8080/api`)
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Query parameters for a listing request
    ///
    /// Optional filters are omitted entirely rather than sent empty.
    fn list_params(query: &ListQuery) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(board) = query.board {
            params.push(("board", board.to_string()));
        }
        if !query.q.is_empty() {
            params.push(("q", query.q.clone()));
        }
        params.push(("sort", query.sort.to_string()));
        params.push(("page", query.page.to_string()));
        params.push(("size", query.size.to_string()));
        params
    }
}

/// Decode a success response, mapping failures onto the operation's
/// error kind
async fn expect_json<T: DeserializeOwned>(
    response: reqwest::Response,
    err: fn(String) -> BoardError,
) -> BoardResult<T> {
    let status = response.status();
    if !status.is_success() {
        warn!("remote request failed with status {}", status);
        return Err(err(format!("server returned {}", status)));
    }
    response.json().await.map_err(|e| err(e.to_string()))
}

#[async_trait]
impl Backend for RemoteBackend {
    async fn list_posts(&self, query: &ListQuery) -> BoardResult<Page<Post>> {
        debug!("GET /posts page={} size={}", query.page, query.size);
        let response = self
            .client
            .get(self.url("/posts"))
            .query(&Self::list_params(query))
            .send()
            .await
            .map_err(|e| BoardError::ListFailed(e.to_string()))?;
        expect_json(response, BoardError::ListFailed).await
    }

    async fn get_post(&self, id: Uuid) -> BoardResult<Option<Post>> {
        let response = self
            .client
            .get(self.url(&format!("/posts/{}", id)))
            .send()
            .await
            .map_err(|e| BoardError::FetchFailed(e.to_string()))?;

        // Absence is part of the contract, not a failure
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        expect_json(response, BoardError::FetchFailed).await.map(Some)
    }

    async fn create_post(&self, payload: NewPost) -> BoardResult<Post> {
        let response = self
            .client
            .post(self.url("/posts"))
            .json(&payload)
            .send()
            .await
            .map_err(|e| BoardError::CreateFailed(e.to_string()))?;
        expect_json(response, BoardError::CreateFailed).await
    }

    async fn update_post(&self, id: Uuid, patch: PostPatch) -> BoardResult<Post> {
        let response = self
            .client
            .put(self.url(&format!("/posts/{}", id)))
            .json(&patch)
            .send()
            .await
            .map_err(|e| BoardError::UpdateFailed(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(BoardError::NotFound(id));
        }
        expect_json(response, BoardError::UpdateFailed).await
    }

    async fn like_post(&self, id: Uuid) -> BoardResult<Post> {
        let response = self
            .client
            .post(self.url(&format!("/posts/{}/like", id)))
            .send()
            .await
            .map_err(|e| BoardError::LikeFailed(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(BoardError::NotFound(id));
        }
        expect_json(response, BoardError::LikeFailed).await
    }

    async fn list_faqs(&self) -> BoardResult<Vec<Faq>> {
        let response = self
            .client
            .get(self.url("/faqs"))
            .send()
            .await
            .map_err(|e| BoardError::FaqFetchFailed(e.to_string()))?;
        expect_json(response, BoardError::FaqFetchFailed).await
    }

    async fn create_inquiry(&self, payload: NewInquiry) -> BoardResult<Inquiry> {
        let response = self
            .client
            .post(self.url("/inquiries"))
            .json(&payload)
            .send()
            .await
            .map_err(|e| BoardError::InquiryCreateFailed(e.to_string()))?;
        expect_json(response, BoardError::InquiryCreateFailed).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Board;
    use crate::query::SortKey;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let backend = RemoteBackend::new("http://localhost:8080/api/").unwrap();
        assert_eq!(backend.url("/posts"), "http://localhost:8080/api/posts");
    }

    #[test]
    fn test_list_params_full_query() {
        let params = RemoteBackend::list_params(&ListQuery {
            board: Some(Board::Event),
            q: "sale".to_string(),
            sort: SortKey::View,
            page: 2,
            size: 20,
        });

        assert_eq!(
            params,
            vec![
                ("board", "EVENT".to_string()),
                ("q", "sale".to_string()),
                ("sort", "view".to_string()),
                ("page", "2".to_string()),
                ("size", "20".to_string()),
            ]
        );
    }

    #[test]
    fn test_list_params_omit_absent_filters() {
        let params = RemoteBackend::list_params(&ListQuery::default());

        assert!(params.iter().all(|(k, _)| *k != "board" && *k != "q"));
        assert!(params.contains(&(("sort"), "new".to_string())));
    }

    #[test]
    fn test_page_response_wire_shape_parses() {
        // The shape a conforming server returns for a listing
        let body = serde_json::json!({
            "data": [{
                "id": "4a3fcf34-98ea-4b52-9a9e-6c7da129fd23",
                "board": "NOTICE",
                "title": "t",
                "author": "a",
                "content": "c",
                "tags": ["x"],
                "views": 3,
                "likes": 1,
                "createdAt": 1_756_000_000_000_i64,
                "updatedAt": 1_756_000_360_000_i64
            }],
            "total": 41
        });

        let page: Page<Post> = serde_json::from_value(body).unwrap();
        assert_eq!(page.total, 41);
        assert_eq!(page.data[0].views, 3);
        assert!(page.data[0].event_start.is_none());
    }
}
