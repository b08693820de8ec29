//! Mock TinySRC API client for handler tests
//!
//! Serves canned responses and records what each handler asked for, so the
//! command layer can be tested without an HTTP server.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use tinysrc::error::{Error, Result};
use tinysrc::{
    CurrentUserResponse, ErrorResponse, LinkActivationRequest, LinkApi, LinkRequest, LinkResponse,
    LinkUserResponse, ListUrlsRequest, Page, PaginatedLinkUserResponse, StatApi,
    StatPaginatedResponse, StatRequest, StatResponse, UserApi,
};

/// A request the mock received.
#[derive(Debug, Clone, PartialEq)]
pub enum CapturedRequest {
    Create(LinkRequest),
    List(ListUrlsRequest),
    Get(String),
    SetActive(String, bool),
    Stats(String, StatRequest),
    CurrentUser,
}

#[derive(Default)]
pub struct MockTinySrcClient {
    created: Arc<Mutex<LinkResponse>>,
    links: Arc<Mutex<Vec<LinkUserResponse>>>,
    stats: Arc<Mutex<Vec<StatResponse>>>,
    user: Arc<Mutex<CurrentUserResponse>>,
    /// Error to return, consumed on first use
    error: Arc<Mutex<Option<Error>>>,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockTinySrcClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_created(self, link: LinkResponse) -> Self {
        *self.created.try_lock().expect("fresh mock") = link;
        self
    }

    pub fn with_links(self, links: Vec<LinkUserResponse>) -> Self {
        *self.links.try_lock().expect("fresh mock") = links;
        self
    }

    pub fn with_stats(self, stats: Vec<StatResponse>) -> Self {
        *self.stats.try_lock().expect("fresh mock") = stats;
        self
    }

    pub fn with_user(self, user: CurrentUserResponse) -> Self {
        *self.user.try_lock().expect("fresh mock") = user;
        self
    }

    /// Fail the next call with an API error carrying `status` and `message`.
    pub fn with_api_error(self, status: u16, message: &str) -> Self {
        let mut response = ErrorResponse::from_message(message);
        response.status = Some(status);
        *self.error.try_lock().expect("fresh mock") = Some(Error::Api(response));
        self
    }

    pub async fn captured(&self) -> Vec<CapturedRequest> {
        self.captured.lock().await.clone()
    }

    async fn record(&self, request: CapturedRequest) -> Result<()> {
        self.captured.lock().await.push(request);
        match self.error.lock().await.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl LinkApi for MockTinySrcClient {
    async fn create_short_link(&self, request: &LinkRequest) -> Result<LinkResponse> {
        self.record(CapturedRequest::Create(request.clone())).await?;
        Ok(self.created.lock().await.clone())
    }

    async fn list_links(&self, params: &ListUrlsRequest) -> Result<PaginatedLinkUserResponse> {
        self.record(CapturedRequest::List(params.clone())).await?;
        let links = self.links.lock().await.clone();
        let total = links.len() as i64;
        Ok(Page::new(links, total))
    }

    async fn get_link(&self, hash: &str) -> Result<LinkUserResponse> {
        self.record(CapturedRequest::Get(hash.to_string())).await?;
        let links = self.links.lock().await;
        links
            .iter()
            .find(|l| l.hash == hash)
            .cloned()
            .ok_or_else(|| {
                let mut response = ErrorResponse::from_message("Not Found");
                response.status = Some(404);
                Error::Api(response)
            })
    }

    async fn set_active(&self, hash: &str, request: &LinkActivationRequest) -> Result<bool> {
        self.record(CapturedRequest::SetActive(hash.to_string(), request.active))
            .await?;
        Ok(true)
    }
}

#[async_trait]
impl StatApi for MockTinySrcClient {
    async fn get_stats(&self, hash: &str, params: &StatRequest) -> Result<StatPaginatedResponse> {
        self.record(CapturedRequest::Stats(hash.to_string(), params.clone()))
            .await?;
        let stats = self.stats.lock().await.clone();
        let total = stats.len() as i64;
        Ok(Page::new(stats, total))
    }
}

#[async_trait]
impl UserApi for MockTinySrcClient {
    async fn get_current_user(&self) -> Result<CurrentUserResponse> {
        self.record(CapturedRequest::CurrentUser).await?;
        Ok(self.user.lock().await.clone())
    }
}
