//! Short link API trait

use async_trait::async_trait;

use crate::client::models::{
    LinkActivationRequest, LinkRequest, LinkResponse, LinkUserResponse, ListUrlsRequest,
    PaginatedLinkUserResponse,
};
use crate::error::Result;

/// Short link operations for the TinySRC API
#[async_trait]
pub trait LinkApi: Send + Sync {
    /// Create a new short link (`POST /create`)
    async fn create_short_link(&self, request: &LinkRequest) -> Result<LinkResponse>;

    /// List links owned by the current user (`GET /client/url`)
    async fn list_links(&self, params: &ListUrlsRequest) -> Result<PaginatedLinkUserResponse>;

    /// Get a single link by its hash (`GET /client/url/{hash}`)
    ///
    /// `hash` is inserted into the path as-is and must be an identifier
    /// returned by the API.
    async fn get_link(&self, hash: &str) -> Result<LinkUserResponse>;

    /// Enable or disable a link (`PATCH /client/{hash}`)
    ///
    /// Returns `true` once the API accepted the change.
    async fn set_active(&self, hash: &str, request: &LinkActivationRequest) -> Result<bool>;
}
