//! Statistics API trait

use async_trait::async_trait;

use crate::client::models::{StatPaginatedResponse, StatRequest};
use crate::error::Result;

/// Click statistics for the TinySRC API
#[async_trait]
pub trait StatApi: Send + Sync {
    /// Clicks recorded for a link within a date range (`GET /client/stat/{hash}`)
    async fn get_stats(&self, hash: &str, params: &StatRequest) -> Result<StatPaginatedResponse>;
}
