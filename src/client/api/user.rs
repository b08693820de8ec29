//! Account API trait

use async_trait::async_trait;

use crate::client::models::CurrentUserResponse;
use crate::error::Result;

/// Account operations for the TinySRC API
#[async_trait]
pub trait UserApi: Send + Sync {
    /// The account owning the configured API key (`GET /client/user`)
    async fn get_current_user(&self) -> Result<CurrentUserResponse>;
}
