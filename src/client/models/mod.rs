//! TinySRC API data models
//!
//! Request and response payloads for every endpoint, organized by resource.

mod error;
mod link;
mod stat;
mod user;

pub use error::{ErrorResponse, UNAUTHORIZED};
pub use link::{
    LinkActivationRequest, LinkRequest, LinkResponse, LinkUserResponse, ListUrlsRequest,
    PaginatedLinkUserResponse,
};
pub use stat::{DATE_FORMAT, StatPaginatedResponse, StatRequest, StatResponse};
pub use user::CurrentUserResponse;

use serde::{Deserialize, Deserializer};

/// Decode an explicit JSON `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
