//! Rust SDK for the TinySRC URL shortener API.
//!
//! ```no_run
//! use tinysrc::{LinkApi, LinkRequest, RequestContext, TinySrcClient};
//!
//! # async fn run() -> tinysrc::Result<()> {
//! let client = TinySrcClient::new(RequestContext::background(), "my-api-key", None)?;
//! let link = client
//!     .create_short_link(&LinkRequest::new("https://example.com"))
//!     .await?;
//! println!("{}", link.url);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::models::{
    CurrentUserResponse, ErrorResponse, LinkActivationRequest, LinkRequest, LinkResponse,
    LinkUserResponse, ListUrlsRequest, PaginatedLinkUserResponse, StatPaginatedResponse,
    StatRequest, StatResponse,
};
pub use client::{
    ContextError, LinkApi, Page, RequestContext, StatApi, TinySrcApi, TinySrcClient, UserApi,
};
pub use config::Config;
pub use error::{ConfigError, Error, Result};
