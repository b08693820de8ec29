//! Short link models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::pagination::{Page, encode_query};

/// Body of `POST /create`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRequest {
    /// Destination URL to shorten
    pub url: String,

    /// 1 when visitors must enter `password`, 0 otherwise
    #[serde(default)]
    pub auth_required: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Expiration time in the API's date layout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<String>,
}

impl LinkRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Protect the link with a password. Also sets `auth_required`.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self.auth_required = 1;
        self
    }

    /// Mark the link as requiring authentication.
    pub fn auth_required(mut self) -> Self {
        self.auth_required = 1;
        self
    }

    pub fn expiration_time(mut self, expiration: impl Into<String>) -> Self {
        self.expiration_time = Some(expiration.into());
        self
    }
}

/// Query parameters of `GET /client/url`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListUrlsRequest {
    pub limit: u32,
    pub page: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub query: String,
}

impl ListUrlsRequest {
    pub fn new(limit: u32, page: u32) -> Self {
        Self {
            limit,
            page,
            query: String::new(),
        }
    }

    /// Filter links by a search string
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Encoded query string, without the leading `?`.
    ///
    /// `query` is always present, even when empty.
    pub fn to_query_string(&self) -> String {
        encode_query(vec![
            ("limit", self.limit.to_string()),
            ("page", self.page.to_string()),
            ("query", self.query.clone()),
        ])
    }
}

/// Body of `PATCH /client/{hash}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkActivationRequest {
    pub active: bool,
}

impl LinkActivationRequest {
    pub fn new(active: bool) -> Self {
        Self { active }
    }
}

/// Response of `POST /create`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkResponse {
    /// The short URL
    pub url: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub stat_url: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub stat_password: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,

    pub auth_required: i32,
}

/// A link owned by the current user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkUserResponse {
    /// Destination URL
    pub url: String,

    /// Short link identifier
    pub hash: String,

    pub auth_required: i32,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,

    pub stat_password: String,

    /// QR code image URL
    pub qr_code: String,

    /// 1 when the link redirects, 0 when disabled
    pub active: i32,

    pub clicks: i64,

    pub bots: i64,

    pub stat_url: String,

    pub created: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<DateTime<Utc>>,
}

impl LinkUserResponse {
    pub fn is_active(&self) -> bool {
        self.active != 0
    }
}

/// Response of `GET /client/url`
pub type PaginatedLinkUserResponse = Page<LinkUserResponse>;
