//! Click statistics models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::pagination::{Page, encode_query};

/// Layout of `date-start` / `date-end` query values (UTC)
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Query parameters of `GET /client/stat/{hash}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRequest {
    pub limit: u32,
    pub page: u32,
    #[serde(rename = "date-start")]
    pub date_start: DateTime<Utc>,
    #[serde(rename = "date-end")]
    pub date_end: DateTime<Utc>,
}

impl StatRequest {
    pub fn new(limit: u32, page: u32, date_start: DateTime<Utc>, date_end: DateTime<Utc>) -> Self {
        Self {
            limit,
            page,
            date_start,
            date_end,
        }
    }

    /// Encoded query string, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        encode_query(vec![
            ("limit", self.limit.to_string()),
            ("page", self.page.to_string()),
            ("date-start", self.date_start.format(DATE_FORMAT).to_string()),
            ("date-end", self.date_end.format(DATE_FORMAT).to_string()),
        ])
    }
}

/// One recorded click
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatResponse {
    pub ip: String,
    pub bot: bool,
    pub mobile: bool,
    pub browser: String,
    pub os: String,
    pub platform: String,
    pub referer: String,
    pub browser_version: String,
    pub created: Option<DateTime<Utc>>,
}

/// Response of `GET /client/stat/{hash}`
pub type StatPaginatedResponse = Page<StatResponse>;
