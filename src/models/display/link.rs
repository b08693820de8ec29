//! Short link display models

use tabled::Tabled;

use super::common::{format_time, or_none, yes_no};
use tinysrc::{LinkResponse, LinkUserResponse};

/// Row for `link list`.
#[derive(Debug, Clone, Tabled)]
pub struct LinkDisplay {
    #[tabled(rename = "HASH")]
    pub hash: String,

    #[tabled(rename = "URL")]
    pub url: String,

    #[tabled(rename = "ACTIVE")]
    pub active: String,

    #[tabled(rename = "CLICKS")]
    pub clicks: i64,

    #[tabled(rename = "BOTS")]
    pub bots: i64,

    #[tabled(rename = "CREATED")]
    pub created: String,

    #[tabled(rename = "EXPIRES")]
    pub expires: String,
}

impl From<&LinkUserResponse> for LinkDisplay {
    fn from(link: &LinkUserResponse) -> Self {
        Self {
            hash: link.hash.clone(),
            url: link.url.clone(),
            active: yes_no(link.is_active()),
            clicks: link.clicks,
            bots: link.bots,
            created: format_time(link.created.as_ref()),
            expires: format_time(link.expiration_time.as_ref()),
        }
    }
}

/// Record for `link create`.
#[derive(Debug, Clone, Tabled)]
pub struct LinkSummaryDisplay {
    #[tabled(rename = "SHORT URL")]
    pub url: String,

    #[tabled(rename = "STATS URL")]
    pub stat_url: String,

    #[tabled(rename = "STATS PASSWORD")]
    pub stat_password: String,

    #[tabled(rename = "PASSWORD")]
    pub password: String,
}

impl From<&LinkResponse> for LinkSummaryDisplay {
    fn from(link: &LinkResponse) -> Self {
        Self {
            url: link.url.clone(),
            stat_url: or_none(&link.stat_url),
            stat_password: or_none(&link.stat_password),
            password: or_none(&link.password),
        }
    }
}
