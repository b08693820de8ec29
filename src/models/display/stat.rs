//! Click display model

use tabled::Tabled;

use super::common::{format_time, or_none, yes_no};
use tinysrc::StatResponse;

/// Row for `stat get`.
#[derive(Debug, Clone, Tabled)]
pub struct ClickDisplay {
    #[tabled(rename = "TIME")]
    pub created: String,

    #[tabled(rename = "IP")]
    pub ip: String,

    #[tabled(rename = "BROWSER")]
    pub browser: String,

    #[tabled(rename = "OS")]
    pub os: String,

    #[tabled(rename = "MOBILE")]
    pub mobile: String,

    #[tabled(rename = "BOT")]
    pub bot: String,

    #[tabled(rename = "REFERER")]
    pub referer: String,
}

impl From<&StatResponse> for ClickDisplay {
    fn from(stat: &StatResponse) -> Self {
        let browser = if stat.browser_version.is_empty() {
            or_none(&stat.browser)
        } else {
            format!("{} {}", stat.browser, stat.browser_version)
        };

        Self {
            created: format_time(stat.created.as_ref()),
            ip: or_none(&stat.ip),
            browser,
            os: or_none(&stat.os),
            mobile: yes_no(stat.mobile),
            bot: yes_no(stat.bot),
            referer: or_none(&stat.referer),
        }
    }
}
