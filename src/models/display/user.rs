//! Account display model

use tabled::Tabled;

use super::common::yes_no;
use tinysrc::CurrentUserResponse;

/// Record for `user me`. The API key is never shown.
#[derive(Debug, Clone, Tabled)]
pub struct UserDisplay {
    #[tabled(rename = "USERNAME")]
    pub username: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "PLAN")]
    pub plan: i32,

    #[tabled(rename = "ACTIVE")]
    pub active: String,

    #[tabled(rename = "BANNED")]
    pub banned: String,
}

impl From<&CurrentUserResponse> for UserDisplay {
    fn from(user: &CurrentUserResponse) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            plan: user.plan,
            active: yes_no(user.is_active()),
            banned: yes_no(user.is_banned()),
        }
    }
}
