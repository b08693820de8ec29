//! Account models

use serde::{Deserialize, Serialize};

/// Response of `GET /client/user`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentUserResponse {
    pub username: String,
    pub api_key: String,
    pub active: i32,
    /// Subscription plan identifier
    pub plan: i32,
    pub banned: i32,
    pub email: String,
}

impl CurrentUserResponse {
    pub fn is_active(&self) -> bool {
        self.active != 0
    }

    pub fn is_banned(&self) -> bool {
        self.banned != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_user_decodes() {
        let body = r#"{"username":"test","api_key":"test","active":1,"plan":1,"banned":0,"email":"test@test.com"}"#;
        let user: CurrentUserResponse = serde_json::from_str(body).unwrap();

        assert_eq!(user.username, "test");
        assert_eq!(user.email, "test@test.com");
        assert!(user.is_active());
        assert!(!user.is_banned());
    }
}
