//! Account commands

use tinysrc::error::Result;
use tinysrc::{CurrentUserResponse, UserApi};

use crate::cli::OutputFormat;
use crate::models::UserDisplay;
use crate::output;

/// Run `user me`.
pub async fn me<C: UserApi + ?Sized>(api: &C, format: OutputFormat) -> Result<String> {
    let mut user = api.get_current_user().await?;
    // Never echo the key back
    user.api_key.clear();
    output::render_one::<CurrentUserResponse, UserDisplay>(&user, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::mock::MockTinySrcClient;

    fn user() -> CurrentUserResponse {
        CurrentUserResponse {
            username: "test".to_string(),
            api_key: "key-123".to_string(),
            active: 1,
            plan: 1,
            banned: 0,
            email: "test@test.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_me_table() {
        let mock = MockTinySrcClient::new().with_user(user());

        let out = me(&mock, OutputFormat::Table).await.unwrap();

        assert!(out.contains("test@test.com"));
        assert!(out.contains("USERNAME"));
    }

    #[tokio::test]
    async fn test_me_json_omits_key() {
        let mock = MockTinySrcClient::new().with_user(user());

        let out = me(&mock, OutputFormat::Json).await.unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["data"]["username"], "test");
        assert!(!out.contains("key-123"));
    }
}
