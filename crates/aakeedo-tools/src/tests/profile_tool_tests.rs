use std::sync::Arc;

use aakeedo_types::UserData;

use super::FakeProfileSource;
use crate::wanikani::{MISSING_TOKEN_MESSAGE, PROFILE_UNAVAILABLE_MESSAGE};
use crate::{ProfileTools, ToolContext, WANIKANI_API_TOKEN};

#[tokio::test]
async fn test_missing_token_returns_message_without_calling_source() {
    let source = Arc::new(FakeProfileSource::default());
    let tools = ProfileTools::new(Arc::clone(&source));

    let result = tools.get_user_information(&ToolContext::new()).await;
    assert_eq!(result, MISSING_TOKEN_MESSAGE);

    let blank = ToolContext::new().with_secret(WANIKANI_API_TOKEN, "");
    let result = tools.get_user_information(&blank).await;
    assert_eq!(result, MISSING_TOKEN_MESSAGE);

    assert!(source.tokens().is_empty());
}

#[tokio::test]
async fn test_profile_success() {
    let source = Arc::new(FakeProfileSource {
        user: Some(UserData {
            username: "koichi".to_string(),
            level: 12,
        }),
        ..Default::default()
    });
    let tools = ProfileTools::new(Arc::clone(&source));
    let context = ToolContext::new().with_secret(WANIKANI_API_TOKEN, "token-123");

    let result = tools.get_user_information(&context).await;

    assert_eq!(result, r#"{"username":"koichi","level":12}"#);
    assert_eq!(source.tokens(), vec!["token-123"]);
}

#[tokio::test]
async fn test_profile_failure_degrades_to_message() {
    let tools = ProfileTools::new(FakeProfileSource::default());
    let context = ToolContext::new().with_secret(WANIKANI_API_TOKEN, "expired");

    let result = tools.get_user_information(&context).await;

    assert_eq!(result, PROFILE_UNAVAILABLE_MESSAGE);
}
