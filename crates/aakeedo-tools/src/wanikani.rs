use aakeedo_client::ProfileSource;

use crate::context::{ToolContext, WANIKANI_API_TOKEN};

pub const MISSING_TOKEN_MESSAGE: &str =
    "No WaniKani API token provided, so no user information can be fetched.";

pub const PROFILE_UNAVAILABLE_MESSAGE: &str = "Could not retrieve WaniKani user information due to an API error, invalid data, or token issue.";

pub struct ProfileTools<P> {
    source: P,
}

impl<P: ProfileSource> ProfileTools<P> {
    pub fn new(source: P) -> Self {
        Self { source }
    }

    /// `get_user_information`: the learner's username and level as JSON.
    ///
    /// Never fails. A missing token or an unavailable profile is reported as
    /// a plain explanatory string.
    pub async fn get_user_information(&self, context: &ToolContext) -> String {
        let Some(api_token) = context.get_secret(WANIKANI_API_TOKEN) else {
            return MISSING_TOKEN_MESSAGE.to_string();
        };

        let Some(user) = self.source.user_info(api_token).await else {
            return PROFILE_UNAVAILABLE_MESSAGE.to_string();
        };

        match serde_json::to_string(&user) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!("Failed to serialize WaniKani user: {e}");
                PROFILE_UNAVAILABLE_MESSAGE.to_string()
            }
        }
    }
}
