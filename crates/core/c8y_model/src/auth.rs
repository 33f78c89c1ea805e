use crate::maybe::Maybe;
use serde::Deserialize;
use serde::Serialize;

/// OAI-Secure access token.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccessToken {
    /// The token generated by the platform, sent under the OAuth
    /// `access_token` name.
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub access_token: Maybe<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub current_user_password: Maybe<String>,

    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub new_password: Maybe<String>,
}

/// An object with a user reference URL.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubscribedUser {
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub user: Maybe<UserReference>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserReference {
    #[serde(rename = "self", default, skip_serializing_if = "Maybe::is_absent")]
    pub self_url: Maybe<String>,
}

/// The signed verification code proving the user's possession of a
/// trusted certificate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedTrustedCertSignedVerificationCode {
    #[serde(default, skip_serializing_if = "Maybe::is_absent")]
    pub proof_of_possession_signed_verification_code: Maybe<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn access_token_uses_the_oauth_field_name() {
        let token: AccessToken =
            serde_json::from_value(json!({"access_token": "eyJhbGciOi"})).unwrap();
        assert_eq!(token.access_token, Maybe::Value("eyJhbGciOi".into()));
        assert_eq!(
            serde_json::to_value(&token).unwrap(),
            json!({"access_token": "eyJhbGciOi"})
        );
    }
}
