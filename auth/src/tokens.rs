//! Token endpoint responses.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Tokens returned by LinkedIn's token endpoint.
///
/// Every field tolerates absence: a response without `access_token`
/// yields an empty string rather than a parse error. Fields this type does
/// not model are kept in [`TokenSet::extra`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenSet {
    /// Bearer token for API requests.
    #[serde(default, deserialize_with = "null_as_default")]
    pub access_token: String,

    /// Refresh token, when the application is enabled for refresh.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// Access token lifetime in seconds (typically 60 days).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,

    /// Refresh token lifetime in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token_expires_in: Option<i64>,

    /// Granted scopes (comma- or space-delimited, as sent by LinkedIn).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// Remaining raw response fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,

    /// When this set was received.
    #[serde(skip, default = "Utc::now")]
    pub obtained_at: DateTime<Utc>,
}

impl TokenSet {
    /// Parse a token endpoint response body.
    ///
    /// # Errors
    ///
    /// Returns `OAuthError::ResponseParseFailed` if the body is not a JSON
    /// object.
    pub fn from_json(body: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Absolute expiry of the access token, if LinkedIn sent a lifetime.
    ///
    /// A lifetime too large to represent yields `None`.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_in
            .and_then(Duration::try_seconds)
            .and_then(|lifetime| self.obtained_at.checked_add_signed(lifetime))
    }

    /// Whether the access token has expired at `now`.
    ///
    /// Tokens without a lifetime never report as expired.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|expires_at| now >= expires_at)
    }

    /// Whether a non-empty refresh token is present.
    #[must_use]
    pub fn has_refresh_token(&self) -> bool {
        self.refresh_token
            .as_deref()
            .is_some_and(|token| !token.is_empty())
    }

    /// Raw access to a response field by name.
    ///
    /// Modelled fields are also served from here.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value> {
        match key {
            "access_token" => Some(Value::String(self.access_token.clone())),
            "refresh_token" => self.refresh_token.clone().map(Value::String),
            "expires_in" => self.expires_in.map(Value::from),
            "refresh_token_expires_in" => self.refresh_token_expires_in.map(Value::from),
            "scope" => self.scope.clone().map(Value::String),
            _ => self.extra.get(key).cloned(),
        }
    }
}

/// Read an explicit JSON `null` as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parses_linkedin_response() {
        let tokens = TokenSet::from_json(
            r#"{
                "access_token": "AQX",
                "expires_in": 5184000,
                "refresh_token": "AQW",
                "refresh_token_expires_in": 31536000,
                "scope": "r_emailaddress,r_liteprofile"
            }"#,
        )
        .unwrap();

        assert_eq!(tokens.access_token, "AQX");
        assert_eq!(tokens.refresh_token.as_deref(), Some("AQW"));
        assert_eq!(tokens.expires_in, Some(5_184_000));
        assert_eq!(tokens.refresh_token_expires_in, Some(31_536_000));
        assert!(tokens.extra.is_empty());
    }

    #[test]
    fn test_missing_fields_default() {
        let tokens = TokenSet::from_json("{}").unwrap();

        assert_eq!(tokens.access_token, "");
        assert!(tokens.refresh_token.is_none());
        assert!(tokens.expires_at().is_none());
        assert!(!tokens.has_refresh_token());
    }

    #[test]
    fn test_null_fields_default() {
        let tokens = TokenSet::from_json(
            r#"{"access_token": null, "refresh_token": null, "expires_in": null, "scope": null}"#,
        )
        .unwrap();

        assert_eq!(tokens.access_token, "");
        assert!(tokens.refresh_token.is_none());
        assert!(tokens.expires_in.is_none());
        assert!(tokens.scope.is_none());
        assert!(!tokens.has_refresh_token());
    }

    #[test]
    fn test_unknown_fields_are_kept() {
        let tokens =
            TokenSet::from_json(r#"{"access_token": "a", "id_token": "jwt"}"#).unwrap();

        assert_eq!(tokens.get("id_token"), Some(Value::from("jwt")));
        assert_eq!(tokens.get("access_token"), Some(Value::from("a")));
        assert_eq!(tokens.get("nope"), None);
    }

    #[test]
    fn test_non_object_body_fails() {
        assert!(TokenSet::from_json("[]").is_err());
        assert!(TokenSet::from_json("<html>").is_err());
    }

    #[test]
    fn test_expiry() {
        let epoch = Utc.timestamp_opt(0, 0).unwrap();
        let mut tokens = TokenSet::from_json(r#"{"access_token": "a", "expires_in": 60}"#).unwrap();
        tokens.obtained_at = epoch;

        assert_eq!(tokens.expires_at(), Some(epoch + Duration::seconds(60)));
        assert!(!tokens.is_expired_at(epoch + Duration::seconds(59)));
        assert!(tokens.is_expired_at(epoch + Duration::seconds(60)));
    }

    #[test]
    fn test_unrepresentable_lifetime_has_no_expiry() {
        let tokens = TokenSet::from_json(
            r#"{"access_token": "a", "expires_in": 9223372036854775807}"#,
        )
        .unwrap();

        assert_eq!(tokens.expires_in, Some(i64::MAX));
        assert!(tokens.expires_at().is_none());
        assert!(!tokens.is_expired_at(Utc::now()));
    }

    #[test]
    fn test_empty_refresh_token_is_absent() {
        let tokens =
            TokenSet::from_json(r#"{"access_token": "a", "refresh_token": ""}"#).unwrap();

        assert!(!tokens.has_refresh_token());
    }
}
