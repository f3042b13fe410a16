//! Profile and email payloads.
//!
//! LinkedIn responses are read as untyped JSON and navigated with JSON
//! pointers, so an unexpected shape degrades to empty values instead of a
//! deserialization error.

use serde_json::Value;

/// Pointer to the member identifier in a `/v2/me` response.
const ID: &str = "/id";

/// Pointer to the localized first name in a `/v2/me` response.
const FIRST_NAME: &str = "/localizedFirstName";

/// Pointer to the localized last name in a `/v2/me` response.
const LAST_NAME: &str = "/localizedLastName";

/// Pointer to the primary address in an `/v2/emailAddress` response.
///
/// `~0` escapes the literal `~` of the `handle~` key.
const EMAIL_ADDRESS: &str = "/elements/0/handle~0/emailAddress";

/// Read the string at `pointer`, if every step exists and the leaf is a
/// string.
#[must_use]
pub fn str_at<'a>(value: &'a Value, pointer: &str) -> Option<&'a str> {
    value.pointer(pointer).and_then(Value::as_str)
}

/// Read the string at `pointer`, or an empty string.
#[must_use]
pub fn string_at(value: &Value, pointer: &str) -> String {
    str_at(value, pointer).unwrap_or_default().to_string()
}

/// Lite profile of the authenticated member.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    raw: Value,
}

impl UserProfile {
    /// Wrap a `/v2/me` response.
    #[must_use]
    pub const fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// Member identifier, or an empty string.
    #[must_use]
    pub fn id(&self) -> String {
        string_at(&self.raw, ID)
    }

    /// Localized first name, if present.
    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        str_at(&self.raw, FIRST_NAME)
    }

    /// Localized last name, if present.
    #[must_use]
    pub fn last_name(&self) -> Option<&str> {
        str_at(&self.raw, LAST_NAME)
    }

    /// First and last name joined by a space.
    ///
    /// Falls back to whichever part is present, then to an empty string.
    #[must_use]
    pub fn display_name(&self) -> String {
        let first = self.first_name().filter(|name| !name.is_empty());
        let last = self.last_name().filter(|name| !name.is_empty());

        match (first, last) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(name), None) | (None, Some(name)) => name.to_string(),
            (None, None) => String::new(),
        }
    }

    /// The raw response.
    #[must_use]
    pub const fn raw(&self) -> &Value {
        &self.raw
    }
}

/// Extract the primary address from an `/v2/emailAddress` response.
///
/// Returns an empty string when any level of
/// `elements[0]["handle~"]["emailAddress"]` is missing.
#[must_use]
pub fn primary_email(response: &Value) -> String {
    string_at(response, EMAIL_ADDRESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id() {
        assert_eq!(UserProfile::new(json!({"id": "abc123"})).id(), "abc123");
        assert_eq!(UserProfile::new(json!({})).id(), "");
        assert_eq!(UserProfile::new(json!({"id": 42})).id(), "");
    }

    #[test]
    fn test_display_name() {
        let both = UserProfile::new(json!({
            "localizedFirstName": "Ada",
            "localizedLastName": "Lovelace"
        }));
        let first = UserProfile::new(json!({"localizedFirstName": "Ada"}));
        let last = UserProfile::new(json!({"localizedLastName": "Lovelace"}));
        let neither = UserProfile::new(json!({"id": "x"}));

        assert_eq!(both.display_name(), "Ada Lovelace");
        assert_eq!(first.display_name(), "Ada");
        assert_eq!(last.display_name(), "Lovelace");
        assert_eq!(neither.display_name(), "");
    }

    #[test]
    fn test_empty_first_name_does_not_add_space() {
        let profile = UserProfile::new(json!({
            "localizedFirstName": "",
            "localizedLastName": "Lovelace"
        }));

        assert_eq!(profile.display_name(), "Lovelace");
    }

    #[test]
    fn test_primary_email() {
        let response = json!({
            "elements": [
                {"handle": "urn:li:emailAddress:1", "handle~": {"emailAddress": "ada@example.com"}}
            ]
        });

        assert_eq!(primary_email(&response), "ada@example.com");
    }

    #[test]
    fn test_primary_email_missing_levels() {
        let shapes = [
            json!({}),
            json!({"elements": []}),
            json!({"elements": [{}]}),
            json!({"elements": [{"handle~": {}}]}),
            json!({"elements": [{"handle~": {"emailAddress": null}}]}),
            json!({"elements": [{"handle~": {"emailAddress": 7}}]}),
            json!([]),
        ];

        for shape in &shapes {
            assert_eq!(primary_email(shape), "", "shape: {shape}");
        }
    }
}
