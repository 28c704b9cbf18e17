//! # Profile Module
//!
//! Customer profile snapshot. The password is write-only from the
//! client's perspective: it appears in create/update requests but never
//! in responses or in client-held state.

use serde::{Deserialize, Deserializer, Serialize};

/// Customer profile as returned by the ledger service.
///
/// Zero or more accounts may be linked to a profile; the link itself
/// lives server-side and is only observed through account search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub username: String,
    pub name: String,
    #[serde(deserialize_with = "string_or_number")]
    pub phone: String,
    pub address: String,
    pub email: String,
    #[serde(deserialize_with = "string_or_number")]
    pub credit_score: String,
}

// The ledger emits phone and creditScore as a number on some endpoints
// and a string on others; the client treats both as display text.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(f) => f.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_decodes_string_fields() {
        let json = r#"{
            "username": "alice",
            "name": "Alice Nguyen",
            "phone": "5551234567",
            "address": "12 Main St",
            "email": "alice@example.com",
            "creditScore": "700"
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.username, "alice");
        assert_eq!(profile.phone, "5551234567");
        assert_eq!(profile.credit_score, "700");
    }

    #[test]
    fn test_profile_decodes_numeric_fields() {
        // customer-login returns phone and creditScore as numbers
        let json = r#"{
            "username": "alice",
            "name": "Alice Nguyen",
            "phone": 5551234567,
            "address": "12 Main St",
            "email": "alice@example.com",
            "creditScore": 700
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.phone, "5551234567");
        assert_eq!(profile.credit_score, "700");
    }

    #[test]
    fn test_profile_tolerates_missing_fields() {
        let profile: Profile = serde_json::from_str(r#"{"username":"bob"}"#).unwrap();
        assert_eq!(profile.username, "bob");
        assert_eq!(profile.name, "");
        assert_eq!(profile.credit_score, "");
    }
}
