use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published application/version entry with an owning identifier.
///
/// Immutable once fetched; a refresh replaces the whole collection. The
/// `appId`/`appName`/`appVersion` aliases are the deprecated detail-page
/// shape, accepted on input and never produced on output.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Software {
    #[serde(alias = "appId")]
    pub software_id: String,
    /// Semver-like, not validated.
    #[serde(alias = "appVersion")]
    pub version: String,
    #[serde(alias = "appName")]
    pub name: String,
    pub owner: String,
    pub published_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn deserialize_canonical_shape() {
        let software: Software = serde_json::from_str(indoc! {r#"
            {
              "softwareId": "sw-001",
              "version": "1.0.0",
              "name": "AwesomeApp",
              "owner": "user_12345",
              "publishedAt": "2025-06-01T10:00:00Z"
            }"#
        })
        .unwrap();
        assert_eq!(software.software_id, "sw-001");
        assert_eq!(software.name, "AwesomeApp");
    }

    #[test]
    fn deserialize_deprecated_aliases() {
        let software: Software = serde_json::from_str(indoc! {r#"
            {
              "appId": "sw-002",
              "appVersion": "1.0.2",
              "appName": "GreatTool",
              "owner": "user_67890",
              "publishedAt": "2025-06-02T14:30:00Z"
            }"#
        })
        .unwrap();
        assert_eq!(software.software_id, "sw-002");
        assert_eq!(software.version, "1.0.2");
        assert_eq!(software.name, "GreatTool");
    }

    #[test]
    fn serialize_only_canonical_keys() {
        let json = serde_json::to_string(&Software::default()).unwrap();
        assert!(json.contains("softwareId"));
        assert!(!json.contains("appId"));
    }
}
