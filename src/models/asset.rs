//! Asset and account types
//!
//! These mirror the records the backend returns from `/assets` and
//! `/verify-asset`. Field names follow the backend's camelCase wire format.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a registered asset
///
/// Serialized as the plain category string. Categories the client does not
/// know about are kept verbatim in `Other` so one unfamiliar record never
/// fails a whole asset list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AssetType {
    Certificate,
    Product,
    Land,
    Vehicle,
    DigitalStamp,
    Other(String),
}

impl AssetType {
    /// Categories offered by the owner dashboard, one form each
    pub fn form_types() -> &'static [AssetType] {
        &[
            AssetType::Certificate,
            AssetType::Product,
            AssetType::Land,
            AssetType::Vehicle,
        ]
    }

    /// Every category the add-asset form lets the user pick
    pub fn selectable() -> &'static [AssetType] {
        &[
            AssetType::Certificate,
            AssetType::Product,
            AssetType::Land,
            AssetType::Vehicle,
            AssetType::DigitalStamp,
        ]
    }

    /// Wire representation
    pub fn as_str(&self) -> &str {
        match self {
            AssetType::Certificate => "Certificate",
            AssetType::Product => "Product",
            AssetType::Land => "Land",
            AssetType::Vehicle => "Vehicle",
            AssetType::DigitalStamp => "DigitalStamp",
            AssetType::Other(name) => name,
        }
    }
}

impl From<&str> for AssetType {
    fn from(s: &str) -> Self {
        match s {
            "Certificate" => AssetType::Certificate,
            "Product" => AssetType::Product,
            "Land" => AssetType::Land,
            "Vehicle" => AssetType::Vehicle,
            "DigitalStamp" => AssetType::DigitalStamp,
            other => AssetType::Other(other.to_string()),
        }
    }
}

impl From<String> for AssetType {
    fn from(s: String) -> Self {
        match AssetType::from(s.as_str()) {
            AssetType::Other(_) => AssetType::Other(s),
            known => known,
        }
    }
}

impl From<AssetType> for String {
    fn from(asset_type: AssetType) -> Self {
        match asset_type {
            AssetType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered asset as reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Identifier, unique per owner
    pub asset_id: String,
    pub asset_type: AssetType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Only reported to the owner-facing dashboard
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_status: Option<bool>,
}

impl Asset {
    pub fn new(asset_type: impl Into<AssetType>, asset_id: impl Into<String>) -> Self {
        Self {
            asset_id: asset_id.into(),
            asset_type: asset_type.into(),
            asset_name: None,
            description: None,
            image_url: None,
            approval_status: None,
        }
    }

    /// Builder method: set the display name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.asset_name = Some(name.into());
        self
    }

    /// Builder method: set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder method: set the image URL
    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Builder method: set the approval flag
    pub fn approval_status(mut self, approved: bool) -> Self {
        self.approval_status = Some(approved);
        self
    }

    /// Name to show in lists, falling back to the id
    pub fn display_name(&self) -> &str {
        self.asset_name.as_deref().unwrap_or(&self.asset_id)
    }
}

/// Opaque owner identifier
///
/// Never parsed or validated; an empty account means nobody is signed in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Account(String);

impl Account {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Account {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Account {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_type_known_and_unknown() {
        assert_eq!(AssetType::from("Land"), AssetType::Land);
        assert_eq!(
            AssetType::from("Artwork"),
            AssetType::Other("Artwork".to_string())
        );
        assert_eq!(AssetType::Other("Artwork".to_string()).as_str(), "Artwork");
        assert_eq!(AssetType::DigitalStamp.to_string(), "DigitalStamp");
    }

    #[test]
    fn test_asset_deserializes_backend_record() {
        let json = r#"{
            "assetId": "1",
            "assetName": "Asset 1",
            "assetType": "Certificate",
            "description": "This is a description for Asset 1",
            "imageUrl": "https://via.placeholder.com/150",
            "owner": "0xA"
        }"#;

        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.asset_id, "1");
        assert_eq!(asset.asset_type, AssetType::Certificate);
        assert_eq!(asset.display_name(), "Asset 1");
        assert_eq!(asset.approval_status, None);
    }

    #[test]
    fn test_asset_minimal_record() {
        let asset: Asset =
            serde_json::from_str(r#"{"assetId": "7", "assetType": "Land", "approvalStatus": true}"#)
                .unwrap();
        assert_eq!(asset, Asset::new(AssetType::Land, "7").approval_status(true));
        assert_eq!(asset.display_name(), "7");
    }

    #[test]
    fn test_asset_serializes_camel_case_without_empty_fields() {
        let asset = Asset::new("Vehicle", "v-1").name("Truck");
        let value = serde_json::to_value(&asset).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"assetId": "v-1", "assetType": "Vehicle", "assetName": "Truck"})
        );
    }

    #[test]
    fn test_account_is_transparent() {
        let account = Account::from("0xA");
        assert_eq!(serde_json::to_string(&account).unwrap(), r#""0xA""#);
        assert!(!account.is_empty());
        assert!(Account::default().is_empty());
    }
}
