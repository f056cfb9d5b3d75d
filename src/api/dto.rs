//! Wire formats for the asset backend
//!
//! Every endpoint answers with a `{success, ..., error?}` envelope. The
//! envelopes are decoded here once so the native and browser clients share
//! the same success/failure rules.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{ApiResult, DashboardError};
use crate::models::{Account, Asset, AssetSubmission, AssetType};

/// Fallback when the backend says `success: false` without an `error`
const UNSPECIFIED_FAILURE: &str = "request was not successful";

/// Longest slice of an unreadable error body kept in a `Status` error
const MAX_ERROR_BODY: usize = 200;

/// Response of `GET /assets`
#[derive(Debug, Deserialize)]
pub struct AssetsEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub assets: Vec<Asset>,
    #[serde(default)]
    pub error: Option<String>,
}

impl AssetsEnvelope {
    pub fn into_result(self) -> ApiResult<Vec<Asset>> {
        if self.success {
            Ok(self.assets)
        } else {
            Err(rejected(self.error))
        }
    }
}

/// Response of `POST /add-asset`
#[derive(Debug, Deserialize)]
pub struct SubmitEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl SubmitEnvelope {
    pub fn into_result(self) -> ApiResult<()> {
        if self.success {
            Ok(())
        } else {
            Err(rejected(self.error))
        }
    }
}

/// Response of `GET /verify-asset`
#[derive(Debug, Deserialize)]
pub struct VerifyEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub asset: Option<Asset>,
    #[serde(default)]
    pub error: Option<String>,
}

impl VerifyEnvelope {
    pub fn into_result(self) -> ApiResult<Asset> {
        match (self.success, self.asset) {
            (true, Some(asset)) => Ok(asset),
            (true, None) => Err(DashboardError::Decode(
                "verification succeeded without an asset".to_string(),
            )),
            (false, _) => Err(rejected(self.error)),
        }
    }
}

fn rejected(error: Option<String>) -> DashboardError {
    DashboardError::Rejected(error.unwrap_or_else(|| UNSPECIFIED_FAILURE.to_string()))
}

/// Decode an envelope from a raw response
///
/// A non-2xx status whose body is still a valid envelope is judged by the
/// envelope's `success` flag, since the backend reports rejections that way.
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> ApiResult<T> {
    match serde_json::from_str(body) {
        Ok(envelope) => Ok(envelope),
        Err(_) if !(200..300).contains(&status) => Err(DashboardError::Status {
            status,
            message: body.chars().take(MAX_ERROR_BODY).collect(),
        }),
        Err(e) => Err(e.into()),
    }
}

/// JSON body of `POST /add-asset`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAssetRequest<'a> {
    pub asset_type: &'a AssetType,
    pub asset_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_name: Option<&'a str>,
    pub details: &'a BTreeMap<String, String>,
    pub owner_address: &'a str,
}

impl<'a> AddAssetRequest<'a> {
    pub fn new(owner: &'a Account, submission: &'a AssetSubmission) -> Self {
        Self {
            asset_type: &submission.asset_type,
            asset_id: &submission.asset_id,
            asset_name: submission.asset_name.as_deref(),
            details: &submission.details,
            owner_address: owner.as_str(),
        }
    }
}

/// Text fields of a multipart `POST /add-asset`, in wire order
///
/// The `image` part is appended separately by each client.
pub fn multipart_fields(
    owner: &Account,
    submission: &AssetSubmission,
) -> Vec<(&'static str, String)> {
    vec![
        ("ownerAddress", owner.to_string()),
        (
            "assetName",
            submission.asset_name.clone().unwrap_or_default(),
        ),
        ("assetType", submission.asset_type.to_string()),
        ("assetId", submission.asset_id.clone()),
        (
            "description",
            submission.description().unwrap_or_default().to_string(),
        ),
    ]
}
