//! In-memory asset backend for tests and offline use.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

use super::AssetApi;
use crate::error::{ApiResult, DashboardError};
use crate::models::{Account, Asset, AssetSubmission, SubmissionEncoding};

/// A submission as the mock backend received it
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedSubmission {
    pub owner: Account,
    pub submission: AssetSubmission,
    pub encoding: SubmissionEncoding,
}

/// A mock asset backend keeping assets per owner in memory.
///
/// Accepted submissions are appended to the owner's list, so a refresh
/// after a submit sees the new asset. Duplicate ids per owner are rejected
/// with `"duplicate id"`. A forced failure, when set, rejects every call.
#[derive(Debug, Default)]
pub struct MockAssetApi {
    assets: RwLock<HashMap<Account, Vec<Asset>>>,
    tokens: RwLock<HashMap<String, Asset>>,
    failure: RwLock<Option<String>>,
    submissions: RwLock<Vec<RecordedSubmission>>,
    fetch_calls: AtomicUsize,
    submit_calls: AtomicUsize,
    verify_calls: AtomicUsize,
}

impl MockAssetApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: seed an owner's asset list
    pub fn with_assets(self, owner: impl Into<Account>, assets: Vec<Asset>) -> Self {
        self.assets
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(owner.into(), assets);
        self
    }

    /// Builder method: make a token id verifiable
    pub fn with_token(self, token_id: impl Into<String>, asset: Asset) -> Self {
        self.tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token_id.into(), asset);
        self
    }

    /// Reject every call with `message` until cleared with `None`
    pub fn set_failure(&self, message: Option<&str>) {
        *self.failure.write().unwrap_or_else(PoisonError::into_inner) =
            message.map(str::to_string);
    }

    /// Replace an owner's asset list behind the dashboard's back
    pub fn replace_assets(&self, owner: &Account, assets: Vec<Asset>) {
        self.assets
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(owner.clone(), assets);
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn submit_calls(&self) -> usize {
        self.submit_calls.load(Ordering::SeqCst)
    }

    pub fn verify_calls(&self) -> usize {
        self.verify_calls.load(Ordering::SeqCst)
    }

    /// Every submission received, accepted or not
    pub fn submissions(&self) -> Vec<RecordedSubmission> {
        self.submissions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn check_failure(&self) -> ApiResult<()> {
        match self
            .failure
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            Some(message) => Err(DashboardError::Rejected(message.clone())),
            None => Ok(()),
        }
    }
}

fn asset_from_submission(submission: &AssetSubmission) -> Asset {
    Asset {
        asset_id: submission.asset_id.clone(),
        asset_type: submission.asset_type.clone(),
        asset_name: submission.asset_name.clone(),
        description: submission.description().map(str::to_string),
        image_url: submission
            .image
            .as_ref()
            .map(|image| format!("mock://images/{}", image.file_name)),
        approval_status: Some(false),
    }
}

#[async_trait(?Send)]
impl AssetApi for MockAssetApi {
    async fn fetch_assets(&self, owner: &Account) -> ApiResult<Vec<Asset>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;

        Ok(self
            .assets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(owner)
            .cloned()
            .unwrap_or_default())
    }

    async fn submit_asset(
        &self,
        owner: &Account,
        submission: &AssetSubmission,
        encoding: SubmissionEncoding,
    ) -> ApiResult<()> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        self.submissions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedSubmission {
                owner: owner.clone(),
                submission: submission.clone(),
                encoding,
            });
        self.check_failure()?;

        let mut assets = self.assets.write().unwrap_or_else(PoisonError::into_inner);
        let owned = assets.entry(owner.clone()).or_default();
        if owned.iter().any(|a| a.asset_id == submission.asset_id) {
            return Err(DashboardError::Rejected("duplicate id".to_string()));
        }
        owned.push(asset_from_submission(submission));

        Ok(())
    }

    async fn verify_asset(&self, token_id: &str) -> ApiResult<Asset> {
        self.verify_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;

        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token_id)
            .cloned()
            .ok_or_else(|| DashboardError::Rejected("asset not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AssetType;

    #[tokio::test]
    async fn test_submit_then_fetch() {
        let api = MockAssetApi::new();
        let owner = Account::from("0xA");

        api.submit_asset(
            &owner,
            &AssetSubmission::new("Land", "7").name("Plot"),
            SubmissionEncoding::Json,
        )
        .await
        .unwrap();

        let assets = api.fetch_assets(&owner).await.unwrap();
        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].asset_type, AssetType::Land);
        assert_eq!(assets[0].display_name(), "Plot");
        assert_eq!(api.submit_calls(), 1);
        assert_eq!(api.fetch_calls(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let owner = Account::from("0xA");
        let api = MockAssetApi::new().with_assets("0xA", vec![Asset::new("Land", "7")]);

        let err = api
            .submit_asset(&owner, &AssetSubmission::new("Land", "7"), SubmissionEncoding::Json)
            .await
            .unwrap_err();

        assert_eq!(err.server_message(), Some("duplicate id"));
        assert_eq!(api.submissions().len(), 1);
    }

    #[tokio::test]
    async fn test_forced_failure() {
        let api = MockAssetApi::new().with_token("42", Asset::new("Vehicle", "42"));
        api.set_failure(Some("maintenance"));

        assert!(api.fetch_assets(&Account::from("0xA")).await.is_err());
        assert!(api.verify_asset("42").await.is_err());

        api.set_failure(None);
        assert_eq!(api.verify_asset("42").await.unwrap().asset_id, "42");
        assert_eq!(api.verify_calls(), 2);
    }
}
