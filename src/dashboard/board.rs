//! Asset board
//!
//! Shared workflow behind both dashboards: fetch on mount and on account
//! change, submit then reload, verify, mint then reload. The board never
//! patches its list locally. After any accepted mutation it asks the server
//! for the whole list again and replaces what it shows.
//!
//! Handles are cheap clones over shared state and every operation takes
//! `&self`, so overlapping actions are neither queued nor cancelled. The list
//! ends up as whichever fetch resolved last.

use std::sync::{Arc, PoisonError, RwLock};

use super::messages;
use crate::api::AssetApi;
use crate::contract::{AssetContract, MintReceipt};
use crate::error::{ApiResult, DashboardError};
use crate::models::{Account, Asset, AssetSubmission, Notification, SubmissionEncoding};
use crate::notify::Notifier;

/// Asset list for one account, kept in sync with the backend
#[derive(Clone)]
pub struct AssetBoard {
    api: Arc<dyn AssetApi>,
    notifier: Arc<dyn Notifier>,
    encoding: SubmissionEncoding,
    account: Arc<RwLock<Account>>,
    assets: Arc<RwLock<Vec<Asset>>>,
}

impl AssetBoard {
    pub fn new(
        api: Arc<dyn AssetApi>,
        notifier: Arc<dyn Notifier>,
        account: Account,
        encoding: SubmissionEncoding,
    ) -> Self {
        Self {
            api,
            notifier,
            encoding,
            account: Arc::new(RwLock::new(account)),
            assets: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Active account
    pub fn account(&self) -> Account {
        self.account
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Assets from the last successful fetch
    pub fn assets(&self) -> Vec<Asset> {
        self.assets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn encoding(&self) -> SubmissionEncoding {
        self.encoding
    }

    /// Initial fetch for the active account
    ///
    /// Returns `true` when a fetch ran and succeeded. No fetch is issued
    /// without an account.
    pub async fn mount(&self) -> bool {
        let account = self.account();
        if account.is_empty() {
            tracing::debug!("No active account, skipping asset fetch");
            return false;
        }
        self.fetch_for(&account).await
    }

    /// Switch the active account, fetching when it actually changed
    pub async fn set_account(&self, account: Account) -> bool {
        {
            let mut current = self.account.write().unwrap_or_else(PoisonError::into_inner);
            if *current == account {
                return false;
            }
            *current = account.clone();
        }

        if account.is_empty() {
            return false;
        }
        self.fetch_for(&account).await
    }

    /// Reload the list for the active account
    pub async fn refresh(&self) -> bool {
        let account = self.account();
        self.fetch_for(&account).await
    }

    async fn fetch_for(&self, account: &Account) -> bool {
        match self.api.fetch_assets(account).await {
            Ok(assets) => {
                if self.account() != *account {
                    // Known race: a response for a superseded account still lands.
                    tracing::debug!(%account, "Applying asset list fetched for a previous account");
                }
                tracing::info!(%account, count = assets.len(), "Asset list refreshed");
                *self.assets.write().unwrap_or_else(PoisonError::into_inner) = assets;
                true
            }
            Err(e) => {
                tracing::error!(%account, error = %e, "Error fetching assets");
                self.notify_failure(messages::FETCH_FAILED, &e);
                false
            }
        }
    }

    /// Submit an asset for the active account and reload on success
    ///
    /// Returns `true` when the backend accepted the submission. A rejected
    /// submission issues no fetch and leaves the list alone.
    pub async fn submit(&self, submission: &AssetSubmission) -> bool {
        let account = self.account();

        match self
            .api
            .submit_asset(&account, submission, self.encoding)
            .await
        {
            Ok(()) => {
                tracing::info!(%account, asset_id = %submission.asset_id, "Asset submitted");
                self.notifier
                    .notify(Notification::success(messages::SUBMIT_SUCCEEDED));
                self.fetch_for(&account).await;
                true
            }
            Err(e) => {
                tracing::error!(
                    %account,
                    asset_id = %submission.asset_id,
                    error = %e,
                    "Error submitting asset"
                );
                self.notify_failure(messages::SUBMIT_FAILED, &e);
                false
            }
        }
    }

    /// Look up a token id
    ///
    /// Returns the verified asset, or `None` after raising an error notification.
    pub async fn verify(&self, token_id: &str) -> Option<Asset> {
        match self.api.verify_asset(token_id).await {
            Ok(asset) => {
                tracing::info!(token_id, asset_id = %asset.asset_id, "Asset verified");
                Some(asset)
            }
            Err(e) => {
                tracing::error!(token_id, error = %e, "Error verifying asset");
                self.notify_failure(messages::VERIFY_FAILED, &e);
                None
            }
        }
    }

    /// Mint an asset through `contract` and reload once confirmed
    ///
    /// A missing contract fails like any other mint error.
    pub async fn mint(
        &self,
        contract: Option<&dyn AssetContract>,
        asset: &Asset,
        metadata_uri: &str,
    ) -> bool {
        match Self::mint_and_wait(contract, asset, metadata_uri).await {
            Ok(receipt) => {
                tracing::info!(
                    asset_id = %asset.asset_id,
                    tx = %receipt.transaction_hash,
                    "Asset minted"
                );
                self.notifier
                    .notify(Notification::success(messages::MINT_SUCCEEDED));
                self.refresh().await;
                true
            }
            Err(e) => {
                tracing::error!(asset_id = %asset.asset_id, error = %e, "Error minting asset");
                self.notify_failure(messages::MINT_FAILED, &e);
                false
            }
        }
    }

    async fn mint_and_wait(
        contract: Option<&dyn AssetContract>,
        asset: &Asset,
        metadata_uri: &str,
    ) -> ApiResult<MintReceipt> {
        let contract = contract.ok_or(DashboardError::ContractUnavailable)?;
        let pending = contract
            .mint(&asset.asset_type, &asset.asset_id, metadata_uri)
            .await?;
        tracing::debug!(tx = pending.transaction_hash(), "Waiting for mint confirmation");
        Ok(pending.wait().await?)
    }

    fn notify_failure(&self, message: &str, error: &DashboardError) {
        self.notifier
            .notify(Notification::error(message).with_detail(error.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockAssetApi;
    use crate::contract::{NoopContract, DEFAULT_METADATA_URI};
    use crate::models::AssetType;
    use crate::notify::RecordingNotifier;
    use async_trait::async_trait;
    use tokio::sync::Notify;

    /// Holds fetches for one owner until released, delegating everything else
    struct HeldFetchApi {
        inner: MockAssetApi,
        held: Account,
        release: Notify,
    }

    #[async_trait(?Send)]
    impl AssetApi for HeldFetchApi {
        async fn fetch_assets(&self, owner: &Account) -> ApiResult<Vec<Asset>> {
            let assets = self.inner.fetch_assets(owner).await;
            if *owner == self.held {
                self.release.notified().await;
            }
            assets
        }

        async fn submit_asset(
            &self,
            owner: &Account,
            submission: &AssetSubmission,
            encoding: SubmissionEncoding,
        ) -> ApiResult<()> {
            self.inner.submit_asset(owner, submission, encoding).await
        }

        async fn verify_asset(&self, token_id: &str) -> ApiResult<Asset> {
            self.inner.verify_asset(token_id).await
        }
    }

    fn two_assets() -> Vec<Asset> {
        vec![
            Asset::new("Certificate", "1").name("Asset 1"),
            Asset::new("DigitalStamp", "2").name("Asset 2"),
        ]
    }

    fn make_board(api: &Arc<MockAssetApi>, account: &str) -> (AssetBoard, RecordingNotifier) {
        let notifier = RecordingNotifier::default();
        let board = AssetBoard::new(
            api.clone(),
            Arc::new(notifier.clone()),
            Account::from(account),
            SubmissionEncoding::Json,
        );
        (board, notifier)
    }

    #[tokio::test]
    async fn test_mount_reconstructs_server_list() {
        let api = Arc::new(MockAssetApi::new().with_assets("0xA", two_assets()));
        let (board, notifier) = make_board(&api, "0xA");

        assert!(board.mount().await);
        assert_eq!(board.assets(), two_assets());
        assert!(notifier.all().is_empty());
    }

    #[tokio::test]
    async fn test_mount_without_account_skips_fetch() {
        let api = Arc::new(MockAssetApi::new());
        let (board, _) = make_board(&api, "");

        assert!(!board.mount().await);
        assert_eq!(api.fetch_calls(), 0);
    }

    #[tokio::test]
    async fn test_fetch_replaces_wholesale() {
        let api = Arc::new(MockAssetApi::new().with_assets("0xA", two_assets()));
        let (board, _) = make_board(&api, "0xA");
        board.mount().await;

        let shrunk = vec![Asset::new("Land", "9")];
        api.replace_assets(&Account::from("0xA"), shrunk.clone());
        board.refresh().await;

        assert_eq!(board.assets(), shrunk);
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_list() {
        let api = Arc::new(MockAssetApi::new().with_assets("0xA", two_assets()));
        let (board, notifier) = make_board(&api, "0xA");
        board.mount().await;

        api.set_failure(Some("database down"));
        assert!(!board.refresh().await);

        assert_eq!(board.assets(), two_assets());
        assert_eq!(notifier.messages(), vec![messages::FETCH_FAILED]);
        assert_eq!(notifier.all()[0].detail.as_deref(), Some("Request rejected: database down"));
    }

    #[tokio::test]
    async fn test_set_account_fetches_only_on_change() {
        let api = Arc::new(
            MockAssetApi::new()
                .with_assets("0xA", two_assets())
                .with_assets("0xB", vec![Asset::new("Vehicle", "v")]),
        );
        let (board, _) = make_board(&api, "0xA");
        board.mount().await;

        assert!(!board.set_account(Account::from("0xA")).await);
        assert_eq!(api.fetch_calls(), 1);

        assert!(board.set_account(Account::from("0xB")).await);
        assert_eq!(api.fetch_calls(), 2);
        assert_eq!(board.account(), Account::from("0xB"));
        assert_eq!(board.assets()[0].asset_id, "v");
    }

    #[tokio::test]
    async fn test_late_fetch_for_previous_account_wins() {
        let b_assets = vec![Asset::new("Vehicle", "b-1")];
        let api = Arc::new(HeldFetchApi {
            inner: MockAssetApi::new()
                .with_assets("0xA", two_assets())
                .with_assets("0xB", b_assets.clone()),
            held: Account::from("0xA"),
            release: Notify::new(),
        });
        let board = AssetBoard::new(
            api.clone(),
            Arc::new(RecordingNotifier::default()),
            Account::from("0xA"),
            SubmissionEncoding::Json,
        );

        let switch = async {
            assert!(board.set_account(Account::from("0xB")).await);
            assert_eq!(board.assets(), b_assets);
            api.release.notify_one();
        };
        let (mounted, ()) = tokio::join!(board.mount(), switch);

        assert!(mounted);
        assert_eq!(board.account(), Account::from("0xB"));
        assert_eq!(board.assets(), two_assets());
    }

    #[tokio::test]
    async fn test_successful_submit_notifies_once_and_refetches() {
        let api = Arc::new(MockAssetApi::new().with_assets("0xA", two_assets()));
        let (board, notifier) = make_board(&api, "0xA");
        board.mount().await;

        assert!(board.submit(&AssetSubmission::new("Land", "7")).await);

        assert_eq!(notifier.successes(), 1);
        assert_eq!(notifier.errors(), 0);
        assert_eq!(api.fetch_calls(), 2);
        assert_eq!(board.assets().len(), 3);
        assert_eq!(board.assets()[2].asset_type, AssetType::Land);
    }

    #[tokio::test]
    async fn test_rejected_submit_notifies_once_without_fetch() {
        let api = Arc::new(
            MockAssetApi::new().with_assets("0xA", vec![Asset::new("Land", "7")]),
        );
        let (board, notifier) = make_board(&api, "0xA");
        board.mount().await;

        assert!(!board.submit(&AssetSubmission::new("Land", "7")).await);

        assert_eq!(notifier.messages(), vec![messages::SUBMIT_FAILED]);
        assert_eq!(notifier.all()[0].detail.as_deref(), Some("Request rejected: duplicate id"));
        assert_eq!(api.fetch_calls(), 1);
        assert_eq!(board.assets(), vec![Asset::new("Land", "7")]);
    }

    #[tokio::test]
    async fn test_submit_uses_board_encoding() {
        let api = Arc::new(MockAssetApi::new());
        let board = AssetBoard::new(
            api.clone(),
            Arc::new(RecordingNotifier::default()),
            Account::from("0xA"),
            SubmissionEncoding::Multipart,
        );

        board.submit(&AssetSubmission::new("Product", "p")).await;
        assert_eq!(api.submissions()[0].encoding, SubmissionEncoding::Multipart);
    }

    #[tokio::test]
    async fn test_overlapping_submissions_both_land() {
        let api = Arc::new(MockAssetApi::new());
        let (board, notifier) = make_board(&api, "0xA");

        let first = AssetSubmission::new("Land", "1");
        let second = AssetSubmission::new("Vehicle", "2");
        let other = board.clone();
        let (a, b) = tokio::join!(board.submit(&first), other.submit(&second));

        assert!(a && b);
        assert_eq!(notifier.successes(), 2);
        assert_eq!(board.assets().len(), 2);
    }

    #[tokio::test]
    async fn test_verify() {
        let api = Arc::new(MockAssetApi::new().with_token("42", Asset::new("Land", "42")));
        let (board, notifier) = make_board(&api, "0xA");

        assert_eq!(board.verify("42").await.map(|a| a.asset_id), Some("42".to_string()));
        assert!(board.verify("unknown").await.is_none());
        assert_eq!(notifier.messages(), vec![messages::VERIFY_FAILED]);
    }

    #[tokio::test]
    async fn test_mint_confirms_and_refetches() {
        let api = Arc::new(MockAssetApi::new().with_assets("0xA", two_assets()));
        let (board, notifier) = make_board(&api, "0xA");
        let contract = NoopContract::new();

        let assets = two_assets();
        assert!(board.mint(Some(&contract), &assets[0], DEFAULT_METADATA_URI).await);

        assert_eq!(notifier.messages(), vec![messages::MINT_SUCCEEDED]);
        assert_eq!(api.fetch_calls(), 1);
        assert_eq!(contract.minted()[0].asset_id, "1");
    }

    #[tokio::test]
    async fn test_mint_without_contract_fails() {
        let api = Arc::new(MockAssetApi::new());
        let (board, notifier) = make_board(&api, "0xA");

        assert!(!board.mint(None, &Asset::new("Land", "7"), DEFAULT_METADATA_URI).await);

        assert_eq!(notifier.messages(), vec![messages::MINT_FAILED]);
        assert_eq!(api.fetch_calls(), 0);
    }

    #[tokio::test]
    async fn test_mint_reverted_fails() {
        let api = Arc::new(MockAssetApi::new());
        let (board, notifier) = make_board(&api, "0xA");
        let contract = NoopContract::reverting("out of gas");

        assert!(!board.mint(Some(&contract), &Asset::new("Land", "7"), DEFAULT_METADATA_URI).await);

        assert_eq!(notifier.errors(), 1);
        assert_eq!(api.fetch_calls(), 0);
    }
}
