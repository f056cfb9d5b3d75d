//! Owner dashboard
//!
//! Lists the owner's assets with their approval status, offers one JSON
//! submission form per category, and mints listed assets through the
//! contract handed in by the host.

use std::sync::Arc;

use super::AssetBoard;
use crate::api::AssetApi;
use crate::contract::{AssetContract, DEFAULT_METADATA_URI};
use crate::models::{Account, Asset, AssetSubmission, AssetType, SubmissionEncoding};
use crate::notify::Notifier;

#[derive(Clone)]
pub struct OwnerDashboard {
    board: AssetBoard,
    contract: Option<Arc<dyn AssetContract>>,
    metadata_uri: String,
}

impl OwnerDashboard {
    pub fn new(
        api: Arc<dyn AssetApi>,
        notifier: Arc<dyn Notifier>,
        account: Account,
        contract: Option<Arc<dyn AssetContract>>,
    ) -> Self {
        Self {
            board: AssetBoard::new(api, notifier, account, SubmissionEncoding::Json),
            contract,
            metadata_uri: DEFAULT_METADATA_URI.to_string(),
        }
    }

    /// Builder method: metadata URI passed to every mint
    pub fn with_metadata_uri(mut self, uri: impl Into<String>) -> Self {
        self.metadata_uri = uri.into();
        self
    }

    pub fn board(&self) -> &AssetBoard {
        &self.board
    }

    pub fn assets(&self) -> Vec<Asset> {
        self.board.assets()
    }

    /// Categories that get their own submission form
    pub fn form_types(&self) -> &'static [AssetType] {
        AssetType::form_types()
    }

    pub fn has_contract(&self) -> bool {
        self.contract.is_some()
    }

    pub async fn mount(&self) -> bool {
        self.board.mount().await
    }

    pub async fn set_account(&self, account: Account) -> bool {
        self.board.set_account(account).await
    }

    pub async fn submit(&self, submission: &AssetSubmission) -> bool {
        self.board.submit(submission).await
    }

    pub async fn mint(&self, asset: &Asset) -> bool {
        self.board
            .mint(self.contract.as_deref(), asset, &self.metadata_uri)
            .await
    }
}
