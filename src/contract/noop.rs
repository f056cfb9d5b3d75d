//! No-op contract for environments without a live chain.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, PoisonError, RwLock};
use uuid::Uuid;

use super::{AssetContract, ContractError, MintReceipt, PendingMint};
use crate::models::AssetType;

/// A contract that confirms every mint immediately.
///
/// Transaction hashes are random. A receipt is kept once its transaction has
/// been waited on, so callers can see what was minted. A contract built with [`NoopContract::reverting`]
/// accepts the call but fails every confirmation instead.
#[derive(Debug, Default)]
pub struct NoopContract {
    revert_reason: Option<String>,
    minted: Arc<RwLock<Vec<MintReceipt>>>,
}

impl NoopContract {
    pub fn new() -> Self {
        Self::default()
    }

    /// A contract whose transactions always revert with `reason`
    pub fn reverting(reason: impl Into<String>) -> Self {
        Self {
            revert_reason: Some(reason.into()),
            minted: Arc::default(),
        }
    }

    /// Receipts of every confirmed mint, in confirmation order
    pub fn minted(&self) -> Vec<MintReceipt> {
        self.minted
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

struct NoopPendingMint {
    receipt: MintReceipt,
    revert_reason: Option<String>,
    minted: Arc<RwLock<Vec<MintReceipt>>>,
}

#[async_trait(?Send)]
impl PendingMint for NoopPendingMint {
    fn transaction_hash(&self) -> &str {
        &self.receipt.transaction_hash
    }

    async fn wait(&self) -> Result<MintReceipt, ContractError> {
        match &self.revert_reason {
            Some(reason) => Err(ContractError::Reverted(reason.clone())),
            None => {
                let receipt = MintReceipt {
                    confirmed_at: Utc::now(),
                    ..self.receipt.clone()
                };
                self.minted
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(receipt.clone());
                Ok(receipt)
            }
        }
    }
}

#[async_trait(?Send)]
impl AssetContract for NoopContract {
    async fn mint(
        &self,
        asset_type: &AssetType,
        asset_id: &str,
        metadata_uri: &str,
    ) -> Result<Box<dyn PendingMint>, ContractError> {
        let receipt = MintReceipt {
            transaction_hash: format!("0x{}", Uuid::new_v4().simple()),
            asset_id: asset_id.to_string(),
            metadata_uri: metadata_uri.to_string(),
            confirmed_at: Utc::now(),
        };

        tracing::debug!(
            %asset_type,
            asset_id,
            tx = %receipt.transaction_hash,
            "No-op mint submitted"
        );

        Ok(Box::new(NoopPendingMint {
            receipt,
            revert_reason: self.revert_reason.clone(),
            minted: self.minted.clone(),
        }))
    }
}
