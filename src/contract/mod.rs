//! Minting Contract Capability
//!
//! The owner dashboard can register an asset on-chain through a contract
//! supplied by the host environment. Only two steps are relied on: a `mint`
//! call that returns a pending transaction, and a `wait` on that transaction
//! that resolves once it is confirmed.

mod noop;

pub use noop::NoopContract;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::AssetType;

/// Placeholder metadata location used when none is configured
pub const DEFAULT_METADATA_URI: &str = "ipfs://YOUR_IPFS_URI";

/// A contract able to mint assets
#[async_trait(?Send)]
pub trait AssetContract {
    /// Submit a mint transaction
    async fn mint(
        &self,
        asset_type: &AssetType,
        asset_id: &str,
        metadata_uri: &str,
    ) -> Result<Box<dyn PendingMint>, ContractError>;
}

/// A submitted mint transaction awaiting confirmation
#[async_trait(?Send)]
pub trait PendingMint {
    fn transaction_hash(&self) -> &str;

    /// Resolve once the transaction is confirmed
    async fn wait(&self) -> Result<MintReceipt, ContractError>;
}

/// Confirmation of a mint transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MintReceipt {
    pub transaction_hash: String,
    pub asset_id: String,
    pub metadata_uri: String,
    pub confirmed_at: DateTime<Utc>,
}

/// Errors raised by a contract implementation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContractError {
    /// The call was refused before a transaction was created
    #[error("Mint rejected: {0}")]
    Rejected(String),

    /// The transaction was mined but failed
    #[error("Transaction reverted: {0}")]
    Reverted(String),

    /// The contract endpoint could not be reached
    #[error("Transport error: {0}")]
    Transport(String),
}
