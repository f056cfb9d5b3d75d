//! # Assetboard
//!
//! Client core for registering and browsing ownership-bound digital assets
//! (certificates, products, land, vehicles, and other categories) against a
//! REST backend, with optional on-chain minting through a contract supplied
//! by the host.
//!
//! ## Modules
//!
//! - [`models`]: Assets, accounts, submissions and notifications
//! - [`api`]: The [`AssetApi`] capability with HTTP and in-memory backends
//! - [`contract`]: The minting capability
//! - [`notify`]: Notification delivery to the mounting root
//! - [`modal`]: Add/details and verification modal state
//! - [`dashboard`]: The owner and user dashboard workflows
//! - [`config`]: TOML and environment configuration (native only)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use assetboard::{Account, HttpAssetApi, NotificationSlot, OwnerDashboard, NoopContract};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = HttpAssetApi::new("http://localhost:3001", std::time::Duration::from_secs(30))?;
//!     let slot = NotificationSlot::new();
//!
//!     let dashboard = OwnerDashboard::new(
//!         Arc::new(api),
//!         Arc::new(slot.clone()),
//!         Account::from("0xYourEthereumAccount"),
//!         Some(Arc::new(NoopContract::new())),
//!     );
//!     dashboard.mount().await;
//!
//!     for asset in dashboard.assets() {
//!         println!("{} {}", asset.asset_id, asset.display_name());
//!     }
//!     if let Some(notification) = slot.current() {
//!         println!("{}", notification.message);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
#[cfg(feature = "native")]
pub mod config;
pub mod contract;
pub mod dashboard;
pub mod error;
pub mod modal;
pub mod models;
pub mod notify;

pub use api::{AssetApi, MockAssetApi};

#[cfg(feature = "native")]
pub use api::HttpAssetApi;

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoadedConfig};

pub use contract::{AssetContract, ContractError, MintReceipt, NoopContract, PendingMint};

pub use dashboard::{AssetBoard, OwnerDashboard, UserDashboard};

pub use error::{ApiResult, DashboardError};

pub use modal::{AssetModal, VerifyModal};

pub use models::{
    Account, Asset, AssetSubmission, AssetType, ImageAttachment, Notification, NotificationKind,
    SubmissionEncoding,
};

pub use notify::{NotificationSlot, Notifier};
