//! Asset Backend API
//!
//! The dashboards talk to the backend through the [`AssetApi`] capability so
//! the same workflow runs against the native `reqwest` client, the browser
//! client in the UI crate, or the in-memory [`MockAssetApi`].
//!
//! # Endpoints
//!
//! - `GET /assets?ownerAddress=<account>` - List an owner's assets
//! - `POST /add-asset` - Register an asset (JSON or multipart body)
//! - `GET /verify-asset?tokenId=<id>` - Look up an asset by token id

pub mod dto;
#[cfg(feature = "native")]
mod http;
mod mock;

#[cfg(feature = "native")]
pub use http::HttpAssetApi;
pub use mock::MockAssetApi;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{Account, Asset, AssetSubmission, SubmissionEncoding};

/// Default backend origin
pub const DEFAULT_API_BASE: &str = "http://localhost:3001";

/// Operations the dashboards need from the asset backend
///
/// Futures are not required to be `Send`; in the browser they run on the
/// single-threaded event loop.
#[async_trait(?Send)]
pub trait AssetApi {
    /// Current asset set for an owner, in server order
    async fn fetch_assets(&self, owner: &Account) -> ApiResult<Vec<Asset>>;

    /// Register a new asset for an owner
    async fn submit_asset(
        &self,
        owner: &Account,
        submission: &AssetSubmission,
        encoding: SubmissionEncoding,
    ) -> ApiResult<()>;

    /// Verification detail for a token id
    async fn verify_asset(&self, token_id: &str) -> ApiResult<Asset>;
}

/// `GET /assets` URL for an owner
pub fn assets_url(base: &str, owner: &Account) -> String {
    format!(
        "{}/assets?ownerAddress={}",
        normalize_base(base),
        urlencoding::encode(owner.as_str())
    )
}

/// `POST /add-asset` URL
pub fn add_asset_url(base: &str) -> String {
    format!("{}/add-asset", normalize_base(base))
}

/// `GET /verify-asset` URL for a token id
pub fn verify_asset_url(base: &str, token_id: &str) -> String {
    format!(
        "{}/verify-asset?tokenId={}",
        normalize_base(base),
        urlencoding::encode(token_id)
    )
}

fn normalize_base(base: &str) -> &str {
    base.trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let owner = Account::from("0xA");
        assert_eq!(
            assets_url("http://localhost:3001/", &owner),
            "http://localhost:3001/assets?ownerAddress=0xA"
        );
        assert_eq!(
            add_asset_url(DEFAULT_API_BASE),
            "http://localhost:3001/add-asset"
        );
        assert_eq!(
            verify_asset_url(DEFAULT_API_BASE, "42"),
            "http://localhost:3001/verify-asset?tokenId=42"
        );
    }

    #[test]
    fn test_query_values_are_encoded() {
        let owner = Account::from("a b&c");
        assert_eq!(
            assets_url(DEFAULT_API_BASE, &owner),
            "http://localhost:3001/assets?ownerAddress=a%20b%26c"
        );
        assert_eq!(
            verify_asset_url(DEFAULT_API_BASE, "id/1"),
            "http://localhost:3001/verify-asset?tokenId=id%2F1"
        );
    }
}
