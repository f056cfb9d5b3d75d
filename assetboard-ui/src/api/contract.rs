//! Host Contract
//!
//! Minting through a contract object the host page places on `window`.
//! The object needs a `mintAsset(assetType, assetId, metadataUri)` method
//! returning a transaction (or a promise of one) whose `wait()` resolves once
//! it is confirmed, the shape an ethers.js contract has.

use async_trait::async_trait;
use chrono::Utc;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use assetboard::{AssetContract, AssetType, ContractError, MintReceipt, PendingMint};

/// Window property holding the host contract
pub const CONTRACT_PROPERTY: &str = "assetContract";

/// A contract object owned by the host page
#[derive(Debug, Clone)]
pub struct HostContract {
    object: JsValue,
}

impl HostContract {
    pub fn new(object: JsValue) -> Self {
        Self { object }
    }

    /// Contract published on `window`, if the host set one
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let object = Reflect::get(&window, &JsValue::from_str(CONTRACT_PROPERTY)).ok()?;
        if object.is_undefined() || object.is_null() {
            return None;
        }
        Some(Self::new(object))
    }
}

struct HostPendingMint {
    transaction: JsValue,
    transaction_hash: String,
    asset_id: String,
    metadata_uri: String,
}

#[async_trait(?Send)]
impl PendingMint for HostPendingMint {
    fn transaction_hash(&self) -> &str {
        &self.transaction_hash
    }

    async fn wait(&self) -> Result<MintReceipt, ContractError> {
        let wait = method(&self.transaction, "wait").map_err(ContractError::Reverted)?;
        let confirmation = wait
            .call0(&self.transaction)
            .map_err(|err| ContractError::Reverted(js_message(&err)))?;
        let receipt = resolve(confirmation)
            .await
            .map_err(|err| ContractError::Reverted(js_message(&err)))?;

        let transaction_hash = string_property(&receipt, "transactionHash")
            .or_else(|| string_property(&receipt, "hash"))
            .unwrap_or_else(|| self.transaction_hash.clone());

        Ok(MintReceipt {
            transaction_hash,
            asset_id: self.asset_id.clone(),
            metadata_uri: self.metadata_uri.clone(),
            confirmed_at: Utc::now(),
        })
    }
}

#[async_trait(?Send)]
impl AssetContract for HostContract {
    async fn mint(
        &self,
        asset_type: &AssetType,
        asset_id: &str,
        metadata_uri: &str,
    ) -> Result<Box<dyn PendingMint>, ContractError> {
        let mint = method(&self.object, "mintAsset").map_err(ContractError::Rejected)?;
        let submitted = mint
            .call3(
                &self.object,
                &JsValue::from_str(asset_type.as_str()),
                &JsValue::from_str(asset_id),
                &JsValue::from_str(metadata_uri),
            )
            .map_err(|err| ContractError::Rejected(js_message(&err)))?;
        let transaction = resolve(submitted)
            .await
            .map_err(|err| ContractError::Rejected(js_message(&err)))?;

        Ok(Box::new(HostPendingMint {
            transaction_hash: string_property(&transaction, "hash").unwrap_or_default(),
            transaction,
            asset_id: asset_id.to_string(),
            metadata_uri: metadata_uri.to_string(),
        }))
    }
}

fn method(object: &JsValue, name: &str) -> Result<Function, String> {
    Reflect::get(object, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
        .ok_or_else(|| format!("contract object has no {} method", name))
}

/// Await `value` if it is a promise, otherwise take it as is
async fn resolve(value: JsValue) -> Result<JsValue, JsValue> {
    JsFuture::from(Promise::resolve(&value)).await
}

fn string_property(object: &JsValue, name: &str) -> Option<String> {
    Reflect::get(object, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.as_string())
}

fn js_message(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| string_property(err, "message"))
        .unwrap_or_else(|| format!("{:?}", err))
}
