//! HTTP API Client
//!
//! `AssetApi` implementation for the browser, built on `gloo-net`.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

use assetboard::api::dto::{
    decode_envelope, multipart_fields, AddAssetRequest, AssetsEnvelope, SubmitEnvelope,
    VerifyEnvelope,
};
use assetboard::api::{add_asset_url, assets_url, verify_asset_url, AssetApi, DEFAULT_API_BASE};
use assetboard::{Account, ApiResult, Asset, AssetSubmission, DashboardError, SubmissionEncoding};

const API_URL_KEY: &str = "assetboard_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());

    normalize_base(stored.as_deref())
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_KEY, url.trim());
        }
    }
}

fn normalize_base(stored: Option<&str>) -> String {
    match stored.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
        _ => DEFAULT_API_BASE.to_string(),
    }
}

/// Asset backend client for the browser
#[derive(Debug, Clone)]
pub struct GlooAssetApi {
    base_url: String,
}

impl GlooAssetApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Client for the URL saved in local storage
    pub fn from_storage() -> Self {
        Self::new(get_api_base())
    }

    async fn read_envelope<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let status = response.status();
        let body = response.text().await.map_err(network_error)?;
        decode_envelope(status, &body)
    }

    fn form_data(owner: &Account, submission: &AssetSubmission) -> ApiResult<FormData> {
        let form = FormData::new().map_err(js_error)?;
        for (name, value) in multipart_fields(owner, submission) {
            form.append_with_str(name, &value).map_err(js_error)?;
        }

        if let Some(image) = &submission.image {
            let bytes = js_sys::Uint8Array::from(image.bytes.as_slice());
            let mut options = BlobPropertyBag::new();
            options.type_(&image.content_type);
            let blob = Blob::new_with_u8_array_sequence_and_options(
                &js_sys::Array::of1(&bytes),
                &options,
            )
            .map_err(js_error)?;
            form.append_with_blob_and_filename("image", &blob, &image.file_name)
                .map_err(js_error)?;
        }

        Ok(form)
    }
}

fn network_error(err: gloo_net::Error) -> DashboardError {
    DashboardError::Network(err.to_string())
}

fn js_error(err: JsValue) -> DashboardError {
    DashboardError::Network(
        err.as_string()
            .unwrap_or_else(|| "browser rejected the request body".to_string()),
    )
}

#[async_trait(?Send)]
impl AssetApi for GlooAssetApi {
    async fn fetch_assets(&self, owner: &Account) -> ApiResult<Vec<Asset>> {
        let response = Request::get(&assets_url(&self.base_url, owner))
            .send()
            .await
            .map_err(network_error)?;

        Self::read_envelope::<AssetsEnvelope>(response)
            .await?
            .into_result()
    }

    async fn submit_asset(
        &self,
        owner: &Account,
        submission: &AssetSubmission,
        encoding: SubmissionEncoding,
    ) -> ApiResult<()> {
        let builder = Request::post(&add_asset_url(&self.base_url));
        let request = match encoding {
            SubmissionEncoding::Json => builder
                .json(&AddAssetRequest::new(owner, submission))
                .map_err(network_error)?,
            SubmissionEncoding::Multipart => builder
                .body(Self::form_data(owner, submission)?)
                .map_err(network_error)?,
        };

        let response = request.send().await.map_err(network_error)?;
        Self::read_envelope::<SubmitEnvelope>(response)
            .await?
            .into_result()
    }

    async fn verify_asset(&self, token_id: &str) -> ApiResult<Asset> {
        let response = Request::get(&verify_asset_url(&self.base_url, token_id))
            .send()
            .await
            .map_err(network_error)?;

        Self::read_envelope::<VerifyEnvelope>(response)
            .await?
            .into_result()
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use assetboard::ImageAttachment;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_form_data_fields_and_image() {
        let owner = Account::from("0xA");
        let submission = AssetSubmission::new("Land", "7")
            .name("Plot")
            .image(ImageAttachment::new("deed.png", vec![1, 2, 3]));

        let form = GlooAssetApi::form_data(&owner, &submission).unwrap();

        assert_eq!(form.get("ownerAddress").as_string().as_deref(), Some("0xA"));
        assert_eq!(form.get("assetType").as_string().as_deref(), Some("Land"));
        assert_eq!(form.get("assetId").as_string().as_deref(), Some("7"));
        assert_eq!(form.get("description").as_string().as_deref(), Some(""));

        let image = form.get("image").dyn_into::<Blob>().unwrap();
        assert_eq!(image.size(), 3.0);
        assert_eq!(image.type_(), "image/png");
    }

    #[wasm_bindgen_test]
    fn test_form_data_without_image() {
        let submission = AssetSubmission::new("Vehicle", "v-1");
        let form = GlooAssetApi::form_data(&Account::from("0xA"), &submission).unwrap();

        assert!(form.get("image").is_null());
    }
}
