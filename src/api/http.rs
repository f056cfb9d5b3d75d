//! Asset Backend REST Client
//!
//! Native HTTP client for the asset backend, built on `reqwest`.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::dto::{
    decode_envelope, multipart_fields, AddAssetRequest, AssetsEnvelope, SubmitEnvelope,
    VerifyEnvelope,
};
use super::{add_asset_url, assets_url, verify_asset_url, AssetApi};
use crate::config::ApiConfig;
use crate::error::ApiResult;
use crate::models::{Account, Asset, AssetSubmission, SubmissionEncoding};

/// Asset backend client over HTTP
pub struct HttpAssetApi {
    client: Client,
    base_url: String,
}

impl HttpAssetApi {
    /// Create a client for the given origin
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Create a client from the `[api]` config section
    pub fn from_config(config: &ApiConfig) -> ApiResult<Self> {
        Self::new(
            config.base_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn read_envelope<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        decode_envelope(status, &body)
    }

    fn multipart_form(owner: &Account, submission: &AssetSubmission) -> ApiResult<Form> {
        let mut form = Form::new();
        for (name, value) in multipart_fields(owner, submission) {
            form = form.text(name, value);
        }

        if let Some(image) = &submission.image {
            let part = Part::bytes(image.bytes.clone())
                .file_name(image.file_name.clone())
                .mime_str(&image.content_type)?;
            form = form.part("image", part);
        }

        Ok(form)
    }
}

#[async_trait(?Send)]
impl AssetApi for HttpAssetApi {
    async fn fetch_assets(&self, owner: &Account) -> ApiResult<Vec<Asset>> {
        let url = assets_url(&self.base_url, owner);
        tracing::debug!(%url, "Fetching assets");

        let response = self.client.get(&url).send().await?;
        let envelope: AssetsEnvelope = Self::read_envelope(response).await?;
        envelope.into_result()
    }

    async fn submit_asset(
        &self,
        owner: &Account,
        submission: &AssetSubmission,
        encoding: SubmissionEncoding,
    ) -> ApiResult<()> {
        let url = add_asset_url(&self.base_url);
        tracing::debug!(%url, asset_id = %submission.asset_id, ?encoding, "Submitting asset");

        let request = match encoding {
            SubmissionEncoding::Json => self
                .client
                .post(&url)
                .json(&AddAssetRequest::new(owner, submission)),
            SubmissionEncoding::Multipart => self
                .client
                .post(&url)
                .multipart(Self::multipart_form(owner, submission)?),
        };

        let response = request.send().await?;
        let envelope: SubmitEnvelope = Self::read_envelope(response).await?;
        envelope.into_result()
    }

    async fn verify_asset(&self, token_id: &str) -> ApiResult<Asset> {
        let url = verify_asset_url(&self.base_url, token_id);
        tracing::debug!(%url, "Verifying asset");

        let response = self.client.get(&url).send().await?;
        let envelope: VerifyEnvelope = Self::read_envelope(response).await?;
        envelope.into_result()
    }
}
