//! User dashboard
//!
//! Asset cards, an add/details modal submitting multipart forms with an
//! optional image, and a verification modal looking up token ids.

use std::sync::{Arc, PoisonError, RwLock};

use super::AssetBoard;
use crate::api::AssetApi;
use crate::modal::{AssetModal, VerifyModal};
use crate::models::{Account, Asset, AssetSubmission, SubmissionEncoding};
use crate::notify::Notifier;

#[derive(Clone)]
pub struct UserDashboard {
    board: AssetBoard,
    add_modal: Arc<RwLock<AssetModal>>,
    verify_modal: Arc<RwLock<VerifyModal>>,
}

impl UserDashboard {
    pub fn new(api: Arc<dyn AssetApi>, notifier: Arc<dyn Notifier>, account: Account) -> Self {
        Self {
            board: AssetBoard::new(api, notifier, account, SubmissionEncoding::Multipart),
            add_modal: Arc::new(RwLock::new(AssetModal::default())),
            verify_modal: Arc::new(RwLock::new(VerifyModal::default())),
        }
    }

    pub fn board(&self) -> &AssetBoard {
        &self.board
    }

    pub fn assets(&self) -> Vec<Asset> {
        self.board.assets()
    }

    pub async fn mount(&self) -> bool {
        self.board.mount().await
    }

    pub async fn set_account(&self, account: Account) -> bool {
        self.board.set_account(account).await
    }

    pub fn add_modal(&self) -> AssetModal {
        self.add_modal
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn verify_modal(&self) -> VerifyModal {
        self.verify_modal
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn open_add_modal(&self) {
        self.with_add_modal(AssetModal::open_add);
    }

    /// Open the modal on a card's details
    pub fn view_asset_details(&self, asset: Asset) {
        self.with_add_modal(|modal| modal.select(asset));
    }

    pub fn close_add_modal(&self) {
        self.with_add_modal(AssetModal::close);
    }

    /// Submit the add form
    ///
    /// The modal closes only when the backend accepted the asset, so a
    /// rejected form stays on screen for correction.
    pub async fn submit(&self, submission: &AssetSubmission) -> bool {
        let accepted = self.board.submit(submission).await;
        if accepted {
            self.close_add_modal();
        }
        accepted
    }

    pub fn open_verify_modal(&self) {
        self.with_verify_modal(VerifyModal::open);
    }

    pub fn set_verify_token(&self, token: impl Into<String>) {
        let token = token.into();
        self.with_verify_modal(|modal| modal.set_token(token));
    }

    pub fn close_verify_modal(&self) {
        self.with_verify_modal(VerifyModal::close);
    }

    /// Verify the token currently typed into the verification modal
    ///
    /// On failure the previously verified asset, if any, stays displayed.
    pub async fn verify(&self) -> Option<Asset> {
        let token = self.verify_modal().token().to_string();
        let asset = self.board.verify(&token).await?;
        self.with_verify_modal(|modal| modal.set_verified(asset.clone()));
        Some(asset)
    }

    pub fn verified_asset(&self) -> Option<Asset> {
        self.verify_modal().verified_asset().cloned()
    }

    fn with_add_modal(&self, f: impl FnOnce(&mut AssetModal)) {
        f(&mut self.add_modal.write().unwrap_or_else(PoisonError::into_inner));
    }

    fn with_verify_modal(&self, f: impl FnOnce(&mut VerifyModal)) {
        f(&mut self.verify_modal.write().unwrap_or_else(PoisonError::into_inner));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockAssetApi;
    use crate::dashboard::messages;
    use crate::models::ImageAttachment;
    use crate::notify::RecordingNotifier;

    fn dashboard(api: &Arc<MockAssetApi>) -> (UserDashboard, RecordingNotifier) {
        let notifier = RecordingNotifier::default();
        let view = UserDashboard::new(api.clone(), Arc::new(notifier.clone()), "dummyAccount".into());
        (view, notifier)
    }

    #[tokio::test]
    async fn test_submit_closes_modal_and_uploads_multipart() {
        let api = Arc::new(MockAssetApi::new());
        let (view, notifier) = dashboard(&api);
        view.open_add_modal();

        let submission = AssetSubmission::new("Certificate", "c-1")
            .name("Diploma")
            .with_description("BSc")
            .image(ImageAttachment::new("diploma.png", vec![0x89, 0x50]));
        assert!(view.submit(&submission).await);

        assert!(!view.add_modal().is_open());
        assert_eq!(notifier.messages(), vec![messages::SUBMIT_SUCCEEDED]);
        assert_eq!(api.submissions()[0].encoding, SubmissionEncoding::Multipart);
        assert_eq!(view.assets()[0].asset_id, "c-1");
    }

    #[tokio::test]
    async fn test_duplicate_submit_keeps_modal_open() {
        let api = Arc::new(
            MockAssetApi::new().with_assets("dummyAccount", vec![Asset::new("Land", "7")]),
        );
        let (view, notifier) = dashboard(&api);
        view.mount().await;
        view.open_add_modal();

        assert!(!view.submit(&AssetSubmission::new("Land", "7")).await);

        assert!(view.add_modal().shows_add_form());
        assert_eq!(notifier.messages(), vec![messages::SUBMIT_FAILED]);
        assert_eq!(view.assets(), vec![Asset::new("Land", "7")]);
    }

    #[tokio::test]
    async fn test_failed_submit_and_refetch_leave_add_modal_untouched() {
        let api = Arc::new(MockAssetApi::new());
        let (view, _) = dashboard(&api);
        view.open_add_modal();
        let before = view.add_modal();

        api.set_failure(Some("backend down"));
        assert!(!view.submit(&AssetSubmission::new("Land", "7").name("Plot")).await);
        assert_eq!(view.add_modal(), before);

        api.set_failure(None);
        assert!(view.board().refresh().await);
        assert_eq!(view.add_modal(), before);
        assert!(view.add_modal().shows_add_form());
    }

    #[tokio::test]
    async fn test_details_then_close() {
        let api = Arc::new(MockAssetApi::new());
        let (view, _) = dashboard(&api);
        let deed = Asset::new("Land", "7").name("Deed");

        view.view_asset_details(deed.clone());
        assert_eq!(view.add_modal().selected_asset(), Some(&deed));

        view.close_add_modal();
        assert!(view.add_modal().selected_asset().is_none());
        assert!(!view.add_modal().is_open());
    }

    #[tokio::test]
    async fn test_verify_known_token() {
        let api = Arc::new(MockAssetApi::new().with_token("42", Asset::new("Vehicle", "42")));
        let (view, notifier) = dashboard(&api);

        view.open_verify_modal();
        view.set_verify_token("42");
        let asset = view.verify().await.unwrap();

        assert_eq!(asset.asset_id, "42");
        assert_eq!(view.verified_asset(), Some(asset));
        assert!(notifier.all().is_empty());
    }

    #[tokio::test]
    async fn test_verify_unknown_token_keeps_previous_result() {
        let api = Arc::new(MockAssetApi::new().with_token("42", Asset::new("Vehicle", "42")));
        let (view, notifier) = dashboard(&api);
        view.open_verify_modal();
        view.set_verify_token("42");
        view.verify().await;

        view.set_verify_token("does-not-exist");
        assert!(view.verify().await.is_none());

        assert_eq!(view.verified_asset().map(|a| a.asset_id), Some("42".to_string()));
        assert_eq!(notifier.messages(), vec![messages::VERIFY_FAILED]);
    }

    #[tokio::test]
    async fn test_close_verify_modal_resets() {
        let api = Arc::new(MockAssetApi::new().with_token("42", Asset::new("Vehicle", "42")));
        let (view, _) = dashboard(&api);
        view.open_verify_modal();
        view.set_verify_token("42");
        view.verify().await;

        view.close_verify_modal();
        assert!(!view.verify_modal().is_open());
        assert!(view.verified_asset().is_none());
        assert_eq!(view.verify_modal().token(), "");
    }
}
