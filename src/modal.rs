//! Modal state machines
//!
//! The user dashboard has two independent overlays. The asset modal shows
//! either the add form or the details of a selected asset; the verification
//! modal holds a token field and the last verified asset.

use crate::models::Asset;

/// State of the add/details modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AssetModal {
    #[default]
    Closed,
    OpenForAdd,
    OpenWithDetails(Asset),
}

impl AssetModal {
    /// Open the add form. Showing details already counts as open and is left as is.
    pub fn open_add(&mut self) {
        if *self == AssetModal::Closed {
            *self = AssetModal::OpenForAdd;
        }
    }

    /// Select an asset card, opening the modal on its details
    pub fn select(&mut self, asset: Asset) {
        *self = AssetModal::OpenWithDetails(asset);
    }

    /// Close from any state, dropping the selection
    pub fn close(&mut self) {
        *self = AssetModal::Closed;
    }

    pub fn is_open(&self) -> bool {
        *self != AssetModal::Closed
    }

    pub fn shows_add_form(&self) -> bool {
        *self == AssetModal::OpenForAdd
    }

    pub fn selected_asset(&self) -> Option<&Asset> {
        match self {
            AssetModal::OpenWithDetails(asset) => Some(asset),
            _ => None,
        }
    }
}

/// State of the verification modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyModal {
    open: bool,
    token: String,
    verified: Option<Asset>,
}

impl VerifyModal {
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close and forget the token and any verified asset
    pub fn close(&mut self) {
        *self = VerifyModal::default();
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = token.into();
    }

    pub fn set_verified(&mut self, asset: Asset) {
        self.verified = Some(asset);
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn verified_asset(&self) -> Option<&Asset> {
        self.verified.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deed() -> Asset {
        Asset::new("Land", "7").name("Deed")
    }

    #[test]
    fn test_add_flow() {
        let mut modal = AssetModal::default();
        assert!(!modal.is_open());

        modal.open_add();
        assert!(modal.is_open());
        assert!(modal.shows_add_form());
        assert!(modal.selected_asset().is_none());

        modal.close();
        assert_eq!(modal, AssetModal::Closed);
    }

    #[test]
    fn test_select_opens_details() {
        let mut modal = AssetModal::default();
        modal.select(deed());

        assert!(modal.is_open());
        assert!(!modal.shows_add_form());
        assert_eq!(modal.selected_asset(), Some(&deed()));
    }

    #[test]
    fn test_close_clears_selection_and_reopen_shows_form() {
        let mut modal = AssetModal::default();
        modal.select(deed());
        modal.close();
        assert!(modal.selected_asset().is_none());

        modal.open_add();
        assert!(modal.shows_add_form());
    }

    #[test]
    fn test_open_add_keeps_details() {
        let mut modal = AssetModal::OpenWithDetails(deed());
        modal.open_add();
        assert_eq!(modal.selected_asset(), Some(&deed()));
    }

    #[test]
    fn test_select_from_add_form() {
        let mut modal = AssetModal::OpenForAdd;
        modal.select(deed());
        assert_eq!(modal.selected_asset(), Some(&deed()));
    }

    #[test]
    fn test_verify_modal_close_resets() {
        let mut modal = VerifyModal::default();
        modal.open();
        modal.set_token("42");
        modal.set_verified(deed());

        assert!(modal.is_open());
        assert_eq!(modal.token(), "42");
        assert!(modal.verified_asset().is_some());

        modal.close();
        assert!(!modal.is_open());
        assert_eq!(modal.token(), "");
        assert!(modal.verified_asset().is_none());
    }
}
