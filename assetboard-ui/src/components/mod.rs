//! UI Components
//!
//! Reusable Leptos components for the dashboards.

pub mod asset_card;
pub mod asset_details;
pub mod asset_form;
pub mod asset_list;
pub mod modal;
pub mod nav;
pub mod notification;

pub use asset_card::AssetCard;
pub use asset_details::AssetDetails;
pub use asset_form::AssetForm;
pub use asset_list::AssetList;
pub use modal::Modal;
pub use nav::Nav;
pub use notification::NotificationBanner;
