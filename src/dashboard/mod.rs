//! Dashboards
//!
//! Two views over the same [`AssetBoard`] workflow:
//!
//! - [`OwnerDashboard`]: list with mint actions, one JSON form per category
//! - [`UserDashboard`]: asset cards, add/details modal with multipart
//!   upload, and a verification modal

mod board;
mod owner;
mod user;

pub use board::AssetBoard;
pub use owner::OwnerDashboard;
pub use user::UserDashboard;

/// Notification texts raised by dashboard actions
pub mod messages {
    pub const FETCH_FAILED: &str = "Failed to fetch assets";
    pub const SUBMIT_SUCCEEDED: &str = "Asset submitted successfully";
    pub const SUBMIT_FAILED: &str = "Failed to submit asset";
    pub const VERIFY_FAILED: &str = "Failed to verify asset";
    pub const MINT_SUCCEEDED: &str = "Asset minted successfully";
    pub const MINT_FAILED: &str = "Failed to mint asset";
}
