//! Page Components
//!
//! Top-level views mounted by the router.

pub mod dashboard;
pub mod landing;
pub mod user_dashboard;
pub mod verify;

pub use dashboard::Dashboard;
pub use landing::Landing;
pub use user_dashboard::UserDashboard;
pub use verify::VerifyAsset;
