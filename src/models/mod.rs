//! Domain types shared by the dashboards, the HTTP clients and the UI

mod asset;
mod notification;
mod submission;

pub use asset::{Account, Asset, AssetType};
pub use notification::{Notification, NotificationKind};
pub use submission::{AssetSubmission, ImageAttachment, SubmissionEncoding};
