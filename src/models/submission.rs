//! Asset submissions
//!
//! What a form hands to a dashboard when the user adds an asset, and the
//! two ways it can be put on the wire.

use std::collections::BTreeMap;

use super::AssetType;

/// Binary image attached to a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageAttachment {
    /// Create an attachment, guessing the content type from the file extension
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type_for(&file_name).to_string();
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Builder method: override the guessed content type
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }
}

fn content_type_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// A caller-filled asset record awaiting submission
///
/// Nothing here is validated; the backend decides what it accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSubmission {
    pub asset_type: AssetType,
    pub asset_id: String,
    pub asset_name: Option<String>,
    /// Free-form detail fields, `description` among them
    pub details: BTreeMap<String, String>,
    pub image: Option<ImageAttachment>,
}

impl AssetSubmission {
    pub fn new(asset_type: impl Into<AssetType>, asset_id: impl Into<String>) -> Self {
        Self {
            asset_type: asset_type.into(),
            asset_id: asset_id.into(),
            asset_name: None,
            details: BTreeMap::new(),
            image: None,
        }
    }

    /// Builder method: set the asset name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.asset_name = Some(name.into());
        self
    }

    /// Builder method: add a detail field
    pub fn detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Builder method: set the `description` detail
    pub fn with_description(self, description: impl Into<String>) -> Self {
        self.detail("description", description)
    }

    /// Builder method: attach an image
    pub fn image(mut self, image: ImageAttachment) -> Self {
        self.image = Some(image);
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.details.get("description").map(String::as_str)
    }
}

/// Request body format for `POST /add-asset`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionEncoding {
    /// `application/json` body with a nested `details` object
    #[default]
    Json,
    /// `multipart/form-data` with flat fields and an optional `image` part
    Multipart,
}

impl SubmissionEncoding {
    /// Multipart when an image is attached, JSON otherwise
    pub fn auto(submission: &AssetSubmission) -> Self {
        if submission.image.is_some() {
            SubmissionEncoding::Multipart
        } else {
            SubmissionEncoding::Json
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_guess() {
        assert_eq!(ImageAttachment::new("deed.PNG", vec![]).content_type, "image/png");
        assert_eq!(ImageAttachment::new("car.jpeg", vec![]).content_type, "image/jpeg");
        assert_eq!(
            ImageAttachment::new("blob", vec![]).content_type,
            "application/octet-stream"
        );
        assert_eq!(
            ImageAttachment::new("x.bin", vec![])
                .with_content_type("image/avif")
                .content_type,
            "image/avif"
        );
    }

    #[test]
    fn test_builder_and_description() {
        let submission = AssetSubmission::new("Land", "7")
            .name("Plot")
            .with_description("North field")
            .detail("acres", "12");

        assert_eq!(submission.asset_type, AssetType::Land);
        assert_eq!(submission.description(), Some("North field"));
        assert_eq!(submission.details.len(), 2);
    }

    #[test]
    fn test_auto_encoding() {
        let plain = AssetSubmission::new("Product", "p-1");
        assert_eq!(SubmissionEncoding::auto(&plain), SubmissionEncoding::Json);

        let with_image = plain.image(ImageAttachment::new("p.png", vec![1, 2, 3]));
        assert_eq!(
            SubmissionEncoding::auto(&with_image),
            SubmissionEncoding::Multipart
        );
    }
}
