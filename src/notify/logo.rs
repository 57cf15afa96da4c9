//! Inline image embedded into the HTML body.

use super::LOGO_CONTENT_ID;
use crate::error::{NotifyError, ResourceError};
use lettre::message::header::ContentType;
use lettre::message::{Attachment, SinglePart};
use std::path::Path;

/// Image attached inline and referenced by Content-ID.
#[derive(Clone)]
pub struct InlineImage {
    content_id: String,
    mime_type: &'static str,
    data: Vec<u8>,
}

impl InlineImage {
    /// Read the logo from `path`. The file is read once and closed.
    pub fn load(path: &Path) -> Result<Self, ResourceError> {
        let data = std::fs::read(path).map_err(|source| ResourceError::LogoUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), bytes = data.len(), "Logo loaded");

        Ok(Self::new(LOGO_CONTENT_ID, mime_type_for(path), data))
    }

    pub fn new(content_id: &str, mime_type: &'static str, data: Vec<u8>) -> Self {
        Self {
            content_id: content_id.to_string(),
            mime_type,
            data,
        }
    }

    pub fn content_id(&self) -> &str {
        &self.content_id
    }

    pub fn mime_type(&self) -> &str {
        self.mime_type
    }

    /// MIME part with `Content-Disposition: inline` and the Content-ID header.
    pub(crate) fn to_part(&self) -> Result<SinglePart, NotifyError> {
        let content_type = ContentType::parse(self.mime_type)
            .map_err(|e| NotifyError::BuildFailed(format!("logo content type: {}", e)))?;
        Ok(Attachment::new_inline(self.content_id.clone()).body(self.data.clone(), content_type))
    }
}

impl std::fmt::Debug for InlineImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InlineImage")
            .field("content_id", &self.content_id)
            .field("mime_type", &self.mime_type)
            .field("bytes", &self.data.len())
            .finish()
    }
}

fn mime_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
