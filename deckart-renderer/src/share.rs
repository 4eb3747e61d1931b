//! Export-or-share hand-off for rendered card images.
//!
//! ```text
//! render ──▶ share target can take files? ──yes──▶ share ──▶ Shared
//!                     │                              ├──cancel──▶ Cancelled
//!                     no                             └──error───▶ Err
//!                     ▼
//!                  download ──▶ Downloaded / Err
//! ```

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::{RenderError, RenderResult};
use crate::raster::RasterImage;

/// A file offered to a share target or download sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareFile {
    /// Suggested filename.
    pub filename: String,
    /// MIME type.
    pub mime_type: &'static str,
    /// Share sheet title.
    pub title: String,
    /// Encoded image.
    pub bytes: Vec<u8>,
}

impl ShareFile {
    /// Wrap a rendered image.
    #[must_use]
    pub fn from_image(image: RasterImage, filename: String, title: String) -> Self {
        Self {
            filename,
            mime_type: image.format.mime_type(),
            title,
            bytes: image.bytes,
        }
    }
}

/// Result of a platform share call that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The recipient accepted the file.
    Shared,
    /// The user dismissed the share sheet.
    Cancelled,
}

/// How an export-or-share call ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Shared through the platform.
    Shared,
    /// Saved through the download sink.
    Downloaded {
        /// Where the sink put the file.
        location: PathBuf,
    },
    /// The user cancelled the share; nothing else happens.
    Cancelled,
}

/// Platform-native share capability.
#[async_trait]
pub trait ShareTarget: Send + Sync {
    /// Whether this target can share `file` as a file attachment.
    fn can_share_files(&self, file: &ShareFile) -> bool;

    /// Share the file.
    ///
    /// # Errors
    ///
    /// Returns an error if sharing fails for any reason other than the user
    /// cancelling, which is reported as [`ShareOutcome::Cancelled`].
    async fn share(&self, file: &ShareFile) -> RenderResult<ShareOutcome>;
}

/// Fallback file download.
#[async_trait]
pub trait DownloadSink: Send + Sync {
    /// Save the file and return where it went.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    async fn download(&self, file: &ShareFile) -> RenderResult<PathBuf>;
}

/// Platform without any share capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoShareTarget;

#[async_trait]
impl ShareTarget for NoShareTarget {
    fn can_share_files(&self, _file: &ShareFile) -> bool {
        false
    }

    async fn share(&self, _file: &ShareFile) -> RenderResult<ShareOutcome> {
        Err(RenderError::Share("share is not supported".to_string()))
    }
}

/// Download sink that writes into a directory.
#[derive(Debug, Clone)]
pub struct DirectoryDownloadSink {
    dir: PathBuf,
}

impl DirectoryDownloadSink {
    /// Create a sink writing into `dir` (created on first download).
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl DownloadSink for DirectoryDownloadSink {
    async fn download(&self, file: &ShareFile) -> RenderResult<PathBuf> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| RenderError::Download(format!("{}: {e}", self.dir.display())))?;
        let path = self.dir.join(&file.filename);
        tokio::fs::write(&path, &file.bytes)
            .await
            .map_err(|e| RenderError::Download(format!("{}: {e}", path.display())))?;
        Ok(path)
    }
}

/// Offer `file` to the share target, falling back to the download sink
/// when the target cannot take files.
///
/// # Errors
///
/// Returns share errors other than cancellation, and download errors.
pub async fn share_or_download(
    file: &ShareFile,
    target: &dyn ShareTarget,
    sink: &dyn DownloadSink,
) -> RenderResult<ExportOutcome> {
    if target.can_share_files(file) {
        return match target.share(file).await? {
            ShareOutcome::Shared => {
                tracing::info!(filename = %file.filename, "card shared");
                Ok(ExportOutcome::Shared)
            }
            ShareOutcome::Cancelled => {
                tracing::info!(filename = %file.filename, "share cancelled");
                Ok(ExportOutcome::Cancelled)
            }
        };
    }

    tracing::warn!(filename = %file.filename, "file sharing unavailable, downloading");
    let location = sink.download(file).await?;
    tracing::info!(location = %location.display(), "card downloaded");
    Ok(ExportOutcome::Downloaded { location })
}
