//! Export coordination.
//!
//! Turning the displayed card into a downloadable image involves two
//! external collaborators, kept behind traits: a capture capability that
//! rasterizes the card region into an encoded bitmap, and a save target
//! that puts the bytes somewhere the user can reach. The coordinator owns
//! the file-name derivation and the failure boundary; it never touches
//! view-state, so a failed export leaves the user on the display screen
//! free to retry.

use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info};

use crate::format::RateCard;

/// Parameters handed to the capture capability.
#[derive(Debug, Clone)]
pub struct CaptureOptions {
    /// Background fill behind the card, as a CSS-style hex color.
    pub background: String,
    /// Upscaling factor applied at rasterization for print quality.
    pub scale: f32,
    /// Whether the backend may pull in cross-origin content. The SVG
    /// snapshot backend is self-contained and ignores this.
    pub allow_cross_origin: bool,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            scale: 2.0,
            allow_cross_origin: true,
        }
    }
}

/// An encoded bitmap produced by the capture capability.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub width: u32,
    pub height: u32,
    /// PNG-encoded pixel data.
    pub bytes: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("rasterization failed: {0}")]
    Rasterize(String),
    #[error("image encoding failed: {0}")]
    Encode(String),
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("could not write image: {0}")]
    Io(#[from] std::io::Error),
    #[error("save target rejected the file: {0}")]
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Capture(#[from] CaptureError),
    #[error(transparent)]
    Save(#[from] SaveError),
}

/// Rasterizes the card region into an encoded bitmap.
#[async_trait]
pub trait RegionCapture: Send + Sync {
    async fn capture(
        &self,
        card: &RateCard,
        options: &CaptureOptions,
    ) -> Result<EncodedImage, CaptureError>;
}

/// Delivers the encoded payload to the user.
#[async_trait]
pub trait SaveTarget: Send + Sync {
    /// Returns the path the payload was written to, or `None` when the
    /// user dismissed the save prompt.
    async fn save(&self, file_name: &str, payload: &[u8])
    -> Result<Option<PathBuf>, SaveError>;
}

/// How a single export attempt ended, short of an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Saved(PathBuf),
    Dismissed,
}

/// Drives one export: capture, name, save.
///
/// Cheap to share behind an `Arc`; overlapping exports are independent
/// since nothing here mutates shared state.
pub struct ExportCoordinator {
    capture: Arc<dyn RegionCapture>,
    target: Arc<dyn SaveTarget>,
    options: CaptureOptions,
}

impl ExportCoordinator {
    pub fn new(capture: Arc<dyn RegionCapture>, target: Arc<dyn SaveTarget>) -> Self {
        Self {
            capture,
            target,
            options: CaptureOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CaptureOptions) -> Self {
        self.options = options;
        self
    }

    /// Derives the file name from the displayed date, with path-unsafe
    /// separators replaced (`15/03/2024` → `gold-silver-rates-15-03-2024.png`).
    pub fn file_name(card: &RateCard) -> String {
        format!("gold-silver-rates-{}.png", card.date_display.replace('/', "-"))
    }

    /// Captures the card and hands the encoded image to the save target.
    ///
    /// Single-shot and asynchronous; it suspends at the rasterization step
    /// and resumes when a bitmap or a failure comes back. No retry happens
    /// here; any error propagates to the caller for user notification.
    pub async fn export_card(&self, card: &RateCard) -> Result<ExportOutcome, ExportError> {
        let file_name = Self::file_name(card);
        debug!(%file_name, scale = self.options.scale, "capturing rate card");

        let image = self.capture.capture(card, &self.options).await?;
        debug!(
            width = image.width,
            height = image.height,
            bytes = image.bytes.len(),
            "rate card captured"
        );

        match self.target.save(&file_name, &image.bytes).await? {
            Some(path) => {
                info!(path = %path.display(), "rate card exported");
                Ok(ExportOutcome::Saved(path))
            }
            None => {
                info!("export save prompt dismissed");
                Ok(ExportOutcome::Dismissed)
            }
        }
    }
}
