//! Card export: snapshot the preview region and hand it to an image exporter.

#[cfg(feature = "raster")]
mod raster;
mod svg;

use std::fmt;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::app::CardOptions;
use crate::preview::{PreviewArea, PreviewEntry};

#[cfg(feature = "raster")]
pub use raster::PngCardExporter;
pub use svg::{SvgCardExporter, render_card_svg};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to parse the rendered card SVG")]
    SvgParse,
    #[error("failed to allocate a {width}x{height} pixmap")]
    PixmapAlloc { width: u32, height: u32 },
    #[error("failed to encode PNG")]
    PngEncode,
    #[error("invalid export scale {0}")]
    InvalidScale(f32),
}

/// What the card looked like when the export was triggered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardRegion {
    pub entries: Vec<PreviewEntry>,
    pub footer: String,
}

impl CardRegion {
    pub fn capture(area: &PreviewArea) -> Self {
        Self {
            entries: area.entries(),
            footer: area.footer().to_string(),
        }
    }
}

impl fmt::Display for CardRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        write!(f, "{}", self.footer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Svg => "image/svg+xml",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBlob {
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

impl ImageBlob {
    pub fn new(format: ImageFormat, bytes: Vec<u8>) -> Self {
        Self { format, bytes }
    }

    pub fn to_data_uri(&self) -> String {
        match self.format {
            ImageFormat::Png => format!(
                "data:{};base64,{}",
                self.format.mime_type(),
                STANDARD.encode(&self.bytes)
            ),
            ImageFormat::Svg => format!(
                "data:{},{}",
                self.format.mime_type(),
                utf8_percent_encode(&String::from_utf8_lossy(&self.bytes), NON_ALPHANUMERIC)
            ),
        }
    }
}

/// An exported image offered under a fixed file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub blob: ImageBlob,
}

/// Renders a card region into an image.
#[async_trait(?Send)]
pub trait ImageExporter {
    async fn render_element_to_image(
        &self,
        region: &CardRegion,
        scale: f32,
    ) -> Result<ImageBlob, ExportError>;
}

/// Export whatever the preview area currently shows.
///
/// The region is captured before the exporter is awaited.
pub async fn export_card(
    area: &PreviewArea,
    exporter: &dyn ImageExporter,
    options: &CardOptions,
) -> Result<Download, ExportError> {
    let region = CardRegion::capture(area);
    info!(
        entries = region.entries.len(),
        scale = options.export_scale,
        "exporting card"
    );
    let blob = exporter
        .render_element_to_image(&region, options.export_scale)
        .await?;
    Ok(Download {
        file_name: options.export_file_name.clone(),
        blob,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_data_uri_is_base64() {
        let blob = ImageBlob::new(ImageFormat::Png, b"abc".to_vec());
        assert_eq!(blob.to_data_uri(), "data:image/png;base64,YWJj");
    }

    #[test]
    fn svg_data_uri_is_percent_encoded() {
        let blob = ImageBlob::new(ImageFormat::Svg, b"<svg/>".to_vec());
        assert_eq!(blob.to_data_uri(), "data:image/svg+xml,%3Csvg%2F%3E");
    }

    #[test]
    fn region_text_lists_entries_then_footer() {
        let region = CardRegion {
            entries: vec![
                PreviewEntry {
                    label: "Name".into(),
                    text: "Ada".into(),
                },
                PreviewEntry {
                    label: "Role".into(),
                    text: "-".into(),
                },
            ],
            footer: "Team Card".into(),
        };
        assert_eq!(region.to_string(), "Name: Ada\nRole: -\nTeam Card");
    }
}
