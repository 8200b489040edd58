#![forbid(unsafe_code)]

use async_trait::async_trait;
use tracing::debug;

use super::{CardRegion, ExportError, ImageBlob, ImageExporter, ImageFormat, render_card_svg};

/// Rasterizes the card to PNG through resvg.
#[derive(Debug, Clone)]
pub struct PngCardExporter {
    font_family: String,
    background: tiny_skia::Color,
}

impl Default for PngCardExporter {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            background: tiny_skia::Color::WHITE,
        }
    }
}

impl PngCardExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn with_background(mut self, color: tiny_skia::Color) -> Self {
        self.background = color;
        self
    }

    fn svg_to_png(&self, svg: &str, scale: f32) -> Result<Vec<u8>, ExportError> {
        let mut opt = usvg::Options::default();
        opt.fontdb_mut().load_system_fonts();
        opt.font_family = self.font_family.clone();

        let tree = usvg::Tree::from_str(svg, &opt).map_err(|_| ExportError::SvgParse)?;
        let size = tree.size();
        let width = (size.width() * scale).ceil().max(1.0) as u32;
        let height = (size.height() * scale).ceil().max(1.0) as u32;
        debug!(width, height, "rasterizing card");

        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or(ExportError::PixmapAlloc { width, height })?;
        pixmap.fill(self.background);
        resvg::render(
            &tree,
            tiny_skia::Transform::from_scale(scale, scale),
            &mut pixmap.as_mut(),
        );
        pixmap.encode_png().map_err(|_| ExportError::PngEncode)
    }
}

#[async_trait(?Send)]
impl ImageExporter for PngCardExporter {
    async fn render_element_to_image(
        &self,
        region: &CardRegion,
        scale: f32,
    ) -> Result<ImageBlob, ExportError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(ExportError::InvalidScale(scale));
        }
        let svg = render_card_svg(region, 1.0);
        let png = self.svg_to_png(&svg, scale)?;
        Ok(ImageBlob::new(ImageFormat::Png, png))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::PreviewEntry;

    #[tokio::test]
    async fn renders_png_at_requested_scale() {
        let region = CardRegion {
            entries: vec![PreviewEntry {
                label: "Name".into(),
                text: "Ada".into(),
            }],
            footer: "Team Card".into(),
        };
        let blob = PngCardExporter::new()
            .render_element_to_image(&region, 2.0)
            .await
            .unwrap();
        assert_eq!(blob.format, ImageFormat::Png);
        assert_eq!(&blob.bytes[..8], b"\x89PNG\r\n\x1a\n");
        // IHDR width is stored big-endian right after the chunk header.
        let width = u32::from_be_bytes([blob.bytes[16], blob.bytes[17], blob.bytes[18], blob.bytes[19]]);
        assert_eq!(width, 720);
    }
}
