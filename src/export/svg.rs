use std::fmt::Write as _;

use async_trait::async_trait;
use unicode_width::UnicodeWidthStr;

use super::{CardRegion, ExportError, ImageBlob, ImageExporter, ImageFormat};

const PADDING: f32 = 24.0;
const LINE_HEIGHT: f32 = 28.0;
const FOOTER_GAP: f32 = 16.0;
const FONT_SIZE: f32 = 16.0;
const FOOTER_FONT_SIZE: f32 = 12.0;
/// Approximate advance of one terminal column at `FONT_SIZE`.
const COLUMN_WIDTH: f32 = 9.0;
const MIN_WIDTH: f32 = 360.0;
const WRAP_COLUMNS: usize = 48;
const FONT_FAMILY: &str = "sans-serif";

/// Lay the card out as an SVG document.
///
/// `scale` multiplies the outer `width`/`height` only; the viewBox keeps the 1:1 layout.
pub fn render_card_svg(region: &CardRegion, scale: f32) -> String {
    let mut lines: Vec<(Option<String>, String)> = Vec::new();
    for entry in &region.entries {
        let caption = format!("{}:", entry.label);
        let full = entry.to_string();
        for (idx, line) in textwrap::wrap(&full, WRAP_COLUMNS).into_iter().enumerate() {
            let line = line.into_owned();
            if idx == 0
                && let Some(rest) = line.strip_prefix(&caption)
            {
                lines.push((Some(caption.clone()), rest.to_string()));
            } else {
                lines.push((None, line));
            }
        }
    }

    let widest = lines
        .iter()
        .map(|(caption, rest)| caption.as_deref().map_or(0, |caption| caption.width()) + rest.width())
        .chain(std::iter::once(region.footer.width()))
        .max()
        .unwrap_or(0);
    let width = (widest as f32 * COLUMN_WIDTH + PADDING * 2.0).max(MIN_WIDTH).ceil();
    let height = (PADDING * 2.0 + LINE_HEIGHT * (lines.len() as f32 + 1.0) + FOOTER_GAP).ceil();

    let mut svg = String::new();
    let _ = write!(
        svg,
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {width} {height}">"##,
        width * scale,
        height * scale
    );
    let _ = write!(
        svg,
        r##"<rect x="0.5" y="0.5" width="{}" height="{}" rx="12" fill="#ffffff" stroke="#d0d7de"/>"##,
        width - 1.0,
        height - 1.0
    );
    for (idx, (caption, rest)) in lines.iter().enumerate() {
        let y = PADDING + LINE_HEIGHT * (idx as f32 + 0.75);
        let _ = write!(
            svg,
            r##"<text x="{PADDING}" y="{y}" font-family="{FONT_FAMILY}" font-size="{FONT_SIZE}" fill="#1f2328" xml:space="preserve">"##
        );
        if let Some(caption) = caption {
            let _ = write!(
                svg,
                r#"<tspan font-weight="bold">{}</tspan>"#,
                escape_xml(caption)
            );
        }
        let _ = write!(svg, "{}</text>", escape_xml(rest));
    }
    let footer_y = height - PADDING;
    let _ = write!(
        svg,
        r##"<text x="{}" y="{footer_y}" font-family="{FONT_FAMILY}" font-size="{FOOTER_FONT_SIZE}" fill="#57606a" text-anchor="end">{}</text>"##,
        width - PADDING,
        escape_xml(&region.footer)
    );
    svg.push_str("</svg>");
    svg
}

fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Exports the card as an SVG document whose outer size is multiplied by the scale.
#[derive(Debug, Clone, Default)]
pub struct SvgCardExporter;

#[async_trait(?Send)]
impl ImageExporter for SvgCardExporter {
    async fn render_element_to_image(
        &self,
        region: &CardRegion,
        scale: f32,
    ) -> Result<ImageBlob, ExportError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(ExportError::InvalidScale(scale));
        }
        let svg = render_card_svg(region, scale);
        Ok(ImageBlob::new(ImageFormat::Svg, svg.into_bytes()))
    }
}
