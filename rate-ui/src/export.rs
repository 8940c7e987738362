//! Production implementations of the export boundaries.
//!
//! Capture: the card is snapshotted as an SVG document built from the same
//! [`RateCard`] the screen rendered, then rasterized with resvg at the
//! configured scale and PNG-encoded via tiny-skia. Save: either a native
//! save dialog pre-filled with the derived file name, or a fixed directory
//! for headless use.

use std::{fmt::Write as _, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use rate_core::export::{
    CaptureError, CaptureOptions, EncodedImage, ExportCoordinator, ExportOutcome, RegionCapture,
    SaveError, SaveTarget,
};
use rate_core::format::{
    ADDRESS_EN, ADDRESS_TE, CARD_TITLE_EN, CARD_TITLE_TE, FOOTER_EN, FOOTER_TE, PHONE_EN,
    PHONE_TE, RateCard, SHOP_NAME_EN, SHOP_NAME_TE,
};
use resvg::{tiny_skia, usvg};
use rfd::AsyncFileDialog;
use tracing::{error, info};

use crate::components::dialogs::show_error_dialog;

// Card geometry in CSS pixels; the scale factor is applied at rasterization.
const CARD_WIDTH: f32 = 860.0;
const CARD_HEIGHT: f32 = 560.0;
const COLUMN_WIDTH: f32 = 390.0;
const MARGIN: f32 = 30.0;

/// Rasterizes the card via an SVG snapshot.
pub struct SvgCardCapture {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl SvgCardCapture {
    pub fn new() -> Self {
        let mut fontdb = usvg::fontdb::Database::new();
        fontdb.load_system_fonts();
        Self { fontdb: Arc::new(fontdb) }
    }
}

impl Default for SvgCardCapture {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RegionCapture for SvgCardCapture {
    async fn capture(
        &self,
        card: &RateCard,
        options: &CaptureOptions,
    ) -> Result<EncodedImage, CaptureError> {
        let svg = card_svg(card, options);
        let fontdb = Arc::clone(&self.fontdb);
        let scale = options.scale;

        // Shaping and rasterization are CPU-bound; keep them off the
        // async worker so the UI side of the runtime stays responsive.
        tokio::task::spawn_blocking(move || rasterize_svg(&svg, scale, fontdb))
            .await
            .map_err(|e| CaptureError::Rasterize(e.to_string()))?
    }
}

fn rasterize_svg(
    svg: &str,
    scale: f32,
    fontdb: Arc<usvg::fontdb::Database>,
) -> Result<EncodedImage, CaptureError> {
    let mut options = usvg::Options::default();
    options.fontdb = fontdb;
    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|e| CaptureError::Rasterize(e.to_string()))?;

    let size = tree.size();
    let width = (size.width() * scale).round() as u32;
    let height = (size.height() * scale).round() as u32;
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| CaptureError::Rasterize("capture region has zero size".to_string()))?;

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    let bytes = pixmap
        .encode_png()
        .map_err(|e| CaptureError::Encode(e.to_string()))?;

    Ok(EncodedImage { width, height, bytes })
}

/// Builds the SVG snapshot of the card: header, rate table, footer.
///
/// Every visible value comes straight out of the [`RateCard`], so the
/// exported image shows exactly what the display screen shows.
fn card_svg(card: &RateCard, options: &CaptureOptions) -> String {
    let mut svg = String::new();
    let background = xml_escape(&options.background);

    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{CARD_WIDTH}" height="{CARD_HEIGHT}" font-family="sans-serif">"#
    );
    let _ = write!(
        svg,
        r#"<rect x="0" y="0" width="{CARD_WIDTH}" height="{CARD_HEIGHT}" fill="{background}"/>"#
    );

    let center = CARD_WIDTH / 2.0;
    centered_text(&mut svg, center, 50.0, 28.0, true, SHOP_NAME_EN);
    centered_text(&mut svg, center, 84.0, 24.0, true, SHOP_NAME_TE);
    centered_text(&mut svg, center, 112.0, 14.0, false, &format!("{ADDRESS_EN}   {ADDRESS_TE}"));
    centered_text(&mut svg, center, 134.0, 14.0, false, &format!("{PHONE_EN}   {PHONE_TE}"));

    centered_text(&mut svg, center, 180.0, 20.0, true, CARD_TITLE_EN);
    centered_text(&mut svg, center, 206.0, 16.0, false, CARD_TITLE_TE);

    for (i, column) in card.columns.iter().enumerate() {
        let x = if i == 0 { MARGIN } else { CARD_WIDTH - MARGIN - COLUMN_WIDTH };
        let _ = write!(
            svg,
            r##"<rect x="{x}" y="240" width="{COLUMN_WIDTH}" height="220" fill="none" stroke="#cccccc" rx="8"/>"##
        );
        centered_text(&mut svg, x + COLUMN_WIDTH / 2.0, 272.0, 18.0, true, column.heading);

        for (j, row) in column.rows.iter().enumerate() {
            let y = 316.0 + j as f32 * 44.0;
            let _ = write!(
                svg,
                r#"<text x="{lx}" y="{y}" font-size="14" font-weight="bold">{label}</text>"#,
                lx = x + 16.0,
                label = xml_escape(row.label),
            );
            let _ = write!(
                svg,
                r#"<text x="{vx}" y="{y}" font-size="14" text-anchor="end">{value}</text>"#,
                vx = x + COLUMN_WIDTH - 16.0,
                value = xml_escape(&row.value),
            );
        }
    }

    centered_text(&mut svg, center, 510.0, 12.0, false, FOOTER_EN);
    centered_text(&mut svg, center, 532.0, 12.0, false, FOOTER_TE);

    svg.push_str("</svg>");
    svg
}

fn centered_text(svg: &mut String, x: f32, y: f32, size: f32, bold: bool, text: &str) {
    let weight = if bold { " font-weight=\"bold\"" } else { "" };
    let _ = write!(
        svg,
        r#"<text x="{x}" y="{y}" font-size="{size}" text-anchor="middle"{weight}>{}</text>"#,
        xml_escape(text),
    );
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Saves via a native save dialog pre-filled with the derived file name.
pub struct DialogSaveTarget;

#[async_trait]
impl SaveTarget for DialogSaveTarget {
    async fn save(
        &self,
        file_name: &str,
        payload: &[u8],
    ) -> Result<Option<PathBuf>, SaveError> {
        let Some(handle) = AsyncFileDialog::new()
            .set_file_name(file_name)
            .add_filter("PNG image", &["png"])
            .save_file()
            .await
        else {
            return Ok(None);
        };

        handle.write(payload).await?;
        Ok(Some(handle.path().to_path_buf()))
    }
}

/// Saves into a fixed directory without prompting. Used with the
/// `--export-dir` flag and in integration tests.
pub struct DirectorySaveTarget {
    dir: PathBuf,
}

impl DirectorySaveTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl SaveTarget for DirectorySaveTarget {
    async fn save(
        &self,
        file_name: &str,
        payload: &[u8],
    ) -> Result<Option<PathBuf>, SaveError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(file_name);
        tokio::fs::write(&path, payload).await?;
        Ok(Some(path))
    }
}

/// Hands export requests from the UI thread to the tokio runtime.
///
/// Fire-and-forget by design: the trigger stays enabled, overlapping
/// requests each get their own task, and view-state is never touched from
/// here. Failures surface as a blocking error dialog plus a log record.
#[derive(Clone)]
pub struct ExportService {
    coordinator: Arc<ExportCoordinator>,
    runtime: tokio::runtime::Handle,
}

impl ExportService {
    pub fn new(
        runtime: tokio::runtime::Handle,
        target: Arc<dyn SaveTarget>,
    ) -> Self {
        let coordinator =
            Arc::new(ExportCoordinator::new(Arc::new(SvgCardCapture::new()), target));
        Self { coordinator, runtime }
    }

    pub fn request_export(
        &self,
        card: RateCard,
    ) {
        let coordinator = Arc::clone(&self.coordinator);
        self.runtime.spawn(async move {
            match coordinator.export_card(&card).await {
                Ok(ExportOutcome::Saved(path)) => {
                    info!(path = %path.display(), "rate card image saved");
                }
                Ok(ExportOutcome::Dismissed) => {
                    info!("rate card export dismissed by user");
                }
                Err(export_error) => {
                    error!(%export_error, "rate card export failed");
                    show_error_dialog(
                        "Export Failed",
                        format!("Could not export the rate card: {export_error}"),
                    )
                    .await;
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rate_core::format::render_card;
    use rate_core::models::{RateRecord, RawRateFields};

    fn sample_card() -> RateCard {
        render_card(&RateRecord::from_raw(&RawRateFields {
            date: "2024-03-15".into(),
            gold_price: "54000".into(),
            silver_price: "750".into(),
        }))
    }

    #[test]
    fn snapshot_embeds_the_on_screen_values_verbatim() {
        let card = sample_card();
        let svg = card_svg(&card, &CaptureOptions::default());

        for column in &card.columns {
            for row in &column.rows {
                assert!(svg.contains(&xml_escape(&row.value)), "missing value {:?}", row.value);
                assert!(svg.contains(&xml_escape(row.label)), "missing label {:?}", row.label);
            }
        }
    }

    #[test]
    fn snapshot_uses_the_requested_background() {
        let options = CaptureOptions {
            background: "#fffbeb".to_string(),
            ..CaptureOptions::default()
        };
        let svg = card_svg(&sample_card(), &options);
        assert!(svg.contains(r##"fill="#fffbeb""##));
    }

    #[test]
    fn xml_escape_covers_markup_characters() {
        assert_eq!(xml_escape("a<b&\"c\"'d'>"), "a&lt;b&amp;&quot;c&quot;&apos;d&apos;&gt;");
    }
}
