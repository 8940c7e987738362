//! End-to-end export: format a record, rasterize the SVG snapshot, and
//! write the PNG into a directory save target.

use std::sync::Arc;

use rate_core::export::{ExportCoordinator, ExportOutcome};
use rate_core::format::render_card;
use rate_core::models::{RateRecord, RawRateFields};
use rate_ui::export::{DirectorySaveTarget, SvgCardCapture};

fn scratch_dir(tag: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("rate-card-{tag}-{}", std::process::id()))
}

fn record(date: &str, gold: &str, silver: &str) -> RateRecord {
    RateRecord::from_raw(&RawRateFields {
        date: date.into(),
        gold_price: gold.into(),
        silver_price: silver.into(),
    })
}

#[tokio::test]
async fn exported_card_is_a_png_named_from_the_displayed_date() {
    let dir = scratch_dir("named");
    let coordinator = ExportCoordinator::new(
        Arc::new(SvgCardCapture::new()),
        Arc::new(DirectorySaveTarget::new(&dir)),
    );

    let card = render_card(&record("2024-03-15", "54000", "750"));
    let outcome = coordinator.export_card(&card).await.expect("export should succeed");

    let ExportOutcome::Saved(path) = outcome else {
        panic!("directory target never dismisses");
    };
    assert_eq!(
        path.file_name().unwrap().to_string_lossy(),
        "gold-silver-rates-15-03-2024.png"
    );

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n", "payload is not a PNG");

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn overlapping_exports_do_not_interfere() {
    let dir = scratch_dir("overlap");
    let coordinator = Arc::new(ExportCoordinator::new(
        Arc::new(SvgCardCapture::new()),
        Arc::new(DirectorySaveTarget::new(&dir)),
    ));

    let first = render_card(&record("2024-03-15", "54000", "750"));
    let second = render_card(&record("2024-03-16", "54500", "760"));

    let (a, b) = tokio::join!(coordinator.export_card(&first), coordinator.export_card(&second));
    let ExportOutcome::Saved(path_a) = a.unwrap() else { panic!("expected saved file") };
    let ExportOutcome::Saved(path_b) = b.unwrap() else { panic!("expected saved file") };

    assert_ne!(path_a, path_b);
    assert!(path_a.exists() && path_b.exists());

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn invalid_inputs_still_export_with_placeholder_tokens() {
    let dir = scratch_dir("tolerant");
    let coordinator = ExportCoordinator::new(
        Arc::new(SvgCardCapture::new()),
        Arc::new(DirectorySaveTarget::new(&dir)),
    );

    // Garbage date and price flow through as placeholders, never errors.
    let card = render_card(&record("someday", "not a number", "0"));
    assert_eq!(card.date_display, "Invalid Date");

    let outcome = coordinator.export_card(&card).await.expect("export should succeed");
    let ExportOutcome::Saved(path) = outcome else { panic!("expected saved file") };
    assert_eq!(
        path.file_name().unwrap().to_string_lossy(),
        "gold-silver-rates-Invalid Date.png"
    );

    let _ = std::fs::remove_dir_all(&dir);
}
