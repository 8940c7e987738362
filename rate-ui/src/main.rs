use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use rate_core::export::SaveTarget;
use rate_ui::export::{DialogSaveTarget, DirectorySaveTarget, ExportService};
use rate_ui::{gui, logging};
use tracing::{debug, error};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Bilingual gold & silver rate card for Balaji Jewellery Mart.
///
/// Enter the day's rates, review the English/Telugu card, and export it
/// as a PNG image.
#[derive(Debug, Parser)]
struct Cli {
    /// Log filter, e.g. `debug` or `rate_ui=trace`. Overrides the default.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log records to this file in addition to stdout.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Suppress stdout log output.
    #[arg(long)]
    quiet: bool,

    /// Save exported images into this directory instead of prompting
    /// with a save dialog.
    #[arg(long)]
    export_dir: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(!cli.quiet);
    if let Some(level) = &cli.log_level {
        logging::set_log_level(level)?;
    }
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    // The export path runs on its own tokio runtime; gpui owns the UI
    // thread and never blocks on it.
    let runtime = tokio::runtime::Runtime::new()?;
    let save_target: Arc<dyn SaveTarget> = match &cli.export_dir {
        Some(dir) => {
            debug!(dir = %dir.display(), "exports will be written without prompting");
            Arc::new(DirectorySaveTarget::new(dir))
        }
        None => Arc::new(DialogSaveTarget),
    };
    let export = ExportService::new(runtime.handle().clone(), save_target);

    gpui::Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx| {
            gui::setup_app(cx);
            if let Err(open_error) = gui::open_main_window(cx, export.clone()) {
                error!(?open_error, "failed to open main window");
                cx.quit();
            }
        });

    Ok(())
}
