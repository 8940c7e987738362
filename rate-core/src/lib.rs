pub mod export;
pub mod format;
pub mod models;
pub mod state;

pub use export::{ExportCoordinator, ExportOutcome, RegionCapture, SaveTarget};
pub use format::{RateCard, render_card};
pub use models::{RateRecord, RawRateFields};
pub use state::{ViewEvent, ViewState, apply};
