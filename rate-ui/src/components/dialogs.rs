use rfd::{AsyncMessageDialog, MessageButtons, MessageLevel};

/// Shows a blocking error dialog.
///
/// Used by the export path: the user stays on the display screen behind
/// the dialog and may retry once it is acknowledged.
pub async fn show_error_dialog(
    title: impl Into<String>,
    description: impl Into<String>,
) {
    AsyncMessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title.into())
        .set_description(description.into())
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
}
