//! Browser glue used by `update.rs`: blocking dialogs, file reading and
//! diagnostics.

use common::error::ApiError;
use common::model::attachment::Attachment;
use common::workflow::Outcome;
use gloo_file::futures::read_as_bytes;
use gloo_file::File;

/// Shows `message` in a blocking `alert` dialog.
pub fn show_notice(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

/// Blocking yes/no prompt. Anything but an explicit "OK" counts as no.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Reads a picked file fully into memory.
pub async fn read_attachment(file: web_sys::File) -> Result<Attachment, String> {
    let file = File::from(file);
    let bytes = read_as_bytes(&file).await.map_err(|err| err.to_string())?;
    Ok(Attachment::new(file.name(), file.raw_mime_type(), bytes))
}

/// Writes the diagnostic side of a finished workflow to the console.
pub fn log_outcome(operation: &str, outcome: &Outcome) {
    match outcome {
        Outcome::Completed { response, .. } => {
            gloo_console::log!(operation, "succeeded:", response.as_str());
        }
        Outcome::Failed { cause, .. } => log_failure(operation, cause),
        Outcome::Loaded(_) | Outcome::Rejected(_) | Outcome::Cancelled => {}
    }
}

pub fn log_failure(operation: &str, cause: &ApiError) {
    gloo_console::error!(format!("Error {}:", operation), cause.to_string());
}
