//! Failure taxonomy for remote calls and the user-facing notices every
//! workflow ends in.

use thiserror::Error;

/// Text of the blocking yes/no prompt shown before a delete.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this record?";

/// Why a call to the student API did not produce the expected value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never got an HTTP response (offline, CORS, DNS, ...).
    #[error("network error: {0}")]
    Network(String),
    #[error("not found")]
    NotFound,
    /// Any other non-2xx status.
    #[error("server rejected request with status {status}: {body}")]
    Rejected { status: u16, body: String },
    /// A 2xx response whose body could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Maps a non-success status code to the matching variant.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        match status {
            404 => ApiError::NotFound,
            _ => ApiError::Rejected {
                status,
                body: body.into(),
            },
        }
    }
}

/// A blocking message shown to the user when a workflow finishes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Notice {
    #[error("⚠️ Please fill all required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("❌ This Registration Number already exists!")]
    DuplicateRegNo,
    #[error("❌ Error verifying registration number.")]
    VerificationFailed,
    #[error("✅ Student submitted successfully!")]
    Created,
    #[error("❌ Error submitting student data.")]
    SubmitFailed,
    #[error("✅ Student updated successfully")]
    Updated,
    #[error("❌ Error updating student data.")]
    UpdateFailed,
    #[error("🗑️ Student deleted successfully")]
    Deleted,
    #[error("❌ Error deleting student data.")]
    DeleteFailed,
    #[error("⚠️ Please enter the Reg. No to delete.")]
    RegNoRequired,
    #[error("❌ Student not found. Please check the value or try again.")]
    StudentNotFound,
    #[error("⚠️ Error fetching student.")]
    FetchFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_404_is_not_found() {
        assert_eq!(ApiError::from_status(404, "nope"), ApiError::NotFound);
        assert_eq!(
            ApiError::from_status(409, "dup"),
            ApiError::Rejected {
                status: 409,
                body: "dup".into()
            }
        );
    }

    #[test]
    fn missing_fields_notice_lists_names_in_order() {
        let notice = Notice::MissingFields(vec!["email", "file"]);
        assert_eq!(
            notice.to_string(),
            "⚠️ Please fill all required fields: email, file"
        );
    }

    #[test]
    fn reg_no_notice_mentions_reg_no() {
        assert!(Notice::RegNoRequired.to_string().contains("Reg. No"));
    }
}
