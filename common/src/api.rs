//! Transport seam between the workflows and the student API.
//!
//! The browser implements this over `gloo-net`; tests use an in-memory fake.
//! Futures are not required to be `Send` since everything runs on the single
//! wasm thread.

use crate::error::ApiError;
use crate::form::Submission;
use crate::model::course::CourseSuggestion;
use crate::model::student::StudentRecord;

#[allow(async_fn_in_trait)]
pub trait StudentApi {
    /// `GET /api/students/courses/search?q=<query>`
    async fn search_courses(&self, query: &str) -> Result<Vec<CourseSuggestion>, ApiError>;

    /// `GET /api/students/search?q=<regNo>`; a 404 maps to [`ApiError::NotFound`].
    async fn find_student(&self, reg_no: &str) -> Result<StudentRecord, ApiError>;

    /// `GET /api/students/check-regno/<regNo>`, returning the `exists` flag.
    async fn regno_exists(&self, reg_no: &str) -> Result<bool, ApiError>;

    /// `POST /api/students` as multipart. Returns the raw confirmation body.
    async fn create_student(&self, submission: &Submission) -> Result<String, ApiError>;

    /// `PUT /api/students/<regNo>` as multipart. Returns the raw confirmation body.
    async fn update_student(&self, reg_no: &str, submission: &Submission)
    -> Result<String, ApiError>;

    /// `DELETE /api/students/<regNo>`. Returns the raw confirmation body.
    async fn delete_student(&self, reg_no: &str) -> Result<String, ApiError>;
}
