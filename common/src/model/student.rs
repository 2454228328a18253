use serde::{Deserialize, Serialize};

/// A student's certificate record as returned by `GET /api/students/search`.
///
/// Every field is optional: a key the server leaves out must not overwrite
/// what the form already holds (see `CertificateForm::load_record`).
///
/// The server stores the uploaded image and hands back its path in `file`;
/// on the way out the binary attachment travels as a multipart part instead
/// (see `form::Submission`). Unknown fields such as database ids are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reg_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trainer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Server-assigned path of the stored upload, relative to `/uploads/`.
    #[serde(rename = "file", skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_number: Option<String>,
}

/// Body of `GET /api/students/check-regno/{regNo}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct RegNoCheck {
    #[serde(default)]
    pub exists: bool,
}
