//! Remote endpoint configuration.
//!
//! The form never spells out a URL itself; it asks an [`ApiConfig`] for the
//! endpoint it needs. The config is handed to the component as a prop (and,
//! when served by the host, read from `/config.json`), so the same build can
//! talk to any deployment of the student API.

use serde::{Deserialize, Serialize};

/// Base URL used when no configuration is provided.
pub const DEFAULT_API_BASE: &str = "https://certificate-backend.onrender.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ConfigDocument")]
pub struct ApiConfig {
    #[serde(rename = "apiBaseUrl")]
    base_url: String,
}

/// Wire shape of `/config.json`; routed through [`ApiConfig::new`] for normalisation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigDocument {
    api_base_url: String,
}

impl From<ConfigDocument> for ApiConfig {
    fn from(doc: ConfigDocument) -> Self {
        Self::new(doc.api_base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/students/courses/search?q=<text>`
    pub fn course_search_url(&self, text: &str) -> String {
        format!(
            "{}/api/students/courses/search?q={}",
            self.base_url,
            urlencoding::encode(text)
        )
    }

    /// `GET /api/students/search?q=<regNo>`
    pub fn student_search_url(&self, reg_no: &str) -> String {
        format!(
            "{}/api/students/search?q={}",
            self.base_url,
            urlencoding::encode(reg_no)
        )
    }

    /// `GET /api/students/check-regno/<regNo>`
    pub fn check_reg_no_url(&self, reg_no: &str) -> String {
        format!(
            "{}/api/students/check-regno/{}",
            self.base_url,
            urlencoding::encode(reg_no)
        )
    }

    /// `POST /api/students`
    pub fn students_url(&self) -> String {
        format!("{}/api/students", self.base_url)
    }

    /// `PUT` and `DELETE /api/students/<regNo>`
    pub fn student_url(&self, reg_no: &str) -> String {
        format!("{}/api/students/{}", self.base_url, urlencoding::encode(reg_no))
    }

    /// Location of a previously stored upload. The path keeps its `/` separators.
    pub fn upload_url(&self, file_path: &str) -> String {
        let encoded: Vec<_> = file_path
            .trim_start_matches('/')
            .split('/')
            .map(urlencoding::encode)
            .collect();
        format!("{}/uploads/{}", self.base_url, encoded.join("/"))
    }
}
