//! `StudentApi` over the browser's `fetch`, via `gloo-net`.
//!
//! Create and update send `multipart/form-data` built from a `FormData`
//! object, letting the browser pick the boundary. Everything else is JSON.

use common::api::StudentApi;
use common::config::ApiConfig;
use common::error::ApiError;
use common::form::{Submission, FILE_FIELD};
use common::model::course::CourseSuggestion;
use common::model::student::{RegNoCheck, StudentRecord};
use gloo_file::Blob;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use web_sys::FormData;

#[derive(Clone, Debug)]
pub struct HttpStudentApi {
    config: ApiConfig,
}

impl HttpStudentApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

impl StudentApi for HttpStudentApi {
    async fn search_courses(&self, query: &str) -> Result<Vec<CourseSuggestion>, ApiError> {
        let response = Request::get(&self.config.course_search_url(query))
            .send()
            .await
            .map_err(network)?;
        decode_json(response).await
    }

    async fn find_student(&self, reg_no: &str) -> Result<StudentRecord, ApiError> {
        let response = Request::get(&self.config.student_search_url(reg_no))
            .send()
            .await
            .map_err(network)?;
        decode_json(response).await
    }

    async fn regno_exists(&self, reg_no: &str) -> Result<bool, ApiError> {
        let response = Request::get(&self.config.check_reg_no_url(reg_no))
            .send()
            .await
            .map_err(network)?;
        let check: RegNoCheck = decode_json(response).await?;
        Ok(check.exists)
    }

    async fn create_student(&self, submission: &Submission) -> Result<String, ApiError> {
        let response = Request::post(&self.config.students_url())
            .body(multipart(submission)?)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_text(response).await
    }

    async fn update_student(
        &self,
        reg_no: &str,
        submission: &Submission,
    ) -> Result<String, ApiError> {
        let response = Request::put(&self.config.student_url(reg_no))
            .body(multipart(submission)?)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_text(response).await
    }

    async fn delete_student(&self, reg_no: &str) -> Result<String, ApiError> {
        let response = Request::delete(&self.config.student_url(reg_no))
            .send()
            .await
            .map_err(network)?;
        read_text(response).await
    }
}

fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

fn js_error(err: JsValue) -> ApiError {
    ApiError::Network(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// Turns a non-2xx response into an error carrying its status and body.
async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(status, body))
    }
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    ensure_success(response)
        .await?
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

async fn read_text(response: Response) -> Result<String, ApiError> {
    ensure_success(response)
        .await?
        .text()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

fn multipart(submission: &Submission) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(js_error)?;
    for (name, value) in &submission.fields {
        form.append_with_str(name, value).map_err(js_error)?;
    }
    if let Some(file) = &submission.file {
        let blob = Blob::new_with_options(file.bytes.as_slice(), Some(file.mime_type.as_str()));
        form.append_with_blob_and_filename(FILE_FIELD, &web_sys::Blob::from(blob), &file.name)
            .map_err(js_error)?;
    }
    Ok(form)
}
