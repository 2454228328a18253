//! The CRUD and search workflows behind the form's buttons.
//!
//! Each workflow takes a snapshot of the form, talks to a [`StudentApi`] and
//! reports an [`Outcome`]. None of them touch UI state; the component applies
//! the outcome with [`Outcome::apply`] once the future resolves, so a failure
//! at any point leaves the form exactly as it was.

use crate::api::StudentApi;
use crate::certificate::generate_certificate_number;
use crate::error::{ApiError, DELETE_PROMPT, Notice};
use crate::form::CertificateForm;
use crate::model::course::CourseSuggestion;
use crate::model::student::StudentRecord;
use crate::wizard::WizardState;

/// Result of a finished workflow.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A mutation succeeded. `response` is the server's confirmation body.
    Completed { notice: Notice, response: String },
    /// A search found the record.
    Loaded(StudentRecord),
    /// Aborted locally before (or instead of) the mutating request.
    Rejected(Notice),
    /// A remote call failed.
    Failed { notice: Notice, cause: ApiError },
    /// The user declined the confirmation prompt.
    Cancelled,
}

impl Outcome {
    pub fn notice(&self) -> Option<&Notice> {
        match self {
            Outcome::Completed { notice, .. }
            | Outcome::Rejected(notice)
            | Outcome::Failed { notice, .. } => Some(notice),
            Outcome::Loaded(_) | Outcome::Cancelled => None,
        }
    }

    /// Applies the outcome to the form and wizard, returning the notice to show.
    ///
    /// Success resets everything; a loaded record is merged in and flips the
    /// wizard to update; every other outcome leaves state untouched.
    pub fn apply(self, form: &mut CertificateForm, wizard: &mut WizardState) -> Option<Notice> {
        match self {
            Outcome::Completed { notice, .. } => {
                form.reset();
                wizard.reset();
                Some(notice)
            }
            Outcome::Loaded(record) => {
                form.load_record(record);
                wizard.loaded_for_update();
                None
            }
            Outcome::Rejected(notice) | Outcome::Failed { notice, .. } => Some(notice),
            Outcome::Cancelled => None,
        }
    }
}

/// Course lookup result. Failures collapse to an empty list; `error` is kept
/// for logging only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Suggestions {
    pub items: Vec<CourseSuggestion>,
    pub error: Option<ApiError>,
}

pub async fn suggest_courses<A: StudentApi>(api: &A, text: &str) -> Suggestions {
    match api.search_courses(text).await {
        Ok(items) => Suggestions { items, error: None },
        Err(error) => Suggestions {
            items: Vec::new(),
            error: Some(error),
        },
    }
}

/// Loads the record whose registration number is in the form.
pub async fn search<A: StudentApi>(api: &A, form: &CertificateForm) -> Outcome {
    match api.find_student(&form.reg_no).await {
        Ok(record) => Outcome::Loaded(record),
        Err(ApiError::NotFound) => Outcome::Failed {
            notice: Notice::StudentNotFound,
            cause: ApiError::NotFound,
        },
        Err(cause) => Outcome::Failed {
            notice: Notice::FetchFailed,
            cause,
        },
    }
}

/// Creates a new record: validate, check uniqueness, stamp a certificate
/// number, then post.
pub async fn submit<A: StudentApi>(api: &A, form: &CertificateForm) -> Outcome {
    let missing = form.missing_required_fields();
    if !missing.is_empty() {
        return Outcome::Rejected(Notice::MissingFields(missing));
    }

    match api.regno_exists(&form.reg_no).await {
        Ok(false) => {}
        Ok(true) => return Outcome::Rejected(Notice::DuplicateRegNo),
        Err(cause) => {
            return Outcome::Failed {
                notice: Notice::VerificationFailed,
                cause,
            };
        }
    }

    let certificate_number =
        generate_certificate_number(&form.full_name, &form.reg_no, &form.course_code);
    let submission = form.submission(Some(&certificate_number));

    match api.create_student(&submission).await {
        Ok(response) => Outcome::Completed {
            notice: Notice::Created,
            response,
        },
        Err(cause) => Outcome::Failed {
            notice: Notice::SubmitFailed,
            cause,
        },
    }
}

/// Updates the loaded record in place. The registration number is the key
/// and the certificate number is carried over unchanged.
pub async fn update<A: StudentApi>(api: &A, form: &CertificateForm) -> Outcome {
    let submission = form.submission(form.certificate_number.as_deref());

    match api.update_student(&form.reg_no, &submission).await {
        Ok(response) => Outcome::Completed {
            notice: Notice::Updated,
            response,
        },
        Err(cause) => Outcome::Failed {
            notice: Notice::UpdateFailed,
            cause,
        },
    }
}

/// Deletes the record after `confirm` approves [`DELETE_PROMPT`].
pub async fn delete<A, F>(api: &A, form: &CertificateForm, confirm: F) -> Outcome
where
    A: StudentApi,
    F: FnOnce(&str) -> bool,
{
    if form.reg_no.is_empty() {
        return Outcome::Rejected(Notice::RegNoRequired);
    }
    if !confirm(DELETE_PROMPT) {
        return Outcome::Cancelled;
    }

    match api.delete_student(&form.reg_no).await {
        Ok(response) => Outcome::Completed {
            notice: Notice::Deleted,
            response,
        },
        Err(cause) => Outcome::Failed {
            notice: Notice::DeleteFailed,
            cause,
        },
    }
}
