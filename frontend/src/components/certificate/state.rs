//! Runtime state of the certificate form.
//!
//! Besides the domain state from `common` (form fields and wizard), the
//! component owns the browser resources tied to its lifetime: the preview
//! object URL, the document-level click listener and the DOM refs the view
//! binds to.

use common::config::ApiConfig;
use common::form::{CertificateForm, PreviewSource};
use common::latest::{LatestList, RequestGeneration};
use common::model::course::CourseSuggestion;
use common::wizard::WizardState;
use gloo_file::ObjectUrl;
use yew::prelude::*;

use super::http::HttpStudentApi;
use super::outside_click::OutsideClickListener;

pub struct CertificateFormComponent {
    /// Field values, attachment and stored file reference.
    pub form: CertificateForm,

    pub wizard: WizardState,

    /// Items shown under the course code input. Only the latest keystroke's
    /// lookup may fill it.
    pub suggestions: LatestList<CourseSuggestion>,

    /// Stamps searches; a reset also invalidates an in-flight search.
    pub search_generation: RequestGeneration,

    /// Object URL of the attached file. Replacing or dropping it revokes the
    /// previous URL, so at most one is alive.
    pub preview: Option<ObjectUrl>,

    pub api: HttpStudentApi,

    /// Wraps the course input and its dropdown; clicks outside it close the list.
    pub course_ref: NodeRef,

    /// Hidden `<input type="file">` opened by clicking the preview.
    pub file_input_ref: NodeRef,

    /// Removed from the document when dropped.
    pub outside_click: Option<OutsideClickListener>,
}

impl CertificateFormComponent {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            form: CertificateForm::default(),
            wizard: WizardState::default(),
            suggestions: LatestList::default(),
            search_generation: RequestGeneration::default(),
            preview: None,
            api: HttpStudentApi::new(config),
            course_ref: NodeRef::default(),
            file_input_ref: NodeRef::default(),
            outside_click: None,
        }
    }

    /// Image source for the preview, if there is one.
    pub fn preview_url(&self) -> Option<String> {
        match self.form.preview_source(self.api.config()) {
            PreviewSource::Local(_) => self.preview.as_ref().map(|url| url.to_string()),
            PreviewSource::Stored(url) => Some(url),
            PreviewSource::Empty => None,
        }
    }

    /// Drops the object URL once the form no longer holds a local attachment.
    pub fn sync_preview(&mut self) {
        if self.form.attachment.is_none() {
            self.preview = None;
        }
    }

    /// Back to a blank form at step 1, discarding every pending lookup.
    pub fn clear(&mut self) {
        self.form.reset();
        self.wizard.reset();
        self.suggestions.dismiss();
        self.search_generation.invalidate();
        self.preview = None;
        if let Some(input) = self.file_input_ref.cast::<web_sys::HtmlInputElement>() {
            input.set_value("");
        }
    }
}
