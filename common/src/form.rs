//! In-memory state of the certificate form.
//!
//! `CertificateForm` is the single mutable object the UI edits. It knows which
//! fields are required, how a fetched record is merged in, what the multipart
//! payload looks like and where the preview image comes from. It holds no
//! browser resources; the frontend maps [`PreviewSource::Local`] to an object
//! URL itself.

use crate::config::ApiConfig;
use crate::model::attachment::Attachment;
use crate::model::student::StudentRecord;

/// Multipart/JSON name of the attachment part.
pub const FILE_FIELD: &str = "file";

/// Multipart name of the generated certificate number.
pub const CERTIFICATE_NUMBER_FIELD: &str = "certificateNumber";

/// The editable text fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    RegNo,
    Email,
    CourseCode,
    TrainerName,
    WhatsappNumber,
    Date,
    Branch,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::FullName,
        Field::RegNo,
        Field::Email,
        Field::CourseCode,
        Field::TrainerName,
        Field::WhatsappNumber,
        Field::Date,
        Field::Branch,
    ];

    /// Wire name, also used as the HTML `name` attribute.
    pub fn name(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::RegNo => "regNo",
            Field::Email => "email",
            Field::CourseCode => "courseCode",
            Field::TrainerName => "trainerName",
            Field::WhatsappNumber => "whatsappNumber",
            Field::Date => "date",
            Field::Branch => "branch",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::RegNo => "Reg. No",
            Field::Email => "Email",
            Field::CourseCode => "Course Code",
            Field::TrainerName => "Trainer Name",
            Field::WhatsappNumber => "WhatsApp Number",
            Field::Date => "Date",
            Field::Branch => "Branch",
        }
    }

    /// HTML `type` attribute of the matching `<input>`.
    pub fn input_type(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::WhatsappNumber => "tel",
            Field::Date => "date",
            _ => "text",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.name() == name)
    }
}

/// Where the preview image comes from. A fresh attachment always wins over a
/// stored file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewSource<'a> {
    Local(&'a Attachment),
    Stored(String),
    Empty,
}

/// Multipart payload for create and update requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Text parts in send order.
    pub fields: Vec<(&'static str, String)>,
    /// Sent as the `file` part when present.
    pub file: Option<Attachment>,
}

impl Submission {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificateForm {
    pub full_name: String,
    pub reg_no: String,
    pub email: String,
    pub course_code: String,
    pub trainer_name: String,
    pub whatsapp_number: String,
    pub date: String,
    pub branch: String,
    /// File picked in this session, if any.
    pub attachment: Option<Attachment>,
    /// Server path of the stored upload of a loaded record.
    pub file_path: String,
    /// File name shown next to the preview.
    pub image_name: String,
    /// Certificate number of a loaded record. Sent back untouched on update.
    pub certificate_number: Option<String>,
}

impl CertificateForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::RegNo => &self.reg_no,
            Field::Email => &self.email,
            Field::CourseCode => &self.course_code,
            Field::TrainerName => &self.trainer_name,
            Field::WhatsappNumber => &self.whatsapp_number,
            Field::Date => &self.date,
            Field::Branch => &self.branch,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FullName => &mut self.full_name,
            Field::RegNo => &mut self.reg_no,
            Field::Email => &mut self.email,
            Field::CourseCode => &mut self.course_code,
            Field::TrainerName => &mut self.trainer_name,
            Field::WhatsappNumber => &mut self.whatsapp_number,
            Field::Date => &mut self.date,
            Field::Branch => &mut self.branch,
        };
        *slot = value.into();
    }

    pub fn attach(&mut self, attachment: Attachment) {
        self.image_name = attachment.name.clone();
        self.attachment = Some(attachment);
    }

    /// Names of required inputs that are still empty, in form order. The
    /// attachment is reported as `file`.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing: Vec<&'static str> = Field::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .map(Field::name)
            .collect();
        if self.attachment.is_none() {
            missing.push(FILE_FIELD);
        }
        missing
    }

    /// Merges a fetched record into the form, switching the preview over to
    /// the stored upload. Text fields the record leaves out keep their
    /// current value; the stored file reference is always replaced.
    pub fn load_record(&mut self, record: StudentRecord) {
        let StudentRecord {
            full_name,
            reg_no,
            email,
            course_code,
            trainer_name,
            whatsapp_number,
            date,
            branch,
            file_path,
            certificate_number,
        } = record;

        let present = [
            (Field::FullName, full_name),
            (Field::RegNo, reg_no),
            (Field::Email, email),
            (Field::CourseCode, course_code),
            (Field::TrainerName, trainer_name),
            (Field::WhatsappNumber, whatsapp_number),
            (Field::Date, date),
            (Field::Branch, branch),
        ];
        for (field, value) in present {
            if let Some(value) = value {
                self.set(field, value);
            }
        }
        if certificate_number.is_some() {
            self.certificate_number = certificate_number;
        }

        let file_path = file_path.unwrap_or_default();
        self.attachment = None;
        self.image_name = file_name_of(&file_path).to_string();
        self.file_path = file_path;
    }

    /// Builds the multipart payload. `file_path` is tracking state and never sent.
    pub fn submission(&self, certificate_number: Option<&str>) -> Submission {
        let mut fields: Vec<(&'static str, String)> = Field::ALL
            .into_iter()
            .map(|field| (field.name(), self.get(field).to_string()))
            .collect();
        if let Some(number) = certificate_number {
            fields.push((CERTIFICATE_NUMBER_FIELD, number.to_string()));
        }
        Submission {
            fields,
            file: self.attachment.clone(),
        }
    }

    pub fn preview_source(&self, config: &ApiConfig) -> PreviewSource<'_> {
        match (&self.attachment, self.file_path.is_empty()) {
            (Some(attachment), _) => PreviewSource::Local(attachment),
            (None, false) => PreviewSource::Stored(config.upload_url(&self.file_path)),
            (None, true) => PreviewSource::Empty,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Last `/`-separated segment of a stored path.
pub fn file_name_of(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> CertificateForm {
        let mut form = CertificateForm::default();
        for field in Field::ALL {
            form.set(field, format!("{}-value", field.name()));
        }
        form.attach(Attachment::new("cert.png", "image/png", vec![1, 2, 3]));
        form
    }

    fn record() -> StudentRecord {
        StudentRecord {
            full_name: Some("Asha Rao".into()),
            reg_no: Some("R100".into()),
            email: Some("asha@example.com".into()),
            course_code: Some("CS101".into()),
            trainer_name: Some("Vik".into()),
            whatsapp_number: Some("9999".into()),
            date: Some("2024-05-01".into()),
            branch: Some("Kochi".into()),
            file_path: Some("uploads/2024/asha.png".into()),
            certificate_number: Some("18B5FF33876A2QTU".into()),
        }
    }

    #[test]
    fn field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("filePath"), None);
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let form = CertificateForm::default();
        assert_eq!(
            form.missing_required_fields(),
            vec![
                "fullName",
                "regNo",
                "email",
                "courseCode",
                "trainerName",
                "whatsappNumber",
                "date",
                "branch",
                "file"
            ]
        );
    }

    #[test]
    fn missing_fields_equal_the_empty_ones() {
        let mut form = filled();
        assert!(form.missing_required_fields().is_empty());

        form.set(Field::Email, "");
        form.set(Field::Branch, "");
        assert_eq!(form.missing_required_fields(), vec!["email", "branch"]);
    }

    #[test]
    fn missing_attachment_is_reported_as_file() {
        let mut form = filled();
        form.attachment = None;
        assert_eq!(form.missing_required_fields(), vec!["file"]);
    }

    #[test]
    fn load_record_switches_preview_to_stored_file() {
        let mut form = filled();
        form.load_record(record());

        assert_eq!(form.full_name, "Asha Rao");
        assert_eq!(form.attachment, None);
        assert_eq!(form.file_path, "uploads/2024/asha.png");
        assert_eq!(form.image_name, "asha.png");
        assert_eq!(form.certificate_number.as_deref(), Some("18B5FF33876A2QTU"));

        let config = ApiConfig::new("http://api");
        assert_eq!(
            form.preview_source(&config),
            PreviewSource::Stored("http://api/uploads/uploads/2024/asha.png".into())
        );
    }

    #[test]
    fn partial_record_keeps_fields_it_leaves_out() {
        let mut form = CertificateForm::default();
        form.set(Field::FullName, "Asha Rao");
        form.set(Field::Branch, "Kochi");
        form.file_path = "uploads/old.png".into();
        form.attach(Attachment::new("cert.png", "image/png", vec![1]));

        let partial: StudentRecord =
            serde_json::from_str(r#"{"regNo":"R7","email":"a@b.c"}"#).unwrap();
        form.load_record(partial);

        assert_eq!(form.reg_no, "R7");
        assert_eq!(form.email, "a@b.c");
        assert_eq!(form.full_name, "Asha Rao");
        assert_eq!(form.branch, "Kochi");
        assert_eq!(form.attachment, None);
        assert_eq!(form.file_path, "");
        assert_eq!(form.image_name, "");
    }

    #[test]
    fn fresh_attachment_beats_stored_file() {
        let mut form = CertificateForm::default();
        form.load_record(record());
        form.attach(Attachment::new("new.jpg", "image/jpeg", vec![9]));

        let config = ApiConfig::default();
        match form.preview_source(&config) {
            PreviewSource::Local(attachment) => assert_eq!(attachment.name, "new.jpg"),
            other => panic!("expected local preview, got {other:?}"),
        }
        assert_eq!(form.image_name, "new.jpg");
    }

    #[test]
    fn no_file_means_no_preview() {
        let form = CertificateForm::default();
        assert_eq!(form.preview_source(&ApiConfig::default()), PreviewSource::Empty);
    }

    #[test]
    fn submission_excludes_file_path_and_appends_certificate_number() {
        let mut form = filled();
        form.file_path = "uploads/old.png".into();

        let submission = form.submission(Some("ABCDEF0123456789"));

        assert_eq!(submission.fields.len(), 9);
        assert_eq!(submission.field("fullName"), Some("fullName-value"));
        assert_eq!(submission.field("certificateNumber"), Some("ABCDEF0123456789"));
        assert_eq!(submission.field("filePath"), None);
        assert_eq!(submission.field("file"), None);
        assert_eq!(submission.file.as_ref().map(|f| f.name.as_str()), Some("cert.png"));
    }

    #[test]
    fn submission_without_attachment_has_no_file_part() {
        let mut form = CertificateForm::default();
        form.load_record(record());
        let submission = form.submission(None);
        assert_eq!(submission.file, None);
        assert_eq!(submission.fields.len(), 8);
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = filled();
        form.load_record(record());
        form.reset();
        assert!(form.is_empty());
    }

    #[test]
    fn file_name_of_plain_name() {
        assert_eq!(file_name_of("asha.png"), "asha.png");
        assert_eq!(file_name_of(""), "");
        assert_eq!(file_name_of("a/b/"), "");
    }
}
