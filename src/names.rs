use ulid::Ulid;

use crate::models::QuestionField;

pub const HOME_URL: &str = "/";
pub const AUTOGRADER_URL: &str = "/autograder";
pub const SET_LOCALE_URL: &str = "/set-locale";

pub fn add_question_url(form_id: Ulid) -> String {
    format!("/rubric/{form_id}/questions")
}

pub fn question_url(form_id: Ulid, index: usize) -> String {
    format!("/rubric/{form_id}/questions/{index}")
}

pub fn question_field_url(form_id: Ulid, index: usize, field: QuestionField) -> String {
    format!("/rubric/{form_id}/questions/{index}/{}", field.as_str())
}

pub fn submission_url(form_id: Ulid) -> String {
    format!("/rubric/{form_id}/submission")
}

pub fn submit_url(form_id: Ulid) -> String {
    format!("/rubric/{form_id}/submit")
}

pub fn rubric_download_url(form_id: Ulid) -> String {
    format!("/rubric/{form_id}/rubric.docx")
}

pub fn export_url(form_id: Ulid) -> String {
    format!("/rubric/{form_id}/export")
}

pub fn home_section_url(section_id: &str) -> String {
    format!("/?section={section_id}")
}

// Navigation
pub const NAVBAR_OFFSET_PX: u32 = 70;

// Documents
pub const RUBRIC_FILE_NAME: &str = "rubric.docx";
pub const EXPORT_FILE_NAME: &str = "GPT_Response.docx";
pub const DOCX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const RUBRIC_TITLE: &str = "Rubric Questions";

// Multipart parts sent to the grading endpoint
pub const RUBRIC_PART: &str = "rubric";
pub const SUBMISSION_PART: &str = "submission";

// Defaults
pub const DEFAULT_GRADING_URL: &str = "http://localhost:4000/grade";
pub const DEFAULT_ADDRESS: &str = "127.0.0.1:1414";

// i18n
pub const LOCALE_COOKIE_NAME: &str = "lang";
pub const DEFAULT_LOCALE: &str = "en";
