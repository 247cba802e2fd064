pub mod document;
mod form;
mod store;

pub use form::{RubricForm, Submission, SubmitBlocked};
pub use store::{FormStore, FORM_TTL, MAX_FORMS};
