pub mod draft;
pub mod form;

pub use draft::{parse_child_age, DraftField, MessageDraft};
pub use form::SubmissionForm;
