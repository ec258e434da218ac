//! Domain entities - core business objects with identity

mod question;
mod subject;
mod template_draft;
mod template_question;

pub use question::{Question, BOOLEAN_OPTIONS, RATING_MAX, RATING_MIN};
pub use subject::Subject;
pub use template_draft::{DraftStep, TemplateDraft, MIN_RADIO_OPTIONS};
pub use template_question::TemplateQuestion;
