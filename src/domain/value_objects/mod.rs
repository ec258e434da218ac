//! Domain value objects - ids and the closed vocabularies of the intake form

mod age_band;
mod category;
mod gender;
mod ids;
mod question_type;

pub use age_band::AgeBand;
pub use category::ChallengeCategory;
pub use gender::Gender;
pub use ids::{SessionId, TemplateQuestionId};
pub use question_type::QuestionType;
