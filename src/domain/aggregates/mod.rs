//! Domain aggregates - consistency boundaries owning related state

mod assessment_session;

pub use assessment_session::AssessmentSession;
