//! Domain services - pure business logic operations

mod answer_sheet;
mod schema_store;
mod step_machine;
mod summary;

pub use answer_sheet::AnswerSheet;
pub use schema_store::SchemaStore;
pub use step_machine::{Advance, Retreat, StepMachine};
pub use summary::{build_summary, AssessmentSummary, SummaryEntry};
