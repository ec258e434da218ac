//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Question, Subject, TemplateQuestion, TemplateDraft
//! - Value Objects: ids, ChallengeCategory, AgeBand, Gender, QuestionType
//! - Aggregates: AssessmentSession
//! - Domain Services: step machine, answer sheet, schema store, summary

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod services;
pub mod value_objects;
