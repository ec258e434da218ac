//! Application services - use case implementations over ports and domain logic

mod session_service;
mod template_service;

pub use session_service::{
    RecordedAnswer, SessionError, SessionPage, SessionProgress, SessionService, SessionServiceImpl,
};
pub use template_service::{TemplateError, TemplateService, TemplateServiceImpl};
