//! Session Service - Application service for the assessment session flow
//!
//! Drives live sessions through their category pages: start, record
//! answers, advance towards the summary, retreat back out. Sessions live
//! only in the in-memory manager; exiting or abandoning one discards its
//! state entirely.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use crate::domain::aggregates::AssessmentSession;
use crate::domain::entities::{Question, Subject};
use crate::domain::error::DomainError;
use crate::domain::services::{Advance, AssessmentSummary, Retreat, SchemaStore};
use crate::domain::value_objects::{ChallengeCategory, SessionId};
use crate::infrastructure::session::SessionManager;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session {0} not found")]
    NotFound(SessionId),
    #[error("session has not reached its summary yet")]
    NotComplete,
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// One recorded answer on the current page
#[derive(Debug, Clone)]
pub struct RecordedAnswer {
    pub question_id: String,
    pub value: String,
}

/// Everything a client needs to render the current category page
#[derive(Debug, Clone)]
pub struct SessionPage {
    pub session_id: SessionId,
    pub subject: Subject,
    pub category: ChallengeCategory,
    pub category_index: usize,
    pub category_count: usize,
    pub questions: Vec<Question>,
    pub answers: Vec<RecordedAnswer>,
}

/// Where a navigation operation landed
#[derive(Debug, Clone)]
pub enum SessionProgress {
    Page(SessionPage),
    Summary(AssessmentSummary),
    /// Retreated past the first category; the session has been discarded
    Exited,
}

/// Session service trait defining the assessment flow use cases
#[async_trait]
pub trait SessionService: Send + Sync {
    /// Start a session and return its first category page
    async fn start(
        &self,
        subject: Subject,
        categories: Vec<ChallengeCategory>,
    ) -> Result<SessionPage, SessionError>;

    /// Current position: the active page, or the summary once complete
    async fn current(&self, id: SessionId) -> Result<SessionProgress, SessionError>;

    /// Record an answer on the current page
    async fn record_answer(
        &self,
        id: SessionId,
        question_id: &str,
        value: &str,
    ) -> Result<(), SessionError>;

    /// Move to the next category, or to the summary from the last one
    async fn advance(&self, id: SessionId) -> Result<SessionProgress, SessionError>;

    /// Move back one category; retreating from the first discards the session
    async fn retreat(&self, id: SessionId) -> Result<SessionProgress, SessionError>;

    /// The final transcript; only available once the session is complete
    async fn summary(&self, id: SessionId) -> Result<AssessmentSummary, SessionError>;

    /// Drop an in-progress session without persisting anything
    async fn abandon(&self, id: SessionId) -> Result<(), SessionError>;
}

/// Default implementation over the in-memory session manager
#[derive(Clone)]
pub struct SessionServiceImpl {
    sessions: Arc<RwLock<SessionManager>>,
    schema: Arc<SchemaStore>,
}

impl SessionServiceImpl {
    pub fn new(sessions: Arc<RwLock<SessionManager>>, schema: Arc<SchemaStore>) -> Self {
        Self { sessions, schema }
    }

    fn page_of(&self, id: SessionId, session: &AssessmentSession) -> SessionPage {
        let questions = session.current_questions(&self.schema).to_vec();
        let answers = questions
            .iter()
            .filter_map(|q| {
                session.answers().get(&q.id).map(|value| RecordedAnswer {
                    question_id: q.id.clone(),
                    value: value.to_string(),
                })
            })
            .collect();
        SessionPage {
            session_id: id,
            subject: session.subject().clone(),
            category: session.current_category(),
            category_index: session.category_index(),
            category_count: session.category_count(),
            questions,
            answers,
        }
    }

    fn progress_of(&self, id: SessionId, session: &AssessmentSession) -> SessionProgress {
        if session.is_complete() {
            SessionProgress::Summary(session.summary(&self.schema))
        } else {
            SessionProgress::Page(self.page_of(id, session))
        }
    }
}

#[async_trait]
impl SessionService for SessionServiceImpl {
    #[instrument(skip(self, subject), fields(name = %subject.name))]
    async fn start(
        &self,
        subject: Subject,
        categories: Vec<ChallengeCategory>,
    ) -> Result<SessionPage, SessionError> {
        let session = AssessmentSession::new(subject, categories)?;
        let mut sessions = self.sessions.write().await;
        let id = sessions.insert(session);
        info!(session_id = %id, "Assessment session started");
        let page = sessions
            .get(id)
            .map(|session| self.page_of(id, session))
            .ok_or(SessionError::NotFound(id))?;
        Ok(page)
    }

    #[instrument(skip(self))]
    async fn current(&self, id: SessionId) -> Result<SessionProgress, SessionError> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(id).ok_or(SessionError::NotFound(id))?;
        Ok(self.progress_of(id, session))
    }

    #[instrument(skip(self, value))]
    async fn record_answer(
        &self,
        id: SessionId,
        question_id: &str,
        value: &str,
    ) -> Result<(), SessionError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(id).ok_or(SessionError::NotFound(id))?;
        session.record_answer(&self.schema, question_id, value)?;
        debug!(session_id = %id, question_id, "Answer recorded");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn advance(&self, id: SessionId) -> Result<SessionProgress, SessionError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(id).ok_or(SessionError::NotFound(id))?;
        match session.advance()? {
            Advance::Finished => {
                info!(session_id = %id, "Session reached its summary");
            }
            Advance::Moved => {
                debug!(session_id = %id, index = session.category_index(), "Advanced to next category");
            }
            // Category pages have no gate, so Blocked cannot happen here
            Advance::Blocked => {}
        }
        Ok(self.progress_of(id, session))
    }

    #[instrument(skip(self))]
    async fn retreat(&self, id: SessionId) -> Result<SessionProgress, SessionError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(id).ok_or(SessionError::NotFound(id))?;
        match session.retreat()? {
            Retreat::Exited => {
                sessions.remove(id);
                info!(session_id = %id, "Session exited and discarded");
                Ok(SessionProgress::Exited)
            }
            Retreat::Moved => Ok(SessionProgress::Page(self.page_of(id, session))),
        }
    }

    #[instrument(skip(self))]
    async fn summary(&self, id: SessionId) -> Result<AssessmentSummary, SessionError> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(id).ok_or(SessionError::NotFound(id))?;
        if !session.is_complete() {
            return Err(SessionError::NotComplete);
        }
        Ok(session.summary(&self.schema))
    }

    #[instrument(skip(self))]
    async fn abandon(&self, id: SessionId) -> Result<(), SessionError> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(id).ok_or(SessionError::NotFound(id))?;
        info!(session_id = %id, "Session abandoned");
        Ok(())
    }
}
