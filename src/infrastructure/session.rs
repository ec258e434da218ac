//! Session management for active assessment sessions
//!
//! Sessions are held in memory for their whole lifetime: an abandoned or
//! exited session is simply dropped, answers and all. There is no autosave
//! contract; only the final template records are durable.

use std::collections::HashMap;

use crate::domain::aggregates::AssessmentSession;
use crate::domain::value_objects::SessionId;

/// In-memory registry of live assessment sessions
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: HashMap<SessionId, AssessmentSession>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a freshly started session under a new id
    pub fn insert(&mut self, session: AssessmentSession) -> SessionId {
        let id = SessionId::new();
        self.sessions.insert(id, session);
        id
    }

    pub fn get(&self, id: SessionId) -> Option<&AssessmentSession> {
        self.sessions.get(&id)
    }

    pub fn get_mut(&mut self, id: SessionId) -> Option<&mut AssessmentSession> {
        self.sessions.get_mut(&id)
    }

    /// Drop a session and everything it accumulated
    pub fn remove(&mut self, id: SessionId) -> Option<AssessmentSession> {
        self.sessions.remove(&id)
    }

    pub fn active_count(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Subject;
    use crate::domain::value_objects::{AgeBand, ChallengeCategory, Gender};

    #[test]
    fn removed_sessions_are_gone() {
        let mut manager = SessionManager::new();
        let subject = Subject::new("Alex", Gender::Male, AgeBand::Preschool).unwrap();
        let session =
            AssessmentSession::new(subject, vec![ChallengeCategory::Communication]).unwrap();

        let id = manager.insert(session);
        assert!(manager.get(id).is_some());
        assert_eq!(manager.active_count(), 1);

        manager.remove(id);
        assert!(manager.get(id).is_none());
        assert_eq!(manager.active_count(), 0);
    }
}
