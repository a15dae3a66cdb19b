//! In-memory session store.
//!
//! DashMap-backed implementation of [`SessionStore`]: sessions live for
//! the process lifetime and are abandoned on restart. Each entry hands out
//! an `Arc<tokio::sync::Mutex<Session>>` so callers serialize their
//! read-mutate-write cycles per session key.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

use intervia_core::store::{SessionStore, SharedSession};
use intervia_types::interview::Session;

/// Process-lifetime session mapping.
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: DashMap<String, SharedSession>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    async fn insert(&self, session: Session) -> SharedSession {
        let id = session.id.clone();
        let shared = Arc::new(Mutex::new(session));
        self.sessions.insert(id.clone(), shared.clone());
        tracing::debug!(interview_id = %id, live_sessions = self.sessions.len(), "session stored");
        shared
    }

    async fn get(&self, id: &str) -> Option<SharedSession> {
        self.sessions.get(id).map(|entry| entry.value().clone())
    }

    async fn remove(&self, id: &str) -> bool {
        self.sessions.remove(id).is_some()
    }

    async fn len(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use intervia_types::interview::InterviewMode;

    fn session() -> Session {
        Session::new("SE", "Tech", InterviewMode::Technical, "Q1")
    }

    #[tokio::test]
    async fn test_insert_then_get_returns_same_session() {
        let store = MemorySessionStore::new();
        let stored = store.insert(session()).await;
        let id = stored.lock().await.id.clone();

        let fetched = store.get(&id).await.expect("session present");
        assert!(Arc::ptr_eq(&stored, &fetched));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        let store = MemorySessionStore::new();
        assert!(store.get("missing").await.is_none());
    }

    #[tokio::test]
    async fn test_remove_reports_existence() {
        let store = MemorySessionStore::new();
        let stored = store.insert(session()).await;
        let id = stored.lock().await.id.clone();

        assert!(store.remove(&id).await);
        assert!(!store.remove(&id).await);
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_mutation_through_handle_is_visible_to_later_reads() {
        let store = MemorySessionStore::new();
        let stored = store.insert(session()).await;
        let id = stored.lock().await.id.clone();

        stored.lock().await.advance("Q2");

        let fetched = store.get(&id).await.unwrap();
        let guard = fetched.lock().await;
        assert_eq!(guard.current_question, "Q2");
        assert_eq!(guard.current_question_number, 2);
    }

    #[tokio::test]
    async fn test_per_key_mutex_serializes_writers() {
        let store = MemorySessionStore::new();
        let stored = store.insert(session()).await;
        let id = stored.lock().await.id.clone();

        let first = store.get(&id).await.unwrap();
        let guard = first.lock().await;

        // A second writer cannot take the lock while the first holds it
        let second = store.get(&id).await.unwrap();
        assert!(second.try_lock().is_err());

        drop(guard);
        assert!(second.try_lock().is_ok());
    }
}
