//! Session store trait definition.
//!
//! An injected store abstraction keyed by session id, so the in-memory map
//! can be swapped for a real persistence layer or sharded cache without
//! touching the state machine. Implementations live in intervia-infra.

use std::sync::Arc;

use tokio::sync::Mutex;

use intervia_types::interview::Session;

/// Handle to one stored session.
///
/// The mutex is the per-key serialization point: the engine holds it
/// across the full read-mutate-write cycle of `submit_answer`, including
/// the model-call await points, so at most one mutation per session id is
/// ever in flight. No cross-session locking exists.
pub type SharedSession = Arc<Mutex<Session>>;

/// Mapping from session identifier to session state.
///
/// Lifecycle is the process lifetime; no persistence is guaranteed.
pub trait SessionStore: Send + Sync {
    /// Store a new session, returning its shared handle.
    fn insert(
        &self,
        session: Session,
    ) -> impl std::future::Future<Output = SharedSession> + Send;

    /// Look up a session by id.
    fn get(&self, id: &str) -> impl std::future::Future<Output = Option<SharedSession>> + Send;

    /// Remove a session by id, returning whether it existed.
    fn remove(&self, id: &str) -> impl std::future::Future<Output = bool> + Send;

    /// Number of live sessions.
    fn len(&self) -> impl std::future::Future<Output = usize> + Send;
}
