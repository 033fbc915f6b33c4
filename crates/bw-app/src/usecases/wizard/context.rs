use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};
use bw_core::{WillRecord, WizardSession, WizardState};

/// Shared wizard context containing the session and the dispatch lock.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `session`.
/// - `dispatch_lock`: serializes every mutation of the session.
/// - `session`: used for both reading (`get_state`) and writing.
///
/// Neither lock is held across a wallet signature or a settlement wait.
/// Work resumed after such a wait must check [`WizardContext::generation`]
/// first; a session ended in the meantime turns the resumed work into a no-op.
pub struct WizardContext {
    session: Arc<Mutex<WizardSession>>,
    dispatch_lock: Arc<Mutex<()>>,
    generation: AtomicU64,
}

impl WizardContext {
    pub fn new(will_record: WillRecord) -> Self {
        Self {
            session: Arc::new(Mutex::new(WizardSession::new(will_record))),
            dispatch_lock: Arc::new(Mutex::new(())),
            generation: AtomicU64::new(0),
        }
    }

    /// Returns the context wrapped in Arc for shared ownership.
    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub async fn get_state(&self) -> WizardState {
        self.session.lock().await.state().clone()
    }

    /// This is a lightweight read operation that does NOT acquire `dispatch_lock`.
    pub async fn session(&self) -> MutexGuard<'_, WizardSession> {
        self.session.lock().await
    }

    pub async fn acquire_dispatch_lock(&self) -> MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Replace the session with a fresh one and invalidate in-flight work.
    ///
    /// This should only be called after acquiring `dispatch_lock`.
    pub async fn reset(&self, will_record: WillRecord) {
        let mut guard = self.session.lock().await;
        *guard = WizardSession::new(will_record);
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}
