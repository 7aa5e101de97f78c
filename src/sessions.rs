use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;
use uuid::Uuid;

use crate::composer::OrderComposer;

pub type Session = Arc<Mutex<OrderComposer>>;

struct Entry {
    session: Session,
    touched: Instant,
}

/// Open food details screens. Each screen sits behind its own mutex so its
/// gestures are handled one at a time. Screens nobody touched for
/// `idle_ttl` are dropped.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Entry>>>,
    idle_ttl: Duration,
}

impl SessionStore {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            idle_ttl,
        }
    }

    pub async fn open(&self, composer: OrderComposer) -> Uuid {
        self.prune().await;
        let id = Uuid::new_v4();
        self.inner.write().await.insert(
            id,
            Entry {
                session: Arc::new(Mutex::new(composer)),
                touched: Instant::now(),
            },
        );
        id
    }

    /// Looks a session up and marks it as used.
    pub async fn get(&self, id: Uuid) -> Option<Session> {
        let mut sessions = self.inner.write().await;
        let entry = sessions.get_mut(&id)?;
        if entry.touched.elapsed() > self.idle_ttl {
            sessions.remove(&id);
            return None;
        }
        entry.touched = Instant::now();
        Some(entry.session.clone())
    }

    pub async fn close(&self, id: Uuid) -> bool {
        self.inner.write().await.remove(&id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Drops idle sessions, returns how many went away.
    pub async fn prune(&self) -> usize {
        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        let ttl = self.idle_ttl;
        sessions.retain(|_, e| e.touched.elapsed() <= ttl);
        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!(evicted, remaining = sessions.len(), "idle sessions evicted");
        }
        evicted
    }

    /// Background sweep so abandoned screens go away even when no new ones
    /// are opened.
    pub fn spawn_sweeper(&self) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut tick = tokio::time::interval(store.idle_ttl);
            loop {
                tick.tick().await;
                store.prune().await;
            }
        })
    }
}

#[cfg(test)]
mod session_tests {
    use super::*;

    fn store() -> SessionStore {
        SessionStore::new(Duration::from_secs(60))
    }

    #[tokio::test]
    async fn open_get_close() {
        let store = store();
        let id = store.open(OrderComposer::empty()).await;
        assert_eq!(store.len().await, 1);

        let session = store.get(id).await.expect("session exists");
        session.lock().await.increment_food();
        let again = store.get(id).await.unwrap();
        assert_eq!(again.lock().await.food_quantity(), 2);

        assert!(store.close(id).await);
        assert!(!store.close(id).await);
        assert!(store.get(id).await.is_none());
    }

    #[tokio::test]
    async fn sessions_are_independent() {
        let store = store();
        let a = store.open(OrderComposer::empty()).await;
        let b = store.open(OrderComposer::empty()).await;
        assert_ne!(a, b);
        store.get(a).await.unwrap().lock().await.increment_food();
        assert_eq!(store.get(b).await.unwrap().lock().await.food_quantity(), 1);
    }

    #[tokio::test]
    async fn idle_sessions_are_evicted_after_ttl() {
        let store = SessionStore::new(Duration::from_millis(50));
        let idle = store.open(OrderComposer::empty()).await;
        tokio::time::sleep(Duration::from_millis(120)).await;

        assert_eq!(store.prune().await, 1);
        assert_eq!(store.len().await, 0);
        assert!(store.get(idle).await.is_none());
    }

    #[tokio::test]
    async fn expired_session_is_gone_on_lookup() {
        let store = SessionStore::new(Duration::from_millis(50));
        let idle = store.open(OrderComposer::empty()).await;
        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(store.get(idle).await.is_none());
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn touching_a_session_keeps_it_alive() {
        let store = SessionStore::new(Duration::from_millis(200));
        let busy = store.open(OrderComposer::empty()).await;
        for _ in 0..4 {
            tokio::time::sleep(Duration::from_millis(80)).await;
            assert!(store.get(busy).await.is_some());
        }
        assert_eq!(store.prune().await, 0);
    }

    #[tokio::test]
    async fn sweeper_evicts_without_new_sessions() {
        let store = SessionStore::new(Duration::from_millis(50));
        store.open(OrderComposer::empty()).await;
        let sweeper = store.spawn_sweeper();
        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(store.len().await, 0);
        sweeper.abort();
    }
}
