//! Expiration Sweeper Task
//!
//! Background task that performs eager TTL expiration: every tick it removes
//! all currently-stale entries, bounding the memory held by entries nobody
//! reads again.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::cache::CacheStore;

/// Spawns the periodic expiration sweeper.
///
/// The task loops forever: sleep for `interval`, then run one sweep pass
/// under the store's write lock. Each pass executes in its own spawned task
/// so a panicking pass surfaces as a `JoinError` that is logged; the loop
/// itself keeps ticking no matter what a single pass does.
///
/// The returned `JoinHandle` is the only way to stop the sweeper; the engine
/// aborts it on shutdown.
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(CacheStore::new(512, Duration::from_secs(3600))));
/// let sweeper = spawn_sweeper(store.clone(), Duration::from_secs(10));
/// // Later, during shutdown:
/// sweeper.abort();
/// ```
pub fn spawn_sweeper<V>(store: Arc<RwLock<CacheStore<V>>>, interval: Duration) -> JoinHandle<()>
where
    V: Send + Sync + 'static,
{
    sweep_loop(interval, move || {
        let store = store.clone();
        async move {
            let mut guard = store.write().await;
            guard.sweep_expired()
        }
    })
}

/// The sweeper loop itself, with the per-pass work injected so tests can
/// substitute a failing pass.
fn sweep_loop<F, Fut>(interval: Duration, mut pass: F) -> JoinHandle<()>
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = usize> + Send + 'static,
{
    tokio::spawn(async move {
        info!(?interval, "starting expiration sweeper");

        loop {
            tokio::time::sleep(interval).await;

            match tokio::spawn(pass()).await {
                Ok(0) => debug!("sweep pass: no expired entries"),
                Ok(removed) => info!(removed, "sweep pass: removed expired entries"),
                Err(err) => warn!(%err, "sweep pass failed; sweeper keeps running"),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::Ttl;

    fn shared_store(default_ttl: Duration) -> Arc<RwLock<CacheStore<String>>> {
        Arc::new(RwLock::new(CacheStore::new(100, default_ttl)))
    }

    #[tokio::test]
    async fn test_sweeper_removes_expired_entries() {
        let store = shared_store(Duration::from_secs(300));

        {
            let mut guard = store.write().await;
            guard.set(
                "expire_soon".to_string(),
                "value".to_string(),
                Ttl::After(Duration::from_millis(30)),
            );
        }

        let handle = spawn_sweeper(store.clone(), Duration::from_millis(25));

        // Wait for the entry to expire and at least one pass to run.
        tokio::time::sleep(Duration::from_millis(150)).await;

        {
            let guard = store.read().await;
            assert_eq!(
                guard.len(),
                0,
                "Expired entry should have been swept without a read"
            );
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweeper_preserves_valid_entries() {
        let store = shared_store(Duration::from_secs(300));

        {
            let mut guard = store.write().await;
            guard.set(
                "long_lived".to_string(),
                "value".to_string(),
                Ttl::After(Duration::from_secs(3600)),
            );
        }

        let handle = spawn_sweeper(store.clone(), Duration::from_millis(25));

        tokio::time::sleep(Duration::from_millis(100)).await;

        {
            let mut guard = store.write().await;
            assert_eq!(
                guard.get("long_lived"),
                Some(&"value".to_string()),
                "Valid entry should not be removed"
            );
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweeper_never_removes_sentinel_entries() {
        // Default TTL shorter than the wait: a Ttl::Never entry must outlive
        // several sweep passes anyway.
        let store = shared_store(Duration::from_millis(40));

        {
            let mut guard = store.write().await;
            guard.set("forever".to_string(), "value".to_string(), Ttl::Never);
            guard.set("fleeting".to_string(), "value".to_string(), Ttl::Default);
        }

        let handle = spawn_sweeper(store.clone(), Duration::from_millis(25));

        tokio::time::sleep(Duration::from_millis(150)).await;

        {
            let mut guard = store.write().await;
            assert_eq!(guard.len(), 1, "Only the sentinel entry should remain");
            assert_eq!(guard.get("forever"), Some(&"value".to_string()));
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweeper_keeps_ticking_after_failed_pass() {
        use std::sync::atomic::{AtomicBool, Ordering};

        let store = shared_store(Duration::from_secs(300));

        {
            let mut guard = store.write().await;
            guard.set(
                "expire_soon".to_string(),
                "value".to_string(),
                Ttl::After(Duration::from_millis(30)),
            );
        }

        // First pass panics; every later pass sweeps normally. The loop must
        // log the failure and keep going, so the entry still gets reclaimed.
        let failed_once = Arc::new(AtomicBool::new(false));
        let handle = sweep_loop(Duration::from_millis(25), {
            let store = store.clone();
            let failed_once = failed_once.clone();
            move || {
                let store = store.clone();
                let failed_once = failed_once.clone();
                async move {
                    if !failed_once.swap(true, Ordering::SeqCst) {
                        panic!("induced pass failure");
                    }
                    store.write().await.sweep_expired()
                }
            }
        });

        tokio::time::sleep(Duration::from_millis(150)).await;

        assert!(
            !handle.is_finished(),
            "a failed pass must not terminate the sweeper"
        );
        assert!(
            failed_once.load(Ordering::SeqCst),
            "the failing pass should have run"
        );
        {
            let guard = store.read().await;
            assert_eq!(guard.len(), 0, "a later pass must still sweep");
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweeper_can_be_aborted() {
        let store = shared_store(Duration::from_secs(300));

        let handle = spawn_sweeper(store, Duration::from_millis(25));

        handle.abort();

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
