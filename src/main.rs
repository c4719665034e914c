//! local_cache demo driver
//!
//! Exercises the cache engine end to end: fill past capacity, update in
//! place, lazy expiration, removal, and a never-expiring entry squeezed out
//! by FIFO pressure.

use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use local_cache::{CacheConfig, LocalCache, Ttl};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "local_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Small capacity so eviction is visible in the demo; TTLs and sweep
    // interval still come from the environment.
    let config = CacheConfig {
        capacity: 5,
        ..CacheConfig::from_env()?
    };
    info!(
        capacity = config.capacity,
        default_ttl_ms = config.default_ttl.as_millis() as u64,
        sweep_interval_ms = config.sweep_interval.as_millis() as u64,
        "configuration loaded"
    );

    let cache: LocalCache<String> = LocalCache::new(config);

    // Fill to capacity, then update one key in place.
    for i in 1..=5 {
        cache.set(i.to_string(), format!("value_{i}")).await;
    }
    info!(len = cache.len().await, "cache filled to capacity");

    cache.set("2", "updated_value_2".to_string()).await;
    info!(value = ?cache.get("2").await, "key 2 after update");

    cache.remove("1").await;
    info!(value = ?cache.get("1").await, "key 1 after remove");

    // Push well past capacity; each insert evicts the oldest entry.
    for i in 6..=12 {
        cache.set(i.to_string(), format!("value_{i}")).await;
    }
    info!(len = cache.len().await, "after inserting past capacity");
    for key in ["2", "8", "12"] {
        info!(key, value = ?cache.get(key).await, "survivor check");
    }

    // Lazy expiration: a short-lived entry reads as absent once stale.
    cache
        .set_with_ttl("fleeting", "gone soon".to_string(), Ttl::After(Duration::from_millis(200)))
        .await;
    cache
        .set_with_ttl("forever", "still here".to_string(), Ttl::Never)
        .await;
    tokio::time::sleep(Duration::from_millis(300)).await;
    info!(fleeting = ?cache.get("fleeting").await, forever = ?cache.get("forever").await, "after TTL elapsed");

    cache.clear().await;
    info!(len = cache.len().await, "after clear");

    cache.shutdown();
    info!("sweeper stopped, demo complete");

    Ok(())
}
