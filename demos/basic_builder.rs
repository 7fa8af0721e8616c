//! Picking a policy at runtime with CacheBuilder, and sharing it across threads.
//!
//! Run with: cargo run --example basic_builder
//! Show eviction logs with: RUST_LOG=evictkit=debug cargo run --example basic_builder

use std::thread;

use evictkit::builder::{CacheBuilder, CacheConfig, CachePolicy};
use evictkit::error::ConfigError;
use evictkit::notify::TracingListener;
use evictkit::sync::SharedCache;
use evictkit::traits::{CoreCache, ReadOnlyCache};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== CacheBuilder Examples ===\n");

    // Same workload under every policy.
    for policy in CachePolicy::ALL {
        let mut cache = CacheBuilder::new(2).build::<&str>(policy);
        cache.insert("A", "alpha");
        cache.insert("B", "bravo");
        cache.get(&"A");
        cache.insert("C", "charlie");

        let mut keys: Vec<_> = cache.show().into_keys().copied().collect();
        keys.sort_unstable();
        println!("{policy:>9}: {keys:?}");
    }

    // Policy from a configuration string.
    let policy: CachePolicy = "LFU".parse()?;
    let config = CacheConfig::new(policy, 8);
    let cache = CacheBuilder::<u64>::from_config::<String>(&config)?;
    println!("\nfrom config: {cache:?}");

    let bad = CacheConfig::new(CachePolicy::Lru, 0);
    if let Err(err) = bad.validate() {
        println!("rejected config: {err}");
    }

    // One lock per cache instance.
    let shared = SharedCache::new(
        CacheBuilder::new(16)
            .listener(TracingListener)
            .build::<u64>(CachePolicy::Lru),
    );
    let handles: Vec<_> = (0..4u64)
        .map(|t| {
            let shared = shared.clone();
            thread::spawn(move || {
                for i in 0..8 {
                    shared.insert(t * 10 + i, i);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker panicked");
    }
    let mut resident: Vec<u64> = shared.show().into_keys().collect();
    resident.sort_unstable();
    println!("\nshared cache holds {} of {:?}: {resident:?}", shared.len(), shared.capacity());

    Ok(())
}
