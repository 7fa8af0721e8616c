//! LRU cache: reads keep entries alive, the least recently used goes.
//!
//! Run with: cargo run --example basic_lru

use evictkit::notify::EvictionRecorder;
use evictkit::policy::lru::LruCache;
use evictkit::traits::{CoreCache, ReadOnlyCache};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== LRU Cache ===\n");

    let evicted = EvictionRecorder::new();
    let mut cache = LruCache::with_capacity(3).with_listener(evicted.clone());

    cache.insert(1, "one");
    cache.insert(2, "two");
    cache.insert(3, "three");

    // 1 becomes most recently used, 2 is now the oldest.
    cache.get(&1);
    println!("least recently used: {:?}", cache.peek_lru());

    cache.insert(4, "four");
    println!("evicted: {:?}", evicted.take());

    // peek does not refresh recency.
    cache.peek(&3);
    cache.insert(5, "five");
    println!("evicted: {:?}", evicted.take());

    println!("\nrecency order: {:?}", cache.keys());
    println!("len: {} / {:?}", cache.len(), cache.capacity());
}
