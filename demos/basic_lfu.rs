//! LFU cache: the least frequently used key goes, LRU among ties.
//!
//! Run with: cargo run --example basic_lfu

use evictkit::notify::EvictionRecorder;
use evictkit::policy::lfu::LfuCache;
use evictkit::traits::CoreCache;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== LFU Cache ===\n");

    let evicted = EvictionRecorder::new();
    let mut cache = LfuCache::with_capacity(3).with_listener(evicted.clone());

    cache.insert("hot", 1);
    cache.insert("warm", 2);
    cache.insert("cold", 3);

    for _ in 0..5 {
        cache.get(&"hot");
    }
    cache.get(&"warm");

    for key in ["hot", "warm", "cold"] {
        println!("{key:>5}: frequency {:?}", cache.frequency(&key));
    }
    println!("min frequency: {:?}", cache.min_frequency());

    cache.insert("new", 4);
    println!("\nevicted: {:?}", evicted.take());

    // "new" (1) and nothing else at 1: it is the next candidate.
    println!("next victim: {:?}", cache.peek_lfu());
}
