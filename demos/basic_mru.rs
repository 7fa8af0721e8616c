//! MRU cache: the key touched last is the one discarded.
//!
//! Run with: cargo run --example basic_mru

use evictkit::notify::EvictionRecorder;
use evictkit::policy::mru::MruCache;
use evictkit::traits::CoreCache;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== MRU Cache ===\n");

    let evicted = EvictionRecorder::new();
    let mut cache = MruCache::with_capacity(3).with_listener(evicted.clone());

    // Cyclic scan over five pages with room for three.
    for round in 0..2 {
        for page in 0..5u32 {
            if cache.get(&page).is_none() {
                cache.insert(page, format!("page-{page}"));
            }
        }
        println!("round {round}: resident {:?}, evicted {:?}", cache.keys(), evicted.take());
    }

    println!("\nnext victim: {:?}", cache.peek_mru().map(|(k, _)| k));
}
