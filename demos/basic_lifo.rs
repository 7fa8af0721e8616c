//! LIFO cache: the most recent write is discarded first.
//!
//! Run with: cargo run --example basic_lifo

use evictkit::notify::TracingListener;
use evictkit::policy::lifo::LifoCache;
use evictkit::traits::{CoreCache, ReadOnlyCache};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== LIFO Cache ===\n");

    let mut cache = LifoCache::new().with_listener(TracingListener);
    for (key, value) in [("A", "Hello"), ("B", "World"), ("C", "Holberton"), ("D", "School")] {
        cache.put(Some(key), Some(value));
    }
    println!("stack: {:?}", cache.keys());

    // D is on top, so it goes.
    cache.put(Some("E"), Some("Battery"));
    println!("after put E: {:?}", cache.keys());

    // Rewriting B pushes it back on top; it is the next victim.
    cache.put(Some("B"), Some("Street"));
    cache.put(Some("F"), Some("Mission"));
    println!("after overwrite B, put F: {:?}", cache.keys());

    println!("\ncontains A? {}", cache.contains(&"A"));
    println!("top: {:?}", cache.peek_newest());
}
