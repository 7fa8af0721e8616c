//! FIFO cache: the oldest arrival is discarded, reads change nothing.
//!
//! Run with: cargo run --example basic_fifo

use evictkit::notify::TracingListener;
use evictkit::policy::fifo::FifoCache;
use evictkit::traits::{CoreCache, ReadOnlyCache};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== FIFO Cache ===\n");

    // DEFAULT_CAPACITY (4) entries
    let mut cache = FifoCache::new().with_listener(TracingListener);
    for (key, value) in [("A", "Hello"), ("B", "World"), ("C", "Holberton"), ("D", "School")] {
        cache.put(Some(key), Some(value));
    }
    println!("filled: {:?}", cache.keys());

    // Reading A does not save it.
    println!("get A -> {:?}", cache.get(&"A"));
    cache.put(Some("E"), Some("Battery"));
    println!("after put E: {:?}", cache.keys());

    // Overwrite keeps C in its arrival slot.
    cache.put(Some("C"), Some("Street"));
    println!("after overwrite C: {:?}", cache.keys());

    cache.put(Some("F"), Some("Mission"));
    println!("after put F: {:?}", cache.keys());

    println!("\ncontains A? {}", cache.contains(&"A"));
    println!("contains B? {}", cache.contains(&"B"));
    println!("oldest: {:?}", cache.peek_oldest());
}
