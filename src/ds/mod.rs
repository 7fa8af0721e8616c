pub mod frequency_buckets;
pub mod key_order;

pub use frequency_buckets::FrequencyBuckets;
pub use key_order::KeyOrder;
