//! Errors for cache construction and self-checks.
//!
//! Cache operations never fail: an absent key reads as `None` and a null put
//! is ignored. Only two things can go wrong:
//!
//! - building a cache from bad parameters ([`ConfigError`]);
//! - a consistency check finding the storage map and a policy's
//!   bookkeeping out of step ([`InvariantError`]).
//!
//! ```
//! use evictkit::error::ConfigError;
//! use evictkit::policy::lru::LruCache;
//!
//! let err = LruCache::<String, i32>::try_with_capacity(0).unwrap_err();
//! assert_eq!(err, ConfigError::ZeroCapacity);
//! assert!(err.to_string().contains("capacity"));
//! ```

/// Invalid cache configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("cache capacity must be greater than zero")]
    ZeroCapacity,
    #[error("unknown cache policy: {0:?}")]
    UnknownPolicy(String),
}

/// A broken internal invariant, reported by `check_invariants`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum InvariantError {
    #[error("{policy} cache holds {len} entries with capacity {capacity}")]
    OverCapacity {
        policy: &'static str,
        len: usize,
        capacity: usize,
    },
    #[error("{policy} map holds {stored} keys but the policy tracks {tracked}")]
    LengthMismatch {
        policy: &'static str,
        stored: usize,
        tracked: usize,
    },
    #[error("{policy} map holds a key the policy does not track")]
    UntrackedKey { policy: &'static str },
    /// The order or frequency structure disagrees with itself.
    #[error("corrupt {structure}: {detail}")]
    Corrupt {
        structure: &'static str,
        detail: String,
    },
}

impl InvariantError {
    pub(crate) fn corrupt(structure: &'static str, detail: impl Into<String>) -> Self {
        Self::Corrupt {
            structure,
            detail: detail.into(),
        }
    }
}

/// Rejects a zero capacity for every bounded constructor.
pub(crate) fn validate_capacity(capacity: usize) -> Result<usize, ConfigError> {
    match capacity {
        0 => Err(ConfigError::ZeroCapacity),
        n => Ok(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_is_rejected() {
        assert_eq!(validate_capacity(0), Err(ConfigError::ZeroCapacity));
        assert_eq!(validate_capacity(4), Ok(4));
    }

    #[test]
    fn unknown_policy_quotes_the_name() {
        let err = ConfigError::UnknownPolicy("arc".into());
        assert_eq!(err.to_string(), "unknown cache policy: \"arc\"");
    }

    #[test]
    fn invariant_messages_name_the_policy() {
        let err = InvariantError::OverCapacity {
            policy: "lru",
            len: 3,
            capacity: 2,
        };
        assert_eq!(err.to_string(), "lru cache holds 3 entries with capacity 2");

        let err = InvariantError::corrupt("key order", "tail mismatch");
        assert_eq!(err.to_string(), "corrupt key order: tail mismatch");
    }

    #[test]
    fn both_are_std_errors() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<ConfigError>();
        assert_error::<InvariantError>();
    }
}
