//! Display identifier generation for new parties.
//!
//! A generated id looks like `PID-GRAN-123456042`: a fixed prefix, the first
//! four characters of the party name (or `NEW`), the low six digits of a
//! millisecond clock and a three-digit random draw. Ids are not guaranteed to
//! be unique; nothing checks for collisions.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{GENERATED_ID_FALLBACK, GENERATED_ID_PREFIX};

/// Number of name characters kept in the id.
const NAME_STEM_LEN: usize = 4;

/// Source of time and randomness for id generation.
pub trait IdEntropy: Send + Sync {
    /// Current wall clock in milliseconds.
    fn clock_millis(&self) -> u64;

    /// Uniform draw in `0..bound`.
    fn random_below(&self, bound: u32) -> u32;
}

/// Entropy from the system clock and the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEntropy;

impl IdEntropy for SystemEntropy {
    fn clock_millis(&self) -> u64 {
        u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default()
    }

    fn random_below(&self, bound: u32) -> u32 {
        rand::thread_rng().gen_range(0..bound.max(1))
    }
}

/// Human-readable party identifier shown on the form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneratedId(String);

impl GeneratedId {
    /// Borrow the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name stem between the prefix and the numeric suffix.
    #[must_use]
    pub fn stem(&self) -> &str {
        self.0.split('-').nth(1).unwrap_or_default()
    }
}

impl std::fmt::Display for GeneratedId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generates a display id for `name`.
///
/// An empty (or whitespace-only) name falls back to `NEW`.
pub fn generate(name: &str, entropy: &dyn IdEntropy) -> GeneratedId {
    let trimmed = name.trim();
    let base = if trimmed.is_empty() {
        GENERATED_ID_FALLBACK
    } else {
        trimmed
    };
    let stem = base
        .chars()
        .take(NAME_STEM_LEN)
        .collect::<String>()
        .to_uppercase();

    let time_suffix = entropy.clock_millis() % 1_000_000;
    let random_suffix = entropy.random_below(1000) % 1000;

    GeneratedId(format!(
        "{GENERATED_ID_PREFIX}-{stem}-{time_suffix:06}{random_suffix:03}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    struct Pinned(u64, u32);

    impl IdEntropy for Pinned {
        fn clock_millis(&self) -> u64 {
            self.0
        }

        fn random_below(&self, _bound: u32) -> u32 {
            self.1
        }
    }

    #[test]
    fn test_generate_uses_name_stem() {
        let id = generate("Grand Hotel", &Pinned(1_700_000_123_456, 7));
        assert_eq!(id.as_str(), "PID-GRAN-123456007");
        assert_eq!(id.stem(), "GRAN");
    }

    #[test]
    fn test_generate_empty_name_falls_back() {
        let id = generate("", &Pinned(42, 999));
        assert_eq!(id.as_str(), "PID-NEW-000042999");

        let id = generate("   ", &Pinned(42, 0));
        assert_eq!(id.as_str(), "PID-NEW-000042000");
    }

    #[test]
    fn test_generate_short_name_kept_whole() {
        let id = generate("ab", &Pinned(1, 1));
        assert_eq!(id.as_str(), "PID-AB-000001001");
    }

    #[test]
    fn test_generate_shape_with_system_entropy() {
        let pattern = Regex::new(r"^PID-GRAN-\d{9}$").unwrap();
        let fallback = Regex::new(r"^PID-NEW-\d{9}$").unwrap();
        for _ in 0..50 {
            assert!(pattern.is_match(generate("Grand Hotel", &SystemEntropy).as_str()));
            assert!(fallback.is_match(generate("", &SystemEntropy).as_str()));
        }
    }

    #[test]
    fn test_random_draw_is_bounded() {
        let entropy = SystemEntropy;
        for _ in 0..200 {
            assert!(entropy.random_below(1000) < 1000);
        }
    }
}
