//! Seed resolution
//!
//! A seed arrives in one of four shapes and is resolved exactly once, at
//! generator construction, into a shared draw source:
//! - `Unseeded`: seed from the system clock (reproducibility not guaranteed)
//! - `Integer`: seed the Mersenne Twister directly
//! - `Text`: hash the string to an integer seed, then seed as `Integer`
//! - `Source`: adopt an existing shared source (the stream is shared)
//!
//! CRITICAL: equal integer or text seeds MUST produce identical sequences.

use sha2::{Digest, Sha256};

use crate::source::{share, MersenneSource, SharedSource};

/// The seed shapes accepted at generator construction.
///
/// `From` conversions cover the common call-site shapes, so most code never
/// names the variants:
///
/// # Example
/// ```
/// use seeded_rng_core_rs::Generator;
///
/// let mut from_int = Generator::new(42);
/// let mut from_text = Generator::new("footsteps-stone");
/// assert_ne!(from_int.random(), from_text.random());
/// ```
#[derive(Default)]
pub enum Seed {
    /// No seed supplied: derive one from the system clock.
    #[default]
    Unseeded,

    /// Seed the source directly with this integer.
    Integer(u64),

    /// Hash this text to an integer seed.
    Text(String),

    /// Adopt an existing source handle. Draws advance the shared stream,
    /// observably for every generator holding the handle.
    Source(SharedSource),
}

impl Seed {
    /// Resolve this seed into a concrete shared source.
    pub fn resolve(self) -> SharedSource {
        match self {
            Seed::Unseeded => share(MersenneSource::from_time()),
            Seed::Integer(seed) => share(MersenneSource::new(seed)),
            Seed::Text(text) => share(MersenneSource::new(hash_text_seed(&text))),
            Seed::Source(source) => source,
        }
    }
}

impl From<u64> for Seed {
    fn from(seed: u64) -> Self {
        Seed::Integer(seed)
    }
}

impl From<&str> for Seed {
    fn from(text: &str) -> Self {
        Seed::Text(text.to_string())
    }
}

impl From<String> for Seed {
    fn from(text: String) -> Self {
        Seed::Text(text)
    }
}

impl From<SharedSource> for Seed {
    fn from(source: SharedSource) -> Self {
        Seed::Source(source)
    }
}

/// Hash arbitrary text into a 64-bit seed.
///
/// Deterministic and total over all strings. Distinct strings yield distinct
/// seeds with overwhelming probability (leading 8 bytes of a SHA-256 digest).
///
/// # Example
/// ```
/// use seeded_rng_core_rs::hash_text_seed;
///
/// assert_eq!(hash_text_seed("test one"), hash_text_seed("test one"));
/// assert_ne!(hash_text_seed("test one"), hash_text_seed("test two"));
/// ```
pub fn hash_text_seed(text: &str) -> u64 {
    let digest = Sha256::digest(text.as_bytes());
    digest[..8]
        .iter()
        .fold(0u64, |seed, &byte| (seed << 8) | u64::from(byte))
}
