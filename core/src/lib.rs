//! Seeded RNG Core - Deterministic Generation Library
//!
//! Seeded pseudo-random generation with pluggable weighting curves and
//! deterministic replay.
//!
//! # Architecture
//!
//! - **seed**: Seed resolution (integer, text, clock entropy, shared source)
//! - **source**: The primitive draw trait and the Mersenne Twister source
//! - **generator**: The Generator, weighting curves, and derived operations
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic given a seed (same seed → same sequence)
//! 2. Every derived operation consumes exactly its documented number of draws
//! 3. Curves are pure transforms applied to each raw draw

// Module declarations
pub mod generator;
pub mod seed;
pub mod source;

// Re-exports for convenience
pub use generator::{Curve, Generator, GeneratorError};
pub use seed::{hash_text_seed, Seed};
pub use source::{share, BitSource, MersenneSource, SharedSource};
