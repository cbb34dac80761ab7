//! The Generator
//!
//! Wraps a shared draw source and a weighting curve, and builds every
//! higher-level operation (integer ranges, collection selection, shuffling)
//! on the single primitive draw.
//!
//! # Key Principles
//!
//! 1. **Determinism**: same seed + same call sequence → same outputs
//! 2. **One draw per unit of randomness**: draw counts are part of the contract
//! 3. **Stream sharing is explicit**: clones and curve wrappers share the
//!    source handle, never copy its state

mod curve;

use std::fmt;
use std::rc::Rc;

use thiserror::Error;

pub use curve::Curve;

use crate::seed::Seed;
use crate::source::{BitSource, SharedSource};

/// Errors that can occur during generator operations
///
/// Every variant is a precondition violation by the caller, surfaced
/// immediately. There is no internal recovery logic.
#[derive(Debug, Error, PartialEq)]
pub enum GeneratorError {
    #[error("Cannot choose from an empty collection")]
    EmptyCollection,

    #[error("Not enough pluckable elements: {available} available, {limit} reserved at the tail")]
    InsufficientElements { available: usize, limit: usize },

    #[error("Invalid range: min {min} must be below max {max}")]
    InvalidRange { min: i64, max: i64 },
}

/// Deterministic random generator with a pluggable weighting curve.
///
/// Construct one from anything convertible into a [`Seed`]: an integer, a
/// string (hashed to an integer), an existing shared source, or nothing
/// (clock-seeded via [`Generator::default`]).
///
/// Cloning a generator does **not** copy the stream: the clone holds the
/// same source handle, so draws through either instance advance one logical
/// stream, observably for both. This is the intended way to combine weighted
/// and unweighted draws from a single seed.
///
/// # Example
/// ```
/// use seeded_rng_core_rs::Generator;
///
/// let mut rng = Generator::new(42);
/// let roll = rng.random_range(0, 6).unwrap() + 1; // d6
/// assert!((1..=6).contains(&roll));
/// ```
#[derive(Clone)]
pub struct Generator {
    /// Shared handle to the primitive draw stream
    source: SharedSource,
    /// Pure transform applied to every raw draw
    curve: Curve,
}

impl Generator {
    /// Create a generator, resolving the seed into a draw source.
    ///
    /// # Example
    /// ```
    /// use seeded_rng_core_rs::Generator;
    ///
    /// let mut a = Generator::new(99);
    /// let mut b = Generator::new(99);
    /// assert_eq!(a.random(), b.random());
    /// ```
    pub fn new(seed: impl Into<Seed>) -> Self {
        Self {
            source: seed.into().resolve(),
            curve: Curve::identity(),
        }
    }

    /// Create a generator that applies `curve` to each raw draw.
    ///
    /// The new generator shares this generator's source: draws through either
    /// advance the same stream. The receiver's own curve is bypassed, not
    /// composed, for draws made through the new instance.
    ///
    /// # Example
    /// ```
    /// use seeded_rng_core_rs::{Curve, Generator};
    ///
    /// let plain = Generator::new(42);
    /// let mut biased = plain.with_curve(Curve::front());
    /// let value = biased.random();
    /// assert!(value >= 0.0 && value < 1.0);
    /// ```
    pub fn with_curve(&self, curve: Curve) -> Self {
        Self {
            source: Rc::clone(&self.source),
            curve,
        }
    }

    /// Shorthand for [`Generator::with_curve`] with the front curve
    /// (results average around 1/3).
    pub fn weighted_front(&self) -> Self {
        self.with_curve(Curve::front())
    }

    /// Shorthand for [`Generator::with_curve`] with the back curve
    /// (results average around 2/3).
    pub fn weighted_back(&self) -> Self {
        self.with_curve(Curve::back())
    }

    /// Generate the next random float: one primitive draw, passed through
    /// the curve. Under the identity curve the result is uniform in `[0, 1)`.
    pub fn random(&mut self) -> f64 {
        let raw = self.source.borrow_mut().next_float();
        self.curve.apply(raw)
    }

    /// Generate a random integer in `[0, max)`. One draw.
    ///
    /// # Errors
    /// `InvalidRange` if `max <= 0`.
    pub fn random_int(&mut self, max: i64) -> Result<i64, GeneratorError> {
        self.random_range(0, max)
    }

    /// Generate a random integer in `[min, max)`. One draw.
    ///
    /// # Errors
    /// `InvalidRange` if `min >= max`.
    ///
    /// # Example
    /// ```
    /// use seeded_rng_core_rs::Generator;
    ///
    /// let mut rng = Generator::new(42);
    /// let value = rng.random_range(10, 20).unwrap();
    /// assert!((10..20).contains(&value));
    /// ```
    pub fn random_range(&mut self, min: i64, max: i64) -> Result<i64, GeneratorError> {
        if min >= max {
            return Err(GeneratorError::InvalidRange { min, max });
        }
        let span = (max - min) as f64;
        Ok((self.random() * span + min as f64).floor() as i64)
    }

    /// Return a reference to a random element of `items`. One draw.
    ///
    /// # Errors
    /// `EmptyCollection` if `items` is empty.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, GeneratorError> {
        if items.is_empty() {
            return Err(GeneratorError::EmptyCollection);
        }
        let index = self.draw_index(items.len());
        Ok(&items[index])
    }

    /// Remove and return a random element of `items`, ignoring the last
    /// `limit` elements. One draw.
    ///
    /// This is a destructive read: the element is gone from the vector,
    /// which is what sampling-without-replacement workflows want.
    ///
    /// # Errors
    /// `InsufficientElements` if `items.len() <= limit`.
    ///
    /// # Example
    /// ```
    /// use seeded_rng_core_rs::Generator;
    ///
    /// let mut rng = Generator::new(42);
    /// let mut deck = vec!["ace", "king", "queen"];
    /// let card = rng.pluck(&mut deck, 0).unwrap();
    /// assert_eq!(deck.len(), 2);
    /// assert!(!deck.contains(&card));
    /// ```
    pub fn pluck<T>(&mut self, items: &mut Vec<T>, limit: usize) -> Result<T, GeneratorError> {
        if items.len() <= limit {
            return Err(GeneratorError::InsufficientElements {
                available: items.len(),
                limit,
            });
        }
        let index = self.draw_index(items.len() - limit);
        Ok(items.remove(index))
    }

    /// Pluck a random element and re-append it at the end of `items`.
    /// One draw.
    ///
    /// The vector keeps its length, but the plucked element moves to the end,
    /// so it cannot be plucked again until at least `limit` other elements
    /// have been drawn. Useful for cyclic sampling where recently used items
    /// must not repeat too soon (a footstep sound played twice in a row
    /// sticks out immediately). A `limit` of 1 only prevents immediate
    /// repeats; higher limits widen the exclusion window.
    ///
    /// # Errors
    /// `InsufficientElements` if `items.len() <= limit`.
    pub fn pluck_cycle<T: Clone>(
        &mut self,
        items: &mut Vec<T>,
        limit: usize,
    ) -> Result<T, GeneratorError> {
        let item = self.pluck(items, limit)?;
        items.push(item.clone());
        Ok(item)
    }

    /// Return a shuffled copy of `items`; the input is not mutated.
    /// `items.len() - 1` draws (none for lengths below 2).
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut copy = items.to_vec();
        self.shuffle_in_place(&mut copy);
        copy
    }

    /// Fisher-Yates shuffle of `items` in place.
    /// `items.len() - 1` draws (none for lengths below 2).
    ///
    /// The permutation is uniform only under the identity curve; a biased
    /// curve biases the permutation, which is documented behavior rather
    /// than a bug.
    pub fn shuffle_in_place<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.draw_index(i + 1);
            items.swap(i, j);
        }
    }

    /// Draw one index in `[0, bound)`. Callers guarantee `bound >= 1`.
    fn draw_index(&mut self, bound: usize) -> usize {
        // A curve escaping [0, 1) could push the raw index out of bounds;
        // clamp instead of indexing past the end. Identity-curve draws are
        // never clamped.
        let raw = (self.random() * bound as f64).floor() as usize;
        raw.min(bound - 1)
    }
}

impl Default for Generator {
    /// Clock-seeded generator; reproducibility across runs not guaranteed.
    fn default() -> Self {
        Self::new(Seed::Unseeded)
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("curve", &self.curve)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_range_rejects_inverted_bounds() {
        let mut rng = Generator::new(12345);
        assert_eq!(
            rng.random_range(100, 50),
            Err(GeneratorError::InvalidRange { min: 100, max: 50 })
        );
    }

    #[test]
    fn test_random_range_rejects_empty_range() {
        let mut rng = Generator::new(12345);
        assert_eq!(
            rng.random_range(5, 5),
            Err(GeneratorError::InvalidRange { min: 5, max: 5 })
        );
    }

    #[test]
    fn test_random_range_single_value() {
        let mut rng = Generator::new(12345);
        assert_eq!(rng.random_range(5, 6), Ok(5));
    }

    #[test]
    fn test_random_int_rejects_nonpositive_max() {
        let mut rng = Generator::new(12345);
        assert_eq!(
            rng.random_int(0),
            Err(GeneratorError::InvalidRange { min: 0, max: 0 })
        );
    }

    #[test]
    fn test_choose_empty_collection() {
        let mut rng = Generator::new(12345);
        let empty: [u8; 0] = [];
        assert_eq!(rng.choose(&empty), Err(GeneratorError::EmptyCollection));
    }

    #[test]
    fn test_negative_range() {
        let mut rng = Generator::new(12345);

        for _ in 0..100 {
            let val = rng.random_range(-10, -5).unwrap();
            assert!((-10..-5).contains(&val), "Value {} out of range [-10, -5)", val);
        }
    }

    #[test]
    fn test_error_messages_carry_context() {
        let err = GeneratorError::InsufficientElements {
            available: 2,
            limit: 3,
        };
        assert_eq!(
            err.to_string(),
            "Not enough pluckable elements: 2 available, 3 reserved at the tail"
        );
    }
}
