//! Primitive draw sources
//!
//! All randomness enters the library through the `BitSource` trait. The
//! shipping implementation is a Mersenne Twister; callers can substitute any
//! other deterministic (or non-deterministic) source by implementing the
//! trait and adopting it at generator construction.
//!
//! CRITICAL: a source is a single logical stream. Sharing one handle between
//! generators means every draw through either handle advances the stream for
//! both.

mod mersenne;

use std::cell::RefCell;
use std::rc::Rc;

pub use mersenne::MersenneSource;

/// The primitive draw capability.
///
/// Implementors produce the next pseudo-random float in `[0, 1)`, advancing
/// internal state. Everything else the library offers is built on this one
/// method.
pub trait BitSource {
    /// Produce the next float in `[0, 1)`.
    fn next_float(&mut self) -> f64;
}

/// Shared handle to a draw source.
///
/// Reference-counted so several generators can knowingly draw from one
/// logical stream. Single-threaded by design; callers needing cross-thread
/// generation must synchronize their own `BitSource` implementation.
pub type SharedSource = Rc<RefCell<dyn BitSource>>;

/// Wrap a concrete source in a shared handle.
///
/// # Example
/// ```
/// use seeded_rng_core_rs::{share, Generator, MersenneSource, Seed};
///
/// let source = share(MersenneSource::new(42));
/// let mut rng = Generator::new(Seed::Source(source));
/// let value = rng.random();
/// assert!(value >= 0.0 && value < 1.0);
/// ```
pub fn share<S: BitSource + 'static>(source: S) -> SharedSource {
    Rc::new(RefCell::new(source))
}
