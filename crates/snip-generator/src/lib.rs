//! Candidate id generators.
//!
//! Generators are pure: they draw a candidate [`LinkId`] and never touch
//! storage. A candidate may collide with an existing link; detecting that is
//! the allocator's job.

pub mod charset;
pub mod error;
pub mod random;
pub mod readable;
pub mod words;

use snip_core::LinkId;
use std::sync::{Mutex, MutexGuard, PoisonError};

pub use charset::Charset;
pub use error::Error;
pub use random::RandomGenerator;
pub use readable::ReadableGenerator;
pub use words::WordLists;

/// Trait for generating candidate link ids.
///
/// Every call draws a fresh candidate; two calls may return the same id.
pub trait Generator: Send + Sync + 'static {
    fn generate(&self) -> LinkId;
}

impl<G: Generator + ?Sized> Generator for std::sync::Arc<G> {
    fn generate(&self) -> LinkId {
        (**self).generate()
    }
}

// A panic while drawing cannot leave an RNG in a state worse than random.
fn lock_rng<R>(rng: &Mutex<R>) -> MutexGuard<'_, R> {
    rng.lock().unwrap_or_else(PoisonError::into_inner)
}
