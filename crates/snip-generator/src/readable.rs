use crate::words::{capitalize, WordLists};
use crate::{lock_rng, Generator};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use snip_core::LinkId;
use std::sync::{Arc, Mutex};

/// Builds ids like `BraveOtter` from a random adjective and a random animal.
///
/// Both words are drawn independently and uniformly. The id space is the
/// product of the two list lengths, so collisions are far more likely than
/// with [`RandomGenerator`](crate::RandomGenerator).
#[derive(Debug)]
pub struct ReadableGenerator<R> {
    words: Arc<WordLists>,
    rng: Mutex<R>,
}

impl ReadableGenerator<StdRng> {
    /// Creates a generator seeded from the operating system.
    pub fn from_os_rng(words: impl Into<Arc<WordLists>>) -> Self {
        Self::new(words, StdRng::from_os_rng())
    }
}

impl<R: Rng + Send + 'static> ReadableGenerator<R> {
    pub fn new(words: impl Into<Arc<WordLists>>, rng: R) -> Self {
        Self {
            words: words.into(),
            rng: Mutex::new(rng),
        }
    }

    pub fn words(&self) -> &WordLists {
        &self.words
    }

    fn draw(&self) -> (&str, &str) {
        let adjectives = self.words.adjectives();
        let animals = self.words.animals();

        let mut rng = lock_rng(&self.rng);
        let adjective = adjectives[rng.random_range(0..adjectives.len())].as_str();
        let animal = animals[rng.random_range(0..animals.len())].as_str();
        (adjective, animal)
    }
}

impl<R: Rng + Send + 'static> Generator for ReadableGenerator<R> {
    fn generate(&self) -> LinkId {
        let (adjective, animal) = self.draw();
        let mut id = capitalize(adjective);
        id.push_str(&capitalize(animal));
        // WordLists guarantees every capitalised pair fits in a LinkId
        LinkId::new_unchecked(id)
    }
}
