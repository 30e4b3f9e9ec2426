use crate::charset::Charset;
use crate::error::Error;
use crate::{lock_rng, Generator};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use snip_core::link_id::MAX_LENGTH;
use snip_core::LinkId;
use std::sync::Mutex;

/// Default number of characters in a random id.
pub const DEFAULT_LENGTH: usize = 8;

/// Draws ids of a fixed length uniformly, with replacement, from a [`Charset`].
///
/// With the default 57-character charset and length 8 there are about
/// 1.1e14 possible ids. The RNG is not required to be cryptographically
/// secure, so a determined client could in principle predict upcoming ids.
#[derive(Debug)]
pub struct RandomGenerator<R> {
    charset: Charset,
    length: usize,
    rng: Mutex<R>,
}

impl RandomGenerator<StdRng> {
    /// Creates a generator seeded from the operating system.
    pub fn from_os_rng(charset: Charset, length: usize) -> Result<Self, Error> {
        Self::new(charset, length, StdRng::from_os_rng())
    }
}

impl Default for RandomGenerator<StdRng> {
    /// [`DEFAULT_LENGTH`] ids over [`Charset::unambiguous`], seeded from the OS.
    fn default() -> Self {
        Self {
            charset: Charset::unambiguous(),
            length: DEFAULT_LENGTH,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }
}

impl<R: Rng + Send + 'static> RandomGenerator<R> {
    /// Creates a generator producing `length`-character ids from `charset`.
    ///
    /// Fails with [`Error::InvalidLength`] when `length` is zero or the ids
    /// could exceed [`MAX_LENGTH`] bytes.
    pub fn new(charset: Charset, length: usize, rng: R) -> Result<Self, Error> {
        if length == 0 || length * charset.max_char_len() > MAX_LENGTH {
            return Err(Error::InvalidLength {
                length,
                max: MAX_LENGTH,
            });
        }

        Ok(Self {
            charset,
            length,
            rng: Mutex::new(rng),
        })
    }

    pub fn charset(&self) -> &Charset {
        &self.charset
    }

    pub fn length(&self) -> usize {
        self.length
    }

    fn draw(&self) -> String {
        let mut rng = lock_rng(&self.rng);
        let len = self.charset.len();
        (0..self.length)
            .map(|_| self.charset.char_at(rng.random_range(0..len)))
            .collect()
    }
}

impl<R: Rng + Send + 'static> Generator for RandomGenerator<R> {
    fn generate(&self) -> LinkId {
        LinkId::new_unchecked(self.draw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn seeded(charset: Charset, length: usize) -> RandomGenerator<StdRng> {
        RandomGenerator::new(charset, length, StdRng::seed_from_u64(7)).unwrap()
    }

    #[test]
    fn ids_have_requested_length() {
        let generator = seeded(Charset::unambiguous(), DEFAULT_LENGTH);
        for _ in 0..100 {
            assert_eq!(generator.generate().as_str().chars().count(), DEFAULT_LENGTH);
        }

        let generator = seeded(Charset::unambiguous(), 3);
        assert_eq!(generator.generate().as_str().len(), 3);
    }

    #[test]
    fn ids_only_use_charset() {
        let charset = Charset::unambiguous();
        let generator = seeded(charset.clone(), DEFAULT_LENGTH);
        for _ in 0..1_000 {
            let id = generator.generate();
            assert!(id.as_str().chars().all(|c| charset.contains(c)), "{id}");
        }
    }

    #[test]
    fn successive_ids_differ() {
        let generator = seeded(Charset::unambiguous(), DEFAULT_LENGTH);
        let ids: HashSet<_> = (0..1_000).map(|_| generator.generate()).collect();
        assert_eq!(ids.len(), 1_000);
    }

    #[test]
    fn every_draw_has_exactly_length_characters() {
        let generator = seeded(Charset::new("ab".chars()).unwrap(), 5);
        for _ in 0..500 {
            assert_eq!(generator.generate().as_str().chars().count(), 5);
        }
    }

    #[test]
    fn every_character_is_reachable() {
        let charset = Charset::new("abc".chars()).unwrap();
        let generator = seeded(charset, 1);
        let seen: HashSet<_> = (0..200).map(|_| generator.generate()).collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn single_character_charset() {
        let generator = seeded(Charset::new("x".chars()).unwrap(), 1);
        assert_eq!(generator.generate().as_str(), "x");
        assert_eq!(generator.generate().as_str(), "x");
    }

    #[test]
    fn same_seed_same_sequence() {
        let a = seeded(Charset::unambiguous(), DEFAULT_LENGTH);
        let b = seeded(Charset::unambiguous(), DEFAULT_LENGTH);
        assert_eq!(a.generate(), b.generate());
        assert_eq!(a.generate(), b.generate());
    }

    #[test]
    fn rejects_invalid_lengths() {
        let err = RandomGenerator::new(Charset::unambiguous(), 0, StdRng::seed_from_u64(1))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidLength { length: 0, .. }));

        assert!(RandomGenerator::new(Charset::unambiguous(), 64, StdRng::seed_from_u64(1)).is_ok());
        assert!(RandomGenerator::new(Charset::unambiguous(), 65, StdRng::seed_from_u64(1)).is_err());

        // two-byte characters halve the maximum length
        let wide = Charset::new("éè".chars()).unwrap();
        assert!(RandomGenerator::new(wide.clone(), 32, StdRng::seed_from_u64(1)).is_ok());
        assert!(RandomGenerator::new(wide, 33, StdRng::seed_from_u64(1)).is_err());
    }

    #[test]
    fn default_generator() {
        let generator = RandomGenerator::default();
        assert_eq!(generator.length(), DEFAULT_LENGTH);
        assert_eq!(generator.charset(), &Charset::unambiguous());
        assert_eq!(generator.generate().as_str().len(), DEFAULT_LENGTH);
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RandomGenerator<StdRng>>();
    }
}
