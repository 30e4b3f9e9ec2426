use crate::error::Error;

/// Characters left out of the default charset because they are easily
/// confused with one another when read or typed.
pub const AMBIGUOUS: [char; 5] = ['0', 'O', '1', 'l', 'I'];

/// The set of characters random ids are drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    chars: Vec<char>,
}

impl Charset {
    /// Builds a charset from `chars`, dropping duplicates but keeping order.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Result<Self, Error> {
        let mut unique = Vec::new();
        for c in chars {
            if !unique.contains(&c) {
                unique.push(c);
            }
        }

        if unique.is_empty() {
            return Err(Error::EmptyCharset);
        }

        Ok(Self { chars: unique })
    }

    /// ASCII letters and digits without [`AMBIGUOUS`]: 57 characters.
    pub fn unambiguous() -> Self {
        let chars = ('a'..='z')
            .chain('A'..='Z')
            .chain('0'..='9')
            .filter(|c| !AMBIGUOUS.contains(c))
            .collect();
        Self { chars }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Returns the character at `index`, if any.
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// The character at `index`. Panics if `index >= self.len()`.
    pub(crate) fn char_at(&self, index: usize) -> char {
        self.chars[index]
    }

    /// UTF-8 length of the widest character in the set.
    pub(crate) fn max_char_len(&self) -> usize {
        self.chars.iter().map(|c| c.len_utf8()).max().unwrap_or(0)
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::unambiguous()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unambiguous_has_57_chars() {
        let charset = Charset::unambiguous();
        assert_eq!(charset.len(), 62 - AMBIGUOUS.len());
        assert_eq!(charset.len(), 57);
        for c in AMBIGUOUS {
            assert!(!charset.contains(c), "{c} should be excluded");
        }
        assert!(charset.contains('a'));
        assert!(charset.contains('Z'));
        assert!(charset.contains('9'));
        assert!(!charset.contains('-'));
    }

    #[test]
    fn char_at_matches_get() {
        let charset = Charset::unambiguous();
        for index in 0..charset.len() {
            assert_eq!(Some(charset.char_at(index)), charset.get(index));
        }
    }

    #[test]
    fn duplicates_are_dropped() {
        let charset = Charset::new("abca".chars()).unwrap();
        assert_eq!(charset.len(), 3);
        assert_eq!(charset.get(0), Some('a'));
        assert_eq!(charset.get(2), Some('c'));
    }

    #[test]
    fn empty_charset_is_rejected() {
        assert!(matches!(
            Charset::new("".chars()),
            Err(Error::EmptyCharset)
        ));
    }

    #[test]
    fn max_char_len() {
        assert_eq!(Charset::unambiguous().max_char_len(), 1);
        assert_eq!(Charset::new("aé".chars()).unwrap().max_char_len(), 2);
    }
}
