use crate::error::Error;
use snip_core::link_id::MAX_LENGTH;
use std::fs;
use std::path::Path;

const BUNDLED_ADJECTIVES: &str = include_str!("../assets/adjectives.txt");
const BUNDLED_ANIMALS: &str = include_str!("../assets/animals.txt");

/// File names looked up by [`WordLists::from_dir`].
pub const ADJECTIVES_FILE: &str = "adjectives";
pub const ANIMALS_FILE: &str = "animals";

/// The adjective and animal lists readable ids are built from.
///
/// Both lists are non-empty and any adjective/animal pair, once capitalised,
/// fits in a link id. The lists are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLists {
    adjectives: Vec<String>,
    animals: Vec<String>,
}

impl WordLists {
    pub fn new(adjectives: Vec<String>, animals: Vec<String>) -> Result<Self, Error> {
        if adjectives.is_empty() {
            return Err(Error::EmptyWordList { list: "adjective" });
        }
        if animals.is_empty() {
            return Err(Error::EmptyWordList { list: "animal" });
        }

        let length = longest(&adjectives) + longest(&animals);
        if length > MAX_LENGTH {
            return Err(Error::WordPairTooLong {
                length,
                max: MAX_LENGTH,
            });
        }

        Ok(Self {
            adjectives,
            animals,
        })
    }

    /// Parses one word per line. Surrounding whitespace and blank lines are ignored.
    pub fn parse(adjectives: &str, animals: &str) -> Result<Self, Error> {
        Self::new(lines(adjectives), lines(animals))
    }

    /// Reads the two lists from files in the [`WordLists::parse`] format.
    pub fn from_files(
        adjectives: impl AsRef<Path>,
        animals: impl AsRef<Path>,
    ) -> Result<Self, Error> {
        let adjectives = read(adjectives.as_ref())?;
        let animals = read(animals.as_ref())?;
        Self::parse(&adjectives, &animals)
    }

    /// Reads `adjectives` and `animals` from `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, Error> {
        let dir = dir.as_ref();
        Self::from_files(dir.join(ADJECTIVES_FILE), dir.join(ANIMALS_FILE))
    }

    /// The lists shipped with this crate.
    pub fn bundled() -> Self {
        Self {
            adjectives: lines(BUNDLED_ADJECTIVES),
            animals: lines(BUNDLED_ANIMALS),
        }
    }

    pub fn adjectives(&self) -> &[String] {
        &self.adjectives
    }

    pub fn animals(&self) -> &[String] {
        &self.animals
    }

    /// Number of distinct adjective/animal pairs.
    pub fn combinations(&self) -> usize {
        self.adjectives.len() * self.animals.len()
    }
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn longest(words: &[String]) -> usize {
    words
        .iter()
        .map(|w| capitalize(w).len())
        .max()
        .unwrap_or(0)
}

fn lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn read(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
