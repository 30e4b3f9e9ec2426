use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt::Display;
use std::str::FromStr;

/// How the allocator picks a candidate id for a new link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdStrategy {
    /// Random characters from an unambiguous charset, retried on collision.
    RandomOpaque,
    /// Capitalised adjective followed by a capitalised animal, retried on collision.
    ReadableWordPair,
    /// A caller-chosen id. A collision is reported, never retried.
    Custom(String),
}

impl IdStrategy {
    /// Whether candidates are drawn at random, making a collision worth retrying.
    pub fn is_randomized(&self) -> bool {
        !matches!(self, IdStrategy::Custom(_))
    }
}

/// Parses the id-type path segment used by creation requests.
///
/// `rand` and `random` select [`IdStrategy::RandomOpaque`], `readable` selects
/// [`IdStrategy::ReadableWordPair`]. Keywords are matched ignoring ASCII case;
/// any other segment is taken verbatim as a custom id.
impl FromStr for IdStrategy {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let strategy = if s.eq_ignore_ascii_case("rand") || s.eq_ignore_ascii_case("random") {
            IdStrategy::RandomOpaque
        } else if s.eq_ignore_ascii_case("readable") {
            IdStrategy::ReadableWordPair
        } else {
            IdStrategy::Custom(s.to_string())
        };
        Ok(strategy)
    }
}

impl Display for IdStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdStrategy::RandomOpaque => f.write_str("random"),
            IdStrategy::ReadableWordPair => f.write_str("readable"),
            IdStrategy::Custom(id) => write!(f, "custom:{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> IdStrategy {
        s.parse().unwrap()
    }

    #[test]
    fn keywords() {
        assert_eq!(parse("rand"), IdStrategy::RandomOpaque);
        assert_eq!(parse("random"), IdStrategy::RandomOpaque);
        assert_eq!(parse("RANDOM"), IdStrategy::RandomOpaque);
        assert_eq!(parse("readable"), IdStrategy::ReadableWordPair);
        assert_eq!(parse("Readable"), IdStrategy::ReadableWordPair);
    }

    #[test]
    fn anything_else_is_custom() {
        assert_eq!(parse("MyLink"), IdStrategy::Custom("MyLink".to_string()));
        assert_eq!(parse(""), IdStrategy::Custom(String::new()));
        assert_eq!(parse("randomly"), IdStrategy::Custom("randomly".to_string()));
    }

    #[test]
    fn randomized() {
        assert!(IdStrategy::RandomOpaque.is_randomized());
        assert!(IdStrategy::ReadableWordPair.is_randomized());
        assert!(!IdStrategy::Custom("abc".to_string()).is_randomized());
    }

    #[test]
    fn display() {
        assert_eq!(IdStrategy::RandomOpaque.to_string(), "random");
        assert_eq!(IdStrategy::Custom("abc".to_string()).to_string(), "custom:abc");
    }
}
