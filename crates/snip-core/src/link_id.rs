use crate::error::AllocError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Maximum length of a link id in bytes, matching the `VARCHAR(64)` key column.
pub const MAX_LENGTH: usize = 64;

/// The short identifier a link is stored and looked up under.
///
/// Ids are 1-64 bytes long. Generated ids are built with
/// [`LinkId::new_unchecked`]; ids that come from callers go through
/// [`LinkId::new`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LinkId(String);

impl LinkId {
    /// Creates a new `LinkId` after checking its length.
    pub fn new(id: impl Into<String>) -> Result<Self, AllocError> {
        let id = id.into();
        Self::validate(&id)?;
        Ok(Self(id))
    }

    /// Creates a `LinkId` without validation.
    ///
    /// Use this only for ids produced by generators that are known to stay
    /// within the length bounds.
    pub fn new_unchecked(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Builds the public short URL for this id under `base_url`.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    fn validate(id: &str) -> Result<(), AllocError> {
        if id.is_empty() {
            return Err(AllocError::InvalidIdentifier(
                "identifier must not be empty".to_string(),
            ));
        }

        if id.len() > MAX_LENGTH {
            return Err(AllocError::InvalidIdentifier(format!(
                "identifier must be at most {} bytes, got {}",
                MAX_LENGTH,
                id.len()
            )));
        }

        Ok(())
    }
}

impl TryFrom<String> for LinkId {
    type Error = AllocError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LinkId> for String {
    fn from(value: LinkId) -> Self {
        value.0
    }
}

impl AsRef<str> for LinkId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for LinkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
