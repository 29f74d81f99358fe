//! News record identifier type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::InvalidIdError;

/// The unique identifier of a news record.
///
/// Ids are v4 UUIDs, assigned by the store on creation and immutable
/// thereafter.
///
/// # Example
///
/// ```
/// use tidings_core::NewsId;
///
/// let id = NewsId::parse("3b082d9d-1dc7-4d1f-907e-50d449a03d45").unwrap();
/// assert_eq!(id.to_string(), "3b082d9d-1dc7-4d1f-907e-50d449a03d45");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewsId(Uuid);

impl NewsId {
    /// Generate a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an id from its string form, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error naming the rejected input if it is not a valid UUID.
    pub fn parse(s: &str) -> Result<Self, InvalidIdError> {
        Uuid::parse_str(s).map(Self).map_err(|err| InvalidIdError {
            value: s.to_string(),
            reason: err.to_string(),
        })
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for NewsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NewsId {
    type Err = InvalidIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for NewsId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}
