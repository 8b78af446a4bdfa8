//! Random unique identifiers
//!
//! Version-4 UUIDs drawn from the operating system's secure random source,
//! rendered in the usual lowercase 8-4-4-4-12 hyphenated form.

use crate::error::{Error, Result};
use rand::rngs::OsRng;
use rand::TryRngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};
use uuid::{Builder, Uuid};

/// Length of a hyphenated UUID string
const HYPHENATED_LEN: usize = 36;

/// Byte offsets of the hyphens in a hyphenated UUID string
const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// Generate a random version-4 UUID string.
///
/// Panics if the platform provides no secure random source. Use
/// [`try_generate_uuid`] to handle that case instead.
pub fn generate_uuid() -> String {
    let id = Uuid::new_v4().to_string();
    trace!("Generated UUID {}", id);
    id
}

/// Generate a random version-4 UUID string, reporting entropy failures.
pub fn try_generate_uuid() -> Result<String> {
    let id = os_random_uuid()?.to_string();
    trace!("Generated UUID {}", id);
    Ok(id)
}

fn os_random_uuid() -> Result<Uuid> {
    let mut bytes = [0u8; 16];
    OsRng.try_fill_bytes(&mut bytes).map_err(|e| {
        debug!("OS random source unavailable: {}", e);
        Error::Entropy(e.to_string())
    })?;

    Ok(Builder::from_random_bytes(bytes).into_uuid())
}

/// Whether `s` has the hyphenated 8-4-4-4-12 hexadecimal layout.
///
/// Accepts either letter case. Does not check version or variant bits.
pub fn is_uuid_format(s: &str) -> bool {
    s.len() == HYPHENATED_LEN
        && s.bytes().enumerate().all(|(i, b)| {
            if HYPHEN_POSITIONS.contains(&i) {
                b == b'-'
            } else {
                b.is_ascii_hexdigit()
            }
        })
}

/// Unique identifier backed by a random UUID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(Uuid);

impl Identifier {
    /// Create a new random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a new random identifier, reporting entropy failures
    pub fn try_new() -> Result<Self> {
        os_random_uuid().map(Self)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for Identifier {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for Identifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        // Uuid::parse_str also accepts simple, braced and urn forms
        if !is_uuid_format(s) {
            return Err(Error::IdentifierFormat(s.to_string()));
        }
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl TryFrom<String> for Identifier {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.to_string()
    }
}

impl From<Uuid> for Identifier {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}
