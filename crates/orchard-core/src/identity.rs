// Rust guideline compliant 2026-10-18

//! Fruit identifier generation and validation.
//!
//! IDs have the form `fruit_XXXXXXXX`, where the suffix is eight lowercase
//! hex characters taken from a random v4 UUID. The short suffix can collide,
//! so the registry reserves IDs with a vacancy check and retries on conflict.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Prefix shared by every fruit ID.
pub const ID_PREFIX: &str = "fruit_";

/// Number of hex characters after the prefix.
pub const ID_SUFFIX_LEN: usize = 8;

/// Opaque, unique fruit identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FruitId(String);

impl FruitId {
    /// Generates a fresh random ID.
    #[must_use]
    pub fn generate() -> Self {
        let hex = Uuid::new_v4().simple().to_string();
        Self(format!("{ID_PREFIX}{}", &hex[..ID_SUFFIX_LEN]))
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the mesh file name derived from this ID.
    #[must_use]
    pub fn mesh_file_name(&self) -> String {
        format!("{}.obj", self.0)
    }
}

impl fmt::Display for FruitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for FruitId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FruitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for FruitId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        validate_id_format(s)?;
        Ok(Self(s.to_string()))
    }
}

/// Validates the format of a fruit ID.
///
/// # Arguments
///
/// * `id` - Candidate ID string
///
/// # Errors
///
/// Returns `InvalidInput` if the prefix is missing or the suffix is not
/// eight lowercase hex characters.
pub fn validate_id_format(id: &str) -> Result<()> {
    let suffix = id.strip_prefix(ID_PREFIX).ok_or_else(|| {
        Error::InvalidInput(format!("Fruit ID must start with '{ID_PREFIX}': {id}"))
    })?;

    if suffix.len() != ID_SUFFIX_LEN {
        return Err(Error::InvalidInput(format!(
            "Fruit ID suffix must be {ID_SUFFIX_LEN} characters: {id}"
        )));
    }

    if !suffix
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    {
        return Err(Error::InvalidInput(format!(
            "Fruit ID suffix must be lowercase hex: {id}"
        )));
    }

    Ok(())
}
