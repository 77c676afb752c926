//! Oid value object for numeric object identifiers.
//!
//! This module provides a type-safe wrapper around dotted-decimal OIDs
//! (RFC 4512 `numericoid`). Every parsed schema element carries one, so the
//! validation here is what guarantees the OID invariant on parsed records.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A validated numeric object identifier.
///
/// ## Validation Rules
///
/// - At least two arcs separated by `.`
/// - Every arc is a non-empty run of ASCII digits
/// - No arc has a leading zero unless it is exactly `0`
///
/// ## Examples
///
/// ```rust
/// use ldap_schema::schema::Oid;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let oid = Oid::new("2.5.4.3".to_string())?;
///     assert_eq!(oid.arcs().count(), 4);
///
///     assert!(Oid::new("cn".to_string()).is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Oid(String);

impl Oid {
    /// Create a new Oid with validation.
    pub fn new(value: String) -> ValidationResult<Self> {
        Self::validate_format(&value)?;
        Ok(Self(value))
    }

    /// Get the string representation of the OID.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the owned string value of the OID.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Iterate over the numeric arcs.
    pub fn arcs(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Whether `value` is a syntactically valid numeric OID.
    pub fn is_valid(value: &str) -> bool {
        Self::validate_format(value).is_ok()
    }

    fn validate_format(value: &str) -> ValidationResult<()> {
        let invalid = || ValidationError::InvalidOid {
            value: value.to_string(),
        };

        let mut arcs = 0;
        for arc in value.split('.') {
            if arc.is_empty() || !arc.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            if arc.len() > 1 && arc.starts_with('0') {
                return Err(invalid());
            }
            arcs += 1;
        }

        if arcs < 2 {
            return Err(invalid());
        }

        Ok(())
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Oid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Oid {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        Self::new(s.to_string())
    }
}

impl Serialize for Oid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Oid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<String> for Oid {
    type Error = ValidationError;

    fn try_from(value: String) -> ValidationResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Oid {
    type Error = ValidationError;

    fn try_from(value: &str) -> ValidationResult<Self> {
        Self::new(value.to_string())
    }
}
