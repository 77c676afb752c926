//! Modification request data types.
//!
//! A [`ModificationRequest`] is the ordered list of changes sent with one
//! RFC 4511 modify operation. Servers apply the changes in sequence, so the
//! order of entries is part of the request's meaning.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The change applied by one [`ModificationEntry`].
///
/// The discriminants are the RFC 4511 `operation` codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModificationMode {
    Add = 0,
    Delete = 1,
    Replace = 2,
}

impl ModificationMode {
    /// Protocol code of the mode.
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Delete => "delete",
            Self::Replace => "replace",
        }
    }

    /// Whether entries of this mode must carry at least one value.
    pub fn requires_values(self) -> bool {
        !matches!(self, Self::Delete)
    }
}

impl fmt::Display for ModificationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<i32> for ModificationMode {
    type Error = ValidationError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Add),
            1 => Ok(Self::Delete),
            2 => Ok(Self::Replace),
            other => Err(ValidationError::invalid_mode(other.to_string())),
        }
    }
}

impl FromStr for ModificationMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("add") {
            Ok(Self::Add)
        } else if s.eq_ignore_ascii_case("delete") {
            Ok(Self::Delete)
        } else if s.eq_ignore_ascii_case("replace") {
            Ok(Self::Replace)
        } else {
            Err(ValidationError::invalid_mode(s))
        }
    }
}

/// Anything that names a modification mode: the enum itself, a protocol
/// code, or a mode name.
pub trait IntoModificationMode {
    fn into_mode(self) -> ValidationResult<ModificationMode>;
}

impl IntoModificationMode for ModificationMode {
    fn into_mode(self) -> ValidationResult<ModificationMode> {
        Ok(self)
    }
}

impl IntoModificationMode for i32 {
    fn into_mode(self) -> ValidationResult<ModificationMode> {
        ModificationMode::try_from(self)
    }
}

impl IntoModificationMode for &str {
    fn into_mode(self) -> ValidationResult<ModificationMode> {
        self.parse()
    }
}

impl IntoModificationMode for String {
    fn into_mode(self) -> ValidationResult<ModificationMode> {
        self.as_str().parse()
    }
}

/// One change to one attribute of an entry.
///
/// Entries can only be created through validating constructors, so every
/// value of this type has a well-formed attribute description and, for add
/// and replace, at least one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModificationEntry {
    mode: ModificationMode,
    attribute: String,
    values: Vec<String>,
}

impl ModificationEntry {
    /// Create a validated entry.
    ///
    /// A delete entry with an empty value list removes the whole attribute;
    /// with values it removes only those values.
    pub fn new(
        mode: ModificationMode,
        attribute: impl Into<String>,
        values: Vec<String>,
    ) -> ValidationResult<Self> {
        let attribute = attribute.into();
        super::builder::validate_entry(mode, &attribute, &values)?;
        Ok(Self {
            mode,
            attribute,
            values,
        })
    }

    pub fn add<I, V>(attribute: impl Into<String>, values: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self::new(
            ModificationMode::Add,
            attribute,
            values.into_iter().map(Into::into).collect(),
        )
    }

    pub fn replace<I, V>(attribute: impl Into<String>, values: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self::new(
            ModificationMode::Replace,
            attribute,
            values.into_iter().map(Into::into).collect(),
        )
    }

    /// Remove the attribute entirely.
    pub fn delete(attribute: impl Into<String>) -> ValidationResult<Self> {
        Self::new(ModificationMode::Delete, attribute, Vec::new())
    }

    /// Remove only the listed values of the attribute.
    pub fn delete_values<I, V>(attribute: impl Into<String>, values: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self::new(
            ModificationMode::Delete,
            attribute,
            values.into_iter().map(Into::into).collect(),
        )
    }

    pub fn mode(&self) -> ModificationMode {
        self.mode
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Whether this is a delete of the whole attribute.
    pub fn is_whole_attribute_delete(&self) -> bool {
        self.mode == ModificationMode::Delete && self.values.is_empty()
    }
}

/// The ordered changes of one modify operation.
///
/// The only mutation exposed is appending; entries already in the request
/// cannot be changed or reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ModificationRequest {
    entries: Vec<ModificationEntry>,
}

impl ModificationRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ModificationEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ModificationEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ModificationEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<ModificationEntry> {
        self.entries
    }

    pub(super) fn from_entries(entries: Vec<ModificationEntry>) -> Self {
        Self { entries }
    }

    pub(super) fn extend_entries(&mut self, entries: Vec<ModificationEntry>) {
        self.entries.extend(entries);
    }
}

impl IntoIterator for ModificationRequest {
    type Item = ModificationEntry;
    type IntoIter = std::vec::IntoIter<ModificationEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ModificationRequest {
    type Item = &'a ModificationEntry;
    type IntoIter = std::slice::Iter<'a, ModificationEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
