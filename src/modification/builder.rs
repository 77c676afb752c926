//! Construction of validated modification requests.
//!
//! [`ModificationRequest::build`] turns an attribute-to-values mapping into
//! one entry per attribute. The mode is resolved before the mapping is
//! touched, and any invalid attribute fails the whole build.

use super::types::{IntoModificationMode, ModificationEntry, ModificationMode, ModificationRequest};
use crate::error::{ValidationError, ValidationResult};
use crate::schema::oid::Oid;

impl ModificationRequest {
    /// Build a request applying `mode` to every attribute of `attributes`.
    ///
    /// Entries follow the iteration order of `attributes`. In delete mode
    /// every entry removes its whole attribute and supplied values are
    /// ignored; use [`ModificationEntry::delete_values`] to remove single
    /// values.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidMode`] if `mode` is not add, delete or
    /// replace, or the first attribute/value validation failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ldap_schema::modification::{ModificationMode, ModificationRequest};
    ///
    /// let request =
    ///     ModificationRequest::build("add", [("cn", vec!["Alice", "A. Smith"])]).unwrap();
    /// let entry = &request.entries()[0];
    /// assert_eq!(entry.mode(), ModificationMode::Add);
    /// assert_eq!(entry.values(), ["Alice", "A. Smith"]);
    ///
    /// assert!(ModificationRequest::build(7, [("cn", vec!["Alice"])]).is_err());
    /// ```
    pub fn build<M, I, K, V, S>(mode: M, attributes: I) -> ValidationResult<Self>
    where
        M: IntoModificationMode,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mode = mode.into_mode()?;
        build_entries(mode, attributes).map(Self::from_entries)
    }

    /// Build entries as with [`build`](Self::build) and append them.
    ///
    /// On error the request is left unchanged.
    pub fn append<M, I, K, V, S>(&mut self, mode: M, attributes: I) -> ValidationResult<()>
    where
        M: IntoModificationMode,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mode = mode.into_mode()?;
        let entries = build_entries(mode, attributes)?;
        self.extend_entries(entries);
        Ok(())
    }
}

fn build_entries<I, K, V, S>(
    mode: ModificationMode,
    attributes: I,
) -> ValidationResult<Vec<ModificationEntry>>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: IntoIterator<Item = S>,
    S: Into<String>,
{
    attributes
        .into_iter()
        .map(|(attribute, values)| {
            let values = match mode {
                ModificationMode::Delete => Vec::new(),
                _ => values.into_iter().map(Into::into).collect(),
            };
            ModificationEntry::new(mode, attribute, values)
        })
        .collect()
}

/// Check one entry's attribute description and values.
pub(super) fn validate_entry(
    mode: ModificationMode,
    attribute: &str,
    values: &[String],
) -> ValidationResult<()> {
    if attribute.is_empty() {
        return Err(ValidationError::EmptyAttributeName {
            mode: mode.to_string(),
        });
    }
    if !is_attribute_description(attribute) {
        return Err(ValidationError::InvalidAttributeName {
            attribute: attribute.to_string(),
            mode: mode.to_string(),
        });
    }
    if mode.requires_values() && values.is_empty() {
        return Err(ValidationError::empty_values(attribute, mode.to_string()));
    }
    if let Some(index) = values.iter().position(|v| v.contains('\0')) {
        return Err(ValidationError::InvalidValue {
            attribute: attribute.to_string(),
            mode: mode.to_string(),
            index,
            reason: "value contains a NUL character".to_string(),
        });
    }
    Ok(())
}

/// `attributedescription = attributetype options` (RFC 4512 §2.5)
fn is_attribute_description(value: &str) -> bool {
    let mut parts = value.split(';');
    let attribute_type = parts.next().unwrap_or_default();
    let valid_type = is_descr(attribute_type) || Oid::is_valid(attribute_type);
    valid_type && parts.all(is_option)
}

fn is_descr(value: &str) -> bool {
    value.starts_with(|c: char| c.is_ascii_alphabetic())
        && value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn is_option(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
