//! Error types for schema parsing, request building and directory access.
//!
//! The pure components each have their own error type ([`ParseError`] for the
//! schema parser, [`ValidationError`] for the modification builder) so callers
//! can match on structured fields. [`LdapError`] wraps both together with
//! failures reported by the directory collaborator.

use crate::schema::types::SchemaElementKind;

/// Main error type for directory operations.
///
/// This enum covers every failure the [`DirectoryService`](crate::service::DirectoryService)
/// can surface: parse and validation failures from the pure core, and errors
/// returned by the directory client, which are carried unchanged as the source.
#[derive(Debug, thiserror::Error)]
pub enum LdapError {
    /// A schema definition string did not match its grammar
    #[error("Schema parse error: {0}")]
    Parse(#[from] ParseError),

    /// A modification request could not be built
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The directory client reported a failure
    #[error("Directory {operation} on '{dn}' failed: {source}")]
    Directory {
        operation: &'static str,
        dn: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The subschema search returned no entry
    #[error("Subschema subentry not found: {dn}")]
    SchemaNotFound { dn: String },

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] BuildError),
}

/// Reason a single definition string was rejected.
///
/// Grammar functions return this bare reason; [`ParseErrorKind::in_attribute`]
/// attaches the attribute name, element kind and the offending string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("definition is empty")]
    Empty,

    #[error("definition must start with '('")]
    MissingOpenParen,

    #[error("unterminated parenthesis")]
    UnterminatedParen,

    #[error("missing leading numeric OID")]
    MissingOid,

    #[error("invalid numeric OID '{value}'")]
    InvalidOid { value: String },

    #[error("unterminated quoted string")]
    UnterminatedQuote,

    #[error("unexpected token '{found}'")]
    UnexpectedToken { found: String },

    #[error("keyword {keyword} requires a value")]
    MissingValue { keyword: String },

    #[error("keyword {keyword} appears more than once")]
    DuplicateKeyword { keyword: String },

    #[error("unknown attribute usage '{value}'")]
    InvalidUsage { value: String },

    #[error("invalid syntax length '{value}'")]
    InvalidSyntaxLength { value: String },

    #[error("unexpected data after closing parenthesis")]
    TrailingData,
}

impl ParseErrorKind {
    /// Attach the attribute context to a bare grammar failure.
    pub fn in_attribute(
        self,
        attribute: impl Into<String>,
        kind: SchemaElementKind,
        definition: impl Into<String>,
    ) -> ParseError {
        ParseError {
            attribute: attribute.into(),
            kind,
            definition: definition.into(),
            reason: self,
        }
    }
}

/// A schema definition string that does not conform to its kind's grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{attribute} ({kind}): {reason} in `{definition}`")]
pub struct ParseError {
    /// Attribute the definition was returned under (e.g. `objectClasses`)
    pub attribute: String,
    /// Grammar that was applied
    pub kind: SchemaElementKind,
    /// The raw definition string
    pub definition: String,
    /// What was wrong with it
    #[source]
    pub reason: ParseErrorKind,
}

/// Validation errors raised while building a modification request.
///
/// Every variant carries the offending mode and/or attribute as fields so
/// callers can render or match on them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Mode outside add/delete/replace
    #[error("Invalid modification mode '{mode}', expected add, delete or replace")]
    InvalidMode { mode: String },

    /// Attribute name is empty
    #[error("Attribute name cannot be empty ({mode})")]
    EmptyAttributeName { mode: String },

    /// Attribute name is not a valid attribute description
    #[error("Attribute '{attribute}' is not a valid attribute description ({mode})")]
    InvalidAttributeName { attribute: String, mode: String },

    /// Add or replace without values
    #[error("Attribute '{attribute}' requires at least one value ({mode})")]
    EmptyValues { attribute: String, mode: String },

    /// A value cannot be sent to the directory
    #[error("Attribute '{attribute}' value #{index} is invalid ({mode}): {reason}")]
    InvalidValue {
        attribute: String,
        mode: String,
        index: usize,
        reason: String,
    },

    /// String is not a numeric OID
    #[error("Invalid numeric OID '{value}'")]
    InvalidOid { value: String },
}

/// Errors raised while configuring a [`DirectoryService`](crate::service::DirectoryService).
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Invalid configuration provided
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// Configuration document could not be deserialized
    #[error("Malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl LdapError {
    /// Wrap a directory client failure with the operation and target DN.
    pub fn directory<E>(operation: &'static str, dn: impl Into<String>, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Directory {
            operation,
            dn: dn.into(),
            source: Box::new(error),
        }
    }

    /// Create a schema not found error
    pub fn schema_not_found(dn: impl Into<String>) -> Self {
        Self::SchemaNotFound { dn: dn.into() }
    }
}

impl ValidationError {
    /// Create an invalid mode error
    pub fn invalid_mode(mode: impl Into<String>) -> Self {
        Self::InvalidMode { mode: mode.into() }
    }

    /// Create an empty values error
    pub fn empty_values(attribute: impl Into<String>, mode: impl Into<String>) -> Self {
        Self::EmptyValues {
            attribute: attribute.into(),
            mode: mode.into(),
        }
    }

    /// The attribute this error refers to, if any.
    pub fn attribute(&self) -> Option<&str> {
        match self {
            Self::InvalidAttributeName { attribute, .. }
            | Self::EmptyValues { attribute, .. }
            | Self::InvalidValue { attribute, .. } => Some(attribute),
            Self::EmptyAttributeName { .. }
            | Self::InvalidMode { .. }
            | Self::InvalidOid { .. } => None,
        }
    }
}

impl BuildError {
    /// Create an invalid configuration error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }
}

// Result type aliases for convenience
pub type LdapResult<T> = Result<T, LdapError>;
pub type ParseResult<T> = Result<T, ParseError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
pub type BuildResult<T> = Result<T, BuildError>;
