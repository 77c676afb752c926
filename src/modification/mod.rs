//! Modify-operation requests.
//!
//! This module builds the change lists sent with an RFC 4511 modify
//! operation. Building is pure: nothing is sent until the request is handed
//! to a [`DirectoryClient`](crate::directory::DirectoryClient).
//!
//! # Examples
//!
//! ```rust
//! use ldap_schema::modification::{ModificationEntry, ModificationRequest};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut request = ModificationRequest::build("replace", [("title", vec!["Engineer"])])?;
//! request.push(ModificationEntry::delete_values("mail", ["old@example.com"])?);
//! assert_eq!(request.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod types;

pub use types::{IntoModificationMode, ModificationEntry, ModificationMode, ModificationRequest};
