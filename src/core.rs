//! Definitions, provider context and errors.
//!
//! # Examples
//!
//! ```rust
//! use phodam::core::{FieldDefinition, TypeDefinition};
//!
//! let user = TypeDefinition::new("app.User").with_field("id", FieldDefinition::new("int"));
//! assert!(user.has_field("id"));
//! ```

pub use phodam_core::*;
