//! Provider registry, settings and definition manifests.
//!
//! # Examples
//!
//! ```rust
//! use phodam::registry::{PhodamSettings, Registry};
//!
//! let settings = PhodamSettings::default().with_array_len(1, 3);
//! assert!(settings.validate().is_ok());
//! assert!(Registry::new().is_empty());
//! ```

pub use phodam_registry::*;
