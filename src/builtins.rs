//! Built-in providers for primitive types.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "builtins")]
//! # {
//! use phodam::builtins::types;
//!
//! assert_eq!(types::DATETIME, "datetime");
//! # }
//! ```

#[cfg(feature = "builtins")]
pub use phodam_builtins::*;
