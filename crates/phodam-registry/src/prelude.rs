//! Convenience re-exports for common usage.
//!
//! ```ignore
//! use phodam_registry::prelude::*;
//! ```

// Core types
pub use phodam_core::{
	ArrayProviderRegistration, ArrayRequest, Bundle, Config, CreateRequest, FieldDefinition,
	Overrides, PhodamError, PhodamResult, Provider, ProviderBundle, ProviderContext,
	ProviderRegistration, TypeDefinition, Value, provider_fn,
};

// Registry types
pub use crate::facade::Phodam;
pub use crate::manifest::{DefinitionManifest, ManifestLoader};
pub use crate::registry::Registry;
pub use crate::settings::PhodamSettings;
