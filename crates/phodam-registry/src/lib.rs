//! Provider registry and creation facade for Phodam.
//!
//! - [`Registry`] - `(type, name)` → provider or type definition, plus a
//!   separate keyspace of named array providers
//! - [`DefinitionProvider`] - synthesizes objects from a [`TypeDefinition`]
//! - [`Phodam`] - the facade tests talk to: registration and `create*` calls
//! - [`PhodamSettings`] - tunables loaded from defaults, TOML or environment
//! - [`manifest`] - type definitions declared in JSON/YAML files
//!
//! # Features
//!
//! - `builtins` - [`Phodam::with_defaults`] with providers for primitive types
//!   (enabled by default)
//! - `yaml` - YAML manifests
//!
//! # Quick Start
//!
//! ```
//! use phodam_core::{FieldDefinition, ProviderRegistration, TypeDefinition, provider_fn};
//! use phodam_registry::Phodam;
//! use serde_json::json;
//!
//! let phodam = Phodam::new();
//! phodam
//! 	.register_provider(ProviderRegistration::new("string", provider_fn(|_| Ok(json!("Ada")))))
//! 	.unwrap();
//! phodam
//! 	.register_type_definition(
//! 		TypeDefinition::new("app.User").with_field("name", FieldDefinition::new("string")),
//! 	)
//! 	.unwrap();
//!
//! assert_eq!(phodam.create("app.User").unwrap(), json!({ "name": "Ada" }));
//! ```
//!
//! [`TypeDefinition`]: phodam_core::TypeDefinition

pub mod facade;
pub mod manifest;
pub mod prelude;
pub mod registry;
pub mod settings;
pub mod synthesis;

pub use facade::Phodam;
pub use manifest::{DefinitionManifest, ManifestFormat, ManifestLoader};
pub use registry::{Registry, RegistryEntry};
pub use settings::{PhodamSettings, SettingsError};
pub use synthesis::DefinitionProvider;
