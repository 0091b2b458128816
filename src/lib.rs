//! # Phodam
//!
//! Build realistic test data with minimal boilerplate.
//!
//! Tests ask a [`Phodam`] instance for a value of some type. Values come from
//! providers registered under a `(type, name)` key, or are synthesized field by
//! field from a [`TypeDefinition`] whose fields name other registered types.
//! Overrides pin individual fields; everything else is generated.
//!
//! ## Feature Flags
//!
//! - `builtins` (default) - providers for `int`, `float`, `string`, `bool`,
//!   `uuid` and `datetime`, registered by [`Phodam::with_defaults`]
//! - `yaml` - YAML definition manifests
//! - `full` - all of the above
//!
//! ## Quick Example
//!
//! ```rust
//! # #[cfg(feature = "builtins")]
//! # {
//! use phodam::prelude::*;
//! use serde_json::json;
//!
//! let phodam = Phodam::with_defaults().unwrap();
//! phodam
//! 	.register_type_definition(
//! 		TypeDefinition::new("app.User")
//! 			.with_field("id", FieldDefinition::new("int"))
//! 			.with_field("email", FieldDefinition::new("string").with_name("email"))
//! 			.with_field("tags", FieldDefinition::new("string").with_array(true)),
//! 	)
//! 	.unwrap();
//!
//! let user = phodam
//! 	.create(CreateRequest::new("app.User").with_override("id", json!(42)))
//! 	.unwrap();
//!
//! assert_eq!(user["id"], json!(42));
//! assert!(user["email"].as_str().unwrap().contains('@'));
//! # }
//! ```
//!
//! ## Custom Providers
//!
//! Any `Fn(&ProviderContext) -> PhodamResult<Value>` is a provider once it is
//! passed through [`provider_fn`]:
//!
//! ```rust
//! use phodam::prelude::*;
//! use serde_json::json;
//!
//! let phodam = Phodam::new();
//! phodam
//! 	.register_provider(
//! 		ProviderRegistration::new(
//! 			"app.User",
//! 			provider_fn(|context| {
//! 				let role = context.config_str("role")?.unwrap_or("member");
//! 				Ok(json!({ "role": role }))
//! 			}),
//! 		)
//! 		.with_name("admin"),
//! 	)
//! 	.unwrap();
//!
//! let admin = phodam
//! 	.create(CreateRequest::new("app.User").with_name("admin"))
//! 	.unwrap();
//! assert_eq!(admin, json!({ "role": "member" }));
//! ```

#[cfg(feature = "builtins")]
pub mod builtins;
pub mod core;
pub mod registry;

pub use phodam_core::{
	ARRAY_TYPE, ArrayProviderRegistration, ArrayRequest, Bundle, Config, CreateRequest, Factory,
	FieldDefinition, Overrides, PhodamError, PhodamResult, Provider, ProviderBundle,
	ProviderContext, ProviderKey, ProviderRegistration, TypeDefinition, Value, provider_fn,
};
pub use phodam_registry::{
	DefinitionManifest, ManifestFormat, ManifestLoader, Phodam, PhodamSettings, Registry,
	SettingsError,
};

#[cfg(feature = "builtins")]
pub use phodam_builtins::BuiltinBundle;

/// Convenience re-exports for common usage.
pub mod prelude {
	pub use crate::{
		ArrayProviderRegistration, ArrayRequest, Bundle, CreateRequest, FieldDefinition,
		Overrides, Phodam, PhodamError, PhodamResult, PhodamSettings, ProviderBundle,
		ProviderContext, ProviderRegistration, TypeDefinition, Value, provider_fn,
	};

	#[cfg(feature = "builtins")]
	pub use crate::BuiltinBundle;
}
