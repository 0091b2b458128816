//! Creation facade.

use std::fmt;

use parking_lot::RwLock;
use phodam_core::{
	ARRAY_TYPE, ArrayProviderRegistration, ArrayRequest, Bundle, CreateRequest, Factory,
	PhodamResult, ProviderContext, ProviderKey, ProviderRegistration, TypeDefinition, Value,
};
use serde::de::DeserializeOwned;

use crate::registry::Registry;
use crate::settings::PhodamSettings;

/// Entry point for registering providers and creating test data.
///
/// A `Phodam` owns its registry; there is no process-wide instance. Create one
/// per test (or per suite) and pass it where it is needed.
///
/// Every `create` call resolves and invokes the provider anew. Results are
/// never cached.
///
/// # Example
///
/// ```
/// use phodam_core::{CreateRequest, FieldDefinition, ProviderRegistration, TypeDefinition, provider_fn};
/// use phodam_registry::Phodam;
/// use serde_json::json;
///
/// let phodam = Phodam::new();
/// phodam
/// 	.register_provider(ProviderRegistration::new("int", provider_fn(|_| Ok(json!(7)))))
/// 	.unwrap();
/// phodam
/// 	.register_type_definition(
/// 		TypeDefinition::new("app.Point")
/// 			.with_field("x", FieldDefinition::new("int"))
/// 			.with_field("y", FieldDefinition::new("int")),
/// 	)
/// 	.unwrap();
///
/// let point = phodam
/// 	.create(CreateRequest::new("app.Point").with_override("y", json!(-1)))
/// 	.unwrap();
/// assert_eq!(point, json!({ "x": 7, "y": -1 }));
/// ```
pub struct Phodam {
	registry: RwLock<Registry>,
	settings: PhodamSettings,
}

impl Phodam {
	/// Creates an instance with an empty registry and default settings.
	pub fn new() -> Self {
		Self::with_settings(PhodamSettings::default())
	}

	/// Creates an instance with an empty registry.
	pub fn with_settings(settings: PhodamSettings) -> Self {
		Self::from_registry(Registry::new(), settings)
	}

	/// Wraps an existing registry.
	///
	/// The registry's array field length is taken from `settings`.
	pub fn from_registry(mut registry: Registry, settings: PhodamSettings) -> Self {
		registry.set_array_len(settings.array_len_min, settings.array_len_max);
		Self {
			registry: RwLock::new(registry),
			settings,
		}
	}

	/// Creates an instance with the built-in primitive providers registered.
	#[cfg(feature = "builtins")]
	pub fn with_defaults() -> PhodamResult<Self> {
		Self::with_defaults_and_settings(PhodamSettings::default())
	}

	/// Creates an instance with the built-in primitive providers registered.
	#[cfg(feature = "builtins")]
	pub fn with_defaults_and_settings(settings: PhodamSettings) -> PhodamResult<Self> {
		let phodam = Self::with_settings(settings);
		phodam.register_bundle(&phodam_builtins::BuiltinBundle)?;
		Ok(phodam)
	}

	pub fn settings(&self) -> &PhodamSettings {
		&self.settings
	}

	/// Registers a provider. See [`Registry::register_provider`].
	pub fn register_provider(&self, registration: ProviderRegistration) -> PhodamResult<()> {
		self.registry.write().register_provider(registration)
	}

	/// Registers an array provider. See [`Registry::register_array_provider`].
	pub fn register_array_provider(
		&self,
		registration: ArrayProviderRegistration,
	) -> PhodamResult<()> {
		self.registry.write().register_array_provider(registration)
	}

	/// Registers a type definition. See [`Registry::register_type_definition`].
	pub fn register_type_definition(&self, definition: TypeDefinition) -> PhodamResult<()> {
		self.registry.write().register_type_definition(definition)
	}

	/// Registers a bundle. See [`Registry::register_bundle`].
	pub fn register_bundle(&self, bundle: &dyn Bundle) -> PhodamResult<()> {
		self.registry.write().register_bundle(bundle)
	}

	pub fn has_provider(&self, type_id: &str, name: Option<&str>) -> bool {
		self.registry.read().has_provider(type_id, name)
	}

	pub fn has_array_provider(&self, name: &str) -> bool {
		self.registry.read().has_array_provider(name)
	}

	/// Returns all registered typed keys, sorted.
	pub fn keys(&self) -> Vec<ProviderKey> {
		self.registry.read().keys()
	}

	/// Creates a value of a type.
	///
	/// Lookup failures are returned as they are; errors raised by the provider
	/// are wrapped into [`PhodamError::CreationFailed`] unless they already
	/// are one.
	///
	/// [`PhodamError::CreationFailed`]: phodam_core::PhodamError::CreationFailed
	pub fn create(&self, request: impl Into<CreateRequest>) -> PhodamResult<Value> {
		let (type_id, name, overrides, config) = request.into().into_parts();
		tracing::trace!(type_id = %type_id, name = ?name, "Creating value");

		// The read guard must be released before the provider runs; nested
		// creation takes it again.
		let provider = self.registry.read().resolve(&type_id, name.as_deref())?;

		let context = ProviderContext::new(self, type_id.clone(), name.clone(), overrides, config);
		provider
			.create(&context)
			.map_err(|error| error.into_creation_failure(&type_id, name.as_deref()))
	}

	/// Creates `count` values of a type, each with its own provider call.
	pub fn create_many(
		&self,
		request: impl Into<CreateRequest>,
		count: usize,
	) -> PhodamResult<Vec<Value>> {
		let request = request.into();
		(0..count).map(|_| self.create(request.clone())).collect()
	}

	/// Creates a value and deserializes it into `T`.
	pub fn create_as<T: DeserializeOwned>(&self, request: impl Into<CreateRequest>) -> PhodamResult<T> {
		let value = self.create(request)?;
		Ok(serde_json::from_value(value)?)
	}

	/// Creates a value from a named array provider.
	///
	/// The provider sees [`ARRAY_TYPE`] as its type and the array name as its
	/// name.
	pub fn create_array(&self, request: impl Into<ArrayRequest>) -> PhodamResult<Value> {
		let (name, overrides, config) = request.into().into_parts();
		tracing::trace!(name = %name, "Creating array value");

		let provider = self.registry.read().resolve_array(&name)?;

		let context = ProviderContext::new(self, ARRAY_TYPE, Some(name.clone()), overrides, config);
		provider
			.create(&context)
			.map_err(|error| error.into_creation_failure(ARRAY_TYPE, Some(&name)))
	}

	/// Creates a value from a named array provider and deserializes it.
	pub fn create_array_as<T: DeserializeOwned>(
		&self,
		request: impl Into<ArrayRequest>,
	) -> PhodamResult<T> {
		let value = self.create_array(request)?;
		Ok(serde_json::from_value(value)?)
	}
}

impl Default for Phodam {
	fn default() -> Self {
		Self::new()
	}
}

impl Factory for Phodam {
	fn create_value(&self, request: CreateRequest) -> PhodamResult<Value> {
		self.create(request)
	}

	fn create_array_value(&self, request: ArrayRequest) -> PhodamResult<Value> {
		self.create_array(request)
	}
}

impl fmt::Debug for Phodam {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Phodam")
			.field("registry", &*self.registry.read())
			.field("settings", &self.settings)
			.finish()
	}
}
