//! Registrations and bundles.
//!
//! A registration describes one provider and the slot it occupies. A
//! [`ProviderBundle`] is a plain list of registrations and type definitions
//! that a registry consumes in one go; it performs no discovery itself.

use std::fmt;
use std::sync::Arc;

use crate::definition::TypeDefinition;
use crate::provider::Provider;
use crate::value::ProviderKey;

/// A provider together with the `(type, name)` slot it registers under.
#[derive(Clone)]
pub struct ProviderRegistration {
	key: ProviderKey,
	overriding: bool,
	provider: Arc<dyn Provider>,
}

impl ProviderRegistration {
	/// Registers `provider` for the default slot of `type_id`.
	pub fn new(type_id: impl Into<String>, provider: impl Provider + 'static) -> Self {
		Self::from_arc(type_id, Arc::new(provider))
	}

	/// Registers an already shared provider.
	pub fn from_arc(type_id: impl Into<String>, provider: Arc<dyn Provider>) -> Self {
		Self {
			key: ProviderKey::unnamed(type_id),
			overriding: false,
			provider,
		}
	}

	/// Registers under a named slot instead of the default one.
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.key.name = Some(name.into());
		self
	}

	/// Allows replacing an existing registration for the same slot.
	pub fn with_overriding(mut self, overriding: bool) -> Self {
		self.overriding = overriding;
		self
	}

	pub fn key(&self) -> &ProviderKey {
		&self.key
	}

	pub fn type_id(&self) -> &str {
		&self.key.type_id
	}

	pub fn name(&self) -> Option<&str> {
		self.key.name()
	}

	pub fn is_overriding(&self) -> bool {
		self.overriding
	}

	pub fn provider(&self) -> &Arc<dyn Provider> {
		&self.provider
	}

	/// Splits the registration into key, overriding flag and provider.
	pub fn into_parts(self) -> (ProviderKey, bool, Arc<dyn Provider>) {
		(self.key, self.overriding, self.provider)
	}
}

impl fmt::Debug for ProviderRegistration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ProviderRegistration")
			.field("key", &self.key)
			.field("overriding", &self.overriding)
			.finish_non_exhaustive()
	}
}

/// A provider registered in the array keyspace under a name.
#[derive(Clone)]
pub struct ArrayProviderRegistration {
	name: String,
	overriding: bool,
	provider: Arc<dyn Provider>,
}

impl ArrayProviderRegistration {
	/// Registers `provider` as the array provider `name`.
	pub fn new(name: impl Into<String>, provider: impl Provider + 'static) -> Self {
		Self::from_arc(name, Arc::new(provider))
	}

	/// Registers an already shared provider.
	pub fn from_arc(name: impl Into<String>, provider: Arc<dyn Provider>) -> Self {
		Self {
			name: name.into(),
			overriding: false,
			provider,
		}
	}

	/// Allows replacing an existing array provider of the same name.
	pub fn with_overriding(mut self, overriding: bool) -> Self {
		self.overriding = overriding;
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn is_overriding(&self) -> bool {
		self.overriding
	}

	pub fn provider(&self) -> &Arc<dyn Provider> {
		&self.provider
	}

	/// Splits the registration into name, overriding flag and provider.
	pub fn into_parts(self) -> (String, bool, Arc<dyn Provider>) {
		(self.name, self.overriding, self.provider)
	}
}

impl fmt::Debug for ArrayProviderRegistration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ArrayProviderRegistration")
			.field("name", &self.name)
			.field("overriding", &self.overriding)
			.finish_non_exhaustive()
	}
}

/// Group of registrations applied to a registry together.
///
/// # Example
///
/// ```
/// use phodam_core::{FieldDefinition, ProviderBundle, ProviderRegistration, TypeDefinition};
/// use phodam_core::provider_fn;
/// use serde_json::json;
///
/// let bundle = ProviderBundle::new()
/// 	.with_provider(ProviderRegistration::new("int", provider_fn(|_| Ok(json!(7)))))
/// 	.with_type_definition(
/// 		TypeDefinition::new("app.User").with_field("id", FieldDefinition::new("int")),
/// 	);
///
/// assert_eq!(bundle.providers().len(), 1);
/// assert_eq!(bundle.type_definitions().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProviderBundle {
	providers: Vec<ProviderRegistration>,
	array_providers: Vec<ArrayProviderRegistration>,
	type_definitions: Vec<TypeDefinition>,
}

impl ProviderBundle {
	/// Creates an empty bundle.
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_provider(mut self, registration: ProviderRegistration) -> Self {
		self.providers.push(registration);
		self
	}

	pub fn with_array_provider(mut self, registration: ArrayProviderRegistration) -> Self {
		self.array_providers.push(registration);
		self
	}

	pub fn with_type_definition(mut self, definition: TypeDefinition) -> Self {
		self.type_definitions.push(definition);
		self
	}

	/// Appends every registration of `other`.
	pub fn merge(mut self, other: ProviderBundle) -> Self {
		self.providers.extend(other.providers);
		self.array_providers.extend(other.array_providers);
		self.type_definitions.extend(other.type_definitions);
		self
	}

	pub fn providers(&self) -> &[ProviderRegistration] {
		&self.providers
	}

	pub fn array_providers(&self) -> &[ArrayProviderRegistration] {
		&self.array_providers
	}

	pub fn type_definitions(&self) -> &[TypeDefinition] {
		&self.type_definitions
	}

	pub fn is_empty(&self) -> bool {
		self.providers.is_empty()
			&& self.array_providers.is_empty()
			&& self.type_definitions.is_empty()
	}

	/// Splits the bundle into providers, array providers and definitions.
	pub fn into_parts(
		self,
	) -> (
		Vec<ProviderRegistration>,
		Vec<ArrayProviderRegistration>,
		Vec<TypeDefinition>,
	) {
		(self.providers, self.array_providers, self.type_definitions)
	}
}

/// Source of a [`ProviderBundle`].
///
/// Implemented by collaborator types that assemble their registrations, e.g.
/// a crate exposing providers for its own domain types.
pub trait Bundle {
	/// Returns the registrations of this bundle.
	fn bundle(&self) -> ProviderBundle;
}

impl Bundle for ProviderBundle {
	fn bundle(&self) -> ProviderBundle {
		self.clone()
	}
}
