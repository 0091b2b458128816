//! Provider registry.
//!
//! The registry maps `(type, name)` keys to either an explicit provider or a
//! [`TypeDefinition`]. Array providers live in a separate keyspace keyed by
//! name only, so the same name can be used for a typed provider and an array
//! provider without collision.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use phodam_core::{
	ArrayProviderRegistration, Bundle, PhodamError, PhodamResult, Provider, ProviderKey,
	ProviderRegistration, TypeDefinition,
};

use crate::settings::{DEFAULT_ARRAY_LEN_MAX, DEFAULT_ARRAY_LEN_MIN};
use crate::synthesis::DefinitionProvider;

/// What a registry key resolves to.
#[derive(Clone)]
pub enum RegistryEntry {
	/// Explicitly registered provider.
	Provider(Arc<dyn Provider>),
	/// Definition used to synthesize values field by field.
	Definition(Arc<TypeDefinition>),
}

impl RegistryEntry {
	fn kind(&self) -> &'static str {
		match self {
			Self::Provider(_) => "provider",
			Self::Definition(_) => "type definition",
		}
	}
}

impl fmt::Debug for RegistryEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Provider(_) => f.write_str("Provider(..)"),
			Self::Definition(definition) => f.debug_tuple("Definition").field(definition).finish(),
		}
	}
}

/// Store of providers and type definitions.
///
/// Registration fails with [`PhodamError::DuplicateProvider`] when the key is
/// already taken, unless the registration is marked overriding; a failed
/// registration leaves the registry untouched.
///
/// # Example
///
/// ```
/// use phodam_core::{ProviderRegistration, provider_fn};
/// use phodam_registry::Registry;
/// use serde_json::json;
///
/// let mut registry = Registry::new();
/// registry
/// 	.register_provider(ProviderRegistration::new("int", provider_fn(|_| Ok(json!(1)))))
/// 	.unwrap();
///
/// assert!(registry.has_provider("int", None));
/// assert!(registry.resolve("int", Some("big")).is_err());
/// ```
pub struct Registry {
	entries: HashMap<ProviderKey, RegistryEntry>,
	array_providers: HashMap<String, Arc<dyn Provider>>,
	array_len: (usize, usize),
}

impl Registry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self {
			entries: HashMap::new(),
			array_providers: HashMap::new(),
			array_len: (DEFAULT_ARRAY_LEN_MIN, DEFAULT_ARRAY_LEN_MAX),
		}
	}

	/// Sets the inclusive length range used for array fields of definitions.
	pub fn set_array_len(&mut self, min: usize, max: usize) {
		self.array_len = (min, max);
	}

	pub fn array_len(&self) -> (usize, usize) {
		self.array_len
	}

	/// Registers a provider under its `(type, name)` key.
	///
	/// # Errors
	///
	/// Returns [`PhodamError::DuplicateProvider`] if the key is occupied and
	/// the registration is not overriding.
	pub fn register_provider(&mut self, registration: ProviderRegistration) -> PhodamResult<()> {
		let (key, overriding, provider) = registration.into_parts();
		self.insert(key, overriding, RegistryEntry::Provider(provider))
	}

	/// Registers a type definition under `(definition.type, definition.name)`.
	///
	/// # Errors
	///
	/// Returns [`PhodamError::DuplicateProvider`] if the key is occupied and
	/// the definition is not overriding.
	pub fn register_type_definition(&mut self, definition: TypeDefinition) -> PhodamResult<()> {
		let key = definition.key();
		let overriding = definition.is_overriding();
		self.insert(key, overriding, RegistryEntry::Definition(Arc::new(definition)))
	}

	/// Registers a provider in the array keyspace.
	///
	/// # Errors
	///
	/// Returns [`PhodamError::DuplicateArrayProvider`] if the name is taken
	/// and the registration is not overriding.
	pub fn register_array_provider(
		&mut self,
		registration: ArrayProviderRegistration,
	) -> PhodamResult<()> {
		let (name, overriding, provider) = registration.into_parts();

		if self.array_providers.contains_key(&name) {
			if !overriding {
				return Err(PhodamError::DuplicateArrayProvider { name });
			}
			tracing::debug!(name = %name, "Replacing array provider");
		} else {
			tracing::debug!(name = %name, "Registered array provider");
		}

		self.array_providers.insert(name, provider);
		Ok(())
	}

	/// Registers every provider, array provider and definition of a bundle.
	///
	/// Registration stops at the first failure; entries registered before it
	/// stay registered.
	pub fn register_bundle(&mut self, bundle: &dyn Bundle) -> PhodamResult<()> {
		let (providers, array_providers, definitions) = bundle.bundle().into_parts();

		for registration in providers {
			self.register_provider(registration)?;
		}
		for registration in array_providers {
			self.register_array_provider(registration)?;
		}
		for definition in definitions {
			self.register_type_definition(definition)?;
		}
		Ok(())
	}

	fn insert(
		&mut self,
		key: ProviderKey,
		overriding: bool,
		entry: RegistryEntry,
	) -> PhodamResult<()> {
		if let Some(existing) = self.entries.get(&key) {
			if !overriding {
				return Err(PhodamError::DuplicateProvider {
					type_id: key.type_id,
					name: key.name,
				});
			}
			tracing::debug!(
				key = %key,
				replaced = existing.kind(),
				with = entry.kind(),
				"Overriding registration"
			);
		} else {
			tracing::debug!(key = %key, kind = entry.kind(), "Registered");
		}

		self.entries.insert(key, entry);
		Ok(())
	}

	/// Resolves the provider for `(type_id, name)`.
	///
	/// A registered definition yields a fresh [`DefinitionProvider`]. There is
	/// no fallback between names: a named request never falls back to the
	/// default slot and vice versa.
	///
	/// # Errors
	///
	/// Returns [`PhodamError::ProviderNotFound`] if nothing is registered.
	pub fn resolve(&self, type_id: &str, name: Option<&str>) -> PhodamResult<Arc<dyn Provider>> {
		match self.entry(type_id, name) {
			Some(RegistryEntry::Provider(provider)) => Ok(Arc::clone(provider)),
			Some(RegistryEntry::Definition(definition)) => Ok(Arc::new(DefinitionProvider::new(
				Arc::clone(definition),
				self.array_len,
			))),
			None => Err(PhodamError::ProviderNotFound {
				type_id: type_id.to_string(),
				name: name.map(str::to_string),
			}),
		}
	}

	/// Resolves the array provider `name`.
	///
	/// # Errors
	///
	/// Returns [`PhodamError::ArrayProviderNotFound`] if nothing is registered.
	pub fn resolve_array(&self, name: &str) -> PhodamResult<Arc<dyn Provider>> {
		self.array_providers
			.get(name)
			.cloned()
			.ok_or_else(|| PhodamError::ArrayProviderNotFound {
				name: name.to_string(),
			})
	}

	/// Returns the raw entry for `(type_id, name)`.
	pub fn entry(&self, type_id: &str, name: Option<&str>) -> Option<&RegistryEntry> {
		self.entries.get(&ProviderKey::new(type_id, name))
	}

	/// Returns the definition registered for `(type_id, name)`, if the key
	/// holds a definition rather than a provider.
	pub fn type_definition(&self, type_id: &str, name: Option<&str>) -> Option<&TypeDefinition> {
		match self.entry(type_id, name)? {
			RegistryEntry::Definition(definition) => Some(definition),
			RegistryEntry::Provider(_) => None,
		}
	}

	pub fn has_provider(&self, type_id: &str, name: Option<&str>) -> bool {
		self.entry(type_id, name).is_some()
	}

	pub fn has_array_provider(&self, name: &str) -> bool {
		self.array_providers.contains_key(name)
	}

	/// Returns all typed keys, sorted.
	pub fn keys(&self) -> Vec<ProviderKey> {
		let mut keys: Vec<_> = self.entries.keys().cloned().collect();
		keys.sort();
		keys
	}

	/// Returns all array provider names, sorted.
	pub fn array_names(&self) -> Vec<String> {
		let mut names: Vec<_> = self.array_providers.keys().cloned().collect();
		names.sort();
		names
	}

	/// Returns the number of typed entries plus array providers.
	pub fn len(&self) -> usize {
		self.entries.len() + self.array_providers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty() && self.array_providers.is_empty()
	}
}

impl Default for Registry {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for Registry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Registry")
			.field("keys", &self.keys())
			.field("array_names", &self.array_names())
			.field("array_len", &self.array_len)
			.finish()
	}
}
