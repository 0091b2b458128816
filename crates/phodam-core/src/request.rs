//! Creation requests.
//!
//! A request bundles the arguments of one creation call: what to create,
//! which named provider to use, and the overrides and config handed to it.
//! Both request types convert from a plain `&str` so the common case stays
//! short:
//!
//! ```
//! use phodam_core::CreateRequest;
//! use serde_json::json;
//!
//! let simple: CreateRequest = "app.User".into();
//! let detailed = CreateRequest::new("app.User")
//! 	.with_name("admin")
//! 	.with_override("id", json!(42));
//!
//! assert_eq!(simple.type_id(), detailed.type_id());
//! assert_eq!(detailed.name(), Some("admin"));
//! ```

use crate::value::{Config, Overrides, ProviderKey, Value};

/// Request to create a value of a type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateRequest {
	type_id: String,
	name: Option<String>,
	overrides: Overrides,
	config: Config,
}

impl CreateRequest {
	/// Creates a request for the default provider of `type_id`.
	pub fn new(type_id: impl Into<String>) -> Self {
		Self {
			type_id: type_id.into(),
			..Default::default()
		}
	}

	/// Selects a named provider.
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Selects a named provider when `name` is `Some`.
	pub fn with_optional_name(mut self, name: Option<impl Into<String>>) -> Self {
		self.name = name.map(Into::into);
		self
	}

	/// Replaces all overrides.
	pub fn with_overrides(mut self, overrides: Overrides) -> Self {
		self.overrides = overrides;
		self
	}

	/// Adds a single override; a repeated field replaces the earlier value.
	pub fn with_override(mut self, field: impl Into<String>, value: Value) -> Self {
		self.overrides.insert(field.into(), value);
		self
	}

	/// Replaces the provider config.
	pub fn with_config(mut self, config: Config) -> Self {
		self.config = config;
		self
	}

	/// Adds a single config entry.
	pub fn with_config_value(mut self, key: impl Into<String>, value: Value) -> Self {
		self.config.insert(key.into(), value);
		self
	}

	pub fn type_id(&self) -> &str {
		&self.type_id
	}

	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	pub fn overrides(&self) -> &Overrides {
		&self.overrides
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	/// Returns the registry key this request resolves against.
	pub fn key(&self) -> ProviderKey {
		ProviderKey {
			type_id: self.type_id.clone(),
			name: self.name.clone(),
		}
	}

	/// Splits the request into its parts.
	pub fn into_parts(self) -> (String, Option<String>, Overrides, Config) {
		(self.type_id, self.name, self.overrides, self.config)
	}
}

impl From<&str> for CreateRequest {
	fn from(type_id: &str) -> Self {
		Self::new(type_id)
	}
}

impl From<String> for CreateRequest {
	fn from(type_id: String) -> Self {
		Self::new(type_id)
	}
}

impl From<ProviderKey> for CreateRequest {
	fn from(key: ProviderKey) -> Self {
		Self {
			type_id: key.type_id,
			name: key.name,
			..Default::default()
		}
	}
}

/// Request to create a value from a named array provider.
///
/// Array providers are identified by name alone and live in a keyspace of
/// their own, separate from typed providers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayRequest {
	name: String,
	overrides: Overrides,
	config: Config,
}

impl ArrayRequest {
	/// Creates a request for the array provider `name`.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Default::default()
		}
	}

	/// Replaces all overrides.
	pub fn with_overrides(mut self, overrides: Overrides) -> Self {
		self.overrides = overrides;
		self
	}

	/// Adds a single override.
	pub fn with_override(mut self, field: impl Into<String>, value: Value) -> Self {
		self.overrides.insert(field.into(), value);
		self
	}

	/// Replaces the provider config.
	pub fn with_config(mut self, config: Config) -> Self {
		self.config = config;
		self
	}

	/// Adds a single config entry.
	pub fn with_config_value(mut self, key: impl Into<String>, value: Value) -> Self {
		self.config.insert(key.into(), value);
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn overrides(&self) -> &Overrides {
		&self.overrides
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	/// Splits the request into its parts.
	pub fn into_parts(self) -> (String, Overrides, Config) {
		(self.name, self.overrides, self.config)
	}
}

impl From<&str> for ArrayRequest {
	fn from(name: &str) -> Self {
		Self::new(name)
	}
}

impl From<String> for ArrayRequest {
	fn from(name: String) -> Self {
		Self::new(name)
	}
}
