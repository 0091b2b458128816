//! Per-call context handed to providers.

use std::fmt;

use crate::error::{PhodamError, PhodamResult};
use crate::provider::Factory;
use crate::request::{ArrayRequest, CreateRequest};
use crate::value::{Config, Overrides, Value};

/// Immutable snapshot of one creation request.
///
/// A context is built fresh for every creation call and only lent to the
/// provider. It also carries the factory that created it, so providers can
/// build nested values with the same registry.
pub struct ProviderContext<'a> {
	type_id: String,
	name: Option<String>,
	overrides: Overrides,
	config: Config,
	factory: &'a dyn Factory,
}

impl<'a> ProviderContext<'a> {
	/// Creates a context for a creation request.
	pub fn new(
		factory: &'a dyn Factory,
		type_id: impl Into<String>,
		name: Option<String>,
		overrides: Overrides,
		config: Config,
	) -> Self {
		Self {
			type_id: type_id.into(),
			name,
			overrides,
			config,
			factory,
		}
	}

	/// Returns the requested type.
	pub fn type_id(&self) -> &str {
		&self.type_id
	}

	/// Returns the requested provider name.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Returns every override of this call.
	pub fn overrides(&self) -> &Overrides {
		&self.overrides
	}

	/// Returns true if the caller supplied an override for `field`.
	pub fn has_override(&self, field: &str) -> bool {
		self.overrides.contains_key(field)
	}

	/// Returns the override for `field`.
	///
	/// # Errors
	///
	/// Returns [`PhodamError::OverrideNotFound`] if there is none; guard with
	/// [`has_override`](Self::has_override).
	pub fn get_override(&self, field: &str) -> PhodamResult<&Value> {
		self.overrides
			.get(field)
			.ok_or_else(|| PhodamError::OverrideNotFound {
				field: field.to_string(),
			})
	}

	/// Returns the provider config verbatim.
	pub fn config(&self) -> &Config {
		&self.config
	}

	/// Returns one raw config entry, if present.
	pub fn config_value(&self, key: &str) -> Option<&Value> {
		self.config.get(key)
	}

	/// Reads an integer config entry.
	pub fn config_i64(&self, key: &str) -> PhodamResult<Option<i64>> {
		self.typed_config(key, "an integer", Value::as_i64)
	}

	/// Reads a non-negative integer config entry.
	pub fn config_u64(&self, key: &str) -> PhodamResult<Option<u64>> {
		self.typed_config(key, "a non-negative integer", Value::as_u64)
	}

	/// Reads a numeric config entry.
	pub fn config_f64(&self, key: &str) -> PhodamResult<Option<f64>> {
		self.typed_config(key, "a number", Value::as_f64)
	}

	/// Reads a string config entry.
	pub fn config_str(&self, key: &str) -> PhodamResult<Option<&str>> {
		self.typed_config(key, "a string", Value::as_str)
	}

	/// Reads a boolean config entry.
	pub fn config_bool(&self, key: &str) -> PhodamResult<Option<bool>> {
		self.typed_config(key, "a boolean", Value::as_bool)
	}

	fn typed_config<'v, T>(
		&'v self,
		key: &str,
		expected: &str,
		read: impl Fn(&'v Value) -> Option<T>,
	) -> PhodamResult<Option<T>> {
		match self.config.get(key) {
			None => Ok(None),
			Some(value) => read(value).map(Some).ok_or_else(|| {
				PhodamError::invalid_config(key, format!("expected {}, got {}", expected, value))
			}),
		}
	}

	/// Returns the factory this context was created by.
	pub fn factory(&self) -> &'a dyn Factory {
		self.factory
	}

	/// Creates a nested value through the same factory.
	pub fn create(&self, request: impl Into<CreateRequest>) -> PhodamResult<Value> {
		self.factory.create_value(request.into())
	}

	/// Creates a nested value from a named array provider.
	pub fn create_array(&self, request: impl Into<ArrayRequest>) -> PhodamResult<Value> {
		self.factory.create_array_value(request.into())
	}
}

impl fmt::Debug for ProviderContext<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ProviderContext")
			.field("type_id", &self.type_id)
			.field("name", &self.name)
			.field("overrides", &self.overrides)
			.field("config", &self.config)
			.finish_non_exhaustive()
	}
}
