//! Declarative type and field definitions.
//!
//! A [`TypeDefinition`] is a field-by-field recipe for a type that has no
//! explicit provider. The registry turns it into a provider that creates each
//! field through the same facade, so nested types resolve recursively.
//!
//! Definitions serialize with serde, which lets them be declared in manifest
//! files:
//!
//! ```json
//! {
//!   "type": "app.User",
//!   "fields": {
//!     "id": { "type": "int" },
//!     "email": { "type": "string", "name": "email" },
//!     "nickname": { "type": "string", "nullable": true },
//!     "tags": { "type": "string", "array": true }
//!   }
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{PhodamError, PhodamResult};
use crate::value::{Config, Overrides, ProviderKey};

/// Description of one field of a synthesizable type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
	#[serde(rename = "type")]
	type_id: String,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	name: Option<String>,

	#[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
	config: Config,

	#[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
	overrides: Overrides,

	#[serde(default)]
	nullable: bool,

	#[serde(default)]
	array: bool,
}

impl FieldDefinition {
	/// Creates a field of type `type_id` with default attributes.
	pub fn new(type_id: impl Into<String>) -> Self {
		Self {
			type_id: type_id.into(),
			name: None,
			config: Config::new(),
			overrides: Overrides::new(),
			nullable: false,
			array: false,
		}
	}

	/// Selects a named provider for the field's type.
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Sets the config passed to the field's provider.
	pub fn with_config(mut self, config: Config) -> Self {
		self.config = config;
		self
	}

	/// Sets the overrides passed to the field's provider.
	pub fn with_overrides(mut self, overrides: Overrides) -> Self {
		self.overrides = overrides;
		self
	}

	/// Marks the field as nullable.
	pub fn with_nullable(mut self, nullable: bool) -> Self {
		self.nullable = nullable;
		self
	}

	/// Marks the field as a sequence of its type.
	pub fn with_array(mut self, array: bool) -> Self {
		self.array = array;
		self
	}

	pub fn type_id(&self) -> &str {
		&self.type_id
	}

	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	pub fn overrides(&self) -> &Overrides {
		&self.overrides
	}

	pub fn is_nullable(&self) -> bool {
		self.nullable
	}

	pub fn is_array(&self) -> bool {
		self.array
	}
}

/// Field-by-field recipe for synthesizing values of a type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDefinition {
	#[serde(rename = "type")]
	type_id: String,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	name: Option<String>,

	#[serde(default)]
	overriding: bool,

	#[serde(default)]
	fields: IndexMap<String, FieldDefinition>,
}

impl TypeDefinition {
	/// Creates an empty definition for `type_id` in the default slot.
	pub fn new(type_id: impl Into<String>) -> Self {
		Self {
			type_id: type_id.into(),
			name: None,
			overriding: false,
			fields: IndexMap::new(),
		}
	}

	/// Registers the definition under a named slot.
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Allows the definition to replace an existing registration.
	pub fn with_overriding(mut self, overriding: bool) -> Self {
		self.overriding = overriding;
		self
	}

	/// Adds or replaces a field and returns the updated definition.
	pub fn with_field(mut self, field: impl Into<String>, definition: FieldDefinition) -> Self {
		self.add_field(field, definition);
		self
	}

	/// Adds or replaces a field in place.
	///
	/// A field that already exists is overwritten but keeps its position.
	pub fn add_field(&mut self, field: impl Into<String>, definition: FieldDefinition) {
		self.fields.insert(field.into(), definition);
	}

	/// Returns the definition of `field`.
	///
	/// # Errors
	///
	/// Returns [`PhodamError::FieldNotFound`] if no such field exists.
	pub fn field(&self, field: &str) -> PhodamResult<&FieldDefinition> {
		self.fields
			.get(field)
			.ok_or_else(|| PhodamError::FieldNotFound {
				type_id: self.type_id.clone(),
				field: field.to_string(),
			})
	}

	pub fn has_field(&self, field: &str) -> bool {
		self.fields.contains_key(field)
	}

	/// Returns all fields in declaration order.
	pub fn fields(&self) -> &IndexMap<String, FieldDefinition> {
		&self.fields
	}

	pub fn field_names(&self) -> impl Iterator<Item = &str> {
		self.fields.keys().map(String::as_str)
	}

	pub fn type_id(&self) -> &str {
		&self.type_id
	}

	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	pub fn is_overriding(&self) -> bool {
		self.overriding
	}

	/// Returns the registry key the definition registers under.
	pub fn key(&self) -> ProviderKey {
		ProviderKey {
			type_id: self.type_id.clone(),
			name: self.name.clone(),
		}
	}
}
