//! Value, override and config types.
//!
//! Every created value is a [`serde_json::Value`]. Overrides and config are
//! open-ended string-keyed maps whose keys are agreed on by the caller and the
//! provider.

use std::fmt;

pub use serde_json::Value;

/// Field name → literal value used in place of a generated value.
pub type Overrides = serde_json::Map<String, Value>;

/// Provider-specific settings, passed through verbatim.
pub type Config = serde_json::Map<String, Value>;

/// Type tag used for array provider contexts.
pub const ARRAY_TYPE: &str = "array";

/// Registry key of a typed provider: a type plus an optional name.
///
/// A `None` name selects the default slot of the type. Named slots are fully
/// independent of each other and of the default slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProviderKey {
	/// Type identifier.
	pub type_id: String,
	/// Optional provider name.
	pub name: Option<String>,
}

impl ProviderKey {
	/// Creates a key for the given type and optional name.
	pub fn new(type_id: impl Into<String>, name: Option<impl Into<String>>) -> Self {
		Self {
			type_id: type_id.into(),
			name: name.map(Into::into),
		}
	}

	/// Creates a key for the default (unnamed) slot of a type.
	pub fn unnamed(type_id: impl Into<String>) -> Self {
		Self {
			type_id: type_id.into(),
			name: None,
		}
	}

	/// Returns the provider name as a string slice.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}
}

impl fmt::Display for ProviderKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.name {
			Some(name) => write!(f, "{}#{}", self.type_id, name),
			None => write!(f, "{}", self.type_id),
		}
	}
}
