//! Error types for provider registration and value creation.
//!
//! This module defines the error type shared by every Phodam crate.

use thiserror::Error;

/// Formats a `(type, name)` pair for diagnostics.
fn describe_key(type_id: &str, name: &Option<String>) -> String {
	match name {
		Some(name) => format!("{} (name: {})", type_id, name),
		None => type_id.to_string(),
	}
}

/// Errors that can occur while registering providers or creating values.
#[derive(Debug, Error)]
pub enum PhodamError {
	/// A provider or definition is already registered for the key.
	#[error("Provider already registered for {}", describe_key(.type_id, .name))]
	DuplicateProvider {
		/// Requested type.
		type_id: String,
		/// Provider name, `None` for the default slot.
		name: Option<String>,
	},

	/// An array provider is already registered under the name.
	#[error("Array provider already registered: {name}")]
	DuplicateArrayProvider {
		/// Array provider name.
		name: String,
	},

	/// No provider or definition is registered for the key.
	#[error("No provider registered for {}", describe_key(.type_id, .name))]
	ProviderNotFound {
		/// Requested type.
		type_id: String,
		/// Provider name, `None` for the default slot.
		name: Option<String>,
	},

	/// No array provider is registered under the name.
	#[error("No array provider registered: {name}")]
	ArrayProviderNotFound {
		/// Array provider name.
		name: String,
	},

	/// A type definition has no field with the given name.
	#[error("Field not found: {type_id}.{field}")]
	FieldNotFound {
		/// Type the definition describes.
		type_id: String,
		/// Missing field name.
		field: String,
	},

	/// The provider context has no override for the field.
	#[error("Override not found: {field}")]
	OverrideNotFound {
		/// Missing field name.
		field: String,
	},

	/// A provider failed while creating a value.
	#[error("Failed to create {}: {source}", describe_key(.type_id, .name))]
	CreationFailed {
		/// Requested type.
		type_id: String,
		/// Provider name, `None` for the default slot.
		name: Option<String>,
		/// Error raised by the provider.
		#[source]
		source: Box<PhodamError>,
	},

	/// A config entry has an unexpected shape.
	#[error("Invalid config `{key}`: {message}")]
	InvalidConfig {
		/// Config key.
		key: String,
		/// Description of the problem.
		message: String,
	},

	/// Failure reported by provider code.
	#[error("Provider error: {0}")]
	Provider(String),

	/// A created value could not be converted into the requested Rust type.
	#[error("Deserialization error: {0}")]
	Deserialize(#[from] serde_json::Error),

	/// Manifest content could not be parsed.
	#[error("Manifest error: {0}")]
	Manifest(String),

	/// Manifest file not found.
	#[error("Manifest file not found: {0}")]
	FileNotFound(String),

	/// Unsupported manifest file extension.
	#[error("Unsupported file extension: {0}")]
	UnsupportedExtension(String),

	/// I/O operation failed.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

impl PhodamError {
	/// Creates a [`PhodamError::Provider`] from a message.
	pub fn provider(message: impl Into<String>) -> Self {
		Self::Provider(message.into())
	}

	/// Creates a [`PhodamError::InvalidConfig`].
	pub fn invalid_config(key: impl Into<String>, message: impl Into<String>) -> Self {
		Self::InvalidConfig {
			key: key.into(),
			message: message.into(),
		}
	}

	/// Wraps a provider failure into [`PhodamError::CreationFailed`].
	///
	/// Creation failures and lookup failures pass through unchanged, so a
	/// failure deep inside a recursive creation keeps its innermost cause and
	/// is wrapped exactly once.
	pub fn into_creation_failure(self, type_id: &str, name: Option<&str>) -> Self {
		match self {
			error @ (Self::CreationFailed { .. }
			| Self::ProviderNotFound { .. }
			| Self::ArrayProviderNotFound { .. }) => error,
			other => Self::CreationFailed {
				type_id: type_id.to_string(),
				name: name.map(str::to_string),
				source: Box::new(other),
			},
		}
	}

	/// Returns the innermost error behind any [`PhodamError::CreationFailed`]
	/// layers.
	pub fn root_cause(&self) -> &PhodamError {
		let mut current = self;
		while let Self::CreationFailed { source, .. } = current {
			current = source;
		}
		current
	}

	/// Returns true if this is a lookup failure for exactly `(type_id, name)`.
	pub fn is_provider_not_found_for(&self, type_id: &str, name: Option<&str>) -> bool {
		matches!(
			self,
			Self::ProviderNotFound { type_id: t, name: n }
				if t == type_id && n.as_deref() == name
		)
	}
}

/// Result type alias for Phodam operations.
pub type PhodamResult<T> = Result<T, PhodamError>;
