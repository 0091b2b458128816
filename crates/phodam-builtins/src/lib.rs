//! Built-in providers for primitive types.
//!
//! [`bundle`] returns registrations for the types below. Ranges and lengths
//! are read from the provider config; a field definition can narrow them:
//!
//! | type | name | value | config |
//! |---|---|---|---|
//! | `int` | | integer | `min` (0), `max` (`i32::MAX`) |
//! | `float` | | number | `min` (0.0), `max` (1000.0), `precision` |
//! | `string` | | alphanumeric | `min_length` (4), `max_length` (16) |
//! | `string` | `email` | safe email address | |
//! | `string` | `name` | full name | |
//! | `string` | `username` | username | |
//! | `bool` | | boolean | |
//! | `uuid` | | v4 UUID | |
//! | `datetime` | | RFC 3339 UTC timestamp | `min_days` (-365), `max_days` (0) |
//!
//! Config of the wrong JSON type, or a `min` above its `max`, fails with
//! [`PhodamError::InvalidConfig`](phodam_core::PhodamError::InvalidConfig).

pub mod numeric;
pub mod primitives;
pub mod temporal;
pub mod text;

use phodam_core::{Bundle, ProviderBundle, ProviderRegistration};

pub use numeric::{FloatProvider, IntProvider};
pub use primitives::{BoolProvider, UuidProvider};
pub use temporal::DateTimeProvider;
pub use text::{EmailProvider, NameProvider, StringProvider, UsernameProvider};

/// Type identifiers served by the built-in providers.
pub mod types {
	pub const INT: &str = "int";
	pub const FLOAT: &str = "float";
	pub const STRING: &str = "string";
	pub const BOOL: &str = "bool";
	pub const UUID: &str = "uuid";
	pub const DATETIME: &str = "datetime";

	/// Names of the specialised `string` providers.
	pub mod names {
		pub const EMAIL: &str = "email";
		pub const NAME: &str = "name";
		pub const USERNAME: &str = "username";
	}
}

/// Returns the registrations of every built-in provider.
pub fn bundle() -> ProviderBundle {
	use types::names;

	ProviderBundle::new()
		.with_provider(ProviderRegistration::new(types::INT, IntProvider))
		.with_provider(ProviderRegistration::new(types::FLOAT, FloatProvider))
		.with_provider(ProviderRegistration::new(types::STRING, StringProvider))
		.with_provider(ProviderRegistration::new(types::STRING, EmailProvider).with_name(names::EMAIL))
		.with_provider(ProviderRegistration::new(types::STRING, NameProvider).with_name(names::NAME))
		.with_provider(
			ProviderRegistration::new(types::STRING, UsernameProvider).with_name(names::USERNAME),
		)
		.with_provider(ProviderRegistration::new(types::BOOL, BoolProvider))
		.with_provider(ProviderRegistration::new(types::UUID, UuidProvider))
		.with_provider(ProviderRegistration::new(types::DATETIME, DateTimeProvider))
}

/// [`Bundle`] handle for the built-in providers.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinBundle;

impl Bundle for BuiltinBundle {
	fn bundle(&self) -> ProviderBundle {
		let bundle = bundle();
		tracing::debug!(
			providers = bundle.providers().len(),
			"Assembled built-in provider bundle"
		);
		bundle
	}
}

#[cfg(test)]
pub(crate) mod testing {
	use phodam_core::{
		ArrayRequest, Config, CreateRequest, Factory, Overrides, PhodamError, PhodamResult,
		ProviderContext, Value,
	};

	/// Factory for providers that never create nested values.
	pub(crate) struct NoNesting;

	impl Factory for NoNesting {
		fn create_value(&self, request: CreateRequest) -> PhodamResult<Value> {
			Err(PhodamError::provider(format!(
				"unexpected nested create of {}",
				request.type_id()
			)))
		}

		fn create_array_value(&self, request: ArrayRequest) -> PhodamResult<Value> {
			Err(PhodamError::provider(format!(
				"unexpected nested array create of {}",
				request.name()
			)))
		}
	}

	pub(crate) fn context<'a>(factory: &'a NoNesting, type_id: &str, config: Value) -> ProviderContext<'a> {
		let config: Config = match config {
			Value::Object(map) => map,
			Value::Null => Config::new(),
			other => panic!("config must be an object, got {other}"),
		};
		ProviderContext::new(factory, type_id, None, Overrides::new(), config)
	}
}
