//! Core types for the Phodam test-data registry.
//!
//! This crate holds everything a provider author needs without depending on
//! the registry itself:
//!
//! - [`Provider`] - creates one value from a [`ProviderContext`]
//! - [`ProviderContext`] - per-call snapshot of type, name, overrides and config
//! - [`Factory`] - entry point providers call back into for nested values
//! - [`TypeDefinition`] / [`FieldDefinition`] - declarative field-by-field recipes
//! - [`ProviderBundle`] - plain group of registrations
//! - [`PhodamError`] - shared error type
//!
//! Values are [`serde_json::Value`]s; overrides and config are open-ended
//! string-keyed maps.
//!
//! # Writing a provider
//!
//! ```
//! use phodam_core::{PhodamResult, Provider, ProviderContext};
//! use serde_json::{Value, json};
//!
//! struct AddressProvider;
//!
//! impl Provider for AddressProvider {
//! 	fn create(&self, context: &ProviderContext<'_>) -> PhodamResult<Value> {
//! 		let city = if context.has_override("city") {
//! 			context.get_override("city")?.clone()
//! 		} else {
//! 			json!("Springfield")
//! 		};
//! 		Ok(json!({ "street": "742 Evergreen Terrace", "city": city }))
//! 	}
//! }
//! ```

pub mod bundle;
pub mod context;
pub mod definition;
pub mod error;
pub mod provider;
pub mod request;
pub mod value;

pub use bundle::{ArrayProviderRegistration, Bundle, ProviderBundle, ProviderRegistration};
pub use context::ProviderContext;
pub use definition::{FieldDefinition, TypeDefinition};
pub use error::{PhodamError, PhodamResult};
pub use provider::{Factory, Provider, provider_fn};
pub use request::{ArrayRequest, CreateRequest};
pub use value::{ARRAY_TYPE, Config, Overrides, ProviderKey, Value};
