//! Provider and factory traits.
//!
//! A [`Provider`] turns a [`ProviderContext`] into one value. A [`Factory`] is
//! the entry point providers call back into for nested values; the facade in
//! `phodam-registry` implements it.

use std::sync::Arc;

use crate::context::ProviderContext;
use crate::error::PhodamResult;
use crate::request::{ArrayRequest, CreateRequest};
use crate::value::Value;

/// Creates one value for a creation request.
///
/// Providers are expected to be stateless or self-contained: the registry
/// invokes them again for every request and never caches results.
///
/// Any `Fn(&ProviderContext<'_>) -> PhodamResult<Value>` closure is a
/// provider:
///
/// ```
/// use phodam_core::{PhodamResult, Provider, ProviderContext};
/// use serde_json::{Value, json};
///
/// fn answer(_context: &ProviderContext<'_>) -> PhodamResult<Value> {
/// 	Ok(json!(42))
/// }
///
/// fn assert_provider<P: Provider>(_provider: P) {}
/// assert_provider(answer);
/// ```
pub trait Provider: Send + Sync {
	/// Creates a value for the given context.
	fn create(&self, context: &ProviderContext<'_>) -> PhodamResult<Value>;
}

impl<F> Provider for F
where
	F: Fn(&ProviderContext<'_>) -> PhodamResult<Value> + Send + Sync,
{
	fn create(&self, context: &ProviderContext<'_>) -> PhodamResult<Value> {
		self(context)
	}
}

/// Pins a closure to the provider signature.
///
/// Closures passed straight to a `P: Provider` bound do not get a
/// higher-ranked argument lifetime inferred; routing them through this
/// function does.
///
/// ```
/// use phodam_core::provider_fn;
/// use serde_json::json;
///
/// let provider = provider_fn(|context| Ok(json!({ "type": context.type_id() })));
/// # let _ = provider;
/// ```
pub fn provider_fn<F>(f: F) -> F
where
	F: Fn(&ProviderContext<'_>) -> PhodamResult<Value> + Send + Sync,
{
	f
}

impl<P: Provider + ?Sized> Provider for Arc<P> {
	fn create(&self, context: &ProviderContext<'_>) -> PhodamResult<Value> {
		(**self).create(context)
	}
}

/// Creation entry point reachable from provider code.
///
/// Kept object-safe so a [`ProviderContext`] can carry it as `&dyn Factory`.
pub trait Factory: Send + Sync {
	/// Creates a value of a type.
	fn create_value(&self, request: CreateRequest) -> PhodamResult<Value>;

	/// Creates a value from a named array provider.
	fn create_array_value(&self, request: ArrayRequest) -> PhodamResult<Value>;
}
