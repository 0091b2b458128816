//! Boolean and UUID providers.

use phodam_core::{PhodamResult, Provider, ProviderContext, Value};
use rand::Rng;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default)]
pub struct BoolProvider;

impl Provider for BoolProvider {
	fn create(&self, _context: &ProviderContext<'_>) -> PhodamResult<Value> {
		Ok(Value::Bool(rand::thread_rng().gen_bool(0.5)))
	}
}

/// Random (v4) UUID in hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidProvider;

impl Provider for UuidProvider {
	fn create(&self, _context: &ProviderContext<'_>) -> PhodamResult<Value> {
		Ok(Value::String(Uuid::new_v4().to_string()))
	}
}
