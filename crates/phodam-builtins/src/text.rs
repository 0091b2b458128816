//! String providers.

use fake::Fake;
use fake::faker::internet::en::{SafeEmail, Username};
use fake::faker::name::en::Name;
use phodam_core::{PhodamError, PhodamResult, Provider, ProviderContext, Value};
use rand::Rng;
use rand::distributions::Alphanumeric;

use crate::numeric::check_range;

/// Default shortest string produced by [`StringProvider`].
pub const DEFAULT_MIN_LENGTH: usize = 4;

/// Default longest string produced by [`StringProvider`].
pub const DEFAULT_MAX_LENGTH: usize = 16;

/// Random alphanumeric string of `min_length..=max_length` characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringProvider;

impl StringProvider {
	fn length(context: &ProviderContext<'_>, key: &str, default: usize) -> PhodamResult<usize> {
		match context.config_u64(key)? {
			Some(length) => usize::try_from(length)
				.map_err(|_| PhodamError::invalid_config(key, format!("{length} is too large"))),
			None => Ok(default),
		}
	}
}

impl Provider for StringProvider {
	fn create(&self, context: &ProviderContext<'_>) -> PhodamResult<Value> {
		let min = Self::length(context, "min_length", DEFAULT_MIN_LENGTH)?;
		let max = Self::length(context, "max_length", DEFAULT_MAX_LENGTH)?;
		check_range("min_length", min, "max_length", max)?;

		let mut rng = rand::thread_rng();
		let length = rng.gen_range(min..=max);
		let value: String = (&mut rng)
			.sample_iter(&Alphanumeric)
			.take(length)
			.map(char::from)
			.collect();
		Ok(Value::String(value))
	}
}

/// Email address on a reserved example domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailProvider;

impl Provider for EmailProvider {
	fn create(&self, _context: &ProviderContext<'_>) -> PhodamResult<Value> {
		Ok(Value::String(SafeEmail().fake()))
	}
}

/// Full personal name.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameProvider;

impl Provider for NameProvider {
	fn create(&self, _context: &ProviderContext<'_>) -> PhodamResult<Value> {
		Ok(Value::String(Name().fake()))
	}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UsernameProvider;

impl Provider for UsernameProvider {
	fn create(&self, _context: &ProviderContext<'_>) -> PhodamResult<Value> {
		Ok(Value::String(Username().fake()))
	}
}
