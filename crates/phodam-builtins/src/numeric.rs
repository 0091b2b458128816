//! Integer and floating point providers.

use std::fmt::Display;

use phodam_core::{PhodamError, PhodamResult, Provider, ProviderContext, Value};
use rand::Rng;

/// Default lower bound of [`IntProvider`].
pub const DEFAULT_INT_MIN: i64 = 0;

/// Default upper bound of [`IntProvider`].
pub const DEFAULT_INT_MAX: i64 = i32::MAX as i64;

/// Default lower bound of [`FloatProvider`].
pub const DEFAULT_FLOAT_MIN: f64 = 0.0;

/// Default upper bound of [`FloatProvider`].
pub const DEFAULT_FLOAT_MAX: f64 = 1000.0;

/// Widest `max - min` span accepted by [`FloatProvider`].
pub const MAX_FLOAT_SPAN: f64 = f64::MAX / 2.0;

/// Largest `precision` accepted by [`FloatProvider`].
pub const MAX_PRECISION: u64 = 15;

/// Rejects a range whose lower bound is above its upper bound.
pub(crate) fn check_range<T: PartialOrd + Display>(
	min_key: &str,
	min: T,
	max_key: &str,
	max: T,
) -> PhodamResult<()> {
	if min > max {
		return Err(PhodamError::invalid_config(
			min_key,
			format!("{min_key} ({min}) is greater than {max_key} ({max})"),
		));
	}
	Ok(())
}

/// Uniform integer in `min..=max`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntProvider;

impl Provider for IntProvider {
	fn create(&self, context: &ProviderContext<'_>) -> PhodamResult<Value> {
		let min = context.config_i64("min")?.unwrap_or(DEFAULT_INT_MIN);
		let max = context.config_i64("max")?.unwrap_or(DEFAULT_INT_MAX);
		check_range("min", min, "max", max)?;

		Ok(Value::from(rand::thread_rng().gen_range(min..=max)))
	}
}

/// Uniform number in `min..=max`, optionally rounded to `precision` places.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatProvider;

impl Provider for FloatProvider {
	fn create(&self, context: &ProviderContext<'_>) -> PhodamResult<Value> {
		let min = context.config_f64("min")?.unwrap_or(DEFAULT_FLOAT_MIN);
		let max = context.config_f64("max")?.unwrap_or(DEFAULT_FLOAT_MAX);
		check_range("min", min, "max", max)?;
		if max - min > MAX_FLOAT_SPAN {
			return Err(PhodamError::invalid_config(
				"max",
				format!("range {min}..={max} is too wide"),
			));
		}

		let mut value = rand::thread_rng().gen_range(min..=max);
		if let Some(precision) = context.config_u64("precision")? {
			if precision > MAX_PRECISION {
				return Err(PhodamError::invalid_config(
					"precision",
					format!("precision must be at most {MAX_PRECISION}, got {precision}"),
				));
			}
			let scale = 10f64.powi(precision as i32);
			value = ((value * scale).round() / scale).clamp(min, max);
		}

		Ok(Value::from(value))
	}
}
