//! Timestamp provider.

use chrono::{SecondsFormat, TimeDelta, Utc};
use phodam_core::{PhodamError, PhodamResult, Provider, ProviderContext, Value};
use rand::Rng;

use crate::numeric::check_range;

/// Default earliest offset from now, in days.
pub const DEFAULT_MIN_DAYS: i64 = -365;

/// Default latest offset from now, in days.
pub const DEFAULT_MAX_DAYS: i64 = 0;

const SECONDS_PER_DAY: i64 = 86_400;

/// RFC 3339 UTC timestamp between `min_days` and `max_days` from now.
///
/// The offset is drawn with second resolution, so two values from the same
/// range rarely coincide.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTimeProvider;

impl DateTimeProvider {
	fn seconds(key: &str, days: i64) -> PhodamResult<i64> {
		days.checked_mul(SECONDS_PER_DAY)
			.ok_or_else(|| PhodamError::invalid_config(key, format!("{days} days is out of range")))
	}
}

impl Provider for DateTimeProvider {
	fn create(&self, context: &ProviderContext<'_>) -> PhodamResult<Value> {
		let min_days = context.config_i64("min_days")?.unwrap_or(DEFAULT_MIN_DAYS);
		let max_days = context.config_i64("max_days")?.unwrap_or(DEFAULT_MAX_DAYS);
		check_range("min_days", min_days, "max_days", max_days)?;

		let min = Self::seconds("min_days", min_days)?;
		let max = Self::seconds("max_days", max_days)?;
		let offset = rand::thread_rng().gen_range(min..=max);

		let timestamp = TimeDelta::try_seconds(offset)
			.and_then(|delta| Utc::now().checked_add_signed(delta))
			.ok_or_else(|| {
				PhodamError::invalid_config("min_days", "offset is outside the supported date range")
			})?;

		Ok(Value::String(timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)))
	}
}
