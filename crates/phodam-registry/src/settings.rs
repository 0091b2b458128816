//! Registry settings.
//!
//! Settings come from defaults, a TOML file, or `PHODAM_*` environment
//! variables layered over the defaults:
//!
//! ```toml
//! array_len_min = 1
//! array_len_max = 3
//! ```

use std::env::{self, VarError};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix of environment variables read by [`PhodamSettings::from_env`].
pub const ENV_PREFIX: &str = "PHODAM_";

/// Default minimum length of array fields.
pub const DEFAULT_ARRAY_LEN_MIN: usize = 2;

/// Default maximum length of array fields.
pub const DEFAULT_ARRAY_LEN_MAX: usize = 5;

/// Errors raised while loading settings.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SettingsError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("Invalid environment variable {key}={value:?}")]
	Env { key: String, value: String },

	#[error("Invalid settings: {0}")]
	Invalid(String),
}

/// Tunables of a [`Phodam`](crate::Phodam) instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhodamSettings {
	/// Minimum number of elements generated for array fields.
	pub array_len_min: usize,

	/// Maximum number of elements generated for array fields.
	pub array_len_max: usize,
}

impl Default for PhodamSettings {
	fn default() -> Self {
		Self {
			array_len_min: DEFAULT_ARRAY_LEN_MIN,
			array_len_max: DEFAULT_ARRAY_LEN_MAX,
		}
	}
}

impl PhodamSettings {
	/// Sets the inclusive length range of array fields.
	pub fn with_array_len(mut self, min: usize, max: usize) -> Self {
		self.array_len_min = min;
		self.array_len_max = max;
		self
	}

	/// Parses settings from TOML; missing keys keep their defaults.
	pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
		let settings: Self = toml::from_str(content)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Reads settings from a TOML file.
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let content = std::fs::read_to_string(path)?;
		Self::from_toml_str(&content)
	}

	/// Reads `PHODAM_*` environment variables over the defaults.
	pub fn from_env() -> Result<Self, SettingsError> {
		Self::default().merge_env()
	}

	/// Applies `PHODAM_*` environment variables on top of these settings.
	///
	/// Recognized variables: `PHODAM_ARRAY_LEN_MIN`, `PHODAM_ARRAY_LEN_MAX`.
	pub fn merge_env(mut self) -> Result<Self, SettingsError> {
		if let Some(min) = read_env_usize("ARRAY_LEN_MIN")? {
			self.array_len_min = min;
		}
		if let Some(max) = read_env_usize("ARRAY_LEN_MAX")? {
			self.array_len_max = max;
		}
		self.validate()?;
		Ok(self)
	}

	/// Checks that the array length range is not empty.
	pub fn validate(&self) -> Result<(), SettingsError> {
		if self.array_len_min > self.array_len_max {
			return Err(SettingsError::Invalid(format!(
				"array_len_min ({}) is greater than array_len_max ({})",
				self.array_len_min, self.array_len_max
			)));
		}
		Ok(())
	}
}

fn read_env_usize(key: &str) -> Result<Option<usize>, SettingsError> {
	let full_key = format!("{}{}", ENV_PREFIX, key);
	match env::var(&full_key) {
		Ok(value) => value
			.trim()
			.parse::<usize>()
			.map(Some)
			.map_err(|_| SettingsError::Env {
				key: full_key,
				value,
			}),
		Err(VarError::NotPresent) => Ok(None),
		Err(VarError::NotUnicode(raw)) => Err(SettingsError::Env {
			key: full_key,
			value: raw.to_string_lossy().into_owned(),
		}),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serial_test::serial;
	use std::io::Write;

	fn clear_env() {
		// SAFETY: Modifying environment variables is unsafe in multi-threaded programs.
		// Tests touching the environment run with #[serial].
		unsafe {
			env::remove_var("PHODAM_ARRAY_LEN_MIN");
			env::remove_var("PHODAM_ARRAY_LEN_MAX");
		}
	}

	#[rstest]
	fn test_defaults() {
		let settings = PhodamSettings::default();

		assert_eq!(settings.array_len_min, 2);
		assert_eq!(settings.array_len_max, 5);
		assert!(settings.validate().is_ok());
	}

	#[rstest]
	fn test_from_toml_keeps_missing_defaults() {
		let settings = PhodamSettings::from_toml_str("array_len_max = 9").unwrap();

		assert_eq!(settings, PhodamSettings::default().with_array_len(2, 9));
	}

	#[rstest]
	fn test_from_toml_rejects_empty_range() {
		let result = PhodamSettings::from_toml_str("array_len_min = 4\narray_len_max = 1");

		assert!(matches!(result, Err(SettingsError::Invalid(_))));
	}

	#[rstest]
	fn test_from_toml_rejects_wrong_type() {
		let result = PhodamSettings::from_toml_str("array_len_min = \"many\"");

		assert!(matches!(result, Err(SettingsError::Toml(_))));
	}

	#[rstest]
	fn test_from_path() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "array_len_min = 0\narray_len_max = 1").unwrap();

		let settings = PhodamSettings::from_path(file.path()).unwrap();

		assert_eq!(settings, PhodamSettings::default().with_array_len(0, 1));
	}

	#[rstest]
	fn test_from_missing_path() {
		let result = PhodamSettings::from_path("/nonexistent/phodam.toml");

		assert!(matches!(result, Err(SettingsError::Io(_))));
	}

	#[rstest]
	#[serial]
	fn test_from_env() {
		clear_env();
		// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
		// This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			env::set_var("PHODAM_ARRAY_LEN_MIN", "3");
			env::set_var("PHODAM_ARRAY_LEN_MAX", " 7 ");
		}

		let settings = PhodamSettings::from_env();
		clear_env();

		assert_eq!(settings.unwrap(), PhodamSettings::default().with_array_len(3, 7));
	}

	#[rstest]
	#[serial]
	fn test_from_env_without_variables() {
		clear_env();

		let settings = PhodamSettings::from_env().unwrap();

		assert_eq!(settings, PhodamSettings::default());
	}

	#[rstest]
	#[serial]
	fn test_from_env_invalid_number() {
		clear_env();
		// SAFETY: Setting environment variables is unsafe in multi-threaded programs.
		// This test uses #[serial] to ensure exclusive access to environment variables.
		unsafe {
			env::set_var("PHODAM_ARRAY_LEN_MAX", "lots");
		}

		let result = PhodamSettings::from_env();
		clear_env();

		match result {
			Err(SettingsError::Env { key, value }) => {
				assert_eq!(key, "PHODAM_ARRAY_LEN_MAX");
				assert_eq!(value, "lots");
			}
			other => panic!("unexpected result: {other:?}"),
		}
	}
}
