//! Definition manifests.
//!
//! A manifest declares type definitions in a data file instead of code, so a
//! test suite can keep its recipes next to its fixtures:
//!
//! ```json
//! {
//!   "type_definitions": [
//!     {
//!       "type": "app.User",
//!       "fields": {
//!         "id": { "type": "int" },
//!         "email": { "type": "string", "name": "email" }
//!       }
//!     }
//!   ]
//! }
//! ```
//!
//! JSON is always available; YAML requires the `yaml` feature.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::Path;

use phodam_core::{Bundle, PhodamError, PhodamResult, ProviderBundle, TypeDefinition};
use serde::{Deserialize, Serialize};

/// Supported manifest file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ManifestFormat {
	/// JSON format (default).
	#[default]
	Json,

	/// YAML format (requires `yaml` feature).
	Yaml,
}

impl ManifestFormat {
	/// Determines the format from a file extension.
	///
	/// ```
	/// # use phodam_registry::manifest::ManifestFormat;
	/// assert_eq!(ManifestFormat::from_extension("json"), Some(ManifestFormat::Json));
	/// assert_eq!(ManifestFormat::from_extension("YML"), Some(ManifestFormat::Yaml));
	/// assert_eq!(ManifestFormat::from_extension("toml"), None);
	/// ```
	pub fn from_extension(ext: &str) -> Option<Self> {
		match ext.to_lowercase().as_str() {
			"json" => Some(Self::Json),
			"yaml" | "yml" => Some(Self::Yaml),
			_ => None,
		}
	}

	/// Determines the format from a file path.
	pub fn from_path(path: &Path) -> Option<Self> {
		Self::detect(path).ok()
	}

	/// Determines the format from a file path, failing with
	/// [`PhodamError::UnsupportedExtension`] when it is not recognized.
	pub fn detect(path: &Path) -> PhodamResult<Self> {
		let ext = path.extension().and_then(OsStr::to_str).unwrap_or_default();
		Self::from_extension(ext).ok_or_else(|| {
			PhodamError::UnsupportedExtension(match ext {
				"" => "(none)".to_string(),
				ext => ext.to_string(),
			})
		})
	}
}

/// Type definitions declared in a data file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefinitionManifest {
	/// Definitions in declaration order.
	#[serde(default)]
	pub type_definitions: Vec<TypeDefinition>,

	/// File the manifest was read from, if any.
	#[serde(skip)]
	pub source: Option<String>,
}

impl DefinitionManifest {
	/// Converts the manifest into a bundle of definitions.
	pub fn into_bundle(self) -> ProviderBundle {
		self.type_definitions
			.into_iter()
			.fold(ProviderBundle::new(), ProviderBundle::with_type_definition)
	}

	pub fn len(&self) -> usize {
		self.type_definitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.type_definitions.is_empty()
	}
}

impl Bundle for DefinitionManifest {
	fn bundle(&self) -> ProviderBundle {
		self.clone().into_bundle()
	}
}

/// Reads [`DefinitionManifest`]s from files and strings.
#[derive(Debug, Default)]
pub struct ManifestLoader;

impl ManifestLoader {
	/// Creates a new manifest loader.
	pub fn new() -> Self {
		Self
	}

	/// Loads a manifest file; the format follows the file extension.
	///
	/// # Errors
	///
	/// Returns an error if:
	/// - The file extension is not recognized
	/// - The file cannot be read
	/// - The content is not a valid manifest
	pub fn load_file(&self, path: &Path) -> PhodamResult<DefinitionManifest> {
		let format = ManifestFormat::detect(path)?;
		let source = path.display().to_string();

		let content = match fs::read_to_string(path) {
			Ok(content) => content,
			Err(error) if error.kind() == io::ErrorKind::NotFound => {
				return Err(PhodamError::FileNotFound(source));
			}
			Err(error) => return Err(error.into()),
		};

		tracing::debug!(source = %source, format = ?format, "Loading definition manifest");
		Ok(DefinitionManifest {
			source: Some(source),
			..self.parse_str(&content, format)?
		})
	}

	/// Parses manifest content in the given format.
	pub fn parse_str(&self, content: &str, format: ManifestFormat) -> PhodamResult<DefinitionManifest> {
		match format {
			ManifestFormat::Json => self.parse_json(content),
			ManifestFormat::Yaml => self.parse_yaml(content),
		}
	}

	fn parse_json(&self, content: &str) -> PhodamResult<DefinitionManifest> {
		serde_json::from_str(content).map_err(|e| PhodamError::Manifest(e.to_string()))
	}

	#[cfg(feature = "yaml")]
	fn parse_yaml(&self, content: &str) -> PhodamResult<DefinitionManifest> {
		serde_yaml::from_str(content).map_err(|e| PhodamError::Manifest(e.to_string()))
	}

	#[cfg(not(feature = "yaml"))]
	fn parse_yaml(&self, _content: &str) -> PhodamResult<DefinitionManifest> {
		Err(PhodamError::Manifest(
			"YAML manifests require the `yaml` feature".to_string(),
		))
	}
}
