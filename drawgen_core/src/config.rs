use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::DrawgenError;
use crate::DrawgenResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["drawgen.toml", ".drawgen.toml", ".config/drawgen.toml"];

/// Placeholder token replaced with the collected builder name.
pub const NAME_TOKEN: &str = "[name]";

/// Placeholder token replaced with the derived built-object name.
pub const BUILT_NAME_TOKEN: &str = "[builtname]";

/// The drawer stub emitted for every collected builder. Both placeholder
/// tokens may occur any number of times; every occurrence is replaced.
pub const DEFAULT_TEMPLATE: &str = "\nusing UnityEditor;\n\n[CustomPropertyDrawer(typeof([name]))]\npublic class [name]Drawer : \
	 ThingBuilderDrawer<[name], [builtname]> {}\n";

fn default_source_dirs() -> Vec<PathBuf> {
	vec![PathBuf::from("ScriptableObjects/Builders/Concretes")]
}

fn default_extension() -> String {
	".cs".to_string()
}

fn default_output_dir() -> PathBuf {
	PathBuf::from("Editor/Drawers/ExplicitType")
}

fn default_output_suffix() -> String {
	"Drawer".to_string()
}

fn default_strip() -> String {
	"Builder".to_string()
}

fn default_template() -> String {
	DEFAULT_TEMPLATE.to_string()
}

/// Configuration loaded from a `drawgen.toml` file, or built entirely from
/// the compiled-in defaults when no config file exists.
///
/// ```toml
/// [source]
/// dirs = ["ScriptableObjects/Builders/Concretes"]
/// extension = ".cs"
///
/// [output]
/// dir = "Editor/Drawers/ExplicitType"
/// suffix = "Drawer"
///
/// [template]
/// strip = "Builder"
/// ```
///
/// The value is immutable for the duration of a run and passed to both the
/// scanner and the generator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DrawgenConfig {
	/// Where to look for builder sources.
	#[serde(default)]
	pub source: SourceConfig,
	/// Where generated drawer stubs are written.
	#[serde(default)]
	pub output: OutputConfig,
	/// The stub template and name-derivation settings.
	#[serde(default)]
	pub template: TemplateConfig,
}

/// Source-tree configuration for the `[source]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
	/// Subdirectories (relative to the project root) searched recursively
	/// for builder sources.
	#[serde(default = "default_source_dirs")]
	pub dirs: Vec<PathBuf>,
	/// File suffix identifying candidate sources, including the leading dot.
	/// The same suffix is reused for generated files.
	#[serde(default = "default_extension")]
	pub extension: String,
}

impl Default for SourceConfig {
	fn default() -> Self {
		Self {
			dirs: default_source_dirs(),
			extension: default_extension(),
		}
	}
}

/// Output configuration for the `[output]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
	/// Subdirectory (relative to the project root) generated files are
	/// written into. Created on demand.
	#[serde(default = "default_output_dir")]
	pub dir: PathBuf,
	/// Suffix appended to the collected name to form the output filename,
	/// before the extension.
	#[serde(default = "default_output_suffix")]
	pub suffix: String,
}

impl Default for OutputConfig {
	fn default() -> Self {
		Self {
			dir: default_output_dir(),
			suffix: default_output_suffix(),
		}
	}
}

/// Template configuration for the `[template]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateConfig {
	/// The stub content with `[name]` and `[builtname]` placeholder tokens.
	#[serde(default = "default_template")]
	pub content: String,
	/// Substring removed from the collected name to derive the built-object
	/// name. Only the first occurrence is removed.
	#[serde(default = "default_strip")]
	pub strip: String,
}

impl Default for TemplateConfig {
	fn default() -> Self {
		Self {
			content: default_template(),
			strip: default_strip(),
		}
	}
}

impl DrawgenConfig {
	/// Load configuration from the first config file candidate found under
	/// `root`. Returns `None` when no config file exists.
	pub fn load(root: &Path) -> DrawgenResult<Option<Self>> {
		for candidate in CONFIG_FILE_CANDIDATES {
			let path = root.join(candidate);
			if !path.is_file() {
				continue;
			}

			let content = std::fs::read_to_string(&path)?;
			let config = toml::from_str(&content)
				.map_err(|e| DrawgenError::ConfigParse(e.to_string()))?;
			return Ok(Some(config));
		}

		Ok(None)
	}

	/// Resolve the effective configuration for `root`: the config file when
	/// one is present, the compiled-in defaults otherwise.
	pub fn resolve(root: &Path) -> DrawgenResult<Self> {
		Ok(Self::load(root)?.unwrap_or_default())
	}
}
