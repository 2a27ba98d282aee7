use std::path::Path;

use crate::DrawgenError;
use crate::DrawgenResult;
use crate::config::BUILT_NAME_TOKEN;
use crate::config::DrawgenConfig;
use crate::config::NAME_TOKEN;

/// A planned or emitted drawer stub for a single collected builder name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
	/// The collected builder name the stub was generated for.
	pub name: String,
	/// The derived built-object name substituted into the template.
	pub object: String,
	/// Output path with separators normalized to forward slashes.
	pub path: String,
	/// The filled template content.
	pub content: String,
}

/// Derive the built-object name by removing the first occurrence of the
/// strip substring. The removal is not suffix-anchored: `BuilderOfWidgets`
/// derives to `OfWidgets`. Names without the substring pass through
/// unchanged.
pub fn derive_name(name: &str, strip: &str) -> String {
	name.replacen(strip, "", 1)
}

/// Fill the template, replacing every `[name]` token with the collected
/// name and then every `[builtname]` token with the derived name.
/// Replacement is literal substring substitution; a placeholder token
/// occurring inside a collected name is not escaped.
pub fn fill_template(template: &str, name: &str, object: &str) -> String {
	template.replace(NAME_TOKEN, name).replace(BUILT_NAME_TOKEN, object)
}

/// Render a path with separators normalized to forward slashes regardless
/// of how the configured directories were specified.
pub fn normalize_path(path: &Path) -> String {
	path.display().to_string().replace('\\', "/")
}

/// Render the drawer stub for a single collected name without touching the
/// filesystem.
pub fn render(root: &Path, config: &DrawgenConfig, name: &str) -> GeneratedFile {
	let object = derive_name(name, &config.template.strip);
	let file_name = format!("{name}{}{}", config.output.suffix, config.source.extension);
	let path = normalize_path(&root.join(&config.output.dir).join(file_name));
	let content = fill_template(&config.template.content, name, &object);

	GeneratedFile {
		name: name.to_string(),
		object,
		path,
		content,
	}
}

/// Generate one drawer stub per collected name, in order.
///
/// The output directory is created on demand (a no-op when already
/// present). Existing files are overwritten unconditionally with a single
/// full write, so rerunning with unchanged inputs produces byte-identical
/// output. `on_file` is invoked after each successful write; a failed write
/// aborts the remaining batch and files already written stay in place.
pub fn generate(
	root: &Path,
	config: &DrawgenConfig,
	names: &[String],
	mut on_file: impl FnMut(&GeneratedFile),
) -> DrawgenResult<Vec<GeneratedFile>> {
	let output_dir = root.join(&config.output.dir);
	let mut generated = Vec::with_capacity(names.len());

	for name in names {
		let file = render(root, config, name);

		std::fs::create_dir_all(&output_dir).map_err(|source| DrawgenError::CreateOutputDir {
			path: normalize_path(&output_dir),
			source,
		})?;
		std::fs::write(&file.path, &file.content).map_err(|source| DrawgenError::WriteFile {
			path: file.path.clone(),
			source,
		})?;

		tracing::debug!(name = %file.name, path = %file.path, "wrote drawer stub");
		on_file(&file);
		generated.push(file);
	}

	Ok(generated)
}
