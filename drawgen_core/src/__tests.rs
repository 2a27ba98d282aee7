use std::path::Path;

use rstest::rstest;
use similar_asserts::assert_eq;

use super::*;

/// Create the default source directory under `root` and seed it with empty
/// candidate files.
fn seed_sources(root: &Path, files: &[&str]) -> AnyEmptyResult {
	let dir = root.join("ScriptableObjects/Builders/Concretes");
	std::fs::create_dir_all(&dir)?;
	for file in files {
		std::fs::write(dir.join(file), "")?;
	}

	Ok(())
}

#[rstest]
#[case::suffix("FooBuilder", "Foo")]
#[case::no_occurrence("Widget", "Widget")]
#[case::leading("BuilderOfWidgets", "OfWidgets")]
#[case::first_of_two("FooBuilderBuilder", "FooBuilder")]
#[case::midword("InventoryBuilderEntry", "InventoryEntry")]
#[case::empty("", "")]
fn derives_built_object_name(#[case] name: &str, #[case] expected: &str) {
	assert_eq!(derive_name(name, "Builder"), expected);
}

#[rstest]
#[case::both_tokens("typeof([name]) as [builtname]", "typeof(FooBuilder) as Foo")]
#[case::repeated_tokens("[name] [name] [builtname] [builtname]", "FooBuilder FooBuilder Foo Foo")]
#[case::no_tokens("nothing to fill", "nothing to fill")]
fn fills_every_placeholder_occurrence(#[case] template: &str, #[case] expected: &str) {
	assert_eq!(fill_template(template, "FooBuilder", "Foo"), expected);
}

#[test]
fn no_placeholder_token_survives_the_default_template() {
	let filled = fill_template(DEFAULT_TEMPLATE, "FooBuilder", "Foo");
	assert!(!filled.contains(NAME_TOKEN));
	assert!(!filled.contains(BUILT_NAME_TOKEN));
}

#[test]
fn normalizes_backslash_separators() {
	let path = Path::new("Editor\\Drawers\\ExplicitType").join("FooBuilderDrawer.cs");
	assert_eq!(normalize_path(&path), "Editor/Drawers/ExplicitType/FooBuilderDrawer.cs");
}

#[test]
fn collects_names_in_traversal_order() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let config = DrawgenConfig::default();
	seed_sources(tmp.path(), &["ItemBuilder.cs"])?;
	let nested = tmp.path().join("ScriptableObjects/Builders/Concretes/Nested");
	std::fs::create_dir_all(&nested)?;
	std::fs::write(nested.join("CharacterBuilder.cs"), "")?;

	// A file in a directory is collected before files in its subdirectories.
	let names = collect_names(tmp.path(), &config)?;
	assert_eq!(names, vec!["ItemBuilder".to_string(), "CharacterBuilder".to_string()]);

	Ok(())
}

#[test]
fn skips_files_with_other_extensions() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let config = DrawgenConfig::default();
	seed_sources(tmp.path(), &["FooBuilder.cs", "notes.txt", "FooBuilder.cs.meta"])?;

	let names = collect_names(tmp.path(), &config)?;
	assert_eq!(names, vec!["FooBuilder".to_string()]);

	Ok(())
}

#[test]
fn keeps_duplicate_names_from_separate_directories() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let mut config = DrawgenConfig::default();
	config.source.dirs = vec!["Builders/A".into(), "Builders/B".into()];
	for dir in ["Builders/A", "Builders/B"] {
		let abs = tmp.path().join(dir);
		std::fs::create_dir_all(&abs)?;
		std::fs::write(abs.join("FooBuilder.cs"), "")?;
	}

	let names = collect_names(tmp.path(), &config)?;
	assert_eq!(names, vec!["FooBuilder".to_string(), "FooBuilder".to_string()]);

	Ok(())
}

#[test]
fn empty_source_directory_collects_nothing() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let config = DrawgenConfig::default();
	seed_sources(tmp.path(), &[])?;

	let names = collect_names(tmp.path(), &config)?;
	assert!(names.is_empty());

	Ok(())
}

#[test]
fn missing_source_directory_is_fatal() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let config = DrawgenConfig::default();

	let result = collect_names(tmp.path(), &config);
	assert!(matches!(result, Err(DrawgenError::MissingSourceDir { .. })));

	Ok(())
}

#[test]
fn renders_the_builder_scenario() {
	let config = DrawgenConfig::default();
	let file = render(Path::new("."), &config, "FooBuilder");

	assert_eq!(file.object, "Foo");
	assert_eq!(file.path, "./Editor/Drawers/ExplicitType/FooBuilderDrawer.cs");
	assert_eq!(
		file.content,
		"\nusing UnityEditor;\n\n[CustomPropertyDrawer(typeof(FooBuilder))]\npublic class \
		 FooBuilderDrawer : ThingBuilderDrawer<FooBuilder, Foo> {}\n"
	);
}

#[test]
fn renders_the_degenerate_scenario() {
	// No strip substring present: builder name equals built name.
	let config = DrawgenConfig::default();
	let file = render(Path::new("."), &config, "Widget");

	assert_eq!(file.object, "Widget");
	assert_eq!(file.path, "./Editor/Drawers/ExplicitType/WidgetDrawer.cs");
	assert!(file.content.contains("ThingBuilderDrawer<Widget, Widget>"));
}

#[test]
fn generates_one_stub_per_collected_name() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let config = DrawgenConfig::default();
	seed_sources(tmp.path(), &["FooBuilder.cs"])?;

	let names = collect_names(tmp.path(), &config)?;
	let output_dir = tmp.path().join("Editor/Drawers/ExplicitType");
	assert!(!output_dir.exists());

	let written = generate(tmp.path(), &config, &names, |_| {})?;
	assert_eq!(written.len(), 1);
	assert!(output_dir.is_dir());

	let content = std::fs::read_to_string(output_dir.join("FooBuilderDrawer.cs"))?;
	assert!(content.contains("CustomPropertyDrawer(typeof(FooBuilder))"));
	assert!(content.contains("ThingBuilderDrawer<FooBuilder, Foo>"));

	Ok(())
}

#[test]
fn rerun_is_byte_identical() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let config = DrawgenConfig::default();
	seed_sources(tmp.path(), &["FooBuilder.cs", "Widget.cs"])?;

	let names = collect_names(tmp.path(), &config)?;
	let first = generate(tmp.path(), &config, &names, |_| {})?;
	let first_bytes: Vec<Vec<u8>> = first
		.iter()
		.map(|file| std::fs::read(&file.path))
		.collect::<Result<_, _>>()?;

	let second = generate(tmp.path(), &config, &names, |_| {})?;
	for (file, bytes) in second.iter().zip(&first_bytes) {
		assert_eq!(&std::fs::read(&file.path)?, bytes);
	}

	Ok(())
}

#[test]
fn overwrites_existing_output_unconditionally() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let config = DrawgenConfig::default();
	seed_sources(tmp.path(), &["FooBuilder.cs"])?;
	let target = tmp.path().join("Editor/Drawers/ExplicitType/FooBuilderDrawer.cs");
	std::fs::create_dir_all(target.parent().unwrap())?;
	std::fs::write(&target, "stale hand-edited content")?;

	let names = collect_names(tmp.path(), &config)?;
	generate(tmp.path(), &config, &names, |_| {})?;

	let content = std::fs::read_to_string(&target)?;
	assert!(!content.contains("stale hand-edited content"));
	assert!(content.contains("CustomPropertyDrawer(typeof(FooBuilder))"));

	Ok(())
}

#[test]
fn observer_sees_each_file_in_order() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let config = DrawgenConfig::default();

	let names = vec!["FooBuilder".to_string(), "Widget".to_string()];
	let mut seen = Vec::new();
	generate(tmp.path(), &config, &names, |file| {
		seen.push(file.object.clone());
	})?;

	assert_eq!(seen, vec!["Foo".to_string(), "Widget".to_string()]);

	Ok(())
}

#[test]
fn default_config_matches_compiled_in_constants() {
	let config = DrawgenConfig::default();

	assert_eq!(config.source.dirs, vec![std::path::PathBuf::from(
		"ScriptableObjects/Builders/Concretes"
	)]);
	assert_eq!(config.source.extension, ".cs");
	assert_eq!(config.output.dir, Path::new("Editor/Drawers/ExplicitType"));
	assert_eq!(config.output.suffix, "Drawer");
	assert_eq!(config.template.strip, "Builder");
	assert_eq!(config.template.content, DEFAULT_TEMPLATE);
}

#[test]
fn load_returns_none_without_config_file() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	assert!(DrawgenConfig::load(tmp.path())?.is_none());

	Ok(())
}

#[test]
fn partial_config_file_keeps_remaining_defaults() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("drawgen.toml"), "[output]\ndir = \"Generated\"\n")?;

	let config = DrawgenConfig::resolve(tmp.path())?;
	assert_eq!(config.output.dir, Path::new("Generated"));
	assert_eq!(config.output.suffix, "Drawer");
	assert_eq!(config.source.extension, ".cs");

	Ok(())
}

#[test]
fn hidden_config_candidate_is_discovered() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join(".drawgen.toml"), "[template]\nstrip = \"Factory\"\n")?;

	let config = DrawgenConfig::resolve(tmp.path())?;
	assert_eq!(config.template.strip, "Factory");

	Ok(())
}

#[test]
fn malformed_config_is_a_parse_error() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("drawgen.toml"), "[source\ndirs = 3\n")?;

	let result = DrawgenConfig::load(tmp.path());
	assert!(matches!(result, Err(DrawgenError::ConfigParse(_))));

	Ok(())
}
