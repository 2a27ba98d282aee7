use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use drawgen_cli::Commands;
use drawgen_cli::DrawgenCli;
use drawgen_core::DrawgenConfig;
use drawgen_core::collect_names;
use drawgen_core::derive_name;
use drawgen_core::generate;
use drawgen_core::normalize_path;
use drawgen_core::render;
use owo_colors::OwoColorize;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = DrawgenCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	// Route core tracing output to stderr, gated by RUST_LOG.
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match args.command {
		Some(Commands::Generate { dry_run }) => run_generate(&args, dry_run),
		Some(Commands::List) => run_list(&args),
		Some(Commands::Init) => run_init(&args),
		// No subcommand runs the whole pipeline with the resolved config.
		None => run_generate(&args, false),
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<drawgen_core::DrawgenError>() {
			Ok(err) => {
				let report: miette::Report = (*err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

fn resolve_root(args: &DrawgenCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Make a normalized path relative to root for display purposes.
fn make_relative(path: &str, root: &Path) -> String {
	let prefix = format!("{}/", normalize_path(root));
	path.strip_prefix(&prefix).unwrap_or(path).to_string()
}

fn run_generate(args: &DrawgenCli, dry_run: bool) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config = DrawgenConfig::resolve(&root)?;

	if args.verbose {
		print_config(&root, &config);
	}

	let names = collect_names(&root, &config)?;
	println!("{names:?}");

	if dry_run {
		println!("Dry run: would write {} drawer stub(s):", names.len());
		for name in &names {
			let file = render(&root, &config, name);
			println!("  {} -> {}", file.object, make_relative(&file.path, &root));
		}
		return Ok(());
	}

	generate(&root, &config, &names, |file| {
		println!("Drawer for object {}", file.object);
		println!("Created file: {}", make_relative(&file.path, &root));
	})?;

	println!("Done.");
	Ok(())
}

fn run_list(args: &DrawgenCli) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config = DrawgenConfig::resolve(&root)?;
	let names = collect_names(&root, &config)?;

	if names.is_empty() {
		println!("No builder sources found.");
		return Ok(());
	}

	println!("{}", colored!("Builders:", bold));
	for name in &names {
		let object = derive_name(name, &config.template.strip);
		println!("  {name} -> {object}");
	}

	println!("\n{} builder(s)", names.len());
	Ok(())
}

fn run_init(args: &DrawgenCli) -> Result<(), Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config_path = root.join("drawgen.toml");

	if config_path.exists() {
		println!("Config file already exists: {}", config_path.display());
		return Ok(());
	}

	let sample_config = "# drawgen configuration\n# Every field is optional; the compiled-in \
	                     defaults match the commented values.\n\n# [source]\n# dirs = \
	                     [\"ScriptableObjects/Builders/Concretes\"]\n# extension = \".cs\"\n\n# \
	                     [output]\n# dir = \"Editor/Drawers/ExplicitType\"\n# suffix = \
	                     \"Drawer\"\n\n# [template]\n# strip = \"Builder\"\n";

	std::fs::write(&config_path, sample_config)?;
	println!("Created drawgen.toml");
	Ok(())
}

fn print_config(root: &Path, config: &DrawgenConfig) {
	let dirs: Vec<String> = config
		.source
		.dirs
		.iter()
		.map(|dir| dir.display().to_string())
		.collect();

	println!("Project root: {}", root.display());
	println!("Source dirs: {}", dirs.join(", "));
	println!("Output dir: {}", config.output.dir.display());
}
