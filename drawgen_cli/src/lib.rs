use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Generate Unity property-drawer stubs for builder ScriptableObjects.",
	long_about = "drawgen scans a Unity project for builder ScriptableObject sources and writes \
	              one CustomPropertyDrawer registration stub per builder, filled from a fixed \
	              template.\n\nQuick start:\n  drawgen           Scan and write all drawer \
	              stubs\n  drawgen list      Show the builders that would be processed\n  drawgen \
	              init      Create a sample drawgen.toml"
)]
pub struct DrawgenCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Scan the configured source directories and write one drawer stub per
	/// collected builder.
	///
	/// This is the default when no subcommand is given. Existing stubs are
	/// overwritten unconditionally; rerunning with unchanged sources
	/// produces byte-identical output, so a run aborted by a write failure
	/// can simply be rerun.
	Generate {
		/// Preview the files that would be written without touching the
		/// filesystem.
		#[arg(long, default_value_t = false)]
		dry_run: bool,
	},
	/// List the builder names collected from the source directories without
	/// generating anything.
	///
	/// Shows each collected builder together with the built-object name the
	/// generator would derive for it. Useful for auditing the source tree
	/// before a run.
	List,
	/// Create a commented sample drawgen.toml in the project root.
	///
	/// Every field in the sample is optional and documents its compiled-in
	/// default. If the file already exists, this command is a no-op and
	/// exits successfully.
	Init,
}
