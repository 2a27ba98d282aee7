use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum DrawgenError {
	#[error(transparent)]
	#[diagnostic(code(drawgen::io_error))]
	Io(#[from] std::io::Error),

	#[error("source directory not found: `{path}`")]
	#[diagnostic(
		code(drawgen::missing_source_dir),
		help("create the directory or adjust `source.dirs` in drawgen.toml")
	)]
	MissingSourceDir { path: String },

	#[error("failed to read source directory `{path}`: {source}")]
	#[diagnostic(code(drawgen::read_dir))]
	ReadDir {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to create output directory `{path}`: {source}")]
	#[diagnostic(
		code(drawgen::create_output_dir),
		help("check permissions on the project root and `output.dir` in drawgen.toml")
	)]
	CreateOutputDir {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to write generated file `{path}`: {source}")]
	#[diagnostic(
		code(drawgen::write_file),
		help("check permissions and free space on the output volume, then rerun")
	)]
	WriteFile {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(drawgen::config_parse),
		help("check that drawgen.toml is valid TOML with [source], [output], and/or [template] sections")
	)]
	ConfigParse(String),

	#[error("symlink cycle detected at: `{path}`")]
	#[diagnostic(
		code(drawgen::symlink_cycle),
		help("remove the circular symlink from the source tree")
	)]
	SymlinkCycle { path: String },
}

pub type DrawgenResult<T> = Result<T, DrawgenError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
