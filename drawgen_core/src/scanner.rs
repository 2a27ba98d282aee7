use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

use crate::DrawgenError;
use crate::DrawgenResult;
use crate::config::DrawgenConfig;

/// Walk every configured source subdirectory and collect the base names of
/// files carrying the configured extension.
///
/// Names are returned in traversal order (matching files in a directory
/// first, then its subdirectories) without sorting or deduplication. The
/// same base name found twice is collected twice. Scanning is read-only; a
/// configured subdirectory that is missing or unreadable is a fatal error
/// and no partial result is returned.
pub fn collect_names(root: &Path, config: &DrawgenConfig) -> DrawgenResult<Vec<String>> {
	let mut names = Vec::new();
	let mut visited_dirs = HashSet::new();

	for dir in &config.source.dirs {
		let abs_dir = root.join(dir);
		if !abs_dir.is_dir() {
			return Err(DrawgenError::MissingSourceDir {
				path: abs_dir.display().to_string(),
			});
		}

		walk_dir(&abs_dir, &config.source.extension, &mut names, &mut visited_dirs)?;
	}

	tracing::debug!(count = names.len(), "collected builder names");
	Ok(names)
}

fn walk_dir(
	dir: &Path,
	extension: &str,
	names: &mut Vec<String>,
	visited_dirs: &mut HashSet<PathBuf>,
) -> DrawgenResult<()> {
	// Detect symlink cycles by tracking canonical paths.
	let canonical = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
	if !visited_dirs.insert(canonical) {
		return Err(DrawgenError::SymlinkCycle {
			path: dir.display().to_string(),
		});
	}

	let read_dir_error = |source: std::io::Error| DrawgenError::ReadDir {
		path: dir.display().to_string(),
		source,
	};
	let entries = std::fs::read_dir(dir).map_err(read_dir_error)?;

	// Matching files in a directory are collected before any of its
	// subdirectories are descended.
	let mut subdirs = Vec::new();
	for entry in entries {
		let path = entry.map_err(read_dir_error)?.path();
		if path.is_dir() {
			subdirs.push(path);
		} else if let Some(name) = base_name(&path, extension) {
			names.push(name);
		}
	}

	for subdir in subdirs {
		walk_dir(&subdir, extension, names, visited_dirs)?;
	}

	Ok(())
}

/// Extract the base name of a candidate file: the filename with the
/// configured extension stripped. Returns `None` for files that do not end
/// with the extension.
fn base_name(path: &Path, extension: &str) -> Option<String> {
	let file_name = path.file_name()?.to_str()?;
	file_name.strip_suffix(extension).map(str::to_string)
}
