//! Directory batch formatting.
//!
//! Every file under the input directory whose name contains `txt` is run
//! through the single-file pipeline. A failing file is recorded in the report
//! and the batch moves on.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::config::FormatConfig;
use crate::constants::naming::DISCOVERY_NEEDLE;
use crate::error::{Error, Result};
use crate::report::{BatchReport, FileOutcome};
use crate::services::naming::OutputTarget;
use crate::services::pipeline::process_file;

/// Recursively collect candidate files under `input_dir`, sorted by name
/// within each directory. A path that is not a directory holds no candidates.
pub fn discover(input_dir: &Path) -> Vec<PathBuf> {
    if !input_dir.is_dir() {
        return Vec::new();
    }

    WalkDir::new(input_dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under {}: {e}", input_dir.display());
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .file_name()
                .to_string_lossy()
                .to_lowercase()
                .contains(DISCOVERY_NEEDLE)
        })
        .map(walkdir::DirEntry::into_path)
        .collect()
}

/// Format every candidate file in `input_dir` into `output_dir`.
///
/// Fails without touching any file when the configuration is invalid, the
/// input directory is missing, or it holds no candidates. Per-file failures
/// end up in the returned report.
pub fn format_directory(
    input_dir: &Path,
    output_dir: &Path,
    config: &FormatConfig,
) -> Result<BatchReport> {
    let wrapper = config.wrapper()?;

    if !input_dir.exists() {
        return Err(Error::DirectoryNotFound { path: input_dir.to_path_buf() });
    }

    fs_err::create_dir_all(output_dir).map_err(|source| Error::Io {
        source,
        path: Some(output_dir.to_path_buf()),
    })?;

    let files = discover(input_dir);
    if files.is_empty() {
        return Err(Error::NoFilesFound { path: input_dir.to_path_buf() });
    }

    let start = Instant::now();
    let target = OutputTarget::Directory(output_dir.to_path_buf());
    let run = |file: &PathBuf| process_file(file, &target, config, wrapper);

    let outcomes: Vec<FileOutcome> = if config.parallel {
        files.par_iter().map(run).collect()
    } else {
        files.iter().map(run).collect()
    };

    warn_on_collisions(&outcomes);

    let report = BatchReport {
        input_dir: input_dir.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
        files: outcomes,
    };

    let elapsed = start.elapsed();
    tracing::info!(
        "Formatted {} of {} files from {} in {elapsed:?}",
        report.formatted(),
        report.files.len(),
        input_dir.display()
    );

    Ok(report)
}

/// Two inputs that derive the same output name overwrite each other.
fn warn_on_collisions(outcomes: &[FileOutcome]) {
    let mut seen = HashSet::new();
    for outcome in outcomes {
        if let FileOutcome::Formatted { input, output, .. } = outcome {
            if !seen.insert(output) {
                tracing::warn!(
                    "{} overwrote an earlier output at {}",
                    input.display(),
                    output.display()
                );
            }
        }
    }
}
