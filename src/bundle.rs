//! Note bundling.
//!
//! Folds every file in a flat notes directory into one text file. Each
//! source file becomes a block of three parts: the bare file name, the
//! number of lines in the file, then the file contents verbatim. Blocks
//! are ordered by line count, shortest first, with ties broken by file
//! name so the result is stable across runs and platforms.
//!
//! Only the directory itself is read; subdirectories are skipped, not
//! descended into. All sources are read before the output file is
//! written, and a previous run's output sitting in the directory is
//! recognized by path and left out, so the bundle never contains itself.

use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum BundleError {
    #[error("Notes directory not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to list {dir}: {source}")]
    List {
        dir: PathBuf,
        source: walkdir::Error,
    },
    #[error("Failed to read {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("Failed to write {path}: {source}")]
    WriteFile { path: PathBuf, source: io::Error },
}

/// One block of the finished bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundledFile {
    pub name: String,
    pub line_count: usize,
}

/// What [`bundle`] produced, in written order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleSummary {
    pub output: PathBuf,
    pub files: Vec<BundledFile>,
    /// Sum of the per-file line counts (header lines not included).
    pub total_lines: usize,
}

struct Block {
    name: String,
    line_count: usize,
    contents: String,
}

/// Bundle every file in `directory` into `output`.
///
/// The output path may live inside the source directory. Line counts use
/// the same rule as [`str::lines`]: a trailing newline does not open a
/// final empty line, and the empty file has zero lines.
pub fn bundle(directory: &Path, output: &Path) -> Result<BundleSummary, BundleError> {
    if !directory.is_dir() {
        return Err(BundleError::NotFound(directory.to_path_buf()));
    }

    // Resolves only when a previous run already created the output file.
    let previous_output = output.canonicalize().ok();

    let mut blocks = Vec::new();
    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| BundleError::List {
            dir: directory.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let (Some(previous), Ok(resolved)) = (&previous_output, path.canonicalize()) {
            if *previous == resolved {
                continue;
            }
        }

        let contents = fs::read_to_string(path).map_err(|e| BundleError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        blocks.push(Block {
            name: entry.file_name().to_string_lossy().into_owned(),
            line_count: contents.lines().count(),
            contents,
        });
    }

    // Stable sort; the walk already delivered names in order, so equal
    // line counts stay alphabetical.
    blocks.sort_by_key(|block| block.line_count);

    let mut text = String::new();
    for block in &blocks {
        let _ = writeln!(text, "{}", block.name);
        let _ = writeln!(text, "{}", block.line_count);
        text.push_str(&block.contents);
    }
    fs::write(output, &text).map_err(|e| BundleError::WriteFile {
        path: output.to_path_buf(),
        source: e,
    })?;

    Ok(BundleSummary {
        output: output.to_path_buf(),
        total_lines: blocks.iter().map(|block| block.line_count).sum(),
        files: blocks
            .into_iter()
            .map(|block| BundledFile {
                name: block.name,
                line_count: block.line_count,
            })
            .collect(),
    })
}
