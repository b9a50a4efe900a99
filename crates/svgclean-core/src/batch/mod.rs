//! Batch driver: clean every `.svg` in a directory into an output directory.
//!
//! Directory-level problems abort with [`BatchError`]. A file that cannot be
//! read or written is logged, recorded in [`BatchSummary::failed`] and
//! skipped.

mod attribution;
mod scan;

pub use attribution::{AttributionLog, ATTRIBUTION_FILE};
pub use scan::list_icons;

use crate::config::DEFAULT_OUTPUT_DIR;
use crate::content;
use crate::error::{BatchError, FileError};
use crate::filename;
use std::fs;
use std::path::PathBuf;

/// Inputs for one run. Relative `icons_dir` and `output_dir` resolve against `base_dir`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    pub base_dir: PathBuf,
    /// Icons subdirectory; `None` reads icons from `base_dir` itself.
    pub icons_dir: Option<PathBuf>,
    pub output_dir: PathBuf,
    /// Collect attribution notes into `<base_dir>/attribution.txt`.
    pub attribution: bool,
    /// Keep the uid segment in output filenames.
    pub keep_uid: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            icons_dir: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            attribution: true,
            keep_uid: true,
        }
    }
}

/// A file skipped because of a per-file error.
#[derive(Debug)]
pub struct FileFailure {
    pub file_name: String,
    pub error: FileError,
}

/// Outcome of a completed run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Cleaned files written, in processing order.
    pub written: Vec<PathBuf>,
    pub failed: Vec<FileFailure>,
    /// Set when `attribution.txt` was written.
    pub attribution_path: Option<PathBuf>,
}

impl BatchSummary {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Run a cleaning pass over `opts.icons_dir`.
pub fn run(opts: &BatchOptions) -> Result<BatchSummary, BatchError> {
    let base = std::path::absolute(&opts.base_dir).map_err(|source| BatchError::ResolveBase {
        path: opts.base_dir.clone(),
        source,
    })?;
    let icons_dir = match &opts.icons_dir {
        Some(dir) => base.join(dir),
        None => base.clone(),
    };
    let out_dir = base.join(&opts.output_dir);
    fs::create_dir_all(&out_dir).map_err(|source| BatchError::CreateOutputDir {
        path: out_dir.clone(),
        source,
    })?;
    tracing::debug!(
        "batch base={} icons={} out={} attribution={} keep_uid={}",
        base.display(),
        icons_dir.display(),
        out_dir.display(),
        opts.attribution,
        opts.keep_uid
    );

    let names = list_icons(&icons_dir)?;
    let mut summary = BatchSummary::default();
    let mut log = AttributionLog::new();

    for name in names {
        let src = icons_dir.join(&name);
        let raw = match fs::read(&src) {
            Ok(raw) => raw,
            Err(source) => {
                let error = FileError::Read { path: src, source };
                tracing::warn!("{error}");
                summary.failed.push(FileFailure { file_name: name, error });
                continue;
            }
        };

        let cleaned = content::clean_bytes(&raw, &name);
        if opts.attribution {
            log.push(cleaned.attribution);
        }

        let dest = out_dir.join(filename::normalize(&name, opts.keep_uid));
        if let Err(source) = fs::write(&dest, &cleaned.content) {
            let error = FileError::Write { path: dest, source };
            tracing::warn!("{error}");
            summary.failed.push(FileFailure { file_name: name, error });
            continue;
        }
        tracing::info!("cleaned {} -> {}", src.display(), dest.display());
        summary.written.push(dest);
    }

    if opts.attribution && !log.is_empty() {
        let path = base.join(ATTRIBUTION_FILE);
        log.write_to(&path)
            .map_err(|source| BatchError::WriteAttribution {
                path: path.clone(),
                source,
            })?;
        tracing::info!("attribution details written to {}", path.display());
        summary.attribution_path = Some(path);
    }

    Ok(summary)
}
