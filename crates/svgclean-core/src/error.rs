//! Error types for a cleaning run.
//!
//! `BatchError` aborts the whole run; `FileError` only skips one icon.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Directory-level failure. The run stops.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("resolve absolute path of base directory {}: {source}", path.display())]
    ResolveBase { path: PathBuf, source: io::Error },
    #[error("create output directory {}: {source}", path.display())]
    CreateOutputDir { path: PathBuf, source: io::Error },
    #[error("read icons directory {}: {source}", path.display())]
    ListIcons { path: PathBuf, source: io::Error },
    #[error("write attribution details to {}: {source}", path.display())]
    WriteAttribution { path: PathBuf, source: io::Error },
}

/// Failure on a single icon. The file is skipped and the run continues.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("read file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("write cleaned file {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

