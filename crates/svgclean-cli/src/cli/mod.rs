//! CLI for svgclean.

mod report;

use anyhow::Result;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use svgclean_core::batch::{self, BatchOptions};
use svgclean_core::config::{self, SvgcleanConfig};

/// Exit code when the run completed but some icons were skipped.
pub const EXIT_PARTIAL: i32 = 2;

/// Strip embedded text from SVG icons, normalize sizing and rename them.
#[derive(Debug, Parser)]
#[command(name = "svgclean")]
#[command(about = "Clean SVG icon packs: strip attribution text, normalize viewBox, drop vendor prefixes", long_about = None)]
pub struct Cli {
    /// Base directory to scan for icons (used when -b is not given; default ".").
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Base directory to scan for icons. Takes precedence over the positional DIR.
    #[arg(short = 'b', long = "base", value_name = "DIR")]
    pub base: Option<PathBuf>,

    /// Directory within the base directory containing the SVG icons.
    #[arg(short = 'i', long = "icons", value_name = "SUBDIR")]
    pub icons: Option<PathBuf>,

    /// Output subdirectory (relative to base) for cleaned icons. Default from config, else "dist".
    #[arg(short = 'o', long = "out", value_name = "SUBDIR")]
    pub out: Option<PathBuf>,

    /// Write attribution details to <base>/attribution.txt.
    #[arg(short = 'a', long = "attribution", value_name = "BOOL", action = ArgAction::Set)]
    pub attribution: Option<bool>,

    /// Keep the unique-ID suffix of the filename.
    #[arg(short = 'u', long = "keep-uid", value_name = "BOOL", action = ArgAction::Set)]
    pub keep_uid: Option<bool>,
}

impl Cli {
    /// Parse args, run the batch and return the process exit code.
    pub fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();
        let cfg = config::load_or_default();
        tracing::debug!("loaded config: {:?}", cfg);

        let opts = cli.batch_options(&cfg);
        let summary = batch::run(&opts)?;
        report::print_summary(&summary);

        Ok(if summary.has_failures() { EXIT_PARTIAL } else { 0 })
    }

    /// Merge flags over config: flag > config file > built-in default.
    pub fn batch_options(&self, cfg: &SvgcleanConfig) -> BatchOptions {
        let base_dir = self
            .base
            .clone()
            .or_else(|| self.dir.clone())
            .unwrap_or_else(|| PathBuf::from("."));
        BatchOptions {
            base_dir,
            icons_dir: self.icons.clone(),
            output_dir: self
                .out
                .clone()
                .unwrap_or_else(|| PathBuf::from(&cfg.output_dir)),
            attribution: self.attribution.unwrap_or(cfg.attribution),
            keep_uid: self.keep_uid.unwrap_or(cfg.keep_uid),
        }
    }
}
