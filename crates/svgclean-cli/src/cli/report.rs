//! User-facing run output.

use svgclean_core::batch::BatchSummary;

pub fn print_summary(summary: &BatchSummary) {
    for path in &summary.written {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        println!("Cleaned file written: {name}");
    }
    for failure in &summary.failed {
        eprintln!("Skipped {}: {}", failure.file_name, failure.error);
    }
    if let Some(path) = &summary.attribution_path {
        println!("Attribution details written to {}", path.display());
    }
    if summary.has_failures() {
        eprintln!(
            "{} cleaned, {} skipped",
            summary.written.len(),
            summary.failed.len()
        );
    }
}
