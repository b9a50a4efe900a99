//! In-memory attribution log, flushed once at the end of a run.

use std::fs;
use std::io;
use std::path::Path;

/// File name of the attribution log, written into the base directory.
pub const ATTRIBUTION_FILE: &str = "attribution.txt";

/// Ordered attribution notes, one per processed icon.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AttributionLog {
    notes: Vec<String>,
}

impl AttributionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a note. Line breaks inside it become spaces so each icon
    /// stays on one line of the log.
    pub fn push(&mut self, note: String) {
        if note.contains(['\r', '\n']) {
            self.notes.push(note.replace("\r\n", " ").replace(['\r', '\n'], " "));
        } else {
            self.notes.push(note);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Every note followed by `\n`, in insertion order.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for note in &self.notes {
            out.push_str(note);
            out.push('\n');
        }
        out
    }

    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.render())
    }
}
