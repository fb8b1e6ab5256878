//! Test support utilities
//!
//! Small helpers shared by unit and integration tests. Production code must
//! not depend on this module.

use crate::kava::document::Document;
use crate::kava::pipeline::{self, Options};

/// Classify a source blob and return the legend row of every line.
pub fn legend_of(source: &str) -> Vec<String> {
    Document::read(source)
        .lines()
        .iter()
        .map(|line| line.legend())
        .collect()
}

/// Translate with the given options and return the output text, panicking
/// on error. Test-only convenience.
pub fn translate_text(source: &str, options: &Options) -> String {
    pipeline::translate(source, options)
        .expect("translation failed")
        .text()
}
