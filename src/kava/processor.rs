//! File processing API for the kava translator
//!
//! This module wraps the translation pipeline behind named output formats,
//! for the CLI and for embedders that want a one-call interface:
//!
//! - `js`: the translated JavaScript source.
//! - `annotated`: a per-line inspection dump of the *input*: content
//!   marker, resolved indentation level, original text, and the
//!   classification legend row underneath.
//! - `json`: the translated output lines with their classifications and
//!   origins, plus any warnings, as pretty-printed JSON.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::kava::document::Document;
use crate::kava::pipeline::{self, Options, TranslateError, Warning};
use crate::kava::resolving;
use crate::kava::synthesis::OutputLine;

/// The output format of a processing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Translated JavaScript source.
    Js,
    /// Classification and indentation dump of the input.
    Annotated,
    /// Translated lines plus warnings as JSON.
    Json,
}

impl OutputFormat {
    /// Parse a format name as given on the command line.
    pub fn from_string(name: &str) -> Result<OutputFormat, ProcessingError> {
        match name {
            "js" => Ok(OutputFormat::Js),
            "annotated" => Ok(OutputFormat::Annotated),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ProcessingError::InvalidFormat(name.to_string())),
        }
    }
}

/// All recognized format names.
pub fn available_formats() -> Vec<&'static str> {
    vec!["js", "annotated", "json"]
}

/// Errors that can occur during processing.
#[derive(Debug)]
pub enum ProcessingError {
    IoError(String),
    InvalidFormat(String),
    Translate(TranslateError),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
            ProcessingError::InvalidFormat(name) => write!(f, "Invalid format: {}", name),
            ProcessingError::Translate(err) => write!(f, "Translation error: {}", err),
        }
    }
}

impl std::error::Error for ProcessingError {}

impl From<TranslateError> for ProcessingError {
    fn from(err: TranslateError) -> ProcessingError {
        ProcessingError::Translate(err)
    }
}

/// A processing result: the formatted output plus any warnings collected.
#[derive(Debug, Clone)]
pub struct Processed {
    pub output: String,
    pub warnings: Vec<Warning>,
}

/// Process a kava file according to the given format.
pub fn process_file<P: AsRef<Path>>(
    path: P,
    format: OutputFormat,
    options: &Options,
) -> Result<Processed, ProcessingError> {
    let source =
        fs::read_to_string(path).map_err(|err| ProcessingError::IoError(err.to_string()))?;
    process_source(&source, format, options)
}

/// Process an in-memory kava source according to the given format.
pub fn process_source(
    source: &str,
    format: OutputFormat,
    options: &Options,
) -> Result<Processed, ProcessingError> {
    match format {
        OutputFormat::Js => {
            let translation = pipeline::translate(source, options)?;
            Ok(Processed {
                output: translation.text(),
                warnings: translation.warnings,
            })
        }
        OutputFormat::Annotated => annotated(source, options),
        OutputFormat::Json => {
            let translation = pipeline::translate(source, options)?;
            let output = serde_json::to_string_pretty(&JsonOutput {
                lines: &translation.lines,
                warnings: &translation.warnings,
            })
            .map_err(|err| ProcessingError::IoError(err.to_string()))?;
            Ok(Processed {
                output,
                warnings: translation.warnings,
            })
        }
    }
}

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    lines: &'a [OutputLine],
    warnings: &'a [Warning],
}

/// Render the classification dump: one record per input line, with a `>`
/// marker on content-bearing lines, the resolved level (`-` when unset),
/// the original text, and the legend row underneath.
fn annotated(source: &str, options: &Options) -> Result<Processed, ProcessingError> {
    let mut doc = Document::read(source);
    let warnings = resolving::resolve(&mut doc, options.policy)?;

    let mut output = String::new();
    for line in doc.lines() {
        let marker = if line.is_content_bearing() { '>' } else { ' ' };
        let level = match line.indent() {
            Some(level) => level.to_string(),
            None => "-".to_string(),
        };
        output.push_str(&format!("{}{:>3}  {}\n", marker, level, line.text()));
        output.push_str(&format!("      {}\n", line.legend()));
    }

    Ok(Processed { output, warnings })
}
