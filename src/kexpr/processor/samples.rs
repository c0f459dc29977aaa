//! Bundled kexpr sample documents
//!
//! The files under `docs/samples/` are the canonical sources for tests. Read them through
//! [`KexprSources`] instead of copying their content into test code.

use std::fs;
use std::path::PathBuf;

use super::{process_file, ProcessingError, ProcessingSpec};
use crate::kexpr::ast::Document;
use crate::kexpr::parser::parse_document;

/// Available sample files
pub const AVAILABLE_SAMPLES: &[&str] = &[
    "000-empty-properties.kx",
    "010-typed-properties.kx",
    "020-compound-group.kx",
    "030-nested-groups.kx",
    "040-comments.kx",
    "050-lists.kx",
    "060-services.kx",
];

/// Information about a sample file
#[derive(Debug, Clone, PartialEq)]
pub struct SampleInfo {
    pub filename: String,
    pub line_count: usize,
    pub char_count: usize,
    /// Text of the leading `#` comment, if any
    pub description: Option<String>,
}

/// Main interface for accessing kexpr sample files
pub struct KexprSources;

impl KexprSources {
    fn samples_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("docs/samples")
    }

    /// Get the full path to a sample file
    pub fn sample_path(filename: &str) -> PathBuf {
        Self::samples_dir().join(filename)
    }

    fn validate_sample(filename: &str) -> Result<(), ProcessingError> {
        if !AVAILABLE_SAMPLES.contains(&filename) {
            return Err(ProcessingError::FileNotFound(format!(
                "Sample '{}' is not available. Available samples: {:?}",
                filename, AVAILABLE_SAMPLES
            )));
        }
        Ok(())
    }

    /// Get sample content as raw string
    pub fn get_string(filename: &str) -> Result<String, ProcessingError> {
        Self::validate_sample(filename)?;
        Ok(fs::read_to_string(Self::sample_path(filename))?)
    }

    /// Get a sample parsed into a document
    pub fn get_document(filename: &str) -> Result<Document, ProcessingError> {
        let content = Self::get_string(filename)?;
        Ok(parse_document(&content)?)
    }

    /// Get sample content processed with the specified format string
    pub fn get_processed(filename: &str, format: &str) -> Result<String, ProcessingError> {
        Self::validate_sample(filename)?;
        let spec = ProcessingSpec::from_string(format)?;
        process_file(Self::sample_path(filename), &spec)
    }

    /// List all available sample files
    pub fn list_samples() -> Vec<&'static str> {
        AVAILABLE_SAMPLES.to_vec()
    }

    pub fn get_sample_info(filename: &str) -> Result<SampleInfo, ProcessingError> {
        let content = Self::get_string(filename)?;
        Ok(SampleInfo {
            filename: filename.to_string(),
            line_count: content.lines().count(),
            char_count: content.chars().count(),
            description: Self::extract_description(&content),
        })
    }

    fn extract_description(content: &str) -> Option<String> {
        let first_line = content.lines().next()?;
        first_line
            .strip_prefix('#')
            .map(|comment| comment.trim().to_string())
    }
}
