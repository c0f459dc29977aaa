//! File processing API for kexpr
//!
//! Turns a file or a string into one of several renderings, selected by a format string of
//! the form `<stage>-<format>`:
//!
//! | format string  | output                                            |
//! |----------------|---------------------------------------------------|
//! | `token-simple` | tokens in display form, one line per source line  |
//! | `token-json`   | tokens as pretty JSON                             |
//! | `ast-json`     | the parsed document as pretty JSON                |
//! | `ast-yaml`     | the parsed document as YAML                       |
//! | `ast-treeviz`  | one line per node tree view                       |
//! | `ast-kexpr`    | canonical notation (parse then serialize)         |
//!
//! The [`samples`] module gives tests access to the bundled `.kx` documents.
//!
//! ```rust
//! use kexpr::kexpr::processor::{process_str, ProcessingSpec};
//!
//! let spec = ProcessingSpec::from_string("ast-kexpr").unwrap();
//! let canonical = process_str("web --> port=80 ;", &spec).unwrap();
//! assert_eq!(canonical, "web   -->   port=80 ;\n");
//! ```

pub mod samples;

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::kexpr::formats::{to_treeviz_str, NotationOptions, Serializer};
use crate::kexpr::lexer::{tokenize_with_spans, Token};
use crate::kexpr::parser::{KexprParser, SyntaxError};

/// What data to extract from the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
}

/// How to render the extracted data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
    Treeviz,
    Kexpr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "ast-treeviz"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            other => return Err(ProcessingError::InvalidStage(other.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            "treeviz" => OutputFormat::Treeviz,
            "kexpr" => OutputFormat::Kexpr,
            other => return Err(ProcessingError::InvalidFormatType(other.to_string())),
        };

        let spec = ProcessingSpec { stage, format };
        if !Self::available_specs().contains(&spec) {
            return Err(ProcessingError::InvalidFormatType(format!(
                "'{}' is not supported for the {} stage",
                spec.format_name(),
                spec.stage_name()
            )));
        }
        Ok(spec)
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        [
            (ProcessingStage::Token, OutputFormat::Simple),
            (ProcessingStage::Token, OutputFormat::Json),
            (ProcessingStage::Ast, OutputFormat::Json),
            (ProcessingStage::Ast, OutputFormat::Yaml),
            (ProcessingStage::Ast, OutputFormat::Treeviz),
            (ProcessingStage::Ast, OutputFormat::Kexpr),
        ]
        .into_iter()
        .map(|(stage, format)| ProcessingSpec { stage, format })
        .collect()
    }

    fn stage_name(&self) -> &'static str {
        match self.stage {
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
        }
    }

    fn format_name(&self) -> &'static str {
        match self.format {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Kexpr => "kexpr",
        }
    }
}

impl fmt::Display for ProcessingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.stage_name(), self.format_name())
    }
}

impl FromStr for ProcessingSpec {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

/// Errors that can occur during processing
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid stage: {0}")]
    InvalidStage(String),
    #[error("Invalid format type: {0}")]
    InvalidFormatType(String),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] SyntaxError),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Process a kexpr file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    process_file_with(file_path, spec, &NotationOptions::default())
}

/// Like [`process_file`], with explicit notation layout for `ast-kexpr`
pub fn process_file_with<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    options: &NotationOptions,
) -> Result<String, ProcessingError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(ProcessingError::FileNotFound(
            file_path.display().to_string(),
        ));
    }
    let content = fs::read_to_string(file_path)?;
    debug!(path = %file_path.display(), %spec, "processing file");
    process_str_with(&content, spec, options)
}

/// Process kexpr source text according to the given specification
pub fn process_str(source: &str, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    process_str_with(source, spec, &NotationOptions::default())
}

/// Like [`process_str`], with explicit notation layout for `ast-kexpr`
pub fn process_str_with(
    source: &str,
    spec: &ProcessingSpec,
    options: &NotationOptions,
) -> Result<String, ProcessingError> {
    match spec.stage {
        ProcessingStage::Token => format_tokens(source, spec.format),
        ProcessingStage::Ast => {
            let doc = KexprParser::new().parse(source)?;
            match spec.format {
                OutputFormat::Json => serde_json::to_string_pretty(&doc)
                    .map_err(|e| ProcessingError::Serialization(e.to_string())),
                OutputFormat::Yaml => serde_yaml::to_string(&doc)
                    .map_err(|e| ProcessingError::Serialization(e.to_string())),
                OutputFormat::Treeviz => Ok(to_treeviz_str(&doc)),
                OutputFormat::Kexpr => {
                    Ok(Serializer::with_options(options.clone()).serialize_document(&doc))
                }
                OutputFormat::Simple => Err(ProcessingError::InvalidFormatType(
                    "'simple' only works with the token stage".to_string(),
                )),
            }
        }
    }
}

/// Render the tokens of `source` in the given format
fn format_tokens(source: &str, format: OutputFormat) -> Result<String, ProcessingError> {
    let tokens = tokenize_with_spans(source);
    match format {
        OutputFormat::Simple => {
            let mut result = String::new();
            let mut last_end = 0;
            for (token, span) in &tokens {
                if !result.is_empty() && source[last_end..span.start].contains('\n') {
                    result.push('\n');
                }
                result.push_str(&token.to_string());
                last_end = span.end;
            }
            if !result.is_empty() {
                result.push('\n');
            }
            Ok(result)
        }
        OutputFormat::Json => {
            let tokens: Vec<&Token> = tokens.iter().map(|(token, _)| token).collect();
            serde_json::to_string_pretty(&tokens)
                .map_err(|e| ProcessingError::Serialization(e.to_string()))
        }
        other => Err(ProcessingError::InvalidFormatType(format!(
            "{:?} only works with the ast stage",
            other
        ))),
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ToString::to_string)
        .collect()
}
