//! Annotated function signature extraction
//!
//! A shallow pattern match, not a parser. Supported shape, on one line:
//!
//! ```text
//! @<Annotation> [private|public|protected|internal] fun <name>(<params>): <ReturnType>
//! ```
//!
//! Multi-line signatures, generic return types and default values that
//! contain parentheses are not matched or get mis-split.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::Error;

/// A function declaration matched in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSignature {
    pub name: String,
    /// Raw parameter list as written between the parentheses.
    pub parameters: String,
    pub return_type: String,
}

impl FunctionSignature {
    /// Comma-joined parameter names with their types dropped.
    ///
    /// `a: Int, b: Int` becomes `a, b`.
    pub fn parameter_names(&self) -> String {
        self.parameters
            .split(',')
            .map(|param| {
                param
                    .split_whitespace()
                    .next()
                    .unwrap_or_default()
                    .trim_end_matches(':')
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Build the signature pattern for an annotation name (without the `@`).
pub fn signature_regex(annotation: &str) -> Result<Regex, Error> {
    let pattern = format!(
        r"@{}\s+(?:private|public|protected|internal)?\s*fun\s+(\w+)\(([^)]*)\):\s*(\w+)",
        regex::escape(annotation)
    );

    Regex::new(&pattern).map_err(|e| Error::Usage(format!("Invalid annotation name: {e}")))
}

/// Find every function annotated with `annotation`, in source order.
///
/// Duplicated names are kept. Returns an extraction error when nothing
/// matches.
pub fn extract_signatures(
    content: &str,
    annotation: &str,
) -> Result<Vec<FunctionSignature>, Error> {
    let regex = signature_regex(annotation)?;

    let signatures: Vec<FunctionSignature> = regex
        .captures_iter(content)
        .map(|caps| FunctionSignature {
            name: caps[1].to_string(),
            parameters: caps[2].to_string(),
            return_type: caps[3].to_string(),
        })
        .collect();

    if signatures.is_empty() {
        return Err(Error::Extraction(
            "no function found to generate unit tests".to_string(),
        ));
    }

    Ok(signatures)
}
