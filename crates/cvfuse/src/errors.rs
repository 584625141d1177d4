use thiserror::Error;

/// Extraction-level error type.
///
/// None of these is fatal to a batch: the pipeline records the error for the
/// affected document and continues, and an empty accumulator is a valid
/// successful result.
///
/// The offending document's identifier is carried as `document`, not
/// `source`: thiserror reserves a field named `source` for an underlying
/// `std::error::Error` cause, and these variants have none.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The external decoding collaborator failed to produce text.
    #[error("unreadable document '{document}': {reason}")]
    UnreadableDocument { document: String, reason: String },

    /// An unexpected fault during per-document extraction.
    #[error("extraction failed for '{document}': {reason}")]
    ExtractionFailure { document: String, reason: String },

    /// A caller-supplied section pattern failed to compile.
    #[error("invalid section pattern: {0}")]
    Pattern(#[from] regex::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_document_errors_carry_identifier_without_a_cause() {
        let err = ExtractError::UnreadableDocument {
            document: "corrupt.pdf".to_string(),
            reason: "decoder failed".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unreadable document 'corrupt.pdf': decoder failed"
        );
        // The document identifier is plain context, not an error cause.
        assert!(err.source().is_none());

        let err = ExtractError::ExtractionFailure {
            document: "weird.txt".to_string(),
            reason: "pattern engine fault".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "extraction failed for 'weird.txt': pattern engine fault"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_pattern_error_wraps_regex_cause() {
        let regex_err = regex::Regex::new("(unclosed").unwrap_err();
        let err = ExtractError::from(regex_err);
        assert!(err.to_string().starts_with("invalid section pattern:"));
        assert!(err.source().is_some());
    }
}
