use edunjema::errors::{EdunjemaError, Result};
use std::error::Error;

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = EdunjemaError::validation("Missing required parameters for content generation.");

        assert!(matches!(error, EdunjemaError::Validation(_)));
        assert!(error.is_client_error());
        assert_eq!(error.code(), "E002");
        assert!(error.to_string().contains("Validation Error"));
        assert!(error.to_string().contains("Missing required parameters"));
    }

    #[test]
    fn test_generation_error() {
        let error = EdunjemaError::generation("provider responded with HTTP status 500");

        assert!(matches!(error, EdunjemaError::Generation(_)));
        assert!(!error.is_client_error());
        assert_eq!(error.message(), "provider responded with HTTP status 500");
    }

    #[test]
    fn test_empty_completion_error() {
        let error = EdunjemaError::empty_completion("OpenAI returned an empty completion");

        assert!(matches!(error, EdunjemaError::EmptyCompletion(_)));
        assert!(!error.is_client_error());
        assert_eq!(error.error_type(), "Empty Completion");
    }

    #[test]
    fn test_config_error() {
        let error = EdunjemaError::config("generation.base_url must not be empty");

        assert!(matches!(error, EdunjemaError::Config(_)));
        assert_eq!(
            error.format_simple(),
            "Configuration Error: generation.base_url must not be empty"
        );
        assert!(error.format_colored().contains("E001"));
    }

    #[test]
    fn test_codes_are_unique() {
        let errors = [
            EdunjemaError::config(""),
            EdunjemaError::validation(""),
            EdunjemaError::generation(""),
            EdunjemaError::empty_completion(""),
            EdunjemaError::serialization(""),
            EdunjemaError::file_operation(""),
        ];
        let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "log directory missing");
        let error: EdunjemaError = io_error.into();

        assert!(matches!(error, EdunjemaError::FileOperation(_)));
        assert!(error.message().contains("log directory missing"));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: EdunjemaError = json_error.into();

        assert!(matches!(error, EdunjemaError::Serialization(_)));
    }

    #[test]
    fn test_question_mark_propagation() {
        fn parse(input: &str) -> Result<serde_json::Value> {
            Ok(serde_json::from_str(input)?)
        }

        assert!(parse("{\"type\":\"notes\"}").is_ok());
        assert!(matches!(
            parse("not json"),
            Err(EdunjemaError::Serialization(_))
        ));
    }

    #[test]
    fn test_implements_std_error() {
        let error = EdunjemaError::generation("boom");
        let dyn_error: &dyn Error = &error;
        assert!(dyn_error.source().is_none());
        assert_eq!(dyn_error.to_string(), "Generation Provider Error: boom");
    }
}
