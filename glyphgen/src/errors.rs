/// This module defines custom error types for glyphgen, demonstrating Rust's error handling
/// compared to .NET's exception system.
///
/// # Rust vs .NET Error Handling
///
/// .NET uses exceptions for error handling:
/// ```csharp
/// try {
///     var generator = new DictionaryGenerator();
///     generator.Generate(count);
/// } catch (ArgumentException ex) {
///     // Handle bad configuration
/// } catch (IOException ex) {
///     // Handle output failure
/// }
/// ```
///
/// Rust uses Result types with custom errors:
/// ```rust,ignore
/// match generate(&config) {
///     Ok(generation) => // Process generation,
///     Err(GenerateError::ConfigError(msg)) => // Handle bad configuration,
///     Err(e) => // Handle other errors
/// }
/// ```
///
/// Note that the generation engine itself has no recoverable-error surface
/// once it starts: its traversal is bounded by construction, so errors can
/// only arise at the configuration and persistence boundaries.
use std::path::PathBuf;
use thiserror::Error;

/// Result type for generation operations
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Errors that can occur while configuring, running, or persisting a generation
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),
    #[error("Cannot open output file {path}: {source}")]
    OutputError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Thread pool error: {0}")]
    ThreadPoolError(#[from] rayon::ThreadPoolBuildError),
}

impl GenerateError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn invalid_alphabet(msg: impl Into<String>) -> Self {
        Self::InvalidAlphabet(msg.into())
    }

    pub fn output_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputError {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = GenerateError::config_error("count must be greater than 0");
        assert!(matches!(err, GenerateError::ConfigError(_)));

        let err = GenerateError::invalid_alphabet("needs at least two symbols");
        assert!(matches!(err, GenerateError::InvalidAlphabet(_)));

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = GenerateError::output_error("out.txt", io);
        assert!(matches!(err, GenerateError::OutputError { .. }));
    }

    #[test]
    fn test_error_messages() {
        let err = GenerateError::config_error("count must be greater than 0");
        assert_eq!(
            err.to_string(),
            "Configuration error: count must be greater than 0"
        );

        let err = GenerateError::invalid_alphabet("duplicate symbol 'I'");
        assert_eq!(err.to_string(), "Invalid alphabet: duplicate symbol 'I'");

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let err = GenerateError::output_error("missing/dir/out.txt", io);
        assert!(err.to_string().starts_with("Cannot open output file"));
    }
}
