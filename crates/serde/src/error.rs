use meridian_fhir::FhirError;

/// Error types for FHIR serialization and deserialization.
#[derive(Debug)]
pub enum SerdeError {
    /// JSON syntax error, or a serde failure outside the object model
    Json(serde_json::Error),

    /// The JSON was well formed but did not fit the FHIR model
    Fhir(FhirError),

    /// IO error while reading or writing a document
    Io(std::io::Error),
}

impl std::fmt::Display for SerdeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SerdeError::Json(e) => write!(f, "JSON error: {}", e),
            SerdeError::Fhir(e) => write!(f, "FHIR error: {}", e),
            SerdeError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for SerdeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SerdeError::Json(e) => Some(e),
            SerdeError::Fhir(e) => Some(e),
            SerdeError::Io(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for SerdeError {
    fn from(err: serde_json::Error) -> Self {
        SerdeError::Json(err)
    }
}

impl From<FhirError> for SerdeError {
    fn from(err: FhirError) -> Self {
        match err {
            FhirError::Json(e) => SerdeError::Json(e),
            other => SerdeError::Fhir(other),
        }
    }
}

impl From<std::io::Error> for SerdeError {
    fn from(err: std::io::Error) -> Self {
        SerdeError::Io(err)
    }
}

/// Result type alias for FHIR serialization operations
pub type Result<T> = std::result::Result<T, SerdeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fhir_errors_keep_their_path() {
        let err: SerdeError = FhirError::decode("bad").within("status").into();
        assert!(matches!(err, SerdeError::Fhir(_)));
        assert_eq!(err.to_string(), "FHIR error: invalid value at `status`: bad");
    }

    #[test]
    fn io_errors_are_a_source() {
        use std::error::Error;

        let err: SerdeError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.to_string(), "IO error: gone");
        assert!(err.source().is_some());
    }

    #[test]
    fn json_errors_inside_fhir_errors_are_unwrapped() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SerdeError = FhirError::Json(json_err).into();
        assert!(matches!(err, SerdeError::Json(_)));
    }
}
