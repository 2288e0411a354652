//! Error types for building FHIR models from raw JSON.
//!
//! Construction is the only fallible boundary of the object model: a value
//! whose JSON shape cannot be represented by the declared Rust type. Every
//! variant carries the JSON path of the offending property, built up as the
//! error propagates outwards (`contained[0].code.coding[1].system`).

use thiserror::Error;

/// Errors raised while reading or writing model values.
#[derive(Error, Debug)]
pub enum FhirError {
    /// A primitive did not match its declared FHIR type.
    #[error("invalid value at `{}`: {message}", display_path(.path))]
    Decode { path: String, message: String },

    /// An object was declared but another JSON kind was found.
    #[error("expected an object at `{}`, found {found}", display_path(.path))]
    ExpectedObject { path: String, found: &'static str },

    /// An array was declared but another JSON kind was found.
    #[error("expected an array at `{}`, found {found}", display_path(.path))]
    ExpectedArray { path: String, found: &'static str },

    /// `integer64` values travel as JSON strings holding a signed 64-bit integer.
    #[error("invalid integer64 `{value}` at `{}`", display_path(.path))]
    InvalidInteger64 { path: String, value: String },

    /// A choice group was asked for a variant it does not declare.
    #[error("unknown choice type suffix `{suffix}` at `{}`", display_path(.path))]
    UnknownChoiceVariant { path: String, suffix: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FhirError>;

fn display_path(path: &str) -> &str {
    if path.is_empty() { "$" } else { path }
}

impl FhirError {
    /// Wraps a serde_json failure for a primitive at the current position.
    pub fn decode(err: impl std::fmt::Display) -> Self {
        FhirError::Decode {
            path: String::new(),
            message: err.to_string(),
        }
    }

    pub fn unknown_choice_variant(suffix: &str) -> Self {
        FhirError::UnknownChoiceVariant {
            path: String::new(),
            suffix: suffix.to_owned(),
        }
    }

    /// The JSON path of the failure, empty for the document root.
    pub fn path(&self) -> Option<&str> {
        match self {
            FhirError::Decode { path, .. }
            | FhirError::ExpectedObject { path, .. }
            | FhirError::ExpectedArray { path, .. }
            | FhirError::InvalidInteger64 { path, .. }
            | FhirError::UnknownChoiceVariant { path, .. } => Some(path),
            FhirError::Json(_) => None,
        }
    }

    fn path_mut(&mut self) -> Option<&mut String> {
        match self {
            FhirError::Decode { path, .. }
            | FhirError::ExpectedObject { path, .. }
            | FhirError::ExpectedArray { path, .. }
            | FhirError::InvalidInteger64 { path, .. }
            | FhirError::UnknownChoiceVariant { path, .. } => Some(path),
            FhirError::Json(_) => None,
        }
    }

    /// Prefixes the path with an object key.
    pub fn within(mut self, key: &str) -> Self {
        if let Some(path) = self.path_mut() {
            if path.is_empty() || path.starts_with('[') {
                path.insert_str(0, key);
            } else {
                path.insert_str(0, &format!("{key}."));
            }
        }
        self
    }

    /// Prefixes the path with an array index.
    pub fn at_index(mut self, index: usize) -> Self {
        if let Some(path) = self.path_mut() {
            if path.is_empty() || path.starts_with('[') {
                path.insert_str(0, &format!("[{index}]"));
            } else {
                path.insert_str(0, &format!("[{index}]."));
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_compose_from_leaf_outwards() {
        let err = FhirError::decode("invalid type: integer `5`, expected a string")
            .within("system")
            .at_index(1)
            .within("coding")
            .within("code")
            .at_index(0)
            .within("contained");
        assert_eq!(err.path(), Some("contained[0].code.coding[1].system"));
        assert_eq!(
            err.to_string(),
            "invalid value at `contained[0].code.coding[1].system`: invalid type: integer `5`, expected a string"
        );
    }

    #[test]
    fn root_path_is_displayed_as_dollar() {
        let err = FhirError::ExpectedObject {
            path: String::new(),
            found: "a string",
        };
        assert_eq!(err.to_string(), "expected an object at `$`, found a string");
    }
}
