//! Domain error types
//!
//! None of these errors escape a best-effort operation. They travel inside
//! [`Diagnostic`](crate::tool_call::conversion::Diagnostic) values or
//! [`ParamIssue`](crate::command::schema::ParamIssue) reports so callers can
//! inspect what was dropped.

use thiserror::Error;

/// Failure while building the JSON-Schema property for a single parameter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("parameter name cannot be empty")]
    EmptyParamName,

    #[error("duplicate parameter: {0}")]
    DuplicateParam(String),
}

/// Failure while converting a provider tool call into canonical form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolCallError {
    #[error("invalid arguments JSON for {name}: {message}")]
    InvalidArguments { name: String, message: String },

    #[error("arguments for {name} are not a JSON object")]
    ArgumentsNotObject { name: String },

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("arguments already parsed")]
    AlreadyParsed,
}

impl ToolCallError {
    /// Whether this failure is an expected shape difference between provider
    /// SDKs rather than malformed data.
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(
            self,
            ToolCallError::MissingField(_) | ToolCallError::AlreadyParsed
        )
    }
}

/// Failure while decoding a single marker block.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkerError {
    #[error("block is not a JSON object literal")]
    NotAnObject,

    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error("block has no command name")]
    MissingCommand,

    #[error("params for {0} are not a JSON object")]
    ParamsNotObject(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_display() {
        assert_eq!(
            SchemaError::EmptyParamName.to_string(),
            "parameter name cannot be empty"
        );
        assert_eq!(
            SchemaError::DuplicateParam("path".to_string()).to_string(),
            "duplicate parameter: path"
        );
    }

    #[test]
    fn test_shape_mismatch_classification() {
        assert!(ToolCallError::MissingField("function").is_shape_mismatch());
        assert!(ToolCallError::AlreadyParsed.is_shape_mismatch());
        assert!(
            !ToolCallError::InvalidArguments {
                name: "foo".to_string(),
                message: "EOF".to_string()
            }
            .is_shape_mismatch()
        );
    }
}
