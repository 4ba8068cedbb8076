//! Error types for jsonrpc-wire
//!
//! This module provides two distinct error surfaces:
//!
//! - **Error**: Application-level errors for internal use (uses thiserror)
//! - **ResponseError**: Wire-format errors as they appear in the `error`
//!   field of a response message
//!
//! It also exposes the reserved error-code taxonomy as named constants in
//! [`error_codes`], together with the range-containment checks callers use to
//! decide whether a code is reserved.
//!
//! # Spec-Reserved Error Codes
//!
//! JSON-RPC 2.0 reserves `[-32768, -32000]` for protocol errors:
//! - `-32700`: Parse error (invalid JSON)
//! - `-32600`: Invalid request (missing required fields)
//! - `-32601`: Method not found
//! - `-32602`: Invalid params
//! - `-32603`: Internal error
//!
//! The LSP dialect additionally reserves `[-32899, -32800]` for its own
//! extension codes (`ContentModified`, `RequestCancelled`).
//!
//! # Examples
//!
//! ```rust
//! use jsonrpc_wire::{error_codes, ResponseError};
//!
//! let error = ResponseError::method_not_found("unknownMethod");
//! assert_eq!(error.code, error_codes::METHOD_NOT_FOUND);
//! assert!(error_codes::is_reserved(error.code));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Result type for jsonrpc-wire operations
///
/// Convenience alias used throughout the crate for consistent error handling.
pub type Result<T> = std::result::Result<T, Error>;

/// Reserved error codes and range checks
///
/// The JSON-RPC 2.0 specification reserves the range `[-32768, -32000]` for
/// protocol errors. A handful of codes in that range have fixed meanings; the
/// rest are available for server implementations. The LSP dialect reserves a
/// second range, `[-32899, -32800]`, for its own extensions.
///
/// Codes `1` and `2` classify local transport faults (a failed write or read
/// on the connection). They are never placed on the wire.
pub mod error_codes {
    /// Invalid JSON was received.
    pub const PARSE_ERROR: i64 = -32700;
    /// The JSON sent is not a valid request object.
    pub const INVALID_REQUEST: i64 = -32600;
    /// The method does not exist or is not available.
    pub const METHOD_NOT_FOUND: i64 = -32601;
    /// Invalid method parameter(s).
    pub const INVALID_PARAMS: i64 = -32602;
    /// Internal JSON-RPC error.
    pub const INTERNAL_ERROR: i64 = -32603;

    /// Named start bound of the implementation-defined server-error slice of
    /// the reserved range. The containment check spans the full protocol
    /// range `[-32768, -32000]`.
    pub const RESERVED_ERROR_RANGE_START: i64 = -32099;
    /// A request arrived before the server finished initializing.
    pub const SERVER_NOT_INITIALIZED: i64 = -32002;
    /// Sentinel stored when an error is constructed with a code that is not
    /// a valid integer.
    pub const UNKNOWN_ERROR_CODE: i64 = -32001;
    /// Named end bound of the reserved range.
    pub const RESERVED_ERROR_RANGE_END: i64 = -32000;

    /// Start bound of the LSP-reserved extension range.
    pub const LSP_RESERVED_ERROR_RANGE_START: i64 = -32899;
    /// The server detected that the content a request depends on was
    /// modified before the request could be answered.
    pub const CONTENT_MODIFIED: i64 = -32801;
    /// The client cancelled the request.
    pub const REQUEST_CANCELLED: i64 = -32800;
    /// End bound of the LSP-reserved extension range.
    pub const LSP_RESERVED_ERROR_RANGE_END: i64 = -32800;

    /// A write on the local connection failed. Never sent on the wire.
    pub const MESSAGE_WRITE_ERROR: i64 = 1;
    /// A read on the local connection failed. Never sent on the wire.
    pub const MESSAGE_READ_ERROR: i64 = 2;

    /// Whether `code` falls in the protocol-reserved range
    /// `[-32768, -32000]`, both endpoints included.
    pub fn is_reserved(code: i64) -> bool {
        (-32768..=RESERVED_ERROR_RANGE_END).contains(&code)
    }

    /// Whether `code` falls in the LSP-reserved extension range
    /// `[-32899, -32800]`, both endpoints included.
    pub fn is_lsp_reserved(code: i64) -> bool {
        (LSP_RESERVED_ERROR_RANGE_START..=LSP_RESERVED_ERROR_RANGE_END).contains(&code)
    }
}

/// Application-level error type for jsonrpc-wire operations
///
/// Covers the error conditions this crate itself produces: wire-format errors
/// received from or destined for a peer, serialization failures, and the two
/// construction-time contract violations (empty method name, byName encoding
/// misuse).
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// JSON-RPC protocol error, already in wire format
    #[error("JSON-RPC error: {0}")]
    JsonRpc(#[from] ResponseError),

    /// Serialization or deserialization error
    ///
    /// Occurs when converting between Rust types and JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A signature declaration was constructed with an empty method name
    #[error("Invalid method name: {0:?}")]
    InvalidMethodName(String),

    /// A call violated the parameter-structures contract
    ///
    /// Raised when byName encoding is requested for anything other than a
    /// single object-valued argument, or when a call supplies a different
    /// number of arguments than its signature declares. This indicates a
    /// programming error at the call site, not a runtime condition.
    #[error("Invalid parameter structure: {0}")]
    InvalidParameterStructure(String),
}

/// JSON-RPC 2.0 error object as it appears on the wire
///
/// This structure is the exact wire shape of the `error` field in a failed
/// response: `{code, message, data?}`. The `data` key is omitted from the
/// serialized form when no data was supplied.
///
/// # Code Coercion
///
/// If a peer sends an error whose `code` is not a valid integer (a string, a
/// fractional number, an object), deserialization does not fail; the stored
/// code is coerced to [`error_codes::UNKNOWN_ERROR_CODE`] instead.
///
/// # Examples
///
/// ```rust
/// use jsonrpc_wire::ResponseError;
/// use serde_json::json;
///
/// let custom = ResponseError::with_data(
///     1001,
///     "Insufficient funds",
///     json!({"balance": 50, "required": 100}),
/// );
/// assert_eq!(custom.code, 1001);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseError {
    /// Numeric error code indicating the error type
    #[serde(deserialize_with = "coerce_code")]
    pub code: i64,

    /// Short human-readable description of the error
    pub message: String,

    /// Optional additional error information, any JSON shape
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Deserialize an error code, coercing anything that is not a valid integer
/// to `UNKNOWN_ERROR_CODE` rather than failing. A float with no fractional
/// part (some encoders emit `-32700.0`) still holds a valid integer and is
/// accepted as one.
fn coerce_code<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let code = match value.as_i64() {
        Some(code) => code,
        None => value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
            .map(|f| f as i64)
            .unwrap_or(error_codes::UNKNOWN_ERROR_CODE),
    };
    Ok(code)
}

impl ResponseError {
    /// Create a new error with code and message
    ///
    /// Use the factory methods (like [`ResponseError::parse_error`]) for
    /// spec-defined errors, or this constructor for application errors.
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Create a new error with additional data
    ///
    /// The `data` field can carry any contextual information about the
    /// error: validation details, the offending input, and so on.
    pub fn with_data(code: i64, message: impl Into<String>, data: Value) -> Self {
        Self {
            code,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Create a parse error (-32700)
    ///
    /// Invalid JSON was received; nothing beyond that can be said about the
    /// message, so this variant carries a fixed message.
    pub fn parse_error() -> Self {
        Self::new(error_codes::PARSE_ERROR, "Parse error")
    }

    /// Create an invalid request error (-32600)
    ///
    /// The JSON is valid but the object is not a well-formed message.
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::new(error_codes::INVALID_REQUEST, msg)
    }

    /// Create a method not found error (-32601)
    pub fn method_not_found(method: impl Into<String>) -> Self {
        Self::new(
            error_codes::METHOD_NOT_FOUND,
            format!("Method not found: {}", method.into()),
        )
    }

    /// Create an invalid params error (-32602)
    pub fn invalid_params(msg: impl Into<String>) -> Self {
        Self::new(error_codes::INVALID_PARAMS, msg)
    }

    /// Create an internal error (-32603)
    pub fn internal_error(msg: impl Into<String>) -> Self {
        Self::new(error_codes::INTERNAL_ERROR, msg)
    }

    /// Create a server not initialized error (-32002)
    pub fn server_not_initialized(msg: impl Into<String>) -> Self {
        Self::new(error_codes::SERVER_NOT_INITIALIZED, msg)
    }

    /// Create a request cancelled error (-32800)
    pub fn request_cancelled() -> Self {
        Self::new(error_codes::REQUEST_CANCELLED, "Request cancelled")
    }

    /// Create a content modified error (-32801)
    pub fn content_modified() -> Self {
        Self::new(error_codes::CONTENT_MODIFIED, "Content modified")
    }
}

impl std::fmt::Display for ResponseError {
    /// Formats as "[code] message" for easy readability in logs.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ResponseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reserved_range_membership() {
        assert!(error_codes::is_reserved(error_codes::PARSE_ERROR));
        assert!(error_codes::is_reserved(error_codes::RESERVED_ERROR_RANGE_START));
        assert!(error_codes::is_reserved(error_codes::RESERVED_ERROR_RANGE_END));
        assert!(error_codes::is_reserved(-32768));
        assert!(!error_codes::is_reserved(-32769));
        assert!(!error_codes::is_reserved(0));
    }

    #[test]
    fn test_lsp_reserved_range_membership() {
        assert!(error_codes::is_lsp_reserved(error_codes::CONTENT_MODIFIED));
        assert!(error_codes::is_lsp_reserved(error_codes::REQUEST_CANCELLED));
        assert!(error_codes::is_lsp_reserved(error_codes::LSP_RESERVED_ERROR_RANGE_START));
        assert!(!error_codes::is_lsp_reserved(-32700));
        assert!(!error_codes::is_lsp_reserved(0));
    }

    #[test]
    fn test_local_codes_outside_wire_ranges() {
        assert!(!error_codes::is_reserved(error_codes::MESSAGE_WRITE_ERROR));
        assert!(!error_codes::is_reserved(error_codes::MESSAGE_READ_ERROR));
        assert!(!error_codes::is_lsp_reserved(error_codes::MESSAGE_WRITE_ERROR));
    }

    #[test]
    fn test_factory_codes() {
        assert_eq!(ResponseError::parse_error().code, -32700);
        assert_eq!(ResponseError::invalid_request("x").code, -32600);
        assert_eq!(ResponseError::method_not_found("x").code, -32601);
        assert_eq!(ResponseError::invalid_params("x").code, -32602);
        assert_eq!(ResponseError::internal_error("x").code, -32603);
        assert_eq!(ResponseError::server_not_initialized("x").code, -32002);
        assert_eq!(ResponseError::request_cancelled().code, -32800);
        assert_eq!(ResponseError::content_modified().code, -32801);
    }

    #[test]
    fn test_data_omitted_when_absent() {
        let error = ResponseError::new(-32000, "Custom error");
        let serialized = serde_json::to_string(&error).unwrap();

        assert!(serialized.contains("-32000"));
        assert!(serialized.contains("Custom error"));
        assert!(!serialized.contains("data"));
    }

    #[test]
    fn test_round_trip_with_data() {
        let error = ResponseError::with_data(
            -32602,
            "Invalid params",
            json!({"missing": ["username", "password"]}),
        );

        let serialized = serde_json::to_string(&error).unwrap();
        let deserialized: ResponseError = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized.code, error.code);
        assert_eq!(deserialized.message, error.message);
        assert_eq!(deserialized.data, error.data);
    }

    #[test]
    fn test_round_trip_without_data() {
        let error = ResponseError::method_not_found("calculate");
        let serialized = serde_json::to_string(&error).unwrap();
        let deserialized: ResponseError = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized, error);
        assert!(deserialized.data.is_none());
    }

    #[test]
    fn test_non_integer_code_coerced() {
        let error: ResponseError =
            serde_json::from_str(r#"{"code":"boom","message":"weird"}"#).unwrap();
        assert_eq!(error.code, error_codes::UNKNOWN_ERROR_CODE);
        assert_eq!(error.message, "weird");
    }

    #[test]
    fn test_fractional_code_coerced() {
        let error: ResponseError =
            serde_json::from_str(r#"{"code":1.5,"message":"weird"}"#).unwrap();
        assert_eq!(error.code, error_codes::UNKNOWN_ERROR_CODE);
    }

    #[test]
    fn test_integral_float_code_kept() {
        // Some encoders emit integer codes as floats; the value is still a
        // valid integer and must not be coerced away.
        let error: ResponseError =
            serde_json::from_str(r#"{"code":-32700.0,"message":"Parse error"}"#).unwrap();
        assert_eq!(error.code, error_codes::PARSE_ERROR);

        let error: ResponseError =
            serde_json::from_str(r#"{"code":2.0,"message":"read failed"}"#).unwrap();
        assert_eq!(error.code, error_codes::MESSAGE_READ_ERROR);
    }

    #[test]
    fn test_integer_code_kept() {
        let error: ResponseError =
            serde_json::from_str(r#"{"code":-32601,"message":"Method not found"}"#).unwrap();
        assert_eq!(error.code, -32601);
    }

    #[test]
    fn test_display_formatting() {
        let error = ResponseError::method_not_found("unknownMethod");
        let display = format!("{}", error);

        assert!(display.contains("-32601"));
        assert!(display.contains("Method not found"));
    }

    #[test]
    fn test_error_enum_display() {
        let error = Error::InvalidParameterStructure("byName needs one argument".to_string());
        assert!(format!("{}", error).contains("byName"));
    }
}
