//! Error types for the request-line parser.

use thiserror::Error;

/// Errors that can occur while extracting the request line.
///
/// Each `Missing*` variant names the split that produced no token: the first
/// space, the second space, or the carriage return that follows the protocol.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The request is empty or starts with a delimiter, so no method token
    /// could be extracted.
    #[error("Parsing method failed: no token before the first space")]
    MissingMethod,

    /// Nothing follows the method, so no resource token could be extracted.
    #[error("Parsing resource failed: no token before the second space")]
    MissingResource,

    /// Nothing follows the resource, so no protocol token could be extracted.
    #[error("Parsing protocol failed: no token before the line terminator")]
    MissingProtocol,

    /// A request-line token contains bytes that are not valid UTF-8.
    #[error("Request line is not valid UTF-8")]
    InvalidEncoding,
}
