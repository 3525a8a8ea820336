//! HTTP request-line parser module.
//!
//! This module turns the raw bytes of an incoming request into the three
//! request-line tokens: method, resource, and protocol. Nothing beyond the
//! request line is interpreted; headers and body bytes are left untouched.

mod error;
mod request;
mod tests;

// Re-export public items
pub use error::ParseError;
pub use request::{parse_request_line, RequestLine};
