//! Request-line extraction.

use crate::parser::error::ParseError;

/// The first line of an HTTP request, split into its three tokens.
///
/// The fields are views into the connection's read buffer and live only as
/// long as that buffer does; nothing is copied out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLine<'a> {
    /// The HTTP method token (GET, POST, ...). Not validated beyond being
    /// a non-empty token.
    pub method: &'a str,
    /// The requested resource path, exactly as sent.
    pub resource: &'a str,
    /// The protocol token (HTTP/1.1, ...).
    pub protocol: &'a str,
}

/// Parse the request line from a raw request buffer.
///
/// Splits on the first space, the second space, and the carriage return that
/// follows, in that order. A split that yields no token fails with the
/// corresponding [`ParseError`]; on failure no partial tokens are usable.
/// Bytes past the carriage return (headers, body) are ignored.
///
/// # Examples
///
/// ```
/// use monohttp_rs::parse_request_line;
///
/// let line = parse_request_line(b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n").unwrap();
///
/// assert_eq!(line.method, "GET");
/// assert_eq!(line.resource, "/");
/// assert_eq!(line.protocol, "HTTP/1.1");
/// ```
pub fn parse_request_line(input: &[u8]) -> Result<RequestLine<'_>, ParseError> {
    let mut rest = Some(input);

    let method = next_token(&mut rest, b' ').ok_or(ParseError::MissingMethod)?;
    let resource = next_token(&mut rest, b' ').ok_or(ParseError::MissingResource)?;
    let protocol = next_token(&mut rest, b'\r').ok_or(ParseError::MissingProtocol)?;

    Ok(RequestLine {
        method: as_utf8(method)?,
        resource: as_utf8(resource)?,
        protocol: as_utf8(protocol)?,
    })
}

/// Take the bytes up to the next `delim`, advancing `rest` past it.
///
/// When `delim` is absent the remainder of the input is the token and `rest`
/// becomes exhausted, so the following split finds nothing. Empty tokens
/// count as no token at all.
fn next_token<'a>(rest: &mut Option<&'a [u8]>, delim: u8) -> Option<&'a [u8]> {
    let input = (*rest)?;
    let token = match input.iter().position(|&b| b == delim) {
        Some(at) => {
            *rest = Some(&input[at + 1..]);
            &input[..at]
        }
        None => {
            *rest = None;
            input
        }
    };

    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

fn as_utf8(token: &[u8]) -> Result<&str, ParseError> {
    std::str::from_utf8(token).map_err(|_| ParseError::InvalidEncoding)
}
