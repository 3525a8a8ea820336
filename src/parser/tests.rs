//! Tests for the request-line parser.

#[cfg(test)]
mod parser_tests {
    use crate::parser::{parse_request_line, ParseError};

    #[test]
    fn test_parse_simple_get_request() {
        let input = b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n";
        let line = parse_request_line(input).unwrap();

        assert_eq!(line.method, "GET");
        assert_eq!(line.resource, "/");
        assert_eq!(line.protocol, "HTTP/1.1");
    }

    #[test]
    fn test_headers_and_body_are_ignored() {
        let input = b"POST /submit HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello";
        let line = parse_request_line(input).unwrap();

        assert_eq!(line.method, "POST");
        assert_eq!(line.resource, "/submit");
        assert_eq!(line.protocol, "HTTP/1.1");
    }

    #[test]
    fn test_method_is_not_validated() {
        // Only the request line is tokenized; unknown methods pass through.
        let input = b"BREW /pot HTCPCP/1.0\r\n\r\n";
        let line = parse_request_line(input).unwrap();

        assert_eq!(line.method, "BREW");
        assert_eq!(line.resource, "/pot");
        assert_eq!(line.protocol, "HTCPCP/1.0");
    }

    #[test]
    fn test_empty_input() {
        let err = parse_request_line(b"").unwrap_err();
        assert_eq!(err, ParseError::MissingMethod);
    }

    #[test]
    fn test_leading_space_yields_missing_method() {
        let err = parse_request_line(b" GET / HTTP/1.1\r\n").unwrap_err();
        assert_eq!(err, ParseError::MissingMethod);
    }

    #[test]
    fn test_single_token_yields_missing_resource() {
        let err = parse_request_line(b"GET").unwrap_err();
        assert_eq!(err, ParseError::MissingResource);
    }

    #[test]
    fn test_no_spaces_yields_missing_resource() {
        // With no spaces the whole line becomes the method token and the
        // resource split finds nothing.
        let err = parse_request_line(b"garbage\r\n").unwrap_err();
        assert_eq!(err, ParseError::MissingResource);
    }

    #[test]
    fn test_double_space_yields_missing_resource() {
        let err = parse_request_line(b"GET  / HTTP/1.1\r\n").unwrap_err();
        assert_eq!(err, ParseError::MissingResource);
    }

    #[test]
    fn test_two_tokens_without_cr_yields_missing_protocol() {
        let err = parse_request_line(b"GET /").unwrap_err();
        assert_eq!(err, ParseError::MissingProtocol);
    }

    #[test]
    fn test_three_tokens_without_cr() {
        // Without a carriage return the remainder of the input is the
        // protocol token.
        let line = parse_request_line(b"GET / HTTP/1.1").unwrap();
        assert_eq!(line.protocol, "HTTP/1.1");
    }

    #[test]
    fn test_resource_with_query_string() {
        let input = b"GET /search?q=rust&page=1 HTTP/1.1\r\nHost: localhost\r\n\r\n";
        let line = parse_request_line(input).unwrap();

        assert_eq!(line.resource, "/search?q=rust&page=1");
    }

    #[test]
    fn test_invalid_utf8_in_request_line() {
        let mut input = Vec::from(*b"GET / HTTP/1.1\r\n");
        input.splice(5..5, vec![0xFF, 0xFF]);

        let err = parse_request_line(&input).unwrap_err();
        assert_eq!(err, ParseError::InvalidEncoding);
    }

    #[test]
    fn test_tokens_borrow_from_the_input_buffer() {
        let buffer = b"DELETE /items/42 HTTP/1.0\r\n".to_vec();
        let line = parse_request_line(&buffer).unwrap();

        // The tokens are subslices of the original buffer, not copies.
        let range = buffer.as_ptr_range();
        assert!(range.contains(&line.method.as_ptr()));
        assert!(range.contains(&line.resource.as_ptr()));
        assert!(range.contains(&line.protocol.as_ptr()));
    }

    #[test]
    fn test_error_messages_name_the_missing_token() {
        assert!(ParseError::MissingMethod.to_string().contains("method"));
        assert!(ParseError::MissingResource.to_string().contains("resource"));
        assert!(ParseError::MissingProtocol.to_string().contains("protocol"));
    }
}
