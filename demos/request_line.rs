//! A small example demonstrating the request-line parser on its own.

use monohttp_rs::{parse_request_line, ParseError};

fn main() {
    let inputs: [&[u8]; 4] = [
        b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n",
        b"POST /submit HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello",
        b"GET /",
        b"",
    ];

    for input in inputs {
        match parse_request_line(input) {
            Ok(line) => {
                println!(
                    "parsed: method={} resource={} protocol={}",
                    line.method, line.resource, line.protocol
                );
            }
            Err(err @ ParseError::MissingMethod) => println!("no method token: {err}"),
            Err(err @ ParseError::MissingResource) => println!("no resource token: {err}"),
            Err(err @ ParseError::MissingProtocol) => println!("no protocol token: {err}"),
            Err(err) => println!("error: {err}"),
        }
    }
}
