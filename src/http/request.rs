use std::collections::HashMap;

/// HTTP request methods.
///
/// The server only serves GET; other methods are parsed from the request
/// line but rejected by the static-file handler with 400 Bad Request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// OPTIONS - Describe communication options
    OPTIONS,
    /// PATCH - Partial modification of a resource
    PATCH,
}

/// Represents a parsed HTTP request from a client.
///
/// Contains the request line, headers, and any request entity. The URI is
/// kept exactly as it arrived on the wire - no percent-decoding and no
/// query-string separation - because path resolution concatenates it raw.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The raw request URI (e.g., "/index.html", "/search?q=x")
    pub uri: String,
    /// HTTP version (typically "HTTP/1.1")
    pub version: String,
    /// Request headers as key-value pairs
    pub headers: HashMap<String, String>,
    /// Request body, if any
    pub body: Vec<u8>,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// # Returns
    ///
    /// `Some(Method)` if the string matches a known method (case-sensitive,
    /// uppercase per the wire format), `None` otherwise.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "HEAD" => Some(Method::HEAD),
            "OPTIONS" => Some(Method::OPTIONS),
            "PATCH" => Some(Method::PATCH),
            _ => None,
        }
    }
}

impl Request {
    /// Retrieves a header value by name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }

    /// Retrieves the Content-Length header value and parses it as a usize.
    ///
    /// Returns 0 if the header is missing or not a valid number.
    pub fn content_length(&self) -> usize {
        self.header("Content-Length")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    /// Determines whether the connection should remain open after the response.
    ///
    /// Checks the Connection header. For HTTP/1.1, the default is `true`
    /// (keep-alive); Connection: close turns it off.
    pub fn keep_alive(&self) -> bool {
        self.header("Connection")
            .map(|v| v.eq_ignore_ascii_case("keep-alive"))
            .unwrap_or(true) // HTTP/1.1 default
    }
}
