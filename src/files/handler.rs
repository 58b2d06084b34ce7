//! Per-request serving logic.

use crate::files::resolver::{ResolvedTarget, resolve};
use crate::http::mime::{DEFAULT_MIME_TYPE, find_mime_type};
use crate::http::request::Method;
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use tokio::io::AsyncReadExt;

/// A request-scoped serving failure. Every variant terminates the request
/// with an error response; none is fatal to the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeError {
    /// Request method was not GET.
    MethodNotAllowed,
    /// Neither the candidate path nor its index fallback resolved.
    NotFound,
    /// The resolved file could not be opened or fully read.
    ServiceUnavailable,
}

impl ServeError {
    /// The HTTP status sent to the client for this failure.
    pub fn status(&self) -> StatusCode {
        match self {
            // Non-GET is answered with 400, not 405.
            ServeError::MethodNotAllowed => StatusCode::BadRequest,
            ServeError::NotFound => StatusCode::NotFound,
            ServeError::ServiceUnavailable => StatusCode::ServiceUnavailable,
        }
    }

    /// Fixed reason phrase sent as the error response body.
    pub fn reason(&self) -> &'static str {
        match self {
            ServeError::MethodNotAllowed => "only GET requests are supported",
            ServeError::NotFound => "file not found",
            ServeError::ServiceUnavailable => "failed to read file",
        }
    }

    /// The terminal error response for this failure.
    pub fn to_response(&self) -> Response {
        Response::error(self.status(), self.reason())
    }
}

/// Serves files from a fixed document root.
///
/// Immutable after construction and shared read-only across connection
/// tasks, so no synchronization is needed.
#[derive(Debug, Clone)]
pub struct StaticServer {
    doc_root: String,
}

impl StaticServer {
    pub fn new(doc_root: impl Into<String>) -> Self {
        Self {
            doc_root: doc_root.into(),
        }
    }

    /// Runs one request through the serving pipeline: method check, path
    /// resolution, content-type selection, exact-size file read, response
    /// assembly. Each step either advances or fails the request; there are
    /// no retries and no partial responses.
    pub async fn serve(&self, method: &Method, uri: &str) -> Result<Response, ServeError> {
        if *method != Method::GET {
            return Err(ServeError::MethodNotAllowed);
        }

        let target = resolve(&self.doc_root, uri)
            .await
            .ok_or(ServeError::NotFound)?;

        tracing::debug!(uri = %uri, path = %target.path, "resolved request");

        let content_type = content_type_for(&target.path);
        let body = read_exact_size(&target).await?;

        tracing::debug!(
            content_type = %content_type,
            size = body.len(),
            "serving file"
        );

        Ok(ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", content_type)
            .header("Content-Length", body.len().to_string())
            .body(body)
            .build())
    }
}

/// Selects the content type from the substring after the last `.` in the
/// resolved path. A path with no dot bypasses the classifier entirely.
fn content_type_for(path: &str) -> &'static str {
    match path.rfind('.') {
        Some(pos) => find_mime_type(&path[pos + 1..]),
        None => DEFAULT_MIME_TYPE,
    }
}

/// Reads exactly the byte count recorded at resolution time. An open
/// failure, short read, or I/O error all fail the request; the file handle
/// is closed before the response is assembled.
async fn read_exact_size(target: &ResolvedTarget) -> Result<Vec<u8>, ServeError> {
    let mut file = tokio::fs::File::open(&target.path)
        .await
        .map_err(|_| ServeError::ServiceUnavailable)?;

    let mut buf = vec![0u8; target.size as usize];
    file.read_exact(&mut buf)
        .await
        .map_err(|_| ServeError::ServiceUnavailable)?;

    Ok(buf)
}
