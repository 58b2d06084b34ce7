//! URI to filesystem path resolution.

/// Filename served when a URI resolves to a directory.
pub const INDEX_FILE: &str = "index.html";

/// A file selected to satisfy one request: its path and the byte size
/// recorded at resolution time. Lives for the duration of a single request;
/// nothing is cached across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub path: String,
    pub size: u64,
}

/// Resolves a request URI against the document root.
///
/// The candidate path is the document root concatenated with the raw URI,
/// exactly as received: no `..` normalization, no percent-decoding, no
/// query-string stripping. If the candidate is a regular file it is the
/// target. If it is a directory, [`INDEX_FILE`] is appended (again by plain
/// concatenation, so a URI without a trailing slash composes a different
/// name) and any stat-able entry at that path is accepted without a
/// regular-file check. Everything else resolves to `None`.
pub async fn resolve(doc_root: &str, uri: &str) -> Option<ResolvedTarget> {
    let candidate = format!("{}{}", doc_root, uri);

    let meta = tokio::fs::metadata(&candidate).await.ok()?;

    if meta.is_file() {
        return Some(ResolvedTarget {
            path: candidate,
            size: meta.len(),
        });
    }

    if meta.is_dir() {
        let composed = format!("{}{}", candidate, INDEX_FILE);
        if let Ok(index_meta) = tokio::fs::metadata(&composed).await {
            return Some(ResolvedTarget {
                path: composed,
                size: index_meta.len(),
            });
        }
    }

    None
}
