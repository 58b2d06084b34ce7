//! MIME type classification by filename extension.
//!
//! The table is an ordered set of groups, each pairing a canonical
//! content-type with the extensions that map to it. Lookup is a
//! case-insensitive linear scan; anything not in the table falls back to
//! `application/octet-stream`.

/// Content type used when an extension is unknown or absent.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

struct ExtGroup {
    content_type: &'static str,
    extensions: &'static [&'static str],
}

// Invariant: no extension appears in more than one group.
static EXT_GROUPS: &[ExtGroup] = &[
    ExtGroup {
        content_type: "text/html",
        extensions: &["html", "htm"],
    },
    ExtGroup {
        content_type: "image/gif",
        extensions: &["gif"],
    },
    ExtGroup {
        content_type: "image/png",
        extensions: &["png"],
    },
    ExtGroup {
        content_type: "image/jpeg",
        extensions: &["jpg", "jpeg", "jfif"],
    },
    ExtGroup {
        content_type: "text/css",
        extensions: &["css"],
    },
    ExtGroup {
        content_type: "text/javascript",
        extensions: &["js"],
    },
    ExtGroup {
        content_type: "application/json",
        extensions: &["json"],
    },
    ExtGroup {
        content_type: "text/plain",
        extensions: &["txt"],
    },
    ExtGroup {
        content_type: "image/svg+xml",
        extensions: &["svg"],
    },
    ExtGroup {
        content_type: "image/x-icon",
        extensions: &["ico"],
    },
];

/// Maps a filename extension (without the leading dot, any casing) to its
/// content type. Total over all string inputs; unknown extensions and the
/// empty string yield [`DEFAULT_MIME_TYPE`].
pub fn find_mime_type(ext: &str) -> &'static str {
    for group in EXT_GROUPS {
        for candidate in group.extensions {
            if ext.eq_ignore_ascii_case(candidate) {
                return group.content_type;
            }
        }
    }
    DEFAULT_MIME_TYPE
}
