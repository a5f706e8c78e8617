//! MIME type detection module
//!
//! Returns the corresponding Content-Type based on file extension.

/// Get MIME Content-Type based on file extension
///
/// Extensions outside the served asset set fall back to plain text.
///
/// # Examples
/// ```
/// use promptgen_server::http::mime::content_type_for;
/// assert_eq!(content_type_for(Some("html")), "text/html");
/// assert_eq!(content_type_for(Some("png")), "image/png");
/// assert_eq!(content_type_for(None), "text/plain");
/// ```
pub fn content_type_for(extension: Option<&str>) -> &'static str {
    match extension {
        Some("html") => "text/html",
        Some("css") => "text/css",
        Some("js") => "text/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("ico") => "image/x-icon",
        _ => "text/plain",
    }
}
