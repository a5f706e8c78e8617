//! Request path resolution module
//!
//! Maps a raw URL path onto a relative asset path that cannot reference a
//! location above the asset root.

use percent_encoding::percent_decode_str;

/// Resolve a raw request path into a relative asset path.
///
/// The root path substitutes the index document. Empty and `.` segments are
/// dropped; `..` pops the previous segment and never climbs past the root,
/// so the result stays contained regardless of input. Runs before any
/// filesystem access.
pub fn resolve_asset_path(raw_path: &str, index_file: &str) -> String {
    let decoded = percent_decode_str(raw_path).decode_utf8_lossy();

    if decoded == "/" {
        return index_file.to_string();
    }

    let mut segments: Vec<&str> = Vec::new();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    segments.join("/")
}
