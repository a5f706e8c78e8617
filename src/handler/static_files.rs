//! Static asset serving module
//!
//! Resolves request paths against the asset root, loads files, and builds
//! the success or error responses for the asset routes.

use crate::config::AppState;
use crate::handler::router::RequestContext;
use crate::http::{mime, path, response};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::io;
use std::path::Path;
use tokio::fs;

/// Failure taxonomy for one asset request
///
/// Every filesystem failure collapses into one of these cases; each maps to
/// exactly one status code and error page. Failures are terminal for the
/// single request only.
#[derive(Debug)]
pub enum AssetError {
    NotFound,
    Forbidden,
    Io(io::Error),
}

impl From<io::Error> for AssetError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::Forbidden,
            _ => Self::Io(err),
        }
    }
}

/// Serve an asset from the configured root
pub async fn serve_asset(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    let relative = path::resolve_asset_path(ctx.path, &state.config.server.index_file);

    // Error pages name the path after root substitution, so a missing
    // index document reports as "/index.html" like the UI expects.
    let display_path = if ctx.path == "/" {
        format!("/{}", state.config.server.index_file)
    } else {
        ctx.path.to_string()
    };

    match load_asset(&state.asset_root, &relative).await {
        Ok((content, content_type)) => {
            response::build_asset_response(Bytes::from(content), content_type, ctx.is_head)
        }
        Err(AssetError::NotFound) => {
            logger::log_error(&format!("Asset not found: {display_path}"));
            response::build_not_found_page(&display_path)
        }
        Err(AssetError::Forbidden) => {
            logger::log_error(&format!("Asset access denied: {display_path}"));
            response::build_forbidden_page()
        }
        Err(AssetError::Io(e)) => {
            logger::log_error(&format!("Asset read failed for '{display_path}': {e}"));
            response::build_server_error_page()
        }
    }
}

/// Load an asset file and its content type
///
/// The file is read fully into memory on every request; there is no cache.
pub async fn load_asset(
    asset_root: &Path,
    relative: &str,
) -> Result<(Vec<u8>, &'static str), AssetError> {
    if relative.is_empty() {
        return Err(AssetError::NotFound);
    }

    let root = asset_root.canonicalize().map_err(|e| {
        logger::log_warning(&format!(
            "Asset root not found or inaccessible '{}': {e}",
            asset_root.display()
        ));
        AssetError::NotFound
    })?;

    let file_path = root.join(relative);

    // resolve_asset_path keeps the path lexically inside the root;
    // canonicalizing catches symlink escapes on top of that.
    let canonical = file_path.canonicalize().map_err(AssetError::from)?;
    if !canonical.starts_with(&root) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {relative} -> {}",
            canonical.display()
        ));
        return Err(AssetError::NotFound);
    }

    let content = fs::read(&canonical).await.map_err(AssetError::from)?;

    let extension = Path::new(relative)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let content_type = mime::content_type_for(extension.as_deref());

    Ok((content, content_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        let err = AssetError::from(io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, AssetError::NotFound));
    }

    #[test]
    fn test_permission_denied_classification() {
        let err = AssetError::from(io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, AssetError::Forbidden));
    }

    #[test]
    fn test_other_io_errors_stay_io() {
        for kind in [
            io::ErrorKind::TimedOut,
            io::ErrorKind::Interrupted,
            io::ErrorKind::UnexpectedEof,
        ] {
            let err = AssetError::from(io::Error::from(kind));
            assert!(matches!(err, AssetError::Io(_)));
        }
    }

    #[tokio::test]
    async fn test_empty_relative_path_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_asset(dir.path(), "").await.unwrap_err();
        assert!(matches!(err, AssetError::NotFound));
    }

    #[tokio::test]
    async fn test_symlink_escape_is_blocked() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("public");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(dir.path().join("secret.txt"), b"secret").unwrap();

        #[cfg(unix)]
        {
            std::os::unix::fs::symlink(dir.path().join("secret.txt"), root.join("link.txt"))
                .unwrap();
            let err = load_asset(&root, "link.txt").await.unwrap_err();
            assert!(matches!(err, AssetError::NotFound));
        }
    }
}
