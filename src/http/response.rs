//! HTTP response building module
//!
//! Provides builders for asset responses, the fixed HTML error pages, and
//! various status code responses, decoupled from specific business logic.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build 200 response for a served asset
pub fn build_asset_response(
    data: Bytes,
    content_type: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response naming the requested path
pub fn build_not_found_page(request_path: &str) -> Response<Full<Bytes>> {
    let message = format!(
        "The requested page \"{}\" could not be found.",
        escape_html(request_path)
    );
    build_error_page(404, "404 Not Found", "404 - Page Not Found", &message)
}

/// Build 403 Forbidden response
pub fn build_forbidden_page() -> Response<Full<Bytes>> {
    build_error_page(
        403,
        "403 Forbidden",
        "403 - Access Forbidden",
        "You don't have permission to access this resource.",
    )
}

/// Build 500 Internal Server Error response
pub fn build_server_error_page() -> Response<Full<Bytes>> {
    build_error_page(
        500,
        "500 Server Error",
        "500 - Internal Server Error",
        "Something went wrong on our end. Please try again later.",
    )
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD, POST, OPTIONS")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response(enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(204)
        .header("Allow", "GET, HEAD, POST, OPTIONS");

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "GET, HEAD, POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .header("Access-Control-Max-Age", "86400");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build 413 Payload Too Large response
pub fn build_413_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(413)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("413 Payload Too Large")))
        .unwrap_or_else(|e| {
            log_build_error("413", &e);
            Response::new(Full::new(Bytes::from("413 Payload Too Large")))
        })
}

/// Build health check response
pub fn build_health_response(status: &str) -> Response<Full<Bytes>> {
    let body = format!(r#"{{"status":"{status}"}}"#);
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("health", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build one of the fixed HTML error pages
fn build_error_page(
    status: u16,
    title: &str,
    heading: &str,
    message: &str,
) -> Response<Full<Bytes>> {
    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>{title}</title>
  <style>
    body {{ font-family: Arial, sans-serif; text-align: center; padding: 50px; }}
    h1 {{ color: #e74c3c; }}
    a {{ color: #3498db; text-decoration: none; }}
  </style>
</head>
<body>
  <h1>{heading}</h1>
  <p>{message}</p>
  <a href="/">&larr; Return to Home</a>
</body>
</html>
"#
    );

    Response::builder()
        .status(status)
        .header("Content-Type", "text/html")
        .header("Content-Length", html.len())
        .body(Full::new(Bytes::from(html)))
        .unwrap_or_else(|e| {
            log_build_error(&status.to_string(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Escape a string for embedding in the error page markup
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_pages_carry_html_content_type() {
        for response in [
            build_not_found_page("/missing.txt"),
            build_forbidden_page(),
            build_server_error_page(),
        ] {
            assert_eq!(
                response.headers().get("Content-Type").unwrap(),
                "text/html"
            );
        }
    }

    #[test]
    fn test_error_page_status_codes() {
        assert_eq!(build_not_found_page("/x").status(), 404);
        assert_eq!(build_forbidden_page().status(), 403);
        assert_eq!(build_server_error_page().status(), 500);
        assert_eq!(build_405_response().status(), 405);
        assert_eq!(build_413_response().status(), 413);
        assert_eq!(build_options_response(false).status(), 204);
        assert_eq!(build_health_response("ok").status(), 200);
    }

    #[test]
    fn test_head_asset_response_keeps_content_length() {
        let response = build_asset_response(Bytes::from_static(b"hello"), "text/plain", true);
        assert_eq!(response.headers().get("Content-Length").unwrap(), "5");
    }

    #[test]
    fn test_cors_headers_only_when_enabled() {
        let plain = build_options_response(false);
        assert!(plain.headers().get("Access-Control-Allow-Origin").is_none());

        let cors = build_options_response(true);
        assert_eq!(
            cors.headers().get("Access-Control-Allow-Origin").unwrap(),
            "*"
        );
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>"a&b"</script>"#),
            "&lt;script&gt;&quot;a&amp;b&quot;&lt;/script&gt;"
        );
    }
}
