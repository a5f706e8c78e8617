// API module entry
// JSON endpoints backing the prompt builder UI

mod handlers;
mod response;
mod types;

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;

use crate::logger;

/// API route handler
///
/// Dispatches to handler functions based on request path and method
pub async fn handle_api<B>(req: Request<B>) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let path = req.uri().path().to_string();
    let method = req.method().clone();

    match (method, path.as_str()) {
        (Method::POST, "/api/prompt") => handlers::handle_generate(req).await,
        // Unknown route
        _ => {
            logger::log_api_request(req.method().as_str(), &path, 404);
            Ok(response::not_found())
        }
    }
}
