// Prompt assembly handlers module

use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Bytes};
use hyper::{Request, Response, StatusCode};
use std::convert::Infallible;

use super::response::{bad_request, json_response};
use super::types::{GenerateRequest, GenerateResponse};
use crate::logger;
use crate::prompt;

/// Assemble a prompt from the posted form fields
pub async fn handle_generate<B>(req: Request<B>) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let body = match req.into_body().collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            logger::log_api_error(&format!("Failed to read request body: {e}"));
            return Ok(bad_request("Failed to read request body"));
        }
    };

    let request: GenerateRequest = match serde_json::from_slice(&body) {
        Ok(r) => r,
        Err(e) => {
            logger::log_api_error(&format!("Invalid prompt request: {e}"));
            return Ok(bad_request(&format!("Invalid JSON body: {e}")));
        }
    };

    let prompt = prompt::generate(
        &request.form,
        request.include_xml_tags,
        request.add_knowledge_base,
        request.add_step_by_step,
    );

    logger::log_api_request("POST", "/api/prompt", 200);
    json_response(StatusCode::OK, &GenerateResponse { prompt })
}
