// API types module
// Request/response types for the prompt assembly endpoint

use serde::{Deserialize, Serialize};

use crate::prompt::PromptForm;

/// Prompt assembly request
///
/// The form fields arrive flattened next to the toggles, mirroring the
/// shape the browser form submits.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateRequest {
    #[serde(flatten)]
    pub form: PromptForm,
    pub include_xml_tags: bool,
    pub add_knowledge_base: bool,
    pub add_step_by_step: bool,
}

/// Prompt assembly response
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub prompt: String,
}
