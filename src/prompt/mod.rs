//! Prompt assembly module
//!
//! Builds the final prompt text from the fields collected in the browser
//! form: seven free-text fields plus three formatting toggles. The output
//! is a single string ready to paste into a conversational AI system.

use serde::{Deserialize, Serialize};

/// Form fields of the prompt builder, all optional free text
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PromptForm {
    pub project_requirements: String,
    pub context_tracking: String,
    pub relational_context: String,
    pub specific_task: String,
    pub guidelines: String,
    pub task_constraints: String,
    pub finops_considerations: String,
}

const DEFAULT_ROLE: &str = "You are an expert assistant.";

const CLOSING_TEXT: &str = "Please provide a comprehensive and well-structured response.";

const STEP_BY_STEP_TEXT: &str = "Implement this project one step at a time, recording each \
     step into a CSV file to maintain context of the project. Within each step, record any \
     code written and the reason for writing the code this way.";

const KNOWLEDGE_BASE_TEXT: &str = "During the implementation of this project, remember the \
     decisions that we make and the code that we implement by recording information about \
     them in a separate CSV file.";

/// Assemble the prompt from the form fields.
///
/// An empty task always yields an empty prompt. `xml_tags` switches between
/// the XML-tagged layout and the labelled plain-text layout; the other two
/// toggles add fixed instruction paragraphs.
pub fn generate(
    form: &PromptForm,
    xml_tags: bool,
    knowledge_base: bool,
    step_by_step: bool,
) -> String {
    if form.specific_task.is_empty() {
        return String::new();
    }

    let mut prompt = String::new();

    if step_by_step {
        prompt.push_str(STEP_BY_STEP_TEXT);
        prompt.push_str("\n\n");
    }

    if xml_tags {
        push_xml_sections(&mut prompt, form, knowledge_base);
    } else {
        push_plain_sections(&mut prompt, form, knowledge_base);
    }

    prompt.trim().to_string()
}

fn push_xml_sections(prompt: &mut String, form: &PromptForm, knowledge_base: bool) {
    push_xml_block(prompt, "role", &form.relational_context);
    push_xml_block(prompt, "project_requirements", &form.project_requirements);
    push_xml_block(prompt, "context", &form.context_tracking);
    push_xml_block(prompt, "task", &form.specific_task);
    push_xml_block(prompt, "guidelines", &form.guidelines);
    push_xml_block(prompt, "constraints", &form.task_constraints);
    push_xml_block(prompt, "finops_considerations", &form.finops_considerations);
    if knowledge_base {
        push_xml_block(prompt, "knowledge_base", KNOWLEDGE_BASE_TEXT);
    }
}

fn push_xml_block(prompt: &mut String, tag: &str, content: &str) {
    if !content.is_empty() {
        prompt.push_str(&format!("<{tag}>\n{content}\n</{tag}>\n\n"));
    }
}

fn push_plain_sections(prompt: &mut String, form: &PromptForm, knowledge_base: bool) {
    let labelled = |label: &str, content: &str| {
        if content.is_empty() {
            String::new()
        } else {
            format!("{label}{content}")
        }
    };

    let sections = [
        if form.relational_context.is_empty() {
            DEFAULT_ROLE.to_string()
        } else {
            form.relational_context.clone()
        },
        labelled("Project Requirements (PRD): ", &form.project_requirements),
        labelled("Context Tracking: ", &form.context_tracking),
        format!("Specific Task: {}", form.specific_task),
        labelled("Guidelines or Examples:\n", &form.guidelines),
        labelled("Task Constraints:\n", &form.task_constraints),
        labelled("FinOps Considerations:\n", &form.finops_considerations),
        CLOSING_TEXT.to_string(),
    ];

    prompt.push_str(&sections.join("\n\n"));

    if knowledge_base {
        prompt.push('\n');
        prompt.push_str(KNOWLEDGE_BASE_TEXT);
        prompt.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task_only() -> PromptForm {
        PromptForm {
            specific_task: "Build the data pipeline".to_string(),
            ..PromptForm::default()
        }
    }

    #[test]
    fn test_empty_task_yields_empty_prompt() {
        let form = PromptForm::default();
        assert_eq!(generate(&form, false, false, false), "");
        assert_eq!(generate(&form, true, true, true), "");
    }

    #[test]
    fn test_plain_layout_uses_default_role_and_closing() {
        let prompt = generate(&task_only(), false, false, false);
        assert!(prompt.starts_with("You are an expert assistant."));
        assert!(prompt.contains("Specific Task: Build the data pipeline"));
        assert!(prompt.ends_with("Please provide a comprehensive and well-structured response."));
    }

    #[test]
    fn test_plain_layout_labels_filled_fields() {
        let form = PromptForm {
            project_requirements: "A PRD".to_string(),
            context_tracking: "Sprint 3".to_string(),
            relational_context: "You are a data engineer.".to_string(),
            specific_task: "Build the data pipeline".to_string(),
            guidelines: "Use idiomatic code".to_string(),
            task_constraints: "No external services".to_string(),
            finops_considerations: "Stay under budget".to_string(),
        };
        let prompt = generate(&form, false, false, false);
        assert!(prompt.starts_with("You are a data engineer."));
        assert!(prompt.contains("Project Requirements (PRD): A PRD"));
        assert!(prompt.contains("Context Tracking: Sprint 3"));
        assert!(prompt.contains("Guidelines or Examples:\nUse idiomatic code"));
        assert!(prompt.contains("Task Constraints:\nNo external services"));
        assert!(prompt.contains("FinOps Considerations:\nStay under budget"));
    }

    #[test]
    fn test_xml_layout_tags_filled_fields_only() {
        let form = PromptForm {
            relational_context: "You are a data engineer.".to_string(),
            ..task_only()
        };
        let prompt = generate(&form, true, false, false);
        assert!(prompt.starts_with("<role>\nYou are a data engineer.\n</role>"));
        assert!(prompt.contains("<task>\nBuild the data pipeline\n</task>"));
        assert!(!prompt.contains("<guidelines>"));
        assert!(!prompt.contains("<project_requirements>"));
    }

    #[test]
    fn test_step_by_step_prefix_comes_first() {
        for xml in [false, true] {
            let prompt = generate(&task_only(), xml, false, true);
            assert!(prompt.starts_with("Implement this project one step at a time"));
        }
    }

    #[test]
    fn test_knowledge_base_addendum() {
        let plain = generate(&task_only(), false, true, false);
        assert!(plain.ends_with(
            "by recording information about them in a separate CSV file."
        ));

        let xml = generate(&task_only(), true, true, false);
        assert!(xml.contains("<knowledge_base>"));
        assert!(xml.trim_end().ends_with("</knowledge_base>"));
    }

    #[test]
    fn test_output_is_trimmed() {
        let prompt = generate(&task_only(), true, false, false);
        assert_eq!(prompt, prompt.trim());
    }
}
