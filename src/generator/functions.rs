use crate::builder::{FunctionBuilder, ParamBuilder};
use crate::chat::FunctionTool;

/// Host-side actions offered to the model in every mode.
pub fn default_functions() -> Vec<FunctionTool> {
    vec![
        FunctionBuilder::new("open_external_url")
            .description("Open a web page in the user's browser.")
            .param(
                ParamBuilder::new("url")
                    .type_of("string")
                    .description("Absolute http(s) URL to open."),
            )
            .required(vec!["url".to_string()])
            .build(),
        FunctionBuilder::new("notify_user")
            .description("Show a short notification to the user.")
            .param(
                ParamBuilder::new("message")
                    .type_of("string")
                    .description("Notification text."),
            )
            .required(vec!["message".to_string()])
            .build(),
        FunctionBuilder::new("device_control")
            .description("Toggle a capability of the user's device.")
            .param(
                ParamBuilder::new("capability")
                    .type_of("string")
                    .description("Capability to control.")
                    .enum_values(vec![
                        "vibrate".to_string(),
                        "flashlight".to_string(),
                        "clipboard".to_string(),
                    ]),
            )
            .param(
                ParamBuilder::new("value")
                    .type_of("string")
                    .description("Target state or payload, e.g. \"on\" or text to copy."),
            )
            .required(vec!["capability".to_string()])
            .build(),
        FunctionBuilder::new("file_processor")
            .description("Run an operation on a file the user attached.")
            .param(
                ParamBuilder::new("operation")
                    .type_of("string")
                    .description("What to do with the file.")
                    .enum_values(vec![
                        "summarize".to_string(),
                        "extract_text".to_string(),
                        "analyze".to_string(),
                    ]),
            )
            .param(
                ParamBuilder::new("file_name")
                    .type_of("string")
                    .description("Name of the attached file."),
            )
            .required(vec!["operation".to_string()])
            .build(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declarations_have_unique_names_and_object_schemas() {
        let functions = default_functions();
        let mut names: Vec<&str> = functions.iter().map(|f| f.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), functions.len());
        for function in &functions {
            assert_eq!(function.parameters["type"], "object");
            assert!(function.parameters["required"].is_array());
        }
    }
}
