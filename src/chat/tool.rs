use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Represents a parameter in a function declaration
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ParameterProperty {
    /// The type of the parameter (e.g. "string", "number", "array", etc)
    #[serde(rename = "type")]
    pub property_type: String,
    /// Description of what the parameter does
    pub description: String,
    /// When type is "array", this defines the type of the array items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<ParameterProperty>>,
    /// Allowed values for string parameters
    #[serde(skip_serializing_if = "Option::is_none", rename = "enum")]
    pub enum_list: Option<Vec<String>>,
}

/// Represents the parameters schema for a function declaration
#[derive(Debug, Clone, Serialize)]
pub struct ParametersSchema {
    /// The type of the parameters object (usually "object")
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Map of parameter names to their properties
    pub properties: BTreeMap<String, ParameterProperty>,
    /// List of required parameter names
    pub required: Vec<String>,
}

/// A locally-defined callable the model may ask the host to run.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FunctionTool {
    /// Name of the function
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// JSON Schema describing the parameters
    pub parameters: Value,
}

/// A structured action request emitted by the model.
///
/// The crate never executes these; the host application does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    #[serde(default)]
    pub args: Value,
}

impl FunctionCall {
    pub fn new(name: impl Into<String>, args: Value) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// String argument lookup, `None` if absent or not a string.
    pub fn arg_str(&self, key: &str) -> Option<&str> {
        self.args.get(key).and_then(Value::as_str)
    }
}

/// Provider-side and local capabilities attached to a request.
#[derive(Debug, Clone, PartialEq)]
pub enum Tool {
    /// Locally declared functions
    Functions(Vec<FunctionTool>),
    /// Provider-side web search
    WebSearch,
    /// Provider-side maps / geolocation grounding
    Maps,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn function_call_reads_string_args() {
        let call = FunctionCall::new("open_external_url", json!({"url": "https://example.com"}));
        assert_eq!(call.arg_str("url"), Some("https://example.com"));
        assert_eq!(call.arg_str("missing"), None);
    }

    #[test]
    fn function_call_args_default_to_null() {
        let call: FunctionCall = serde_json::from_value(json!({"name": "notify_user"})).unwrap();
        assert!(call.args.is_null());
    }
}
