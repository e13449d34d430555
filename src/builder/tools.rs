use std::collections::BTreeMap;

use super::generator_builder::GeneratorBuilder;
use crate::chat::{FunctionTool, ParameterProperty, ParametersSchema};

impl GeneratorBuilder {
    /// Adds a function declaration offered to the model in every mode.
    pub fn function(mut self, function_builder: FunctionBuilder) -> Self {
        self.state.functions.push(function_builder.build());
        self
    }

    /// Drops the built-in host actions (`open_external_url`, `notify_user`, ...).
    pub fn without_default_functions(mut self) -> Self {
        self.state.default_functions = false;
        self
    }
}

/// Builder for function parameters.
pub struct ParamBuilder {
    name: String,
    property_type: String,
    description: String,
    items: Option<Box<ParameterProperty>>,
    enum_list: Option<Vec<String>>,
}

impl ParamBuilder {
    /// Creates a new parameter builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            property_type: "string".to_string(),
            description: String::new(),
            items: None,
            enum_list: None,
        }
    }

    /// Sets the parameter type.
    pub fn type_of(mut self, type_str: impl Into<String>) -> Self {
        self.property_type = type_str.into();
        self
    }

    /// Sets the parameter description.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Sets the array item type for array parameters.
    pub fn items(mut self, item_property: ParameterProperty) -> Self {
        self.items = Some(Box::new(item_property));
        self
    }

    /// Restricts a string parameter to a fixed set of values.
    pub fn enum_values(mut self, values: Vec<String>) -> Self {
        self.enum_list = Some(values);
        self
    }

    fn build(self) -> (String, ParameterProperty) {
        (
            self.name,
            ParameterProperty {
                property_type: self.property_type,
                description: self.description,
                items: self.items,
                enum_list: self.enum_list,
            },
        )
    }
}

/// Builder for function declarations.
pub struct FunctionBuilder {
    name: String,
    description: String,
    parameters: Vec<ParamBuilder>,
    required: Vec<String>,
    raw_schema: Option<serde_json::Value>,
}

impl FunctionBuilder {
    /// Creates a new function builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            parameters: Vec::new(),
            required: Vec::new(),
            raw_schema: None,
        }
    }

    /// Sets the function description.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    /// Adds a parameter to the function.
    pub fn param(mut self, param: ParamBuilder) -> Self {
        self.parameters.push(param);
        self
    }

    /// Marks parameters as required.
    pub fn required(mut self, param_names: Vec<String>) -> Self {
        self.required = param_names;
        self
    }

    /// Provides a full JSON Schema for the parameters.
    pub fn json_schema(mut self, schema: serde_json::Value) -> Self {
        self.raw_schema = Some(schema);
        self
    }

    /// Builds the function declaration.
    pub fn build(self) -> FunctionTool {
        let FunctionBuilder {
            name,
            description,
            parameters,
            required,
            raw_schema,
        } = self;

        FunctionTool {
            name,
            description,
            parameters: build_parameters(raw_schema, parameters, required),
        }
    }
}

fn build_parameters(
    raw_schema: Option<serde_json::Value>,
    parameters: Vec<ParamBuilder>,
    required: Vec<String>,
) -> serde_json::Value {
    if let Some(schema) = raw_schema {
        return schema;
    }

    let properties: BTreeMap<String, ParameterProperty> =
        parameters.into_iter().map(ParamBuilder::build).collect();

    serde_json::to_value(ParametersSchema {
        schema_type: "object".to_string(),
        properties,
        required,
    })
    .unwrap_or_else(|_| serde_json::Value::Object(serde_json::Map::new()))
}
