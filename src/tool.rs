//! Shared tool invocation contract.
//!
//! Every tool exposes a name, a description, an input schema, and an output
//! type to the calling agent. Invocation goes through [`Tool::execute`]:
//! required fields are checked against the schema first, then the domain
//! operation runs. Domain failures are folded into a failed [`ToolResult`];
//! the only error that escapes `execute` is a contract violation by the
//! caller (a missing required field).

use crate::error::{HentError, Result};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

/// Named input fields for a tool invocation.
///
/// Unknown fields are carried along and ignored by validation.
#[derive(Debug, Clone, Default)]
pub struct ToolInput {
    fields: Map<String, Value>,
}

impl ToolInput {
    /// Create an empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, builder-style.
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    /// Whether a field is present.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Get a field value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Get a field as a string slice.
    pub fn get_str(&self, name: &str) -> Result<&str> {
        self.fields
            .get(name)
            .and_then(|v| v.as_str())
            .ok_or_else(|| HentError::InvalidInput(format!("Field '{}' must be a string", name)))
    }
}

impl From<Map<String, Value>> for ToolInput {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Primitive type of a schema property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    String,
    Integer,
    Number,
    Boolean,
}

/// A single named field in a tool's input schema.
#[derive(Debug, Clone, Serialize)]
pub struct Property {
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub description: String,
}

/// JSON-Schema-like description of a tool's input object.
#[derive(Debug, Clone, Default)]
pub struct InputSchema {
    properties: BTreeMap<String, Property>,
    required: Vec<String>,
}

impl InputSchema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an optional field.
    pub fn field(mut self, name: &str, kind: PropertyType, description: &str) -> Self {
        self.properties.insert(
            name.to_string(),
            Property {
                kind,
                description: description.to_string(),
            },
        );
        self
    }

    /// Add a required field.
    pub fn required_field(mut self, name: &str, kind: PropertyType, description: &str) -> Self {
        self.required.push(name.to_string());
        self.field(name, kind, description)
    }

    /// Names of the required fields.
    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// Check that every required field is present in `input`.
    ///
    /// Fields not declared in the schema are ignored, not rejected.
    pub fn validate(&self, input: &ToolInput) -> Result<()> {
        for name in &self.required {
            if !input.contains(name) {
                return Err(HentError::InvalidInput(format!(
                    "Missing required field: {}",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Serialize to the JSON-Schema object handed to the orchestrator.
    pub fn to_json(&self) -> Value {
        json!({
            "type": "object",
            "properties": self.properties,
            "required": self.required,
        })
    }
}

/// Result envelope returned by every tool invocation.
///
/// Constructed exactly once per invocation, on both success and failure
/// paths, and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct ToolResult {
    /// Output text handed back to the agent.
    pub output: String,
    /// Short status message for observability.
    pub status_message: String,
    /// Whether the domain operation succeeded.
    pub success: bool,
    /// Optional structured diagnostic payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<Value>,
}

impl ToolResult {
    /// Build a successful envelope.
    pub fn success(output: impl Into<String>, status_message: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            status_message: status_message.into(),
            success: true,
            diagnostics: None,
        }
    }

    /// Build a failed envelope.
    pub fn failure(output: impl Into<String>, status_message: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            status_message: status_message.into(),
            success: false,
            diagnostics: None,
        }
    }

    /// Attach a diagnostic payload.
    pub fn with_diagnostics(mut self, diagnostics: Value) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }
}

/// Trait for agent-callable tools.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Identifier presented to the orchestrator.
    fn name(&self) -> &str;

    /// Free-text description of what the tool does.
    fn description(&self) -> &str;

    /// Schema the input mapping is validated against.
    fn input_schema(&self) -> InputSchema;

    /// Kind of value carried in `ToolResult::output`.
    fn output_type(&self) -> &str {
        "string"
    }

    /// Perform the domain operation.
    ///
    /// Implementations fold their own failures into the returned envelope
    /// rather than propagating them.
    async fn run(&self, input: &ToolInput) -> ToolResult;

    /// Validate `input` against the schema, then run the domain operation.
    async fn execute(&self, input: &ToolInput) -> Result<ToolResult> {
        self.input_schema().validate(input)?;
        Ok(self.run(input).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Echoes the input text back."
        }

        fn input_schema(&self) -> InputSchema {
            InputSchema::new().required_field("text", PropertyType::String, "Text to echo")
        }

        async fn run(&self, input: &ToolInput) -> ToolResult {
            match input.get_str("text") {
                Ok(text) => ToolResult::success(text, "Echoed input"),
                Err(e) => ToolResult::failure(e.to_string(), "Invalid input"),
            }
        }
    }

    #[test]
    fn test_validate_missing_required_field() {
        let schema =
            InputSchema::new().required_field("query", PropertyType::String, "The query");
        let input = ToolInput::new();

        let err = schema.validate(&input).unwrap_err();
        assert!(err.to_string().contains("query"));
    }

    #[test]
    fn test_validate_ignores_unknown_fields() {
        let schema =
            InputSchema::new().required_field("query", PropertyType::String, "The query");
        let input = ToolInput::new()
            .with("query", "rust")
            .with("extra", 42);

        assert!(schema.validate(&input).is_ok());
    }

    #[test]
    fn test_schema_to_json_shape() {
        let schema = InputSchema::new()
            .required_field("url", PropertyType::String, "Video URL")
            .field("limit", PropertyType::Integer, "Max results");

        let json = schema.to_json();
        assert_eq!(json["type"], "object");
        assert_eq!(json["properties"]["url"]["type"], "string");
        assert_eq!(json["properties"]["limit"]["type"], "integer");
        assert_eq!(json["required"], serde_json::json!(["url"]));
    }

    #[test]
    fn test_result_constructed_once() {
        let ok = ToolResult::success("out", "done");
        assert!(ok.success);
        assert!(ok.diagnostics.is_none());

        let failed = ToolResult::failure("bad", "failed")
            .with_diagnostics(serde_json::json!({"error": "bad"}));
        assert!(!failed.success);
        assert_eq!(failed.diagnostics.unwrap()["error"], "bad");
    }

    #[tokio::test]
    async fn test_execute_validates_before_running() {
        let tool = EchoTool;

        let err = tool.execute(&ToolInput::new()).await.unwrap_err();
        assert!(matches!(err, HentError::InvalidInput(_)));

        let result = tool
            .execute(&ToolInput::new().with("text", "hei"))
            .await
            .unwrap();
        assert!(result.success);
        assert_eq!(result.output, "hei");
    }

    #[test]
    fn test_input_get_str_type_mismatch() {
        let input = ToolInput::new().with("query", 7);
        assert!(input.get_str("query").is_err());
    }
}
