//! Tool definitions as they arrive from an MCP server, and Rust-typed
//! argument structs for the schema derivation path.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A `tools/list` style document with three tools.
pub const MCP_TOOL_LIST: &str = r#"{
  "tools": [
    {
      "name": "get-weather",
      "description": "Gets the current weather for a location",
      "inputSchema": {
        "type": "object",
        "properties": {
          "location": { "type": "string", "description": "City name" },
          "units": { "enum": ["metric", "imperial"], "description": "Unit system" }
        },
        "required": ["location"]
      }
    },
    {
      "name": "create event",
      "description": "Creates a calendar event",
      "inputSchema": {
        "type": "object",
        "properties": {
          "title": { "type": "string" },
          "starts_at": { "type": "string", "format": "date-time" },
          "attendees": {
            "type": "array",
            "items": {
              "type": "object",
              "properties": {
                "email": { "type": "string", "format": "email" },
                "optional": { "type": "boolean" }
              },
              "required": ["email"]
            }
          }
        },
        "required": ["title", "starts_at"]
      }
    },
    {
      "name": "ping",
      "description": "Checks connectivity"
    }
  ]
}"#;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MathOperation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CalculatorInput {
    /// Left operand
    pub left: i64,
    /// Right operand
    pub right: i64,
    pub operation: MathOperation,
    /// Decimal places in the formatted result
    pub precision: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WeatherLocation {
    pub city: String,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WeatherInput {
    pub location: WeatherLocation,
    pub days: u8,
}
