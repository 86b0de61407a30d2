//! Sample tool input schemas.

use serde_json::{Value, json};

pub fn search_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "query": {
                "type": "string",
                "description": "Search terms",
                "minLength": 1
            },
            "limit": {
                "type": "integer",
                "minimum": 1,
                "maximum": 50
            },
            "sort": {
                "enum": ["relevance", "date", null]
            },
            "since": {
                "type": "string",
                "format": "date"
            }
        },
        "required": ["query"]
    })
}

/// Two sibling properties with identical nested object schemas.
pub fn twin_addresses_schema() -> Value {
    let address = json!({
        "type": "object",
        "properties": {
            "street": { "type": "string" },
            "zip": { "type": "string", "pattern": "^[0-9]{5}$" }
        },
        "required": ["street"]
    });
    json!({
        "type": "object",
        "properties": {
            "billing": address.clone(),
            "shipping": address
        },
        "required": ["billing", "shipping"]
    })
}

pub fn composed_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "target": {
                "allOf": [
                    {
                        "type": "object",
                        "properties": { "id": { "type": "string" } },
                        "required": ["id"]
                    },
                    {
                        "properties": { "version": { "type": "integer" } },
                        "required": ["version"]
                    }
                ]
            }
        },
        "required": ["target"]
    })
}

pub fn nested_items_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "line_items": {
                "type": "array",
                "description": "Order lines",
                "items": {
                    "type": "object",
                    "properties": {
                        "sku": { "type": "string" },
                        "quantity": { "type": "integer" }
                    },
                    "required": ["sku", "quantity"]
                }
            },
            "note": { "type": ["string", "null"] }
        },
        "required": ["line_items"]
    })
}

/// A schema nested `levels` objects deep under the property `child`.
pub fn deep_schema(levels: usize) -> Value {
    let mut node = json!({ "type": "string" });
    for _ in 0..levels {
        node = json!({
            "type": "object",
            "properties": { "child": node }
        });
    }
    node
}
