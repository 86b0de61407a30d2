//! Naming policy for generated records.

use argschema_core::ContextName;

/// Replaces spaces and hyphens with underscores.
pub fn sanitize_tool_name(tool_name: &str) -> String {
    tool_name.replace(['-', ' '], "_")
}

/// Context name of a tool's top-level argument record.
pub fn tool_context(tool_name: &str) -> ContextName {
    ContextName::new(format!("{}Schema", sanitize_tool_name(tool_name)))
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the
/// rest of it: `user_name` becomes `User_Name`, `userId` becomes `Userid`.
pub fn title_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut previous_alphabetic = false;
    for ch in name.chars() {
        if ch.is_alphabetic() {
            if previous_alphabetic {
                result.extend(ch.to_lowercase());
            } else {
                result.extend(ch.to_uppercase());
            }
            previous_alphabetic = true;
        } else {
            result.push(ch);
            previous_alphabetic = false;
        }
    }
    result
}

/// Context a property's own type is resolved under.
pub fn field_context(property_name: &str) -> ContextName {
    ContextName::new(title_case(property_name))
}
