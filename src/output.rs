use colored::*;
use serde_json::Value;

/// Announce a successful connect with the advertised tool names.
pub fn display_connected(tool_names: &[String]) {
    let listing = if tool_names.is_empty() {
        "none".to_string()
    } else {
        tool_names.join(", ")
    };
    println!("{} Tools available: {}", "Connected.".green(), listing);
}

/// Announce an outgoing tool call.
pub fn display_call(name: &str, params: &Value) {
    println!();
    println!(
        "Calling tool {} with params {} ...",
        format!("\"{}\"", name).cyan(),
        params
    );
}

/// Print the result line and return the text that was shown.
pub fn display_result(result: &Value) -> String {
    match result_text(result) {
        Some(text) => {
            println!("{} {}", "Result:".green(), text);
            text
        }
        None => {
            let raw = result.to_string();
            println!("{} {}", "Result object:".yellow(), raw);
            raw
        }
    }
}

/// Pull a display string out of the conventional result shapes: a content
/// list whose first entry carries a `text` field, or a direct `text` field.
/// Anything else falls back to the raw representation.
pub fn result_text(result: &Value) -> Option<String> {
    if let Some(text) = result.pointer("/content/0/text").and_then(Value::as_str) {
        return Some(text.to_string());
    }
    if let Some(text) = result.get("text").and_then(Value::as_str) {
        return Some(text.to_string());
    }
    None
}
