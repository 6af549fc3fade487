//! Shell command rendering of a compiled request.

use super::RequestDescriptor;
use std::fmt::Write;

/// Wraps `text` in single quotes, escaping embedded quotes as `'\''`.
pub fn shell_quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', r"'\''"))
}

/// Renders the request as a pasteable `curl` invocation, one logical segment per line.
pub fn render(request: &RequestDescriptor) -> String {
    let mut out = format!(
        "curl -X {} {}",
        request.method,
        shell_quote(&request.url)
    );

    if let Some(headers) = &request.headers {
        for (name, value) in headers {
            // Writing to a String cannot fail.
            let _ = write!(out, " \\\n  -H {}", shell_quote(&format!("{}: {}", name, value)));
        }
    }

    if let Some(body) = &request.body {
        let json = serde_json::to_string_pretty(body).unwrap_or_else(|_| "{}".to_string());
        let _ = write!(out, " \\\n  -d {}", shell_quote(&json));
    }

    out
}
