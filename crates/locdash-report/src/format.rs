//! Text formatting helpers.

/// Substitute `{name}` placeholders in `template` with the supplied values.
///
/// UI strings are user-configurable, so unresolved placeholders are left
/// verbatim instead of failing the render.
pub fn format_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in values {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

/// Escape HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
