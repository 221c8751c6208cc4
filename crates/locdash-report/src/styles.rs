//! Built-in stylesheet and `<style>` block assembly.

use crate::config::DashboardConfig;

/// Default dashboard stylesheet.
pub const DEFAULT_STYLES: &str = r#":root {
    --ld-bg: #ffffff;
    --ld-text: #1f2328;
    --ld-muted: #59636e;
    --ld-border: #d1d9e0;
    --ld-accent: #6d28d9;
}
body {
    margin: 0;
    background-color: var(--ld-bg);
    color: var(--ld-text);
    font-family: ui-sans-serif, system-ui, sans-serif;
    line-height: 1.5;
}
.limit-to-viewport {
    max-width: 80ch;
    margin: 0 auto;
    padding: 0 1rem;
}
h1 {
    font-size: 2rem;
    margin: 1.5rem 0 1rem;
}
h2 a {
    color: inherit;
    text-decoration: none;
}
h2 a:hover {
    text-decoration: underline;
}
a {
    color: var(--ld-accent);
}
details {
    border: 1px solid var(--ld-border);
    border-radius: 0.375rem;
    padding: 0.5rem 1rem;
    margin-bottom: 0.75rem;
}
details > summary {
    cursor: pointer;
}
.progress-summary {
    color: var(--ld-muted);
    font-size: 0.875rem;
}
.progress-bar {
    letter-spacing: 0.125rem;
}
.create-button {
    display: inline-block;
    border: 1px solid var(--ld-accent);
    border-radius: 0.25rem;
    padding: 0 0.375rem;
    font-size: 0.8125rem;
    text-decoration: none;
}
.capitalize {
    text-transform: capitalize;
}
table.status-by-content {
    border-collapse: collapse;
    margin: 0 auto;
}
table.status-by-content th,
table.status-by-content td {
    border: 1px solid var(--ld-border);
    padding: 0.25rem 0.625rem;
    text-align: left;
}
table.status-by-content td:not(:first-child) {
    text-align: center;
}
table.status-by-content a {
    text-decoration: none;
}
"#;

/// Render the `<style>` blocks: the built-in stylesheet followed by any
/// inlined custom CSS, in configuration order.
pub fn styles(config: &DashboardConfig) -> String {
    let mut out = format!("<style>\n{DEFAULT_STYLES}</style>");
    if let Some(custom) = &config.inlined_css {
        for css in custom {
            out.push_str(&format!("\n<style>\n{css}\n</style>"));
        }
    }
    out
}
