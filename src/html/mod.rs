//! HTML rendering
//!
//! Inline templates for directory listings and error pages. All dynamic
//! values are escaped before they reach the markup.

use crate::handler::listing::{EntryInfo, EntryKind};

/// Render a directory listing page for `dir_url` (trailing slash
/// guaranteed by the caller) and its sorted entries.
#[must_use]
pub fn render_listing(dir_url: &str, entries: &[EntryInfo]) -> String {
    let mut rows = String::new();
    if dir_url != "/" {
        rows.push_str("        <li class=\"entry folder\"><a href=\"../\">..</a></li>\n");
    }
    for entry in entries {
        let class = match entry.kind {
            EntryKind::Folder => "entry folder",
            EntryKind::File => "entry file",
        };
        rows.push_str(&format!(
            "        <li class=\"{class}\"><a href=\"{}\">{}</a></li>\n",
            escape_html(&entry.url),
            escape_html(&entry.name),
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Index of {title}</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            max-width: 720px;
            margin: 40px auto;
            padding: 0 20px;
            color: #24292f;
        }}
        h1 {{
            font-size: 1.4em;
            border-bottom: 1px solid #d0d7de;
            padding-bottom: 8px;
        }}
        ul {{ list-style: none; padding: 0; }}
        .entry {{ padding: 6px 8px; border-bottom: 1px solid #f0f0f0; }}
        .entry a {{ text-decoration: none; color: #0969da; }}
        .entry a:hover {{ text-decoration: underline; }}
        .folder::before {{ content: "\1F4C1  "; }}
        .file::before {{ content: "\1F4C4  "; }}
    </style>
</head>
<body>
    <h1>Index of {title}</h1>
    <ul>
{rows}    </ul>
</body>
</html>"#,
        title = escape_html(dir_url),
    )
}

/// Render an error page for a status text and human-readable message.
#[must_use]
pub fn render_error_page(status_text: &str, message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            max-width: 720px;
            margin: 80px auto;
            padding: 0 20px;
            color: #24292f;
            text-align: center;
        }}
        h1 {{ font-size: 2em; }}
        p {{ color: #57606a; }}
    </style>
</head>
<body>
    <h1>{title}</h1>
    <p>{body}</p>
</body>
</html>"#,
        title = escape_html(status_text),
        body = escape_html(message),
    )
}

/// Escape text for use in HTML content and attribute values.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, kind: EntryKind) -> EntryInfo {
        EntryInfo {
            name: name.to_string(),
            url: format!("/{name}"),
            kind,
        }
    }

    #[test]
    fn test_listing_links_entries() {
        let entries = vec![
            entry("docs", EntryKind::Folder),
            entry("readme.md", EntryKind::File),
        ];
        let html = render_listing("/", &entries);
        assert!(html.contains("<a href=\"/docs\">docs</a>"));
        assert!(html.contains("<a href=\"/readme.md\">readme.md</a>"));
        assert!(html.contains("Index of /"));
    }

    #[test]
    fn test_listing_escapes_names() {
        let entries = vec![entry("<script>.txt", EntryKind::File)];
        let html = render_listing("/", &entries);
        assert!(!html.contains("<script>.txt"));
        assert!(html.contains("&lt;script&gt;.txt"));
    }

    #[test]
    fn test_parent_link_only_below_root() {
        let html = render_listing("/", &[]);
        assert!(!html.contains("href=\"../\""));
        let html = render_listing("/sub/", &[]);
        assert!(html.contains("href=\"../\""));
    }

    #[test]
    fn test_error_page_contains_status_text() {
        let html = render_error_page("Not Found", "The requested resource was not found.");
        assert!(html.contains("<h1>Not Found</h1>"));
        assert!(html.contains("The requested resource was not found."));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a&b<c>\"d\""), "a&amp;b&lt;c&gt;&quot;d&quot;");
    }
}
