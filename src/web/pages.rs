//! HTML page builders

use crate::domain::FormErrors;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::fmt::Write;

/// Placeholder body for titles with no stored entry.
pub const MISSING_ENTRY_HTML: &str = "<h1>No Encyclopedia entry found.</h1>";

/// Characters escaped inside a single URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Encode `title` as one path segment. "." and ".." are spelled with `%2E`
/// so clients do not resolve them as dot segments.
fn encode_segment(title: &str) -> String {
    match title {
        "." | ".." => "%2E".repeat(title.len()),
        _ => utf8_percent_encode(title, PATH_SEGMENT).to_string(),
    }
}

/// Path of the view page for `title`.
pub fn entry_url(title: &str) -> String {
    format!("/wiki/{}/", encode_segment(title))
}

/// Path of the edit page for `title`.
pub fn edit_url(title: &str) -> String {
    format!("/wiki/{}/edit", encode_segment(title))
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(site_name: &str, page_title: &str, body: &str) -> String {
    let site = escape_html(site_name);
    format!(
        "<!DOCTYPE html>\n\
<html lang=\"en\">\n\
<head>\n\
<meta charset=\"utf-8\">\n\
<title>{page_title}</title>\n\
</head>\n\
<body>\n\
<nav class=\"sidebar\">\n\
<h2>{site}</h2>\n\
<form action=\"/\" method=\"get\">\n\
<input class=\"search\" type=\"text\" name=\"q\" placeholder=\"Search {site}\">\n\
</form>\n\
<div><a href=\"/\">Home</a></div>\n\
<div><a href=\"/add/\">Create New Page</a></div>\n\
<div><a href=\"/random/\">Random Page</a></div>\n\
</nav>\n\
<main>\n\
{body}\n\
</main>\n\
</body>\n\
</html>\n",
        page_title = escape_html(page_title),
    )
}

fn error_list(errors: &FormErrors, field: &str) -> String {
    let messages: Vec<&str> = errors.for_field(field).collect();
    if messages.is_empty() {
        return String::new();
    }

    let mut out = String::from("<ul class=\"errorlist\">");
    for message in messages {
        let _ = write!(out, "<li>{}</li>", escape_html(message));
    }
    out.push_str("</ul>\n");
    out
}

fn form_error(error: Option<&str>) -> String {
    error
        .map(|e| format!("<div class=\"alert\">{}</div>\n", escape_html(e)))
        .unwrap_or_default()
}

/// Entry listing for the index and search results.
pub fn index_page(site_name: &str, heading: &str, titles: &[String]) -> String {
    let mut body = format!("<h1>{}</h1>\n<ul>\n", escape_html(heading));
    for title in titles {
        let _ = writeln!(
            body,
            "<li><a href=\"{}\">{}</a></li>",
            escape_html(&entry_url(title)),
            escape_html(title)
        );
    }
    body.push_str("</ul>");
    layout(site_name, site_name, &body)
}

/// A stored entry; `html` is the already rendered markup.
pub fn entry_page(site_name: &str, title: &str, html: &str) -> String {
    let body = format!(
        "{}\n<p><a href=\"{}\">Edit Page</a></p>",
        html,
        escape_html(&edit_url(title))
    );
    layout(site_name, title, &body)
}

pub fn missing_entry_page(site_name: &str, title: &str) -> String {
    layout(site_name, title, MISSING_ENTRY_HTML)
}

/// Values shown in the "create entry" form.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddFormView<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub errors: Option<&'a FormErrors>,
    pub error: Option<&'a str>,
}

pub fn add_page(site_name: &str, form: AddFormView<'_>) -> String {
    let no_errors = FormErrors::new();
    let errors = form.errors.unwrap_or(&no_errors);
    let body = format!(
        "<h1>Create New Page</h1>\n\
{alert}\
<form action=\"/add/\" method=\"post\">\n\
<label for=\"id_title\">Title:</label>\n\
{title_errors}\
<input class=\"form-control\" type=\"text\" name=\"title\" id=\"id_title\" value=\"{title}\">\n\
<label for=\"id_content\">Content:</label>\n\
{content_errors}\
<textarea class=\"form-control\" name=\"content\" id=\"id_content\">\n{content}</textarea>\n\
<input type=\"submit\" value=\"Save\">\n\
</form>",
        alert = form_error(form.error),
        title_errors = error_list(errors, "title"),
        title = escape_html(form.title),
        content_errors = error_list(errors, "content"),
        content = escape_html(form.content),
    );
    layout(site_name, "Create New Page", &body)
}

/// Values shown in the "edit entry" form.
#[derive(Debug, Clone, Copy)]
pub struct EditFormView<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub errors: Option<&'a FormErrors>,
    pub error: Option<&'a str>,
}

pub fn edit_page(site_name: &str, form: EditFormView<'_>) -> String {
    let no_errors = FormErrors::new();
    let errors = form.errors.unwrap_or(&no_errors);
    let body = format!(
        "<h1>Edit {title}</h1>\n\
{alert}\
<form action=\"{action}\" method=\"post\">\n\
<label for=\"id_content\">Content:</label>\n\
{content_errors}\
<textarea class=\"form-control\" name=\"content\" id=\"id_content\">\n{content}</textarea>\n\
<input type=\"submit\" value=\"Save\">\n\
</form>",
        title = escape_html(form.title),
        alert = form_error(form.error),
        action = escape_html(&edit_url(form.title)),
        content_errors = error_list(errors, "content"),
        content = escape_html(form.content),
    );
    layout(site_name, &format!("Edit {}", form.title), &body)
}

pub fn not_found_page(site_name: &str) -> String {
    layout(site_name, "Page not found", "<h1>Page not found.</h1>")
}

/// Standalone page for failures that happen before site settings are at hand.
pub fn server_error_page() -> String {
    "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
<title>Server error</title>\n</head>\n<body>\n<h1>Something went wrong.</h1>\n\
<p>The request could not be completed. <a href=\"/\">Back to the index</a>.</p>\n\
</body>\n</html>\n"
        .to_string()
}
