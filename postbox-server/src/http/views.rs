//! Minimal server-rendered views.
//!
//! The markup is deliberately small; user content is escaped before it is
//! interpolated.

use crate::models::FeedbackRecord;

/// Escape text for interpolation into HTML.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>{title}</title></head>
<body>
{body}
</body>
</html>
"#
    )
}

/// Submission form, with an optional error banner.
pub fn index_page(error: Option<&str>) -> String {
    let banner = match error {
        Some(message) => format!("<p class=\"error\">{}</p>\n", escape_html(message)),
        None => String::new(),
    };

    let body = format!(
        r#"<h1>Leave feedback</h1>
{banner}<form method="post" action="/">
  <p><label>Name (optional) <input type="text" name="name"></label></p>
  <p><label>Message <textarea name="message" rows="4"></textarea></label></p>
  <p><button type="submit">Send</button></p>
</form>
<p><a href="/feedback">View feedback</a> | <a href="/export">Export CSV</a></p>"#
    );

    layout("Leave feedback", &body)
}

/// Reviewer-facing table of all feedback, with mark-read and delete links.
pub fn feedback_page(records: &[FeedbackRecord]) -> String {
    let mut rows = String::new();
    for record in records {
        rows.push_str(&format!(
            "<tr><td>{id}</td><td>{name}</td><td>{message}</td><td>{status}</td>\
             <td><a href=\"/feedback/read/{id}\">mark read</a> \
             <a href=\"/feedback/delete/{id}\">delete</a></td></tr>\n",
            id = record.id,
            name = escape_html(record.display_name()),
            message = escape_html(&record.message),
            status = if record.is_read { "read" } else { "unread" },
        ));
    }

    let body = format!(
        "<h1>Feedback</h1>\n<table>\n<tr><th>ID</th><th>Name</th><th>Message</th>\
         <th>Status</th><th>Actions</th></tr>\n{rows}</table>\n\
         <p><a href=\"/\">Back</a></p>"
    );

    layout("Feedback", &body)
}

/// Confirmation view after a successful submission.
pub fn thank_you_page() -> String {
    layout(
        "Thank you",
        "<h1>Thank you for your feedback</h1>\n<p><a href=\"/\">Leave another</a></p>",
    )
}

/// Generic failure page for unrecoverable errors.
pub fn error_page() -> String {
    layout(
        "Something went wrong",
        "<h1>Something went wrong</h1>\n<p>Please try again later.</p>",
    )
}
