//! Server-rendered HTML pages.
//!
//! Every page shares [`layout`]. All interpolated values go through
//! [`escape_html`], including the application title.

use crate::utils::html::escape_html;

pub fn layout(title: &str, head_extra: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
{head_extra}
</head>
<body>
<header><h1>{title}</h1></header>
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape_html(title),
        head_extra = head_extra,
        body = body,
    )
}

/// Landing page with the form that opens a class roster.
pub fn intro_page(title: &str) -> String {
    layout(
        title,
        "",
        r#"<p>Enter a class identifier to open its attendance page.</p>
<form method="post" action="/registerPage">
<label for="classId">Class</label>
<input id="classId" name="classId" type="text" required maxlength="256" autofocus>
<button type="submit">Open</button>
</form>"#,
    )
}

pub fn info_page(title: &str, message: &str) -> String {
    layout(
        title,
        "",
        &format!(r#"<p class="info">{}</p>"#, escape_html(message)),
    )
}

pub fn error_page(title: &str, message: &str) -> String {
    layout(
        title,
        "",
        &format!(r#"<p class="error">{}</p>"#, escape_html(message)),
    )
}

/// Roster page shown to the organizer.
///
/// The page reloads itself every `refresh_interval` seconds, which both
/// updates the list and fetches a new QR code from `code_url`.
pub fn register_page(
    title: &str,
    class_id: &str,
    emails: &[String],
    code_url: &str,
    refresh_interval: u64,
) -> String {
    let list = if emails.is_empty() {
        "<p>No check-ins yet.</p>".to_string()
    } else {
        let items: String = emails
            .iter()
            .map(|email| format!("<li>{}</li>\n", escape_html(email)))
            .collect();
        format!("<ol>\n{}</ol>", items)
    };

    let body = format!(
        r#"<h2>Class {class_id}</h2>
<section class="code">
<img src="{code_url}" alt="Check-in QR code" width="300" height="300">
</section>
<section class="roster">
<h3>Checked in ({count})</h3>
{list}
</section>"#,
        class_id = escape_html(class_id),
        code_url = escape_html(code_url),
        count = emails.len(),
        list = list,
    );

    layout(
        title,
        &format!(
            r#"<meta http-equiv="refresh" content="{}">"#,
            refresh_interval
        ),
        &body,
    )
}
