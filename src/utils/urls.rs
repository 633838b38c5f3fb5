//! Public URL construction.
//!
//! Class identifiers are free-form strings, so they are percent-encoded as
//! a single path segment. Tokens are URL-safe base64 and go in verbatim.

use percent_encoding::{AsciiSet, CONTROLS, NON_ALPHANUMERIC, utf8_percent_encode};

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'\\')
    .add(b'^')
    .add(b'|');

pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// `{base}/entrypoint/{token}`: what the QR code encodes.
pub fn checkin_url(base_url: &str, token: &str) -> String {
    format!("{}/entrypoint/{}", base_url, token)
}

/// `{base}/generateCode/{classId}`
pub fn code_url(base_url: &str, class_id: &str) -> String {
    format!("{}/generateCode/{}", base_url, encode_segment(class_id))
}

/// Relative path of a class roster page.
pub fn roster_path(class_id: &str) -> String {
    format!("/registerPage/{}", encode_segment(class_id))
}

/// Login redirect carrying the page to come back to.
pub fn login_redirect(login_url: &str, return_to: &str) -> String {
    let separator = if login_url.contains('?') { '&' } else { '?' };
    format!(
        "{}{}returnTo={}",
        login_url,
        separator,
        utf8_percent_encode(return_to, NON_ALPHANUMERIC)
    )
}
