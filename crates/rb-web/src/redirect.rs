//! Destination URL construction for the redirect button.
//!
//! Pure string work so it can be tested natively; the browser only ever sees
//! the finished href.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::RedirectError;

/// Query parameter the email is attached under.
pub const EMAIL_PARAM: &str = "email";

/// Everything but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, the same set browsers'
/// `encodeURIComponent` escapes.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode one query value.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Base URL plus the optional email that travels with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget {
    base: String,
    email: Option<String>,
}

impl RedirectTarget {
    pub fn new(base: impl Into<String>, email: Option<String>) -> Self {
        Self {
            base: base.into(),
            email,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Build the href the browser is sent to.
    ///
    /// `https://example.com/signup` + `a@b.com` gives
    /// `https://example.com/signup?email=a%40b.com`. A base that already has a
    /// query string gets `&email=...`, and a `#fragment` stays last.
    pub fn href(&self) -> Result<String, RedirectError> {
        let base = self.base.trim();
        if base.is_empty() {
            return Err(RedirectError::MissingUrl);
        }

        let Some(email) = self.email.as_deref() else {
            return Ok(base.to_string());
        };

        let (path, fragment) = match base.split_once('#') {
            Some((path, fragment)) => (path, Some(fragment)),
            None => (base, None),
        };

        let joiner = if !path.contains('?') {
            "?"
        } else if path.ends_with(['?', '&']) {
            ""
        } else {
            "&"
        };

        Ok(with_fragment(
            format!("{}{}{}={}", path, joiner, EMAIL_PARAM, encode_component(email)),
            fragment,
        ))
    }
}

fn with_fragment(mut href: String, fragment: Option<&str>) -> String {
    if let Some(fragment) = fragment {
        href.push('#');
        href.push_str(fragment);
    }
    href
}
