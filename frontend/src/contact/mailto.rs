use std::fmt;

use log::info;
use web_sys::window;

use crate::error::{describe, SiteError};

/// A `mailto:` address with a pre-filled subject and body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailtoLink {
    recipient: String,
    subject: String,
    body: String,
}

impl MailtoLink {
    pub fn new(recipient: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        MailtoLink {
            recipient: recipient.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    pub fn href(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }

    /// Hands the link to whatever mail handler the platform has registered.
    pub fn open(&self) -> Result<(), SiteError> {
        let href = self.href();
        let window = window().ok_or(SiteError::NoWindow)?;
        info!("Opening mail client for {}", self.recipient);
        window
            .location()
            .set_href(&href)
            .map_err(|e| SiteError::Navigation {
                target: format!("mailto:{}", self.recipient),
                reason: describe(&e),
            })
    }
}

impl fmt::Display for MailtoLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}
