// Contact form
//
// Local-only form: nothing leaves the process. Submitting validates the
// fields, shows a "Sending..." state for SUBMIT_DELAY, then clears the form
// and shows a thank-you notice.

use std::time::Instant;

use thiserror::Error;
use tracing::info;

use super::config::{NOTICE_DURATION, SUBMIT_DELAY};

pub const THANK_YOU_NOTICE: &str = "Thank you! Your message has been sent.";

/// Input fields in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Your Name",
            FormField::Email => "your.email@example.com",
            FormField::Message => "Tell me about your project...",
        }
    }

    fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Message,
            FormField::Message => FormField::Name,
        }
    }

    fn previous(self) -> Self {
        match self {
            FormField::Name => FormField::Message,
            FormField::Email => FormField::Name,
            FormField::Message => FormField::Email,
        }
    }
}

/// Why a submission was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    Missing(FormField),

    #[error("please enter a valid email address")]
    InvalidEmail,

    #[error("a message is already being sent")]
    Busy,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub focus: FormField,
    /// Keystrokes go to the form instead of the page
    pub editing: bool,
    sending_since: Option<Instant>,
    notice_since: Option<Instant>,
    pub error: Option<FormError>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    pub fn begin_editing(&mut self) {
        self.editing = true;
    }

    pub fn stop_editing(&mut self) {
        self.editing = false;
    }

    pub fn next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn previous_field(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn insert_char(&mut self, c: char) {
        if self.is_sending() || c.is_control() {
            return;
        }
        let focus = self.focus;
        self.value_mut(focus).push(c);
        self.error = None;
    }

    pub fn backspace(&mut self) {
        if self.is_sending() {
            return;
        }
        let focus = self.focus;
        self.value_mut(focus).pop();
    }

    /// Check required fields and the email shape
    pub fn validate(&self) -> Result<(), FormError> {
        for field in FormField::ALL {
            if self.value(field).trim().is_empty() {
                return Err(FormError::Missing(field));
            }
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    /// Start the simulated send
    pub fn submit(&mut self, now: Instant) -> Result<(), FormError> {
        if self.is_sending() {
            return Err(FormError::Busy);
        }
        if let Err(e) = self.validate() {
            self.error = Some(e);
            if let FormError::Missing(field) = e {
                self.focus = field;
            }
            return Err(e);
        }
        self.error = None;
        self.sending_since = Some(now);
        info!(
            name_len = self.name.len(),
            message_len = self.message.len(),
            "Contact form submitted (local simulation)"
        );
        Ok(())
    }

    pub fn is_sending(&self) -> bool {
        self.sending_since.is_some()
    }

    /// Advance the simulated send; returns true when it completed this tick
    pub fn on_tick(&mut self, now: Instant) -> bool {
        if let Some(notice) = self.notice_since {
            if now.saturating_duration_since(notice) >= NOTICE_DURATION {
                self.notice_since = None;
            }
        }

        match self.sending_since {
            Some(since) if now.saturating_duration_since(since) >= SUBMIT_DELAY => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.focus = FormField::Name;
                self.editing = false;
                self.sending_since = None;
                self.notice_since = Some(now);
                info!("Contact form send completed");
                true
            }
            _ => false,
        }
    }

    /// Confirmation text while it is still on screen
    pub fn notice(&self) -> Option<&'static str> {
        self.notice_since.map(|_| THANK_YOU_NOTICE)
    }
}

/// Minimal shape check matching a browser's `type="email"` input
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}
