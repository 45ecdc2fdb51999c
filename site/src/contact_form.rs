//! Contact section state: validate on submit, then one relay call.

use tracing::info;

use crate::i18n::{Locale, Translations};
use crate::models::ContactForm;
use crate::relay::FormRelay;
use crate::validation::{validate_contact_form, ContactField, FieldErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitBlocked {
    #[error("Form has invalid fields")]
    InvalidFields,

    #[error("A submission is already in flight")]
    InFlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered,
    Failed,
    Blocked(SubmitBlocked),
}

#[derive(Debug)]
pub struct ContactFormSession {
    form: ContactForm,
    errors: FieldErrors,
    submitting: bool,
    status: Option<StatusMessage>,
    translations: &'static Translations,
}

impl ContactFormSession {
    pub fn new(locale: Locale) -> Self {
        Self {
            form: ContactForm::default(),
            errors: FieldErrors::new(),
            submitting: false,
            status: None,
            translations: locale.translations(),
        }
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.translations = locale.translations();
    }

    /// Updates one field. Typing into a field clears its error.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        *field.value_mut(&mut self.form) = value.into();
        self.errors.remove(&field);
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: ContactField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn status(&self) -> Option<StatusMessage> {
        self.status
    }

    /// Mirrors the submit button: disabled while sending or while any
    /// field error is on screen.
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.errors.is_empty()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            self.translations.contact.sending
        } else {
            self.translations.contact.send
        }
    }

    /// Validates and, when every field passes, marks the session as in
    /// flight and hands back the payload to send.
    pub fn begin_submit(&mut self) -> Result<ContactForm, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }

        let errors = validate_contact_form(&self.form, self.translations);
        if !errors.is_empty() {
            self.errors = errors;
            return Err(SubmitBlocked::InvalidFields);
        }

        self.errors.clear();
        self.submitting = true;
        self.status = None;
        Ok(self.form.clone())
    }

    /// Applies the relay outcome. Fields reset only on success.
    pub fn finish_submit(&mut self, delivered: bool) {
        self.submitting = false;

        if delivered {
            self.form = ContactForm::default();
            self.status = Some(StatusMessage {
                kind: StatusKind::Success,
                text: self.translations.contact.success,
            });
        } else {
            self.status = Some(StatusMessage {
                kind: StatusKind::Error,
                text: self.translations.contact.error,
            });
        }
    }

    pub async fn submit(&mut self, relay: &dyn FormRelay) -> SubmitOutcome {
        let payload = match self.begin_submit() {
            Ok(payload) => payload,
            Err(blocked) => return SubmitOutcome::Blocked(blocked),
        };

        let delivered = relay.submit(&payload).await;
        info!(delivered, "Contact form submitted");
        self.finish_submit(delivered);

        if delivered {
            SubmitOutcome::Delivered
        } else {
            SubmitOutcome::Failed
        }
    }
}
