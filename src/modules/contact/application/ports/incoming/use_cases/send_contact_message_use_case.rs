use async_trait::async_trait;
use portfolio_site::{
    i18n::Translations,
    models::ContactForm,
    validation::{validate_contact_form, FieldErrors},
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendContactMessageError {
    #[error("Contact form has {} invalid field(s)", .0.len())]
    InvalidFields(FieldErrors),

    #[error("Contact message could not be delivered")]
    DeliveryFailed,
}

/// A contact form that passed validation. Only constructible through `new`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendContactMessageCommand {
    form: ContactForm,
}

impl SendContactMessageCommand {
    /// Validates every field; error texts come from `translations`.
    pub fn new(
        form: ContactForm,
        translations: &Translations,
    ) -> Result<Self, SendContactMessageError> {
        let errors = validate_contact_form(&form, translations);
        if !errors.is_empty() {
            return Err(SendContactMessageError::InvalidFields(errors));
        }
        Ok(Self { form })
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }
}

#[async_trait]
pub trait SendContactMessageUseCase: Send + Sync {
    async fn execute(&self, command: SendContactMessageCommand)
        -> Result<(), SendContactMessageError>;
}
