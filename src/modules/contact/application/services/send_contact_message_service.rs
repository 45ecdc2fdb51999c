use async_trait::async_trait;
use tracing::{error, info};

use crate::contact::application::ports::{
    incoming::use_cases::{
        SendContactMessageCommand, SendContactMessageError, SendContactMessageUseCase,
    },
    outgoing::FormRelay,
};

#[derive(Debug, Clone)]
pub struct SendContactMessageService<R>
where
    R: FormRelay,
{
    relay: R,
}

impl<R> SendContactMessageService<R>
where
    R: FormRelay,
{
    pub fn new(relay: R) -> Self {
        Self { relay }
    }
}

#[async_trait]
impl<R> SendContactMessageUseCase for SendContactMessageService<R>
where
    R: FormRelay,
{
    async fn execute(
        &self,
        command: SendContactMessageCommand,
    ) -> Result<(), SendContactMessageError> {
        let form = command.form();
        info!(subject = %form.subject, "Relaying contact message");

        if self.relay.submit(form).await {
            info!(subject = %form.subject, "Contact message delivered");
            Ok(())
        } else {
            error!(subject = %form.subject, "Contact message delivery failed");
            Err(SendContactMessageError::DeliveryFailed)
        }
    }
}
