pub mod send_contact_message_use_case;

pub use send_contact_message_use_case::{
    SendContactMessageCommand, SendContactMessageError, SendContactMessageUseCase,
};
