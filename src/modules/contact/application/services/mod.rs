pub mod send_contact_message_service;

pub use send_contact_message_service::SendContactMessageService;
