//! Outbound email: message types, composition and delivery

pub mod compose;
pub mod email;
pub mod mailersend;
pub mod sender;

pub use email::{Mailbox, OutboundEmail};
pub use mailersend::MailerSendClient;
pub use sender::EmailSender;
