use async_trait::async_trait;

use super::email::OutboundEmail;
use crate::errors::ContactError;

/// Anything that can deliver a single transactional email.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), ContactError>;
}
