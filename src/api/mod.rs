//! Contact endpoint handler and request processing

pub mod cors;
pub mod handler;
pub mod helpers;
pub mod parsing;

// Re-export the main handler for convenience
pub use handler::{handle_contact, handle_event, handler};
pub use helpers::ContactResponse;
pub use parsing::ContactRequest;
