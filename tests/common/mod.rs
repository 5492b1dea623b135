#![allow(dead_code)]

use async_trait::async_trait;
use contact_form::ContactError;
use contact_form::core::config::AppConfig;
use contact_form::mail::{EmailSender, OutboundEmail};
use std::sync::Mutex;

pub const OWNER: &str = "owner@studio.test";
pub const FROM: &str = "hello@studio.test";

/// Records every email handed to it; optionally fails from the n-th call on.
#[derive(Default)]
pub struct RecordingSender {
    pub sent: Mutex<Vec<OutboundEmail>>,
    fail_from_call: Option<usize>,
}

impl RecordingSender {
    pub fn failing_from(call: usize) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_from_call: Some(call),
        }
    }

    pub fn calls(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for RecordingSender {
    async fn send(&self, email: &OutboundEmail) -> Result<(), ContactError> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(email.clone());
        match self.fail_from_call {
            Some(n) if sent.len() >= n => Err(ContactError::Api {
                status: 401,
                body: "Unauthenticated.".to_string(),
            }),
            _ => Ok(()),
        }
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        mailersend_api_key: Some("test-key".to_string()),
        mailersend_api_url: "http://127.0.0.1:9".to_string(),
        from_email: Some(FROM.to_string()),
        to_email: Some(OWNER.to_string()),
    }
}
