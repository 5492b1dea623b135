//! Contact endpoint: CORS, method routing, spam filtering, validation and
//! the two outbound emails.
//!
//! [`handle_contact`] holds the request/response logic and is independent of
//! Lambda. [`function_handler`] is the Lambda entrypoint that wires it to the
//! process environment and the MailerSend client.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::helpers::{self, ContactResponse};
use super::{cors, parsing};
use super::parsing::ContactRequest;
use crate::core::config::AppConfig;
use crate::core::{Submission, ValidSubmission};
use crate::errors::ContactError;
use crate::mail::{EmailSender, MailerSendClient, compose};

pub use self::function_handler as handler;

/// Lambda handler for the contact endpoint.
///
/// # Errors
///
/// Never fails for a bad request; every outcome is encoded as a proxy
/// response with the matching status code.
#[tracing::instrument(level = "info", skip(event), fields(correlation_id = %Uuid::new_v4()))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = AppConfig::from_env();
    let client = MailerSendClient::from_config(&config);

    Ok(handle_event(&event.payload, &config, &client).await)
}

/// Decodes a proxy event, runs [`handle_contact`] and encodes the result.
pub async fn handle_event(payload: &Value, config: &AppConfig, sender: &dyn EmailSender) -> Value {
    let response = match ContactRequest::from_event(payload) {
        Ok(request) => handle_contact(&request, config, sender).await,
        Err(e) => {
            error!("Failed to decode request event: {}", e);
            let origin = payload
                .get("headers")
                .and_then(|h| parsing::get_header_value(h, "Origin"));
            helpers::err_response(400, helpers::INVALID_REQUEST)
                .with_headers(cors::cors_headers(origin))
        }
    };

    response.into_value()
}

/// Handles one contact request end to end.
pub async fn handle_contact(
    request: &ContactRequest,
    config: &AppConfig,
    sender: &dyn EmailSender,
) -> ContactResponse {
    info!(method = %request.method, origin = ?request.origin(), "Contact request received");

    let cors = cors::cors_headers(request.origin());
    route(request, config, sender).await.with_headers(cors)
}

async fn route(
    request: &ContactRequest,
    config: &AppConfig,
    sender: &dyn EmailSender,
) -> ContactResponse {
    match request.method.as_str() {
        "OPTIONS" => return helpers::no_content(),
        "POST" => {}
        other => {
            warn!(method = %other, "Rejecting unsupported method");
            return helpers::method_not_allowed();
        }
    }

    let submission = match Submission::decode(request.body.as_deref(), request.content_type()) {
        Ok(s) => s,
        Err(e) => {
            warn!("Rejecting undecodable body: {}", e);
            return helpers::err_response(400, helpers::INVALID_BODY);
        }
    };

    if submission.is_spam() {
        info!("Honeypot field filled, dropping submission");
        return helpers::ok();
    }

    let Some(valid) = submission.validate() else {
        info!("Rejecting submission with missing fields");
        return helpers::err_response(400, helpers::MISSING_FIELDS);
    };

    match deliver(&valid, config, sender).await {
        Ok(()) => {
            info!("Contact emails sent");
            helpers::ok()
        }
        Err(e) => {
            error!("MailerSend error: {}", e);
            helpers::err_response(500, helpers::EMAIL_FAILED)
        }
    }
}

/// Sends the owner notification, then the acknowledgement. The
/// acknowledgement is never sent if the notification fails.
async fn deliver(
    submission: &ValidSubmission,
    config: &AppConfig,
    sender: &dyn EmailSender,
) -> Result<(), ContactError> {
    let from_email = config
        .from_email
        .as_deref()
        .ok_or_else(|| ContactError::Config("FROM_EMAIL is not set".to_string()))?;
    let owner_email = config
        .to_email
        .as_deref()
        .ok_or_else(|| ContactError::Config("TO_EMAIL is not set".to_string()))?;

    let owner_msg = compose::owner_notification(submission, from_email, owner_email);
    let ack_msg = compose::sender_acknowledgement(submission, from_email);

    sender.send(&owner_msg).await?;
    sender.send(&ack_msg).await?;

    Ok(())
}
