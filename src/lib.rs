/// Contact form - a serverless endpoint that turns contact-form submissions
/// into two transactional emails.
///
/// The crate is deployed as a single AWS Lambda behind API Gateway or a
/// function URL. Each invocation:
/// 1. Applies the CORS policy for the site's origins
/// 2. Answers preflight requests and rejects anything but `POST`
/// 3. Silently drops submissions that fill the honeypot field
/// 4. Validates `name`, `email` and `message`
/// 5. Sends an owner notification, then an acknowledgement, through MailerSend
///
/// # Example
///
/// ```no_run
/// use contact_form::api::{ContactRequest, handle_contact};
/// use contact_form::core::config::AppConfig;
/// use contact_form::mail::MailerSendClient;
///
/// #[tokio::main]
/// async fn main() {
///     contact_form::setup_logging();
///
///     let config = AppConfig::from_env();
///     let client = MailerSendClient::from_config(&config);
///
///     let request = ContactRequest::new("POST")
///         .with_header("Origin", "https://paper-plane-studio.vercel.app")
///         .with_header("Content-Type", "application/json")
///         .with_body(r#"{"name":"Ann","email":"ann@example.com","message":"Hi"}"#);
///
///     let response = handle_contact(&request, &config, &client).await;
///     println!("{} {}", response.status_code, response.body);
/// }
/// ```
pub mod api;
pub mod core;
pub mod errors;
pub mod mail;
pub mod utils;

pub use errors::ContactError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Output goes to `CloudWatch` Logs. Calling this more than once is harmless;
/// only the first call installs the subscriber.
///
/// # Example
///
/// ```
/// contact_form::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    #[cfg(feature = "debug-logs")]
    let level = tracing_subscriber::filter::LevelFilter::DEBUG;
    #[cfg(not(feature = "debug-logs"))]
    let level = tracing_subscriber::filter::LevelFilter::INFO;

    let _ = tracing_subscriber::registry()
        .with(fmt_layer.with_filter(level))
        .try_init();
}
