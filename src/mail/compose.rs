//! Builds the two emails sent for every accepted submission.

use super::email::{Mailbox, OutboundEmail};
use crate::core::ValidSubmission;
use crate::utils::{escape_html, escape_multiline};

pub const OWNER_SENDER_NAME: &str = "Portfolio Contact";
pub const OWNER_RECIPIENT_NAME: &str = "Owner";
pub const STUDIO_NAME: &str = "Paper Plane Studio";

/// Notification to the site owner. Replies go straight to the submitter.
#[must_use]
pub fn owner_notification(
    submission: &ValidSubmission,
    from_email: &str,
    owner_email: &str,
) -> OutboundEmail {
    let ValidSubmission {
        name,
        email,
        message,
    } = submission;

    OutboundEmail {
        from: Mailbox::named(from_email, OWNER_SENDER_NAME),
        to: vec![Mailbox::named(owner_email, OWNER_RECIPIENT_NAME)],
        reply_to: Some(Mailbox::new(email.as_str())),
        subject: format!("New contact from {name}"),
        text: format!("From: {name} <{email}>\n\n{message}"),
        html: format!(
            "<p><b>Name:</b> {}</p>\n<p><b>Email:</b> {}</p>\n<hr><p>{}</p>",
            escape_html(name),
            escape_html(email),
            escape_multiline(message)
        ),
    }
}

/// Acknowledgement back to the person who filled in the form.
#[must_use]
pub fn sender_acknowledgement(submission: &ValidSubmission, from_email: &str) -> OutboundEmail {
    let name = &submission.name;

    OutboundEmail {
        from: Mailbox::named(from_email, STUDIO_NAME),
        to: vec![Mailbox::named(submission.email.as_str(), name.as_str())],
        reply_to: None,
        subject: format!("Thanks for contacting {STUDIO_NAME}"),
        text: format!("Hi {name},\n\nThanks for reaching out! We'll get back to you shortly."),
        html: format!(
            "<p>Hi {},</p><p>Thanks for reaching out! We\u{2019}ll get back to you shortly.</p>",
            escape_html(name)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(message: &str) -> ValidSubmission {
        ValidSubmission {
            name: "Ann <Admin>".to_string(),
            email: "ann@example.com".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_owner_notification_addressing() {
        let email = owner_notification(&submission("Hi"), "site@studio.test", "owner@studio.test");

        assert_eq!(email.from, Mailbox::named("site@studio.test", "Portfolio Contact"));
        assert_eq!(email.recipients(), vec!["owner@studio.test"]);
        assert_eq!(email.reply_to, Some(Mailbox::new("ann@example.com")));
        assert_eq!(email.subject, "New contact from Ann <Admin>");
    }

    #[test]
    fn test_owner_notification_bodies() {
        let email = owner_notification(
            &submission("<script>alert(1)</script>\nbye"),
            "site@studio.test",
            "owner@studio.test",
        );

        // Plain text keeps raw input.
        assert_eq!(
            email.text,
            "From: Ann <Admin> <ann@example.com>\n\n<script>alert(1)</script>\nbye"
        );
        assert!(email.html.contains("&lt;script&gt;alert(1)&lt;/script&gt;<br>bye"));
        assert!(email.html.contains("<b>Name:</b> Ann &lt;Admin&gt;"));
        assert!(!email.html.contains("<script>"));
    }

    #[test]
    fn test_sender_acknowledgement() {
        let email = sender_acknowledgement(&submission("Hi"), "site@studio.test");

        assert_eq!(email.from, Mailbox::named("site@studio.test", "Paper Plane Studio"));
        assert_eq!(email.to, vec![Mailbox::named("ann@example.com", "Ann <Admin>")]);
        assert!(email.reply_to.is_none());
        assert_eq!(email.subject, "Thanks for contacting Paper Plane Studio");
        assert!(email.text.starts_with("Hi Ann <Admin>,\n\n"));
        assert!(email.html.starts_with("<p>Hi Ann &lt;Admin&gt;,</p>"));
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(sender_acknowledgement(&submission("Hi"), "s@t.io")).unwrap();
        assert_eq!(json["from"]["name"], "Paper Plane Studio");
        assert_eq!(json["to"][0]["email"], "ann@example.com");
        assert!(json.get("reply_to").is_none());
    }
}
