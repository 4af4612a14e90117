//! Alert notification channels
//!
//! Email delivery for formatted alerts. Channels implement the
//! [`Notifier`] trait so the handler can treat delivery paths uniformly.

use super::details::AlertDetails;
use crate::config::EmailConfig;
use crate::error::{NotifyError, Result};
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

/// Notification channel trait
pub trait Notifier {
    /// Deliver a formatted alert
    fn notify(&self, details: &AlertDetails) -> Result<()>;

    /// Channel name for identification
    fn name(&self) -> &str;
}

/// SMTP email notifier
///
/// Submits one HTML email per alert. No retry, no delivery confirmation;
/// transport failures propagate to the caller.
pub struct EmailNotifier {
    to: String,
    from: String,
    mailer: SmtpTransport,
    dry_run: bool,
}

impl EmailNotifier {
    /// Build a notifier from the email configuration section.
    ///
    /// `to` and `from` must be set. The relay defaults to the local MTA;
    /// credentials are applied only when both username and password are
    /// configured.
    pub fn from_config(config: &EmailConfig, dry_run: bool) -> Result<Self> {
        let to = config
            .to
            .clone()
            .ok_or(NotifyError::MissingAddress("to"))?;
        let from = config
            .from
            .clone()
            .ok_or(NotifyError::MissingAddress("from"))?;

        let mailer = match &config.smtp_relay {
            Some(relay) => {
                let mut builder = SmtpTransport::relay(relay).map_err(NotifyError::from)?;
                if let (Some(user), Some(pass)) = (&config.smtp_username, &config.smtp_password) {
                    builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
                }
                builder.build()
            }
            None => SmtpTransport::unencrypted_localhost(),
        };

        Ok(Self {
            to,
            from,
            mailer,
            dry_run,
        })
    }

    /// Assemble the HTML message for an alert.
    fn build_message(&self, details: &AlertDetails) -> Result<Message> {
        let message = Message::builder()
            .from(self.from.parse().map_err(NotifyError::from)?)
            .to(self.to.parse().map_err(NotifyError::from)?)
            .subject(details.subject.clone())
            .header(ContentType::TEXT_HTML)
            .body(details.body.clone())
            .map_err(NotifyError::from)?;

        Ok(message)
    }
}

impl Notifier for EmailNotifier {
    fn notify(&self, details: &AlertDetails) -> Result<()> {
        log::info!(
            "Sending email To:<{}> From:<{}> Subject:<{}>",
            self.to,
            self.from,
            details.subject
        );

        let message = self.build_message(details)?;

        if self.dry_run {
            log::info!("Dry run, skipping email submission");
            return Ok(());
        }

        self.mailer.send(&message).map_err(NotifyError::from)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "email"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FlagValue;

    fn sample_details() -> AlertDetails {
        AlertDetails {
            object: "Datastore - DS01".to_string(),
            alert: "Datastore Free Space Low".to_string(),
            subject: "Datastore Free Space Low | Datastore: [DS01]".to_string(),
            body: "<br>Free Space: 10 GB (10%)".to_string(),
        }
    }

    fn sample_config() -> EmailConfig {
        EmailConfig {
            enabled: FlagValue::Bool(true),
            to: Some("ops@example.com".to_string()),
            from: Some("cfme@example.com".to_string()),
            smtp_relay: None,
            smtp_username: None,
            smtp_password: None,
        }
    }

    #[test]
    fn test_from_config() {
        let notifier = EmailNotifier::from_config(&sample_config(), false).unwrap();
        assert_eq!(notifier.name(), "email");
        assert_eq!(notifier.to, "ops@example.com");
        assert_eq!(notifier.from, "cfme@example.com");
    }

    #[test]
    fn test_missing_to_address() {
        let mut config = sample_config();
        config.to = None;

        let result = EmailNotifier::from_config(&config, false);
        assert!(result.is_err());
        let message = result.err().unwrap().to_string();
        assert!(message.contains("'to'"));
    }

    #[test]
    fn test_missing_from_address() {
        let mut config = sample_config();
        config.from = None;

        let result = EmailNotifier::from_config(&config, false);
        assert!(result.is_err());
    }

    #[test]
    fn test_build_message() {
        let notifier = EmailNotifier::from_config(&sample_config(), false).unwrap();
        let message = notifier.build_message(&sample_details()).unwrap();

        assert_eq!(message.envelope().to().len(), 1);
        let formatted = String::from_utf8_lossy(&message.formatted()).to_string();
        assert!(formatted.contains("Subject: Datastore Free Space Low | Datastore: [DS01]"));
        assert!(formatted.contains("Content-Type: text/html"));
    }

    #[test]
    fn test_invalid_address_rejected() {
        let mut config = sample_config();
        config.to = Some("not an address".to_string());

        let notifier = EmailNotifier::from_config(&config, false).unwrap();
        let result = notifier.build_message(&sample_details());
        assert!(result.is_err());
    }

    #[test]
    fn test_dry_run_skips_submission() {
        let notifier = EmailNotifier::from_config(&sample_config(), true).unwrap();
        let result = notifier.notify(&sample_details());
        assert!(result.is_ok());
    }
}
