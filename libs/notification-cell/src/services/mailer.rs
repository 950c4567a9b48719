use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Attachment, Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
#[cfg(test)]
use mockall::automock;
use tracing::debug;

use shared_config::AppConfig;

use crate::models::{NotificationError, OutgoingEmail};

/// Delivers a rendered email. Implementations must not retry.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn deliver(&self, email: OutgoingEmail) -> Result<(), NotificationError>;
}

/// SMTP relay transport authenticated with the service account.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender_address: Address,
}

impl SmtpMailer {
    pub fn new(config: &AppConfig) -> Result<Self, NotificationError> {
        let sender_address = parse_address(&config.email_service_user)?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| NotificationError::Transport {
                message: e.to_string(),
            })?
            .credentials(Credentials::new(
                config.email_service_user.clone(),
                config.email_service_pass.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            sender_address,
        })
    }

    fn build_message(&self, email: OutgoingEmail) -> Result<Message, NotificationError> {
        let from = Mailbox::new(Some(email.sender_name), self.sender_address.clone());
        let to = Mailbox::new(None, parse_address(&email.to)?);

        let builder = Message::builder().from(from).to(to).subject(email.subject);

        let message = if email.attachments.is_empty() {
            builder.header(ContentType::TEXT_HTML).body(email.html)
        } else {
            let mut parts = MultiPart::mixed().singlepart(SinglePart::html(email.html));
            for attachment in email.attachments {
                let content_type = ContentType::parse(&attachment.content_type).map_err(|e| {
                    NotificationError::Build {
                        message: format!("{}: {}", attachment.content_type, e),
                    }
                })?;
                parts = parts.singlepart(
                    Attachment::new(attachment.filename).body(attachment.data, content_type),
                );
            }
            builder.multipart(parts)
        };

        message.map_err(|e| NotificationError::Build {
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn deliver(&self, email: OutgoingEmail) -> Result<(), NotificationError> {
        let message = self.build_message(email)?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| NotificationError::Transport {
                message: e.to_string(),
            })?;

        debug!("SMTP relay accepted message: {:?}", response);
        Ok(())
    }
}

fn parse_address(raw: &str) -> Result<Address, NotificationError> {
    raw.trim()
        .parse::<Address>()
        .map_err(|e| NotificationError::InvalidAddress {
            address: raw.to_string(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use shared_config::AppConfig;

    use crate::models::EmailAttachment;

    fn config() -> AppConfig {
        AppConfig::from_lookup(|key| match key {
            "CLIENT_ID" | "CLIENT_SECRET" | "ACCOUNT_ID" => Some("x".to_string()),
            "EMAIL_SERVICE_USER" => Some("citas@example.com".to_string()),
            "EMAIL_SERVICE_PASS" => Some("secret".to_string()),
            "SMTP_HOST" => Some("localhost".to_string()),
            _ => None,
        })
        .unwrap()
    }

    fn email(to: &str) -> OutgoingEmail {
        OutgoingEmail {
            sender_name: "Cita Médica".to_string(),
            to: to.to_string(),
            subject: "Detalles de tu cita médica".to_string(),
            html: "<p>Hola</p>".to_string(),
            attachments: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_build_html_message() {
        let mailer = SmtpMailer::new(&config()).unwrap();
        let message = mailer.build_message(email("paciente@example.com")).unwrap();

        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("To: paciente@example.com"));
        assert!(raw.contains("citas@example.com"));
        assert!(raw.contains("Content-Type: text/html"));
    }

    #[tokio::test]
    async fn test_build_message_with_pdf_attachment() {
        let mailer = SmtpMailer::new(&config()).unwrap();
        let mut outgoing = email("paciente@example.com");
        outgoing.attachments.push(EmailAttachment {
            filename: "Receta-Ana.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            data: b"%PDF-1.4".to_vec(),
        });

        let raw = String::from_utf8(mailer.build_message(outgoing).unwrap().formatted()).unwrap();
        assert!(raw.contains("multipart/mixed"));
        assert!(raw.contains("application/pdf"));
        assert!(raw.contains("Receta-Ana.pdf"));
    }

    #[tokio::test]
    async fn test_invalid_recipient_is_rejected_before_sending() {
        let mailer = SmtpMailer::new(&config()).unwrap();

        assert_matches!(
            mailer.build_message(email("not an address")),
            Err(NotificationError::InvalidAddress { .. })
        );
    }
}
