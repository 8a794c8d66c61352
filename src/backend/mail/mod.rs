//! Outgoing Mail
//!
//! Password reset codes are delivered by a [`Mailer`]:
//!
//! - **`Smtp`** - `lettre` async SMTP transport with STARTTLS and credentials
//! - **`Log`** - writes the mail to the tracing log (no SMTP configured)
//! - **`Memory`** - keeps sent mail in a shared vector for tests

use std::sync::{Arc, Mutex, PoisonError};

use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::backend::error::BackendError;
use crate::backend::server::config::SmtpConfig;

/// A plain-text mail ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl OutgoingMail {
    pub fn password_reset(to: &str, reset_code: &str) -> Self {
        Self {
            to: to.to_string(),
            subject: "Dreams password reset".to_string(),
            body: format!(
                "A password reset was requested for your Dreams account.\n\n\
                 Your reset code is: {}\n\n\
                 If you did not request this, you can ignore this email.",
                reset_code
            ),
        }
    }
}

#[derive(Clone)]
pub enum Mailer {
    Smtp {
        transport: Arc<AsyncSmtpTransport<Tokio1Executor>>,
        from: Mailbox,
    },
    Log,
    Memory(Arc<Mutex<Vec<OutgoingMail>>>),
}

impl Mailer {
    /// Build an SMTP mailer when configured, otherwise a logging one
    pub fn from_config(smtp: Option<&SmtpConfig>) -> Result<Self, BackendError> {
        let Some(smtp) = smtp else {
            tracing::info!("SMTP not configured, reset codes will be logged");
            return Ok(Self::Log);
        };

        let from: Mailbox = smtp
            .from
            .parse()
            .map_err(|e| BackendError::mail(format!("Invalid sender address {}: {}", smtp.from, e)))?;
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp.host)
            .map_err(|e| BackendError::mail(format!("Invalid SMTP relay {}: {}", smtp.host, e)))?
            .port(smtp.port)
            .credentials(Credentials::new(smtp.username.clone(), smtp.password.clone()))
            .build();

        tracing::info!("SMTP mailer configured for {}:{}", smtp.host, smtp.port);
        Ok(Self::Smtp {
            transport: Arc::new(transport),
            from,
        })
    }

    pub fn memory() -> Self {
        Self::Memory(Arc::new(Mutex::new(Vec::new())))
    }

    /// Deliver one mail
    ///
    /// # Errors
    ///
    /// Returns `BackendError::MailError` if the recipient address is invalid
    /// or the SMTP server rejects the mail.
    pub async fn send(&self, mail: OutgoingMail) -> Result<(), BackendError> {
        match self {
            Self::Smtp { transport, from } => {
                let to: Mailbox = mail
                    .to
                    .parse()
                    .map_err(|e| BackendError::mail(format!("Invalid recipient {}: {}", mail.to, e)))?;
                let message = Message::builder()
                    .from(from.clone())
                    .to(to)
                    .subject(mail.subject)
                    .header(ContentType::TEXT_PLAIN)
                    .body(mail.body)
                    .map_err(|e| BackendError::mail(format!("Failed to build mail: {}", e)))?;
                transport
                    .send(message)
                    .await
                    .map_err(|e| BackendError::mail(format!("SMTP delivery failed: {}", e)))?;
                tracing::info!("Mail sent to {}", mail.to);
            }
            Self::Log => {
                tracing::info!(to = %mail.to, subject = %mail.subject, "{}", mail.body);
            }
            Self::Memory(outbox) => {
                outbox
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(mail);
            }
        }
        Ok(())
    }

    /// Mail captured by a `Memory` mailer (empty for the others)
    pub fn sent(&self) -> Vec<OutgoingMail> {
        match self {
            Self::Memory(outbox) => outbox
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone(),
            _ => Vec::new(),
        }
    }
}
