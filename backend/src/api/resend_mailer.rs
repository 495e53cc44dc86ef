use std::sync::Arc;

use futures::future::BoxFuture;
use resend_rs::types::CreateEmailBaseOptions;
use resend_rs::Resend;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("mail provider rejected the message: {0}")]
    Provider(String),
}

/// Delivers a rendered notification and returns the provider's message id.
#[cfg_attr(test, mockall::automock)]
pub trait Mailer: Send + Sync {
    fn send(&self, email: OutboundEmail) -> BoxFuture<'static, Result<String, MailError>>;
}

pub struct ResendMailer {
    client: Arc<Resend>,
}

impl ResendMailer {
    pub fn new(api_key: &str) -> Self {
        Self {
            client: Arc::new(Resend::new(api_key)),
        }
    }
}

impl Mailer for ResendMailer {
    fn send(&self, email: OutboundEmail) -> BoxFuture<'static, Result<String, MailError>> {
        let client = self.client.clone();
        Box::pin(async move {
            let options = CreateEmailBaseOptions::new(email.from, [email.to], email.subject)
                .with_html(&email.html);

            let sent = client
                .emails
                .send(options)
                .await
                .map_err(|e| MailError::Provider(e.to_string()))?;

            tracing::debug!("Resend accepted email {}", sent.id.to_string());
            Ok(sent.id.to_string())
        })
    }
}
