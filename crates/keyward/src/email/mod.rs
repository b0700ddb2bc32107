use std::sync::{Arc, Mutex};

use handlebars::Handlebars;
use lettre::message::{header, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use serde_json::Value;

use crate::config::{SmtpSettings, Template};
use crate::{Error, Result, Success};

lazy_static! {
    static ref HANDLEBARS: Handlebars<'static> = Handlebars::new();
}

/// A rendered email ready for dispatch
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Mail {
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: Option<String>,
}

impl Template {
    /// Render this template into a dispatchable [`Mail`]
    pub fn render(&self, to: &str, variables: Value) -> Result<Mail> {
        Ok(Mail {
            to: to.to_string(),
            subject: self.title.clone(),
            text: HANDLEBARS
                .render_template(&self.text, &variables)
                .map_err(|_| Error::RenderFail)?,
            html: match &self.html {
                Some(html) => Some(
                    HANDLEBARS
                        .render_template(html, &variables)
                        .map_err(|_| Error::RenderFail)?,
                ),
                None => None,
            },
        })
    }
}

/// Outbound mail transport
///
/// A collaborator like [`crate::Database`]: flows hand it a rendered
/// mail and treat any failure as non-fatal, since the code the mail
/// carries is already durably stored and can be resent.
#[derive(Clone)]
pub enum Mailer {
    /// Deliver over SMTP
    Smtp(SmtpSettings),
    /// Collect into an in-process mailbox, for tests
    Capture(CaptureMailer),
    /// Drop after logging the envelope
    Log,
}

impl Default for Mailer {
    fn default() -> Self {
        Mailer::Log
    }
}

impl Mailer {
    pub fn send(&self, mail: Mail) -> Success {
        match self {
            Mailer::Smtp(settings) => settings.send(mail),
            Mailer::Capture(capture) => {
                capture.push(mail);
                Ok(())
            }
            Mailer::Log => {
                info!("dropping email to {}: {}", mail.to, mail.subject);
                Ok(())
            }
        }
    }
}

fn generate_multipart(text: &str, html: Option<&str>) -> MultiPart {
    if let Some(html) = html {
        MultiPart::alternative()
            .singlepart(
                SinglePart::builder()
                    .header(header::ContentType::TEXT_PLAIN)
                    .body(text.to_string()),
            )
            .singlepart(
                SinglePart::builder()
                    .header(header::ContentType::TEXT_HTML)
                    .body(html.to_string()),
            )
    } else {
        MultiPart::mixed().singlepart(
            SinglePart::builder()
                .header(header::ContentType::TEXT_PLAIN)
                .body(text.to_string()),
        )
    }
}

impl SmtpSettings {
    fn send(&self, mail: Mail) -> Success {
        let mut builder = Message::builder()
            .from(self.from.parse().map_err(|_| Error::InternalError)?)
            .to(mail
                .to
                .parse()
                .map_err(|_| Error::IncorrectData { with: "email" })?)
            .subject(mail.subject.clone());

        if let Some(reply_to) = &self.reply_to {
            builder = builder.reply_to(reply_to.parse().map_err(|_| Error::InternalError)?);
        }

        let message = builder
            .multipart(generate_multipart(&mail.text, mail.html.as_deref()))
            .map_err(|_| Error::InternalError)?;

        self.transport()?
            .send(&message)
            .map_err(|_| Error::EmailFailed)?;

        Ok(())
    }

    fn transport(&self) -> Result<SmtpTransport> {
        let mut builder = if self.use_tls.unwrap_or(true) {
            SmtpTransport::relay(&self.host).map_err(|_| Error::EmailFailed)?
        } else {
            SmtpTransport::builder_dangerous(&self.host)
        };

        builder = builder.credentials(Credentials::new(
            self.username.clone(),
            self.password.clone(),
        ));

        if let Some(port) = self.port {
            builder = builder.port(port as u16);
        }

        Ok(builder.build())
    }
}

/// In-process mailbox used by the test bootstrap
#[derive(Clone, Default)]
pub struct CaptureMailer(Arc<Mutex<Vec<Mail>>>);

impl CaptureMailer {
    fn push(&self, mail: Mail) {
        self.0.lock().expect("capture mailbox poisoned").push(mail)
    }

    /// Remove and return the most recent mail addressed to `mailbox`
    pub fn take(&self, mailbox: &str) -> Option<Mail> {
        let mut sent = self.0.lock().expect("capture mailbox poisoned");

        sent.iter()
            .rposition(|mail| mail.to == mailbox)
            .map(|position| sent.remove(position))
    }

    pub fn sent(&self) -> Vec<Mail> {
        self.0.lock().expect("capture mailbox poisoned").clone()
    }
}
