use lettre::message::{MultiPart, SinglePart, header};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::{info, instrument};

use crate::config::email::EmailConfig;
use crate::utils::errors::AppError;

pub struct EmailService {
    config: EmailConfig,
}

impl EmailService {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Send an invitation email with a confirm link.
    ///
    /// When SMTP is disabled (local development, tests) the link is logged
    /// instead of sent so the invite flow can still be exercised end to end.
    #[instrument(skip(self, invite_link))]
    pub async fn send_invite_email(
        &self,
        to_email: &str,
        invite_link: &str,
        lang: &str,
    ) -> Result<(), AppError> {
        if !self.config.enabled {
            info!(to_email, invite_link, "SMTP disabled, skipping invite email");
            return Ok(());
        }

        let (subject, text_body) = invite_copy(lang, invite_link);
        let html_body = self.invite_template(lang, invite_link);

        self.send_email(to_email, subject, &text_body, &html_body)
            .await
    }

    #[instrument(skip(self, html_body, text_body))]
    async fn send_email(
        &self,
        to_email: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> Result<(), AppError> {
        let from = format!("{} <{}>", self.config.from_name, self.config.from_email);

        let email = Message::builder()
            .from(
                from.parse()
                    .map_err(|e| AppError::internal(anyhow::anyhow!("Invalid from email: {}", e)))?,
            )
            .to(to_email
                .parse()
                .map_err(|e| AppError::internal(anyhow::anyhow!("Invalid to email: {}", e)))?)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_PLAIN)
                            .body(text_body.to_string()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_HTML)
                            .body(html_body.to_string()),
                    ),
            )
            .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to build email: {}", e)))?;

        let mailer = if self.config.smtp_username.is_empty() {
            SmtpTransport::builder_dangerous(&self.config.smtp_host)
                .port(self.config.smtp_port)
                .build()
        } else {
            let creds = Credentials::new(
                self.config.smtp_username.clone(),
                self.config.smtp_password.clone(),
            );

            SmtpTransport::relay(&self.config.smtp_host)
                .map_err(|e| {
                    AppError::internal(anyhow::anyhow!("Failed to create SMTP relay: {}", e))
                })?
                .port(self.config.smtp_port)
                .credentials(creds)
                .build()
        };

        tokio::task::spawn_blocking(move || mailer.send(&email))
            .await
            .map_err(|e| AppError::internal(anyhow::anyhow!("Task join error: {}", e)))?
            .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to send email: {}", e)))?;

        Ok(())
    }

    fn invite_template(&self, lang: &str, invite_link: &str) -> String {
        let (headline, body, button) = match lang {
            "es" => (
                "Te han invitado a Fablingo",
                "Crea historias y aprende idiomas con tus personajes favoritos. Pulsa el bot\u{f3}n para activar tu cuenta:",
                "Activar cuenta",
            ),
            _ => (
                "You have been invited to Fablingo",
                "Create stories and learn languages with your favorite characters. Click the button to activate your account:",
                "Activate account",
            ),
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{headline}</title>
</head>
<body style="margin: 0; padding: 0; font-family: Arial, sans-serif; background-color: #f4f4f4;">
    <table width="100%" cellpadding="0" cellspacing="0" style="background-color: #f4f4f4; padding: 20px;">
        <tr>
            <td align="center">
                <table width="600" cellpadding="0" cellspacing="0" style="background-color: #ffffff; border-radius: 8px; overflow: hidden;">
                    <tr>
                        <td style="background-color: #0ea5e9; padding: 30px; text-align: center;">
                            <h1 style="margin: 0; color: #ffffff; font-size: 28px;">Fablingo</h1>
                        </td>
                    </tr>
                    <tr>
                        <td style="padding: 40px 30px;">
                            <h2 style="margin: 0 0 20px 0; color: #333333; font-size: 24px;">{headline}</h2>
                            <p style="margin: 0 0 20px 0; color: #666666; font-size: 16px; line-height: 1.5;">{body}</p>
                            <table width="100%" cellpadding="0" cellspacing="0" style="margin: 30px 0;">
                                <tr>
                                    <td align="center">
                                        <a href="{invite_link}" style="display: inline-block; padding: 14px 40px; background-color: #0ea5e9; color: #ffffff; text-decoration: none; border-radius: 6px; font-size: 16px; font-weight: bold;">{button}</a>
                                    </td>
                                </tr>
                            </table>
                            <p style="margin: 0 0 20px 0; color: #0ea5e9; font-size: 14px; word-break: break-all;">{invite_link}</p>
                        </td>
                    </tr>
                    <tr>
                        <td style="background-color: #f8f9fa; padding: 20px 30px; text-align: center; border-top: 1px solid #e9ecef;">
                            <p style="margin: 0; color: #999999; font-size: 12px;">
                                This is an automated email from Fablingo. Please do not reply.
                            </p>
                        </td>
                    </tr>
                </table>
            </td>
        </tr>
    </table>
</body>
</html>"#
        )
    }
}

fn invite_copy(lang: &str, invite_link: &str) -> (&'static str, String) {
    match lang {
        "es" => (
            "Tu invitaci\u{f3}n a Fablingo",
            format!(
                "Te han invitado a Fablingo.\n\n\
                 Activa tu cuenta con este enlace:\n{}\n\n\
                 El enlace caduca en 7 d\u{ed}as.",
                invite_link
            ),
        ),
        _ => (
            "Your Fablingo invitation",
            format!(
                "You have been invited to Fablingo.\n\n\
                 Activate your account with this link:\n{}\n\n\
                 The link expires in 7 days.",
                invite_link
            ),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invite_copy_localizes_subject() {
        let (subject_es, body_es) = invite_copy("es", "https://example.com/x");
        let (subject_en, body_en) = invite_copy("fr", "https://example.com/x");

        assert!(subject_es.contains("invitaci\u{f3}n"));
        assert!(subject_en.contains("invitation"));
        assert!(body_es.contains("https://example.com/x"));
        assert!(body_en.contains("https://example.com/x"));
    }
}
