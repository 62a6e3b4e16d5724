use anyhow::Context as _;
use reqwest::Client;
use serde::Serialize;

use crate::domain::repository::CredentialMailer;
use crate::domain::types::FarmerCredentialMail;
use crate::error::AccountsServiceError;

/// Credential mailer backed by an HTTP mail API (bearer-key auth).
#[derive(Clone)]
pub struct HttpCredentialMailer {
    client: Client,
    api_url: String,
    api_key: String,
    from: String,
}

impl HttpCredentialMailer {
    pub fn new(api_url: String, api_key: String, from: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
            api_key,
            from,
        }
    }
}

#[derive(Serialize)]
struct MailPayload {
    from_addr: String,
    to_addr: String,
    subject: String,
    text_body: String,
}

const CREDENTIAL_MAIL_SUBJECT: &str = "Your Farmer Account Credentials";

/// Plaintext body of the credential mail. The only sink for the plaintext
/// temporary password.
fn credential_mail_body(mail: &FarmerCredentialMail) -> String {
    format!(
        "Hello {first} {last},\n\
         \n\
         Your farmer account has been created by {business}!\n\
         \n\
         Login Details:\n\
         Email: {email}\n\
         Temporary Password: {password}\n\
         \n\
         Please log in and reset your password for security.\n\
         \n\
         Login URL: {login_url}\n\
         \n\
         Best regards,\n\
         {business}\n",
        first = mail.first_name,
        last = mail.last_name,
        business = mail.business_name,
        email = mail.to,
        password = mail.temp_password,
        login_url = mail.login_url,
    )
}

impl CredentialMailer for HttpCredentialMailer {
    async fn send_farmer_credentials(
        &self,
        mail: &FarmerCredentialMail,
    ) -> Result<(), AccountsServiceError> {
        let payload = MailPayload {
            from_addr: self.from.clone(),
            to_addr: mail.to.clone(),
            subject: CREDENTIAL_MAIL_SUBJECT.to_owned(),
            text_body: credential_mail_body(mail),
        };

        let res = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&payload)
            .send()
            .await
            .context("send credential mail")?;

        if !res.status().is_success() {
            return Err(AccountsServiceError::Internal(anyhow::anyhow!(
                "mail API returned {}",
                res.status()
            )));
        }
        Ok(())
    }
}
