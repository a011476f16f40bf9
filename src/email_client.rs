use crate::domain::SanitizedPayload;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::borrow::Cow;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum EmailClientError {
    #[error("Invalid email provider base url")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("Failed to build the HTTP client")]
    HttpClient(#[from] reqwest::Error),
}

/// Client for the EmailJS REST API.
#[derive(Debug)]
pub struct EmailClient {
    http_client: reqwest::Client,
    endpoint: Url,
    public_key: SecretString,
    access_token: Option<SecretString>,
}

impl EmailClient {
    pub fn new(
        base_url: &str,
        public_key: SecretString,
        access_token: Option<SecretString>,
        timeout_duration: std::time::Duration,
    ) -> Result<Self, EmailClientError> {
        let endpoint = Url::parse(base_url)?.join("api/v1.0/email/send")?;
        let http_client = reqwest::Client::builder()
            .timeout(timeout_duration)
            .build()?;

        Ok(Self {
            http_client,
            endpoint,
            public_key,
            access_token,
        })
    }

    #[tracing::instrument(
        name = "Dispatching a contact request to the email provider",
        skip(self, template_params)
    )]
    pub async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        template_params: &SanitizedPayload,
    ) -> Result<(), reqwest::Error> {
        let request_body = SendEmailRequest {
            service_id: service_id.into(),
            template_id: template_id.into(),
            user_id: self.public_key.expose_secret().into(),
            access_token: self
                .access_token
                .as_ref()
                .map(|token| token.expose_secret().into()),
            template_params: Cow::Borrowed(template_params),
        };
        self.http_client
            .post(self.endpoint.clone())
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[derive(Serialize, Debug)]
struct SendEmailRequest<'a> {
    service_id: Cow<'a, str>,
    template_id: Cow<'a, str>,
    user_id: Cow<'a, str>,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<Cow<'a, str>>,
    template_params: Cow<'a, SanitizedPayload>,
}
