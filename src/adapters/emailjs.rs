use crate::config::ProviderConfig;
use crate::domain::model::EmailParams;
use crate::domain::ports::EmailSender;
use crate::utils::error::{DeliveryError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// EmailJS REST API 請求內容
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a EmailParams,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub struct EmailJsSender {
    client: Client,
    config: ProviderConfig,
}

impl EmailJsSender {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build().map_err(DeliveryError::Network)?;

        Ok(Self { client, config })
    }

    pub fn endpoint(&self) -> &str {
        self.config.endpoint()
    }
}

#[async_trait]
impl EmailSender for EmailJsSender {
    async fn send(&self, params: &EmailParams) -> std::result::Result<(), DeliveryError> {
        let request = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: params,
            access_token: self.config.access_token.as_deref(),
        };

        tracing::debug!("Posting contact message to: {}", self.endpoint());
        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Email provider response status: {}", status);

        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!("Email provider rejected message: HTTP {} {}", status.as_u16(), body);
        Err(DeliveryError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
