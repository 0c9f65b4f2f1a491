use crate::config::toml_config::{ContactConfig, ProviderConfig, RecipientConfig};
use crate::utils::error::{ContactError, Result};
use std::env;

fn required(name: &str) -> Result<String> {
    env::var(name).map_err(|_| ContactError::MissingConfigError {
        field: name.to_string(),
    })
}

impl ContactConfig {
    /// 只靠環境變數建立配置 (沒有設定檔時使用)
    pub fn from_env() -> Result<Self> {
        let timeout_seconds = match env::var("EMAILJS_TIMEOUT_SECONDS") {
            Ok(raw) => Some(raw.parse().map_err(|_| ContactError::InvalidConfigValueError {
                field: "EMAILJS_TIMEOUT_SECONDS".to_string(),
                value: raw.clone(),
                reason: "Expected a whole number of seconds".to_string(),
            })?),
            Err(_) => None,
        };

        Ok(Self {
            provider: ProviderConfig {
                endpoint: env::var("EMAILJS_ENDPOINT").ok(),
                service_id: required("EMAILJS_SERVICE_ID")?,
                template_id: required("EMAILJS_TEMPLATE_ID")?,
                public_key: required("EMAILJS_PUBLIC_KEY")?,
                access_token: env::var("EMAILJS_ACCESS_TOKEN").ok(),
                timeout_seconds,
            },
            contact: RecipientConfig {
                recipient: required("CONTACT_RECIPIENT")?,
            },
        })
    }
}
