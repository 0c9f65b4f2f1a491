use crate::adapters::emailjs::DEFAULT_ENDPOINT;
use crate::utils::error::{ContactError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_recipient, validate_resolved,
    validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern compiles"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    pub provider: ProviderConfig,
    pub contact: RecipientConfig,
}

/// 郵件服務商憑證與連線設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub endpoint: Option<String>,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub access_token: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipientConfig {
    pub recipient: String,
}

impl ProviderConfig {
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }
}

impl ContactConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ContactError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ContactError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${EMAILJS_PUBLIC_KEY})，未設定者保留原文
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn recipient(&self) -> &str {
        &self.contact.recipient
    }
}

impl Validate for ProviderConfig {
    fn validate(&self) -> Result<()> {
        validate_url("provider.endpoint", self.endpoint())?;

        for (field, value) in [
            ("provider.service_id", &self.service_id),
            ("provider.template_id", &self.template_id),
            ("provider.public_key", &self.public_key),
        ] {
            validate_non_empty_string(field, value)?;
            validate_resolved(field, value)?;
        }

        if let Some(token) = &self.access_token {
            validate_resolved("provider.access_token", token)?;
        }

        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("provider.timeout_seconds", timeout, 1)?;
        }

        Ok(())
    }
}

impl Validate for ContactConfig {
    fn validate(&self) -> Result<()> {
        self.provider.validate()?;
        validate_recipient("contact.recipient", &self.contact.recipient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC: &str = r#"
[provider]
service_id = "service_test"
template_id = "template_test"
public_key = "public_test"

[contact]
recipient = "hello@example.com"
"#;

    #[test]
    fn test_parse_basic_toml_config() {
        let config = ContactConfig::from_toml_str(BASIC).unwrap();

        assert_eq!(config.provider.service_id, "service_test");
        assert_eq!(config.provider.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.provider.access_token, None);
        assert_eq!(config.provider.timeout_seconds, None);
        assert_eq!(config.recipient(), "hello@example.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PORTFOLIO_CONTACT_TEST_TEMPLATE", "template_from_env");

        let toml_content = r#"
[provider]
service_id = "service_test"
template_id = "${PORTFOLIO_CONTACT_TEST_TEMPLATE}"
public_key = "public_test"

[contact]
recipient = "hello@example.com"
"#;

        let config = ContactConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.provider.template_id, "template_from_env");

        std::env::remove_var("PORTFOLIO_CONTACT_TEST_TEMPLATE");
    }

    #[test]
    fn test_unresolved_placeholder_fails_validation() {
        let toml_content = r#"
[provider]
service_id = "${PORTFOLIO_CONTACT_TEST_NEVER_SET}"
template_id = "template_test"
public_key = "public_test"

[contact]
recipient = "hello@example.com"
"#;

        let config = ContactConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ContactError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[provider]
endpoint = "invalid-url"
service_id = "service_test"
template_id = "template_test"
public_key = "public_test"

[contact]
recipient = "hello@example.com"
"#;
        let config = ContactConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let mut config = ContactConfig::from_toml_str(BASIC).unwrap();
        config.contact.recipient = "nobody".to_string();
        assert!(config.validate().is_err());

        let mut config = ContactConfig::from_toml_str(BASIC).unwrap();
        config.provider.timeout_seconds = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_section_is_parse_error() {
        let result = ContactConfig::from_toml_str("[provider]\nservice_id = \"x\"\n");
        assert!(matches!(
            result,
            Err(ContactError::ConfigValidationError { ref field, .. }) if field == "toml_parsing"
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC.as_bytes()).unwrap();

        let config = ContactConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.provider.public_key, "public_test");
    }
}
