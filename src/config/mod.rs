pub mod env;
pub mod toml_config;

pub use toml_config::{ContactConfig, ProviderConfig, RecipientConfig};

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-contact")]
#[command(about = "Send a portfolio contact message through the email provider")]
pub struct CliConfig {
    /// Path to TOML configuration file (falls back to EMAILJS_* environment variables)
    #[arg(short, long)]
    pub config: Option<String>,

    /// general, opportunities or collaboration
    #[arg(long, default_value = "general", conflicts_with = "action")]
    pub purpose: String,

    /// Contact card action label, e.g. "View Opportunities"
    #[arg(long)]
    pub action: Option<String>,

    /// Your email address
    #[arg(long = "from", default_value = "")]
    pub from_email: String,

    #[arg(short, long, default_value = "")]
    pub message: String,

    /// Star rating 1-5, 0 to leave unrated
    #[arg(short, long, default_value = "0")]
    pub rating: u8,

    /// Validate and print the payload without sending
    #[arg(long)]
    pub dry_run: bool,

    /// Print the contact options and exit
    #[arg(long)]
    pub list_options: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit JSON log lines")]
    pub json_log: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn resolve_purpose(&self) -> crate::utils::error::Result<crate::domain::model::Purpose> {
        match &self.action {
            Some(label) => Ok(crate::domain::model::Purpose::from_action_label(label)),
            None => self.purpose.parse(),
        }
    }

    pub fn load_contact_config(&self) -> crate::utils::error::Result<ContactConfig> {
        match &self.config {
            Some(path) => ContactConfig::from_file(path),
            None => ContactConfig::from_env(),
        }
    }
}
