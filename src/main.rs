use anyhow::Context;
use clap::Parser;
use portfolio_contact::adapters::console::field_error_lines;
use portfolio_contact::domain::model::CONTACT_OPTIONS;
use portfolio_contact::utils::{logger, validation::Validate};
use portfolio_contact::{
    CliConfig, ConsoleModal, ConsoleNotifier, ContactError, ContactFlow, ContactForm,
    EmailJsSender, Rating, SubmitOutcome,
};

fn fail(e: &ContactError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn fail_validation(form: &ContactForm, e: &ContactError) -> ! {
    tracing::error!("❌ {}", e);
    for line in field_error_lines(form) {
        eprintln!("   {}", line);
    }
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_log {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    if cli.list_options {
        for option in CONTACT_OPTIONS {
            println!("{} [{}]", option.title, option.purpose());
            println!("   {}", option.description);
            println!("   --action \"{}\"", option.action);
        }
        return Ok(());
    }

    let purpose = cli.resolve_purpose().unwrap_or_else(|e| fail(&e));
    let rating = Rating::try_from(cli.rating).unwrap_or_else(|e| fail(&e));

    // 載入並驗證配置
    let config = cli.load_contact_config().unwrap_or_else(|e| fail(&e));
    if let Err(e) = config.validate() {
        fail(&e);
    }

    let sender = EmailJsSender::new(config.provider.clone())
        .context("failed to build email provider client")?;
    let flow = ContactFlow::new(sender, ConsoleNotifier, ConsoleModal, config.recipient());

    flow.open(purpose);
    if let Some(purpose_config) = flow.purpose_config() {
        println!("✉️  {}", purpose_config.title);
        println!("   To: {}", flow.recipient());
    }

    flow.set_sender_email(cli.from_email.as_str());
    flow.set_message(cli.message.as_str());
    flow.set_rating(rating);

    if cli.dry_run {
        let form = flow.form().context("contact form was not opened")?;
        let submission = form
            .validate()
            .map_err(ContactError::from)
            .unwrap_or_else(|e| fail_validation(&form, &e));
        println!("{}", serde_json::to_string_pretty(&submission.to_email_params())?);
        tracing::info!("Dry run, nothing sent");
        return Ok(());
    }

    match flow.submit().await {
        Ok(SubmitOutcome::Sent) => {
            flow.close();
            Ok(())
        }
        Ok(outcome) => {
            tracing::warn!("Submission finished without sending: {:?}", outcome);
            Ok(())
        }
        Err(e @ ContactError::Validation(_)) => match flow.form() {
            Some(form) => fail_validation(&form, &e),
            None => fail(&e),
        },
        Err(e) => fail(&e),
    }
}
