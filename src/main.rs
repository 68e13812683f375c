use clap::Parser;
use dealbot::app::ChatLoop;
use dealbot::utils::error::{ErrorSeverity, NegotiationError};
use dealbot::utils::{logger, validation::Validate};
use dealbot::{CliConfig, Negotiator};
use std::sync::Arc;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting dealbot");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(e);
    }

    let catalog = match config.load_catalog() {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => exit_with(e),
    };
    let scorer = match config.build_scorer() {
        Ok(scorer) => scorer,
        Err(e) => exit_with(e),
    };

    let mut negotiator = match config.seed {
        Some(seed) => Negotiator::seeded(catalog, scorer, seed),
        None => Negotiator::new(catalog, scorer),
    };
    let session = match negotiator.start_session(&config.product) {
        Ok(session) => session,
        Err(e) => exit_with(e),
    };

    let mut stdout = tokio::io::stdout();
    let mut chat = ChatLoop::new(&mut negotiator, session, config.json);

    let result = if config.messages.is_empty() {
        chat.run(BufReader::new(tokio::io::stdin()), &mut stdout).await
    } else {
        chat.run_messages(&config.messages, &mut stdout).await
    };

    if let Err(e) = result {
        exit_with(e);
    }

    tracing::info!(
        "✅ Session ended with {} transcript entries",
        chat.session().transcript().len()
    );
    Ok(())
}

fn exit_with(e: NegotiationError) -> ! {
    tracing::error!(
        "❌ dealbot failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
