use clap::Parser;
use sara_scorer::app::{batch, interactive::{render_items, Interactive}};
use sara_scorer::config::Command;
use sara_scorer::core::{ConfigProvider, SARA_ITEMS};
use sara_scorer::domain::guidance::guidance_for;
use sara_scorer::utils::error::{ErrorSeverity, ScorerError};
use sara_scorer::utils::{logger, validation::Validate};
use sara_scorer::{CliConfig, CsvExporter, LocalStorage, ScorerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve().and_then(|config| config.validate().map(|()| config)) {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(cli.verbose, None);
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    // 初始化日誌
    if config.logging.json {
        logger::init_json_logger(cli.verbose, config.logging.level.as_deref());
    } else {
        logger::init_cli_logger(cli.verbose, config.logging.level.as_deref());
    }

    tracing::info!("Starting sara-scorer");
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = run(cli.command.unwrap_or(Command::Interactive), &config).await {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());
        std::process::exit(exit_code(&e));
    }

    Ok(())
}

async fn run(command: Command, config: &ScorerConfig) -> Result<(), ScorerError> {
    let storage = LocalStorage::new(config.output_dir().to_string());
    let exporter = CsvExporter::with_prefix(storage, config.filename_prefix());

    match command {
        Command::Items => render_items(&mut std::io::stdout().lock(), &SARA_ITEMS)?,
        Command::Guide { id } => {
            let text = guidance_for(&id);
            if text.is_empty() {
                tracing::warn!("No guidance registered for item '{}'", id);
            } else {
                println!("{}", text);
            }
        }
        Command::Export { scores, note } => {
            let report = batch::export_scores(&exporter, &scores, &note).await?;
            println!("✅ 合計 {} を出力しました", report.total);
            println!("📁 {}", report.path);
        }
        Command::Interactive => {
            let stdin = std::io::stdin();
            let mut app = Interactive::new(exporter);
            app.run(stdin.lock(), std::io::stdout()).await?;
        }
    }

    Ok(())
}

fn exit_code(e: &ScorerError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 2,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
