use catalog_view::app::session::Session;
use catalog_view::core::options::category_options;
use catalog_view::utils::error::{CatalogError, ErrorSeverity};
use catalog_view::utils::{logger, validation::Validate};
use catalog_view::{CatalogController, CliConfig};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting catalog-view");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli).await {
        tracing::error!(
            "❌ catalog-view failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

async fn run(cli: &CliConfig) -> Result<(), CatalogError> {
    let settings = cli.resolve()?;
    settings.validate()?;
    tracing::info!("✅ Configuration loaded and validated");

    // 載入目錄; 失敗即為啟動失敗
    let source = settings.catalog_source();
    tracing::info!("📁 Loading catalog from {}", source.describe());
    let catalog = source.load()?;
    tracing::info!(
        "Catalog ready: {} categories, {} items",
        catalog.category_count(),
        catalog.item_count()
    );

    if cli.list_categories {
        for option in category_options(&catalog) {
            println!("{}\t{}", option.value, option.item_count);
        }
        return Ok(());
    }

    let renderer = settings.build_renderer()?;
    let controller = CatalogController::new(catalog, renderer);
    let mut session = Session::new(controller, settings.selection.clone());

    session.start()?;

    if cli.interactive {
        tracing::info!("Interactive mode, type 'help' for commands");
        let input = tokio::io::BufReader::new(tokio::io::stdin());
        let mut out = std::io::stdout();
        let summary = session.run(input, &mut out).await?;
        tracing::info!(
            "Session ended after {} commands, {} renders",
            summary.commands,
            summary.refreshes
        );
    }

    Ok(())
}
