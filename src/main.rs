use anyhow::Context;
use clap::Parser;
use pallet_planner::core::{ConfigProvider, Pipeline, StackPlan};
use pallet_planner::utils::{logger, validation::Validate};
use pallet_planner::{CliConfig, LocalStorage, PlanEngine, PlanError, PlanningPipeline, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting pallet-planner");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let dry_run = cli.dry_run;
    let result = match cli.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let mut config = TomlConfig::from_file(&path)
                .with_context(|| format!("Failed to load config file '{}'", path))?;
            config.apply_cli_overrides(&cli);
            execute(config, dry_run).await
        }
        None => execute(cli, dry_run).await,
    };

    match result {
        Ok(output_path) => {
            if !dry_run {
                tracing::info!("✅ Stacking plan completed successfully!");
                println!("✅ Stacking plan completed successfully!");
                println!("📁 Output saved to: {}", output_path);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Planning failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

async fn execute<C: ConfigProvider + Validate>(config: C, dry_run: bool) -> Result<String, PlanError> {
    config.validate()?;
    tracing::info!("✅ Configuration validated");
    display_config_summary(&config);

    // 讀取與輸出路徑都以目前目錄為起點
    let storage = LocalStorage::new(".".to_string());
    let pipeline = PlanningPipeline::new(storage, config);

    if dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        perform_dry_run(&pipeline).await?;
        return Ok(String::new());
    }

    PlanEngine::new(pipeline).run().await
}

fn display_config_summary<C: ConfigProvider>(config: &C) {
    tracing::info!("📋 Plan: {}", config.plan_name());
    tracing::info!("   Input: {}", config.input_path());
    match config.pallet_count() {
        Some(count) => tracing::info!("   Pallets: {}", count),
        None => tracing::info!("   Pallets: single stack"),
    }
    tracing::info!(
        "   Output: {} ({})",
        config.output_path(),
        config.output_formats().join(", ")
    );
    if config.archive() {
        tracing::info!("   Archive: {}.zip", config.output_stem());
    }
}

async fn perform_dry_run<C: ConfigProvider>(
    pipeline: &PlanningPipeline<LocalStorage, C>,
) -> Result<(), PlanError> {
    let panels = pipeline.extract().await?;
    let plan = pipeline.build_plan(&panels);

    println!("🔍 Dry run: {} panels", plan.panel_count());
    match &plan {
        StackPlan::Single(stack) => {
            for (i, panel) in stack.iter().enumerate() {
                println!("  {:>3}. {}", i + 1, panel.label);
            }
        }
        StackPlan::Pallets(pallets) => {
            for (p, pallet) in pallets.iter().enumerate() {
                println!("  Pallet {} ({} panels)", p + 1, pallet.len());
                for (i, panel) in pallet.iter().enumerate() {
                    println!("    {:>3}. {}", i + 1, panel.label);
                }
            }
        }
    }

    Ok(())
}
