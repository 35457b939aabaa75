use brand_namer::config::cli::{Command, GenerateArgs, IndustryCommand, KeywordCommand};
use brand_namer::config::{AppConfig, LogFormat};
use brand_namer::core::export::export_results;
use brand_namer::core::quality::score_name;
use brand_namer::utils::error::BrandError;
use brand_namer::utils::{logger, validation::Validate};
use brand_namer::{BrandService, CliConfig, GenerationRequest, LocalStorage};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入設定檔（不存在時使用預設值）
    let config = match AppConfig::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", cli.config.display(), e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(e.severity().exit_code());
        }
    };

    // 初始化日誌
    let verbose = cli.verbose || config.logging.verbose;
    if cli.json_logs || config.logging.format == LogFormat::Json {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting brand-namer");
    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.severity().exit_code());
    }

    if let Err(e) = run(&cli, &config).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = e.severity().exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(cli: &CliConfig, config: &AppConfig) -> Result<(), BrandError> {
    let service = brand_namer::app::build_service(config).await?;

    match &cli.command {
        Command::Generate(args) => generate(&service, config, args).await,
        Command::Industries(command) => industries(&service, command).await,
        Command::Keywords(command) => keywords(&service, command).await,
    }
}

async fn generate(
    service: &BrandService,
    config: &AppConfig,
    args: &GenerateArgs,
) -> Result<(), BrandError> {
    let mut request = GenerationRequest::new(args.industry_id.clone(), args.words)
        .with_input_text(args.text.clone());
    if let Some(prefix) = args.prefix.as_ref().or(config.generator.default_prefix.as_ref()) {
        request = request.with_prefix(prefix.clone());
    }
    if let Some(separator) = &args.separator {
        request = request.with_separator(separator.clone());
    }

    let mut rng = match args.seed.or(config.generator.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let response = service.generate(&request, &mut rng).await?;

    for result in &response.data {
        if args.scores {
            println!("{:>3}  {}", score_name(&result.name), result.full_name);
        } else {
            println!("{}", result.full_name);
        }
    }
    println!("✅ {} names generated", response.total);

    if let Some(output) = &args.output {
        let directory = output
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(|parent| parent.to_path_buf())
            .unwrap_or_else(|| ".".into());
        let file_name = output
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .ok_or_else(|| BrandError::validation("Output path must name a file"))?;

        let storage = LocalStorage::new(directory);
        export_results(&storage, &file_name, &response.data, args.format).await?;
        println!("📁 Output saved to: {}", storage.resolve(&file_name).display());
    }

    Ok(())
}

async fn industries(service: &BrandService, command: &IndustryCommand) -> Result<(), BrandError> {
    match command {
        IndustryCommand::List => {
            let industries = service.list_industries().await?;
            if industries.is_empty() {
                println!("No industries yet");
            }
            for industry in industries {
                match industry.description {
                    Some(description) => {
                        println!("{}\t{}\t{}", industry.id, industry.name, description)
                    }
                    None => println!("{}\t{}", industry.id, industry.name),
                }
            }
        }
        IndustryCommand::Add { name, description } => {
            let industry = service
                .create_industry(name, description.as_deref())
                .await?;
            println!("✅ Created industry {} ({})", industry.name, industry.id);
        }
        IndustryCommand::Update {
            id,
            name,
            description,
        } => {
            let industry = service
                .update_industry(id, name, description.as_deref())
                .await?;
            println!("✅ Updated industry {} ({})", industry.name, industry.id);
        }
        IndustryCommand::Remove { id } => {
            service.delete_industry(id).await?;
            println!("✅ Industry deleted successfully");
        }
    }
    Ok(())
}

async fn keywords(service: &BrandService, command: &KeywordCommand) -> Result<(), BrandError> {
    match command {
        KeywordCommand::List { industry_id } => {
            let keywords = service.list_keywords(industry_id).await?;
            if keywords.is_empty() {
                println!("No keywords for {}", industry_id);
            }
            for keyword in keywords {
                println!("{}\t{}", keyword.id, keyword.keyword);
            }
        }
        KeywordCommand::Add {
            industry_id,
            keyword,
        } => {
            let keyword = service.add_keyword(industry_id, keyword).await?;
            println!("✅ Added keyword {} ({})", keyword.keyword, keyword.id);
        }
        KeywordCommand::Import {
            industry_id,
            file,
            text,
        } => {
            let content = match (file, text) {
                (Some(path), _) => tokio::fs::read_to_string(path).await?,
                (None, Some(text)) => text.clone(),
                (None, None) => String::new(),
            };
            let report = service.import_keywords(industry_id, &content).await?;
            if report.failed > 0 {
                println!(
                    "✅ {} keywords added, {} failed",
                    report.added, report.failed
                );
            } else {
                println!("✅ {} keywords added", report.added);
            }
        }
        KeywordCommand::Remove { id } => {
            service.delete_keyword(id).await?;
            println!("✅ Keyword deleted successfully");
        }
    }
    Ok(())
}
