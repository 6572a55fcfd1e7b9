use anyhow::Result;
use clap::Parser;
use log::{ debug, info };

use classroom::config::ClassroomConfig;
use classroom::implementations::catalog::{ DemoCatalog, SQUARE_DEMO };
use classroom::traits::Demo;

mod cli;
use cli::{ ClassroomCli, Commands };
use cli::commands::run::{ self, parse_output_format };

fn main() {
    if let Err(e) = try_main() {
        cli::ui::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    // Parse the command line arguments
    let cli = ClassroomCli::parse();

    // A missing .env file is fine
    dotenv::dotenv().ok();

    let (mut config, config_source) = ClassroomConfig::load(cli.config.as_deref())?;

    // Command line flags win over file and environment
    if cli.enable_square {
        config.enable_square = true;
    }
    if cli.seed.is_some() {
        config.grade_seed = cli.seed;
    }

    let log_level = cli.log_level
        .clone()
        .or_else(|| config.log_level.clone())
        .unwrap_or_else(|| "info".to_string());
    setup_logging(&log_level);
    debug!("Loaded config from {}", config_source);
    debug!("Resolved configuration: {:?}", config);

    let format = parse_output_format(&cli.output_format)?;
    let catalog = DemoCatalog::from_config(&config);

    match &cli.command {
        Commands::Shapes => run::execute(&[catalog.find("shapes")?], format, cli.headers)?,
        Commands::People => run::execute(&[catalog.find("people")?], format, cli.headers)?,
        Commands::Square => run::execute(&[catalog.find(SQUARE_DEMO)?], format, cli.headers)?,
        Commands::All => {
            let demos: Vec<&dyn Demo> = catalog
                .demos()
                .iter()
                .map(|demo| demo.as_ref())
                .collect();
            run::execute(&demos, format, cli.headers)?;
        }
        Commands::List => cli::commands::list::execute(&catalog, &config, cli.headers)?,
    }

    Ok(())
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        "off" => log::LevelFilter::Off,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
