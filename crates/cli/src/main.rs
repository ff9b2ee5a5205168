use clap::Parser;
use ferrous_dig_application::use_cases::QueryArgs;
use ferrous_dig_domain::CliOverrides;
use output::OutputFormat;
use std::process::ExitCode;
use tracing::debug;

mod bootstrap;
mod di;
mod output;

#[derive(Parser)]
#[command(name = "ferrous-dig")]
#[command(version)]
#[command(about = "Ferrous Dig - run a single dig lookup and report the answer section")]
struct Cli {
    /// Domain name to look up
    domain: String,

    /// Record type (A, AAAA, MX, TXT, ...)
    #[arg(default_value = "A")]
    record_type: String,

    /// DNS server IP address
    #[arg(short = 's', long)]
    server: Option<String>,

    /// Lookup timeout in seconds
    #[arg(short = 't', long, allow_negative_numbers = true)]
    timeout: Option<i64>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Path to the dig program
    #[arg(long, value_name = "PATH")]
    dig_path: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("ferrous-dig: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let cli_overrides = CliOverrides {
        dig_path: cli.dig_path.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);
    bootstrap::log_config_summary(cli.config.as_deref(), &config);

    debug!("Starting Ferrous Dig v{}", env!("CARGO_PKG_VERSION"));

    let use_cases = di::UseCases::new(&config)?;

    let mut args = QueryArgs::new(cli.domain, cli.record_type);
    args.server = cli.server;
    args.timeout_secs = cli.timeout;

    match use_cases.run_query.execute(&args).await {
        Ok(result) => {
            println!("{}", output::render(&result, cli.format)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("ferrous-dig: {}", e);
            Ok(ExitCode::from(e.exit_code() as u8))
        }
    }
}
