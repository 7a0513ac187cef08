use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

use lists_comparison::bench::config::{Config, ReportFormat, DEFAULT_NUM_OPERATIONS};
use lists_comparison::bench::BenchmarkRunner;

#[derive(Debug, Parser)]
#[command(
    name = "lists-comparison",
    version,
    about = "Compare add/get/remove timings of Vec and LinkedList"
)]
struct CliArgs {
    /// Iterations of every phase, must be positive
    #[arg(
        value_name = "NUM_OPERATIONS",
        default_value_t = DEFAULT_NUM_OPERATIONS,
        allow_negative_numbers = true
    )]
    num_operations: i64,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// off, error, warn, info, debug or trace
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn build_config(args: CliArgs) -> Result<Config> {
    let log_level: LevelFilter = args
        .log_level
        .parse()
        .map_err(|_| anyhow!("unknown log level {}", args.log_level))?;
    let mut c = Config::new();
    c.num_operations = args.num_operations;
    c.format = args.format;
    c.log_level = log_level;
    Ok(c)
}

fn main() -> Result<()> {
    let config = build_config(CliArgs::parse())?;
    TermLogger::init(
        config.log_level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let runner = BenchmarkRunner::new(config);
    let reports = runner.run().with_context(|| {
        format!(
            "benchmark with {} operations failed",
            runner.config().num_operations
        )
    })?;
    info!("{} reports written", reports.len());
    Ok(())
}
