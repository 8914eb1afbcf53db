use clap::Parser;
use dam_core::ports::OrderRepository as _;
use std::path::PathBuf;

mod commands;
pub use commands::*;

mod config;
pub use config::*;

mod io;
pub use io::*;

mod repository;
pub use repository::*;

// The top-level arguments -- the subcommand to execute plus the shared
// configuration file path
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl BaseArgs {
    pub fn evaluate(self) -> anyhow::Result<()> {
        let AppConfig { report } = AppConfig::load(self.config.as_deref())?;

        match self.command {
            Commands::Report { io, format } => {
                let orders = JsonOrders::new(io.reader()?).load()?;
                let result = dam_clearing::build_report(&orders, &report);
                tracing::info!(
                    rows = result.rows.len(),
                    "computed day-ahead sensitivity report"
                );

                let format = match format {
                    Some(format) => format,
                    None => io
                        .extension()
                        .map(str::parse)
                        .transpose()?
                        .unwrap_or(OutputFormat::Json),
                };
                format.write(&result, &mut io.writer()?)?;
            }
            Commands::Depth { io, hour } => {
                let orders = JsonOrders::new(io.reader()?).load()?;
                let chart = dam_clearing::depth_chart(&orders, &hour.into(), &report)?;
                serde_json::to_writer_pretty(io.writer()?, &chart)?;
            }
        }

        Ok(())
    }
}
