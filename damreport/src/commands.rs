use super::IOArgs;
use clap::Subcommand;

mod format;
pub use format::{OutputFormat, OutputFormatError};

#[derive(Subcommand)]
pub enum Commands {
    /// Run clearing and sensitivity over every hour and emit the report table
    Report {
        #[command(flatten)]
        io: IOArgs,

        /// The output format (if omitted, will infer based on filename)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Export one hour's depth-chart data for an external renderer
    Depth {
        #[command(flatten)]
        io: IOArgs,

        /// The hour label, without the display prefix (e.g. "12" or "3B")
        #[arg(long)]
        hour: String,
    },
}
