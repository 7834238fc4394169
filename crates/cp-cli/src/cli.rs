use crate::commands::Commands;

use cp_core::Locale;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "chatpro")]
#[command(about = "ChatPro client: sign in, inspect the session and resolve app routes")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides config and CP_API_BASE_URL)
    #[arg(long, global = true)]
    pub api: Option<String>,

    /// Message language: ru or en
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
