//! chatpro - ChatPro client CLI
//!
//! Signs in against the ChatPro API, keeps the session in the config
//! directory and answers questions about it as JSON.
//!
//! # Examples
//!
//! ```bash
//! # Sign in
//! chatpro login --email a@b.com --password secret --pretty
//!
//! # Who is signed in (confirms with the server)
//! chatpro whoami
//!
//! # Would /dashboard/chats render, or redirect?
//! chatpro route /dashboard/chats
//! ```

use cp_auth::FileTokenStore;
use cp_cli::{App, Cli, CliError, CliResult, logger};
use cp_config::Config;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::info;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // .env is optional; a missing file is fine
    let _ = dotenvy::dotenv();

    let app = match setup(&cli) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match app.run(cli.command).await {
        Ok(value) => match app.render(&value) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error serializing response: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            report(&app, &e);
            ExitCode::FAILURE
        }
    }
}

fn setup(cli: &Cli) -> CliResult<App> {
    let mut config = Config::load()?;
    if let Some(ref api) = cli.api {
        config.api.base_url = api.clone();
    }
    if let Some(locale) = cli.locale {
        config.i18n.locale = locale;
    }
    config.validate()?;

    let log_file = config.log_file_path()?;
    if let Some(dir) = log_file.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(dir)
            .map_err(|e| CliError::io(format!("Failed to create {}", dir.display()), e))?;
    }
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    info!("Starting chatpro v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let store = Arc::new(FileTokenStore::new(config.session_store_path()?));
    App::new(&config, store, cli.pretty)
}

fn report(app: &App, error: &CliError) {
    eprintln!("Error: {error}");
    let body: Value = error.to_json();
    if let Ok(json) = app.render(&body) {
        println!("{json}");
    }
}
