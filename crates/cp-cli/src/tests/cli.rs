use crate::{Cli, Commands};

use cp_core::Locale;

use clap::Parser;

#[test]
fn given_login_args_when_parsed_then_login_command_with_credentials() {
    let cli = Cli::try_parse_from([
        "chatpro",
        "login",
        "--email",
        "a@b.com",
        "--password",
        "secret",
    ])
    .unwrap();

    assert_eq!(
        cli.command,
        Commands::Login {
            email: "a@b.com".to_string(),
            password: "secret".to_string(),
        }
    );
    assert!(!cli.pretty);
    assert!(cli.api.is_none());
}

#[test]
fn given_register_args_without_company_when_parsed_then_company_is_none() {
    let cli = Cli::try_parse_from([
        "chatpro",
        "register",
        "--email",
        "a@b.com",
        "--password",
        "secret1",
        "--confirm-password",
        "secret1",
        "--full-name",
        "Anna Petrova",
    ])
    .unwrap();

    match cli.command {
        Commands::Register {
            full_name, company, ..
        } => {
            assert_eq!(full_name, "Anna Petrova");
            assert!(company.is_none());
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn given_global_flags_after_subcommand_when_parsed_then_applied() {
    let cli = Cli::try_parse_from([
        "chatpro",
        "route",
        "/dashboard/chats",
        "--pretty",
        "--locale",
        "EN",
        "--api",
        "http://localhost:9000",
    ])
    .unwrap();

    assert_eq!(
        cli.command,
        Commands::Route {
            path: "/dashboard/chats".to_string()
        }
    );
    assert!(cli.pretty);
    assert_eq!(cli.locale, Some(Locale::En));
    assert_eq!(cli.api.as_deref(), Some("http://localhost:9000"));
}

#[test]
fn given_unknown_locale_when_parsed_then_rejected() {
    let result = Cli::try_parse_from(["chatpro", "status", "--locale", "de"]);
    assert!(result.is_err());
}

#[test]
fn given_login_without_password_when_parsed_then_rejected() {
    let result = Cli::try_parse_from(["chatpro", "login", "--email", "a@b.com"]);
    assert!(result.is_err());
}

#[test]
fn given_cli_definition_when_debug_asserted_then_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
