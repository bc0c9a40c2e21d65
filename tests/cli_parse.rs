use clap::{CommandFactory, Parser};
use create_ers_web::tooling::cli::Cli;

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["create-ers-web", "create"],
        vec!["create-ers-web", "create", "--skip-install"],
        vec!["create-ers-web", "create", "--skip-init", "--skip-install"],
        vec!["create-ers-web", "plan"],
        vec!["create-ers-web", "plan", "--format", "json"],
        vec!["create-ers-web", "validate"],
        vec!["create-ers-web", "validate", "--format", "json"],
        vec!["create-ers-web", "--workspace", "/tmp/app", "create"],
        vec!["create-ers-web", "--verbose", "plan"],
        vec![
            "create-ers-web",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--log-output",
            "both",
            "create",
        ],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["create-ers-web", "destroy"]).is_err());
}

#[test]
fn parse_rejects_missing_subcommand() {
    assert!(Cli::try_parse_from(["create-ers-web"]).is_err());
}

#[test]
fn parse_rejects_unknown_create_flag() {
    assert!(Cli::try_parse_from(["create-ers-web", "create", "--force"]).is_err());
}

#[test]
fn help_mentions_every_subcommand() {
    let mut command = Cli::command();
    let help = command.render_long_help().to_string();
    for name in ["create", "plan", "validate"] {
        assert!(help.contains(name), "help missing subcommand: {name}");
    }
}

#[test]
fn workspace_defaults_to_current_directory() {
    let cli = Cli::try_parse_from(["create-ers-web", "plan"]).unwrap();
    assert_eq!(cli.workspace, std::path::PathBuf::from("."));
    assert!(cli.config.is_none());
    assert!(!cli.verbose);
}
