//! Tests for CLI argument parsing

use std::path::PathBuf;

use clap::Parser;
use rstest::rstest;

use larder::cli::args::ConfigCommands;
use larder::cli::{Cli, Commands};

#[test]
fn given_check_with_stock_flag_when_parsing_then_both_paths_set() {
    let cli = Cli::try_parse_from(["larder", "check", "order.toml", "--stock", "s.toml"]).unwrap();

    match cli.command {
        Some(Commands::Check { order, stock }) => {
            assert_eq!(order, PathBuf::from("order.toml"));
            assert_eq!(stock, Some(PathBuf::from("s.toml")));
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[rstest]
#[case(&["larder", "show"], 0)]
#[case(&["larder", "-v", "show"], 1)]
#[case(&["larder", "-vvv", "totals"], 3)]
#[case(&["larder", "totals", "-vv"], 2)]
fn given_verbose_flags_when_parsing_then_counted(#[case] args: &[&str], #[case] expected: u8) {
    let cli = Cli::try_parse_from(args).unwrap();
    assert_eq!(cli.verbose, expected);
}

#[test]
fn given_show_without_stock_when_parsing_then_stock_is_none() {
    let cli = Cli::try_parse_from(["larder", "show"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Show { stock: None })));
}

#[test]
fn given_config_show_when_parsing_then_config_subcommand() {
    let cli = Cli::try_parse_from(["larder", "--config", "x.toml", "config", "show"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    assert!(matches!(
        cli.command,
        Some(Commands::Config {
            command: ConfigCommands::Show
        })
    ));
}

#[test]
fn given_check_without_order_when_parsing_then_error() {
    assert!(Cli::try_parse_from(["larder", "check"]).is_err());
}
