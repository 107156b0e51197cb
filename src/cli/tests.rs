// launch-rs: declarative launch descriptions
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use crate::cli::launch::LaunchArgument;
use crate::cli::{Cli, Command};
use clap::Parser;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["launch", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_no_command() {
    let cli = Cli::try_parse_from(["launch"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "launch",
        "-c",
        "a.toml",
        "--config",
        "b.toml",
        "-l",
        "5",
        "--clean-env",
        "list",
    ])
    .unwrap();

    assert_eq!(
        cli.global.configs,
        [PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert_eq!(cli.global.log_level, Some(5));
    assert!(cli.global.clean_env);
    assert!(matches!(cli.command, Some(Command::List)));
}

#[test]
fn test_global_options_after_subcommand() {
    let cli = Cli::try_parse_from(["launch", "options", "--log-level", "4"]).unwrap();
    assert_eq!(cli.global.log_level, Some(4));
}

#[test]
fn test_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["launch", "-l", "6", "list"]).is_err());
}

#[test]
fn test_parse_run_with_command() {
    let cli = Cli::try_parse_from([
        "launch",
        "run",
        "dev.toml",
        "-a",
        "prefix:=/opt/tool",
        "--arg",
        "mode:=release",
        "--",
        "make",
        "-j4",
        "install",
    ])
    .unwrap();

    let Some(Command::Run(args)) = cli.command else {
        panic!("expected run command");
    };
    assert_eq!(args.description.file, PathBuf::from("dev.toml"));
    assert_eq!(
        args.description
            .arguments
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
        ["prefix:=/opt/tool", "mode:=release"]
    );
    assert_eq!(args.command, ["make", "-j4", "install"]);
}

#[test]
fn test_parse_run_without_command() {
    let cli = Cli::try_parse_from(["launch", "run", "dev.yaml"]).unwrap();
    let Some(Command::Run(args)) = cli.command else {
        panic!("expected run command");
    };
    assert!(args.command.is_empty());
    assert!(args.description.arguments.is_empty());
}

#[test]
fn test_parse_env_changed() {
    let cli = Cli::try_parse_from(["launch", "env", "dev.json", "--changed"]).unwrap();
    let Some(Command::Env(args)) = cli.command else {
        panic!("expected env command");
    };
    assert!(args.changed);
    assert_eq!(args.description.file, PathBuf::from("dev.json"));
}

#[test]
fn test_launch_argument_from_str() {
    assert_eq!(
        "prefix:=/opt/tool".parse::<LaunchArgument>().unwrap(),
        LaunchArgument {
            name: "prefix".to_string(),
            value: "/opt/tool".to_string(),
        }
    );
    // Only the first ':=' splits.
    assert_eq!(
        "expr:=a:=b".parse::<LaunchArgument>().unwrap().value,
        "a:=b"
    );
    assert_eq!("empty:=".parse::<LaunchArgument>().unwrap().value, "");

    insta::assert_snapshot!(
        "prefix=/opt".parse::<LaunchArgument>().unwrap_err(),
        @"expected 'name:=value', got 'prefix=/opt'"
    );
    assert!(":=value".parse::<LaunchArgument>().is_err());
    assert!("two words:=value".parse::<LaunchArgument>().is_err());
}

#[test]
fn test_invalid_launch_argument_rejected_by_clap() {
    assert!(Cli::try_parse_from(["launch", "env", "dev.toml", "-a", "prefix"]).is_err());
}

#[test]
fn test_to_config_overrides() {
    let cli = Cli::try_parse_from([
        "launch",
        "-l",
        "2",
        "--log-file",
        "out.log",
        "--clean-env",
        "list",
    ])
    .unwrap();

    assert_eq!(
        cli.global.to_config_overrides(),
        [
            ("global.log_level", "2".to_string()),
            ("global.file_log_level", "2".to_string()),
            ("global.log_file", "out.log".to_string()),
            ("environment.inherit", "false".to_string()),
        ]
    );
}
