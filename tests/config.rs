use clap::{error::ErrorKind, Parser};
use coco_park::{
    config::{AppOptions, Cli, GameConfig},
    error::ConfigError,
};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("coco-park").chain(args.iter().copied()))
}

#[test]
fn test_defaults() {
    let (config, options) = parse(&[]).expect("no flags is valid").into_config().expect("defaults validate");
    assert_eq!(config, GameConfig::default());
    assert_eq!(options, AppOptions::default());
    assert_that(&config.ambient_npcs).is_equal_to(3);
    assert_that(&config.seed).is_none();
}

#[test]
fn test_all_flags() {
    let (config, options) = parse(&["--seed", "42", "--ambient", "5", "--mute", "--rounds", "3"])
        .expect("flags are valid")
        .into_config()
        .expect("config validates");
    assert_eq!(
        config,
        GameConfig {
            seed: Some(42),
            ambient_npcs: 5,
            muted: true,
        }
    );
    assert_that(&options.rounds).is_equal_to(Some(3));
}

#[test]
fn test_missing_value() {
    let error = parse(&["--seed"]).expect_err("a value is required");
    assert_eq!(error.kind(), ErrorKind::InvalidValue);
}

#[test]
fn test_invalid_value() {
    let error = parse(&["--ambient", "lots"]).expect_err("not a number");
    assert_eq!(error.kind(), ErrorKind::ValueValidation);
}

#[test]
fn test_zero_rounds_is_rejected() {
    let error = parse(&["--rounds", "0"]).expect_err("at least one round");
    assert_eq!(error.kind(), ErrorKind::ValueValidation);
}

#[test]
fn test_unknown_flag() {
    let error = parse(&["--fullscreen"]).expect_err("unknown flag");
    assert_eq!(error.kind(), ErrorKind::UnknownArgument);
}

#[test]
fn test_ambient_limit() {
    let result = parse(&["--ambient", "17"]).expect("parses").into_config();
    assert_eq!(result, Err(ConfigError::TooManyAmbientNpcs { requested: 17, max: 16 }));
    assert_that(&parse(&["--ambient", "16"]).expect("parses").into_config().is_ok()).is_true();
}

#[test]
fn test_cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
