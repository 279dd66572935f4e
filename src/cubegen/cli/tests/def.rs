use clap::Parser;

use super::*;

#[test]
fn parse_side_test() {
    let cli = Cli::try_parse_from(["cubegen", "5"]).unwrap();

    assert_eq!(cli.side, 5);
    assert_eq!(cli.verbose, 0);
    assert!(!cli.dry);
}

#[test]
fn parse_negative_side_test() {
    let cli = Cli::try_parse_from(["cubegen", "-3"]).unwrap();

    assert_eq!(cli.side, -3);
}

#[test]
fn parse_flags_test() {
    let cli = Cli::try_parse_from(["cubegen", "-vv", "--dry", "2"]).unwrap();

    assert_eq!(cli.side, 2);
    assert_eq!(cli.verbose, 2);
    assert!(cli.dry);
}

#[test]
fn parse_missing_side_test() {
    assert!(Cli::try_parse_from(["cubegen"]).is_err());
}

#[test]
fn parse_extra_argument_test() {
    assert!(Cli::try_parse_from(["cubegen", "2", "3"]).is_err());
}

#[test]
fn parse_non_integer_test() {
    assert!(Cli::try_parse_from(["cubegen", "abc"]).is_err());
    assert!(Cli::try_parse_from(["cubegen", "2.5"]).is_err());
}
