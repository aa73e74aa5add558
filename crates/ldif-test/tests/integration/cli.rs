//! Integration tests for the `ldif` command against files on disk.

use clap::Parser as _;
use ldif_test::component::cli::{Cli, CliError, run};
use ldif_test::component::config::Settings;
use ldif_test::component::ldif::{ParseErrorKind, Value, parse, serialize};

use super::helpers::{people, read, settings, write};

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("valid command line")
}

#[test_log::test]
fn format_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(
        &dir,
        "in.ldif",
        b"version: 1\n# people\ndn: cn=a\ndescr\n iption: hello\n\n\n\ndn: cn=b\ncn: b\n",
    );
    let output = dir.path().join("out.ldif");

    let command = cli(&[
        "ldif",
        "format",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]);
    run(&command, &settings(76, Some(1))).unwrap();

    assert_eq!(
        read(&dir, "out.ldif"),
        "version: 1\n\ndn: cn=a\ndescription: hello\n\ndn: cn=b\ncn: b\n\n"
    );
}

#[test_log::test]
fn format_uses_configured_width() {
    let dir = tempfile::tempdir().unwrap();
    let entries = people(3);
    let input = write(&dir, "in.ldif", serialize(&entries).unwrap().as_bytes());
    let output = dir.path().join("out.ldif");

    let command = cli(&[
        "ldif",
        "format",
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ]);
    run(&command, &settings(20, None)).unwrap();

    let formatted = read(&dir, "out.ldif");
    assert!(formatted.lines().all(|line| line.len() <= 20));
    assert_eq!(parse(&formatted).unwrap(), entries);
}

#[test_log::test]
fn format_no_fold_overrides_config() {
    let dir = tempfile::tempdir().unwrap();
    let entries = people(2);
    let input = write(&dir, "in.ldif", serialize(&entries).unwrap().as_bytes());
    let output = dir.path().join("out.ldif");

    let command = cli(&[
        "ldif",
        "format",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "--no-fold",
    ]);
    run(&command, &settings(20, None)).unwrap();

    let formatted = read(&dir, "out.ldif");
    assert!(!formatted.contains("\n "));
    assert_eq!(parse(&formatted).unwrap(), entries);
}

#[test_log::test]
fn check_reports_first_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(&dir, "bad.ldif", b"dn: cn=a\ncn: a\n\n continued\n");

    let command = cli(&["ldif", "check", "--quiet", input.to_str().unwrap()]);
    let err = run(&command, &settings(76, None)).unwrap_err();

    let CliError::Parse { source, .. } = err else {
        panic!("expected parse error, got {err:?}");
    };
    assert_eq!(source.kind, ParseErrorKind::OrphanContinuation);
    assert_eq!(source.line, 4);
}

#[test_log::test]
fn check_rejects_invalid_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(&dir, "bad.ldif", b"dn: cn=a\ncn: \xff\xfe\n");

    let command = cli(&["ldif", "check", "-q", input.to_str().unwrap()]);
    let err = run(&command, &settings(76, None)).unwrap_err();

    let CliError::Parse { source, .. } = err else {
        panic!("expected parse error, got {err:?}");
    };
    assert_eq!(source.kind, ParseErrorKind::EncodingError);
    assert_eq!(source.line, 2);
}

#[test_log::test]
fn missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.ldif");

    let command = cli(&["ldif", "show", input.to_str().unwrap()]);
    let err = run(&command, &settings(76, None)).unwrap_err();
    assert!(matches!(err, CliError::OpenInput { .. }));
}

#[test_log::test]
fn settings_file_drives_format() {
    let dir = tempfile::tempdir().unwrap();
    let config = write(
        &dir,
        "ldif.toml",
        b"[encode]\nline_width = 0\nversion = 2\n\n[decode]\nskip_version = true\n",
    );
    let settings = Settings::load_from(Some(&config)).unwrap();
    assert_eq!(settings.encode.fold_width(), None);

    let long = "x".repeat(300);
    let input = write(&dir, "in.ldif", format!("cn: {long}\n").as_bytes());
    let output = dir.path().join("out.ldif");

    let command = cli(&[
        "ldif",
        "--config",
        config.to_str().unwrap(),
        "format",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]);
    run(&command, &settings).unwrap();

    assert_eq!(read(&dir, "out.ldif"), format!("version: 2\n\ncn: {long}\n\n"));

    let decoded = parse(&read(&dir, "out.ldif")).unwrap();
    assert_eq!(decoded[0].get_first("cn"), Some(&Value::from(long)));
}

#[test_log::test]
fn format_keeps_leading_version_attribute() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(&dir, "in.ldif", b"version: 1\n\nversion: 1\ndn: cn=a\n");
    let output = dir.path().join("out.ldif");

    let command = cli(&[
        "ldif",
        "format",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ]);
    run(&command, &settings(76, Some(1))).unwrap();

    let formatted = read(&dir, "out.ldif");
    assert_eq!(formatted, "version: 1\n\nversion: 1\ndn: cn=a\n\n");
    assert_eq!(parse(&formatted).unwrap()[0].get_first("version"), Some(&Value::from("1")));
}

#[test_log::test]
fn format_without_version_header() {
    let dir = tempfile::tempdir().unwrap();
    let input = write(&dir, "in.ldif", b"dn: cn=a\n");
    let output = dir.path().join("out.ldif");

    let command = cli(&[
        "ldif",
        "format",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
        "--no-version-header",
    ]);
    run(&command, &settings(76, Some(1))).unwrap();

    assert_eq!(read(&dir, "out.ldif"), "dn: cn=a\n\n");
}
