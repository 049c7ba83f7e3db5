//! Tests for settings loading and CLI precedence.

use std::io::Write;
use std::path::PathBuf;

use hangman_core::{
    DEFAULT_CAPTION, DEFAULT_MAX_CHANCES, DEFAULT_PHRASE, DEFAULT_TITLE, SecretPhrase,
};
use mathematician_hangman::{Cli, Settings};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

fn cli_with(config: Option<PathBuf>) -> Cli {
    Cli {
        config,
        ..Cli::default()
    }
}

#[test]
fn test_defaults_without_config() {
    let config = Settings::load(&cli_with(None))
        .expect("load")
        .into_config()
        .expect("valid");

    assert_eq!(config.phrase().as_str(), DEFAULT_PHRASE);
    assert_eq!(*config.max_chances(), DEFAULT_MAX_CHANCES);
    assert_eq!(config.title(), DEFAULT_TITLE);
    assert_eq!(config.caption().as_deref(), Some(DEFAULT_CAPTION));
}

#[test]
fn test_from_toml_all_fields() {
    let settings = Settings::from_toml(
        r#"
phrase = "Emmy Noether"
max_chances = 8
title = "Algebra Hangman"
caption = "1882 - 1935"
"#,
    )
    .expect("parse");

    assert_eq!(settings.phrase.as_ref().map(SecretPhrase::as_str), Some("Emmy Noether"));
    assert_eq!(settings.max_chances, Some(8));

    let config = settings.into_config().expect("valid");
    assert_eq!(config.phrase().as_str(), "Emmy Noether");
    assert_eq!(*config.max_chances(), 8);
    assert_eq!(config.title(), "Algebra Hangman");
    assert_eq!(config.caption().as_deref(), Some("1882 - 1935"));
}

#[test]
fn test_custom_phrase_drops_default_caption() {
    let config = Settings::from_toml(r#"phrase = "Alan Turing""#)
        .expect("parse")
        .into_config()
        .expect("valid");
    assert_eq!(config.caption(), &None);
}

#[test]
fn test_unknown_field_rejected() {
    let err = Settings::from_toml("lives = 3").expect_err("unknown field");
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_negative_max_chances_rejected_at_parse() {
    assert!(Settings::from_toml("max_chances = -1").is_err());
}

#[test]
fn test_zero_max_chances_is_misconfiguration() {
    let settings = Settings::from_toml("max_chances = 0").expect("parse");
    let err = settings.into_config().expect_err("zero chances");
    assert!(err.message.contains("max_chances"));
}

#[test]
fn test_empty_phrase_rejected_at_parse() {
    let err = Settings::from_toml(r#"phrase = """#).expect_err("empty phrase");
    assert!(err.message.contains("non-space"));

    let err = Settings::from_toml(r#"phrase = "   ""#).expect_err("blank phrase");
    assert!(err.message.contains("non-space"));
}

#[test]
fn test_blank_cli_phrase_is_misconfiguration() {
    let cli = Cli {
        phrase: Some("  ".to_string()),
        ..Cli::default()
    };
    assert!(Settings::load(&cli).is_err());
}

#[test]
fn test_max_chances_above_u8_range() {
    let config = Settings::from_toml("max_chances = 300")
        .expect("parse")
        .into_config()
        .expect("valid");
    assert_eq!(*config.max_chances(), 300);

    let cli = Cli {
        max_chances: Some(1000),
        ..Cli::default()
    };
    let config = Settings::load(&cli).expect("load").into_config().expect("valid");
    assert_eq!(*config.max_chances(), 1000);
}

#[test]
fn test_from_file() {
    let file = write_config("phrase = \"Sofia Kovalevskaya\"\nmax_chances = 10\n");
    let settings = Settings::from_file(file.path()).expect("load");
    assert_eq!(settings.phrase.as_ref().map(SecretPhrase::as_str), Some("Sofia Kovalevskaya"));
    assert_eq!(settings.max_chances, Some(10));
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = Settings::from_file(dir.path().join("absent.toml")).expect_err("missing");
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_cli_overrides_file() {
    let file = write_config("phrase = \"Emmy Noether\"\nmax_chances = 8\ntitle = \"Kept\"\n");
    let cli = Cli {
        config: Some(file.path().to_path_buf()),
        phrase: Some("Carl Gauss".to_string()),
        max_chances: Some(3),
        ..Cli::default()
    };

    let config = Settings::load(&cli).expect("load").into_config().expect("valid");
    assert_eq!(config.phrase().as_str(), "Carl Gauss");
    assert_eq!(*config.max_chances(), 3);
    assert_eq!(config.title(), "Kept");
}

#[test]
fn test_partial_cli_override_keeps_file_values() {
    let file = write_config("phrase = \"Emmy Noether\"\nmax_chances = 8\n");
    let cli = Cli {
        config: Some(file.path().to_path_buf()),
        max_chances: Some(2),
        ..Cli::default()
    };

    let settings = Settings::load(&cli).expect("load");
    assert_eq!(settings.phrase.as_ref().map(SecretPhrase::as_str), Some("Emmy Noether"));
    assert_eq!(settings.max_chances, Some(2));
}

#[test]
fn test_cli_phrase_without_file() {
    let cli = Cli {
        phrase: Some("Hypatia".to_string()),
        ..Cli::default()
    };
    let config = Settings::load(&cli).expect("load").into_config().expect("valid");
    assert_eq!(config.phrase().as_str(), "Hypatia");
    assert_eq!(*config.max_chances(), DEFAULT_MAX_CHANCES);
    assert_eq!(config.caption(), &None);
}
