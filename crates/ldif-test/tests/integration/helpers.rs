#![allow(clippy::expect_used, dead_code)]
//! Test helpers for integration tests.
//!
//! Provides utilities for:
//! - Reading and writing files in scratch directories
//! - Building settings without touching the environment
//! - Generating documents with many entries

use std::path::PathBuf;

use ldif_test::component::config::{DecodeConfig, EncodeConfig, LoggingConfig, Settings};
use ldif_test::component::ldif::{Entry, Value};
use tempfile::TempDir;

/// Writes `contents` to `name` inside `dir` and returns its path.
pub fn write(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write test file");
    path
}

pub fn read(dir: &TempDir, name: &str) -> String {
    std::fs::read_to_string(dir.path().join(name)).expect("read test file")
}

/// Settings with the given fold width; `None` disables the version header.
pub fn settings(line_width: usize, version: Option<u32>) -> Settings {
    Settings {
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
        encode: EncodeConfig {
            line_width,
            version: version.unwrap_or(1),
            version_header: version.is_some(),
        },
        decode: DecodeConfig { skip_version: true },
    }
}

/// Builds `count` person entries with a long description and a small photo.
pub fn people(count: usize) -> Vec<Entry> {
    (0..count)
        .map(|i| {
            Entry::new([
                ("dn", Value::from(format!("uid=user{i},ou=people,dc=example,dc=org"))),
                ("objectClass", Value::from("inetOrgPerson")),
                ("uid", Value::from(format!("user{i}"))),
                ("description", Value::from(format!("user number {i} ").repeat(12))),
                ("jpegPhoto", Value::from(vec![0xff, 0xd8, u8::try_from(i % 256).unwrap_or(0)])),
            ])
        })
        .collect()
}
