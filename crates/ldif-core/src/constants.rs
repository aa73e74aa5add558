/// Configuration naming shared across crates
pub const APP_NAME: &str = "ldif";

pub const CONFIG_FILE_NAME: &str = const_str::concat!(APP_NAME, ".toml");

pub const ENV_PREFIX: &str = "LDIF";
pub const ENV_SEPARATOR: &str = "__";

pub const LOG_LEVEL_ENV: &str = const_str::concat!(ENV_PREFIX, "_LOGGING", ENV_SEPARATOR, "LEVEL");
pub const LINE_WIDTH_ENV: &str =
    const_str::concat!(ENV_PREFIX, "_ENCODE", ENV_SEPARATOR, "LINE_WIDTH");

/// Line width recommended by RFC 2849, used when nothing else is configured.
pub const DEFAULT_LINE_WIDTH: usize = 76;

/// LDIF version written in the header unless disabled.
pub const DEFAULT_VERSION: u32 = 1;
