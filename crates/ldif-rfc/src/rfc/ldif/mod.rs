//! LDIF implementation (RFC 2849), content records only.
//!
//! ## Overview
//!
//! An LDIF document is a sequence of entries separated by blank lines. Each
//! entry is an ordered list of `name: value` lines; long lines are folded
//! onto continuation lines that start with a single space, and values that
//! are not plain text are base64 encoded behind a `::` marker.
//!
//! Change records (`changetype:`) are not interpreted; such lines decode as
//! ordinary attributes.
//!
//! ## Usage
//!
//! ### Parsing
//!
//! ```rust
//! use ldif_rfc::rfc::ldif::{Value, parse};
//!
//! let entries = parse("dn: CN=a\nkey:: d29ybGQ=\n\n").unwrap();
//! assert_eq!(entries[0].get_first("key"), Some(&Value::from(b"world".to_vec())));
//! ```
//!
//! ### Streaming
//!
//! ```rust
//! use std::io::BufReader;
//! use ldif_rfc::rfc::ldif::{EncodeOptions, Encoder, decode_lazy};
//!
//! let input = BufReader::new("version: 1\ndn: cn=a\n\ndn: cn=b\n".as_bytes());
//! let mut encoder = Encoder::new(Vec::new(), EncodeOptions::default()).unwrap();
//! for entry in decode_lazy(input) {
//!     encoder.write_entry(&entry.unwrap()).unwrap();
//! }
//! let output = encoder.finish().unwrap();
//! assert_eq!(output, b"version: 1\n\ndn: cn=a\n\ndn: cn=b\n\n");
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Core types (`Entry`, `Value`)
//! - [`parse`] - Decoder and parse error types
//! - [`build`] - Encoder and encode error types

pub mod build;
pub mod core;
pub mod parse;


// Re-export commonly used types
pub use build::{
    EncodeError, EncodeOptions, Encoder, encode, encode_with, serialize, serialize_with,
};
pub use core::{Entry, Value};
pub use parse::{
    DecodeOptions, Decoder, ParseError, ParseErrorKind, ParseResult, decode_eager,
    decode_eager_with, decode_lazy, decode_lazy_with, parse, parse_single,
};
