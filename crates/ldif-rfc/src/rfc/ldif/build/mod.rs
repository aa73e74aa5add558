//! LDIF serialization (RFC 2849).
//!
//! ## Usage
//!
//! ```rust
//! use ldif_rfc::rfc::ldif::{Entry, Value, serialize};
//!
//! let entry = Entry::new([
//!     ("dn", Value::from("cn=a,o=org,c=x")),
//!     ("key", Value::from(b"world".to_vec())),
//! ]);
//!
//! let output = serialize(&[entry]).unwrap();
//! assert_eq!(output, "version: 1\n\ndn: cn=a,o=org,c=x\nkey:: d29ybGQ=\n\n");
//! ```
//!
//! ## Features
//!
//! - Folding at 76 octets by default (UTF-8 safe), configurable or disabled
//! - `::` base64 marker chosen from the value type, never from content
//! - `version: 1` header by default, configurable or omitted
//! - Entries are validated before any of their bytes are written

mod error;
mod fold;
mod serializer;

pub use error::{EncodeError, EncodeResult};
pub use fold::{DEFAULT_LINE_WIDTH, MIN_LINE_WIDTH, fold_line};
pub use serializer::{EncodeOptions, Encoder, encode, encode_with, serialize, serialize_with};
