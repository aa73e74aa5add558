//! LDIF core types (RFC 2849).
//!
//! - [`Entry`] - One content record: ordered attribute/value pairs
//! - [`Value`] - Text, binary or URL value
//!
//! ## Example
//!
//! ```rust
//! use ldif_rfc::rfc::ldif::core::{Entry, Value};
//!
//! let entry = Entry::new([
//!     ("dn", Value::from("cn=a,o=org,c=x")),
//!     ("key", Value::from(b"world".to_vec())),
//! ]);
//! assert_eq!(entry.dn(), Some("cn=a,o=org,c=x"));
//! ```

mod entry;
mod value;

pub use entry::{DN, Entry};
pub use value::Value;
