//! LDIF parsing (RFC 2849).
//!
//! - Lexer: physical lines to unfolded logical lines, comments dropped
//! - Parser: logical lines to [`Entry`](crate::rfc::ldif::core::Entry) records
//!
//! ## Usage
//!
//! ```rust
//! use ldif_rfc::rfc::ldif::parse;
//!
//! let input = "\
//! version: 1\n\
//! \n\
//! dn: cn=Barbara Jensen,dc=example,dc=com\n\
//! cn: Barbara Jensen\n\
//! description:: V2hhdCBhIGNhcmVmdWwgcmVhZGVyIHlvdSBhcmUh\n";
//!
//! let entries = parse::parse(input).unwrap();
//! assert_eq!(entries[0].dn(), Some("cn=Barbara Jensen,dc=example,dc=com"));
//! ```

mod error;
mod lexer;
mod parser;


pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{LogicalLine, Unfolder, unfold};
pub use parser::{
    DecodeOptions, Decoder, VERSION, decode_eager, decode_eager_with, decode_lazy,
    decode_lazy_with, parse, parse_content_line, parse_single,
};
