//! LDAP Data Interchange Format (RFC 2849) content records.
//!
//! See [`rfc::ldif`] for the data model, decoder and encoder.

pub mod error;
pub mod rfc;
