pub mod ldif;
