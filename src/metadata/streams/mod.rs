//! Metadata streams of an IL2CPP package
//!
//! IL2CPP stores all identifiers (type names, namespaces, parameter names, ...) in a single
//! nul-terminated UTF-8 string table, referenced from the other tables by byte offset.

mod strings;

pub use strings::Strings;
