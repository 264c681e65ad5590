//! # TypeDefinition Table Module
//!
//! The type definition table describes every class, struct, interface and enum of the binary.
//! For parameter resolution the interesting columns are the two type usages IL2CPP records per
//! definition: the by-value usage and the by-reference ("byref variant") usage.

mod raw;

pub use raw::*;
