//! # Generic Container and Generic Parameter Table Module
//!
//! IL2CPP groups the generic parameters of a type or method into a *generic container*. The
//! container records its owner and the slice of the flat generic parameter table that holds its
//! parameters, numbered left-to-right from zero.
//!
//! ## Usage
//!
//! ```rust
//! use il2scope::metadata::tables::{GenericContainerRaw, GenericParameterRaw};
//! ```

mod raw;

pub use raw::*;
