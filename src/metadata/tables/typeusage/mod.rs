//! # TypeUsage Table Module
//!
//! A type usage (`Il2CppType` in the runtime headers) describes how a type is referenced at a
//! particular site: which definition, whether it is an array, pointer, generic instance or a
//! generic parameter, and the attribute bits of the site. IL2CPP has no separate parameter
//! attribute column; a parameter's `in`/`out`/`optional`/`HasDefault` bits live on the usage
//! its type index points at.
//!
//! Different sites referencing the same type with different attributes get distinct usages. A
//! type definition records exactly one of its usages as its by-reference variant.

mod raw;

pub use raw::*;
