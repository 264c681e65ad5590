//! # Param Table Module
//!
//! This module provides access to the parameter definition table and to [`Parameter`], the
//! reflection-style descriptor built from it.
//!
//! The module follows a dual-variant pattern:
//! - [`ParameterDefinitionRaw`]: the raw row with unresolved indexes
//! - [`Parameter`]: the descriptor with resolved name, position, attributes and default value
//!
//! Parameters of all methods are stored in one flat table. Every method records the index of
//! its first parameter (the parameter-start offset), so a parameter's position is its flat
//! index minus that offset. The return value of a method has no row; it is represented by a
//! synthetic descriptor with index and position `-1`.
//!
//! ## Usage
//!
//! ```rust
//! use il2scope::metadata::tables::{
//!     ParamAttributes, Parameter, ParameterAttributes, ParameterDefinitionRaw,
//! };
//! ```
use bitflags::bitflags;
use std::sync::Arc;

mod format;
mod owned;
mod raw;

pub use format::*;
pub use owned::*;
pub use raw::*;

/// A vector that holds a list of `Parameter`
pub type ParameterList = Arc<boxcar::Vec<ParameterRc>>;
/// A reference to a `Parameter`
pub type ParameterRc = Arc<Parameter>;

#[allow(non_snake_case)]
/// Raw `PARAM_ATTRIBUTE_*` bits as stored in the `attrs` column of a type usage
pub mod ParamAttributes {
    /// Param is `in`
    pub const IN: u16 = 0x0001;
    /// Param is `out`
    pub const OUT: u16 = 0x0002;
    /// Param is optional
    pub const OPTIONAL: u16 = 0x0010;
    /// Reserved bits, includes `HAS_DEFAULT` and `HAS_FIELD_MARSHAL`
    pub const RESERVED_MASK: u16 = 0xf000;
    /// Param has default value
    pub const HAS_DEFAULT: u16 = 0x1000;
    /// Param has `FieldMarshal`
    pub const HAS_FIELD_MARSHAL: u16 = 0x2000;
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    /// Attributes of a [`Parameter`], modelled on `System.Reflection.ParameterAttributes`
    pub struct ParameterAttributes: u32 {
        /// Param is `in`
        const IN = 0x0001;
        /// Param is `out`
        const OUT = 0x0002;
        /// Param is the return value of its member
        const RETVAL = 0x0008;
        /// Param is optional
        const OPTIONAL = 0x0010;
        /// Param has a default value
        const HAS_DEFAULT = 0x1000;
        /// Param has marshalling information
        const HAS_FIELD_MARSHAL = 0x2000;
        /// Param has any bit of the raw reserved mask set, `HAS_DEFAULT` and
        /// `HAS_FIELD_MARSHAL` included
        const RESERVED_MASK = 0xc000;
    }
}

impl ParameterAttributes {
    /// Translate the raw `attrs` bits of a type usage into parameter attributes
    ///
    /// `RETVAL` is never produced here, it is structural and only set by
    /// [`Parameter::new`]. `RESERVED_MASK` is stored in the bits no other flag uses, so that
    /// setting it does not imply `HAS_DEFAULT`.
    #[must_use]
    pub fn from_raw(attrs: u16) -> Self {
        let mut flags = ParameterAttributes::empty();

        if attrs & ParamAttributes::HAS_DEFAULT != 0 {
            flags |= ParameterAttributes::HAS_DEFAULT;
        }
        if attrs & ParamAttributes::OPTIONAL != 0 {
            flags |= ParameterAttributes::OPTIONAL;
        }
        if attrs & ParamAttributes::IN != 0 {
            flags |= ParameterAttributes::IN;
        }
        if attrs & ParamAttributes::OUT != 0 {
            flags |= ParameterAttributes::OUT;
        }
        if attrs & ParamAttributes::RESERVED_MASK != 0 {
            flags |= ParameterAttributes::RESERVED_MASK;
        }
        if attrs & ParamAttributes::HAS_FIELD_MARSHAL != 0 {
            flags |= ParameterAttributes::HAS_FIELD_MARSHAL;
        }

        flags
    }
}
