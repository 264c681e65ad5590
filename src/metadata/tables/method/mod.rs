//! # MethodDefinition Table Module
//!
//! Methods are the members that declare parameters. A method definition records its return
//! type usage and the slice of the flat parameter table holding its parameters
//! (`parameter_start`, `parameter_count`).
//!
//! The module follows the dual-variant pattern:
//! - [`MethodDefinitionRaw`]: the raw row
//! - [`Method`]: the resolved member, owning its [`crate::metadata::tables::Parameter`]s
//!
//! Parameters point back at their method through a [`MethodRef`], a weak reference, so that the
//! member owns its parameters and not the other way round.
use crossbeam_skiplist::SkipMap;
use std::sync::{Arc, Weak};

use crate::metadata::tables::MethodIndex;

mod owned;
mod raw;

pub use owned::*;
pub use raw::*;

/// A map that holds the mapping of method index to parsed `Method`
pub type MethodMap = SkipMap<MethodIndex, MethodRc>;
/// A reference to a `Method`
pub type MethodRc = Arc<Method>;

/// A smart reference to a `Method` that holds a weak reference, to prevent circular
/// references between members and their parameters
#[derive(Clone, Debug)]
pub struct MethodRef {
    weak_ref: Weak<Method>,
}

impl MethodRef {
    /// Create a new `MethodRef` from a strong reference
    #[must_use]
    pub fn new(strong_ref: &MethodRc) -> Self {
        Self {
            weak_ref: Arc::downgrade(strong_ref),
        }
    }

    /// Get a strong reference to the method, returning None if the method has been dropped
    #[must_use]
    pub fn upgrade(&self) -> Option<MethodRc> {
        self.weak_ref.upgrade()
    }
}

impl PartialEq for MethodRef {
    fn eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.weak_ref, &other.weak_ref)
    }
}
