use crate::{
    metadata::{tables::TypeUsageIndex, typesystem::TypeInfoRc},
    Result,
};

/// The type usages bound to the generic parameters of a type (`VAR`) and of a method (`MVAR`)
///
/// An empty context leaves every generic parameter unbound.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GenericContext {
    /// Arguments for the generic parameters of the declaring type, by position
    pub type_arguments: Vec<TypeUsageIndex>,
    /// Arguments for the generic parameters of the method, by position
    pub method_arguments: Vec<TypeUsageIndex>,
}

impl GenericContext {
    /// Create a context binding both type and method generic parameters
    #[must_use]
    pub fn new(type_arguments: Vec<TypeUsageIndex>, method_arguments: Vec<TypeUsageIndex>) -> Self {
        GenericContext {
            type_arguments,
            method_arguments,
        }
    }

    /// Create a context binding only the generic parameters of the method
    #[must_use]
    pub fn for_method(method_arguments: Vec<TypeUsageIndex>) -> Self {
        GenericContext {
            type_arguments: Vec::new(),
            method_arguments,
        }
    }

    /// True if no generic parameter is bound
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.type_arguments.is_empty() && self.method_arguments.is_empty()
    }

    /// The usage bound to the generic parameter at `position`
    ///
    /// ## Arguments
    /// * 'position' - Position of the parameter within its container
    /// * 'method'   - True for a method parameter (`MVAR`), false for a type parameter (`VAR`)
    #[must_use]
    pub fn argument(&self, position: u16, method: bool) -> Option<TypeUsageIndex> {
        let arguments = if method {
            &self.method_arguments
        } else {
            &self.type_arguments
        };
        arguments.get(usize::from(position)).copied()
    }
}

/// Maps a type usage to the type it denotes
pub trait TypeResolver: Send + Sync {
    /// Resolve `usage` with the generic parameters bound by `context`
    ///
    /// # Errors
    /// Returns [`crate::Error::UnresolvedTypeReference`] if the usage cannot be mapped to a type,
    /// [`crate::Error::MetadataCorruption`] for malformed usages and
    /// [`crate::Error::RecursionLimit`] for usages nested too deeply.
    fn resolve(&self, usage: TypeUsageIndex, context: &GenericContext) -> Result<TypeInfoRc>;
}
