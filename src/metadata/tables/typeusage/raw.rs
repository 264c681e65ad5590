use crate::metadata::tables::{GenericParameterIndex, TypeDefinitionIndex, TypeUsageIndex};

/// The shape of a type usage
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeUsageKind {
    /// A class, value type, enum or primitive referenced through its definition
    Definition(TypeDefinitionIndex),
    /// A generic parameter of the enclosing type (`VAR`) or method (`MVAR`); which one is
    /// recorded on the parameter's generic container
    GenericParameter(GenericParameterIndex),
    /// A generic type definition instantiated with the given argument usages
    GenericInstance {
        /// The generic type definition
        definition: TypeDefinitionIndex,
        /// The usages bound to the definition's generic parameters, in declaration order
        arguments: Vec<TypeUsageIndex>,
    },
    /// An array of the element usage; rank 1 is a single dimensional zero-based array
    Array {
        /// The element type usage
        element: TypeUsageIndex,
        /// Number of dimensions
        rank: u8,
    },
    /// An unmanaged pointer to the element usage
    Pointer(TypeUsageIndex),
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A row of the type usage table
pub struct TypeUsageRaw {
    /// a 2-byte bitmask of site attributes; for parameters these are the `PARAM_ATTRIBUTE_*` bits
    pub attrs: u16,
    /// what this usage references
    pub kind: TypeUsageKind,
}

impl TypeUsageRaw {
    /// Create a usage of a type definition without attributes
    #[must_use]
    pub fn definition(type_index: TypeDefinitionIndex) -> Self {
        TypeUsageRaw {
            attrs: 0,
            kind: TypeUsageKind::Definition(type_index),
        }
    }

    /// Create a usage of a generic parameter without attributes
    #[must_use]
    pub fn generic_parameter(parameter: GenericParameterIndex) -> Self {
        TypeUsageRaw {
            attrs: 0,
            kind: TypeUsageKind::GenericParameter(parameter),
        }
    }

    /// Create a usage of a generic type instantiated with `arguments`
    #[must_use]
    pub fn generic_instance(
        definition: TypeDefinitionIndex,
        arguments: Vec<TypeUsageIndex>,
    ) -> Self {
        TypeUsageRaw {
            attrs: 0,
            kind: TypeUsageKind::GenericInstance {
                definition,
                arguments,
            },
        }
    }

    /// Create a usage of an array of `element` with `rank` dimensions
    #[must_use]
    pub fn array(element: TypeUsageIndex, rank: u8) -> Self {
        TypeUsageRaw {
            attrs: 0,
            kind: TypeUsageKind::Array { element, rank },
        }
    }

    /// Create a usage of a pointer to `element`
    #[must_use]
    pub fn pointer(element: TypeUsageIndex) -> Self {
        TypeUsageRaw {
            attrs: 0,
            kind: TypeUsageKind::Pointer(element),
        }
    }

    /// Replace the attribute bits of this usage
    #[must_use]
    pub fn with_attrs(mut self, attrs: u16) -> Self {
        self.attrs = attrs;
        self
    }

    /// The type definition this usage is anchored to, if any
    ///
    /// Definitions and generic instances reference a definition directly; arrays, pointers and
    /// generic parameters do not.
    #[must_use]
    pub fn type_index(&self) -> Option<TypeDefinitionIndex> {
        match &self.kind {
            TypeUsageKind::Definition(index) => Some(*index),
            TypeUsageKind::GenericInstance { definition, .. } => Some(*definition),
            _ => None,
        }
    }
}
