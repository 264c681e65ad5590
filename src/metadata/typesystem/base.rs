use std::sync::Arc;

use crate::metadata::tables::{TypeDefinitionIndex, TypeUsageIndex};

/// A reference to a resolved `TypeInfo`
pub type TypeInfoRc = Arc<TypeInfo>;

/// The shape of a resolved type
#[derive(Debug, Clone, PartialEq)]
pub enum TypeFlavor {
    /// A class, value type, enum or primitive that declares no generic parameters
    Definition,
    /// An open generic type definition, e.g. ``List`1``
    GenericTypeDefinition {
        /// Names of the declared generic parameters, in declaration order
        parameters: Vec<String>,
    },
    /// A generic type definition instantiated with concrete (or still open) arguments
    GenericInstance {
        /// The generic type definition
        definition: TypeInfoRc,
        /// The argument types, in declaration order of the definition's parameters
        arguments: Vec<TypeInfoRc>,
    },
    /// An array of `element`
    Array {
        /// The element type
        element: TypeInfoRc,
        /// Number of dimensions
        rank: u8,
    },
    /// An unmanaged pointer to `element`
    Pointer {
        /// The pointed-to type
        element: TypeInfoRc,
    },
    /// A generic parameter that is not bound by the generic context it was resolved in
    GenericParameter {
        /// Declared name, e.g. `T`
        name: String,
        /// Position within the declaring container
        position: u16,
        /// True for a parameter of a method (`MVAR`), false for one of a type (`VAR`)
        method: bool,
    },
}

/// A type as seen by a parameter: the result of resolving a type usage
#[derive(Debug, Clone, PartialEq)]
pub struct TypeInfo {
    /// Simple name, including the generic arity suffix (``List`1``)
    pub name: String,
    /// Namespace, empty for the global namespace and for generic parameters
    pub namespace: String,
    /// What kind of type this is
    pub flavor: TypeFlavor,
    /// The type definition this type is anchored to, if any
    pub definition: Option<TypeDefinitionIndex>,
    /// The usage index of this type's by-reference variant, if the definition records one
    pub byref_type_index: Option<TypeUsageIndex>,
}

impl TypeInfo {
    /// True if this type is, or is built from, a generic parameter or an open generic
    /// definition
    #[must_use]
    pub fn contains_generic_parameters(&self) -> bool {
        match &self.flavor {
            TypeFlavor::Definition => false,
            TypeFlavor::GenericTypeDefinition { .. } | TypeFlavor::GenericParameter { .. } => true,
            TypeFlavor::GenericInstance { arguments, .. } => arguments
                .iter()
                .any(|argument| argument.contains_generic_parameters()),
            TypeFlavor::Array { element, .. } | TypeFlavor::Pointer { element } => {
                element.contains_generic_parameters()
            }
        }
    }

    /// The reflection name of this type, e.g. ``System.Collections.Generic.List`1[System.Int32]``
    #[must_use]
    pub fn full_name(&self) -> String {
        match &self.flavor {
            TypeFlavor::Definition | TypeFlavor::GenericTypeDefinition { .. } => {
                self.qualified_name()
            }
            TypeFlavor::GenericInstance {
                definition,
                arguments,
            } => {
                let arguments: Vec<String> =
                    arguments.iter().map(|argument| argument.full_name()).collect();
                format!("{}[{}]", definition.full_name(), arguments.join(","))
            }
            TypeFlavor::Array { element, rank } => {
                format!("{}{}", element.full_name(), array_suffix(*rank))
            }
            TypeFlavor::Pointer { element } => format!("{}*", element.full_name()),
            TypeFlavor::GenericParameter { name, .. } => name.clone(),
        }
    }

    /// The name of this type as written in C# source, e.g. `List<int>` or `string[]`
    #[must_use]
    pub fn csharp_name(&self) -> String {
        match &self.flavor {
            TypeFlavor::Definition => match csharp_alias(&self.qualified_name()) {
                Some(alias) => alias.to_string(),
                None => strip_arity(&self.name).to_string(),
            },
            TypeFlavor::GenericTypeDefinition { parameters } => {
                format!("{}<{}>", strip_arity(&self.name), parameters.join(", "))
            }
            TypeFlavor::GenericInstance {
                definition,
                arguments,
            } => {
                let arguments: Vec<String> = arguments
                    .iter()
                    .map(|argument| argument.csharp_name())
                    .collect();
                format!("{}<{}>", strip_arity(&definition.name), arguments.join(", "))
            }
            TypeFlavor::Array { element, rank } => {
                format!("{}{}", element.csharp_name(), array_suffix(*rank))
            }
            TypeFlavor::Pointer { element } => format!("{}*", element.csharp_name()),
            TypeFlavor::GenericParameter { name, .. } => name.clone(),
        }
    }

    fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }
}

fn strip_arity(name: &str) -> &str {
    name.split_once('`').map_or(name, |(simple, _)| simple)
}

fn array_suffix(rank: u8) -> String {
    format!("[{}]", ",".repeat(usize::from(rank.max(1)) - 1))
}

fn csharp_alias(full_name: &str) -> Option<&'static str> {
    Some(match full_name {
        "System.Void" => "void",
        "System.Boolean" => "bool",
        "System.Char" => "char",
        "System.SByte" => "sbyte",
        "System.Byte" => "byte",
        "System.Int16" => "short",
        "System.UInt16" => "ushort",
        "System.Int32" => "int",
        "System.UInt32" => "uint",
        "System.Int64" => "long",
        "System.UInt64" => "ulong",
        "System.Single" => "float",
        "System.Double" => "double",
        "System.Decimal" => "decimal",
        "System.String" => "string",
        "System.Object" => "object",
        _ => return None,
    })
}
