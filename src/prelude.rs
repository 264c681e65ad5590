//! # il2scope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the il2scope library. Import this module to get quick access to the essential
//! types for resolving and rendering IL2CPP parameters.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all il2scope operations
pub use crate::Error;

/// The result type used throughout il2scope
pub use crate::Result;

/// Configuration for model loading and type resolution
pub use crate::metadata::config::ReflectionConfig;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// The loaded reflection model and its member arena
pub use crate::metadata::model::Model;

/// Pre-parsed metadata tables and their builder
pub use crate::metadata::package::{Package, PackageBuilder};

// ================================================================================================
// Members and Parameters
// ================================================================================================

/// Methods (members declaring parameters)
pub use crate::metadata::tables::{Method, MethodMap, MethodRc, MethodRef};

/// The parameter descriptor and its attribute flags
pub use crate::metadata::tables::{
    ParamAttributes, Parameter, ParameterAttributes, ParameterList, ParameterRc, SignatureStyle,
};

/// Raw table rows and index aliases
pub use crate::metadata::tables::{
    GenericContainerIndex, GenericParameterIndex, MethodIndex, ParameterIndex, StringIndex,
    TypeDefinitionIndex, TypeUsageIndex, TypeUsageKind, TypeUsageRaw,
};

// ================================================================================================
// Type System
// ================================================================================================

/// Resolved types, generic contexts and the resolver seam
pub use crate::metadata::typesystem::{
    ConstantValue, GenericContext, TypeFlavor, TypeInfo, TypeInfoRc, TypeRegistry, TypeResolver,
};

// ================================================================================================
// Custom Attributes
// ================================================================================================

/// Attribute records and the decoder seam
pub use crate::metadata::customattributes::{
    AttributeSource, CustomAttribute, CustomAttributeTable,
};
