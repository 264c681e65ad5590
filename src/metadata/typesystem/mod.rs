//! Type system for parameter resolution.
//!
//! Parameters store only the raw index of their type usage. This module turns such a usage
//! into a [`TypeInfo`] on request, under the [`GenericContext`] of the declaring member.
//!
//! # Key Components
//!
//! - [`TypeInfo`] / [`TypeFlavor`] - a resolved type and its shape, with reflection and C# names
//! - [`GenericContext`] - the usages bound to type (`VAR`) and method (`MVAR`) generic parameters
//! - [`TypeResolver`] - the resolution seam used by [`crate::metadata::tables::Parameter`]
//! - [`TypeRegistry`] - the memoising resolver of a package
//! - [`ConstantValue`] - values of the default-value table
//!
//! # Generic parameters
//!
//! A usage of a generic parameter resolves to the type bound to it by the context. Whether the
//! parameter belongs to the type or the method is recorded on its generic container. A
//! parameter the context does not bind resolves to a [`TypeFlavor::GenericParameter`], which
//! [contains generic parameters](TypeInfo::contains_generic_parameters).
//!
//! # Examples
//!
//! ```rust
//! use il2scope::prelude::*;
//!
//! let mut builder = PackageBuilder::new();
//! let int32 = builder.add_type("System", "Int32");
//! let int_usage = builder.type_usage(TypeUsageRaw::definition(int32));
//! let matrix = builder.type_usage(TypeUsageRaw::array(int_usage, 2));
//!
//! let model = Model::load(builder.build()?, ReflectionConfig::default())?;
//! let resolved = model.types().resolve(matrix, &GenericContext::default())?;
//! assert_eq!(resolved.csharp_name(), "int[,]");
//! assert_eq!(resolved.full_name(), "System.Int32[,]");
//! # Ok::<(), il2scope::Error>(())
//! ```

mod base;
mod primitives;
mod registry;
mod resolver;

pub use base::*;
pub use primitives::*;
pub use registry::*;
pub use resolver::*;
