//! Metadata tables and the reflection model of IL2CPP binaries.
//!
//! IL2CPP keeps the reflection data of every assembly in a set of flat tables that reference
//! each other by plain integer indices. This module turns those indices into a queryable model.
//!
//! # Key Components
//!
//! - [`package`] - The tables as handed over by the file format parser
//! - [`streams`] - Access to the string table
//! - [`tables`] - Raw rows and the resolved members and parameters built from them
//! - [`typesystem`] - Resolution of type usages under a generic context
//! - [`customattributes`] - Attribute records attached to parameters
//! - [`model`] - The member arena tying all of the above together
//! - [`config`] - Loading and resolution options
//!
//! # Examples
//!
//! ```rust
//! use il2scope::prelude::*;
//!
//! let mut builder = PackageBuilder::new();
//! let void = builder.add_type("System", "Void");
//! let void_usage = builder.type_usage(TypeUsageRaw::definition(void));
//! builder.method(void, "Run", void_usage, -1, 0);
//!
//! let model = Model::load(builder.build()?, ReflectionConfig::default())?;
//! for entry in model.methods().iter() {
//!     let method = entry.value();
//!     println!("{}", method.format_signature(model.types(), &CustomAttributeTable::default())?);
//! }
//! # Ok::<(), il2scope::Error>(())
//! ```

/// Options for loading a model and resolving types
pub mod config;
/// Implementation of the custom attribute seam
pub mod customattributes;
/// Implementation of the member arena
pub mod model;
/// Implementation of the pre-parsed metadata package
pub mod package;
/// Implementation of the metadata string table
pub mod streams;
/// Implementation of the IL2CPP metadata tables
pub mod tables;
/// Implementation of the type system
pub mod typesystem;
