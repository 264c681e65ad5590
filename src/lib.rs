// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # il2scope
//!
//! Reflection-style access to the metadata of IL2CPP (ahead-of-time compiled .NET) binaries.
//!
//! IL2CPP strips the CIL from a .NET assembly and leaves behind a set of flat, index-linked
//! metadata tables. Parameters in those tables do not carry a type directly; they point at a
//! *type usage*, whose meaning depends on the generic context it is resolved in, and whether a
//! parameter is passed by reference has to be inferred by comparing that usage against the
//! *byref variant* recorded on the type definition. `il2scope` turns these raw indices into
//! parameter descriptors that behave like `System.Reflection.ParameterInfo`, so that signature
//! printers and code generators can reconstruct source-level declarations.
//!
//! ## Quick Start
//!
//! ```rust
//! use il2scope::prelude::*;
//!
//! let mut builder = PackageBuilder::new();
//! let int32 = builder.add_type("System", "Int32");
//! let int_usage = builder.type_usage(TypeUsageRaw::definition(int32));
//! let int_byref = builder.type_usage(TypeUsageRaw::definition(int32));
//! builder.set_type_usages(int32, int_usage, int_byref);
//!
//! let start = builder.parameter("value", int_byref);
//! builder.method(int32, "Increment", int_usage, start, 1);
//!
//! let model = Model::load(builder.build()?, ReflectionConfig::default())?;
//! let method = model.method(0).expect("method 0 exists");
//! let param = &method.parameters()[0];
//!
//! assert!(param.is_by_ref(model.types())?);
//! assert_eq!(
//!     param.format(model.types(), &CustomAttributeTable::default(), SignatureStyle::CSharp)?,
//!     "ref int value"
//! );
//! # Ok::<(), il2scope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`metadata::package`] - The immutable, pre-parsed metadata tables and a builder for them
//! - [`metadata::tables`] - Raw rows and their resolved forms, including [`metadata::tables::Parameter`]
//! - [`metadata::typesystem`] - Type usages resolved into [`metadata::typesystem::TypeInfo`]
//! - [`metadata::customattributes`] - The seam to the custom attribute decoder
//! - [`metadata::model`] - Loads a package and owns every member and its parameters
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade and never installs a logger
//! itself. Model loading reports a summary at `debug` level, inconsistent default value records
//! are reported at `debug`/`warn` level.
#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use il2scope::prelude::*;
///
/// let package = PackageBuilder::new().build()?;
/// let model = Model::load(package, ReflectionConfig::default())?;
/// assert_eq!(model.methods().len(), 0);
/// # Ok::<(), il2scope::Error>(())
/// ```
pub mod prelude;

/// Metadata tables, type resolution and the reflection model built on top of them.
///
/// # Key Components
///
/// - [`metadata::package::Package`] - Pre-parsed metadata tables
/// - [`metadata::model::Model`] - Member arena and entry point for queries
/// - [`metadata::tables::Parameter`] - The parameter descriptor
/// - [`metadata::typesystem::TypeRegistry`] - Memoising type usage resolver
pub mod metadata;

/// `il2scope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `il2scope` Error type
///
/// Every fallible operation of this crate reports one of its variants.
pub use error::Error;
