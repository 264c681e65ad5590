//! The reflection model of a package.
//!
//! [`Model`] owns everything built from a [`Package`]: the type registry and the member arena.
//! Loading resolves every method definition into a [`Method`] and materialises its parameter
//! descriptors; methods are loaded in parallel.
//!
//! Parameters only hold weak references to their method, so a [`MethodRc`] handed out by the
//! model keeps working for as long as the model (or the caller) holds it.
//!
//! # Examples
//!
//! ```rust
//! use il2scope::prelude::*;
//!
//! let mut builder = PackageBuilder::new();
//! let object = builder.add_type("System", "Object");
//! let string = builder.add_type("System", "String");
//! let object_usage = builder.type_usage(TypeUsageRaw::definition(object));
//! let string_usage = builder.type_usage(TypeUsageRaw::definition(string));
//!
//! let start = builder.next_parameter_index();
//! let (identity, first) =
//!     builder.generic_method(object, "Identity", object_usage, start, 1, &["T"]);
//! let t_usage = builder.type_usage(TypeUsageRaw::generic_parameter(first));
//! builder.parameter("value", t_usage);
//!
//! let model = Model::load(builder.build()?, ReflectionConfig::default())?;
//! let attributes = CustomAttributeTable::default();
//!
//! let open = model.method(identity).unwrap();
//! assert_eq!(open.format_signature(model.types(), &attributes)?, "object Identity(T value)");
//!
//! let closed = model.instantiate_method(identity, GenericContext::for_method(vec![string_usage]))?;
//! assert_eq!(closed.format_signature(model.types(), &attributes)?, "object Identity(string value)");
//! # Ok::<(), il2scope::Error>(())
//! ```

use std::sync::Arc;

use dashmap::DashMap;
use rayon::prelude::*;

use crate::{
    metadata::{
        config::ReflectionConfig,
        package::Package,
        tables::{Method, MethodIndex, MethodMap, MethodRc},
        typesystem::{GenericContext, TypeRegistry},
    },
    Result,
};

/// A loaded package: its type registry and every method with its parameters
pub struct Model {
    package: Arc<Package>,
    types: TypeRegistry,
    methods: MethodMap,
    instances: DashMap<(MethodIndex, GenericContext), MethodRc>,
    config: ReflectionConfig,
}

impl Model {
    /// Load `package`, resolving all type definitions and materialising the parameters of every
    /// method
    ///
    /// # Errors
    /// Returns an error if a method or type definition references data outside the package
    /// tables, or with [`ReflectionConfig::strict_default_values`], if a default value is
    /// missing
    pub fn load(package: Package, config: ReflectionConfig) -> Result<Model> {
        let package = Arc::new(package);
        let types = TypeRegistry::new(package.clone(), &config)?;
        let methods = MethodMap::new();

        package
            .method_definitions()
            .par_iter()
            .enumerate()
            .try_for_each(|(index, row)| -> Result<()> {
                let index = MethodIndex::try_from(index).map_err(|_| {
                    corruption_error!("Method definition table exceeds the index range")
                })?;

                let method = row.to_owned(index, &package, GenericContext::default())?;
                Method::load_parameters(&method, &package, &config)?;

                methods.insert(index, method);
                Ok(())
            })?;

        log::debug!(
            "Loaded {} methods with {} parameters over {} type usages",
            methods.len(),
            package.parameter_count(),
            package.type_usage_count()
        );

        Ok(Model {
            package,
            types,
            methods,
            instances: DashMap::new(),
            config,
        })
    }

    /// The package this model was loaded from
    #[must_use]
    pub fn package(&self) -> &Package {
        &self.package
    }

    /// The type registry resolving the package's type usages
    #[must_use]
    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    /// The configuration this model was loaded with
    #[must_use]
    pub fn config(&self) -> &ReflectionConfig {
        &self.config
    }

    /// All methods, keyed by method definition index
    #[must_use]
    pub fn methods(&self) -> &MethodMap {
        &self.methods
    }

    /// The method at definition index `index`
    #[must_use]
    pub fn method(&self, index: MethodIndex) -> Option<MethodRc> {
        self.methods.get(&index).map(|entry| entry.value().clone())
    }

    /// Construct the method at `index` with its generic parameters bound by `context`
    ///
    /// The constructed method owns its own parameter descriptors, whose types resolve under
    /// `context`. Constructions are cached: asking twice for the same context returns the same
    /// method.
    ///
    /// # Errors
    /// Returns an error if `index` is not a method definition of the package, or if loading the
    /// constructed method's parameters fails
    pub fn instantiate_method(
        &self,
        index: MethodIndex,
        context: GenericContext,
    ) -> Result<MethodRc> {
        let key = (index, context);
        if let Some(existing) = self.instances.get(&key) {
            return Ok(existing.value().clone());
        }

        let row = self.package.method_definition(index)?;
        let method = row.to_owned(index, &self.package, key.1.clone())?;
        Method::load_parameters(&method, &self.package, &self.config)?;

        log::trace!(
            "Instantiated method {} '{}' with {:?}",
            index,
            method.name,
            method.generic_context
        );

        Ok(self.instances.entry(key).or_insert(method).value().clone())
    }
}
