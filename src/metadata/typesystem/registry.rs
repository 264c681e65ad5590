//! Memoising type resolution.
//!
//! [`TypeRegistry`] owns the resolved type definitions of a package and caches every
//! `(usage, generic context)` pair it has resolved. Each cache entry is a `OnceCell`, so a
//! pair is assembled at most once even when many threads ask for it concurrently.
//!
//! A usage is resolved bottom-up: the usages it references (array elements, generic
//! arguments, bound generic parameters) are resolved first, each through its own cache entry,
//! and only then is the entry for the usage itself initialised. No entry is ever initialised
//! while waiting on another, and no map shard lock is held during resolution. The chain of
//! usages being resolved on the current call is tracked to reject cyclic usage graphs.

use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::OnceCell;

use crate::{
    metadata::{
        config::ReflectionConfig,
        package::Package,
        tables::{table_index, TypeDefinitionIndex, TypeUsageIndex, TypeUsageKind},
        typesystem::{GenericContext, TypeFlavor, TypeInfo, TypeInfoRc, TypeResolver},
    },
    Error::{self, RecursionLimit},
    Result,
};

type CacheKey = (TypeUsageIndex, GenericContext);

/// What a usage resolves to, once the usages it references are resolved
enum Pending {
    /// A type that needs no further assembly
    Ready(TypeInfoRc),
    /// A generic definition bound to argument types
    Instance {
        definition: TypeInfoRc,
        arguments: Vec<TypeInfoRc>,
    },
    /// An array of the element type
    Array { element: TypeInfoRc, rank: u8 },
    /// A pointer to the element type
    Pointer(TypeInfoRc),
    /// A generic parameter not bound by the context
    Unbound {
        name: String,
        position: u16,
        method: bool,
    },
}

/// Resolves type usages of one package and caches the results
pub struct TypeRegistry {
    package: Arc<Package>,
    definitions: Vec<TypeInfoRc>,
    cache: DashMap<CacheKey, Arc<OnceCell<TypeInfoRc>>>,
    max_depth: usize,
}

impl TypeRegistry {
    /// Create a registry for `package`, resolving all of its type definitions up front
    ///
    /// # Errors
    /// Returns an error if a type definition references names or generic containers outside
    /// the package tables
    ///
    /// ## Arguments
    /// * 'package' - The package whose usages will be resolved
    /// * 'config'  - Provides the maximum nesting depth of a usage
    pub fn new(package: Arc<Package>, config: &ReflectionConfig) -> Result<Self> {
        let definitions = package
            .type_definitions()
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let index = TypeDefinitionIndex::try_from(index).map_err(|_| {
                    corruption_error!("Type definition table exceeds the index range")
                })?;
                row.to_owned(index, &package)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(TypeRegistry {
            package,
            definitions,
            cache: DashMap::new(),
            max_depth: config.max_resolution_depth,
        })
    }

    /// The package this registry resolves against
    #[must_use]
    pub fn package(&self) -> &Arc<Package> {
        &self.package
    }

    /// The resolved type definition at `index`
    #[must_use]
    pub fn definition(&self, index: TypeDefinitionIndex) -> Option<&TypeInfoRc> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.definitions.get(index))
    }

    /// Number of resolved `(usage, context)` pairs in the cache
    #[must_use]
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    fn resolve_chain(
        &self,
        usage: TypeUsageIndex,
        context: &GenericContext,
        chain: &mut Vec<CacheKey>,
    ) -> Result<TypeInfoRc> {
        let key = (usage, context.clone());
        if let Some(resolved) = self.cache.get(&key).and_then(|cell| cell.get().cloned()) {
            return Ok(resolved);
        }

        if chain.contains(&key) {
            return Err(corruption_error!(
                "Type usage {} references itself through {} other usages",
                usage,
                chain.len()
            ));
        }
        if chain.len() >= self.max_depth {
            return Err(RecursionLimit(self.max_depth));
        }

        chain.push(key.clone());
        let pending = self.resolve_references(usage, context, chain);
        chain.pop();
        let pending = pending?;

        // Clone the cell out of the map so that no shard lock is held during initialisation
        let cell = self.cache.entry(key).or_default().clone();
        let resolved = cell.get_or_init(|| Self::assemble(pending));
        Ok(resolved.clone())
    }

    fn resolve_references(
        &self,
        usage: TypeUsageIndex,
        context: &GenericContext,
        chain: &mut Vec<CacheKey>,
    ) -> Result<Pending> {
        let row = self.package.type_usage(usage)?;
        match &row.kind {
            TypeUsageKind::Definition(index) => {
                Ok(Pending::Ready(self.lookup_definition(usage, *index)?))
            }
            TypeUsageKind::GenericInstance {
                definition,
                arguments,
            } => {
                let definition = self.lookup_definition(usage, *definition)?;
                let arguments = arguments
                    .iter()
                    .map(|argument| self.resolve_chain(*argument, context, chain))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Pending::Instance {
                    definition,
                    arguments,
                })
            }
            TypeUsageKind::Array { element, rank } => Ok(Pending::Array {
                element: self.resolve_chain(*element, context, chain)?,
                rank: *rank,
            }),
            TypeUsageKind::Pointer(element) => Ok(Pending::Pointer(
                self.resolve_chain(*element, context, chain)?,
            )),
            TypeUsageKind::GenericParameter(index) => {
                let parameter = self.package.generic_parameter(*index)?;
                let container = self.package.generic_container(parameter.owner_index)?;

                match context.argument(parameter.num, container.is_method) {
                    // Arguments are usages of the caller's scope and carry no context of their own
                    Some(argument) => Ok(Pending::Ready(self.resolve_chain(
                        argument,
                        &GenericContext::default(),
                        chain,
                    )?)),
                    None => Ok(Pending::Unbound {
                        name: self.package.string_at(parameter.name_index)?.to_string(),
                        position: parameter.num,
                        method: container.is_method,
                    }),
                }
            }
        }
    }

    fn lookup_definition(
        &self,
        usage: TypeUsageIndex,
        index: TypeDefinitionIndex,
    ) -> Result<TypeInfoRc> {
        self.definition(index)
            .cloned()
            .ok_or_else(|| Error::UnresolvedTypeReference {
                usage,
                reason: format!("type definition {index} does not exist"),
            })
    }

    fn assemble(pending: Pending) -> TypeInfoRc {
        match pending {
            Pending::Ready(resolved) => resolved,
            Pending::Instance {
                definition,
                arguments,
            } => Arc::new(TypeInfo {
                name: definition.name.clone(),
                namespace: definition.namespace.clone(),
                definition: definition.definition,
                byref_type_index: definition.byref_type_index,
                flavor: TypeFlavor::GenericInstance {
                    definition,
                    arguments,
                },
            }),
            Pending::Array { element, rank } => Arc::new(TypeInfo {
                name: format!("{}[]", element.name),
                namespace: element.namespace.clone(),
                definition: None,
                byref_type_index: None,
                flavor: TypeFlavor::Array { element, rank },
            }),
            Pending::Pointer(element) => Arc::new(TypeInfo {
                name: format!("{}*", element.name),
                namespace: element.namespace.clone(),
                definition: None,
                byref_type_index: None,
                flavor: TypeFlavor::Pointer { element },
            }),
            Pending::Unbound {
                name,
                position,
                method,
            } => Arc::new(TypeInfo {
                name: name.clone(),
                namespace: String::new(),
                definition: None,
                byref_type_index: None,
                flavor: TypeFlavor::GenericParameter {
                    name,
                    position,
                    method,
                },
            }),
        }
    }
}

impl TypeResolver for TypeRegistry {
    fn resolve(&self, usage: TypeUsageIndex, context: &GenericContext) -> Result<TypeInfoRc> {
        table_index(usage, "type usage")?;
        self.resolve_chain(usage, context, &mut Vec::new())
    }
}
