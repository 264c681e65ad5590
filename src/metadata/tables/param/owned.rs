use std::sync::Arc;

use crate::{
    metadata::{
        package::Package,
        tables::{
            MethodRc, MethodRef, ParameterAttributes, ParameterIndex, ParameterRc, TypeUsageIndex,
        },
        typesystem::{ConstantValue, TypeInfoRc, TypeResolver},
    },
    Error, Result,
};

/// A parameter of a method, or the return value of a method, modelled on
/// `System.Reflection.ParameterInfo`.
///
/// A `Parameter` is built once from the raw tables and never changes afterwards. Its type is
/// *not* stored: it is resolved on every request through a [`TypeResolver`], using the generic
/// context of the declaring member. Whether the parameter is passed by reference is derived
/// from that resolution as well, see [`Parameter::is_by_ref`].
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Index into the flat parameter definition table, `-1` for the return value
    pub index: ParameterIndex,
    /// The member declaring this parameter (non-owning)
    pub owner: MethodRef,
    /// The raw type usage index of this parameter
    pub type_usage: TypeUsageIndex,
    /// bitmask of `ParameterAttributes`
    pub flags: ParameterAttributes,
    /// The parameter name, `None` for the return value
    pub name: Option<String>,
    /// Zero-based position within the member's parameter list, `-1` for the return value
    pub position: i32,
    /// `flags.HAS_DEFAULT` -> the recorded default value, if the package has one
    pub default: Option<ConstantValue>,
}

impl Parameter {
    /// Create the descriptor for the parameter at `index`, declared by `owner`
    ///
    /// With `index == -1` the return value descriptor of `owner` is created; its type usage is
    /// the member's return type and no further metadata is read.
    ///
    /// # Errors
    /// Returns [`Error::MetadataCorruption`] if `index`, the parameter's name or its type usage
    /// lie outside the package tables.
    ///
    /// ## Arguments
    /// * 'package' - The metadata tables
    /// * 'index'   - Index into the parameter definition table, or `-1` for the return value
    /// * 'owner'   - The declaring member
    pub fn new(package: &Package, index: ParameterIndex, owner: &MethodRc) -> Result<ParameterRc> {
        if index == -1 {
            return Ok(Arc::new(Parameter {
                index,
                owner: MethodRef::new(owner),
                type_usage: owner.return_type,
                flags: ParameterAttributes::RETVAL,
                name: None,
                position: -1,
                default: None,
            }));
        }

        let definition = package.parameter_definition(index)?;
        let name = package.string_at(definition.name_index)?.to_string();
        let position = index.checked_sub(owner.parameter_start).ok_or_else(|| {
            corruption_error!(
                "Parameter {} cannot be positioned relative to start {} of method {}",
                index,
                owner.parameter_start,
                owner.index
            )
        })?;

        let usage = package.type_usage(definition.type_index)?;
        let mut flags = ParameterAttributes::from_raw(usage.attrs);
        if position == -1 {
            flags |= ParameterAttributes::RETVAL;
        }

        let default = match package.default_value_for(index) {
            Some(value) if flags.contains(ParameterAttributes::HAS_DEFAULT) => Some(value.clone()),
            Some(_) => {
                log::warn!(
                    "Parameter {} ({}) has a default value record without HasDefault, ignoring it",
                    index,
                    name
                );
                None
            }
            None => {
                if flags.contains(ParameterAttributes::HAS_DEFAULT) {
                    log::debug!(
                        "Parameter {} ({}) is flagged HasDefault but has no recorded value",
                        index,
                        name
                    );
                }
                None
            }
        };

        log::trace!(
            "Parameter {} '{}' of method {} at position {}",
            index,
            name,
            owner.index,
            position
        );

        Ok(Arc::new(Parameter {
            index,
            owner: MethodRef::new(owner),
            type_usage: definition.type_index,
            flags,
            name: Some(name),
            position,
            default,
        }))
    }

    /// True if the parameter is flagged as having a default value
    ///
    /// The value itself may still be absent from the package, see [`Parameter::default`].
    #[must_use]
    pub fn has_default_value(&self) -> bool {
        self.flags.contains(ParameterAttributes::HAS_DEFAULT)
    }

    /// True if the parameter is `in`
    #[must_use]
    pub fn is_in(&self) -> bool {
        self.flags.contains(ParameterAttributes::IN)
    }

    /// True if the parameter is `out`
    #[must_use]
    pub fn is_out(&self) -> bool {
        self.flags.contains(ParameterAttributes::OUT)
    }

    /// True if the parameter is optional
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.flags.contains(ParameterAttributes::OPTIONAL)
    }

    /// True if this descriptor represents the return value of its member
    #[must_use]
    pub fn is_retval(&self) -> bool {
        self.flags.contains(ParameterAttributes::RETVAL)
    }

    /// The declaring member, if it is still alive
    #[must_use]
    pub fn member(&self) -> Option<MethodRc> {
        self.owner.upgrade()
    }

    /// Resolve the type of this parameter under the declaring member's generic context
    ///
    /// # Errors
    /// Returns [`Error::UnresolvedTypeReference`] if the declaring member has been dropped or
    /// the resolver cannot map the usage, and any error the resolver reports.
    pub fn parameter_type(&self, resolver: &dyn TypeResolver) -> Result<TypeInfoRc> {
        let Some(owner) = self.owner.upgrade() else {
            return Err(Error::UnresolvedTypeReference {
                usage: self.type_usage,
                reason: "the declaring member has been dropped".to_string(),
            });
        };

        resolver.resolve(self.type_usage, &owner.generic_context)
    }

    /// True if the parameter is passed as `ref`
    ///
    /// A parameter is by-reference when its type usage is the byref variant recorded on the
    /// resolved type. For a type that still contains unbound generic parameters that
    /// comparison is meaningless, and the answer is `false`. The result is recomputed on each
    /// call since it depends on the resolver's state.
    ///
    /// # Errors
    /// Returns an error if the parameter type cannot be resolved
    pub fn is_by_ref(&self, resolver: &dyn TypeResolver) -> Result<bool> {
        let parameter_type = self.parameter_type(resolver)?;
        if parameter_type.contains_generic_parameters() {
            return Ok(false);
        }

        Ok(parameter_type.byref_type_index == Some(self.type_usage))
    }
}
