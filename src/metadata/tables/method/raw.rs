use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::{
    metadata::{
        package::Package,
        tables::{
            GenericContainerIndex, Method, MethodIndex, MethodRc, ParameterIndex, StringIndex,
            TypeDefinitionIndex, TypeUsageIndex,
        },
        typesystem::GenericContext,
    },
    Result,
};

#[derive(Clone, Debug, PartialEq, Eq)]
/// A row of the method definition table (`Il2CppMethodDefinition`)
pub struct MethodDefinitionRaw {
    /// an index into the string table
    pub name_index: StringIndex,
    /// the type definition declaring this method
    pub declaring_type: TypeDefinitionIndex,
    /// an index into the type usage table
    pub return_type: TypeUsageIndex,
    /// index of the first parameter in the flat parameter table
    pub parameter_start: ParameterIndex,
    /// number of parameters, excluding the return value
    pub parameter_count: u16,
    /// the generic container declaring this method's generic parameters, `-1` if not generic
    pub generic_container_index: GenericContainerIndex,
    /// the metadata token of the method in the original assembly
    pub token: u32,
}

impl MethodDefinitionRaw {
    /// Convert a `MethodDefinitionRaw` into a [`Method`], with its name resolved
    ///
    /// The returned method has no parameters yet; they are materialised by
    /// [`Method::load_parameters`] once the method is shared.
    ///
    /// # Errors
    /// Returns an error if the method name cannot be retrieved from the string table
    ///
    /// ## Arguments
    /// * 'index'   - The index of this row in the method definition table
    /// * 'package' - The package holding the string table
    /// * 'context' - The generic context the method's signature is resolved in
    pub fn to_owned(
        &self,
        index: MethodIndex,
        package: &Package,
        context: GenericContext,
    ) -> Result<MethodRc> {
        Ok(Arc::new(Method {
            index,
            token: self.token,
            name: package.string_at(self.name_index)?.to_string(),
            declaring_type: self.declaring_type,
            return_type: self.return_type,
            parameter_start: self.parameter_start,
            parameter_count: self.parameter_count,
            generic_container_index: self.generic_container_index,
            generic_context: context,
            params: Arc::new(boxcar::Vec::new()),
            return_param: OnceCell::new(),
        }))
    }
}
