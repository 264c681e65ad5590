use crate::{
    metadata::{
        package::Package,
        tables::{GenericContainerIndex, GenericParameterIndex, StringIndex},
    },
    Result,
};

#[derive(Clone, Debug, PartialEq, Eq)]
/// A row of the generic container table
pub struct GenericContainerRaw {
    /// index of the owning type definition or method definition
    pub owner_index: i32,
    /// number of generic parameters declared by the owner
    pub type_argc: u16,
    /// true if the owner is a method (`MVAR` parameters), false for a type (`VAR` parameters)
    pub is_method: bool,
    /// first index of this container's slice of the generic parameter table
    pub generic_parameter_start: GenericParameterIndex,
}

impl GenericContainerRaw {
    /// Resolve the names of all generic parameters declared by this container, in declaration
    /// order
    ///
    /// # Errors
    /// Returns an error if the parameter slice or a name lies outside the package tables
    ///
    /// ## Arguments
    /// * 'package' - The package holding the generic parameter and string tables
    pub fn parameter_names(&self, package: &Package) -> Result<Vec<String>> {
        (0..i32::from(self.type_argc))
            .map(|offset| {
                let parameter = package.generic_parameter(self.generic_parameter_start + offset)?;
                Ok(package.string_at(parameter.name_index)?.to_string())
            })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A row of the generic parameter table
pub struct GenericParameterRaw {
    /// the generic container declaring this parameter
    pub owner_index: GenericContainerIndex,
    /// an index into the string table
    pub name_index: StringIndex,
    /// position of the parameter within its container, numbered from zero
    pub num: u16,
}
