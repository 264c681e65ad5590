use crate::metadata::tables::{StringIndex, TypeUsageIndex};

#[derive(Clone, Debug, PartialEq, Eq)]
/// A row of the flat parameter definition table (`Il2CppParameterDefinition`)
pub struct ParameterDefinitionRaw {
    /// an index into the string table
    pub name_index: StringIndex,
    /// the metadata token of the parameter in the original assembly
    pub token: u32,
    /// an index into the type usage table; the usage also carries the parameter's attributes
    pub type_index: TypeUsageIndex,
}
