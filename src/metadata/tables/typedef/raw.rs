use std::sync::Arc;

use crate::{
    metadata::{
        package::Package,
        tables::{GenericContainerIndex, StringIndex, TypeDefinitionIndex, TypeUsageIndex},
        typesystem::{TypeFlavor, TypeInfo, TypeInfoRc},
    },
    Result,
};

#[derive(Clone, Debug, PartialEq, Eq)]
/// A row of the type definition table
pub struct TypeDefinitionRaw {
    /// an index into the string table
    pub name_index: StringIndex,
    /// an index into the string table
    pub namespace_index: StringIndex,
    /// the type usage referring to this type by value, `-1` if never used
    pub byval_type_index: TypeUsageIndex,
    /// the type usage referring to this type by reference, `-1` if never used
    pub byref_type_index: TypeUsageIndex,
    /// the generic container declaring this type's generic parameters, `-1` if not generic
    pub generic_container_index: GenericContainerIndex,
}

impl TypeDefinitionRaw {
    /// Returns true if this definition declares generic parameters
    #[must_use]
    pub fn is_generic(&self) -> bool {
        self.generic_container_index >= 0
    }

    /// Convert a `TypeDefinitionRaw` into a [`TypeInfo`], with names resolved
    ///
    /// # Errors
    /// Returns an error if a name or the generic container cannot be found in the package
    ///
    /// ## Arguments
    /// * 'index'   - The index of this row in the type definition table
    /// * 'package' - The package holding the referenced tables
    pub fn to_owned(&self, index: TypeDefinitionIndex, package: &Package) -> Result<TypeInfoRc> {
        let flavor = if self.is_generic() {
            let container = package.generic_container(self.generic_container_index)?;
            TypeFlavor::GenericTypeDefinition {
                parameters: container.parameter_names(package)?,
            }
        } else {
            TypeFlavor::Definition
        };

        Ok(Arc::new(TypeInfo {
            name: package.string_at(self.name_index)?.to_string(),
            namespace: package.string_at(self.namespace_index)?.to_string(),
            flavor,
            definition: Some(index),
            byref_type_index: (self.byref_type_index >= 0).then_some(self.byref_type_index),
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::metadata::{package::PackageBuilder, tables::TypeUsageRaw, typesystem::TypeFlavor};

    #[test]
    fn definition_to_owned() {
        let mut builder = PackageBuilder::new();
        let int32 = builder.add_type("System", "Int32");
        let byval = builder.type_usage(TypeUsageRaw::definition(int32));
        let byref = builder.type_usage(TypeUsageRaw::definition(int32));
        builder.set_type_usages(int32, byval, byref);
        let package = builder.build().unwrap();

        let row = package.type_definition(int32).unwrap();
        assert!(!row.is_generic());

        let info = row.to_owned(int32, &package).unwrap();
        assert_eq!(info.name, "Int32");
        assert_eq!(info.namespace, "System");
        assert_eq!(info.definition, Some(int32));
        assert_eq!(info.byref_type_index, Some(byref));
        assert!(matches!(info.flavor, TypeFlavor::Definition));
    }

    #[test]
    fn generic_definition_to_owned() {
        let mut builder = PackageBuilder::new();
        let dictionary = builder.add_generic_type(
            "System.Collections.Generic",
            "Dictionary`2",
            &["TKey", "TValue"],
        );
        let package = builder.build().unwrap();

        let row = package.type_definition(dictionary).unwrap();
        assert!(row.is_generic());

        let info = row.to_owned(dictionary, &package).unwrap();
        assert_eq!(info.byref_type_index, None);
        match &info.flavor {
            TypeFlavor::GenericTypeDefinition { parameters } => {
                assert_eq!(parameters, &["TKey".to_string(), "TValue".to_string()]);
            }
            other => panic!("unexpected flavor {other:?}"),
        }
    }
}
