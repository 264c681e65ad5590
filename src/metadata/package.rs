//! The pre-parsed metadata tables of one IL2CPP binary.
//!
//! A [`Package`] is what the file format parser hands over: the string table and every table
//! row in decoded, but unresolved, form. It is immutable once built and answers index lookups
//! with bounds checks, reporting any out-of-range index as
//! [`crate::Error::MetadataCorruption`].
//!
//! [`PackageBuilder`] assembles a package programmatically, for parsers and for tests.
//!
//! # Examples
//!
//! ```rust
//! use il2scope::prelude::*;
//!
//! let mut builder = PackageBuilder::new();
//! let string = builder.add_type("System", "String");
//! let usage = builder.type_usage(TypeUsageRaw::definition(string));
//! let first = builder.parameter("name", usage);
//! builder.parameter("value", usage);
//!
//! let package = builder.build()?;
//! assert_eq!(package.parameter_count(), 2);
//! let definition = package.parameter_definition(first + 1)?;
//! assert_eq!(package.string_at(definition.name_index)?, "value");
//! assert!(package.parameter_definition(2).is_err());
//! # Ok::<(), il2scope::Error>(())
//! ```

use std::collections::HashMap;

use crate::{
    metadata::{
        streams::Strings,
        tables::{
            table_index, GenericContainerIndex, GenericContainerRaw, GenericParameterIndex,
            GenericParameterRaw, MethodDefinitionRaw, MethodIndex, ParameterDefinitionRaw,
            ParameterIndex, StringIndex, TypeDefinitionIndex, TypeDefinitionRaw, TypeUsageIndex,
            TypeUsageRaw,
        },
        typesystem::ConstantValue,
    },
    Result,
};

/// Looks up the row at a signed `index`, rejecting negative and out-of-range indices
macro_rules! row {
    ($rows:expr, $index:expr, $table:literal) => {{
        let index = $index;
        $rows.get(table_index(index, $table)?).ok_or_else(|| {
            corruption_error!(
                "Index {} exceeds the {} table of {} rows",
                index,
                $table,
                $rows.len()
            )
        })
    }};
}

/// The immutable metadata tables of one binary
#[derive(Debug, Clone, Default)]
pub struct Package {
    strings: Vec<u8>,
    type_definitions: Vec<TypeDefinitionRaw>,
    type_usages: Vec<TypeUsageRaw>,
    generic_containers: Vec<GenericContainerRaw>,
    generic_parameters: Vec<GenericParameterRaw>,
    methods: Vec<MethodDefinitionRaw>,
    parameters: Vec<ParameterDefinitionRaw>,
    default_values: HashMap<ParameterIndex, ConstantValue>,
}

impl Package {
    /// The string starting at byte offset `index` of the string table
    ///
    /// # Errors
    /// Returns [`crate::Error::MetadataCorruption`] if the offset lies outside the table or the
    /// data is not nul-terminated UTF-8
    pub fn string_at(&self, index: StringIndex) -> Result<&str> {
        let offset = usize::try_from(index)
            .map_err(|_| corruption_error!("String offset {} is not addressable", index))?;
        // constant time; `Package::default()` has no string table and never went through `build`
        Strings::from(&self.strings)?.get(offset)
    }

    /// The parameter definition at flat index `index`
    ///
    /// # Errors
    /// Returns [`crate::Error::MetadataCorruption`] if `index` is outside the table
    pub fn parameter_definition(&self, index: ParameterIndex) -> Result<&ParameterDefinitionRaw> {
        row!(self.parameters, index, "parameter")
    }

    /// The type usage at `index`
    ///
    /// # Errors
    /// Returns [`crate::Error::MetadataCorruption`] if `index` is outside the table
    pub fn type_usage(&self, index: TypeUsageIndex) -> Result<&TypeUsageRaw> {
        row!(self.type_usages, index, "type usage")
    }

    /// The type definition at `index`
    ///
    /// # Errors
    /// Returns [`crate::Error::MetadataCorruption`] if `index` is outside the table
    pub fn type_definition(&self, index: TypeDefinitionIndex) -> Result<&TypeDefinitionRaw> {
        row!(self.type_definitions, index, "type definition")
    }

    /// The method definition at `index`
    ///
    /// # Errors
    /// Returns [`crate::Error::MetadataCorruption`] if `index` is outside the table
    pub fn method_definition(&self, index: MethodIndex) -> Result<&MethodDefinitionRaw> {
        row!(self.methods, index, "method definition")
    }

    /// The generic container at `index`
    ///
    /// # Errors
    /// Returns [`crate::Error::MetadataCorruption`] if `index` is outside the table
    pub fn generic_container(&self, index: GenericContainerIndex) -> Result<&GenericContainerRaw> {
        row!(self.generic_containers, index, "generic container")
    }

    /// The generic parameter at `index`
    ///
    /// # Errors
    /// Returns [`crate::Error::MetadataCorruption`] if `index` is outside the table
    pub fn generic_parameter(&self, index: GenericParameterIndex) -> Result<&GenericParameterRaw> {
        row!(self.generic_parameters, index, "generic parameter")
    }

    /// The default value recorded for the parameter at flat index `index`, if any
    #[must_use]
    pub fn default_value_for(&self, index: ParameterIndex) -> Option<&ConstantValue> {
        self.default_values.get(&index)
    }

    /// All type definitions, in table order
    #[must_use]
    pub fn type_definitions(&self) -> &[TypeDefinitionRaw] {
        &self.type_definitions
    }

    /// All method definitions, in table order
    #[must_use]
    pub fn method_definitions(&self) -> &[MethodDefinitionRaw] {
        &self.methods
    }

    /// Number of rows in the flat parameter table
    #[must_use]
    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    /// Number of rows in the type usage table
    #[must_use]
    pub fn type_usage_count(&self) -> usize {
        self.type_usages.len()
    }
}

/// Assembles a [`Package`] row by row
///
/// Every `add_*`/`type_usage`/`parameter`/`method` call appends one row and returns its index.
/// Strings are interned; the empty string always lives at offset 0. The builder performs no
/// consistency checks beyond the string table: rows may reference indices that do not exist,
/// which is how broken binaries are reproduced.
#[derive(Debug, Clone)]
pub struct PackageBuilder {
    package: Package,
    interned: HashMap<String, StringIndex>,
}

impl Default for PackageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageBuilder {
    /// Create a builder holding an empty package
    #[must_use]
    pub fn new() -> Self {
        let mut interned = HashMap::new();
        interned.insert(String::new(), 0);

        PackageBuilder {
            package: Package {
                strings: vec![0],
                ..Package::default()
            },
            interned,
        }
    }

    /// Intern `value` into the string table and return its offset
    pub fn string(&mut self, value: &str) -> StringIndex {
        if let Some(&index) = self.interned.get(value) {
            return index;
        }

        #[allow(clippy::cast_possible_truncation)]
        let index = self.package.strings.len() as StringIndex;
        self.package.strings.extend_from_slice(value.as_bytes());
        self.package.strings.push(0);
        self.interned.insert(value.to_string(), index);
        index
    }

    /// Append a non-generic type definition
    pub fn add_type(&mut self, namespace: &str, name: &str) -> TypeDefinitionIndex {
        let row = TypeDefinitionRaw {
            name_index: self.string(name),
            namespace_index: self.string(namespace),
            byval_type_index: -1,
            byref_type_index: -1,
            generic_container_index: -1,
        };
        push(&mut self.package.type_definitions, row)
    }

    /// Append a generic type definition declaring `parameters`, together with its generic
    /// container and one generic parameter per name
    pub fn add_generic_type(
        &mut self,
        namespace: &str,
        name: &str,
        parameters: &[&str],
    ) -> TypeDefinitionIndex {
        let index = self.add_type(namespace, name);
        let container = self.add_container(index, false, parameters);
        self.package.type_definitions[to_usize(index)].generic_container_index = container;
        index
    }

    /// The generic parameter at `position` of the generic type definition `type_index`
    #[must_use]
    pub fn type_generic_parameter(
        &self,
        type_index: TypeDefinitionIndex,
        position: u16,
    ) -> Option<GenericParameterIndex> {
        let definition = self.package.type_definitions.get(to_usize(type_index))?;
        self.container_parameter(definition.generic_container_index, position)
    }

    /// Record the by-value and by-reference usages of a type definition
    pub fn set_type_usages(
        &mut self,
        type_index: TypeDefinitionIndex,
        byval: TypeUsageIndex,
        byref: TypeUsageIndex,
    ) {
        if let Some(definition) = self.package.type_definitions.get_mut(to_usize(type_index)) {
            definition.byval_type_index = byval;
            definition.byref_type_index = byref;
        }
    }

    /// Append a type usage
    pub fn type_usage(&mut self, usage: TypeUsageRaw) -> TypeUsageIndex {
        push(&mut self.package.type_usages, usage)
    }

    /// Append a parameter definition
    pub fn parameter(&mut self, name: &str, type_index: TypeUsageIndex) -> ParameterIndex {
        let name_index = self.string(name);
        #[allow(clippy::cast_possible_truncation)]
        let token = 0x0800_0001 + self.package.parameters.len() as u32;
        push(
            &mut self.package.parameters,
            ParameterDefinitionRaw {
                name_index,
                token,
                type_index,
            },
        )
    }

    /// The flat index the next call to [`PackageBuilder::parameter`] will return
    #[must_use]
    pub fn next_parameter_index(&self) -> ParameterIndex {
        to_index(self.package.parameters.len())
    }

    /// Record the default value of the parameter at flat index `index`
    pub fn default_value(&mut self, index: ParameterIndex, value: ConstantValue) {
        self.package.default_values.insert(index, value);
    }

    /// Append a non-generic method definition
    pub fn method(
        &mut self,
        declaring_type: TypeDefinitionIndex,
        name: &str,
        return_type: TypeUsageIndex,
        parameter_start: ParameterIndex,
        parameter_count: u16,
    ) -> MethodIndex {
        let name_index = self.string(name);
        #[allow(clippy::cast_possible_truncation)]
        let token = 0x0600_0001 + self.package.methods.len() as u32;
        push(
            &mut self.package.methods,
            MethodDefinitionRaw {
                name_index,
                declaring_type,
                return_type,
                parameter_start,
                parameter_count,
                generic_container_index: -1,
                token,
            },
        )
    }

    /// Append a generic method definition declaring `generic_parameters`
    ///
    /// Returns the method index and the index of its first generic parameter.
    pub fn generic_method(
        &mut self,
        declaring_type: TypeDefinitionIndex,
        name: &str,
        return_type: TypeUsageIndex,
        parameter_start: ParameterIndex,
        parameter_count: u16,
        generic_parameters: &[&str],
    ) -> (MethodIndex, GenericParameterIndex) {
        let index = self.method(
            declaring_type,
            name,
            return_type,
            parameter_start,
            parameter_count,
        );
        let first = to_index(self.package.generic_parameters.len());
        let container = self.add_container(index, true, generic_parameters);
        self.package.methods[to_usize(index)].generic_container_index = container;
        (index, first)
    }

    /// Finish the package
    ///
    /// # Errors
    /// Returns [`crate::Error::MetadataCorruption`] if the string table is malformed
    pub fn build(self) -> Result<Package> {
        Strings::from(&self.package.strings)?;
        Ok(self.package)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn add_container(
        &mut self,
        owner: i32,
        is_method: bool,
        names: &[&str],
    ) -> GenericContainerIndex {
        let container = to_index(self.package.generic_containers.len());
        let generic_parameter_start = to_index(self.package.generic_parameters.len());

        for (num, name) in names.iter().enumerate() {
            let name_index = self.string(name);
            self.package.generic_parameters.push(GenericParameterRaw {
                owner_index: container,
                name_index,
                num: num as u16,
            });
        }

        push(
            &mut self.package.generic_containers,
            GenericContainerRaw {
                owner_index: owner,
                type_argc: names.len() as u16,
                is_method,
                generic_parameter_start,
            },
        )
    }

    fn container_parameter(
        &self,
        container: GenericContainerIndex,
        position: u16,
    ) -> Option<GenericParameterIndex> {
        let container = self
            .package
            .generic_containers
            .get(usize::try_from(container).ok()?)?;
        (position < container.type_argc)
            .then(|| container.generic_parameter_start + i32::from(position))
    }
}

fn push<T>(rows: &mut Vec<T>, row: T) -> i32 {
    rows.push(row);
    to_index(rows.len() - 1)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn to_index(len: usize) -> i32 {
    len as i32
}

fn to_usize(index: i32) -> usize {
    usize::try_from(index).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn strings_are_interned() {
        let mut builder = PackageBuilder::new();
        assert_eq!(builder.string(""), 0);
        let first = builder.string("Count");
        assert_eq!(first, 1);
        assert_eq!(builder.string("Count"), first);
        let second = builder.string("Add");
        assert_eq!(second, 7);

        let package = builder.build().unwrap();
        assert_eq!(package.string_at(0).unwrap(), "");
        assert_eq!(package.string_at(first).unwrap(), "Count");
        assert_eq!(package.string_at(second).unwrap(), "Add");
        // offsets into the middle of a string are valid, as in the binary format
        assert_eq!(package.string_at(3).unwrap(), "unt");
        assert!(matches!(
            package.string_at(100),
            Err(Error::MetadataCorruption { .. })
        ));
    }

    #[test]
    fn empty_package_has_no_strings() {
        let package = Package::default();
        assert!(matches!(
            package.string_at(0),
            Err(Error::MetadataCorruption { .. })
        ));
        assert!(package.parameter_definition(0).is_err());
    }

    #[test]
    fn bounds_checks() {
        let mut builder = PackageBuilder::new();
        let int32 = builder.add_type("System", "Int32");
        let usage = builder.type_usage(TypeUsageRaw::definition(int32));
        let start = builder.parameter("x", usage);
        builder.method(int32, "Abs", usage, start, 1);
        let package = builder.build().unwrap();

        assert!(package.type_definition(int32).is_ok());
        assert!(package.type_usage(usage).is_ok());
        assert!(package.parameter_definition(start).is_ok());
        assert!(package.method_definition(0).is_ok());

        for result in [
            package.type_definition(1).err(),
            package.type_usage(-1).err(),
            package.parameter_definition(1).err(),
            package.method_definition(i32::MAX).err(),
            package.generic_container(0).err(),
            package.generic_parameter(0).err(),
        ] {
            assert!(matches!(result, Some(Error::MetadataCorruption { .. })));
        }
    }

    #[test]
    fn generic_definitions() {
        let mut builder = PackageBuilder::new();
        let dictionary = builder.add_generic_type(
            "System.Collections.Generic",
            "Dictionary`2",
            &["TKey", "TValue"],
        );
        let object = builder.add_type("System", "Object");
        let usage = builder.type_usage(TypeUsageRaw::definition(object));

        let value = builder.type_generic_parameter(dictionary, 1).unwrap();
        assert_eq!(builder.type_generic_parameter(dictionary, 2), None);
        assert_eq!(builder.type_generic_parameter(object, 0), None);

        let start = builder.next_parameter_index();
        let (method, first) =
            builder.generic_method(object, "Cast", usage, start, 0, &["TResult"]);
        assert_eq!(first, value + 1);
        let package = builder.build().unwrap();

        let row = package.method_definition(method).unwrap();
        let container = package.generic_container(row.generic_container_index).unwrap();
        assert!(container.is_method);
        assert_eq!(container.owner_index, method);
        assert_eq!(container.parameter_names(&package).unwrap(), ["TResult"]);
        assert_eq!(package.generic_parameter(value).unwrap().num, 1);
    }

    #[test]
    fn default_values() {
        let mut builder = PackageBuilder::new();
        builder.default_value(4, ConstantValue::Boolean(true));
        let package = builder.build().unwrap();

        assert_eq!(
            package.default_value_for(4),
            Some(&ConstantValue::Boolean(true))
        );
        assert_eq!(package.default_value_for(5), None);
        assert_eq!(package.parameter_count(), 0);
        assert_eq!(package.type_usage_count(), 0);
    }
}
