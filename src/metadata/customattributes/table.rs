use std::collections::HashMap;

use crate::{
    metadata::{
        customattributes::CustomAttribute,
        tables::{MethodIndex, Parameter, ParameterIndex},
    },
    Result,
};

/// Provides the custom attributes applied to a parameter
pub trait AttributeSource: Send + Sync {
    /// The attributes applied to `parameter`, in declaration order
    ///
    /// # Errors
    /// Returns an error if the attribute data of the parameter cannot be decoded
    fn attributes_of(&self, parameter: &Parameter) -> Result<Vec<CustomAttribute>>;
}

/// Decoded custom attributes, keyed by the parameter they apply to
///
/// Ordinary parameters are keyed by their flat parameter index. Return values share the index
/// `-1` and are keyed by their method instead.
#[derive(Debug, Clone, Default)]
pub struct CustomAttributeTable {
    parameters: HashMap<ParameterIndex, Vec<CustomAttribute>>,
    return_values: HashMap<MethodIndex, Vec<CustomAttribute>>,
}

impl CustomAttributeTable {
    /// Apply `attribute` to the parameter at `index`
    pub fn insert(&mut self, index: ParameterIndex, attribute: CustomAttribute) {
        self.parameters.entry(index).or_default().push(attribute);
    }

    /// Apply `attribute` to the return value of `method`
    pub fn insert_return(&mut self, method: MethodIndex, attribute: CustomAttribute) {
        self.return_values.entry(method).or_default().push(attribute);
    }

    /// Number of attributes in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.parameters.values().map(Vec::len).sum::<usize>()
            + self.return_values.values().map(Vec::len).sum::<usize>()
    }

    /// True if the table holds no attribute
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AttributeSource for CustomAttributeTable {
    fn attributes_of(&self, parameter: &Parameter) -> Result<Vec<CustomAttribute>> {
        let attributes = if parameter.is_retval() {
            parameter
                .member()
                .and_then(|method| self.return_values.get(&method.index))
        } else {
            self.parameters.get(&parameter.index)
        };

        Ok(attributes.cloned().unwrap_or_default())
    }
}
