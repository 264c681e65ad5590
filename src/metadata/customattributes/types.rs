use crate::metadata::typesystem::ConstantValue;

/// A decoded custom attribute: the attribute type and its positional constructor arguments
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomAttribute {
    /// Namespace of the attribute type
    pub namespace: String,
    /// Name of the attribute type, including the `Attribute` suffix
    pub name: String,
    /// Constructor arguments, in declaration order
    pub arguments: Vec<ConstantValue>,
}

impl CustomAttribute {
    /// Create an attribute without constructor arguments
    #[must_use]
    pub fn new(namespace: &str, name: &str) -> Self {
        CustomAttribute {
            namespace: namespace.to_string(),
            name: name.to_string(),
            arguments: Vec::new(),
        }
    }

    /// Add a constructor argument
    #[must_use]
    pub fn with_argument(mut self, argument: ConstantValue) -> Self {
        self.arguments.push(argument);
        self
    }

    /// True for `System.ParamArrayAttribute`, written `params` in C#
    #[must_use]
    pub fn is_param_array(&self) -> bool {
        self.namespace == "System" && self.name == "ParamArrayAttribute"
    }

    /// The name as written in source: the `Attribute` suffix is dropped
    #[must_use]
    pub fn short_name(&self) -> &str {
        match self.name.strip_suffix("Attribute") {
            Some(short) if !short.is_empty() => short,
            _ => &self.name,
        }
    }

    /// Render the attribute as it appears inline, e.g. `[Range(0, 10)]`
    #[must_use]
    pub fn to_inline_string(&self) -> String {
        if self.arguments.is_empty() {
            return format!("[{}]", self.short_name());
        }

        let arguments: Vec<String> = self
            .arguments
            .iter()
            .map(ConstantValue::to_csharp_literal)
            .collect();
        format!("[{}({})]", self.short_name(), arguments.join(", "))
    }
}
