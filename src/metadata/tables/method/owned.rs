use once_cell::sync::OnceCell;

use crate::{
    metadata::{
        config::ReflectionConfig,
        customattributes::AttributeSource,
        package::Package,
        tables::{
            GenericContainerIndex, MethodIndex, MethodRc, Parameter, ParameterIndex,
            ParameterList, ParameterRc, SignatureStyle, TypeDefinitionIndex, TypeUsageIndex,
        },
        typesystem::{GenericContext, TypeResolver},
    },
    Result,
};

/// A method, property accessor or constructor; the member declaring a list of parameters.
///
/// The parameter descriptors are materialised once by [`Method::load_parameters`] and never
/// change afterwards.
#[derive(Debug)]
pub struct Method {
    /// Index into the method definition table
    pub index: MethodIndex,
    /// The metadata token of the method in the original assembly
    pub token: u32,
    /// The method name
    pub name: String,
    /// The type definition declaring this method
    pub declaring_type: TypeDefinitionIndex,
    /// The type usage of the return value
    pub return_type: TypeUsageIndex,
    /// Index of the first parameter in the flat parameter table
    pub parameter_start: ParameterIndex,
    /// Number of parameters, excluding the return value
    pub parameter_count: u16,
    /// The generic container declaring this method's generic parameters, `-1` if not generic
    pub generic_container_index: GenericContainerIndex,
    /// The generic arguments the parameter types of this method are resolved with
    pub generic_context: GenericContext,
    /// All parameters of this method, in declaration order
    pub params: ParameterList,
    /// The return value pseudo-parameter, set once every entry of `params` is in place
    pub return_param: OnceCell<ParameterRc>,
}

impl Method {
    /// Materialise the return value descriptor and one descriptor per declared parameter
    ///
    /// Calling this on a method whose parameters are already loaded does nothing. Concurrent
    /// calls materialise the descriptors once; every caller returns after the list is complete.
    ///
    /// # Errors
    /// Returns [`crate::Error::MetadataCorruption`] if the method's parameter slice lies outside
    /// the parameter table, or, with [`ReflectionConfig::strict_default_values`], if a parameter
    /// flagged `HasDefault` has no recorded value.
    ///
    /// ## Arguments
    /// * 'method'  - The method to load, shared so that parameters can refer back to it
    /// * 'package' - The metadata tables
    /// * 'config'  - Loading options
    pub fn load_parameters(
        method: &MethodRc,
        package: &Package,
        config: &ReflectionConfig,
    ) -> Result<()> {
        method.return_param.get_or_try_init(|| -> Result<ParameterRc> {
            let mut params = Vec::with_capacity(usize::from(method.parameter_count));
            for offset in 0..i32::from(method.parameter_count) {
                let index = method.parameter_start.checked_add(offset).ok_or_else(|| {
                    corruption_error!(
                        "Parameter slice of method {} starting at {} overflows",
                        method.index,
                        method.parameter_start
                    )
                })?;

                let param = Parameter::new(package, index, method)?;
                if config.strict_default_values
                    && param.has_default_value()
                    && param.default.is_none()
                {
                    return Err(corruption_error!(
                        "Parameter {} of method {} is flagged HasDefault without a recorded value",
                        index,
                        method.name
                    ));
                }
                params.push(param);
            }

            let return_param = Parameter::new(package, -1, method)?;

            // Concurrent callers block on the cell until the list is complete
            for param in params {
                method.params.push(param);
            }

            Ok(return_param)
        })?;

        Ok(())
    }

    /// All declared parameters, in declaration order. Does not contain the return value.
    #[must_use]
    pub fn parameters(&self) -> &ParameterList {
        &self.params
    }

    /// The return value pseudo-parameter, `None` until the parameters have been loaded
    #[must_use]
    pub fn return_parameter(&self) -> Option<&ParameterRc> {
        self.return_param.get()
    }

    /// True if the method declares generic parameters of its own
    #[must_use]
    pub fn is_generic_method_definition(&self) -> bool {
        self.generic_container_index >= 0
    }

    /// Render the parameter list of this method, e.g. `"int a, ref int b"`
    ///
    /// # Errors
    /// Returns an error if a parameter type cannot be resolved or the attribute source fails
    pub fn parameter_list_string(
        &self,
        resolver: &dyn TypeResolver,
        attributes: &dyn AttributeSource,
        style: SignatureStyle,
    ) -> Result<String> {
        let mut rendered = Vec::with_capacity(self.params.count());
        for (_, param) in self.params.iter() {
            if let Some(declaration) = param.parameter_string(resolver, attributes, style)? {
                rendered.push(declaration);
            }
        }

        Ok(rendered.join(", "))
    }

    /// Render the C# signature of this method, e.g. `"int Add(int a, ref int b)"`
    ///
    /// # Errors
    /// Returns an error if the parameters have not been loaded, a type cannot be resolved or
    /// the attribute source fails
    pub fn format_signature(
        &self,
        resolver: &dyn TypeResolver,
        attributes: &dyn AttributeSource,
    ) -> Result<String> {
        let Some(return_param) = self.return_param.get() else {
            return Err(crate::Error::UnresolvedTypeReference {
                usage: self.return_type,
                reason: format!("parameters of method {} have not been loaded", self.name),
            });
        };

        Ok(format!(
            "{} {}({})",
            return_param.signature_string(resolver, SignatureStyle::CSharp)?,
            self.name,
            self.parameter_list_string(resolver, attributes, SignatureStyle::CSharp)?
        ))
    }
}
