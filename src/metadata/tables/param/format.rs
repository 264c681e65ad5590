//! Source-like rendering of parameters
//!
//! Modifiers are always emitted in the order `in`, `ref`, `out`. Ordinary parameters render as
//! `{attributes}{modifiers}{type} {name}` with ` = {default}` appended when the parameter is
//! flagged `HasDefault`; the return value renders as `{modifiers}{type}` only.

use crate::{
    metadata::{
        customattributes::AttributeSource,
        tables::Parameter,
        typesystem::{ConstantValue, TypeResolver},
    },
    Result,
};

/// How types and attributes are spelled when rendering a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SignatureStyle {
    /// C# source: keyword aliases (`int`, `string`), `List<int>` generics and `params` in place
    /// of `[ParamArray]`
    #[default]
    CSharp,
    /// Reflection names: `System.Int32`, ``System.Collections.Generic.List`1[System.Int32]``
    /// and every attribute in its bracketed form
    Reflection,
}

impl Parameter {
    /// The modifier prefix of this parameter, e.g. `"ref "` or `"in "`; empty if there is none
    ///
    /// # Errors
    /// Returns an error if the parameter type cannot be resolved
    pub fn modifier_string(&self, resolver: &dyn TypeResolver) -> Result<String> {
        let mut modifiers = String::new();
        if self.is_in() {
            modifiers.push_str("in ");
        }
        if self.is_by_ref(resolver)? {
            modifiers.push_str("ref ");
        }
        if self.is_out() {
            modifiers.push_str("out ");
        }

        Ok(modifiers)
    }

    /// Modifiers followed by the type name, e.g. `"ref int"`
    ///
    /// # Errors
    /// Returns an error if the parameter type cannot be resolved
    pub fn signature_string(
        &self,
        resolver: &dyn TypeResolver,
        style: SignatureStyle,
    ) -> Result<String> {
        let parameter_type = self.parameter_type(resolver)?;
        let type_name = match style {
            SignatureStyle::CSharp => parameter_type.csharp_name(),
            SignatureStyle::Reflection => parameter_type.full_name(),
        };

        Ok(format!("{}{}", self.modifier_string(resolver)?, type_name))
    }

    /// The full declaration of an ordinary parameter, e.g. `"params int[] values"`
    ///
    /// Returns `None` for the return value, which has no declaration of its own in a parameter
    /// list.
    ///
    /// # Errors
    /// Returns an error if the parameter type cannot be resolved or the attribute source fails
    pub fn parameter_string(
        &self,
        resolver: &dyn TypeResolver,
        attributes: &dyn AttributeSource,
        style: SignatureStyle,
    ) -> Result<Option<String>> {
        if self.is_retval() {
            return Ok(None);
        }

        let mut rendered = self.attribute_string(attributes, style)?;
        rendered.push_str(&self.signature_string(resolver, style)?);
        rendered.push(' ');
        rendered.push_str(self.name.as_deref().unwrap_or_default());

        if self.has_default_value() {
            rendered.push_str(" = ");
            match &self.default {
                Some(value) => rendered.push_str(&value.to_csharp_literal()),
                None => rendered.push_str(&ConstantValue::Null.to_csharp_literal()),
            }
        }

        Ok(Some(rendered))
    }

    /// The rendering of a return value, e.g. `"int"`
    ///
    /// Returns `None` for ordinary parameters.
    ///
    /// # Errors
    /// Returns an error if the return type cannot be resolved
    pub fn return_parameter_string(
        &self,
        resolver: &dyn TypeResolver,
        style: SignatureStyle,
    ) -> Result<Option<String>> {
        if !self.is_retval() {
            return Ok(None);
        }

        self.signature_string(resolver, style).map(Some)
    }

    /// Render this descriptor as source text
    ///
    /// Ordinary parameters produce their full declaration, the return value produces its
    /// modifiers and type only. Callers rendering a parameter list must skip the return value.
    ///
    /// # Errors
    /// Returns an error if the type cannot be resolved or the attribute source fails
    ///
    /// # Examples
    ///
    /// ```rust
    /// use il2scope::prelude::*;
    ///
    /// let mut builder = PackageBuilder::new();
    /// let int32 = builder.add_type("System", "Int32");
    /// let int_usage = builder.type_usage(
    ///     TypeUsageRaw::definition(int32).with_attrs(ParamAttributes::HAS_DEFAULT),
    /// );
    /// let start = builder.parameter("count", int_usage);
    /// builder.default_value(start, ConstantValue::I4(5));
    /// builder.method(int32, "Take", int_usage, start, 1);
    ///
    /// let model = Model::load(builder.build()?, ReflectionConfig::default())?;
    /// let method = model.method(0).unwrap();
    /// let attributes = CustomAttributeTable::default();
    ///
    /// let param = &method.parameters()[0];
    /// let ret = method.return_parameter().unwrap();
    /// assert_eq!(param.format(model.types(), &attributes, SignatureStyle::CSharp)?, "int count = 5");
    /// assert_eq!(ret.format(model.types(), &attributes, SignatureStyle::Reflection)?, "System.Int32");
    /// # Ok::<(), il2scope::Error>(())
    /// ```
    pub fn format(
        &self,
        resolver: &dyn TypeResolver,
        attributes: &dyn AttributeSource,
        style: SignatureStyle,
    ) -> Result<String> {
        if self.is_retval() {
            return self.signature_string(resolver, style);
        }

        Ok(self
            .parameter_string(resolver, attributes, style)?
            .unwrap_or_default())
    }

    fn attribute_string(
        &self,
        attributes: &dyn AttributeSource,
        style: SignatureStyle,
    ) -> Result<String> {
        let mut rendered = String::new();
        for attribute in attributes.attributes_of(self)? {
            if style == SignatureStyle::CSharp && attribute.is_param_array() {
                rendered.push_str("params ");
            } else {
                rendered.push_str(&attribute.to_inline_string());
                rendered.push(' ');
            }
        }

        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{metadata::tables::ParameterAttributes, test::sample_model};

    fn render_all(style: SignatureStyle) -> Vec<String> {
        let (model, sample) = sample_model();
        let add = model.method(sample.add).unwrap();
        add.parameters()
            .iter()
            .map(|(_, param)| {
                param
                    .format(model.types(), &sample.attributes, style)
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn csharp_parameters() {
        assert_eq!(
            render_all(SignatureStyle::CSharp),
            [
                "int a",
                "ref int b",
                "int e = 5",
                "out int c",
                "in int d",
                "params int[] rest",
            ]
        );
    }

    #[test]
    fn reflection_parameters() {
        assert_eq!(
            render_all(SignatureStyle::Reflection),
            [
                "System.Int32 a",
                "ref System.Int32 b",
                "System.Int32 e = 5",
                "out System.Int32 c",
                "in System.Int32 d",
                "[ParamArray] System.Int32[] rest",
            ]
        );
    }

    #[test]
    fn return_value_rendering() {
        let (model, sample) = sample_model();
        let add = model.method(sample.add).unwrap();
        let ret = add.return_parameter().unwrap();

        assert_eq!(
            ret.format(model.types(), &sample.attributes, SignatureStyle::CSharp)
                .unwrap(),
            "int"
        );
        assert_eq!(
            ret.parameter_string(model.types(), &sample.attributes, SignatureStyle::CSharp)
                .unwrap(),
            None
        );
        assert_eq!(
            ret.return_parameter_string(model.types(), SignatureStyle::CSharp)
                .unwrap()
                .as_deref(),
            Some("int")
        );

        let first = &add.parameters()[0];
        assert_eq!(
            first
                .return_parameter_string(model.types(), SignatureStyle::CSharp)
                .unwrap(),
            None
        );
    }

    #[test]
    fn default_suffix_follows_flag() {
        let (model, sample) = sample_model();
        let types = model.types();

        let stray = model.method(sample.stray).unwrap();
        assert_eq!(
            stray.parameters()[0]
                .format(types, &sample.attributes, SignatureStyle::CSharp)
                .unwrap(),
            "int value"
        );

        let missing = model.method(sample.missing).unwrap();
        assert_eq!(
            missing.parameters()[0]
                .format(types, &sample.attributes, SignatureStyle::CSharp)
                .unwrap(),
            "int value = null"
        );
    }

    #[test]
    fn attributes_and_string_defaults() {
        let (model, sample) = sample_model();
        let log = model.method(sample.log).unwrap();
        let params = log.parameters();

        assert_eq!(
            params[0]
                .format(model.types(), &sample.attributes, SignatureStyle::CSharp)
                .unwrap(),
            "[CallerMemberName] string message = \"hi\""
        );
        assert_eq!(
            params[1]
                .format(model.types(), &sample.attributes, SignatureStyle::CSharp)
                .unwrap(),
            "object context"
        );
    }

    #[test]
    fn modifier_order() {
        let (model, sample) = sample_model();
        let add = model.method(sample.add).unwrap();
        let mut in_ref = (*add.parameters()[1]).clone();
        in_ref.flags |= ParameterAttributes::IN | ParameterAttributes::OUT;

        assert_eq!(in_ref.modifier_string(model.types()).unwrap(), "in ref out ");
    }

    #[test]
    fn generic_parameters() {
        let (model, sample) = sample_model();
        let swap = model.method(sample.swap).unwrap();
        let rendered: Vec<String> = swap
            .parameters()
            .iter()
            .map(|(_, param)| {
                param
                    .format(model.types(), &sample.attributes, SignatureStyle::CSharp)
                    .unwrap()
            })
            .collect();
        assert_eq!(rendered, ["T left", "T right"]);

        let open = model.method(sample.open).unwrap();
        assert_eq!(
            open.parameters()[0]
                .format(model.types(), &sample.attributes, SignatureStyle::CSharp)
                .unwrap(),
            "List<T> list"
        );
    }
}
