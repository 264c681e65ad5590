//! Integration tests for parameter resolution.
//!
//! These tests build small packages through the public builder API, the way a metadata parser
//! would hand them over, and check the reconstructed declarations.

use il2scope::prelude::*;
use std::sync::Arc;

struct Fixture {
    model: Model,
    attributes: CustomAttributeTable,
    update: MethodIndex,
    map: MethodIndex,
    vector_usage: TypeUsageIndex,
}

/// A `Player.Update(float delta, ref Vector3 position, out bool moved, char separator = '\n',
/// params object[] extra)` and a generic `Map<TResult>(Func<TResult> selector, TResult fallback)`
fn player() -> Result<Fixture> {
    let mut builder = PackageBuilder::new();
    let mut attributes = CustomAttributeTable::default();

    let void = builder.add_type("System", "Void");
    let single = builder.add_type("System", "Single");
    let boolean = builder.add_type("System", "Boolean");
    let character = builder.add_type("System", "Char");
    let object = builder.add_type("System", "Object");
    let vector = builder.add_type("UnityEngine", "Vector3");
    let func = builder.add_generic_type("System", "Func`1", &["TResult"]);
    let player = builder.add_type("Game", "Player");

    let void_usage = builder.type_usage(TypeUsageRaw::definition(void));
    let float_usage = builder.type_usage(TypeUsageRaw::definition(single));
    let vector_usage = builder.type_usage(TypeUsageRaw::definition(vector));
    let vector_byref = builder.type_usage(TypeUsageRaw::definition(vector));
    builder.set_type_usages(vector, vector_usage, vector_byref);
    let bool_out = builder
        .type_usage(TypeUsageRaw::definition(boolean).with_attrs(ParamAttributes::OUT));
    let char_default = builder.type_usage(
        TypeUsageRaw::definition(character)
            .with_attrs(ParamAttributes::HAS_DEFAULT | ParamAttributes::OPTIONAL),
    );
    let object_usage = builder.type_usage(TypeUsageRaw::definition(object));
    let objects = builder.type_usage(TypeUsageRaw::array(object_usage, 1));

    let start = builder.parameter("delta", float_usage);
    builder.parameter("position", vector_byref);
    builder.parameter("moved", bool_out);
    let separator = builder.parameter("separator", char_default);
    builder.default_value(separator, ConstantValue::Char('\n'));
    let extra = builder.parameter("extra", objects);
    attributes.insert(extra, CustomAttribute::new("System", "ParamArrayAttribute"));
    let update = builder.method(player, "Update", void_usage, start, 5);

    let start = builder.next_parameter_index();
    let (map, result) =
        builder.generic_method(player, "Map", void_usage, start, 2, &["TResult"]);
    let result_usage = builder.type_usage(TypeUsageRaw::generic_parameter(result));
    let selector = builder.type_usage(TypeUsageRaw::generic_instance(func, vec![result_usage]));
    builder.parameter("selector", selector);
    builder.parameter("fallback", result_usage);

    Ok(Fixture {
        model: Model::load(builder.build()?, ReflectionConfig::default())?,
        attributes,
        update,
        map,
        vector_usage,
    })
}

#[test]
fn reconstructs_declarations() -> Result<()> {
    let fixture = player()?;
    let model = &fixture.model;
    let update = model.method(fixture.update).expect("Update is loaded");

    assert_eq!(
        update.format_signature(model.types(), &fixture.attributes)?,
        "void Update(float delta, ref Vector3 position, out bool moved, \
         char separator = '\\x000a', params object[] extra)"
    );
    assert_eq!(
        update.parameter_list_string(
            model.types(),
            &fixture.attributes,
            SignatureStyle::Reflection
        )?,
        "System.Single delta, ref UnityEngine.Vector3 position, out System.Boolean moved, \
         System.Char separator = '\\x000a', [ParamArray] System.Object[] extra"
    );
    Ok(())
}

#[test]
fn descriptor_properties() -> Result<()> {
    let fixture = player()?;
    let model = &fixture.model;
    let update = model.method(fixture.update).expect("Update is loaded");
    let params = update.parameters();

    for (position, param) in params.iter() {
        assert_eq!(param.position, i32::try_from(position).unwrap());
        assert_eq!(param.index, update.parameter_start + param.position);
        assert!(Arc::ptr_eq(&param.member().expect("owner alive"), &update));
        assert!(!param.is_retval());
    }

    let position = &params[1];
    assert!(position.is_by_ref(model.types())?);
    assert_ne!(position.type_usage, fixture.vector_usage);

    let moved = &params[2];
    assert!(moved.is_out());
    assert!(!moved.is_by_ref(model.types())?);

    let separator = &params[3];
    assert!(separator.has_default_value());
    assert!(separator.is_optional());
    assert_eq!(separator.default, Some(ConstantValue::Char('\n')));

    let ret = update.return_parameter().expect("return value is loaded");
    assert!(ret.is_retval());
    assert_eq!(ret.position, -1);
    assert_eq!(
        ret.return_parameter_string(model.types(), SignatureStyle::CSharp)?
            .as_deref(),
        Some("void")
    );
    Ok(())
}

#[test]
fn generic_methods() -> Result<()> {
    let fixture = player()?;
    let model = &fixture.model;

    let open = model.method(fixture.map).expect("Map is loaded");
    assert_eq!(
        open.format_signature(model.types(), &fixture.attributes)?,
        "void Map(Func<TResult> selector, TResult fallback)"
    );
    let fallback = open.parameters()[1].parameter_type(model.types())?;
    assert!(fallback.contains_generic_parameters());

    let closed = model.instantiate_method(
        fixture.map,
        GenericContext::for_method(vec![fixture.vector_usage]),
    )?;
    assert_eq!(
        closed.parameter_list_string(
            model.types(),
            &fixture.attributes,
            SignatureStyle::Reflection
        )?,
        "System.Func`1[UnityEngine.Vector3] selector, UnityEngine.Vector3 fallback"
    );
    assert!(!closed.parameters()[0].is_by_ref(model.types())?);
    Ok(())
}

#[test]
fn corrupt_packages() {
    let mut builder = PackageBuilder::new();
    let object = builder.add_type("System", "Object");
    let usage = builder.type_usage(TypeUsageRaw::definition(object));
    let start = builder.parameter("value", usage + 7);
    builder.method(object, "Broken", usage, start, 1);

    // the parameter's type usage does not exist
    assert!(matches!(
        Model::load(builder.build().unwrap(), ReflectionConfig::default()),
        Err(Error::MetadataCorruption { .. })
    ));
}
