//! A small package modelled on a typical game assembly.
//!
//! Flat parameter table layout:
//!
//! | index  | method               | parameters                                              |
//! |--------|----------------------|---------------------------------------------------------|
//! | 0-1    | `Log`                | `[CallerMemberName] string message = "hi"`, `object context` |
//! | -      | `Clear`              | none (start 2, count 0)                                 |
//! | 2-9    | `Configure`          | `int p0` .. `int p7`                                    |
//! | 10-15  | `Add`                | `int a, ref int b, int e = 5, out int c, in int d, params int[] rest` |
//! | 16-17  | `Swap<T>`            | `T left, T right`                                       |
//! | 18     | `List<T>.Open`       | `ref List<T> list` (byref variant of an open type)      |
//! | 19     | `Stray`              | `int value`, default value record without `HasDefault`  |
//! | 20     | `Missing`            | `int value`, `HasDefault` without default value record  |

use crate::{
    metadata::{
        customattributes::{CustomAttribute, CustomAttributeTable},
        model::Model,
        package::PackageBuilder,
        tables::{MethodIndex, ParamAttributes, TypeUsageIndex, TypeUsageRaw},
        typesystem::ConstantValue,
    },
    test::load,
};

/// Indices of the interesting rows of the calculator package
pub struct Sample {
    pub log: MethodIndex,
    pub clear: MethodIndex,
    pub configure: MethodIndex,
    pub add: MethodIndex,
    pub swap: MethodIndex,
    pub open: MethodIndex,
    pub stray: MethodIndex,
    pub missing: MethodIndex,
    pub int_usage: TypeUsageIndex,
    pub int_byref_usage: TypeUsageIndex,
    pub int_array_usage: TypeUsageIndex,
    pub string_usage: TypeUsageIndex,
    pub method_t_usage: TypeUsageIndex,
    pub list_byref_usage: TypeUsageIndex,
    pub attributes: CustomAttributeTable,
}

// Helper function to create the calculator package and the indices of its rows
pub fn sample_package() -> (PackageBuilder, Sample) {
    let mut builder = PackageBuilder::new();
    let mut attributes = CustomAttributeTable::default();

    let void = builder.add_type("System", "Void");
    let int32 = builder.add_type("System", "Int32");
    let string = builder.add_type("System", "String");
    let object = builder.add_type("System", "Object");
    let list = builder.add_generic_type("System.Collections.Generic", "List`1", &["T"]);
    let calculator = builder.add_type("Sample", "Calculator");

    let void_usage = builder.type_usage(TypeUsageRaw::definition(void));
    let int_usage = builder.type_usage(TypeUsageRaw::definition(int32));
    let int_byref_usage = builder.type_usage(TypeUsageRaw::definition(int32));
    builder.set_type_usages(int32, int_usage, int_byref_usage);
    let int_default_usage = builder
        .type_usage(TypeUsageRaw::definition(int32).with_attrs(ParamAttributes::HAS_DEFAULT));
    let int_out_usage =
        builder.type_usage(TypeUsageRaw::definition(int32).with_attrs(ParamAttributes::OUT));
    let int_in_usage =
        builder.type_usage(TypeUsageRaw::definition(int32).with_attrs(ParamAttributes::IN));
    let int_missing_usage = builder.type_usage(
        TypeUsageRaw::definition(int32)
            .with_attrs(ParamAttributes::HAS_DEFAULT | ParamAttributes::OPTIONAL),
    );
    let int_array_usage = builder.type_usage(TypeUsageRaw::array(int_usage, 1));

    let string_usage = builder.type_usage(TypeUsageRaw::definition(string));
    let string_default_usage = builder
        .type_usage(TypeUsageRaw::definition(string).with_attrs(ParamAttributes::HAS_DEFAULT));
    let object_usage = builder.type_usage(TypeUsageRaw::definition(object));

    let list_t = builder.type_generic_parameter(list, 0).unwrap();
    let type_t_usage = builder.type_usage(TypeUsageRaw::generic_parameter(list_t));
    let list_usage = builder.type_usage(TypeUsageRaw::generic_instance(list, vec![type_t_usage]));
    let list_byref_usage =
        builder.type_usage(TypeUsageRaw::generic_instance(list, vec![type_t_usage]));
    builder.set_type_usages(list, list_usage, list_byref_usage);

    // void Log([CallerMemberName] string message = "hi", object context)
    let start = builder.parameter("message", string_default_usage);
    builder.default_value(start, ConstantValue::String("hi".to_string()));
    attributes.insert(
        start,
        CustomAttribute::new(
            "System.Runtime.CompilerServices",
            "CallerMemberNameAttribute",
        ),
    );
    builder.parameter("context", object_usage);
    let log = builder.method(calculator, "Log", void_usage, start, 2);

    let start = builder.next_parameter_index();
    let clear = builder.method(calculator, "Clear", void_usage, start, 0);

    let start = builder.next_parameter_index();
    for position in 0..8 {
        builder.parameter(&format!("p{position}"), int_usage);
    }
    let configure = builder.method(calculator, "Configure", void_usage, start, 8);

    // int Add(int a, ref int b, int e = 5, out int c, in int d, params int[] rest)
    let start = builder.parameter("a", int_usage);
    builder.parameter("b", int_byref_usage);
    let e = builder.parameter("e", int_default_usage);
    builder.default_value(e, ConstantValue::I4(5));
    builder.parameter("c", int_out_usage);
    builder.parameter("d", int_in_usage);
    let rest = builder.parameter("rest", int_array_usage);
    attributes.insert(rest, CustomAttribute::new("System", "ParamArrayAttribute"));
    let add = builder.method(calculator, "Add", int_usage, start, 6);

    // void Swap<T>(T left, T right), each parameter with its own usage of T
    let start = builder.next_parameter_index();
    let (swap, method_t) =
        builder.generic_method(calculator, "Swap", void_usage, start, 2, &["T"]);
    let method_t_usage = builder.type_usage(TypeUsageRaw::generic_parameter(method_t));
    let left_t_usage = builder.type_usage(TypeUsageRaw::generic_parameter(method_t));
    builder.parameter("left", left_t_usage);
    builder.parameter("right", method_t_usage);

    // List<T>.Open(ref List<T> list)
    let start = builder.parameter("list", list_byref_usage);
    let open = builder.method(list, "Open", void_usage, start, 1);

    let start = builder.parameter("value", int_usage);
    builder.default_value(start, ConstantValue::I4(9));
    let stray = builder.method(calculator, "Stray", void_usage, start, 1);

    let start = builder.parameter("value", int_missing_usage);
    let missing = builder.method(calculator, "Missing", void_usage, start, 1);

    let sample = Sample {
        log,
        clear,
        configure,
        add,
        swap,
        open,
        stray,
        missing,
        int_usage,
        int_byref_usage,
        int_array_usage,
        string_usage,
        method_t_usage,
        list_byref_usage,
        attributes,
    };

    (builder, sample)
}

// Helper function to load the calculator package
pub fn sample_model() -> (Model, Sample) {
    let (builder, sample) = sample_package();
    (load(builder), sample)
}

#[test]
fn layout() {
    let (model, sample) = sample_model();
    let expected = [
        (sample.log, 0, 2),
        (sample.clear, 2, 0),
        (sample.configure, 2, 8),
        (sample.add, 10, 6),
        (sample.swap, 16, 2),
        (sample.open, 18, 1),
        (sample.stray, 19, 1),
        (sample.missing, 20, 1),
    ];

    for (index, start, count) in expected {
        let method = model.method(index).unwrap();
        assert_eq!(method.parameter_start, start, "{}", method.name);
        assert_eq!(method.parameter_count, count, "{}", method.name);
    }
    assert_eq!(model.package().parameter_count(), 21);
}
