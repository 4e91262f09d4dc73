mod common;

use assert2::{check, let_assert};
use common::{rich, rich_document, sample, sample_document};
use rstest::rstest;
use rustdoc_graph::model::{Abi, GenericArg, GenericArgs, ItemEnum, Term, Type, Visibility, WherePredicate};
use rustdoc_graph::{DecodeOptions, Id, decode, encode};
use serde_json::Value;

#[rstest]
#[case::demo(sample_document())]
#[case::every_variant(rich_document())]
fn encoded_crate_decodes_to_itself(#[case] raw: Value) {
    let first = decode(&raw, &DecodeOptions::strict()).unwrap().krate;
    let encoded = encode(&first).unwrap();
    let second = decode(&encoded, &DecodeOptions::strict()).unwrap().krate;

    check!(first == second);
}

#[rstest]
fn encoding_keeps_the_wire_shape(sample: Value) {
    let krate = decode(&sample, &DecodeOptions::strict()).unwrap().krate;
    let encoded = encode(&krate).unwrap();

    check!(encoded["format_version"] == 17);
    check!(encoded["root"] == "0:0");
    check!(encoded["index"]["0:0"]["inner"]["tag"] == "Module");
    check!(encoded["index"]["0:8"]["inner"]["trait"]["tag"] == "ResolvedPath");
    check!(encoded["index"]["0:1"]["inner"]["struct_type"] == "Plain");
    check!(encoded["index"]["0:1"]["docs"] == "A point in the plane. See [`Shape`].");
    check!(encoded["index"]["0:0"]["docs"].is_null());
    check!(encoded["paths"]["1:7"]["kind"] == "Struct");

    let_assert!(Some(crates) = encoded["external_crates"].as_object());
    check!(crates.keys().collect::<Vec<_>>() == ["1"]);
}

#[rstest]
fn constants_stay_flattened_into_their_parent(rich: Value) {
    let krate = decode(&rich, &DecodeOptions::strict()).unwrap().krate;
    let encoded = encode(&krate).unwrap();

    let limit = &encoded["index"]["0:1"];
    check!(limit["inner"]["tag"] == "Constant");
    check!(limit["inner"]["expr"] == "4 * 2");
    check!(limit["inner"]["type"]["tag"] == "Primitive");
    check!(limit["visibility"]["tag"] == "Restricted");
    check!(limit["visibility"]["parent"] == "0:0");
    check!(limit["deprecation"]["since"] == "0.2.0");

    let project = &encoded["index"]["0:3"]["inner"];
    let const_arg = &project["decl"]["output"]["bounds"][0]["trait"]["args"]["args"][2];
    check!(const_arg["tag"] == "Const");
    check!(const_arg["is_literal"] == true);
    let rhs = &project["generics"]["where_predicates"][0]["rhs"];
    check!(rhs["tag"] == "Constant");
    check!(rhs["value"].is_null());
    check!(project["header"]["abi"] == serde_json::json!({ "tag": "Other", "name": "efiapi" }));
}

#[rstest]
fn every_variant_fixture_decodes_strictly(rich: Value) {
    let decoded = decode(&rich, &DecodeOptions::strict()).unwrap();
    check!(decoded.diagnostics.is_empty());
    check!(decoded.krate.index.len() == 20);

    let item = |id: &str| &decoded.krate.index[&Id::from(id)];

    check!(item("0:1").visibility == Visibility::Restricted { parent: Id::from("0:0"), path: "crate".to_string() });
    check!(item("0:1").docs.as_deref() == Some(""));
    check!(item("0:4").span.is_none());
    check!(item("0:4").inner.kind() == rustdoc_graph::ItemKind::ProcDerive);

    let_assert!(ItemEnum::Typedef(callback) = &item("0:2").inner);
    let_assert!(Type::FunctionPointer(fn_ptr) = &callback.type_);
    check!(fn_ptr.header.abi == Abi::C { unwind: false });
    check!(fn_ptr.decl.c_variadic);
    check!(matches!(fn_ptr.decl.output, Some(Type::RawPointer { is_mutable: true, .. })));

    let_assert!(ItemEnum::Function(project) = &item("0:3").inner);
    check!(project.generics.explicit_params().map(|p| p.name.as_str()).collect::<Vec<_>>() == ["I", "N"]);
    let_assert!(
        [WherePredicate::EqPredicate { rhs: Term::Constant(rhs), .. }, WherePredicate::BoundPredicate { .. }, WherePredicate::RegionPredicate { .. }] =
            project.generics.where_predicates.as_slice()
    );
    check!(rhs.expr == "N");
    check!(rhs.value.is_none());

    let_assert!(Some(Type::ImplTrait { bounds }) = &project.decl.output);
    let_assert!(rustdoc_graph::model::GenericBound::TraitBound { trait_: Type::ResolvedPath(iterator), .. } = &bounds[0]);
    let_assert!(Some(args) = iterator.args.as_deref());
    let_assert!(GenericArgs::AngleBracketed { args, bindings } = args);
    check!(matches!(&args[2], GenericArg::Const(constant) if constant.is_literal));
    check!(bindings.len() == 1);
}
