//! Shared test fixtures for integration tests.
//!
//! Documents are built with `serde_json::json!` so that each test can start
//! from a valid crate and break exactly the part it is interested in.
//!
//! # Available Fixtures
//!
//! - `sample`: a small but complete crate (`demo`) with a struct, a trait, an
//!   inherent impl, a trait impl, a generic function, a stripped module and a
//!   reference to an item of `std` that only `paths` knows about.

#![allow(dead_code)] // Helpers used across different integration test crates

use rstest::fixture;
use serde_json::{Map, Value, json};

pub fn no_generics() -> Value {
    json!({ "params": [], "where_predicates": [] })
}

pub fn rust_header() -> Value {
    json!({ "is_const": false, "is_unsafe": false, "is_async": false, "abi": { "tag": "Rust" } })
}

pub fn resolved(name: &str, id: &str) -> Value {
    json!({ "tag": "ResolvedPath", "name": name, "id": id, "args": null })
}

pub fn primitive(name: &str) -> Value {
    json!({ "tag": "Primitive", "name": name })
}

/// An `index` entry around `inner`.
pub fn item(id: &str, name: Option<&str>, inner: Value) -> Value {
    json!({
        "id": id,
        "crate_id": if id.starts_with("0:") { 0 } else { 1 },
        "name": name,
        "span": { "filename": "src/lib.rs", "begin": [1, 0], "end": [1, 10] },
        "visibility": { "tag": "Public" },
        "docs": null,
        "links": {},
        "attrs": [],
        "deprecation": null,
        "inner": inner
    })
}

pub fn module(items: &[&str], is_crate: bool, is_stripped: bool) -> Value {
    json!({ "tag": "Module", "is_crate": is_crate, "items": items, "is_stripped": is_stripped })
}

pub fn strukt(fields: &[&str], impls: &[&str]) -> Value {
    json!({
        "tag": "Struct",
        "struct_type": "Plain",
        "generics": no_generics(),
        "fields_stripped": false,
        "fields": fields,
        "impls": impls
    })
}

pub fn field(ty: Value) -> Value {
    json!({ "tag": "StructField", "type": ty })
}

pub fn method(has_body: bool) -> Value {
    json!({
        "tag": "Method",
        "decl": {
            "inputs": [["self", {
                "tag": "BorrowedRef",
                "lifetime": null,
                "is_mutable": false,
                "type": { "tag": "Generic", "name": "Self" }
            }]],
            "output": primitive("f64"),
            "c_variadic": false
        },
        "generics": no_generics(),
        "header": rust_header(),
        "has_body": has_body
    })
}

pub fn impl_block(trait_: Option<Value>, for_: Value, items: &[&str]) -> Value {
    json!({
        "tag": "Impl",
        "is_unsafe": false,
        "generics": no_generics(),
        "provided_trait_methods": [],
        "trait": trait_,
        "for": for_,
        "items": items,
        "negative": false,
        "synthetic": false,
        "blanket_impl": null
    })
}

pub fn summary(path: &[&str], kind: &str) -> Value {
    let crate_id = if path.first() == Some(&"demo") { 0 } else { 1 };
    json!({ "crate_id": crate_id, "path": path, "kind": kind })
}

/// A full document whose `index` is keyed by each entry's own `id`.
pub fn document(items: Vec<Value>, paths: Value) -> Value {
    let index: Map<String, Value> = items
        .into_iter()
        .map(|item| (item["id"].as_str().unwrap().to_string(), item))
        .collect();
    json!({
        "root": "0:0",
        "crate_version": "0.3.1",
        "includes_private": false,
        "index": index,
        "paths": paths,
        "external_crates": {
            "1": { "name": "std", "html_root_url": "https://doc.rust-lang.org/nightly/" }
        },
        "format_version": 17
    })
}

/// The `demo` crate, as a fixture.
#[fixture]
pub fn sample() -> Value {
    sample_document()
}

/// The `demo` crate.
pub fn sample_document() -> Value {
    let mut point = item("0:1", Some("Point"), strukt(&["0:5", "0:6"], &["0:7", "0:8"]));
    point["docs"] = json!("A point in the plane. See [`Shape`].");
    point["links"] = json!({ "`Shape`": "0:2" });

    let total = json!({
        "tag": "Function",
        "decl": {
            "inputs": [["shapes", {
                "tag": "BorrowedRef",
                "lifetime": null,
                "is_mutable": false,
                "type": { "tag": "Slice", "type": { "tag": "Generic", "name": "S" } }
            }]],
            "output": primitive("f64"),
            "c_variadic": false
        },
        "generics": {
            "params": [{
                "name": "S",
                "kind": {
                    "tag": "Type",
                    "bounds": [{
                        "tag": "TraitBound",
                        "trait": resolved("Shape", "0:2"),
                        "generic_params": [],
                        "modifier": "None"
                    }],
                    "default": null,
                    "synthetic": false
                }
            }],
            "where_predicates": []
        },
        "header": rust_header()
    });

    let shape = json!({
        "tag": "Trait",
        "is_auto": false,
        "is_unsafe": false,
        "items": ["0:12"],
        "generics": no_generics(),
        "bounds": [],
        "implementations": ["0:8"]
    });

    let items = vec![
        item(
            "0:0",
            Some("demo"),
            module(&["0:1", "0:2", "0:3", "0:4", "1:7"], true, false),
        ),
        point,
        item("0:2", Some("Shape"), shape),
        item("0:3", Some("total"), total),
        item("0:4", Some("shapes"), module(&[], false, true)),
        item("0:5", Some("x"), field(primitive("f64"))),
        item("0:6", Some("y"), field(primitive("f64"))),
        item("0:7", None, impl_block(None, resolved("Point", "0:1"), &["0:10"])),
        item(
            "0:8",
            None,
            impl_block(Some(resolved("Shape", "0:2")), resolved("Point", "0:1"), &["0:11"]),
        ),
        item("0:10", Some("norm"), method(true)),
        item("0:11", Some("area"), method(true)),
        item("0:12", Some("area"), method(false)),
    ];

    let paths = json!({
        "0:0": summary(&["demo"], "Module"),
        "0:1": summary(&["demo", "Point"], "Struct"),
        "0:2": summary(&["demo", "Shape"], "Trait"),
        "0:3": summary(&["demo", "total"], "Function"),
        "0:4": summary(&["demo", "shapes"], "Module"),
        "1:7": summary(&["std", "vec", "Vec"], "Struct")
    });

    document(items, paths)
}

/// Replace the `index` entry `id` of a document.
pub fn set_item(doc: &mut Value, id: &str, entry: Value) {
    doc["index"][id] = entry;
}

fn trait_bound(trait_: Value, modifier: &str) -> Value {
    json!({ "tag": "TraitBound", "trait": trait_, "generic_params": [], "modifier": modifier })
}

fn no_args() -> Value {
    json!({ "tag": "AngleBracketed", "args": [], "bindings": [] })
}

fn path_with_args(name: &str, id: &str, args: Value) -> Value {
    json!({ "tag": "ResolvedPath", "name": name, "id": id, "args": args })
}

/// A crate (`shapes_ext`) touching every payload and type variant that the
/// `demo` crate leaves out: constants in all three positions, function
/// pointers, `dyn`, qualified paths, associated item constraints, restricted
/// visibility, deprecations, macros and non-Rust ABIs.
#[fixture]
pub fn rich() -> Value {
    rich_document()
}

pub fn rich_document() -> Value {
    let debug = resolved("Debug", "1:20");
    let clone = resolved("Clone", "1:22");

    let mut limit = item(
        "0:1",
        Some("LIMIT"),
        json!({
            "tag": "Constant",
            "type": primitive("usize"),
            "expr": "4 * 2",
            "value": "8",
            "is_literal": false
        }),
    );
    limit["visibility"] = json!({ "tag": "Restricted", "parent": "0:0", "path": "crate" });
    limit["deprecation"] = json!({ "since": "0.2.0", "note": "use `MAX` instead" });
    limit["docs"] = json!("");

    let callback = json!({
        "tag": "Typedef",
        "type": {
            "tag": "FunctionPointer",
            "decl": {
                "inputs": [["_", {
                    "tag": "BorrowedRef",
                    "lifetime": "'a",
                    "is_mutable": false,
                    "type": {
                        "tag": "DynTrait",
                        "traits": [{
                            "trait": { "name": "Debug", "id": "1:20", "args": null },
                            "generic_params": []
                        }],
                        "lifetime": "'a"
                    }
                }]],
                "output": {
                    "tag": "RawPointer",
                    "is_mutable": true,
                    "type": { "tag": "Array", "type": primitive("u8"), "len": "16" }
                },
                "c_variadic": true
            },
            "generic_params": [{ "name": "'a", "kind": { "tag": "Lifetime", "outlives": [] } }],
            "header": {
                "is_const": false,
                "is_unsafe": true,
                "is_async": false,
                "abi": { "tag": "C", "unwind": false }
            }
        },
        "generics": no_generics()
    });

    let iterator_item = |self_type: &str, trait_: Value| {
        json!({
            "tag": "QualifiedPath",
            "name": "Item",
            "args": no_args(),
            "self_type": { "tag": "Generic", "name": self_type },
            "trait": trait_
        })
    };
    let project = json!({
        "tag": "Function",
        "decl": {
            "inputs": [
                ["iter", { "tag": "Generic", "name": "I" }],
                ["(a, b)", { "tag": "Tuple", "types": [primitive("u8"), { "tag": "Infer" }] }]
            ],
            "output": {
                "tag": "ImplTrait",
                "bounds": [trait_bound(
                    path_with_args("Iterator", "1:21", json!({
                        "tag": "AngleBracketed",
                        "args": [
                            { "tag": "Lifetime", "lifetime": "'static" },
                            { "tag": "Type", "type": primitive("u8") },
                            {
                                "tag": "Const",
                                "type": primitive("usize"),
                                "expr": "3",
                                "value": "3",
                                "is_literal": true
                            },
                            { "tag": "Infer" }
                        ],
                        "bindings": [{
                            "name": "Item",
                            "args": no_args(),
                            "binding": {
                                "tag": "Equality",
                                "term": { "tag": "Type", "type": { "tag": "Tuple", "types": [] } }
                            }
                        }]
                    })),
                    "None"
                )]
            },
            "c_variadic": false
        },
        "generics": {
            "params": [
                {
                    "name": "I",
                    "kind": {
                        "tag": "Type",
                        "bounds": [trait_bound(
                            path_with_args("Iterator", "1:21", json!({
                                "tag": "AngleBracketed",
                                "args": [],
                                "bindings": [{
                                    "name": "Item",
                                    "args": no_args(),
                                    "binding": {
                                        "tag": "Constraint",
                                        "bounds": [trait_bound(clone.clone(), "None")]
                                    }
                                }]
                            })),
                            "Maybe"
                        )],
                        "default": null,
                        "synthetic": false
                    }
                },
                {
                    "name": "F",
                    "kind": {
                        "tag": "Type",
                        "bounds": [trait_bound(
                            path_with_args("Fn", "1:23", json!({
                                "tag": "Parenthesized",
                                "inputs": [primitive("u8")],
                                "output": null
                            })),
                            "None"
                        )],
                        "default": primitive("u8"),
                        "synthetic": true
                    }
                },
                {
                    "name": "N",
                    "kind": { "tag": "Const", "type": primitive("usize"), "default": "4" }
                }
            ],
            "where_predicates": [
                {
                    "tag": "EqPredicate",
                    "lhs": iterator_item("I", json!({ "name": "Iterator", "id": "1:21", "args": null })),
                    "rhs": {
                        "tag": "Constant",
                        "type": primitive("usize"),
                        "expr": "N",
                        "value": null,
                        "is_literal": false
                    }
                },
                {
                    "tag": "BoundPredicate",
                    "type": iterator_item("I", Value::Null),
                    "bounds": [{ "tag": "Outlives", "lifetime": "'static" }],
                    "generic_params": [{ "name": "'b", "kind": { "tag": "Lifetime", "outlives": ["'static"] } }]
                },
                {
                    "tag": "RegionPredicate",
                    "lifetime": "'b",
                    "bounds": [{ "tag": "Outlives", "lifetime": "'static" }]
                }
            ]
        },
        "header": {
            "is_const": true,
            "is_unsafe": false,
            "is_async": true,
            "abi": { "tag": "Other", "name": "efiapi" }
        }
    });

    let mut derive = item(
        "0:4",
        Some("Shape"),
        json!({ "tag": "ProcMacro", "kind": "Derive", "helpers": ["shape"] }),
    );
    derive["span"] = Value::Null;
    derive["attrs"] = json!(["#[proc_macro_derive(Shape, attributes(shape))]"]);

    let mut hidden = item(
        "0:6",
        Some("HIDDEN"),
        json!({ "tag": "Static", "type": primitive("bool"), "is_mutable": true, "expr": "false" }),
    );
    hidden["visibility"] = json!({ "tag": "Crate" });

    let mut first = item(
        "0:9",
        Some("First"),
        json!({
            "tag": "Variant",
            "variant_kind": "Unit",
            "fields": [],
            "fields_stripped": false,
            "discriminant": { "expr": "1", "value": "1" }
        }),
    );
    first["visibility"] = json!({ "tag": "Default" });

    let items = vec![
        item(
            "0:0",
            Some("shapes_ext"),
            module(
                &[
                    "0:1", "0:2", "0:3", "0:4", "0:5", "0:6", "0:7", "0:8", "0:10", "0:13", "0:14",
                    "0:15", "0:16", "0:17", "0:18", "0:19",
                ],
                true,
                false,
            ),
        ),
        limit,
        item("0:2", Some("Callback"), callback),
        item("0:3", Some("project"), project),
        derive,
        item(
            "0:5",
            Some("shapes"),
            json!({ "tag": "Macro", "macro": "macro_rules! shapes { () => {} }" }),
        ),
        hidden,
        item(
            "0:7",
            Some("Debug"),
            json!({ "tag": "Import", "source": "std::fmt::Debug", "name": "Debug", "id": "1:20", "glob": false }),
        ),
        item(
            "0:8",
            Some("Mode"),
            json!({
                "tag": "Enum",
                "generics": no_generics(),
                "variants_stripped": true,
                "variants": ["0:9"],
                "impls": []
            }),
        ),
        first,
        item(
            "0:10",
            Some("Sink"),
            json!({
                "tag": "Trait",
                "is_auto": false,
                "is_unsafe": true,
                "items": ["0:11", "0:12"],
                "generics": no_generics(),
                "bounds": [trait_bound(debug.clone(), "MaybeConst")],
                "implementations": ["0:19"]
            }),
        ),
        item(
            "0:11",
            Some("CAPACITY"),
            json!({ "tag": "AssocConst", "type": primitive("usize"), "default": "0" }),
        ),
        item(
            "0:12",
            Some("Buffer"),
            json!({
                "tag": "AssocType",
                "generics": no_generics(),
                "bounds": [trait_bound(clone.clone(), "None")],
                "default": primitive("u8")
            }),
        ),
        item(
            "0:13",
            Some("Printable"),
            json!({
                "tag": "TraitAlias",
                "generics": no_generics(),
                "params": [trait_bound(debug.clone(), "None"), { "tag": "Outlives", "lifetime": "'static" }]
            }),
        ),
        item(
            "0:14",
            Some("Bits"),
            json!({
                "tag": "Union",
                "generics": no_generics(),
                "fields_stripped": true,
                "fields": [],
                "impls": []
            }),
        ),
        item(
            "0:15",
            Some("kore"),
            json!({ "tag": "ExternCrate", "name": "core", "rename": "kore" }),
        ),
        item("0:16", Some("u8"), json!({ "tag": "PrimitiveType", "name": "u8" })),
        item(
            "0:17",
            Some("Opaque"),
            json!({
                "tag": "OpaqueTy",
                "bounds": [trait_bound(clone, "None")],
                "generics": no_generics()
            }),
        ),
        item("0:18", Some("Handle"), json!({ "tag": "ForeignType" })),
        item(
            "0:19",
            None,
            json!({
                "tag": "Impl",
                "is_unsafe": true,
                "generics": {
                    "params": [{
                        "name": "T",
                        "kind": { "tag": "Type", "bounds": [], "default": null, "synthetic": false }
                    }],
                    "where_predicates": []
                },
                "provided_trait_methods": ["flush", "close"],
                "trait": resolved("Sink", "0:10"),
                "for": { "tag": "Generic", "name": "T" },
                "items": [],
                "negative": false,
                "synthetic": true,
                "blanket_impl": { "tag": "Generic", "name": "T" }
            }),
        ),
    ];

    let paths = json!({
        "0:0": summary(&["shapes_ext"], "Module"),
        "0:4": summary(&["shapes_ext", "Shape"], "ProcDerive"),
        "0:10": summary(&["shapes_ext", "Sink"], "Trait"),
        "1:20": summary(&["std", "fmt", "Debug"], "Trait"),
        "1:21": summary(&["std", "iter", "Iterator"], "Trait"),
        "1:22": summary(&["std", "clone", "Clone"], "Trait"),
        "1:23": summary(&["std", "ops", "Fn"], "Trait")
    });

    document(items, paths)
}
