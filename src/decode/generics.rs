//! Decoders for generics, bounds and function signatures.

use super::Result;
use super::fields::{self, Fields, Loc};
use super::types::{decode_term, decode_type};
use crate::model::{
    Abi, FnDecl, GenericBound, GenericParamDef, GenericParamDefKind, Generics, Header,
    TraitBoundModifier, WherePredicate,
};
use serde_json::Value;

pub(super) fn decode_generics(value: &Value, loc: Loc<'_>) -> Result<Generics> {
    let fields = Fields::object(value, loc)?;
    Ok(Generics {
        params: fields.list("params", decode_param)?,
        where_predicates: fields.list("where_predicates", decode_predicate)?,
    })
}

pub(super) fn decode_param(value: &Value, loc: Loc<'_>) -> Result<GenericParamDef> {
    let fields = Fields::object(value, loc)?;
    Ok(GenericParamDef {
        name: fields.string("name")?,
        kind: fields.nested("kind", decode_param_kind)?,
    })
}

fn decode_param_kind(value: &Value, loc: Loc<'_>) -> Result<GenericParamDefKind> {
    let fields = Fields::object(value, loc)?;
    match fields.tag()? {
        "Lifetime" => Ok(GenericParamDefKind::Lifetime {
            outlives: fields.strings("outlives")?,
        }),
        "Type" => Ok(GenericParamDefKind::Type {
            bounds: fields.list("bounds", decode_bound)?,
            default: fields.optional("default", decode_type)?,
            synthetic: fields.bool("synthetic")?,
        }),
        "Const" => Ok(GenericParamDefKind::Const {
            type_: fields.nested("type", decode_type)?,
            default: fields.opt_string("default")?,
        }),
        other => Err(fields.unknown_variant("GenericParamDefKind", other)),
    }
}

fn decode_predicate(value: &Value, loc: Loc<'_>) -> Result<WherePredicate> {
    let fields = Fields::object(value, loc)?;
    match fields.tag()? {
        "BoundPredicate" => Ok(WherePredicate::BoundPredicate {
            type_: fields.nested("type", decode_type)?,
            bounds: fields.list("bounds", decode_bound)?,
            generic_params: fields.list("generic_params", decode_param)?,
        }),
        "RegionPredicate" => Ok(WherePredicate::RegionPredicate {
            lifetime: fields.string("lifetime")?,
            bounds: fields.list("bounds", decode_bound)?,
        }),
        "EqPredicate" => Ok(WherePredicate::EqPredicate {
            lhs: fields.nested("lhs", decode_type)?,
            rhs: fields.nested("rhs", decode_term)?,
        }),
        other => Err(fields.unknown_variant("WherePredicate", other)),
    }
}

pub(super) fn decode_bound(value: &Value, loc: Loc<'_>) -> Result<GenericBound> {
    let fields = Fields::object(value, loc)?;
    match fields.tag()? {
        "TraitBound" => Ok(GenericBound::TraitBound {
            trait_: fields.nested("trait", decode_type)?,
            generic_params: fields.list("generic_params", decode_param)?,
            modifier: fields.nested("modifier", decode_modifier)?,
        }),
        "Outlives" => Ok(GenericBound::Outlives {
            lifetime: fields.string("lifetime")?,
        }),
        other => Err(fields.unknown_variant("GenericBound", other)),
    }
}

fn decode_modifier(value: &Value, loc: Loc<'_>) -> Result<TraitBoundModifier> {
    match fields::string(value, loc)?.as_str() {
        "None" => Ok(TraitBoundModifier::None),
        "Maybe" => Ok(TraitBoundModifier::Maybe),
        "MaybeConst" => Ok(TraitBoundModifier::MaybeConst),
        other => Err(fields::unknown_name(loc, "TraitBoundModifier", other)),
    }
}

pub(super) fn decode_fn_decl(value: &Value, loc: Loc<'_>) -> Result<FnDecl> {
    let fields = Fields::object(value, loc)?;
    Ok(FnDecl {
        inputs: fields.list("inputs", |input, loc| {
            fields::pair(input, loc, fields::string, decode_type)
        })?,
        output: fields.optional("output", decode_type)?,
        c_variadic: fields.bool("c_variadic")?,
    })
}

pub(super) fn decode_header(value: &Value, loc: Loc<'_>) -> Result<Header> {
    let fields = Fields::object(value, loc)?;
    Ok(Header {
        is_const: fields.bool("is_const")?,
        is_unsafe: fields.bool("is_unsafe")?,
        is_async: fields.bool("is_async")?,
        abi: fields.nested("abi", decode_abi)?,
    })
}

fn decode_abi(value: &Value, loc: Loc<'_>) -> Result<Abi> {
    let fields = Fields::object(value, loc)?;
    let unwind = || fields.bool("unwind");
    match fields.tag()? {
        "Rust" => Ok(Abi::Rust),
        "C" => Ok(Abi::C { unwind: unwind()? }),
        "Cdecl" => Ok(Abi::Cdecl { unwind: unwind()? }),
        "Stdcall" => Ok(Abi::Stdcall { unwind: unwind()? }),
        "Fastcall" => Ok(Abi::Fastcall { unwind: unwind()? }),
        "Aapcs" => Ok(Abi::Aapcs { unwind: unwind()? }),
        "Win64" => Ok(Abi::Win64 { unwind: unwind()? }),
        "SysV64" => Ok(Abi::SysV64 { unwind: unwind()? }),
        "System" => Ok(Abi::System { unwind: unwind()? }),
        "Other" => Ok(Abi::Other {
            name: fields.string("name")?,
        }),
        other => Err(fields.unknown_variant("Abi", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use crate::model::Type;
    use serde_json::json;

    #[test]
    fn hrtb_trait_bound() {
        let value = json!({
            "tag": "TraitBound",
            "trait": { "tag": "ResolvedPath", "name": "Fn", "id": "2:1", "args": null },
            "generic_params": [
                { "name": "'a", "kind": { "tag": "Lifetime", "outlives": [] } }
            ],
            "modifier": "None"
        });

        let GenericBound::TraitBound {
            generic_params,
            modifier,
            trait_,
        } = decode_bound(&value, Loc::ROOT).unwrap()
        else {
            panic!("expected a trait bound");
        };
        assert_eq!(generic_params.len(), 1);
        assert_eq!(generic_params[0].name, "'a");
        assert_eq!(modifier, TraitBoundModifier::None);
        assert!(matches!(trait_, Type::ResolvedPath(_)));
    }

    #[test]
    fn unknown_modifier() {
        let value = json!({
            "tag": "TraitBound",
            "trait": { "tag": "Generic", "name": "T" },
            "generic_params": [],
            "modifier": "Sometimes"
        });
        let err = decode_bound(&value, Loc::ROOT).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnknownVariant { union: "TraitBoundModifier", ref tag, .. } if tag == "Sometimes"
        ));
    }

    #[test]
    fn fn_decl_inputs_are_pairs() {
        let value = json!({
            "inputs": [["self", { "tag": "Generic", "name": "Self" }], ["n", { "tag": "Primitive", "name": "usize" }]],
            "output": null,
            "c_variadic": false
        });
        let decl = decode_fn_decl(&value, Loc::ROOT).unwrap();
        let names: Vec<&str> = decl.inputs.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["self", "n"]);
        assert_eq!(decl.output, None);
    }

    #[test]
    fn where_predicates_and_synthetic_params() {
        let value = json!({
            "params": [
                { "name": "T", "kind": { "tag": "Type", "bounds": [], "default": null, "synthetic": false } },
                { "name": "impl Debug", "kind": { "tag": "Type", "bounds": [], "synthetic": true } }
            ],
            "where_predicates": [
                { "tag": "RegionPredicate", "lifetime": "'a", "bounds": [{ "tag": "Outlives", "lifetime": "'b" }] }
            ]
        });
        let generics = decode_generics(&value, Loc::ROOT).unwrap();
        assert_eq!(generics.explicit_params().count(), 1);
        assert_eq!(generics.where_predicates.len(), 1);
    }

    #[test]
    fn abi_with_unwind() {
        let value = json!({ "tag": "C", "unwind": true });
        assert_eq!(decode_abi(&value, Loc::ROOT).unwrap(), Abi::C { unwind: true });

        let err = decode_abi(&json!({ "tag": "C" }), Loc::ROOT).unwrap_err();
        assert!(matches!(err, DecodeError::MissingField { field: "unwind", .. }));
    }
}
