//! Decoders for type expressions.

use super::Result;
use super::fields::{Fields, Loc};
use super::generics::{decode_bound, decode_fn_decl, decode_header, decode_param};
use crate::model::{
    Constant, DynTrait, FunctionPointer, GenericArg, GenericArgs, Path, PolyTrait, Term, Type,
    TypeBinding, TypeBindingKind,
};
use serde_json::Value;

pub(super) fn decode_type(value: &Value, loc: Loc<'_>) -> Result<Type> {
    let fields = Fields::object(value, loc)?;
    let ty = match fields.tag()? {
        "ResolvedPath" => Type::ResolvedPath(path_fields(fields)?),
        "DynTrait" => Type::DynTrait(DynTrait {
            traits: fields.list("traits", decode_poly_trait)?,
            lifetime: fields.opt_string("lifetime")?,
        }),
        "Generic" => Type::Generic {
            name: fields.string("name")?,
        },
        "Primitive" => Type::Primitive {
            name: fields.string("name")?,
        },
        "FunctionPointer" => Type::FunctionPointer(Box::new(FunctionPointer {
            decl: fields.nested("decl", decode_fn_decl)?,
            generic_params: fields.list("generic_params", decode_param)?,
            header: fields.nested("header", decode_header)?,
        })),
        "Tuple" => Type::Tuple {
            types: fields.list("types", decode_type)?,
        },
        "Slice" => Type::Slice {
            type_: boxed_type(fields, "type")?,
        },
        "Array" => Type::Array {
            type_: boxed_type(fields, "type")?,
            len: fields.string("len")?,
        },
        "ImplTrait" => Type::ImplTrait {
            bounds: fields.list("bounds", decode_bound)?,
        },
        "Infer" => Type::Infer,
        "RawPointer" => Type::RawPointer {
            is_mutable: fields.bool("is_mutable")?,
            type_: boxed_type(fields, "type")?,
        },
        "BorrowedRef" => Type::BorrowedRef {
            lifetime: fields.opt_string("lifetime")?,
            is_mutable: fields.bool("is_mutable")?,
            type_: boxed_type(fields, "type")?,
        },
        "QualifiedPath" => Type::QualifiedPath {
            name: fields.string("name")?,
            args: Box::new(fields.nested("args", decode_generic_args)?),
            self_type: boxed_type(fields, "self_type")?,
            trait_: fields.optional("trait", decode_path)?,
        },
        other => return Err(fields.unknown_variant("Type", other)),
    };
    Ok(ty)
}

fn boxed_type(fields: Fields<'_, '_>, key: &'static str) -> Result<Box<Type>> {
    fields.nested(key, decode_type).map(Box::new)
}

pub(super) fn decode_path(value: &Value, loc: Loc<'_>) -> Result<Path> {
    path_fields(Fields::object(value, loc)?)
}

/// A `Path` is either a standalone object or flattened into `ResolvedPath`.
fn path_fields(fields: Fields<'_, '_>) -> Result<Path> {
    Ok(Path {
        name: fields.string("name")?,
        id: fields.id("id")?,
        args: fields
            .optional("args", decode_generic_args)?
            .map(Box::new),
    })
}

fn decode_poly_trait(value: &Value, loc: Loc<'_>) -> Result<PolyTrait> {
    let fields = Fields::object(value, loc)?;
    Ok(PolyTrait {
        trait_: fields.nested("trait", decode_path)?,
        generic_params: fields.list("generic_params", decode_param)?,
    })
}

pub(super) fn decode_generic_args(value: &Value, loc: Loc<'_>) -> Result<GenericArgs> {
    let fields = Fields::object(value, loc)?;
    match fields.tag()? {
        "AngleBracketed" => Ok(GenericArgs::AngleBracketed {
            args: fields.list("args", decode_generic_arg)?,
            bindings: fields.list("bindings", decode_binding)?,
        }),
        "Parenthesized" => Ok(GenericArgs::Parenthesized {
            inputs: fields.list("inputs", decode_type)?,
            output: fields.optional("output", decode_type)?,
        }),
        other => Err(fields.unknown_variant("GenericArgs", other)),
    }
}

fn decode_generic_arg(value: &Value, loc: Loc<'_>) -> Result<GenericArg> {
    let fields = Fields::object(value, loc)?;
    match fields.tag()? {
        "Lifetime" => Ok(GenericArg::Lifetime {
            lifetime: fields.string("lifetime")?,
        }),
        "Type" => Ok(GenericArg::Type {
            type_: fields.nested("type", decode_type)?,
        }),
        "Const" => Ok(GenericArg::Const(constant_fields(fields)?)),
        "Infer" => Ok(GenericArg::Infer),
        other => Err(fields.unknown_variant("GenericArg", other)),
    }
}

fn decode_binding(value: &Value, loc: Loc<'_>) -> Result<TypeBinding> {
    let fields = Fields::object(value, loc)?;
    Ok(TypeBinding {
        name: fields.string("name")?,
        args: fields.nested("args", decode_generic_args)?,
        binding: fields.nested("binding", decode_binding_kind)?,
    })
}

fn decode_binding_kind(value: &Value, loc: Loc<'_>) -> Result<TypeBindingKind> {
    let fields = Fields::object(value, loc)?;
    match fields.tag()? {
        "Equality" => Ok(TypeBindingKind::Equality {
            term: fields.nested("term", decode_term)?,
        }),
        "Constraint" => Ok(TypeBindingKind::Constraint {
            bounds: fields.list("bounds", decode_bound)?,
        }),
        other => Err(fields.unknown_variant("TypeBindingKind", other)),
    }
}

pub(super) fn decode_term(value: &Value, loc: Loc<'_>) -> Result<Term> {
    let fields = Fields::object(value, loc)?;
    match fields.tag()? {
        "Type" => Ok(Term::Type {
            type_: fields.nested("type", decode_type)?,
        }),
        "Constant" => Ok(Term::Constant(constant_fields(fields)?)),
        other => Err(fields.unknown_variant("Term", other)),
    }
}

/// `Constant` payloads are flattened into their parent's tagged object.
pub(super) fn constant_fields(fields: Fields<'_, '_>) -> Result<Constant> {
    Ok(Constant {
        type_: fields.nested("type", decode_type)?,
        expr: fields.string("expr")?,
        value: fields.opt_string("value")?,
        is_literal: fields.bool("is_literal")?,
    })
}
