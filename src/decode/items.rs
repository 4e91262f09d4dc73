//! Decoders for the item envelope, item payloads and the crate-level tables.

use super::Result;
use super::fields::{self, Fields, Loc};
use super::generics::{decode_bound, decode_fn_decl, decode_generics, decode_header};
use super::types::{constant_fields, decode_type};
use crate::error::DecodeError;
use crate::model::{
    CrateId, Deprecation, Discriminant, Enum, ExternalCrate, Function, Id, Impl, Import, Item,
    ItemEnum, ItemKind, ItemSummary, MacroKind, Method, Module, OpaqueTy, ProcMacro, Span, Static,
    Struct, StructType, Trait, TraitAlias, Typedef, Union, Variant, Visibility,
};
use serde_json::Value;

/// Decodes one `index` entry. The entry's own `id` must equal its key.
pub(super) fn decode_item(key: &str, value: &Value, loc: Loc<'_>) -> Result<Item> {
    let fields = Fields::object(value, loc)?;
    let id = fields.id("id")?;
    if id.as_str() != key {
        return Err(DecodeError::KeyMismatch {
            key: Id::from(key),
            id,
        });
    }

    Ok(Item {
        id,
        crate_id: fields.u32("crate_id")?,
        name: fields.opt_string("name")?,
        span: fields.optional("span", decode_span)?,
        visibility: fields.nested("visibility", decode_visibility)?,
        docs: fields.opt_string("docs")?,
        links: fields.map("links", |text, target, loc| {
            Ok((text.to_string(), fields::id(target, loc)?))
        })?,
        attrs: fields.strings("attrs")?,
        deprecation: fields.optional("deprecation", decode_deprecation)?,
        inner: fields.nested("inner", decode_item_enum)?,
    })
}

fn decode_span(value: &Value, loc: Loc<'_>) -> Result<Span> {
    let fields = Fields::object(value, loc)?;
    Ok(Span {
        filename: fields.string("filename")?,
        begin: fields.nested("begin", position)?,
        end: fields.nested("end", position)?,
    })
}

/// `[line, column]`
fn position(value: &Value, loc: Loc<'_>) -> Result<(usize, usize)> {
    fields::pair(value, loc, fields::unsigned, fields::unsigned)
}

fn decode_visibility(value: &Value, loc: Loc<'_>) -> Result<Visibility> {
    let fields = Fields::object(value, loc)?;
    match fields.tag()? {
        "Public" => Ok(Visibility::Public),
        "Default" => Ok(Visibility::Default),
        "Crate" => Ok(Visibility::Crate),
        "Restricted" => Ok(Visibility::Restricted {
            parent: fields.id("parent")?,
            path: fields.string("path")?,
        }),
        other => Err(fields.unknown_variant("Visibility", other)),
    }
}

fn decode_deprecation(value: &Value, loc: Loc<'_>) -> Result<Deprecation> {
    let fields = Fields::object(value, loc)?;
    Ok(Deprecation {
        since: fields.opt_string("since")?,
        note: fields.opt_string("note")?,
    })
}

fn decode_item_enum(value: &Value, loc: Loc<'_>) -> Result<ItemEnum> {
    let fields = Fields::object(value, loc)?;
    let inner = match fields.tag()? {
        "Module" => ItemEnum::Module(Module {
            is_crate: fields.bool("is_crate")?,
            items: fields.ids("items")?,
            is_stripped: fields.bool("is_stripped")?,
        }),
        "ExternCrate" => ItemEnum::ExternCrate {
            name: fields.string("name")?,
            rename: fields.opt_string("rename")?,
        },
        "Import" => ItemEnum::Import(Import {
            source: fields.string("source")?,
            name: fields.string("name")?,
            id: fields.opt_id("id")?,
            glob: fields.bool("glob")?,
        }),
        "Union" => ItemEnum::Union(Union {
            generics: fields.nested("generics", decode_generics)?,
            fields_stripped: fields.bool("fields_stripped")?,
            fields: fields.ids("fields")?,
            impls: fields.ids("impls")?,
        }),
        "Struct" => ItemEnum::Struct(Struct {
            struct_type: fields.nested("struct_type", decode_struct_type)?,
            generics: fields.nested("generics", decode_generics)?,
            fields_stripped: fields.bool("fields_stripped")?,
            fields: fields.ids("fields")?,
            impls: fields.ids("impls")?,
        }),
        "StructField" => ItemEnum::StructField {
            type_: fields.nested("type", decode_type)?,
        },
        "Enum" => ItemEnum::Enum(Enum {
            generics: fields.nested("generics", decode_generics)?,
            variants_stripped: fields.bool("variants_stripped")?,
            variants: fields.ids("variants")?,
            impls: fields.ids("impls")?,
        }),
        "Variant" => ItemEnum::Variant(Variant {
            variant_kind: fields.nested("variant_kind", decode_struct_type)?,
            fields: fields.ids("fields")?,
            fields_stripped: fields.bool("fields_stripped")?,
            discriminant: fields.optional("discriminant", decode_discriminant)?,
        }),
        "Function" => ItemEnum::Function(Function {
            decl: fields.nested("decl", decode_fn_decl)?,
            generics: fields.nested("generics", decode_generics)?,
            header: fields.nested("header", decode_header)?,
        }),
        "Method" => ItemEnum::Method(Method {
            decl: fields.nested("decl", decode_fn_decl)?,
            generics: fields.nested("generics", decode_generics)?,
            header: fields.nested("header", decode_header)?,
            has_body: fields.bool("has_body")?,
        }),
        "Trait" => ItemEnum::Trait(Trait {
            is_auto: fields.bool("is_auto")?,
            is_unsafe: fields.bool("is_unsafe")?,
            items: fields.ids("items")?,
            generics: fields.nested("generics", decode_generics)?,
            bounds: fields.list("bounds", decode_bound)?,
            implementations: fields.ids("implementations")?,
        }),
        "TraitAlias" => ItemEnum::TraitAlias(TraitAlias {
            generics: fields.nested("generics", decode_generics)?,
            params: fields.list("params", decode_bound)?,
        }),
        "Impl" => ItemEnum::Impl(Impl {
            is_unsafe: fields.bool("is_unsafe")?,
            generics: fields.nested("generics", decode_generics)?,
            provided_trait_methods: fields
                .strings("provided_trait_methods")?
                .into_iter()
                .collect(),
            trait_: fields.optional("trait", decode_type)?,
            for_: fields.nested("for", decode_type)?,
            items: fields.ids("items")?,
            negative: fields.bool("negative")?,
            synthetic: fields.bool("synthetic")?,
            blanket_impl: fields.optional("blanket_impl", decode_type)?,
        }),
        "Typedef" => ItemEnum::Typedef(Typedef {
            type_: fields.nested("type", decode_type)?,
            generics: fields.nested("generics", decode_generics)?,
        }),
        "OpaqueTy" => ItemEnum::OpaqueTy(OpaqueTy {
            bounds: fields.list("bounds", decode_bound)?,
            generics: fields.nested("generics", decode_generics)?,
        }),
        "Constant" => ItemEnum::Constant(constant_fields(fields)?),
        "Static" => ItemEnum::Static(Static {
            type_: fields.nested("type", decode_type)?,
            is_mutable: fields.bool("is_mutable")?,
            expr: fields.string("expr")?,
        }),
        "ForeignType" => ItemEnum::ForeignType,
        "Macro" => ItemEnum::Macro {
            macro_: fields.string("macro")?,
        },
        "ProcMacro" => ItemEnum::ProcMacro(ProcMacro {
            kind: fields.nested("kind", decode_macro_kind)?,
            helpers: fields.strings("helpers")?,
        }),
        "PrimitiveType" => ItemEnum::PrimitiveType {
            name: fields.string("name")?,
        },
        "AssocConst" => ItemEnum::AssocConst {
            type_: fields.nested("type", decode_type)?,
            default: fields.opt_string("default")?,
        },
        "AssocType" => ItemEnum::AssocType {
            generics: fields.nested("generics", decode_generics)?,
            bounds: fields.list("bounds", decode_bound)?,
            default: fields.optional("default", decode_type)?,
        },
        other => return Err(fields.unknown_variant("ItemEnum", other)),
    };
    Ok(inner)
}

fn decode_struct_type(value: &Value, loc: Loc<'_>) -> Result<StructType> {
    match fields::string(value, loc)?.as_str() {
        "Plain" => Ok(StructType::Plain),
        "Tuple" => Ok(StructType::Tuple),
        "Unit" => Ok(StructType::Unit),
        other => Err(fields::unknown_name(loc, "StructType", other)),
    }
}

fn decode_macro_kind(value: &Value, loc: Loc<'_>) -> Result<MacroKind> {
    match fields::string(value, loc)?.as_str() {
        "Bang" => Ok(MacroKind::Bang),
        "Attr" => Ok(MacroKind::Attr),
        "Derive" => Ok(MacroKind::Derive),
        other => Err(fields::unknown_name(loc, "MacroKind", other)),
    }
}

fn decode_discriminant(value: &Value, loc: Loc<'_>) -> Result<Discriminant> {
    let fields = Fields::object(value, loc)?;
    Ok(Discriminant {
        expr: fields.string("expr")?,
        value: fields.string("value")?,
    })
}

/// Decodes one `paths` entry.
pub(super) fn decode_summary(value: &Value, loc: Loc<'_>) -> Result<ItemSummary> {
    let fields = Fields::object(value, loc)?;
    Ok(ItemSummary {
        crate_id: fields.u32("crate_id")?,
        path: fields.strings("path")?,
        kind: fields.nested("kind", |value, loc| {
            let name = fields::string(value, loc)?;
            ItemKind::from_wire(&name).ok_or_else(|| fields::unknown_name(loc, "ItemKind", &name))
        })?,
    })
}

/// Decodes one `external_crates` entry; the key is the stringified crate id.
pub(super) fn decode_external_crate(
    key: &str,
    value: &Value,
    loc: Loc<'_>,
) -> Result<(CrateId, ExternalCrate)> {
    let crate_id = key.parse::<CrateId>().map_err(|_| DecodeError::TypeMismatch {
        path: loc.to_string(),
        expected: "a 32-bit unsigned integer key",
        found: "a non-numeric key",
    })?;
    let fields = Fields::object(value, loc)?;
    let krate = ExternalCrate {
        name: fields.string("name")?,
        html_root_url: fields.opt_string("html_root_url")?,
    };
    Ok((crate_id, krate))
}
