//! Depth-first traversal over item payloads.
//!
//! Implement [`Visitor`] and override the hooks you care about; each default
//! hook calls the matching `walk_*` function to keep descending. Children are
//! visited in declaration order, so traversal output is deterministic.

use super::generics::{
    FnDecl, GenericBound, GenericParamDef, GenericParamDefKind, Generics, WherePredicate,
};
use super::items::ItemEnum;
use super::krate::Id;
use super::types::{Constant, GenericArg, GenericArgs, Path, Term, Type, TypeBindingKind};

pub trait Visitor<'a> {
    fn visit_id(&mut self, _id: &'a Id) {}

    fn visit_type(&mut self, ty: &'a Type) {
        walk_type(self, ty);
    }

    fn visit_path(&mut self, path: &'a Path) {
        walk_path(self, path);
    }

    fn visit_generic_args(&mut self, args: &'a GenericArgs) {
        walk_generic_args(self, args);
    }

    fn visit_generics(&mut self, generics: &'a Generics) {
        walk_generics(self, generics);
    }

    fn visit_generic_param(&mut self, param: &'a GenericParamDef) {
        walk_generic_param(self, param);
    }

    fn visit_generic_bound(&mut self, bound: &'a GenericBound) {
        walk_generic_bound(self, bound);
    }

    fn visit_item_enum(&mut self, inner: &'a ItemEnum) {
        walk_item_enum(self, inner);
    }
}

pub fn walk_item_enum<'a, V: Visitor<'a> + ?Sized>(v: &mut V, inner: &'a ItemEnum) {
    match inner {
        ItemEnum::Module(module) => visit_ids(v, &module.items),
        ItemEnum::Import(import) => {
            if let Some(id) = &import.id {
                v.visit_id(id);
            }
        }
        ItemEnum::Union(union) => {
            v.visit_generics(&union.generics);
            visit_ids(v, &union.fields);
            visit_ids(v, &union.impls);
        }
        ItemEnum::Struct(strukt) => {
            v.visit_generics(&strukt.generics);
            visit_ids(v, &strukt.fields);
            visit_ids(v, &strukt.impls);
        }
        ItemEnum::StructField { type_ }
        | ItemEnum::AssocConst { type_, .. }
        | ItemEnum::Constant(Constant { type_, .. }) => v.visit_type(type_),
        ItemEnum::Static(stat) => v.visit_type(&stat.type_),
        ItemEnum::Enum(enm) => {
            v.visit_generics(&enm.generics);
            visit_ids(v, &enm.variants);
            visit_ids(v, &enm.impls);
        }
        ItemEnum::Variant(variant) => visit_ids(v, &variant.fields),
        ItemEnum::Function(function) => {
            walk_fn_decl(v, &function.decl);
            v.visit_generics(&function.generics);
        }
        ItemEnum::Method(method) => {
            walk_fn_decl(v, &method.decl);
            v.visit_generics(&method.generics);
        }
        ItemEnum::Trait(trait_) => {
            visit_ids(v, &trait_.items);
            v.visit_generics(&trait_.generics);
            visit_bounds(v, &trait_.bounds);
            visit_ids(v, &trait_.implementations);
        }
        ItemEnum::TraitAlias(alias) => {
            v.visit_generics(&alias.generics);
            visit_bounds(v, &alias.params);
        }
        ItemEnum::Impl(imp) => {
            v.visit_generics(&imp.generics);
            if let Some(trait_) = &imp.trait_ {
                v.visit_type(trait_);
            }
            v.visit_type(&imp.for_);
            visit_ids(v, &imp.items);
            if let Some(blanket) = &imp.blanket_impl {
                v.visit_type(blanket);
            }
        }
        ItemEnum::Typedef(typedef) => {
            v.visit_type(&typedef.type_);
            v.visit_generics(&typedef.generics);
        }
        ItemEnum::OpaqueTy(opaque) => {
            visit_bounds(v, &opaque.bounds);
            v.visit_generics(&opaque.generics);
        }
        ItemEnum::AssocType {
            generics,
            bounds,
            default,
        } => {
            v.visit_generics(generics);
            visit_bounds(v, bounds);
            if let Some(default) = default {
                v.visit_type(default);
            }
        }
        ItemEnum::ExternCrate { .. }
        | ItemEnum::ForeignType
        | ItemEnum::Macro { .. }
        | ItemEnum::ProcMacro(_)
        | ItemEnum::PrimitiveType { .. } => {}
    }
}

pub fn walk_type<'a, V: Visitor<'a> + ?Sized>(v: &mut V, ty: &'a Type) {
    match ty {
        Type::ResolvedPath(path) => v.visit_path(path),
        Type::DynTrait(dyn_trait) => {
            for poly in &dyn_trait.traits {
                v.visit_path(&poly.trait_);
                visit_params(v, &poly.generic_params);
            }
        }
        Type::FunctionPointer(fn_ptr) => {
            walk_fn_decl(v, &fn_ptr.decl);
            visit_params(v, &fn_ptr.generic_params);
        }
        Type::Tuple { types } => {
            for ty in types {
                v.visit_type(ty);
            }
        }
        Type::Slice { type_ }
        | Type::Array { type_, .. }
        | Type::RawPointer { type_, .. }
        | Type::BorrowedRef { type_, .. } => v.visit_type(type_),
        Type::ImplTrait { bounds } => visit_bounds(v, bounds),
        Type::QualifiedPath {
            args,
            self_type,
            trait_,
            ..
        } => {
            v.visit_generic_args(args);
            v.visit_type(self_type);
            if let Some(trait_) = trait_ {
                v.visit_path(trait_);
            }
        }
        Type::Generic { .. } | Type::Primitive { .. } | Type::Infer => {}
    }
}

pub fn walk_path<'a, V: Visitor<'a> + ?Sized>(v: &mut V, path: &'a Path) {
    v.visit_id(&path.id);
    if let Some(args) = &path.args {
        v.visit_generic_args(args);
    }
}

pub fn walk_generic_args<'a, V: Visitor<'a> + ?Sized>(v: &mut V, args: &'a GenericArgs) {
    match args {
        GenericArgs::AngleBracketed { args, bindings } => {
            for arg in args {
                match arg {
                    GenericArg::Type { type_ } => v.visit_type(type_),
                    GenericArg::Const(constant) => v.visit_type(&constant.type_),
                    GenericArg::Lifetime { .. } | GenericArg::Infer => {}
                }
            }
            for binding in bindings {
                v.visit_generic_args(&binding.args);
                match &binding.binding {
                    TypeBindingKind::Equality { term } => walk_term(v, term),
                    TypeBindingKind::Constraint { bounds } => visit_bounds(v, bounds),
                }
            }
        }
        GenericArgs::Parenthesized { inputs, output } => {
            for input in inputs {
                v.visit_type(input);
            }
            if let Some(output) = output {
                v.visit_type(output);
            }
        }
    }
}

pub fn walk_generics<'a, V: Visitor<'a> + ?Sized>(v: &mut V, generics: &'a Generics) {
    visit_params(v, &generics.params);
    for predicate in &generics.where_predicates {
        match predicate {
            WherePredicate::BoundPredicate {
                type_,
                bounds,
                generic_params,
            } => {
                v.visit_type(type_);
                visit_bounds(v, bounds);
                visit_params(v, generic_params);
            }
            WherePredicate::RegionPredicate { bounds, .. } => visit_bounds(v, bounds),
            WherePredicate::EqPredicate { lhs, rhs } => {
                v.visit_type(lhs);
                walk_term(v, rhs);
            }
        }
    }
}

pub fn walk_generic_param<'a, V: Visitor<'a> + ?Sized>(v: &mut V, param: &'a GenericParamDef) {
    match &param.kind {
        GenericParamDefKind::Lifetime { .. } => {}
        GenericParamDefKind::Type {
            bounds, default, ..
        } => {
            visit_bounds(v, bounds);
            if let Some(default) = default {
                v.visit_type(default);
            }
        }
        GenericParamDefKind::Const { type_, .. } => v.visit_type(type_),
    }
}

pub fn walk_generic_bound<'a, V: Visitor<'a> + ?Sized>(v: &mut V, bound: &'a GenericBound) {
    match bound {
        GenericBound::TraitBound {
            trait_,
            generic_params,
            ..
        } => {
            v.visit_type(trait_);
            visit_params(v, generic_params);
        }
        GenericBound::Outlives { .. } => {}
    }
}

fn walk_fn_decl<'a, V: Visitor<'a> + ?Sized>(v: &mut V, decl: &'a FnDecl) {
    for (_, ty) in &decl.inputs {
        v.visit_type(ty);
    }
    if let Some(output) = &decl.output {
        v.visit_type(output);
    }
}

fn walk_term<'a, V: Visitor<'a> + ?Sized>(v: &mut V, term: &'a Term) {
    match term {
        Term::Type { type_ } => v.visit_type(type_),
        Term::Constant(constant) => v.visit_type(&constant.type_),
    }
}

fn visit_ids<'a, V: Visitor<'a> + ?Sized>(v: &mut V, ids: &'a [Id]) {
    for id in ids {
        v.visit_id(id);
    }
}

fn visit_bounds<'a, V: Visitor<'a> + ?Sized>(v: &mut V, bounds: &'a [GenericBound]) {
    for bound in bounds {
        v.visit_generic_bound(bound);
    }
}

fn visit_params<'a, V: Visitor<'a> + ?Sized>(v: &mut V, params: &'a [GenericParamDef]) {
    for param in params {
        v.visit_generic_param(param);
    }
}

/// Collects every id an item payload refers to, in traversal order.
///
/// The same id appears once per reference, so `Vec<Vec<T>>` in an impl yields
/// the id of `Vec` twice.
pub fn referenced_ids(inner: &ItemEnum) -> Vec<&Id> {
    struct Collector<'a>(Vec<&'a Id>);

    impl<'a> Visitor<'a> for Collector<'a> {
        fn visit_id(&mut self, id: &'a Id) {
            self.0.push(id);
        }
    }

    let mut collector = Collector(Vec::new());
    collector.visit_item_enum(inner);
    collector.0
}
