//! Generics, bounds, where-clauses and function signatures.

use super::types::{Term, Type};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Generics {
    pub params: Vec<GenericParamDef>,
    pub where_predicates: Vec<WherePredicate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenericParamDef {
    pub name: String,
    pub kind: GenericParamDefKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tag")]
pub enum GenericParamDefKind {
    /// `'a: 'b + 'c`
    Lifetime { outlives: Vec<String> },
    Type {
        bounds: Vec<GenericBound>,
        default: Option<Type>,
        /// Introduced by `impl Trait` in argument position rather than written out.
        synthetic: bool,
    },
    Const {
        #[serde(rename = "type")]
        type_: Type,
        default: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tag")]
pub enum WherePredicate {
    /// `for<'a> T: Trait<'a>`
    BoundPredicate {
        #[serde(rename = "type")]
        type_: Type,
        bounds: Vec<GenericBound>,
        generic_params: Vec<GenericParamDef>,
    },
    /// `'a: 'b`
    RegionPredicate {
        lifetime: String,
        bounds: Vec<GenericBound>,
    },
    /// `T::Item = u8`
    EqPredicate { lhs: Type, rhs: Term },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tag")]
pub enum GenericBound {
    TraitBound {
        #[serde(rename = "trait")]
        trait_: Type,
        /// Higher-rank parameters: the `'a` in `for<'a> Fn(&'a u8)`.
        generic_params: Vec<GenericParamDef>,
        modifier: TraitBoundModifier,
    },
    Outlives { lifetime: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TraitBoundModifier {
    None,
    /// `?Sized`
    Maybe,
    /// `~const Trait`
    MaybeConst,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FnDecl {
    /// `(pattern, type)` pairs; the pattern is stringified (`self`, `_`, `(a, b)`).
    pub inputs: Vec<(String, Type)>,
    pub output: Option<Type>,
    pub c_variadic: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub is_const: bool,
    pub is_unsafe: bool,
    pub is_async: bool,
    pub abi: Abi,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tag")]
pub enum Abi {
    Rust,
    C { unwind: bool },
    Cdecl { unwind: bool },
    Stdcall { unwind: bool },
    Fastcall { unwind: bool },
    Aapcs { unwind: bool },
    Win64 { unwind: bool },
    SysV64 { unwind: bool },
    System { unwind: bool },
    Other { name: String },
}

impl Generics {
    /// Parameters the user actually wrote, skipping ones synthesized from `impl Trait`.
    pub fn explicit_params(&self) -> impl Iterator<Item = &GenericParamDef> {
        self.params.iter().filter(|p| {
            !matches!(
                p.kind,
                GenericParamDefKind::Type {
                    synthetic: true,
                    ..
                }
            )
        })
    }
}
