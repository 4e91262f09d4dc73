//! Type expressions.
//!
//! A [`Type`] owns all of its nested types and generic arguments. The only way
//! back into the crate graph is through an [`Id`] on a [`Path`], which is a
//! lookup key rather than a pointer, so a single expression is always a finite tree.

use super::generics::{FnDecl, GenericBound, GenericParamDef, Header};
use super::krate::Id;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tag")]
pub enum Type {
    /// A named type resolved to an item: `Vec<u8>`, `std::io::Error`.
    ResolvedPath(Path),
    /// `dyn Trait + Send + 'a`
    DynTrait(DynTrait),
    /// A generic parameter in scope: `T`.
    Generic { name: String },
    /// `u8`, `str`, `bool`, ...
    Primitive { name: String },
    FunctionPointer(Box<FunctionPointer>),
    /// `(A, B)`; the unit type is an empty tuple.
    Tuple { types: Vec<Type> },
    /// `[T]`
    Slice {
        #[serde(rename = "type")]
        type_: Box<Type>,
    },
    /// `[T; len]`, where `len` is the stringified length expression.
    Array {
        #[serde(rename = "type")]
        type_: Box<Type>,
        len: String,
    },
    /// `impl Trait` in argument or return position.
    ImplTrait { bounds: Vec<GenericBound> },
    /// `_`
    Infer,
    /// `*const T` / `*mut T`
    RawPointer {
        is_mutable: bool,
        #[serde(rename = "type")]
        type_: Box<Type>,
    },
    /// `&'a T` / `&mut T`
    BorrowedRef {
        lifetime: Option<String>,
        is_mutable: bool,
        #[serde(rename = "type")]
        type_: Box<Type>,
    },
    /// `<Self as Trait>::Name` or `T::Name`.
    QualifiedPath {
        name: String,
        args: Box<GenericArgs>,
        self_type: Box<Type>,
        #[serde(rename = "trait")]
        trait_: Option<Path>,
    },
}

/// A path to an item, with the generic arguments applied at the use site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path {
    /// The path as written at the use site, not necessarily canonical.
    pub name: String,
    pub id: Id,
    /// `None` when the path has no angle brackets or parentheses at all.
    pub args: Option<Box<GenericArgs>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DynTrait {
    pub traits: Vec<PolyTrait>,
    /// The object lifetime bound, if one was written.
    pub lifetime: Option<String>,
}

/// A trait inside a `dyn` type, possibly under a `for<'a>` binder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolyTrait {
    #[serde(rename = "trait")]
    pub trait_: Path,
    pub generic_params: Vec<GenericParamDef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tag")]
pub enum GenericArgs {
    /// `<'a, T, N = 3, Item = u8>`
    AngleBracketed {
        args: Vec<GenericArg>,
        bindings: Vec<TypeBinding>,
    },
    /// `Fn(A, B) -> C`
    Parenthesized {
        inputs: Vec<Type>,
        output: Option<Type>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tag")]
pub enum GenericArg {
    Lifetime {
        lifetime: String,
    },
    Type {
        #[serde(rename = "type")]
        type_: Type,
    },
    Const(Constant),
    Infer,
}

/// An associated item constraint such as `Item = u8` or `Item: Clone`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeBinding {
    pub name: String,
    pub args: GenericArgs,
    pub binding: TypeBindingKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tag")]
pub enum TypeBindingKind {
    Equality { term: Term },
    Constraint { bounds: Vec<GenericBound> },
}

/// Right-hand side of an equality constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tag")]
pub enum Term {
    Type {
        #[serde(rename = "type")]
        type_: Type,
    },
    Constant(Constant),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Constant {
    #[serde(rename = "type")]
    pub type_: Type,
    /// The expression as written in source.
    pub expr: String,
    /// The evaluated value, when the compiler could compute it.
    pub value: Option<String>,
    pub is_literal: bool,
}

/// `for<'a> unsafe extern "C" fn(&'a u8) -> bool`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionPointer {
    pub decl: FnDecl,
    /// Parameters of the `for<...>` binder.
    pub generic_params: Vec<GenericParamDef>,
    pub header: Header,
}

impl Type {
    /// The id this type names directly, if it is a resolved path.
    pub fn resolved_id(&self) -> Option<&Id> {
        match self {
            Self::ResolvedPath(path) => Some(&path.id),
            _ => None,
        }
    }
}
