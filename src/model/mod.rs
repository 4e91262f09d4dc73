//! Typed model of a rustdoc JSON document.
//!
//! Everything here is plain data: built once by [`crate::decode`], never mutated
//! afterwards. Cross-references between items are [`Id`] keys into
//! [`Crate::index`] / [`Crate::paths`], never pointers.

mod generics;
mod items;
mod krate;
mod types;
pub mod walk;

pub use generics::{
    Abi, FnDecl, GenericBound, GenericParamDef, GenericParamDefKind, Generics, Header,
    TraitBoundModifier, WherePredicate,
};
pub use items::{
    Discriminant, Enum, Function, Impl, Import, ItemEnum, ItemKind, MacroKind, Method, Module,
    OpaqueTy, ProcMacro, Static, Struct, StructType, Trait, TraitAlias, Typedef, Union, Variant,
    Visibility,
};
pub use krate::{
    Crate, CrateId, Deprecation, ExternalCrate, FORMAT_VERSION, Id, Item, ItemSummary, Span,
    encode,
};
pub use types::{
    Constant, DynTrait, FunctionPointer, GenericArg, GenericArgs, Path, PolyTrait, Term, Type,
    TypeBinding, TypeBindingKind,
};
