//! Item kinds and their payloads.

use super::generics::{FnDecl, GenericBound, Generics, Header};
use super::krate::Id;
use super::types::{Constant, Type};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tag")]
pub enum Visibility {
    /// `pub`
    Public,
    /// No modifier. Also used for items whose visibility is implied by their
    /// parent, such as trait items and enum variants.
    Default,
    /// `pub(crate)`
    Crate,
    /// `pub(in path)`, with `parent` being the module the path resolved to.
    Restricted { parent: Id, path: String },
}

/// Closed set of item kinds as they appear in [`ItemSummary`](super::ItemSummary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ItemKind {
    Module,
    ExternCrate,
    Import,
    Struct,
    StructField,
    Union,
    Enum,
    Variant,
    Function,
    Typedef,
    OpaqueTy,
    Constant,
    Trait,
    TraitAlias,
    Method,
    Impl,
    Static,
    ForeignType,
    Macro,
    ProcAttribute,
    ProcDerive,
    AssocConst,
    AssocType,
    Primitive,
    Keyword,
}

impl ItemKind {
    pub const ALL: [Self; 25] = [
        Self::Module,
        Self::ExternCrate,
        Self::Import,
        Self::Struct,
        Self::StructField,
        Self::Union,
        Self::Enum,
        Self::Variant,
        Self::Function,
        Self::Typedef,
        Self::OpaqueTy,
        Self::Constant,
        Self::Trait,
        Self::TraitAlias,
        Self::Method,
        Self::Impl,
        Self::Static,
        Self::ForeignType,
        Self::Macro,
        Self::ProcAttribute,
        Self::ProcDerive,
        Self::AssocConst,
        Self::AssocType,
        Self::Primitive,
        Self::Keyword,
    ];

    /// The wire name of this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Module => "Module",
            Self::ExternCrate => "ExternCrate",
            Self::Import => "Import",
            Self::Struct => "Struct",
            Self::StructField => "StructField",
            Self::Union => "Union",
            Self::Enum => "Enum",
            Self::Variant => "Variant",
            Self::Function => "Function",
            Self::Typedef => "Typedef",
            Self::OpaqueTy => "OpaqueTy",
            Self::Constant => "Constant",
            Self::Trait => "Trait",
            Self::TraitAlias => "TraitAlias",
            Self::Method => "Method",
            Self::Impl => "Impl",
            Self::Static => "Static",
            Self::ForeignType => "ForeignType",
            Self::Macro => "Macro",
            Self::ProcAttribute => "ProcAttribute",
            Self::ProcDerive => "ProcDerive",
            Self::AssocConst => "AssocConst",
            Self::AssocType => "AssocType",
            Self::Primitive => "Primitive",
            Self::Keyword => "Keyword",
        }
    }

    /// Parses a wire name; `None` for anything outside the closed set.
    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind-specific payload of an [`Item`](super::Item).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tag")]
pub enum ItemEnum {
    Module(Module),
    ExternCrate {
        name: String,
        rename: Option<String>,
    },
    Import(Import),

    Union(Union),
    Struct(Struct),
    StructField {
        #[serde(rename = "type")]
        type_: Type,
    },
    Enum(Enum),
    Variant(Variant),

    Function(Function),

    Trait(Trait),
    TraitAlias(TraitAlias),
    Method(Method),
    Impl(Impl),

    Typedef(Typedef),
    OpaqueTy(OpaqueTy),
    Constant(Constant),

    Static(Static),

    /// `extern { type Foo; }`
    ForeignType,

    /// A `macro_rules!` macro; the payload is its rendered definition.
    Macro {
        #[serde(rename = "macro")]
        macro_: String,
    },
    ProcMacro(ProcMacro),

    PrimitiveType {
        name: String,
    },

    AssocConst {
        #[serde(rename = "type")]
        type_: Type,
        /// e.g. `const X: usize = 5;`
        default: Option<String>,
    },
    AssocType {
        generics: Generics,
        bounds: Vec<GenericBound>,
        /// e.g. `type X = usize;`
        default: Option<Type>,
    },
}

impl ItemEnum {
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Module(_) => ItemKind::Module,
            Self::ExternCrate { .. } => ItemKind::ExternCrate,
            Self::Import(_) => ItemKind::Import,
            Self::Union(_) => ItemKind::Union,
            Self::Struct(_) => ItemKind::Struct,
            Self::StructField { .. } => ItemKind::StructField,
            Self::Enum(_) => ItemKind::Enum,
            Self::Variant(_) => ItemKind::Variant,
            Self::Function(_) => ItemKind::Function,
            Self::Trait(_) => ItemKind::Trait,
            Self::TraitAlias(_) => ItemKind::TraitAlias,
            Self::Method(_) => ItemKind::Method,
            Self::Impl(_) => ItemKind::Impl,
            Self::Typedef(_) => ItemKind::Typedef,
            Self::OpaqueTy(_) => ItemKind::OpaqueTy,
            Self::Constant(_) => ItemKind::Constant,
            Self::Static(_) => ItemKind::Static,
            Self::ForeignType => ItemKind::ForeignType,
            Self::Macro { .. }
            | Self::ProcMacro(ProcMacro {
                kind: MacroKind::Bang,
                ..
            }) => ItemKind::Macro,
            Self::ProcMacro(ProcMacro {
                kind: MacroKind::Attr,
                ..
            }) => ItemKind::ProcAttribute,
            Self::ProcMacro(ProcMacro {
                kind: MacroKind::Derive,
                ..
            }) => ItemKind::ProcDerive,
            Self::PrimitiveType { .. } => ItemKind::Primitive,
            Self::AssocConst { .. } => ItemKind::AssocConst,
            Self::AssocType { .. } => ItemKind::AssocType,
        }
    }

    /// The generics declared on this item, for kinds that can have them.
    pub const fn generics(&self) -> Option<&Generics> {
        match self {
            Self::Union(Union { generics, .. })
            | Self::Struct(Struct { generics, .. })
            | Self::Enum(Enum { generics, .. })
            | Self::Function(Function { generics, .. })
            | Self::Method(Method { generics, .. })
            | Self::Trait(Trait { generics, .. })
            | Self::TraitAlias(TraitAlias { generics, .. })
            | Self::Impl(Impl { generics, .. })
            | Self::Typedef(Typedef { generics, .. })
            | Self::OpaqueTy(OpaqueTy { generics, .. })
            | Self::AssocType { generics, .. } => Some(generics),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Module {
    pub is_crate: bool,
    pub items: Vec<Id>,
    /// Set when the module itself is private but reachable through a re-export;
    /// `items` may then be incomplete.
    pub is_stripped: bool,
}

/// A `use` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Import {
    /// The full path being imported.
    pub source: String,
    /// The name the item is imported as (last segment of `source` unless renamed).
    pub name: String,
    /// `None` when the target could not be resolved, e.g. a private item
    /// of another crate.
    pub id: Option<Id>,
    /// `use source::*;`
    pub glob: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Union {
    pub generics: Generics,
    pub fields_stripped: bool,
    pub fields: Vec<Id>,
    pub impls: Vec<Id>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StructType {
    /// `struct A { x: u8 }`
    Plain,
    /// `struct A(u8);`
    Tuple,
    /// `struct A;`
    Unit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Struct {
    pub struct_type: StructType,
    pub generics: Generics,
    /// Private fields exist but are not listed in `fields`.
    pub fields_stripped: bool,
    pub fields: Vec<Id>,
    pub impls: Vec<Id>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enum {
    pub generics: Generics,
    pub variants_stripped: bool,
    pub variants: Vec<Id>,
    pub impls: Vec<Id>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variant {
    pub variant_kind: StructType,
    /// `StructField` ids; empty for unit variants.
    pub fields: Vec<Id>,
    pub fields_stripped: bool,
    pub discriminant: Option<Discriminant>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Discriminant {
    /// As written in source, e.g. `1 << 3`.
    pub expr: String,
    /// Evaluated value, e.g. `8`.
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Function {
    pub decl: FnDecl,
    pub generics: Generics,
    pub header: Header,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Method {
    pub decl: FnDecl,
    pub generics: Generics,
    pub header: Header,
    /// `false` for required trait methods.
    pub has_body: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trait {
    pub is_auto: bool,
    pub is_unsafe: bool,
    pub items: Vec<Id>,
    pub generics: Generics,
    /// Supertraits.
    pub bounds: Vec<GenericBound>,
    /// Impl blocks of this trait known to the document.
    pub implementations: Vec<Id>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraitAlias {
    pub generics: Generics,
    pub params: Vec<GenericBound>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Impl {
    pub is_unsafe: bool,
    pub generics: Generics,
    /// Names of trait methods with default bodies that this impl does not override.
    pub provided_trait_methods: BTreeSet<String>,
    /// `None` for inherent impls.
    #[serde(rename = "trait")]
    pub trait_: Option<Type>,
    #[serde(rename = "for")]
    pub for_: Type,
    pub items: Vec<Id>,
    /// `impl !Trait for T`
    pub negative: bool,
    /// Auto-trait impls computed by rustdoc rather than written in source.
    pub synthetic: bool,
    /// For blanket impls, the type being implemented over (the `T` in `impl<T> Trait for T`).
    pub blanket_impl: Option<Type>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Typedef {
    #[serde(rename = "type")]
    pub type_: Type,
    pub generics: Generics,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpaqueTy {
    pub bounds: Vec<GenericBound>,
    pub generics: Generics,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Static {
    #[serde(rename = "type")]
    pub type_: Type,
    pub is_mutable: bool,
    pub expr: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcMacro {
    pub kind: MacroKind,
    /// Helper attributes a derive macro registers, e.g. `serde` for `Serialize`.
    pub helpers: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MacroKind {
    /// `foo!()`
    Bang,
    /// `#[foo]`
    Attr,
    /// `#[derive(Foo)]`
    Derive,
}
