//! Typed model, decoder and graph resolver for rustdoc JSON documents.
//!
//! ```no_run
//! use rustdoc_graph::{DecodeOptions, Resolver, decode_slice};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bytes = std::fs::read("target/doc/my_crate.json")?;
//! let decoded = decode_slice(&bytes, &DecodeOptions::default())?;
//! let resolver = Resolver::new(&decoded.krate);
//! if let Some(root) = resolver.root() {
//!     for child in resolver.children_of(root) {
//!         println!("{} {:?}", child.kind(), child.name());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod decode;
pub mod error;
pub mod model;
pub mod resolve;
pub mod tracing;

pub use config::{Config, LogFormat};
pub use decode::{DecodeOptions, Decoded, decode, decode_slice, decode_str};
pub use error::{DecodeError, LoadError, RootProblem};
pub use model::{Crate, FORMAT_VERSION, Id, Item, ItemEnum, ItemKind, encode};
pub use resolve::{ChildIterator, ItemPath, ItemRef, Node, PathSuggestion, Resolver};
